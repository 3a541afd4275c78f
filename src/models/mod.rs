pub mod filters;
pub mod responses;
