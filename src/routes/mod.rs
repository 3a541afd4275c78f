pub mod best_sellers;
pub mod health;
