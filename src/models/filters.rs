/// Validated request parameters for a best sellers lookup.
///
/// Only ever constructed by `validation::validate_params`, so every ISBN in
/// `isbns` is a 10 or 13 digit numeric string and `offset` is a non-negative
/// multiple of 20.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct SearchFilters {
    pub author: Option<String>,
    pub title: Option<String>,
    pub isbns: Vec<String>,
    pub offset: Option<u64>,
}
