use std::collections::BTreeMap;

use crate::models::filters::SearchFilters;

/// Shape-only ISBN check: 10 or 13 ASCII digits, no checksum.
pub fn is_valid_isbn(value: &str) -> bool {
    matches!(value.len(), 10 | 13) && value.bytes().all(|b| b.is_ascii_digit())
}

/// Accumulated per-field validation failures.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ValidationErrors {
    errors: BTreeMap<String, Vec<String>>,
}

impl ValidationErrors {
    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    pub fn into_inner(self) -> BTreeMap<String, Vec<String>> {
        self.errors
    }
}

/// Validate raw query pairs into `SearchFilters`.
///
/// All rules are checked independently and failures accumulate; any failure
/// rejects the whole request. Unknown keys are ignored. ISBNs arrive either
/// as repeated `isbn[]` (array style) or repeated `isbn` keys, in request
/// order. For `author` and `title` a repeated key keeps the last value.
pub fn validate_params(pairs: &[(String, String)]) -> Result<SearchFilters, ValidationErrors> {
    let mut filters = SearchFilters::default();
    let mut errors = ValidationErrors::default();

    for (key, value) in pairs {
        match key.as_str() {
            "author" => filters.author = Some(value.clone()),
            "title" => filters.title = Some(value.clone()),
            "isbn" | "isbn[]" => {
                if is_valid_isbn(value) {
                    filters.isbns.push(value.clone());
                } else {
                    errors.add(
                        "isbn",
                        format!("The isbn '{}' must be a 10 or 13 digit numeric string.", value),
                    );
                }
            }
            "offset" => match value.parse::<i64>() {
                // n is non-negative here, so widening to u64 is lossless.
                Ok(n) if n >= 0 && n % 20 == 0 => filters.offset = Some(n as u64),
                Ok(_) => errors.add("offset", "The offset must be a non-negative multiple of 20."),
                Err(_) => errors.add("offset", "The offset must be an integer."),
            },
            _ => {}
        }
    }

    if errors.is_empty() {
        Ok(filters)
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn isbn_accepts_only_10_or_13_digit_strings() {
        assert!(is_valid_isbn("1234567890"));
        assert!(is_valid_isbn("1234567890123"));
        assert!(is_valid_isbn("0061374229"));

        assert!(!is_valid_isbn(""));
        assert!(!is_valid_isbn("97800611")); // 8 digits
        assert!(!is_valid_isbn("123456789012")); // 12 digits
        assert!(!is_valid_isbn("12345678901234")); // 14 digits
    }

    #[test]
    fn isbn_rejects_non_digits_regardless_of_length() {
        assert!(!is_valid_isbn("123456789X"));
        assert!(!is_valid_isbn("12345-67890"));
        assert!(!is_valid_isbn("abcdefghij"));
        assert!(!is_valid_isbn("123456789012 "));
    }

    #[test]
    fn empty_params_validate_to_empty_filters() {
        let filters = validate_params(&[]).unwrap();
        assert_eq!(filters, SearchFilters::default());
    }

    #[test]
    fn author_and_title_pass_through() {
        let filters =
            validate_params(&pairs(&[("author", "Martin"), ("title", "Bonk")])).unwrap();
        assert_eq!(filters.author.as_deref(), Some("Martin"));
        assert_eq!(filters.title.as_deref(), Some("Bonk"));
    }

    #[test]
    fn repeated_author_keeps_last_value() {
        let filters =
            validate_params(&pairs(&[("author", "first"), ("author", "second")])).unwrap();
        assert_eq!(filters.author.as_deref(), Some("second"));
    }

    #[test]
    fn isbns_preserve_request_order() {
        let filters = validate_params(&pairs(&[
            ("isbn[]", "9780446579933"),
            ("isbn[]", "0061374229"),
        ]))
        .unwrap();
        assert_eq!(filters.isbns, vec!["9780446579933", "0061374229"]);
    }

    #[test]
    fn plain_isbn_key_is_accepted_too() {
        let filters = validate_params(&pairs(&[("isbn", "1234567890")])).unwrap();
        assert_eq!(filters.isbns, vec!["1234567890"]);
    }

    #[test]
    fn bad_isbn_rejects_the_request() {
        let errors = validate_params(&pairs(&[("isbn[]", "97800611")])).unwrap_err();
        assert!(errors.contains("isbn"));
    }

    #[test]
    fn offset_must_be_a_non_negative_multiple_of_20() {
        assert_eq!(
            validate_params(&pairs(&[("offset", "0")])).unwrap().offset,
            Some(0)
        );
        assert_eq!(
            validate_params(&pairs(&[("offset", "40")])).unwrap().offset,
            Some(40)
        );

        assert_eq!(
            validate_params(&pairs(&[("offset", "4294967300")]))
                .unwrap()
                .offset,
            Some(4294967300)
        );

        assert!(validate_params(&pairs(&[("offset", "41")])).is_err());
        assert!(validate_params(&pairs(&[("offset", "-20")])).is_err());
        assert!(validate_params(&pairs(&[("offset", "ten")])).is_err());
    }

    #[test]
    fn failures_accumulate_across_fields() {
        let errors = validate_params(&pairs(&[
            ("isbn[]", "123"),
            ("isbn[]", "123456789X"),
            ("offset", "7"),
        ]))
        .unwrap_err();
        assert!(errors.contains("isbn"));
        assert!(errors.contains("offset"));
        assert_eq!(errors.into_inner().get("isbn").unwrap().len(), 2);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let filters = validate_params(&pairs(&[("list", "hardcover-fiction")])).unwrap();
        assert_eq!(filters, SearchFilters::default());
    }
}
