use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::validation::ValidationErrors;

#[derive(Deserialize, Serialize, Debug)]
pub struct HealthResponse {
    pub service: String,
    pub status: String,
}

/// Body of a 422 response, one message list per failing field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationErrorResponse {
    pub message: String,
    pub errors: BTreeMap<String, Vec<String>>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            message: "The given data was invalid.".to_string(),
            errors: errors.into_inner(),
        }
    }
}
