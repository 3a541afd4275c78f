use axum::{
    extract::{RawQuery, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use thiserror::Error;
use tracing::{error, info};

use crate::models::responses::ValidationErrorResponse;
use crate::services::upstream::fetch_best_sellers;
use crate::validation::{validate_params, ValidationErrors};
use crate::AppState;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request validation failed")]
    Validation(ValidationErrors),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ValidationErrorResponse::from(errors)),
            )
                .into_response(),
            ApiError::Upstream(e) => {
                error!("Upstream request failed: {}", e);
                (
                    StatusCode::BAD_GATEWAY,
                    Json(serde_json::json!({ "message": "upstream request failed" })),
                )
                    .into_response()
            }
        }
    }
}

/// `GET /api/1/nyt/best-sellers`: validate the query parameters, forward them
/// with the configured API key, and relay the upstream status and JSON body
/// verbatim. Validation failures answer 422 without touching the upstream.
pub async fn best_sellers(
    State(state): State<AppState>,
    RawQuery(query): RawQuery,
) -> Result<Response, ApiError> {
    let pairs = parse_query_pairs(query.as_deref().unwrap_or(""));
    let filters = validate_params(&pairs).map_err(ApiError::Validation)?;

    info!("Proxying best sellers lookup: {:?}", filters);

    let upstream = fetch_best_sellers(&state.client, &state.config, &filters).await?;

    // Relay whatever the upstream said, 2xx or not.
    let status = StatusCode::from_u16(upstream.status).unwrap_or(StatusCode::BAD_GATEWAY);
    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        upstream.body,
    )
        .into_response())
}

// Decoded pairs in request order. serde-based extractors cannot collect the
// array-style `isbn[]` keys, so the raw query string is parsed directly.
fn parse_query_pairs(raw: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(raw.as_bytes())
        .into_owned()
        .collect()
}
