use axum::response::Json;

use crate::models::responses::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "bestsellers-service".to_string(),
        status: "ok".to_string(),
    })
}
