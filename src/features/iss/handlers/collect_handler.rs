use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::core::error::Result;
use crate::features::iss::services::CollectorService;
use crate::shared::types::StatusResponse;

/// Fetch the current ISS position, resolve its timezone and store the sample
///
/// The request body and query string are ignored.
#[utoipa::path(
    post,
    path = "/api/iss/collect",
    responses(
        (status = 200, description = "Sample stored", body = StatusResponse,
            example = json!({"status": "ok"})),
        (status = 500, description = "Upstream or database failure", body = StatusResponse,
            example = json!({"status": "error"}))
    ),
    tag = "iss"
)]
pub async fn collect_iss_data(
    State(service): State<Arc<CollectorService>>,
) -> Result<(StatusCode, Json<StatusResponse>)> {
    let stored = service.collect().await?;
    tracing::debug!("Collect run finished with row {}", stored.id);
    Ok((StatusCode::OK, Json(StatusResponse::ok())))
}
