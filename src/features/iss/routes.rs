use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::iss::handlers;
use crate::features::iss::services::CollectorService;
use crate::shared::constants::COLLECT_PATH;

/// Create routes for the ISS collection feature
///
/// The collector takes no input, so GET and POST are wired to the same handler.
pub fn routes(service: Arc<CollectorService>) -> Router {
    Router::new()
        .route(
            COLLECT_PATH,
            get(handlers::collect_iss_data).post(handlers::collect_iss_data),
        )
        .with_state(service)
}
