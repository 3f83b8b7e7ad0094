use std::time::Duration;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::StatusResponse;

/// Failure talking to one of the upstream wheretheiss.at endpoints
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Upstream answered with anything other than 200
    #[error("upstream returned status {0}")]
    UpstreamStatus(u16),
}

/// Failure of one collect run, tagged with the stage that failed
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Position fetch failed: {0}")]
    PositionFetch(#[source] FetchError),

    #[error("Timezone lookup failed: {0}")]
    TimezoneFetch(#[source] FetchError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database write timed out after {0:?}")]
    DatabaseTimeout(Duration),
}

impl AppError {
    /// Short name of the failing stage, used as a log field
    pub fn stage(&self) -> &'static str {
        match self {
            AppError::PositionFetch(_) => "position",
            AppError::TimezoneFetch(_) => "timezone",
            AppError::Database(_) | AppError::DatabaseTimeout(_) => "persistence",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::PositionFetch(ref e) => {
                tracing::error!(stage = self.stage(), "Error while getting ISS data: {}", e);
            }
            AppError::TimezoneFetch(ref e) => {
                tracing::error!(
                    stage = self.stage(),
                    "Error while getting timezone from location: {}",
                    e
                );
            }
            AppError::Database(ref e) => {
                tracing::error!(stage = self.stage(), "Error while saving data: {:?}", e);
            }
            AppError::DatabaseTimeout(timeout) => {
                tracing::error!(
                    stage = self.stage(),
                    "Error while saving data: timed out after {:?}",
                    timeout
                );
            }
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(StatusResponse::error()),
        )
            .into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
