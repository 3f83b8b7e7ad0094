use serde::Serialize;
use utoipa::ToSchema;

/// Outcome reported by the collect endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Error,
}

/// Fixed-shape body returned by the collect endpoint: `{"status":"ok"}` or
/// `{"status":"error"}`. Never carries error details.
///
/// Serialized compactly, without the space after the colon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct StatusResponse {
    pub status: Status,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { status: Status::Ok }
    }

    pub fn error() -> Self {
        Self {
            status: Status::Error,
        }
    }
}
