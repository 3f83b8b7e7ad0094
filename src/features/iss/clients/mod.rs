mod wheretheiss_client;

use async_trait::async_trait;

use crate::core::error::FetchError;
use crate::features::iss::models::{PositionRecord, TimezoneRecord};

pub use wheretheiss_client::WhereTheIssClient;

/// Source of the tracked satellite's current position
#[async_trait]
pub trait PositionSource: Send + Sync {
    async fn current_position(&self) -> Result<PositionRecord, FetchError>;
}

/// Resolves timezone and country metadata for a coordinate pair
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimezoneRecord, FetchError>;
}
