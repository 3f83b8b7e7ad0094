use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::iss::clients::{GeoResolver, PositionSource};
use crate::features::iss::models::{IssData, NewIssData};
use crate::features::iss::services::IssDataStore;

/// Runs one collection: position fetch, timezone lookup, insert.
///
/// Stages run strictly in order and the first failure aborts the run, so a
/// failed fetch never reaches the database.
pub struct CollectorService {
    positions: Arc<dyn PositionSource>,
    geo: Arc<dyn GeoResolver>,
    store: Arc<dyn IssDataStore>,
}

impl CollectorService {
    pub fn new(
        positions: Arc<dyn PositionSource>,
        geo: Arc<dyn GeoResolver>,
        store: Arc<dyn IssDataStore>,
    ) -> Self {
        Self {
            positions,
            geo,
            store,
        }
    }

    pub async fn collect(&self) -> Result<IssData> {
        let position = self
            .positions
            .current_position()
            .await
            .map_err(AppError::PositionFetch)?;

        let timezone = self
            .geo
            .resolve(position.latitude, position.longitude)
            .await
            .map_err(AppError::TimezoneFetch)?;

        let data = NewIssData::from_records(position, timezone);
        self.store.insert(&data).await
    }
}
