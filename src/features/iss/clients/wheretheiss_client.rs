use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::{GeoResolver, PositionSource};
use crate::core::config::UpstreamConfig;
use crate::core::error::FetchError;
use crate::features::iss::models::{PositionRecord, TimezoneRecord};
use crate::shared::constants::USER_AGENT;
use crate::shared::lenient::decode_body;

/// Path segment for the coordinates endpoint.
///
/// Both values use fixed-point notation with six fractional digits, so
/// `(10.5, 20.5)` becomes `coordinates/10.500000,20.500000`.
pub fn coordinates_path(latitude: f64, longitude: f64) -> String {
    format!("coordinates/{:.6},{:.6}", latitude, longitude)
}

/// Client for the wheretheiss.at REST API
pub struct WhereTheIssClient {
    client: reqwest::Client,
    base_url: String,
    satellite_id: u32,
}

impl WhereTheIssClient {
    pub fn new(config: &UpstreamConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            satellite_id: config.satellite_id,
        })
    }

    fn satellite_url(&self) -> String {
        format!("{}/satellites/{}", self.base_url, self.satellite_id)
    }

    fn coordinates_url(&self, latitude: f64, longitude: f64) -> String {
        format!("{}/{}", self.base_url, coordinates_path(latitude, longitude))
    }

    /// GET `url`, require a 200 and decode the body leniently
    async fn get_json<T>(&self, url: &str) -> Result<T, FetchError>
    where
        T: DeserializeOwned + Default,
    {
        tracing::debug!("Fetching {}", url);

        let response = self.client.get(url).send().await.map_err(|e| {
            tracing::warn!("Request to {} failed: {:?}", url, e);
            FetchError::Transport(e)
        })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            tracing::warn!("{} returned status: {}", url, status);
            return Err(FetchError::UpstreamStatus(status.as_u16()));
        }

        let body = response.bytes().await?;

        Ok(decode_body(&body))
    }
}

#[async_trait]
impl PositionSource for WhereTheIssClient {
    async fn current_position(&self) -> Result<PositionRecord, FetchError> {
        self.get_json(&self.satellite_url()).await
    }
}

#[async_trait]
impl GeoResolver for WhereTheIssClient {
    async fn resolve(&self, latitude: f64, longitude: f64) -> Result<TimezoneRecord, FetchError> {
        self.get_json(&self.coordinates_url(latitude, longitude))
            .await
    }
}
