use serde::Deserialize;

use crate::shared::lenient::or_default;

/// Satellite telemetry as returned by `GET /satellites/{id}`.
///
/// Decoded leniently: fields the upstream omits or mistypes stay at zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PositionRecord {
    #[serde(deserialize_with = "or_default")]
    pub name: String,
    #[serde(deserialize_with = "or_default")]
    pub id: i64,
    #[serde(deserialize_with = "or_default")]
    pub latitude: f64,
    #[serde(deserialize_with = "or_default")]
    pub longitude: f64,
    #[serde(deserialize_with = "or_default")]
    pub altitude: f64,
    #[serde(deserialize_with = "or_default")]
    pub velocity: f64,
    /// `daylight` or `eclipsed`
    #[serde(deserialize_with = "or_default")]
    pub visibility: String,
    #[serde(deserialize_with = "or_default")]
    pub footprint: f64,
    /// Unix seconds
    #[serde(deserialize_with = "or_default")]
    pub timestamp: i64,
    /// Julian day number
    #[serde(deserialize_with = "or_default")]
    pub daynum: f64,
    #[serde(deserialize_with = "or_default")]
    pub solar_lat: f64,
    #[serde(deserialize_with = "or_default")]
    pub solar_lon: f64,
    #[serde(deserialize_with = "or_default")]
    pub units: String,
}
