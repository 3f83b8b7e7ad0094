use chrono::{DateTime, Utc};
use sqlx::FromRow;

use super::{PositionRecord, TimezoneRecord};

/// Database model for one stored ISS sample
#[derive(Debug, Clone, FromRow)]
#[cfg_attr(not(test), allow(dead_code))] // only id and log fields are read outside tests
pub struct IssData {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub visibility: String,
    pub footprint: f64,
    pub timestamp: i64,
    pub daynum: f64,
    pub solar_lat: f64,
    pub solar_lon: f64,
    pub units: String,
    pub timezone_id: String,
    pub offset: i64,
    pub country_code: String,
    pub created_at: DateTime<Utc>,
}

/// Data for inserting a new ISS sample
#[derive(Debug, Clone, PartialEq)]
pub struct NewIssData {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
    pub velocity: f64,
    pub visibility: String,
    pub footprint: f64,
    pub timestamp: i64,
    pub daynum: f64,
    pub solar_lat: f64,
    pub solar_lon: f64,
    pub units: String,
    pub timezone_id: String,
    pub offset: i64,
    pub country_code: String,
}

impl NewIssData {
    /// Merge a position fix with the timezone resolved for it.
    ///
    /// Coordinates always come from the position record; the timezone record's
    /// textual echo and map URL are dropped.
    pub fn from_records(position: PositionRecord, timezone: TimezoneRecord) -> Self {
        Self {
            name: position.name,
            latitude: position.latitude,
            longitude: position.longitude,
            altitude: position.altitude,
            velocity: position.velocity,
            visibility: position.visibility,
            footprint: position.footprint,
            timestamp: position.timestamp,
            daynum: position.daynum,
            solar_lat: position.solar_lat,
            solar_lon: position.solar_lon,
            units: position.units,
            timezone_id: timezone.timezone_id,
            offset: timezone.offset,
            country_code: timezone.country_code,
        }
    }
}
