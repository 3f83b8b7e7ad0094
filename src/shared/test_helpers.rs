use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::core::error::{AppError, FetchError, Result};
use crate::features::iss::clients::{GeoResolver, PositionSource};
use crate::features::iss::models::{IssData, NewIssData, PositionRecord, TimezoneRecord};
use crate::features::iss::services::IssDataStore;

pub fn sample_position() -> PositionRecord {
    PositionRecord {
        name: "iss".to_string(),
        id: 25544,
        latitude: 50.11496269845,
        longitude: 118.07900427317,
        altitude: 408.05526028199,
        velocity: 27635.971970874,
        visibility: "daylight".to_string(),
        footprint: 4446.1877699772,
        timestamp: 1364069476,
        daynum: 2456375.3411574,
        solar_lat: 1.3327003598631,
        solar_lon: 238.78610691196,
        units: "kilometers".to_string(),
    }
}

pub fn position_at(latitude: f64, longitude: f64) -> PositionRecord {
    PositionRecord {
        latitude,
        longitude,
        ..sample_position()
    }
}

pub fn sample_timezone() -> TimezoneRecord {
    TimezoneRecord {
        latitude: "50.114963".to_string(),
        longitude: "118.079004".to_string(),
        timezone_id: "Asia/Shanghai".to_string(),
        offset: 8,
        country_code: "CN".to_string(),
        map_url: "https://maps.google.com/maps?q=50.114963,118.079004&z=4".to_string(),
    }
}

pub fn paris_timezone() -> TimezoneRecord {
    TimezoneRecord {
        latitude: "10.500000".to_string(),
        longitude: "20.500000".to_string(),
        timezone_id: "Europe/Paris".to_string(),
        offset: 3600,
        country_code: "FR".to_string(),
        map_url: "https://maps.google.com/maps?q=10.5,20.5&z=4".to_string(),
    }
}

/// Position source returning a canned record or upstream status
pub struct FakePositionSource {
    response: std::result::Result<PositionRecord, u16>,
    calls: AtomicUsize,
}

impl FakePositionSource {
    pub fn returning(position: PositionRecord) -> Self {
        Self {
            response: Ok(position),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PositionSource for FakePositionSource {
    async fn current_position(&self) -> std::result::Result<PositionRecord, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.response
            .clone()
            .map_err(FetchError::UpstreamStatus)
    }
}

/// Geo resolver returning a canned record and remembering the coordinates
pub struct FakeGeoResolver {
    response: std::result::Result<TimezoneRecord, u16>,
    requested: Mutex<Vec<(f64, f64)>>,
}

impl FakeGeoResolver {
    pub fn returning(timezone: TimezoneRecord) -> Self {
        Self {
            response: Ok(timezone),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            response: Err(status),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.requested.lock().unwrap().len()
    }

    pub fn requested(&self) -> Vec<(f64, f64)> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl GeoResolver for FakeGeoResolver {
    async fn resolve(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> std::result::Result<TimezoneRecord, FetchError> {
        self.requested.lock().unwrap().push((latitude, longitude));
        self.response
            .clone()
            .map_err(FetchError::UpstreamStatus)
    }
}

/// In-memory store assigning sequential ids
pub struct FakeStore {
    fail: bool,
    next_id: AtomicI64,
    calls: AtomicUsize,
    rows: Mutex<Vec<NewIssData>>,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            fail: false,
            next_id: AtomicI64::new(1),
            calls: AtomicUsize::new(0),
            rows: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn rows(&self) -> Vec<NewIssData> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl IssDataStore for FakeStore {
    async fn insert(&self, data: &NewIssData) -> Result<IssData> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AppError::Database(sqlx::Error::PoolTimedOut));
        }

        self.rows.lock().unwrap().push(data.clone());
        let data = data.clone();
        Ok(IssData {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            name: data.name,
            latitude: data.latitude,
            longitude: data.longitude,
            altitude: data.altitude,
            velocity: data.velocity,
            visibility: data.visibility,
            footprint: data.footprint,
            timestamp: data.timestamp,
            daynum: data.daynum,
            solar_lat: data.solar_lat,
            solar_lon: data.solar_lon,
            units: data.units,
            timezone_id: data.timezone_id,
            offset: data.offset,
            country_code: data.country_code,
            created_at: Utc::now(),
        })
    }
}
