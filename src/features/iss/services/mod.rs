mod collector_service;
mod iss_data_service;

pub use collector_service::CollectorService;
pub use iss_data_service::{IssDataService, IssDataStore};
