//! ISS position collection feature.
//!
//! Every call to the collect endpoint runs one pipeline:
//!
//! 1. `GET /v1/satellites/25544` on wheretheiss.at for the current position
//! 2. `GET /v1/coordinates/{lat},{lon}` for the timezone under that position
//! 3. `INSERT` of the merged sample into `iss_data`
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET, POST | `/api/iss/collect` | Collect and store one sample |

pub mod clients;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use clients::WhereTheIssClient;
pub use services::{CollectorService, IssDataService};
