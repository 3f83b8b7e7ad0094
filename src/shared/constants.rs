/// User agent sent with every upstream request
pub const USER_AGENT: &str = concat!("IssTracker/", env!("CARGO_PKG_VERSION"));

// =============================================================================
// ROUTES
// =============================================================================

/// Path of the collect endpoint
pub const COLLECT_PATH: &str = "/api/iss/collect";

/// Path of the liveness probe
pub const HEALTH_PATH: &str = "/health";
