//! Configuration constants.
//!
//! Defaults for the listener and database, plus the fixed strings that appear
//! in API responses.

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;
/// Default SQLite database file
pub const DB_PATH: &str = "./locations.db";

/// Valid latitude range in degrees (inclusive).
pub const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
/// Valid longitude range in degrees (inclusive).
pub const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Message returned with every storage failure. The underlying error is only logged.
pub const STORAGE_ERROR_MESSAGE: &str = "Failed to access location storage";

/// Example request shown when the query-form endpoint is called without coordinates.
pub const ADMIN_USAGE_EXAMPLE: &str =
    "GET /admin/send-location?latitude=37.7749&longitude=-122.4194&additionalData=accuracy:10,altitude:100";

/// Service name reported by `GET /`.
pub const SERVICE_NAME: &str = "Location API Server";
