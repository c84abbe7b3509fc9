//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error binding the HTTP listener.
    #[error("Failed to bind HTTP listener to {addr}: {source}")]
    BindError {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// Error types for database operations.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Error creating the database file.
    #[error("Database file creation error: {0}")]
    FileCreationError(String),

    /// SQL execution error.
    #[error("SQL error: {0}")]
    SqlError(#[from] sqlx::Error),

    /// Schema migration error.
    #[error("Migration error: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),

    /// A free-form JSON column could not be serialized or deserialized.
    #[error("JSON column error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Rejections produced while turning an inbound request into a location draft
/// or a set of search filters.
///
/// Every variant is a client mistake and maps to HTTP 400.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Latitude or longitude was not supplied.
    #[error("Missing required fields: latitude and longitude are required")]
    MissingCoordinates,

    /// Latitude was non-numeric, non-finite, or outside [-90, 90].
    #[error("Invalid latitude. Must be a number between -90 and 90")]
    InvalidLatitude,

    /// Longitude was non-numeric, non-finite, or outside [-180, 180].
    #[error("Invalid longitude. Must be a number between -180 and 180")]
    InvalidLongitude,

    /// The body or query string could not be decoded into the expected shape.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// A search parameter could not be interpreted.
    #[error("Invalid search filter {field}: {value:?}")]
    InvalidFilter { field: &'static str, value: String },
}
