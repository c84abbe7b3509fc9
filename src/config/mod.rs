//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, coordinate ranges, response strings)
//! - HTTP header name constants
//! - CLI/environment option types and parsing

mod constants;
mod headers;
mod types;

// Re-export all constants
pub use constants::*;
pub use headers::*;
pub use types::{Config, LogFormat, LogLevel};
