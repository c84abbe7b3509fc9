//! location_api library: geolocation report collection over HTTP
//!
//! This library accepts location reports (latitude/longitude plus optional
//! browser, network and free-form metadata), validates and normalizes them,
//! stores them in SQLite, and serves listing, statistics, search and reset
//! endpoints over the stored data.
//!
//! # Example
//!
//! ```no_run
//! use location_api::{run_server, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let config = Config {
//!     port: 8080,
//!     db_path: std::path::PathBuf::from("./locations.db"),
//!     ..Default::default()
//! };
//!
//! run_server(config).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod error_handling;
pub mod extract;
pub mod initialization;
pub mod models;
pub mod server;
pub mod storage;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use extract::{normalize, FixedSystemInfo, HostSystemInfo, LocationSource, SystemInfoProvider};
pub use models::{LocationDraft, LocationRecord, LocationStats};
pub use server::{build_router, run_server, AppState};
pub use storage::{init_db_pool_with_path, run_migrations, DbPool};
