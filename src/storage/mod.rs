//! Persistence gateway.
//!
//! The only code that reads or writes the `locations` table. Every public
//! operation issues its statements directly against the pool; there is no
//! cache in front of it.

pub mod filters;
pub mod insert;
pub mod migrations;
pub mod pool;
pub mod query;
mod record;
#[cfg(test)]
pub(crate) mod test_helpers;

// Re-export commonly used items
pub use filters::SearchFilters;
pub use insert::insert_location;
pub use migrations::run_migrations;
pub use pool::{init_db_pool_with_path, DbPool};
pub use query::{list_locations, location_stats, reset_locations, search_locations};
