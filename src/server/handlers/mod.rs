//! HTTP handlers.

mod admin;
mod index;
mod locations;
mod reset;
mod search;
mod stats;

pub use admin::send_location_via_query;
pub use index::{not_found, service_info};
pub use locations::{create_location, list_all_locations};
pub use reset::reset_all_locations;
pub use search::search;
pub use stats::stats;
