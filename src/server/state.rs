//! Shared handler state.

use std::sync::Arc;

use crate::extract::SystemInfoProvider;
use crate::storage::DbPool;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub system_info: Arc<dyn SystemInfoProvider>,
}

impl AppState {
    pub fn new(pool: DbPool, system_info: Arc<dyn SystemInfoProvider>) -> Self {
        Self { pool, system_info }
    }
}
