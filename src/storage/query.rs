//! Location reads: listing, search, aggregates, and the full reset.

use log::warn;
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use crate::error_handling::DatabaseError;
use crate::models::{LocationRecord, LocationStats};
use crate::storage::filters::SearchFilters;
use crate::storage::record::{row_to_record, LOCATION_COLUMNS, NEWEST_FIRST};

/// Returns every stored report, newest first.
///
/// No paging.
pub async fn list_locations(pool: &SqlitePool) -> Result<Vec<LocationRecord>, DatabaseError> {
    search_locations(pool, &SearchFilters::default()).await
}

/// Returns the reports matching every present filter, newest first.
pub async fn search_locations(
    pool: &SqlitePool,
    filters: &SearchFilters,
) -> Result<Vec<LocationRecord>, DatabaseError> {
    let mut builder: QueryBuilder<Sqlite> =
        QueryBuilder::new(format!("SELECT {LOCATION_COLUMNS} FROM locations WHERE 1=1"));
    filters.push_predicates(&mut builder);
    builder.push(NEWEST_FIRST);

    let rows = builder
        .build()
        .fetch_all(pool)
        .await
        .map_err(DatabaseError::SqlError)?;

    rows.iter().map(row_to_record).collect()
}

/// Computes the aggregate counts.
///
/// Five independent queries with no shared snapshot; see [`LocationStats`].
pub async fn location_stats(pool: &SqlitePool) -> Result<LocationStats, DatabaseError> {
    Ok(LocationStats {
        total: count(pool, "SELECT COUNT(*) FROM locations").await?,
        today: count(
            pool,
            "SELECT COUNT(*) FROM locations WHERE DATE(timestamp) = DATE('now')",
        )
        .await?,
        this_week: count(
            pool,
            "SELECT COUNT(*) FROM locations WHERE timestamp >= datetime('now', '-7 days')",
        )
        .await?,
        unique_ips: count(pool, "SELECT COUNT(DISTINCT ip_address) FROM locations").await?,
        unique_user_agents: count(pool, "SELECT COUNT(DISTINCT user_agent) FROM locations")
            .await?,
    })
}

async fn count(pool: &SqlitePool, query: &str) -> Result<i64, DatabaseError> {
    sqlx::query_scalar::<_, i64>(query)
        .fetch_one(pool)
        .await
        .map_err(DatabaseError::SqlError)
}

/// Deletes every stored report and returns how many were removed.
///
/// Irreversible. Ids are not reused afterwards.
pub async fn reset_locations(pool: &SqlitePool) -> Result<u64, DatabaseError> {
    let removed = sqlx::query("DELETE FROM locations")
        .execute(pool)
        .await
        .map_err(DatabaseError::SqlError)?
        .rows_affected();
    warn!("Removed all {removed} stored location(s)");
    Ok(removed)
}
