//! Shared test helpers for storage module tests.
//!
//! This module provides common utilities for database setup and test data creation
//! used across storage module tests.

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Row, SqlitePool};

use crate::storage::run_migrations;

/// Creates a test database pool with migrations applied.
/// Uses an in-memory database for fast test execution. The pool holds a single
/// connection because every `:memory:` connection is a separate database.
pub async fn create_test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("Failed to create test database pool");
    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    pool
}

/// Inserts a minimal location row with an explicit timestamp and returns its ID.
/// `timestamp` uses the column's `YYYY-MM-DD HH:MM:SS` layout.
pub async fn insert_location_at(
    pool: &SqlitePool,
    latitude: f64,
    longitude: f64,
    ip_address: Option<&str>,
    timestamp: &str,
) -> i64 {
    sqlx::query(
        "INSERT INTO locations (latitude, longitude, ip_address, timestamp)
         VALUES (?, ?, ?, ?)
         RETURNING id",
    )
    .bind(latitude)
    .bind(longitude)
    .bind(ip_address)
    .bind(timestamp)
    .fetch_one(pool)
    .await
    .expect("Failed to insert test location")
    .get::<i64, _>(0)
}
