//! Shared test utilities for the teabot store.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    core::{pot_maker, state},
    entities,
    errors::Result,
};
use chrono::{DateTime, Utc};
use sea_orm::DatabaseConnection;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test status reading with sensible defaults.
///
/// # Arguments
/// * `db` - Database connection
/// * `label` - Status label for the reading
/// * `timestamp` - When the reading was taken
///
/// # Defaults
/// * `num_of_cups`: 3
/// * `weight`: -1.0 (no scale reading)
/// * `temperature`: 1.0
/// * `claimed_by`: None
pub async fn create_test_state(
    db: &DatabaseConnection,
    label: &str,
    timestamp: DateTime<Utc>,
) -> Result<entities::state::Model> {
    state::create_state(db, label.to_string(), timestamp, 3, -1.0, 1.0, None).await
}

/// Creates a test status reading with custom parameters.
/// Use this when a test cares about cup counts or claim attribution.
pub async fn create_custom_state(
    db: &DatabaseConnection,
    label: &str,
    timestamp: DateTime<Utc>,
    num_of_cups: i32,
    weight: f64,
    temperature: f64,
    claimed_by: Option<i64>,
) -> Result<entities::state::Model> {
    state::create_state(
        db,
        label.to_string(),
        timestamp,
        num_of_cups,
        weight,
        temperature,
        claimed_by,
    )
    .await
}

/// Creates a test pot maker with the fixture statistics used across the suite.
///
/// # Defaults
/// * `number_of_pots_made`: 1
/// * `number_of_cups_made`: 5
/// * `total_weight_made`: 12.0
/// * `largest_single_pot`: 2.0
/// * `requested_teapot`: false
pub async fn create_test_pot_maker(
    db: &DatabaseConnection,
    name: &str,
    mac_address: Option<&str>,
) -> Result<entities::pot_maker::Model> {
    pot_maker::create_pot_maker(
        db,
        name.to_string(),
        mac_address.map(str::to_string),
        1,
        5,
        12.0,
        2.0,
        false,
    )
    .await
}

/// Creates a test pot maker with a chosen pending-request flag.
pub async fn create_custom_pot_maker(
    db: &DatabaseConnection,
    name: &str,
    mac_address: Option<&str>,
    requested_teapot: bool,
) -> Result<entities::pot_maker::Model> {
    pot_maker::create_pot_maker(
        db,
        name.to_string(),
        mac_address.map(str::to_string),
        1,
        5,
        12.0,
        2.0,
        requested_teapot,
    )
    .await
}

/// Sets up a complete test environment with one registered maker.
/// Returns (db, maker) for common test scenarios.
pub async fn setup_with_pot_maker() -> Result<(DatabaseConnection, entities::pot_maker::Model)> {
    let db = setup_test_db().await?;
    let maker = create_test_pot_maker(&db, "aaron", Some("123")).await?;
    Ok((db, maker))
}
