//! State business logic - Query helpers over the teapot status log.
//!
//! Provides functions for recording status readings and answering the
//! questions the surrounding application asks of the log: what is the
//! current state, how many pots have been brewed, and when was the last
//! full pot. All functions are async, take an explicit database connection,
//! and return Result types for error handling.

use crate::{
    entities::{PotMaker, State, state},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, prelude::*};

/// Status label a teapot sensor reports when a fresh pot has been brewed.
pub const FULL_TEAPOT: &str = "FULL_TEAPOT";

/// Records a single teapot status reading.
///
/// Readings are append-only: once inserted they are never mutated or deleted
/// by this layer. The `weight` may be negative (`-1` is the conventional
/// "scale did not report" sentinel) but must be finite. When `claimed_by` is
/// supplied, the referenced pot maker must exist.
///
/// # Errors
/// Returns an error if:
/// - The status label is empty or whitespace-only
/// - `num_of_cups` is negative
/// - `weight` is not finite (NaN, infinity)
/// - `claimed_by` references a pot maker that does not exist
/// - The database insert operation fails
pub async fn create_state(
    db: &DatabaseConnection,
    state: String,
    timestamp: DateTimeUtc,
    num_of_cups: i32,
    weight: f64,
    temperature: f64,
    claimed_by: Option<i64>,
) -> Result<state::Model> {
    // Validate inputs
    if state.trim().is_empty() {
        return Err(Error::Config {
            message: "State label cannot be empty".to_string(),
        });
    }

    if num_of_cups < 0 {
        return Err(Error::InvalidCount {
            count: i64::from(num_of_cups),
        });
    }

    if !weight.is_finite() {
        return Err(Error::InvalidWeight { weight });
    }

    if let Some(maker_id) = claimed_by {
        PotMaker::find_by_id(maker_id)
            .one(db)
            .await?
            .ok_or_else(|| Error::PotMakerNotFound {
                identifier: maker_id.to_string(),
            })?;
    }

    let reading = state::ActiveModel {
        state: Set(state.trim().to_string()),
        timestamp: Set(timestamp),
        num_of_cups: Set(num_of_cups),
        weight: Set(weight),
        temperature: Set(temperature),
        claimed_by: Set(claimed_by),
        ..Default::default()
    };
    reading.insert(db).await.map_err(Into::into)
}

/// Retrieves the most recent status reading, or None if no readings exist.
///
/// Readings are ordered by their `timestamp`; readings sharing a timestamp
/// are broken by insertion order. An empty log is a normal outcome for a
/// freshly provisioned teapot, not an error.
pub async fn get_newest_state(db: &DatabaseConnection) -> Result<Option<state::Model>> {
    State::find()
        .order_by_desc(state::Column::Timestamp)
        .order_by_desc(state::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Counts every reading labelled with the full-pot marker.
///
/// Each full-pot event counts individually regardless of recency; the match
/// is an exact string comparison on the status label, not a timestamp window.
pub async fn get_number_of_new_teapots(db: &DatabaseConnection) -> Result<u64> {
    State::find()
        .filter(state::Column::State.eq(FULL_TEAPOT))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Retrieves the most recent full-pot reading, or None if none exist.
pub async fn get_latest_full_teapot(db: &DatabaseConnection) -> Result<Option<state::Model>> {
    State::find()
        .filter(state::Column::State.eq(FULL_TEAPOT))
        .order_by_desc(state::Column::Timestamp)
        .order_by_desc(state::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}
