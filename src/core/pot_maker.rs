//! Pot maker business logic - Handles all pot-maker-related operations.
//!
//! This module provides functions for registering makers, looking them up by
//! name or mac address, and managing the pending-request flag that dash
//! buttons toggle. Uniqueness of names and mac addresses is enforced by the
//! schema at creation time, never patched up at query time. All functions are
//! async and return Result types for proper error handling throughout the system.

use crate::{
    config::makers,
    entities::{PotMaker, pot_maker},
    errors::{Error, Result},
};
use sea_orm::{PaginatorTrait, QueryOrder, Set, SqlErr, prelude::*};
use tracing::{debug, info};

/// Registers a new pot maker, performing input validation.
///
/// The maker starts active; `requested_teapot` may be set at creation but is
/// otherwise only changed through [`flip_requested_teapot`] and
/// [`reset_teapot_requests`]. Duplicate names or mac addresses are rejected
/// by the schema's unique constraints and surfaced as a distinct error.
///
/// # Errors
/// Returns an error if:
/// - The name is empty or whitespace-only
/// - Either cumulative counter is negative
/// - Either weight is negative or not finite (NaN, infinity)
/// - A maker with the same name or mac address already exists
/// - The database insert operation fails
pub async fn create_pot_maker(
    db: &DatabaseConnection,
    name: String,
    mac_address: Option<String>,
    number_of_pots_made: i32,
    number_of_cups_made: i32,
    total_weight_made: f64,
    largest_single_pot: f64,
    requested_teapot: bool,
) -> Result<pot_maker::Model> {
    // Validate inputs
    if name.trim().is_empty() {
        return Err(Error::Config {
            message: "Pot maker name cannot be empty".to_string(),
        });
    }

    for count in [number_of_pots_made, number_of_cups_made] {
        if count < 0 {
            return Err(Error::InvalidCount {
                count: i64::from(count),
            });
        }
    }

    for weight in [total_weight_made, largest_single_pot] {
        if weight < 0.0 || !weight.is_finite() {
            return Err(Error::InvalidWeight { weight });
        }
    }

    let name = name.trim().to_string();
    let maker = pot_maker::ActiveModel {
        name: Set(name.clone()),
        mac_address: Set(mac_address),
        number_of_pots_made: Set(number_of_pots_made),
        number_of_cups_made: Set(number_of_cups_made),
        total_weight_made: Set(total_weight_made),
        largest_single_pot: Set(largest_single_pot),
        requested_teapot: Set(requested_teapot),
        inactive: Set(false),
        ..Default::default()
    };

    match maker.insert(db).await {
        Ok(model) => Ok(model),
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Err(Error::DuplicatePotMaker { name }),
            _ => Err(err.into()),
        },
    }
}

/// Retrieves all pot makers, ordered by name.
///
/// Iteration order is stable but carries no further meaning.
pub async fn get_all(db: &DatabaseConnection) -> Result<Vec<pot_maker::Model>> {
    PotMaker::find()
        .order_by_asc(pot_maker::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific pot maker by name, returning None if not found.
pub async fn get_single_pot_maker(
    db: &DatabaseConnection,
    name: &str,
) -> Result<Option<pot_maker::Model>> {
    PotMaker::find()
        .filter(pot_maker::Column::Name.eq(name))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Finds a specific pot maker by the mac address of their dash button,
/// returning None if not found.
pub async fn get_single_pot_maker_by_mac_address(
    db: &DatabaseConnection,
    mac_address: &str,
) -> Result<Option<pot_maker::Model>> {
    PotMaker::find()
        .filter(pot_maker::Column::MacAddress.eq(mac_address))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Inverts the pending-request flag of the maker owning the given mac address.
///
/// Exactly one row is mutated and the updated maker is returned. Flipping
/// twice restores the original value.
///
/// # Errors
/// Returns [`Error::PotMakerNotFound`] if no maker owns the mac address, or
/// a database error if the lookup or update fails.
pub async fn flip_requested_teapot(
    db: &DatabaseConnection,
    mac_address: &str,
) -> Result<pot_maker::Model> {
    let maker = get_single_pot_maker_by_mac_address(db, mac_address)
        .await?
        .ok_or_else(|| Error::PotMakerNotFound {
            identifier: mac_address.to_string(),
        })?;

    let flipped = !maker.requested_teapot;
    let mut maker: pot_maker::ActiveModel = maker.into();
    maker.requested_teapot = Set(flipped);
    maker.update(db).await.map_err(Into::into)
}

/// Counts the makers currently requesting a cup from the next pot.
pub async fn get_number_of_teapot_requests(db: &DatabaseConnection) -> Result<u64> {
    PotMaker::find()
        .filter(pot_maker::Column::RequestedTeapot.eq(true))
        .count(db)
        .await
        .map_err(Into::into)
}

/// Clears every pending brew request in a single bulk update.
///
/// Called once a pot has been announced, so the next round of requests
/// starts from a clean slate. Returns the number of rows changed.
pub async fn reset_teapot_requests(db: &DatabaseConnection) -> Result<u64> {
    use sea_orm::sea_query::Expr;

    let result = PotMaker::update_many()
        .col_expr(pot_maker::Column::RequestedTeapot, Expr::value(false))
        .filter(pot_maker::Column::RequestedTeapot.eq(true))
        .exec(db)
        .await?;

    debug!("Cleared {} pending teapot requests", result.rows_affected);
    Ok(result.rows_affected)
}

/// Seeds the registry from configuration, skipping makers that already exist.
///
/// Seeded makers start with zeroed statistics and no pending request.
/// Returns the number of makers actually created, so repeated runs against
/// the same database are harmless.
pub async fn seed_initial_pot_makers(
    db: &DatabaseConnection,
    config: &makers::Config,
) -> Result<usize> {
    let mut created = 0;
    for maker in &config.pot_makers {
        if get_single_pot_maker(db, &maker.name).await?.is_some() {
            debug!("Pot maker '{}' already present, skipping", maker.name);
            continue;
        }
        create_pot_maker(
            db,
            maker.name.clone(),
            maker.mac_address.clone(),
            0,
            0,
            0.0,
            0.0,
            false,
        )
        .await?;
        info!("Seeded pot maker '{}'", maker.name);
        created += 1;
    }
    Ok(created)
}
