//! Unified error types for the teabot data layer.
//!
//! Lookup misses are not errors: query helpers return `Ok(None)` for absent
//! rows. The variants here cover invalid input, uniqueness violations at
//! creation time, and storage-level failures.

use thiserror::Error;

/// All errors surfaced by the teabot store.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error (missing file, bad TOML, empty required field)
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of what was wrong
        message: String,
    },

    /// Underlying storage failure, propagated without retries
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// No pot maker matched the given name or mac address
    #[error("Pot maker not found: {identifier}")]
    PotMakerNotFound {
        /// The name or mac address that failed to match
        identifier: String,
    },

    /// A pot maker with the same name or mac address already exists
    #[error("Pot maker already exists: {name}")]
    DuplicatePotMaker {
        /// Name supplied at creation time
        name: String,
    },

    /// A cup or pot counter was negative
    #[error("Invalid count: {count}")]
    InvalidCount {
        /// The offending value
        count: i64,
    },

    /// A weight was negative where a cumulative total is expected, or not finite
    #[error("Invalid weight: {weight}")]
    InvalidWeight {
        /// The offending value
        weight: f64,
    },
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
