//! Pot maker seed configuration loading from config.toml
//!
//! This module provides functionality to load the initial pot maker registry
//! from a TOML configuration file. The makers defined in config.toml are used
//! to seed the database on first run or when makers are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of pot maker configurations to seed
    pub pot_makers: Vec<PotMakerConfig>,
}

/// Configuration for a single pot maker
#[derive(Debug, Deserialize, Clone)]
pub struct PotMakerConfig {
    /// Name of the maker
    pub name: String,
    /// Mac address of the maker's dash button, if they have one
    pub mac_address: Option<String>,
}

/// Loads pot maker configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads pot maker configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}
