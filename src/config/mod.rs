/// Database configuration and connection management
pub mod database;

/// Pot maker seed configuration loading from config.toml
pub mod makers;
