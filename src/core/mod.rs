//! Core business logic - Query helpers over the teabot tables.
//! Each module covers one entity; every function takes an explicit database
//! connection so callers control the storage handle's lifecycle.

pub mod pot_maker;
pub mod state;
