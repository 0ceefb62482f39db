//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod pot_maker;
pub mod state;

// Re-export specific types to avoid conflicts
pub use pot_maker::{Column as PotMakerColumn, Entity as PotMaker, Model as PotMakerModel};
pub use state::{Column as StateColumn, Entity as State, Model as StateModel};
