//! State entity - Represents a single teapot status reading.
//!
//! Each reading has a free-form status label, the time it was taken, the
//! number of cups in the pot, the pot weight, the tea temperature, and an
//! optional reference to the maker credited with the pot. Readings form an
//! append-only log: rows are inserted once and never mutated.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Teapot status reading database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "states")]
pub struct Model {
    /// Unique identifier for the reading
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Status label reported by the teapot sensor (e.g. `"FULL_TEAPOT"`, `"EMPTY_TEAPOT"`)
    pub state: String,
    /// When the reading was taken
    pub timestamp: DateTimeUtc,
    /// Cups of tea present at the time of the reading
    pub num_of_cups: i32,
    /// Teapot weight at the reading; `-1` when the scale did not report one
    pub weight: f64,
    /// Tea temperature at the reading
    pub temperature: f64,
    /// ID of the pot maker credited with this pot, None if unclaimed
    pub claimed_by: Option<i64>,
}

/// Defines relationships between State and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each reading may be credited to one pot maker
    #[sea_orm(
        belongs_to = "super::pot_maker::Entity",
        from = "Column::ClaimedBy",
        to = "super::pot_maker::Column::Id"
    )]
    PotMaker,
}

impl Related<super::pot_maker::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PotMaker.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
