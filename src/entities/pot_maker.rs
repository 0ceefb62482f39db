//! Pot maker entity - Represents a device or person that produces tea.
//!
//! Each maker is keyed by a unique name and, optionally, by the unique mac
//! address of their dash button. Cumulative brewing statistics accrue over
//! time; `requested_teapot` is the only field that is toggled after creation.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Pot maker database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "pot_makers")]
pub struct Model {
    /// Unique identifier for the maker
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Human-readable name, unique across all makers
    #[sea_orm(unique)]
    pub name: String,
    /// Hardware identifier of the maker's dash button, unique when present
    #[sea_orm(unique)]
    pub mac_address: Option<String>,
    /// Cumulative number of pots brewed
    pub number_of_pots_made: i32,
    /// Cumulative number of cups brewed
    pub number_of_cups_made: i32,
    /// Cumulative weight of tea brewed
    pub total_weight_made: f64,
    /// Heaviest single pot this maker has brewed
    pub largest_single_pot: f64,
    /// Whether this maker has a pending brew request
    pub requested_teapot: bool,
    /// Whether this maker no longer brews tea
    pub inactive: bool,
}

/// Defines relationships between PotMaker and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One maker may be credited with many readings
    #[sea_orm(has_many = "super::state::Entity")]
    States,
}

impl Related<super::state::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::States.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
