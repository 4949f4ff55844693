//! Charging station entity for database

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Charging station row. `status` is "available" or "occupied".
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "charging_stations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
    pub status: String,
    pub station_type: Option<String>,
    pub pricing: Option<String>,
    pub speed: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::slot::Entity")]
    Slots,
    #[sea_orm(has_many = "super::charging_session::Entity")]
    Sessions,
}

impl Related<super::slot::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Slots.def()
    }
}

impl Related<super::charging_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
