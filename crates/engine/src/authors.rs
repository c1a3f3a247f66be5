//! Author directory.
//!
//! Authors are referenced by budget records through a nullable id; the
//! directory never cascades into the records.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: i32,
    pub full_name: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "authors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::budget::Entity")]
    BudgetRecords,
}

impl Related<super::budget::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BudgetRecords.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub(crate) fn new(full_name: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ActiveValue::NotSet,
            full_name: ActiveValue::Set(full_name),
            created_at: ActiveValue::Set(created_at),
        }
    }
}

impl From<Model> for Author {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            full_name: model.full_name,
            created_at: model.created_at,
        }
    }
}
