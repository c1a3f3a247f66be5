//! Budget record primitives.
//!
//! A `BudgetRecord` is an immutable income or expense entry for a given
//! year and month, optionally attributed to an [`Author`](crate::Author).

use sea_orm::{ActiveValue, entity::prelude::*};
use serde::{Deserialize, Serialize};

use crate::{EngineError, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BudgetType {
    Income,
    Expense,
}

impl BudgetType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "INCOME",
            Self::Expense => "EXPENSE",
        }
    }
}

impl TryFrom<&str> for BudgetType {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            other => Err(EngineError::InvalidRecord(format!(
                "invalid budget type: {other}"
            ))),
        }
    }
}

/// A budget record before the store assigns it an id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewBudgetRecord {
    pub year: i32,
    /// Calendar month, `1..=12`.
    pub month: i32,
    /// Amount in minor currency units.
    pub amount: i64,
    pub kind: BudgetType,
    /// Weak reference to an author; never resolved at insert time.
    pub author_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetRecord {
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i64,
    pub kind: BudgetType,
    pub author_id: Option<i32>,
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "budget_records")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub year: i32,
    pub month: i32,
    pub amount: i64,
    pub kind: String,
    pub author_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::authors::Entity",
        from = "Column::AuthorId",
        to = "super::authors::Column::Id",
        on_update = "NoAction",
        on_delete = "NoAction"
    )]
    Author,
}

impl Related<super::authors::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<&NewBudgetRecord> for ActiveModel {
    fn from(record: &NewBudgetRecord) -> Self {
        Self {
            id: ActiveValue::NotSet,
            year: ActiveValue::Set(record.year),
            month: ActiveValue::Set(record.month),
            amount: ActiveValue::Set(record.amount),
            kind: ActiveValue::Set(record.kind.as_str().to_string()),
            author_id: ActiveValue::Set(record.author_id),
        }
    }
}

impl TryFrom<Model> for BudgetRecord {
    type Error = EngineError;

    fn try_from(model: Model) -> ResultEngine<Self> {
        Ok(Self {
            id: model.id,
            year: model.year,
            month: model.month,
            amount: model.amount,
            kind: BudgetType::try_from(model.kind.as_str())?,
            author_id: model.author_id,
        })
    }
}
