use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod budget {
    use super::*;

    /// Kind of a budget record.
    ///
    /// Serialized with its upper-case name, which is also the key used in
    /// [`BudgetYearStats::total_by_type`].
    #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
    #[serde(rename_all = "UPPERCASE")]
    pub enum BudgetType {
        Income,
        Expense,
    }

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetRecordNew {
        pub year: i32,
        pub month: i32,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        #[serde(default)]
        pub author_id: Option<i32>,
    }

    /// A stored budget record as returned by `POST /budget/add`.
    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetRecord {
        pub id: i32,
        pub year: i32,
        pub month: i32,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        pub author_id: Option<i32>,
    }

    /// Query string of `GET /budget/year/{year}/stats`.
    ///
    /// `limit` and `offset` are signed so the server can reject negative
    /// values with a readable message.
    #[derive(Debug, Default, Serialize, Deserialize)]
    pub struct BudgetYearParams {
        pub limit: Option<i64>,
        pub offset: Option<i64>,
        pub search: Option<String>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetItem {
        pub id: i32,
        pub year: i32,
        pub month: i32,
        pub amount: i64,
        #[serde(rename = "type")]
        pub kind: BudgetType,
        pub author: Option<super::author::Author>,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct BudgetYearStats {
        /// Number of records matching year and search, ignoring pagination.
        pub total: u64,
        pub items: Vec<BudgetItem>,
        /// Sum of amounts per type over every matching record.
        pub total_by_type: BTreeMap<BudgetType, i64>,
    }
}

pub mod author {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct AuthorNew {
        pub full_name: String,
    }

    #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct Author {
        pub id: i32,
        pub full_name: String,
        pub created_at: DateTime<Utc>,
    }
}
