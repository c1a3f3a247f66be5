//! Budget API endpoints

use api_types::budget::{
    BudgetItem, BudgetRecord, BudgetRecordNew, BudgetType, BudgetYearParams, BudgetYearStats,
};
use axum::{
    Json,
    extract::{Path, Query, State},
};

use crate::{ServerError, author::map_author, server::ServerState};

fn map_kind(kind: engine::BudgetType) -> BudgetType {
    match kind {
        engine::BudgetType::Income => BudgetType::Income,
        engine::BudgetType::Expense => BudgetType::Expense,
    }
}

fn unmap_kind(kind: BudgetType) -> engine::BudgetType {
    match kind {
        BudgetType::Income => engine::BudgetType::Income,
        BudgetType::Expense => engine::BudgetType::Expense,
    }
}

fn map_record(record: engine::BudgetRecord) -> BudgetRecord {
    BudgetRecord {
        id: record.id,
        year: record.year,
        month: record.month,
        amount: record.amount,
        kind: map_kind(record.kind),
        author_id: record.author_id,
    }
}

fn non_negative(value: Option<i64>, label: &str) -> Result<Option<u64>, ServerError> {
    value
        .map(|v| {
            u64::try_from(v).map_err(|_| ServerError::Generic(format!("{label} must be >= 0")))
        })
        .transpose()
}

pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<BudgetRecordNew>,
) -> Result<Json<BudgetRecord>, ServerError> {
    let record = state
        .engine
        .add_budget_record(engine::NewBudgetRecord {
            year: payload.year,
            month: payload.month,
            amount: payload.amount,
            kind: unmap_kind(payload.kind),
            author_id: payload.author_id,
        })
        .await?;

    Ok(Json(map_record(record)))
}

pub async fn year_stats(
    State(state): State<ServerState>,
    Path(year): Path<i32>,
    Query(params): Query<BudgetYearParams>,
) -> Result<Json<BudgetYearStats>, ServerError> {
    let query = engine::StatsQuery {
        year,
        limit: non_negative(params.limit, "limit")?,
        offset: non_negative(params.offset, "offset")?,
        search: params.search,
    };
    tracing::debug!(?query, "budget year stats");

    let stats = state.engine.year_stats(&query).await?;

    let items = stats
        .items
        .into_iter()
        .map(|item| BudgetItem {
            id: item.record.id,
            year: item.record.year,
            month: item.record.month,
            amount: item.record.amount,
            kind: map_kind(item.record.kind),
            author: item.author.map(map_author),
        })
        .collect();

    Ok(Json(BudgetYearStats {
        total: stats.total,
        items,
        total_by_type: stats
            .total_by_type
            .into_iter()
            .map(|(kind, amount)| (map_kind(kind), amount))
            .collect(),
    }))
}
