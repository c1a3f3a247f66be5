//! Internal helpers for submission validation and text normalization.
//!
//! These utilities are **not** part of the public API. They centralize
//! validation so every write path enforces the same invariants.

use crate::{EngineError, NewBudgetRecord, ResultEngine};

/// Reject a budget record submission before it reaches the store.
///
/// Only the month is checked; amount sign, year range and the author
/// reference are accepted as-is.
pub(crate) fn validate_budget_record(record: &NewBudgetRecord) -> ResultEngine<()> {
    if !(1..=12).contains(&record.month) {
        return Err(EngineError::InvalidRecord(format!(
            "month must be between 1 and 12, got {}",
            record.month
        )));
    }
    Ok(())
}

pub(crate) fn normalize_required_name(value: &str, label: &str) -> ResultEngine<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidRecord(format!(
            "{label} name must not be empty"
        )));
    }
    Ok(trimmed.to_string())
}

/// Trim and lower-case a search term; `None` when nothing is left.
pub(crate) fn normalize_search(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}
