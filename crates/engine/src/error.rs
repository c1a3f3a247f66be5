//! The module contains the error the engine can throw.
//!
//! The errors are:
//!
//! - [`InvalidRecord`] thrown when a submission fails validation.
//! - [`AmountOverflow`] thrown when a per-type total exceeds `i64`.
//! - [`KeyNotFound`] thrown when an item is not found.
//!
//!  [`InvalidRecord`]: EngineError::InvalidRecord
//!  [`AmountOverflow`]: EngineError::AmountOverflow
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid record: {0}")]
    InvalidRecord(String),
    #[error("Amount overflow: {0}")]
    AmountOverflow(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidRecord(a), Self::InvalidRecord(b)) => a == b,
            (Self::AmountOverflow(a), Self::AmountOverflow(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
