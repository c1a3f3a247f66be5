//! Budget records engine.
//!
//! The engine owns the record store and the author directory (both SeaORM
//! entities) and answers yearly statistics queries over them.

pub use authors::Author;
pub use budget::{BudgetRecord, BudgetType, NewBudgetRecord};
pub use error::EngineError;
pub use ops::{Engine, EngineBuilder};
pub use stats::{BudgetItem, StatsQuery, YearStats};

mod authors;
mod budget;
mod error;
mod ops;
mod stats;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
