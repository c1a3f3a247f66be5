use sea_orm::{QueryFilter, TransactionTrait, prelude::*};

use crate::{
    Author, BudgetItem, BudgetRecord, NewBudgetRecord, ResultEngine, StatsQuery, YearStats,
    authors, budget, util,
};

use super::{Engine, with_tx};

impl Engine {
    /// Validates and stores a new budget record.
    ///
    /// A month outside `1..=12` is rejected with
    /// [`EngineError::InvalidRecord`](crate::EngineError::InvalidRecord) and
    /// nothing is written. `author_id` is stored without checking that the
    /// author exists.
    pub async fn add_budget_record(&self, record: NewBudgetRecord) -> ResultEngine<BudgetRecord> {
        util::validate_budget_record(&record)?;

        let model = budget::ActiveModel::from(&record)
            .insert(&self.database)
            .await?;
        tracing::debug!(id = model.id, year = model.year, "budget record stored");

        BudgetRecord::try_from(model)
    }

    /// Computes the statistics of a year.
    ///
    /// The year's records and their authors are read with a single query
    /// inside one transaction, so `total`, `total_by_type` and `items` always
    /// describe the same snapshot. Records pointing to a missing author are
    /// returned with no author.
    pub async fn year_stats(&self, query: &StatsQuery) -> ResultEngine<YearStats> {
        with_tx!(self, |db_tx| {
            let rows: Vec<(budget::Model, Option<authors::Model>)> = budget::Entity::find()
                .filter(budget::Column::Year.eq(query.year))
                .find_also_related(authors::Entity)
                .all(&db_tx)
                .await?;

            let items = rows
                .into_iter()
                .map(|(record, author)| -> ResultEngine<BudgetItem> {
                    Ok(BudgetItem {
                        record: BudgetRecord::try_from(record)?,
                        author: author.map(Author::from),
                    })
                })
                .collect::<ResultEngine<Vec<_>>>()?;

            YearStats::compute(items, query)
        })
    }
}
