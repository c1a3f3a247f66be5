use chrono::Utc;
use sea_orm::{QueryOrder, prelude::*};

use crate::{Author, EngineError, ResultEngine, authors, util};

use super::Engine;

impl Engine {
    /// Adds an author; the name is trimmed and must not be empty.
    pub async fn new_author(&self, full_name: &str) -> ResultEngine<Author> {
        let full_name = util::normalize_required_name(full_name, "author")?;
        let model = authors::ActiveModel::new(full_name, Utc::now())
            .insert(&self.database)
            .await?;
        tracing::debug!(id = model.id, "author stored");
        Ok(Author::from(model))
    }

    pub async fn author(&self, id: i32) -> ResultEngine<Author> {
        authors::Entity::find_by_id(id)
            .one(&self.database)
            .await?
            .map(Author::from)
            .ok_or_else(|| EngineError::KeyNotFound(format!("author {id}")))
    }

    /// Returns every author ordered by id.
    pub async fn authors(&self) -> ResultEngine<Vec<Author>> {
        let models = authors::Entity::find()
            .order_by_asc(authors::Column::Id)
            .all(&self.database)
            .await?;
        Ok(models.into_iter().map(Author::from).collect())
    }
}
