//! Author API endpoints

use api_types::author::{Author, AuthorNew};
use axum::{
    Json,
    extract::{Path, State},
};

use crate::{ServerError, server::ServerState};

pub(crate) fn map_author(author: engine::Author) -> Author {
    Author {
        id: author.id,
        full_name: author.full_name,
        created_at: author.created_at,
    }
}

pub async fn add(
    State(state): State<ServerState>,
    Json(payload): Json<AuthorNew>,
) -> Result<Json<Author>, ServerError> {
    let author = state.engine.new_author(&payload.full_name).await?;
    Ok(Json(map_author(author)))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<Author>, ServerError> {
    let author = state.engine.author(id).await?;
    Ok(Json(map_author(author)))
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Author>>, ServerError> {
    let authors = state.engine.authors().await?;
    Ok(Json(authors.into_iter().map(map_author).collect()))
}
