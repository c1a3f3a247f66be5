use axum::{
    Router,
    routing::{get, post},
};

use std::sync::Arc;

use crate::{author, budget};
use engine::Engine;

#[derive(Clone)]
pub struct ServerState {
    pub engine: Arc<Engine>,
}

fn router(state: ServerState) -> Router {
    Router::new()
        .route("/budget/add", post(budget::add))
        .route("/budget/year/{year}/stats", get(budget::year_stats))
        .route("/author", get(author::list))
        .route("/author/add", post(author::add))
        .route("/author/{id}", get(author::get))
        .with_state(state)
}

pub async fn run_with_listener(
    engine: Engine,
    listener: tokio::net::TcpListener,
) -> Result<(), std::io::Error> {
    let addr = listener.local_addr()?;
    tracing::info!("Server listening on {}", addr);

    let state = ServerState {
        engine: Arc::new(engine),
    };

    axum::serve(listener, router(state)).await
}
