pub mod game;
pub mod health;
pub mod messages;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .merge(game_routes())
}

fn game_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/index", post(game::index))
        .route("/new-game", post(game::new_game))
        .route("/guess", post(game::guess))
        .route("/end-turn", post(game::end_turn))
        .route("/chat", post(game::chat))
        .route("/events", post(game::events))
        .route("/ping", post(game::ping))
        .route("/stats", get(game::stats).post(game::stats))
}
