use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::models::GameUpdate;

/// Everything an action on a live game can be refused for.
/// None of these leave the game half-written: validation runs before mutation.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("malformed request: {0}")]
    Malformed(&'static str),
    #[error("game not found")]
    NotFound,
    #[error("request intended for a different game seed")]
    SeedMismatch(GameUpdate),
    #[error("a word list must have at least {required} words, got {provided}")]
    TooFewWords { required: usize, provided: usize },
    #[error("tile {index} is outside a board of {size} tiles")]
    InvalidTile { index: usize, size: usize },
}

impl GameError {
    /// Stable machine-readable code sent to clients.
    pub fn code(&self) -> &'static str {
        match self {
            GameError::Malformed(_) => "malformed_body",
            GameError::NotFound => "not_found",
            GameError::SeedMismatch(_) => "bad_seed",
            GameError::TooFewWords { .. } => "too_few_words",
            GameError::InvalidTile { .. } => "invalid_index",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            GameError::NotFound => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for GameError {
    fn into_response(self) -> Response {
        tracing::debug!(code = self.code(), "request rejected: {}", self);

        let mut body = json!({
            "code": self.code(),
            "message": self.to_string(),
        });
        // A stale client gets what it needs to resync in the same response.
        if let GameError::SeedMismatch(update) = &self {
            body["seed"] = json!(update.seed);
            body["events"] = json!(update.events);
        }

        (self.status(), Json(body)).into_response()
    }
}
