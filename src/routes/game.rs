use std::sync::Arc;

use axum::{body::Bytes, extract::State, Json};
use chrono::Utc;
use serde::de::DeserializeOwned;

use crate::{
    error::GameError,
    models::{GameSnapshot, GameUpdate, Stats},
    routes::messages::{Ack, ActionRequest, AutogeneratedId, NewGameRequest},
    AppState,
};

/// Bodies are decoded by hand so any parse failure maps to `malformed_body`,
/// whatever content type the browser sent.
fn decode<T: DeserializeOwned>(body: &Bytes) -> Result<T, GameError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!("Failed to parse request body: {}", e);
        GameError::Malformed("unable to parse request body")
    })
}

/// Suggest a fresh session id
pub async fn index(State(state): State<Arc<AppState>>) -> Result<Json<AutogeneratedId>, GameError> {
    let autogenerated_id = state.registry.autogenerate_id()?;
    Ok(Json(AutogeneratedId { autogenerated_id }))
}

/// Create a game, or reset it when `prev_seed` matches the live seed
pub async fn new_game(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GameSnapshot>, GameError> {
    let req: NewGameRequest = decode(&body)?;
    let snapshot = state
        .registry
        .create_or_reset(&req.game_id, req.words, req.prev_seed, Utc::now())?;
    Ok(Json(snapshot))
}

pub async fn guess(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Ack>, GameError> {
    let req: ActionRequest = decode(&body)?;
    let target = req.seeded_target()?;
    let actor = req.actor()?;
    let index = req.index()?;

    state.registry.guess(&target, &actor, index, Utc::now())?;
    Ok(Json(Ack::ok()))
}

pub async fn end_turn(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<Ack>, GameError> {
    let req: ActionRequest = decode(&body)?;
    let target = req.seeded_target()?;
    let actor = req.actor()?;

    state.registry.end_turn(&target, &actor, Utc::now())?;
    Ok(Json(Ack::ok()))
}

pub async fn chat(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Ack>, GameError> {
    let req: ActionRequest = decode(&body)?;
    let target = req.seeded_target()?;
    let actor = req.actor()?;
    let message = req.message()?;

    state.registry.chat(&target, &actor, message, Utc::now())?;
    Ok(Json(Ack::ok()))
}

/// Record player details without waiting for the next poll. No event is appended.
pub async fn ping(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Ack>, GameError> {
    let req: ActionRequest = decode(&body)?;
    let target = req.target()?;

    state
        .registry
        .ping(&target, &req.player_id, &req.name, req.team(), Utc::now())?;
    Ok(Json(Ack::ok()))
}

/// Long-poll for events after `last_event`
pub async fn events(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<GameUpdate>, GameError> {
    let req: ActionRequest = decode(&body)?;
    let target = req.target()?;

    // Server shutdown releases every pending poll.
    let mut shutdown = state.shutdown.clone();
    let cancelled = async move {
        if shutdown.wait_for(|stopping| *stopping).await.is_err() {
            // Sender gone without a shutdown: nothing will ever cancel us.
            std::future::pending::<()>().await;
        }
    };

    let update = state
        .registry
        .poll(
            &target,
            &req.player_id,
            &req.name,
            req.team(),
            Utc::now(),
            state.config.game.poll_timeout,
            cancelled,
        )
        .await?;
    Ok(Json(update))
}

pub async fn stats(State(state): State<Arc<AppState>>) -> Json<Stats> {
    Json(state.registry.stats())
}
