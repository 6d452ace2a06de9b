use serde::{Deserialize, Serialize};

use crate::{
    error::GameError,
    game::Target,
    models::{Actor, Seed, Team},
};

/// Body of `/new-game`. Sending the live seed as `prev_seed` resets the game.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct NewGameRequest {
    pub game_id: String,
    pub words: Option<Vec<String>>,
    pub prev_seed: Option<Seed>,
}

/// Body shared by every action on a live game. Which fields are required
/// depends on the route; see the accessors below.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ActionRequest {
    pub game_id: String,
    pub seed: Option<Seed>,
    pub player_id: String,
    pub name: String,
    pub team: u8,
    pub index: Option<usize>,
    pub message: String,
    /// Highest event number the client has; shapes the resync payload.
    pub last_event: u64,
}

impl ActionRequest {
    /// Session and player are always required. A missing seed is allowed
    /// here and simply fails the freshness check later.
    pub fn target(&self) -> Result<Target, GameError> {
        if self.game_id.is_empty() {
            return Err(GameError::Malformed("game_id is required"));
        }
        if self.player_id.is_empty() {
            return Err(GameError::Malformed("player_id is required"));
        }
        Ok(Target {
            session_id: self.game_id.clone(),
            seed: self.seed,
            last_event: self.last_event,
        })
    }

    /// Like `target`, but for actions that append events: the seed must be sent.
    pub fn seeded_target(&self) -> Result<Target, GameError> {
        let target = self.target()?;
        if target.seed.is_none() {
            return Err(GameError::Malformed("seed is required"));
        }
        Ok(target)
    }

    pub fn team(&self) -> Option<Team> {
        Team::new(self.team)
    }

    pub fn actor(&self) -> Result<Actor, GameError> {
        let team = self.team().ok_or(GameError::Malformed("team is required"))?;
        Ok(Actor {
            player_id: self.player_id.clone(),
            name: self.name.clone(),
            team,
        })
    }

    pub fn index(&self) -> Result<usize, GameError> {
        self.index.ok_or(GameError::Malformed("index is required"))
    }

    pub fn message(&self) -> Result<&str, GameError> {
        if self.message.is_empty() {
            return Err(GameError::Malformed("message is required"));
        }
        Ok(&self.message)
    }
}

#[derive(Debug, Serialize)]
pub struct Ack {
    pub status: &'static str,
}

impl Ack {
    pub fn ok() -> Self {
        Self { status: "ok" }
    }
}

#[derive(Debug, Serialize)]
pub struct AutogeneratedId {
    pub autogenerated_id: String,
}
