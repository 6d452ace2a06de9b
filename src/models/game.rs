use std::{collections::BTreeMap, fmt, num::ParseIntError};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use self::Color::{Black, Green, Neutral};

/// Generation marker for a session's board. A reset is the only thing that
/// changes it. Sent as a string because JS numbers lose precision above 2^53.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "SeedRepr")]
pub struct Seed(u64);

impl Seed {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Draw a fresh non-negative 63-bit seed.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random::<u64>() >> 1)
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Seed> for String {
    fn from(seed: Seed) -> Self {
        seed.0.to_string()
    }
}

/// Older clients send the seed as a bare number.
#[derive(Deserialize)]
#[serde(untagged)]
enum SeedRepr {
    Text(String),
    Number(u64),
}

impl TryFrom<SeedRepr> for Seed {
    type Error = ParseIntError;

    fn try_from(repr: SeedRepr) -> Result<Self, Self::Error> {
        match repr {
            SeedRepr::Text(text) => text.trim().parse().map(Seed),
            SeedRepr::Number(value) => Ok(Seed(value)),
        }
    }
}

/// A team number. Zero means "no team" and never makes it past the request boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Team(u8);

impl Team {
    pub fn new(number: u8) -> Option<Self> {
        (number != 0).then_some(Self(number))
    }

    #[cfg(test)]
    pub fn number(self) -> u8 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Green,
    Neutral,
    Black,
}

/// What a tile is from each side of the table: `[team 1, team 2]`.
pub type KeyPair = [Color; 2];

/// The two-sided key card. Each side sees 9 green and 3 black tiles.
pub const KEY_CARD: [KeyPair; 25] = [
    [Green, Green],
    [Green, Green],
    [Green, Green],
    [Green, Neutral],
    [Green, Neutral],
    [Green, Neutral],
    [Green, Neutral],
    [Green, Neutral],
    [Neutral, Green],
    [Neutral, Green],
    [Neutral, Green],
    [Neutral, Green],
    [Neutral, Green],
    [Green, Black],
    [Black, Green],
    [Black, Black],
    [Black, Neutral],
    [Neutral, Black],
    [Neutral, Neutral],
    [Neutral, Neutral],
    [Neutral, Neutral],
    [Neutral, Neutral],
    [Neutral, Neutral],
    [Neutral, Neutral],
    [Neutral, Neutral],
];

/// A word slot on the board. Only `revealed` changes after dealing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tile {
    word: String,
    colors: KeyPair,
    revealed: bool,
}

impl Tile {
    pub fn new(word: impl Into<String>, colors: KeyPair) -> Self {
        Self {
            word: word.into(),
            colors,
            revealed: false,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn colors(&self) -> KeyPair {
        self.colors
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn reveal(&mut self) {
        self.revealed = true;
    }
}

/// Presence record for one browser tab, keyed by player id in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
    pub name: String,
    pub team: Option<Team>,
    pub last_seen: DateTime<Utc>,
}

/// Who performed a seeded action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub player_id: String,
    pub name: String,
    pub team: Team,
}

/// One entry in a game's history. `number` starts at 1 and has no gaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub number: u64,
    pub team: Team,
    pub player_id: String,
    pub name: String,
    #[serde(flatten)]
    pub kind: EventKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    Guess { index: usize },
    EndTurn,
    Chat { message: String },
}

/// Full view of a game returned by create/reset.
#[derive(Debug, Clone, Serialize)]
pub struct GameSnapshot {
    pub seed: Seed,
    pub tiles: Vec<Tile>,
    pub players: BTreeMap<String, Player>,
    pub created_at: DateTime<Utc>,
}

/// Answer to a poll, and the resync payload for a stale seed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameUpdate {
    pub seed: Seed,
    pub events: Vec<Event>,
}

impl GameUpdate {
    pub fn empty(seed: Seed) -> Self {
        Self {
            seed,
            events: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    pub active_games: usize,
    pub active_players: usize,
}
