use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};

use crate::{
    error::GameError,
    game::{
        board::BoardGenerator,
        signal::{Signal, SignalWaiter},
    },
    models::{Actor, Event, EventKind, GameSnapshot, GameUpdate, Player, Seed, Team, Tile},
};

/// Authoritative state of one session.
///
/// The registry wraps every `Game` in its own mutex; all methods here assume
/// the caller holds it. The server orders actions and checks their shape but
/// does not referee turns or decide wins: clients derive both from the event
/// log.
#[derive(Debug)]
pub struct Game {
    seed: Seed,
    tiles: Vec<Tile>,
    players: HashMap<String, Player>,
    events: Vec<Event>,
    signal: Signal,
    created_at: DateTime<Utc>,
    /// Set once a reset or sweep has taken this game out of the registry.
    retired: bool,
}

impl Game {
    pub fn new(
        seed: Seed,
        words: &[String],
        created_at: DateTime<Utc>,
    ) -> Result<Self, GameError> {
        Ok(Self {
            seed,
            tiles: BoardGenerator::generate(seed, words)?,
            players: HashMap::new(),
            events: Vec::new(),
            signal: Signal::new(),
            created_at,
            retired: false,
        })
    }

    pub fn seed(&self) -> Seed {
        self.seed
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn player(&self, player_id: &str) -> Option<&Player> {
        self.players.get(player_id)
    }

    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    pub fn is_retired(&self) -> bool {
        self.retired
    }

    pub fn is_current(&self, seed: Option<Seed>) -> bool {
        seed == Some(self.seed)
    }

    /// Refuse a request aimed at another generation, handing back what the
    /// caller needs to catch up.
    pub fn check_seed(&self, seed: Option<Seed>, last_event: u64) -> Result<(), GameError> {
        if self.is_current(seed) {
            Ok(())
        } else {
            Err(GameError::SeedMismatch(self.update_since(last_event)))
        }
    }

    /// Record that a player is still around. Never emits an event.
    pub fn mark_seen(
        &mut self,
        player_id: &str,
        name: &str,
        team: Option<Team>,
        now: DateTime<Utc>,
    ) {
        let player = self
            .players
            .entry(player_id.to_string())
            .or_insert_with(|| Player {
                name: String::new(),
                team: None,
                last_seen: now,
            });
        player.name = name.to_string();
        player.team = team;
        player.last_seen = now;
    }

    /// Reveal a tile. Guessing an already revealed tile is still recorded;
    /// clients render from the event stream, not from the flag.
    pub fn guess(
        &mut self,
        actor: &Actor,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<u64, GameError> {
        let size = self.tiles.len();
        let tile = self
            .tiles
            .get_mut(index)
            .ok_or(GameError::InvalidTile { index, size })?;
        tile.reveal();

        self.mark_seen(&actor.player_id, &actor.name, Some(actor.team), now);
        Ok(self.add_event(actor, EventKind::Guess { index }))
    }

    pub fn end_turn(&mut self, actor: &Actor, now: DateTime<Utc>) -> u64 {
        self.mark_seen(&actor.player_id, &actor.name, Some(actor.team), now);
        self.add_event(actor, EventKind::EndTurn)
    }

    pub fn chat(
        &mut self,
        actor: &Actor,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, GameError> {
        if message.is_empty() {
            return Err(GameError::Malformed("message is required"));
        }
        self.mark_seen(&actor.player_id, &actor.name, Some(actor.team), now);
        Ok(self.add_event(
            actor,
            EventKind::Chat {
                message: message.to_string(),
            },
        ))
    }

    /// Append an event under the next number and release every waiter.
    fn add_event(&mut self, actor: &Actor, kind: EventKind) -> u64 {
        let number = self.events.len() as u64 + 1;
        self.events.push(Event {
            number,
            team: actor.team,
            player_id: actor.player_id.clone(),
            name: actor.name.clone(),
            kind,
        });

        let spent = std::mem::take(&mut self.signal);
        spent.fire();
        number
    }

    /// Events numbered above `last_event`, paired with the signal that will
    /// fire on the next append. Both come from the same lock hold, so a
    /// caller that sees nothing and waits on the signal cannot miss an event.
    pub fn events_since(&self, last_event: u64) -> (Vec<Event>, SignalWaiter) {
        let skip = usize::try_from(last_event)
            .unwrap_or(usize::MAX)
            .min(self.events.len());
        (self.events[skip..].to_vec(), self.signal.subscribe())
    }

    pub fn update_since(&self, last_event: u64) -> GameUpdate {
        GameUpdate {
            seed: self.seed,
            events: self.events_since(last_event).0,
        }
    }

    /// Drop players idle longer than `idle`; returns how many remain.
    pub fn prune_old_players(&mut self, now: DateTime<Utc>, idle: TimeDelta) -> usize {
        self.players.retain(|_, player| now - player.last_seen <= idle);
        self.players.len()
    }

    /// Take over the previous generation's players without their teams, so
    /// a rematch can reshuffle sides.
    pub fn carry_over_players(&mut self, previous: &Game) {
        for (id, player) in &previous.players {
            self.players.insert(
                id.clone(),
                Player {
                    name: player.name.clone(),
                    team: None,
                    last_seen: player.last_seen,
                },
            );
        }
    }

    /// Mark this generation as no longer registered and wake everyone
    /// waiting on it, without appending anything.
    pub fn retire(&mut self) {
        self.retired = true;
        self.signal.fire();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            seed: self.seed,
            tiles: self.tiles.clone(),
            players: self
                .players
                .iter()
                .map(|(id, p)| (id.clone(), p.clone()))
                .collect(),
            created_at: self.created_at,
        }
    }
}
