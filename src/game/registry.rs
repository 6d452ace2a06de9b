use std::{
    future::Future,
    ops::ControlFlow,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
    time::Duration,
};

use chrono::{DateTime, TimeDelta, Utc};
use dashmap::{mapref::entry::Entry, DashMap};
use rand::{rngs::StdRng, seq::IndexedRandom, Rng, SeedableRng};

use crate::{
    dictionary::normalize_words,
    error::GameError,
    game::session::Game,
    models::{Actor, GameSnapshot, GameUpdate, Seed, Stats, Team},
};

/// Attempts at a fresh two-word id before falling back to a numeric suffix.
const ID_ATTEMPTS: usize = 64;

/// The session a seeded request addresses, and how far the caller has read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub session_id: String,
    pub seed: Option<Seed>,
    pub last_event: u64,
}

/// Thresholds for the periodic sweep.
#[derive(Debug, Clone, Copy)]
pub struct SweepPolicy {
    /// A player unseen for longer than this leaves the roster.
    pub player_idle: TimeDelta,
    /// An empty game is only deleted once it is older than this.
    pub retention: TimeDelta,
}

impl Default for SweepPolicy {
    fn default() -> Self {
        Self {
            player_idle: TimeDelta::minutes(10),
            retention: TimeDelta::hours(24),
        }
    }
}

type SharedGame = Arc<Mutex<Game>>;

fn lock(game: &Mutex<Game>) -> MutexGuard<'_, Game> {
    // Every mutation validates before it writes, so a poisoned game is still consistent.
    game.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Directory of live sessions.
///
/// The map's locks cover only lookup, insert and delete. Each game carries
/// its own mutex, so traffic on one session never waits on another. Where
/// both are held (reset, sweep removal) the map is always locked first.
pub struct GameRegistry {
    games: DashMap<String, SharedGame>,
    words: Vec<String>,
    rng: Mutex<StdRng>,
}

impl GameRegistry {
    /// `words` is the default vocabulary for new games and for generated ids.
    pub fn new(words: Vec<String>) -> Self {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    pub fn with_rng(words: Vec<String>, rng: StdRng) -> Self {
        Self {
            games: DashMap::new(),
            words,
            rng: Mutex::new(rng),
        }
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn contains(&self, session_id: &str) -> bool {
        self.games.contains_key(session_id)
    }

    fn next_seed(&self) -> Seed {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Seed::random(&mut *rng)
    }

    /// Clone the game handle out and release the map straight away.
    fn lookup(&self, session_id: &str) -> Result<SharedGame, GameError> {
        self.games
            .get(session_id)
            .map(|entry| entry.value().clone())
            .ok_or(GameError::NotFound)
    }

    /// Create a session, or reset it when the caller proves it knows the
    /// live seed. A create for an existing session with any other
    /// `prev_seed` (a duplicate or delayed request) returns the live game
    /// untouched.
    pub fn create_or_reset(
        &self,
        session_id: &str,
        words: Option<Vec<String>>,
        prev_seed: Option<Seed>,
        now: DateTime<Utc>,
    ) -> Result<GameSnapshot, GameError> {
        if session_id.is_empty() {
            return Err(GameError::Malformed("game_id is required"));
        }

        // Drawn before touching the map: `autogenerate_id` holds the rng while
        // reading the map, so the two locks must never nest the other way.
        let seed = self.next_seed();

        let custom;
        let words: &[String] = match words {
            Some(list) if !list.is_empty() => {
                custom = normalize_words(list);
                &custom
            }
            _ => &self.words,
        };

        match self.games.entry(session_id.to_string()) {
            Entry::Occupied(mut entry) => {
                let previous = entry.get().clone();
                let mut previous = lock(&previous);
                if prev_seed != Some(previous.seed()) {
                    tracing::debug!(
                        "Ignoring create for live game {} (stale or missing prev_seed)",
                        session_id
                    );
                    return Ok(previous.snapshot());
                }

                let mut game = Game::new(seed, words, now)?;
                game.carry_over_players(&previous);
                previous.retire();

                let snapshot = game.snapshot();
                tracing::info!(
                    "Reset game {} (seed {} -> {})",
                    session_id,
                    previous.seed(),
                    game.seed()
                );
                drop(previous);
                entry.insert(Arc::new(Mutex::new(game)));
                Ok(snapshot)
            }
            Entry::Vacant(entry) => {
                let game = Game::new(seed, words, now)?;
                let snapshot = game.snapshot();
                tracing::info!("Created game {} (seed {})", session_id, game.seed());
                entry.insert(Arc::new(Mutex::new(game)));
                Ok(snapshot)
            }
        }
    }

    /// Run `action` against the live game after the seed check, all under one
    /// hold of the game's lock.
    fn with_current_game<T>(
        &self,
        target: &Target,
        action: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        let game = self.lookup(&target.session_id)?;
        self.act_on_current(game, target, action)
    }

    fn act_on_current<T>(
        &self,
        game: SharedGame,
        target: &Target,
        action: impl FnOnce(&mut Game) -> Result<T, GameError>,
    ) -> Result<T, GameError> {
        self.with_live_game(&target.session_id, game, |game| {
            game.check_seed(target.seed, target.last_event)?;
            action(game)
        })?
    }

    /// Lock `game` and run `f` on it. If a reset or sweep retired the handle
    /// between lookup and lock, move on to whatever the session maps to now.
    fn with_live_game<T>(
        &self,
        session_id: &str,
        mut game: SharedGame,
        f: impl FnOnce(&mut Game) -> T,
    ) -> Result<T, GameError> {
        loop {
            {
                let mut live = lock(&game);
                if !live.is_retired() {
                    return Ok(f(&mut *live));
                }
            }
            game = self.lookup(session_id)?;
        }
    }

    pub fn guess(
        &self,
        target: &Target,
        actor: &Actor,
        index: usize,
        now: DateTime<Utc>,
    ) -> Result<u64, GameError> {
        self.with_current_game(target, |game| game.guess(actor, index, now))
    }

    pub fn end_turn(
        &self,
        target: &Target,
        actor: &Actor,
        now: DateTime<Utc>,
    ) -> Result<u64, GameError> {
        self.with_current_game(target, |game| Ok(game.end_turn(actor, now)))
    }

    pub fn chat(
        &self,
        target: &Target,
        actor: &Actor,
        message: &str,
        now: DateTime<Utc>,
    ) -> Result<u64, GameError> {
        self.with_current_game(target, |game| game.chat(actor, message, now))
    }

    /// Presence-only update; appends nothing.
    pub fn ping(
        &self,
        target: &Target,
        player_id: &str,
        name: &str,
        team: Option<Team>,
        now: DateTime<Utc>,
    ) -> Result<(), GameError> {
        self.with_current_game(target, |game| {
            game.mark_seen(player_id, name, team, now);
            Ok(())
        })
    }

    /// Long-poll for events after `target.last_event`.
    ///
    /// Returns at once if there is something to send or the seed is stale.
    /// Otherwise waits, outside every lock, until the game's signal fires,
    /// `timeout` elapses or `cancelled` resolves. Running out the clock is a
    /// normal empty answer, not an error.
    #[allow(clippy::too_many_arguments)]
    pub async fn poll<C>(
        &self,
        target: &Target,
        player_id: &str,
        name: &str,
        team: Option<Team>,
        now: DateTime<Utc>,
        timeout: Duration,
        cancelled: C,
    ) -> Result<GameUpdate, GameError>
    where
        C: Future<Output = ()>,
    {
        let game = self.lookup(&target.session_id)?;
        let ready = self.with_live_game(&target.session_id, game, |game| {
            if !game.is_current(target.seed) {
                return ControlFlow::Break(game.update_since(target.last_event));
            }
            game.mark_seen(player_id, name, team, now);

            // Read and subscribe in the same hold so no append slips between.
            let (events, waiter) = game.events_since(target.last_event);
            if !events.is_empty() {
                return ControlFlow::Break(GameUpdate {
                    seed: game.seed(),
                    events,
                });
            }
            ControlFlow::Continue((game.seed(), waiter))
        })?;
        let (seed, waiter) = match ready {
            ControlFlow::Break(update) => return Ok(update),
            ControlFlow::Continue(pending) => pending,
        };

        tokio::select! {
            _ = waiter.fired() => {
                // A reset may have replaced the game while we slept.
                let game = self.lookup(&target.session_id)?;
                self.with_live_game(&target.session_id, game, |game| {
                    game.update_since(target.last_event)
                })
            }
            _ = cancelled => Ok(GameUpdate::empty(seed)),
            _ = tokio::time::sleep(timeout) => Ok(GameUpdate::empty(seed)),
        }
    }

    /// Counts only sessions with at least one player.
    pub fn stats(&self) -> Stats {
        let games: Vec<SharedGame> = self.games.iter().map(|e| e.value().clone()).collect();

        games.iter().fold(Stats::default(), |mut stats, game| {
            let players = lock(game).player_count();
            if players > 0 {
                stats.active_games += 1;
                stats.active_players += players;
            }
            stats
        })
    }

    /// Prune idle players everywhere, then delete sessions that are both
    /// empty and older than the retention window. Returns the number deleted.
    pub fn sweep(&self, now: DateTime<Utc>, policy: SweepPolicy) -> usize {
        let games: Vec<(String, SharedGame)> = self
            .games
            .iter()
            .map(|e| (e.key().clone(), e.value().clone()))
            .collect();

        let mut removed = 0;
        for (session_id, game) in games {
            let expired = {
                let mut game = lock(&game);
                let remaining = game.prune_old_players(now, policy.player_idle);
                remaining == 0 && now - game.created_at() > policy.retention
            };
            if !expired {
                continue;
            }

            // Re-check under the map lock: the session may have been reset or
            // rejoined since we looked.
            let deleted = self.games.remove_if(&session_id, |_, live| {
                let mut live_game = lock(live);
                let idle = Arc::ptr_eq(live, &game) && live_game.player_count() == 0;
                if idle {
                    live_game.retire();
                }
                idle
            });
            if deleted.is_some() {
                removed += 1;
                tracing::info!("Removed idle game {}", session_id);
            }
        }
        removed
    }

    /// Suggest an unused `word-word` session id.
    pub fn autogenerate_id(&self) -> Result<String, GameError> {
        if self.words.is_empty() {
            return Err(GameError::TooFewWords {
                required: 1,
                provided: 0,
            });
        }

        let mut guard = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        let rng: &mut StdRng = &mut guard;
        let pick = |rng: &mut StdRng| {
            self.words
                .choose(rng)
                .map(|w| w.to_lowercase())
                .unwrap_or_default()
        };

        let mut id = String::new();
        for _ in 0..ID_ATTEMPTS {
            id = format!("{}-{}", pick(&mut *rng), pick(&mut *rng));
            if !self.contains(&id) {
                return Ok(id);
            }
        }
        Ok(format!("{}-{}", id, rng.random_range(1000..10000)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        game::BoardGenerator,
        models::{EventKind, Tile},
    };
    use std::time::Instant;
    use tokio::sync::oneshot;

    fn registry() -> GameRegistry {
        let words = (0..60).map(|i| format!("WORD{:02}", i)).collect();
        GameRegistry::with_rng(words, StdRng::seed_from_u64(1))
    }

    fn target(session_id: &str, seed: Seed, last_event: u64) -> Target {
        Target {
            session_id: session_id.to_string(),
            seed: Some(seed),
            last_event,
        }
    }

    fn actor(id: &str, team: u8) -> Actor {
        Actor {
            player_id: id.to_string(),
            name: id.to_uppercase(),
            team: Team::new(team).unwrap(),
        }
    }

    #[test]
    fn test_create_new_game() {
        let registry = registry();
        let snapshot = registry.create_or_reset("blue-fox", None, None, Utc::now()).unwrap();

        assert!(registry.contains("blue-fox"));
        assert_eq!(snapshot.tiles.len(), BoardGenerator::required_words());
        assert!(snapshot.players.is_empty());
    }

    #[test]
    fn test_create_requires_session_id() {
        let registry = registry();
        let err = registry.create_or_reset("", None, None, Utc::now()).unwrap_err();
        assert!(matches!(err, GameError::Malformed(_)));
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_create_with_too_few_words_produces_no_game() {
        let registry = registry();
        let words = vec!["ONE".to_string(), "TWO".to_string()];
        let err = registry
            .create_or_reset("g", Some(words), None, Utc::now())
            .unwrap_err();
        assert!(matches!(err, GameError::TooFewWords { required: 25, provided: 2 }));
        assert!(!registry.contains("g"));
    }

    #[test]
    fn test_create_with_custom_words_uses_them() {
        let registry = registry();
        let words: Vec<String> = (0..25).map(|i| format!("  custom{} ", i)).collect();
        let snapshot = registry.create_or_reset("g", Some(words), None, Utc::now()).unwrap();
        assert!(snapshot.tiles.iter().all(|t| t.word().starts_with("CUSTOM")));
    }

    #[tokio::test]
    async fn test_stale_prev_seed_returns_existing_game_unchanged() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let live = target("g", created.seed, 0);
        registry.guess(&live, &actor("a", 1), 0, now).unwrap();

        let stale = Seed::new(created.seed.value() ^ 1);
        for prev in [None, Some(stale)] {
            let again = registry.create_or_reset("g", None, prev, now).unwrap();
            assert_eq!(again.seed, created.seed);
            assert_eq!(
                again.tiles.iter().map(Tile::word).collect::<Vec<_>>(),
                created.tiles.iter().map(Tile::word).collect::<Vec<_>>()
            );
        }

        // The guess made before the ignored creates is still there.
        let update = registry
            .poll(&live, "a", "A", Team::new(1), now, Duration::from_millis(10), std::future::pending())
            .await
            .unwrap();
        assert_eq!(update.events.len(), 1);
    }

    #[test]
    fn test_reset_with_matching_seed_replaces_game() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        registry
            .end_turn(&target("g", created.seed, 0), &actor("a", 2), now)
            .unwrap();

        let reset = registry
            .create_or_reset("g", None, Some(created.seed), now)
            .unwrap();
        assert_ne!(reset.seed, created.seed);

        // Identity carries over, team does not.
        let player = reset.players.get("a").unwrap();
        assert_eq!(player.team, None);

        // Old-generation requests are now stale.
        let err = registry
            .end_turn(&target("g", created.seed, 0), &actor("a", 2), now)
            .unwrap_err();
        match err {
            GameError::SeedMismatch(update) => {
                assert_eq!(update.seed, reset.seed);
                assert!(update.events.is_empty());
            }
            other => panic!("expected seed mismatch, got {:?}", other),
        }
    }

    #[test]
    fn test_action_on_replaced_handle_is_told_to_resync() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();

        // Looked up before the reset, acted on after it.
        let old = registry.lookup("g").unwrap();
        let reset = registry
            .create_or_reset("g", None, Some(created.seed), now)
            .unwrap();
        assert!(lock(&old).is_retired());

        let err = registry
            .act_on_current(old.clone(), &target("g", created.seed, 0), |game| {
                Ok(game.end_turn(&actor("a", 1), now))
            })
            .unwrap_err();
        match err {
            GameError::SeedMismatch(update) => {
                assert_eq!(update.seed, reset.seed);
                assert!(update.events.is_empty());
            }
            other => panic!("expected seed mismatch, got {:?}", other),
        }

        // Neither generation recorded the write.
        assert!(lock(&old).events_since(0).0.is_empty());
        let live = registry.lookup("g").unwrap();
        assert!(lock(&live).events_since(0).0.is_empty());
    }

    #[test]
    fn test_handle_to_swept_game_is_not_found() {
        let registry = registry();
        let now = Utc::now();
        registry
            .create_or_reset("g", None, None, now - TimeDelta::hours(25))
            .unwrap();
        let old = registry.lookup("g").unwrap();

        assert_eq!(registry.sweep(now, SweepPolicy::default()), 1);
        assert!(lock(&old).is_retired());

        let err = registry.with_live_game("g", old, |_| ()).unwrap_err();
        assert!(matches!(err, GameError::NotFound));
    }

    #[test]
    fn test_unknown_session_is_not_found() {
        let registry = registry();
        let err = registry
            .end_turn(&target("nope", Seed::new(1), 0), &actor("a", 1), Utc::now())
            .unwrap_err();
        assert!(matches!(err, GameError::NotFound));
    }

    #[test]
    fn test_out_of_bounds_guess_is_rejected_without_mutation() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let live = target("g", created.seed, 0);

        let err = registry.guess(&live, &actor("a", 1), 99, now).unwrap_err();
        assert!(matches!(err, GameError::InvalidTile { index: 99, .. }));

        let unchanged = registry.create_or_reset("g", None, None, now).unwrap();
        assert!(unchanged.tiles.iter().all(|t| !t.is_revealed()));
        assert!(unchanged.players.is_empty());
        assert_eq!(registry.stats(), Stats::default());
    }

    #[test]
    fn test_seed_mismatch_does_not_touch_presence() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let stale = target("g", Seed::new(created.seed.value() ^ 1), 0);

        assert!(registry.ping(&stale, "p", "P", None, now).is_err());
        assert!(registry.chat(&stale, &actor("p", 1), "hi", now).is_err());
        assert_eq!(registry.stats().active_players, 0);
    }

    #[tokio::test]
    async fn test_poll_returns_available_events_immediately() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let live = target("g", created.seed, 0);
        registry.chat(&live, &actor("a", 1), "hello", now).unwrap();

        let update = registry
            .poll(&live, "b", "B", Team::new(2), now, Duration::from_secs(25), std::future::pending())
            .await
            .unwrap();
        assert_eq!(update.seed, created.seed);
        assert_eq!(update.events.len(), 1);
        assert_eq!(update.events[0].number, 1);

        // Polling also records presence.
        assert_eq!(registry.stats().active_players, 2);
    }

    #[tokio::test]
    async fn test_poll_times_out_with_empty_update() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();

        let update = registry
            .poll(
                &target("g", created.seed, 0),
                "a",
                "A",
                None,
                now,
                Duration::from_millis(50),
                std::future::pending(),
            )
            .await
            .unwrap();
        assert_eq!(update, GameUpdate::empty(created.seed));
    }

    #[tokio::test]
    async fn test_poll_returns_on_cancel() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let (cancel, cancelled) = oneshot::channel::<()>();

        let live = target("g", created.seed, 0);
        let started = Instant::now();
        let poll = registry.poll(
            &live,
            "a",
            "A",
            None,
            now,
            Duration::from_secs(25),
            async move {
                let _ = cancelled.await;
            },
        );
        drop(cancel);

        let update = poll.await.unwrap();
        assert!(update.events.is_empty());
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_poll_with_stale_seed_resyncs_without_presence() {
        let registry = registry();
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();

        let update = registry
            .poll(
                &Target {
                    session_id: "g".to_string(),
                    seed: None,
                    last_event: 0,
                },
                "a",
                "A",
                None,
                now,
                Duration::from_secs(25),
                std::future::pending(),
            )
            .await
            .unwrap();
        assert_eq!(update.seed, created.seed);
        assert_eq!(registry.stats().active_players, 0);
    }

    #[tokio::test]
    async fn test_two_waiters_both_wake_on_one_guess() {
        let registry = Arc::new(registry());
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let live = target("g", created.seed, 0);

        let spawn_waiter = |player: &'static str| {
            let registry = registry.clone();
            let live = live.clone();
            tokio::spawn(async move {
                let started = Instant::now();
                let update = registry
                    .poll(&live, player, player, None, Utc::now(), Duration::from_secs(25), std::future::pending())
                    .await
                    .unwrap();
                (update, started.elapsed())
            })
        };
        let first = spawn_waiter("w1");
        let second = spawn_waiter("w2");

        // Let both register as waiters.
        while registry.stats().active_players < 2 {
            tokio::task::yield_now().await;
        }

        registry.guess(&live, &actor("g1", 1), 12, Utc::now()).unwrap();

        for handle in [first, second] {
            let (update, waited) = handle.await.unwrap();
            assert!(waited < Duration::from_secs(5));
            assert_eq!(update.events.len(), 1);
            assert_eq!(update.events[0].number, 1);
            assert_eq!(
                update.events[0].kind,
                EventKind::Guess { index: 12 }
            );
        }
    }

    #[tokio::test]
    async fn test_reset_wakes_waiters_with_new_generation() {
        let registry = Arc::new(registry());
        let now = Utc::now();
        let created = registry.create_or_reset("g", None, None, now).unwrap();
        let live = target("g", created.seed, 0);

        let waiter = {
            let registry = registry.clone();
            let live = live.clone();
            tokio::spawn(async move {
                registry
                    .poll(&live, "w", "W", None, Utc::now(), Duration::from_secs(25), std::future::pending())
                    .await
            })
        };
        while registry.stats().active_players < 1 {
            tokio::task::yield_now().await;
        }

        let reset = registry
            .create_or_reset("g", None, Some(created.seed), Utc::now())
            .unwrap();

        let update = tokio::time::timeout(Duration::from_secs(5), waiter)
            .await
            .expect("waiter should wake on reset")
            .unwrap()
            .unwrap();
        assert_eq!(update.seed, reset.seed);
        assert!(update.events.is_empty());
    }

    #[test]
    fn test_stats_count_only_games_with_players() {
        let registry = registry();
        let now = Utc::now();
        let a = registry.create_or_reset("a", None, None, now).unwrap();
        registry.create_or_reset("b", None, None, now).unwrap();

        let live = target("a", a.seed, 0);
        registry.ping(&live, "p1", "One", Team::new(1), now).unwrap();
        registry.ping(&live, "p2", "Two", None, now).unwrap();

        assert_eq!(
            registry.stats(),
            Stats {
                active_games: 1,
                active_players: 2
            }
        );
    }

    #[test]
    fn test_sweep_prunes_players_and_old_empty_games() {
        let registry = registry();
        let now = Utc::now();
        let policy = SweepPolicy::default();

        // Empty and older than the retention window: deleted.
        registry
            .create_or_reset("old-empty", None, None, now - TimeDelta::hours(25))
            .unwrap();
        // Empty but young: kept.
        registry
            .create_or_reset("young-empty", None, None, now - TimeDelta::hours(23))
            .unwrap();
        // Old, with one idle and one active player: kept, idle player pruned.
        let busy = registry
            .create_or_reset("old-busy", None, None, now - TimeDelta::hours(30))
            .unwrap();
        let live = target("old-busy", busy.seed, 0);
        registry
            .ping(&live, "idle", "Idle", None, now - TimeDelta::minutes(11))
            .unwrap();
        registry.ping(&live, "here", "Here", None, now).unwrap();

        assert_eq!(registry.sweep(now, policy), 1);
        assert!(!registry.contains("old-empty"));
        assert!(registry.contains("young-empty"));
        assert!(registry.contains("old-busy"));
        assert_eq!(registry.stats().active_players, 1);

        // Once the last player idles out the old game goes too.
        assert_eq!(registry.sweep(now + TimeDelta::minutes(11), policy), 1);
        assert!(!registry.contains("old-busy"));
        assert!(registry.contains("young-empty"));
    }

    #[test]
    fn test_autogenerate_id_skips_live_sessions() {
        let registry = registry();
        let id = registry.autogenerate_id().unwrap();
        let (first, second) = id.split_once('-').unwrap();
        assert!(first.starts_with("word"));
        assert!(second.starts_with("word"));
        assert!(!registry.contains(&id));

        let empty = GameRegistry::new(Vec::new());
        assert!(empty.autogenerate_id().is_err());
    }
}
