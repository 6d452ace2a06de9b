use anyhow::{Context, Result};
use chrono::TimeDelta;
use std::{env, str::FromStr, time::Duration};

use crate::game::SweepPolicy;

#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub game: GameConfig,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub wordlist_dir: String,
    /// Longest a long-poll is held open before answering empty.
    pub poll_timeout: Duration,
    pub sweep_interval: Duration,
    pub player_idle_secs: u32,
    pub game_retention_hours: u32,
}

impl GameConfig {
    pub fn sweep_policy(&self) -> SweepPolicy {
        SweepPolicy {
            player_idle: TimeDelta::seconds(i64::from(self.player_idle_secs)),
            retention: TimeDelta::hours(i64::from(self.game_retention_hours)),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let server = ServerConfig {
            host: env::var("HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: parse_or("PORT", 8080)?,
        };

        let game = GameConfig {
            wordlist_dir: env::var("WORDLIST_DIR")
                .unwrap_or_else(|_| "./wordlists".to_string()),
            poll_timeout: Duration::from_secs(parse_or("POLL_TIMEOUT_SECS", 25)?),
            sweep_interval: Duration::from_secs(parse_or("SWEEP_INTERVAL_SECS", 600)?),
            player_idle_secs: parse_or("PLAYER_IDLE_SECS", 600)?,
            game_retention_hours: parse_or("GAME_RETENTION_HOURS", 24)?,
        };

        Ok(Config { server, game })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Read `key`, falling back to `default` when unset. A value that is set but
/// does not parse is an error.
fn parse_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number", key)),
        Err(_) => Ok(default),
    }
}
