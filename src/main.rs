mod config;
mod dictionary;
mod error;
mod game;
mod models;
mod routes;

use std::sync::Arc;

use anyhow::{ensure, Result};
use chrono::Utc;
use config::Config;
use dictionary::WordLists;
use game::{BoardGenerator, GameRegistry};
use tokio::sync::watch;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub config: Config,
    /// Owns every live game for the lifetime of the process
    pub registry: GameRegistry,
    /// Flips to `true` when the server starts shutting down
    pub shutdown: watch::Receiver<bool>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "codenames_green_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Codenames Green backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load vocabulary; without enough words no game can be dealt
    let word_lists = WordLists::load_dir(&config.game.wordlist_dir).await?;
    ensure!(
        word_lists.len() >= BoardGenerator::required_words(),
        "Word lists in {} hold {} distinct words, need at least {}",
        config.game.wordlist_dir,
        word_lists.len(),
        BoardGenerator::required_words()
    );
    tracing::info!(
        "Vocabulary loaded: {} words across lists [{}]",
        word_lists.len(),
        word_lists.names().collect::<Vec<_>>().join(", ")
    );

    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    // Create application state
    let state = Arc::new(AppState {
        config: config.clone(),
        registry: GameRegistry::new(word_lists.all_words().to_vec()),
        shutdown: shutdown_rx,
    });

    // Spawn background task to prune idle players and reclaim abandoned games
    let sweep_state = state.clone();
    tokio::spawn(async move {
        game_sweep_task(sweep_state).await;
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = routes::create_routes()
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown_tx))
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on ctrl-c, after telling pending long-polls to answer now.
async fn shutdown_signal(shutdown_tx: watch::Sender<bool>) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown requested, releasing pending polls");
    shutdown_tx.send_replace(true);
}

/// Background task that periodically prunes idle players and deletes old empty games
async fn game_sweep_task(state: Arc<AppState>) {
    let mut interval = tokio::time::interval(state.config.game.sweep_interval);

    loop {
        interval.tick().await;
        sweep_once(&state);
    }
}

fn sweep_once(state: &AppState) -> usize {
    let removed = state
        .registry
        .sweep(Utc::now(), state.config.game.sweep_policy());
    let stats = state.registry.stats();
    tracing::debug!(
        "Sweep removed {} games; {} games remain, {} active with {} players",
        removed,
        state.registry.len(),
        stats.active_games,
        stats.active_players
    );
    removed
}
