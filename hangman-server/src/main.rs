use std::sync::Arc;
use tokio::signal;
use tracing::info;

use hangman_core::WordBank;
use hangman_persistence::{
    connection::connect_and_migrate,
    repositories::{GameRepository, ScoreRepository, UserRepository},
};
use hangman_server::{
    config::Config, create_routes, game_service::GameService, stats::AverageAttemptsCache,
};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Hangman server...");

    let config = Config::new();

    // Initialize database connection and run migrations
    let db = match connect_and_migrate().await {
        Ok(db) => db,
        Err(e) => {
            tracing::error!("Failed to connect to database and run migrations: {}", e);
            std::process::exit(1);
        }
    };

    let users = UserRepository::new(db.clone());
    let games = GameRepository::new(db.clone());
    let scores = ScoreRepository::new(db);
    let stats = Arc::new(AverageAttemptsCache::new());

    let service = Arc::new(GameService::new(
        users,
        games,
        scores,
        WordBank::default(),
        config.attempts_per_game,
        stats,
    ));

    let routes = create_routes(service);

    info!("Server starting on {}:{}", config.host, config.port);

    let addr = (
        config.host.parse::<std::net::IpAddr>().expect("Invalid HOST"),
        config.port,
    );

    let (addr, server) = warp::serve(routes).bind_with_graceful_shutdown(addr, async {
        // Wait for SIGINT (Ctrl+C) or SIGTERM
        #[cfg(unix)]
        {
            let mut sigint = signal::unix::signal(signal::unix::SignalKind::interrupt()).unwrap();
            let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate()).unwrap();

            tokio::select! {
                _ = sigint.recv() => {
                    info!("Received SIGINT, shutting down gracefully...");
                }
                _ = sigterm.recv() => {
                    info!("Received SIGTERM, shutting down gracefully...");
                }
            }
        }

        #[cfg(not(unix))]
        {
            signal::ctrl_c().await.expect("Failed to listen for ctrl+c");
            info!("Received Ctrl+C, shutting down gracefully...");
        }
    });

    info!(
        "Server started successfully on {}. Press Ctrl+C to stop.",
        addr
    );
    server.await;
    info!("Server shutdown complete.");
}
