use std::sync::Arc;

use hangman_core::WordBank;
use hangman_persistence::connection::connect_to_memory_database;
use hangman_persistence::repositories::{GameRepository, ScoreRepository, UserRepository};
use hangman_server::game_service::GameService;
use hangman_server::stats::AverageAttemptsCache;
use migration::{Migrator, MigratorTrait};

#[allow(dead_code)]
pub struct TestSetup {
    pub service: Arc<GameService>,
    pub stats: Arc<AverageAttemptsCache>,
    pub games: GameRepository,
}

/// Service wired to in-memory storage and a single-word bank, so every
/// game's secret is "mountain".
pub async fn setup_service() -> TestSetup {
    let db = connect_to_memory_database().await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let games = GameRepository::new(db.clone());
    let stats = Arc::new(AverageAttemptsCache::new());
    let service = Arc::new(GameService::new(
        UserRepository::new(db.clone()),
        games.clone(),
        ScoreRepository::new(db),
        WordBank::new("mountain"),
        9,
        stats.clone(),
    ));

    TestSetup {
        service,
        stats,
        games,
    }
}

#[allow(dead_code)]
pub async fn create_test_app()
-> impl warp::Filter<Extract = impl warp::Reply, Error = warp::Rejection> + Clone {
    let setup = setup_service().await;
    hangman_server::create_routes(setup.service)
}
