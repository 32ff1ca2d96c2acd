use hangman_core::RankingEngine;
use hangman_persistence::repositories::GameRepository;
use tokio::sync::RwLock;
use tracing::warn;

/// Process-wide memoized average of attempts remaining across in-progress
/// games. Refreshed after each game creation; readers never wait for a
/// refresh and may observe a stale value.
pub struct AverageAttemptsCache {
    value: RwLock<Option<String>>,
}

impl AverageAttemptsCache {
    pub fn new() -> Self {
        Self {
            value: RwLock::new(None),
        }
    }

    /// Last computed average, or `None` if no recompute has run yet.
    pub async fn read(&self) -> Option<String> {
        self.value.read().await.clone()
    }

    /// Best-effort refresh. When no games are in progress the previous
    /// value is kept.
    pub async fn recompute(&self, games: &GameRepository) {
        match games.unfinished_attempts_remaining().await {
            Ok(attempts) => {
                if let Some(average) = RankingEngine::average_attempts_remaining(&attempts) {
                    let mut slot = self.value.write().await;
                    *slot = Some(format!("{average:.2}"));
                }
            }
            Err(err) => warn!("average-attempts recompute failed: {err:#}"),
        }
    }
}

impl Default for AverageAttemptsCache {
    fn default() -> Self {
        Self::new()
    }
}
