use std::sync::{Arc, OnceLock};

use regex::Regex;
use tracing::{error, info};
use uuid::Uuid;

use crate::stats::AverageAttemptsCache;
use hangman_core::{Game, MoveResult, RankingEngine, WordBank};
use hangman_persistence::repositories::{GameRepository, ScoreRepository, UserRepository};
use hangman_types::{
    ApiError, ApiMessage, GameSnapshot, GuessEvent, ScoreRecord, User, UserRanking,
};

pub type ServiceResult<T> = Result<T, ApiError>;

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

fn email_pattern() -> &'static Regex {
    EMAIL_PATTERN.get_or_init(|| {
        Regex::new(r"^[_a-z0-9-]+(\.[_a-z0-9-]+)*@[a-z0-9-]+(\.[a-z0-9-]+)*(\.[a-z]{2,4})$")
            .expect("email pattern is valid")
    })
}

fn internal(err: anyhow::Error) -> ApiError {
    error!("storage failure: {err:#}");
    ApiError::internal(err)
}

/// Request-level orchestration: loads and stores state through the
/// repositories, applies guesses through the state machine, and records
/// results when a game finishes.
pub struct GameService {
    users: UserRepository,
    games: GameRepository,
    scores: ScoreRepository,
    word_bank: WordBank,
    attempts_per_game: i32,
    stats: Arc<AverageAttemptsCache>,
}

impl GameService {
    pub fn new(
        users: UserRepository,
        games: GameRepository,
        scores: ScoreRepository,
        word_bank: WordBank,
        attempts_per_game: i32,
        stats: Arc<AverageAttemptsCache>,
    ) -> Self {
        Self {
            users,
            games,
            scores,
            word_bank,
            attempts_per_game,
            stats,
        }
    }

    pub async fn create_user(&self, name: &str, email: Option<String>) -> ServiceResult<ApiMessage> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ApiError::InvalidInput {
                reason: "user name must not be empty".to_string(),
            });
        }
        if let Some(address) = email.as_deref() {
            if !email_pattern().is_match(address) {
                return Err(ApiError::InvalidInput {
                    reason: format!("malformed email address: {address}"),
                });
            }
        }
        if self
            .users
            .find_by_name(name)
            .await
            .map_err(internal)?
            .is_some()
        {
            return Err(ApiError::Conflict {
                name: name.to_string(),
            });
        }

        self.users.create_user(name, email).await.map_err(internal)?;
        info!(user = name, "created user");
        Ok(ApiMessage::new(format!("User {name} created!")))
    }

    pub async fn new_game(&self, user_name: &str) -> ServiceResult<GameSnapshot> {
        let user = self.require_user(user_name).await?;
        let secret_word = self.word_bank.pick().map_err(internal)?;

        let game = Game::new(&user, secret_word, self.attempts_per_game);
        self.games.insert(&game).await.map_err(internal)?;
        info!(game_id = %game.id, user = %user.name, "created game");

        self.spawn_average_recompute();
        Ok(game.snapshot("Good luck playing Hangman!"))
    }

    pub async fn make_move(&self, game_id: Uuid, token: &str) -> ServiceResult<GameSnapshot> {
        let mut game = self.require_game(game_id).await?;
        let result = game.apply_guess(token)?;

        match result.finished() {
            Some(won) => self.finish_game(&game, won).await?,
            None => self.games.update(&game).await.map_err(internal)?,
        }

        let message = Self::move_message(&result);
        Ok(game.snapshot(message))
    }

    pub async fn get_game(&self, game_id: Uuid) -> ServiceResult<GameSnapshot> {
        let game = self.require_game(game_id).await?;
        Ok(game.snapshot("Here is the requested game"))
    }

    pub async fn game_history(&self, game_id: Uuid) -> ServiceResult<Vec<GuessEvent>> {
        let game = self.require_game(game_id).await?;
        Ok(game.history)
    }

    pub async fn cancel_game(&self, game_id: Uuid) -> ServiceResult<ApiMessage> {
        let game = self.require_game(game_id).await?;
        if game.game_over() {
            return Err(ApiError::InvalidOperation {
                reason: "completed games can not be deleted".to_string(),
            });
        }

        self.games.delete(game_id).await.map_err(internal)?;
        info!(game_id = %game_id, "cancelled game");
        Ok(ApiMessage::new(format!("Game {game_id} removed")))
    }

    pub async fn list_scores(&self) -> ServiceResult<Vec<ScoreRecord>> {
        self.scores.all_scores().await.map_err(internal)
    }

    pub async fn top_scores(&self, limit: i64) -> ServiceResult<Vec<ScoreRecord>> {
        let winning = self.scores.winning_scores().await.map_err(internal)?;
        Ok(RankingEngine::top_scores(&winning, limit))
    }

    pub async fn user_games(&self, user_name: &str) -> ServiceResult<Vec<GameSnapshot>> {
        let user = self.require_user(user_name).await?;
        let games = self
            .games
            .find_unfinished_by_user(user.id)
            .await
            .map_err(internal)?;
        Ok(games.iter().map(|game| game.snapshot("active game")).collect())
    }

    pub async fn user_rankings(&self) -> ServiceResult<Vec<UserRanking>> {
        let players = self.users.players_with_games().await.map_err(internal)?;
        Ok(RankingEngine::leaderboard_by_win_rate(&players))
    }

    pub async fn user_scores(&self, user_name: &str) -> ServiceResult<Vec<ScoreRecord>> {
        let user = self.require_user(user_name).await?;
        self.scores.scores_for_user(user.id).await.map_err(internal)
    }

    pub async fn average_attempts(&self) -> ApiMessage {
        ApiMessage::new(self.stats.read().await.unwrap_or_default())
    }

    /// Runs exactly once per game, on the transition out of `InProgress`:
    /// persists the final state, appends the score record, and folds the
    /// outcome into the owner's counters.
    async fn finish_game(&self, game: &Game, won: bool) -> ServiceResult<()> {
        self.games.update(game).await.map_err(internal)?;
        self.scores
            .insert(game.user_id, won, game.guesses_used())
            .await
            .map_err(internal)?;
        self.users
            .record_game_result(game.user_id, won)
            .await
            .map_err(internal)?;
        info!(game_id = %game.id, won, guesses = game.guesses_used(), "recorded finished game");
        Ok(())
    }

    fn spawn_average_recompute(&self) {
        // Fire and forget; the creating request never waits on this.
        let stats = self.stats.clone();
        let games = self.games.clone();
        tokio::spawn(async move {
            stats.recompute(&games).await;
        });
    }

    fn move_message(result: &MoveResult) -> String {
        match result {
            MoveResult::Won(_) => "You won!".to_string(),
            MoveResult::Lost(event) => format!("{} Game over!", Self::event_message(event)),
            MoveResult::Continuing(event) => Self::event_message(event).to_string(),
        }
    }

    fn event_message(event: &GuessEvent) -> &'static str {
        match event {
            GuessEvent::LetterFound { .. } => "Your letter is in the secret word",
            GuessEvent::LetterMissed { .. } => "The letter you guessed is not there!",
            GuessEvent::WordWrong { .. } => "That is not the secret word!",
            GuessEvent::WordCorrect { .. } => "You won!",
        }
    }

    async fn require_user(&self, name: &str) -> ServiceResult<User> {
        self.users
            .find_by_name(name)
            .await
            .map_err(internal)?
            .ok_or_else(|| ApiError::not_found(format!("user {name}")))
    }

    async fn require_game(&self, id: Uuid) -> ServiceResult<Game> {
        self.games
            .find_by_id(id)
            .await
            .map_err(internal)?
            .ok_or_else(|| ApiError::not_found(format!("game {id}")))
    }
}
