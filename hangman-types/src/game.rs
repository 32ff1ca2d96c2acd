use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::GameId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// One entry of a game's append-only move log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum GuessEvent {
    LetterFound { letter: char },
    LetterMissed { letter: char },
    WordCorrect { word: String },
    WordWrong { word: String },
}

impl GuessEvent {
    /// The raw token the player submitted for this event.
    pub fn token(&self) -> String {
        match self {
            GuessEvent::LetterFound { letter } | GuessEvent::LetterMissed { letter } => {
                letter.to_string()
            }
            GuessEvent::WordCorrect { word } | GuessEvent::WordWrong { word } => word.clone(),
        }
    }
}

/// Caller-facing view of a game, used for HTTP responses where we need to
/// keep the secret word hidden.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameSnapshot {
    pub id: GameId,
    pub user_name: String,
    pub guessed_letters: String,
    pub revealed: String,
    pub attempts_remaining: i32,
    pub game_over: bool,
    pub message: String,
}
