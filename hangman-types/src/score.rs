use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Immutable result of one finished game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreRecord {
    pub user_name: String,
    pub date: String, // ISO 8601 date
    pub won: bool,
    pub guesses: i32,
}
