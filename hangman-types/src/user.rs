use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: Option<String>,
    pub wins: i32,
    pub total_games_played: i32,
    pub created_at: String, // ISO 8601 string for simplicity
}

impl User {
    /// Fraction of played games this user has won, 0.0 before any game
    /// finishes (never divides by zero).
    pub fn win_percentage(&self) -> f64 {
        if self.total_games_played > 0 {
            self.wins as f64 / self.total_games_played as f64
        } else {
            0.0
        }
    }
}

/// One row of the win-rate leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct UserRanking {
    pub name: String,
    pub email: Option<String>,
    pub wins: i32,
    pub total_games_played: i32,
    pub win_percentage: f64,
}

impl From<&User> for UserRanking {
    fn from(user: &User) -> Self {
        UserRanking {
            name: user.name.clone(),
            email: user.email.clone(),
            wins: user.wins,
            total_games_played: user.total_games_played,
            win_percentage: user.win_percentage(),
        }
    }
}
