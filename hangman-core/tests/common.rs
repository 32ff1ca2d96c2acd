use hangman_core::{DEFAULT_ATTEMPTS, Game, WordBank};
use hangman_types::User;
use uuid::Uuid;

pub fn create_test_user(name: &str) -> User {
    User {
        id: Uuid::new_v4(),
        name: name.to_string(),
        email: Some(format!("{}@example.com", name.to_lowercase())),
        wins: 0,
        total_games_played: 0,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn create_standard_game() -> Game {
    Game::new(
        &create_test_user("Alice"),
        "mountain".to_string(),
        DEFAULT_ATTEMPTS,
    )
}

#[allow(dead_code)]
pub fn create_test_bank() -> WordBank {
    WordBank::new("mountain")
}
