use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub attempts_per_game: i32,
}

impl Config {
    pub fn new() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("Invalid PORT"),
            attempts_per_game: env::var("ATTEMPTS_PER_GAME")
                .unwrap_or_else(|_| "9".to_string())
                .parse()
                .expect("Invalid ATTEMPTS_PER_GAME"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
