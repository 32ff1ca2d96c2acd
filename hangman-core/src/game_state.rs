use hangman_types::{ApiError, GameId, GameSnapshot, GameStatus, GuessEvent, User, UserId};
use tracing::debug;
use uuid::Uuid;

pub const DEFAULT_ATTEMPTS: i32 = 9;
pub const PLACEHOLDER: char = '_';

/// A guess token, split at the boundary into its two shapes. A
/// one-character token is always a letter guess; a token as long as the
/// secret word is a full-word guess; everything else is rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

impl Guess {
    fn parse(token: &str, secret_len: usize) -> Result<Self, ApiError> {
        if token.is_empty() || !token.chars().all(|c| c.is_alphabetic()) {
            return Err(ApiError::InvalidGuess {
                token: token.to_string(),
            });
        }

        let chars: Vec<char> = token.chars().collect();
        match chars.as_slice() {
            [letter] => Ok(Guess::Letter(*letter)),
            _ if chars.len() == secret_len => Ok(Guess::Word(token.to_string())),
            _ => Err(ApiError::InvalidGuess {
                token: token.to_string(),
            }),
        }
    }
}

/// What a single applied guess did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveResult {
    Continuing(GuessEvent),
    Won(GuessEvent),
    Lost(GuessEvent),
}

impl MoveResult {
    pub fn event(&self) -> &GuessEvent {
        match self {
            MoveResult::Continuing(event) | MoveResult::Won(event) | MoveResult::Lost(event) => {
                event
            }
        }
    }

    /// `Some(won)` exactly when this move ended the game.
    pub fn finished(&self) -> Option<bool> {
        match self {
            MoveResult::Continuing(_) => None,
            MoveResult::Won(_) => Some(true),
            MoveResult::Lost(_) => Some(false),
        }
    }
}

/// One hangman game. The secret word is hidden from clients; callers see a
/// [`GameSnapshot`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: GameId,
    pub user_id: UserId,
    pub user_name: String,
    pub secret_word: String,
    pub guessed_letters: Vec<char>,
    pub attempts_allowed: i32,
    pub attempts_remaining: i32,
    pub status: GameStatus,
    pub history: Vec<GuessEvent>,
}

impl Game {
    pub fn new(owner: &User, secret_word: String, attempts_allowed: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: owner.id,
            user_name: owner.name.clone(),
            secret_word,
            guessed_letters: Vec::new(),
            attempts_allowed,
            attempts_remaining: attempts_allowed,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    pub fn game_over(&self) -> bool {
        self.status.is_over()
    }

    pub fn guesses_used(&self) -> i32 {
        self.attempts_allowed - self.attempts_remaining
    }

    pub fn guessed_letters_string(&self) -> String {
        self.guessed_letters.iter().collect()
    }

    /// Per-position display string: guessed letters in place, placeholders
    /// elsewhere. A won game shows the full word even when it was solved by
    /// a whole-word guess.
    pub fn revealed_pattern(&self) -> String {
        if self.status == GameStatus::Won {
            return self.secret_word.clone();
        }
        self.secret_word
            .chars()
            .map(|c| {
                if self.guessed_letters.contains(&c) {
                    c
                } else {
                    PLACEHOLDER
                }
            })
            .collect()
    }

    fn all_revealed(&self) -> bool {
        self.secret_word
            .chars()
            .all(|c| self.guessed_letters.contains(&c))
    }

    /// Apply one guess token. Rejections (`TerminalGame`, `InvalidGuess`,
    /// `RepeatedGuess`) leave the game untouched.
    pub fn apply_guess(&mut self, token: &str) -> Result<MoveResult, ApiError> {
        if self.game_over() {
            return Err(ApiError::TerminalGame);
        }

        let result = match Guess::parse(token, self.secret_word.chars().count())? {
            Guess::Letter(letter) => self.apply_letter(letter)?,
            Guess::Word(word) => self.apply_word(word),
        };

        if let Some(won) = result.finished() {
            debug!(game_id = %self.id, won, "game finished");
        }
        Ok(result)
    }

    fn apply_letter(&mut self, letter: char) -> Result<MoveResult, ApiError> {
        if self.guessed_letters.contains(&letter) {
            return Err(ApiError::RepeatedGuess { letter });
        }
        self.guessed_letters.push(letter);

        if self.secret_word.contains(letter) {
            let event = GuessEvent::LetterFound { letter };
            self.history.push(event.clone());
            if self.all_revealed() {
                self.status = GameStatus::Won;
                return Ok(MoveResult::Won(event));
            }
            Ok(MoveResult::Continuing(event))
        } else {
            let event = GuessEvent::LetterMissed { letter };
            self.history.push(event.clone());
            Ok(self.spend_attempt(event))
        }
    }

    fn apply_word(&mut self, word: String) -> MoveResult {
        // Case-sensitive against the stored word. A correct word wins
        // before the attempts check runs, even on the last attempt.
        if word == self.secret_word {
            let event = GuessEvent::WordCorrect { word };
            self.history.push(event.clone());
            self.status = GameStatus::Won;
            MoveResult::Won(event)
        } else {
            let event = GuessEvent::WordWrong { word };
            self.history.push(event.clone());
            self.spend_attempt(event)
        }
    }

    fn spend_attempt(&mut self, event: GuessEvent) -> MoveResult {
        self.attempts_remaining -= 1;
        if self.attempts_remaining == 0 {
            self.status = GameStatus::Lost;
            MoveResult::Lost(event)
        } else {
            MoveResult::Continuing(event)
        }
    }

    pub fn snapshot(&self, message: impl Into<String>) -> GameSnapshot {
        GameSnapshot {
            id: self.id,
            user_name: self.user_name.clone(),
            guessed_letters: self.guessed_letters_string(),
            revealed: self.revealed_pattern(),
            attempts_remaining: self.attempts_remaining,
            game_over: self.game_over(),
            message: message.into(),
        }
    }
}
