use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use anyhow::{Result, anyhow};

/// The candidate secret words shipped with the service.
pub const DEFAULT_WORDS: &str = "\
beautiful
extraordinary
spectacular
mountain
fabulous
wonderful";

/// Fixed list of candidate secret words; one is picked per new game.
#[derive(Debug, Clone)]
pub struct WordBank {
    words: Vec<String>,
}

impl WordBank {
    /// Parse a newline-separated word list. Blank lines and `#` comments
    /// are skipped; words are stored lowercased.
    pub fn new(word_list: &str) -> Self {
        let words = word_list
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(|word| word.to_lowercase())
            .collect();

        Self { words }
    }

    /// Select one word pseudo-randomly.
    pub fn pick(&self) -> Result<String> {
        if self.words.is_empty() {
            return Err(anyhow!("word bank is empty"));
        }

        let mut hasher = DefaultHasher::new();
        std::time::SystemTime::now().hash(&mut hasher);
        let index = (hasher.finish() as usize) % self.words.len();

        Ok(self.words[index].clone())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

impl Default for WordBank {
    fn default() -> Self {
        Self::new(DEFAULT_WORDS)
    }
}
