pub mod game_state;
pub mod rankings;
pub mod word_bank;

// Re-export main components
pub use game_state::*;
pub use rankings::*;
pub use word_bank::*;
