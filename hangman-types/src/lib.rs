pub mod errors;
pub mod game;
pub mod messages;
pub mod score;
pub mod user;

use uuid::Uuid;

pub type GameId = Uuid;
pub type UserId = Uuid;

// Re-export all types
pub use errors::*;
pub use game::*;
pub use messages::*;
pub use score::*;
pub use user::*;
