//! Dice model, win probability, and the game session.

mod dice;
mod probability;
mod session;

pub use dice::{DiceSet, Die};
pub use probability::win_probability;
pub use session::{GameError, GameEvent, GameSession, SessionOutcome};
