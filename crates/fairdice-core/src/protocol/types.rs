//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique game session identifier
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(Uuid);

impl GameId {
    /// Create a new random game ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create from UUID
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for GameId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GameId({})", self.0)
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One side of the table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Participant {
    Computer,
    Player,
}

impl Participant {
    /// Get the other side
    pub fn opponent(&self) -> Participant {
        match self {
            Participant::Computer => Participant::Player,
            Participant::Player => Participant::Computer,
        }
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Participant::Computer => write!(f, "computer"),
            Participant::Player => write!(f, "player"),
        }
    }
}

/// Final result of one round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundResult {
    ComputerWins,
    PlayerWins,
    Tie,
}

impl RoundResult {
    /// Fixed strings for rendering and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            RoundResult::ComputerWins => "computer wins",
            RoundResult::PlayerWins => "player wins",
            RoundResult::Tie => "tie",
        }
    }
}

impl fmt::Display for RoundResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A player's answer to a prompt: a validated selection, or quit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Choice {
    Picked(u32),
    Quit,
}
