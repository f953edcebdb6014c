//! Fairdice Core Library
//!
//! This crate provides the commit-reveal fairness protocol and the dice
//! game built on it: keyed commitments, the fair-random exchange, the dice
//! model with pairwise win probabilities, and the game session state
//! machine.

pub mod channel;
pub mod crypto;
pub mod games;
pub mod protocol;

pub use channel::{InteractionChannel, ScriptedChannel};
pub use crypto::{compute_digest, verify, Commitment, CommitmentError, Digest, HmacKey};
pub use games::{
    win_probability, DiceSet, Die, GameError, GameEvent, GameSession, SessionOutcome,
};
pub use protocol::{
    run_exchange, Choice, FairnessError, GameId, Participant, ProtocolOutcome, ProtocolResult,
    RoundResult,
};
