//! Fair-random protocol: shared types and the commit-reveal exchange.

mod fairness;
mod types;

pub use fairness::{run_exchange, FairnessError, ProtocolOutcome, ProtocolResult};
pub use types::{Choice, GameId, Participant, RoundResult};
