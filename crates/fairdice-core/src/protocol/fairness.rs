//! Commit-reveal fair-random exchange.

use crate::channel::InteractionChannel;
use crate::crypto::{Commitment, CommitmentError};
use crate::protocol::Choice;
use rand::{CryptoRng, RngCore};
use thiserror::Error;

/// Errors from a fairness exchange
#[derive(Debug, Error)]
pub enum FairnessError {
    #[error(transparent)]
    Commitment(#[from] CommitmentError),

    #[error("channel returned choice {choice} outside range 0..{range}")]
    ChoiceOutOfRange { choice: u32, range: u32 },
}

/// Result of a completed exchange
#[derive(Debug)]
pub struct ProtocolResult {
    /// Combined value in `[0, range)`
    pub value: u32,
    /// The player's contribution
    pub player_choice: u32,
    /// The computer's commitment, already revealed through the channel
    pub commitment: Commitment,
}

/// Outcome of an exchange: an agreed value, or the player quit
#[derive(Debug)]
pub enum ProtocolOutcome {
    Agreed(ProtocolResult),
    Cancelled,
}

/// Run one commit-reveal exchange for a value in `[0, range)`.
///
/// The digest is published before the player's choice is requested, and the
/// secret is revealed only after the combined value is fixed. The computer
/// therefore cannot steer the result after seeing the player's number, and
/// the player can recompute the digest from the reveal to check that it
/// never changed.
///
/// A `Choice::Quit` from the channel cancels the exchange; no reveal
/// happens in that case.
pub fn run_exchange<R, C>(
    range: u32,
    rng: &mut R,
    channel: &mut C,
) -> Result<ProtocolOutcome, FairnessError>
where
    R: RngCore + CryptoRng,
    C: InteractionChannel + ?Sized,
{
    let commitment = Commitment::generate(range, rng)?;
    channel.notify_commitment(commitment.digest(), range);

    let choice = match channel.request_protocol_choice(range) {
        Choice::Picked(n) => n,
        Choice::Quit => return Ok(ProtocolOutcome::Cancelled),
    };
    if choice >= range {
        return Err(FairnessError::ChoiceOutOfRange { choice, range });
    }

    // u64 arithmetic so the sum cannot wrap before the reduction
    let value = ((choice as u64 + commitment.secret() as u64) % range as u64) as u32;

    channel.reveal_secret(commitment.secret(), commitment.key());

    Ok(ProtocolOutcome::Agreed(ProtocolResult {
        value,
        player_choice: choice,
        commitment,
    }))
}
