//! Interaction channel between the game core and the player.

mod mock;

pub use mock::ScriptedChannel;

use crate::crypto::{Digest, HmacKey};
use crate::games::{DiceSet, GameEvent};
use crate::protocol::Choice;

/// The player's side of the table.
///
/// Stands in for console I/O: the core only needs to publish commitments,
/// collect choices, reveal secrets and report milestones. Implementations
/// decide how these are rendered. Implementations can be:
/// - ScriptedChannel for testing
/// - an interactive console channel in the CLI
pub trait InteractionChannel {
    /// Publish a commitment digest before a choice in `[0, range)` is
    /// requested
    fn notify_commitment(&mut self, digest: &Digest, range: u32);

    /// Ask for the player's number in `[0, range)`.
    ///
    /// Implementations re-prompt on unparsable or out-of-range input and
    /// only return a validated selection, or `Choice::Quit`.
    fn request_protocol_choice(&mut self, range: u32) -> Choice;

    /// Disclose the secret and key behind the last published digest
    fn reveal_secret(&mut self, secret: u32, key: &HmacKey);

    /// Ask the player to pick a die index; `taken` is already claimed by
    /// the computer and must not be offered
    fn request_die_choice(&mut self, dice: &DiceSet, taken: Option<usize>) -> Choice;

    /// Report a game milestone
    fn announce(&mut self, event: GameEvent);
}
