//! Game session state machine.
//!
//! One playthrough: a fairness exchange decides who selects a die first,
//! both sides claim distinct dice, then one fairness exchange per side
//! resolves its roll. The player can quit at any prompt, which aborts the
//! whole session with no declared result.

use super::DiceSet;
use crate::channel::InteractionChannel;
use crate::protocol::{
    run_exchange, Choice, FairnessError, GameId, Participant, ProtocolOutcome, RoundResult,
};
use rand::{CryptoRng, Rng, RngCore};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from a game session
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Fairness(#[from] FairnessError),

    #[error("channel chose die {index}, which is not available")]
    DieUnavailable { index: usize },
}

/// Observable session milestones, announced through the channel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Turn order decided: this participant selects a die first
    FirstPicker(Participant),
    /// A participant claimed a die
    DiePicked { by: Participant, index: usize },
    /// A participant's roll resolved to a face value
    Rolled { by: Participant, face: u32 },
    /// Final result of the round
    Finished(RoundResult),
}

/// How a session ended
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// Both rolls resolved and compared
    Resolved(RoundResult),
    /// The player quit at a prompt; no result declared
    Aborted,
}

/// One playthrough over a fixed set of dice.
///
/// Two independent randomness sources: the crypto rng backs the fairness
/// exchanges, while the AI rng only drives the computer's die pick and may
/// be a seeded stand-in under test.
pub struct GameSession<'a, R, A> {
    id: GameId,
    dice: &'a DiceSet,
    crypto_rng: R,
    ai_rng: A,
}

impl<'a, R, A> GameSession<'a, R, A>
where
    R: RngCore + CryptoRng,
    A: RngCore,
{
    pub fn new(dice: &'a DiceSet, crypto_rng: R, ai_rng: A) -> Self {
        Self {
            id: GameId::new(),
            dice,
            crypto_rng,
            ai_rng,
        }
    }

    /// This session's identifier, for logs
    pub fn id(&self) -> GameId {
        self.id
    }

    /// Play the session to a terminal state.
    ///
    /// Turn-order convention: combined value 0 means the player selects a
    /// die first, 1 means the computer does.
    pub fn play<C>(mut self, channel: &mut C) -> Result<SessionOutcome, GameError>
    where
        C: InteractionChannel + ?Sized,
    {
        let first = match run_exchange(2, &mut self.crypto_rng, channel)? {
            ProtocolOutcome::Cancelled => return Ok(SessionOutcome::Aborted),
            ProtocolOutcome::Agreed(result) => match result.value {
                0 => Participant::Player,
                _ => Participant::Computer,
            },
        };
        channel.announce(GameEvent::FirstPicker(first));

        let (computer_die, player_die) = match self.select_dice(first, channel)? {
            Some(pair) => pair,
            None => return Ok(SessionOutcome::Aborted),
        };

        // The computer's roll always resolves first; the toss only governs
        // die selection.
        let computer_face = match self.roll(Participant::Computer, computer_die, channel)? {
            Some(face) => face,
            None => return Ok(SessionOutcome::Aborted),
        };
        let player_face = match self.roll(Participant::Player, player_die, channel)? {
            Some(face) => face,
            None => return Ok(SessionOutcome::Aborted),
        };

        let result = if computer_face > player_face {
            RoundResult::ComputerWins
        } else if player_face > computer_face {
            RoundResult::PlayerWins
        } else {
            RoundResult::Tie
        };
        channel.announce(GameEvent::Finished(result));
        Ok(SessionOutcome::Resolved(result))
    }

    /// Claim one die per side, first mover first.
    ///
    /// Returns `(computer die, player die)`, or None if the player quit.
    fn select_dice<C>(
        &mut self,
        first: Participant,
        channel: &mut C,
    ) -> Result<Option<(usize, usize)>, GameError>
    where
        C: InteractionChannel + ?Sized,
    {
        match first {
            Participant::Computer => {
                let computer = self.pick_random_die(None);
                channel.announce(GameEvent::DiePicked {
                    by: Participant::Computer,
                    index: computer,
                });
                let player = match self.pick_player_die(Some(computer), channel)? {
                    Some(index) => index,
                    None => return Ok(None),
                };
                Ok(Some((computer, player)))
            }
            Participant::Player => {
                let player = match self.pick_player_die(None, channel)? {
                    Some(index) => index,
                    None => return Ok(None),
                };
                let computer = self.pick_random_die(Some(player));
                channel.announce(GameEvent::DiePicked {
                    by: Participant::Computer,
                    index: computer,
                });
                Ok(Some((computer, player)))
            }
        }
    }

    fn pick_random_die(&mut self, taken: Option<usize>) -> usize {
        let available = self.dice.available(taken);
        available[self.ai_rng.gen_range(0..available.len())]
    }

    fn pick_player_die<C>(
        &mut self,
        taken: Option<usize>,
        channel: &mut C,
    ) -> Result<Option<usize>, GameError>
    where
        C: InteractionChannel + ?Sized,
    {
        let index = match channel.request_die_choice(self.dice, taken) {
            Choice::Picked(n) => n as usize,
            Choice::Quit => return Ok(None),
        };
        if index >= self.dice.len() || Some(index) == taken {
            return Err(GameError::DieUnavailable { index });
        }
        channel.announce(GameEvent::DiePicked {
            by: Participant::Player,
            index,
        });
        Ok(Some(index))
    }

    /// Resolve one roll: a fairness exchange over the die's face count,
    /// indexing into its face list. Returns None if the player quit.
    fn roll<C>(
        &mut self,
        by: Participant,
        die_index: usize,
        channel: &mut C,
    ) -> Result<Option<u32>, GameError>
    where
        C: InteractionChannel + ?Sized,
    {
        let die = &self.dice[die_index];
        match run_exchange(die.face_count(), &mut self.crypto_rng, channel)? {
            ProtocolOutcome::Cancelled => Ok(None),
            ProtocolOutcome::Agreed(result) => {
                let face = die.face(result.value as usize);
                channel.announce(GameEvent::Rolled { by, face });
                Ok(Some(face))
            }
        }
    }
}
