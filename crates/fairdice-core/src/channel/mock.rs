//! Scripted channel for testing.

use super::InteractionChannel;
use crate::crypto::{verify, Digest, HmacKey};
use crate::games::{DiceSet, GameEvent};
use crate::protocol::Choice;
use std::collections::VecDeque;

/// In-memory channel that answers prompts from a fixed script.
///
/// Every published digest, reveal and announced event is recorded so tests
/// can audit a whole session afterwards. A drained script answers `Quit`.
pub struct ScriptedChannel {
    script: VecDeque<Choice>,
    notified: Vec<(Digest, u32)>,
    reveals: Vec<(u32, HmacKey)>,
    events: Vec<GameEvent>,
    ordering_ok: bool,
}

impl ScriptedChannel {
    /// Create a channel that plays back `script` in order
    pub fn new(script: Vec<Choice>) -> Self {
        Self {
            script: script.into(),
            notified: Vec::new(),
            reveals: Vec::new(),
            events: Vec::new(),
            ordering_ok: true,
        }
    }

    /// Digests published so far, with their ranges
    pub fn notified(&self) -> &[(Digest, u32)] {
        &self.notified
    }

    /// Secrets and keys revealed so far
    pub fn reveals(&self) -> &[(u32, HmacKey)] {
        &self.reveals
    }

    /// Events announced so far
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// True if every protocol choice was requested while exactly one
    /// unrevealed commitment was outstanding
    pub fn commit_preceded_choice(&self) -> bool {
        self.ordering_ok
    }

    /// Recompute every revealed secret against the digest published for
    /// the same exchange
    pub fn audit(&self) -> bool {
        self.reveals.len() <= self.notified.len()
            && self
                .reveals
                .iter()
                .zip(&self.notified)
                .all(|((secret, key), (digest, _))| verify(key, *secret, digest))
    }

    fn next_choice(&mut self) -> Choice {
        self.script.pop_front().unwrap_or(Choice::Quit)
    }
}

impl InteractionChannel for ScriptedChannel {
    fn notify_commitment(&mut self, digest: &Digest, range: u32) {
        self.notified.push((*digest, range));
    }

    fn request_protocol_choice(&mut self, _range: u32) -> Choice {
        if self.notified.len() != self.reveals.len() + 1 {
            self.ordering_ok = false;
        }
        self.next_choice()
    }

    fn reveal_secret(&mut self, secret: u32, key: &HmacKey) {
        self.reveals.push((secret, key.clone()));
    }

    fn request_die_choice(&mut self, _dice: &DiceSet, _taken: Option<usize>) -> Choice {
        self.next_choice()
    }

    fn announce(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}
