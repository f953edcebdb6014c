//! Full-session tests through the scripted channel.
//!
//! The fairness exchange draws its secret with `next_u32`, so queueing one
//! value on the rng pins one exchange's secret; everything else (keys, the
//! computer's die pick) stays random.

use fairdice_core::{
    verify, Choice, DiceSet, Die, GameEvent, GameSession, Participant, RoundResult,
    ScriptedChannel, SessionOutcome,
};
use rand::rngs::StdRng;
use rand::{CryptoRng, RngCore, SeedableRng};
use std::collections::VecDeque;

/// Rng serving queued `next_u32` values before falling back to a seeded rng
struct ForcedRng {
    queued: VecDeque<u32>,
    fallback: StdRng,
}

impl ForcedRng {
    fn new(queued: &[u32]) -> Self {
        Self {
            queued: queued.iter().copied().collect(),
            fallback: StdRng::seed_from_u64(7),
        }
    }
}

impl RngCore for ForcedRng {
    fn next_u32(&mut self) -> u32 {
        self.queued
            .pop_front()
            .unwrap_or_else(|| self.fallback.next_u32())
    }

    fn next_u64(&mut self) -> u64 {
        self.fallback.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.fallback.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fallback.try_fill_bytes(dest)
    }
}

// Marker only; the point of these tests is the scripted secret.
impl CryptoRng for ForcedRng {}

fn sample_dice() -> DiceSet {
    DiceSet::new(vec![
        Die::new(vec![2, 2, 4, 4, 9, 9]),
        Die::new(vec![1, 1, 6, 6, 8, 8]),
        Die::new(vec![3, 3, 5, 5, 7, 7]),
    ])
}

fn rolled_faces(channel: &ScriptedChannel) -> Vec<(Participant, u32)> {
    channel
        .events()
        .iter()
        .filter_map(|event| match event {
            GameEvent::Rolled { by, face } => Some((*by, *face)),
            _ => None,
        })
        .collect()
}

#[test]
fn test_full_session_resolves() {
    let dice = sample_dice();
    // Turn-order secret 0 + choice 0 -> value 0 -> the player picks first,
    // so the scripted die index 0 is always available.
    let session = GameSession::new(&dice, ForcedRng::new(&[0]), StdRng::seed_from_u64(3));
    let mut channel = ScriptedChannel::new(vec![
        Choice::Picked(0), // turn order
        Choice::Picked(0), // player's die
        Choice::Picked(3), // computer's roll
        Choice::Picked(5), // player's roll
    ]);

    let outcome = session.play(&mut channel).unwrap();
    let result = match outcome {
        SessionOutcome::Resolved(result) => result,
        SessionOutcome::Aborted => panic!("session aborted"),
    };

    // Three exchanges: turn order plus one roll per side.
    assert_eq!(channel.notified().len(), 3);
    assert_eq!(channel.reveals().len(), 3);
    assert!(channel.commit_preceded_choice());
    assert!(channel.audit());

    assert_eq!(channel.events()[0], GameEvent::FirstPicker(Participant::Player));

    // Both sides hold distinct dice.
    let picks: Vec<(Participant, usize)> = channel
        .events()
        .iter()
        .filter_map(|event| match event {
            GameEvent::DiePicked { by, index } => Some((*by, *index)),
            _ => None,
        })
        .collect();
    assert_eq!(picks.len(), 2);
    assert_eq!(picks[0], (Participant::Player, 0));
    assert_ne!(picks[0].1, picks[1].1);

    // The computer's roll resolves first, and each face belongs to the
    // die its side picked.
    let rolls = rolled_faces(&channel);
    assert_eq!(rolls.len(), 2);
    assert_eq!(rolls[0].0, Participant::Computer);
    assert_eq!(rolls[1].0, Participant::Player);
    let computer_die = &dice[picks[1].1];
    assert!(computer_die.faces().contains(&rolls[0].1));
    assert!(dice[0].faces().contains(&rolls[1].1));

    // The declared result matches the rolled faces.
    let expected = if rolls[0].1 > rolls[1].1 {
        RoundResult::ComputerWins
    } else if rolls[1].1 > rolls[0].1 {
        RoundResult::PlayerWins
    } else {
        RoundResult::Tie
    };
    assert_eq!(result, expected);
    assert_eq!(*channel.events().last().unwrap(), GameEvent::Finished(expected));
}

#[test]
fn test_turn_order_convention_computer_first() {
    let dice = sample_dice();
    // Secret 1, choice 0 -> combined value 1 -> the computer picks first.
    let session = GameSession::new(&dice, ForcedRng::new(&[1]), StdRng::seed_from_u64(3));
    let mut channel = ScriptedChannel::new(vec![Choice::Picked(0), Choice::Quit]);

    let outcome = session.play(&mut channel).unwrap();
    assert_eq!(outcome, SessionOutcome::Aborted);

    assert_eq!(
        channel.events()[0],
        GameEvent::FirstPicker(Participant::Computer)
    );
    assert!(matches!(
        channel.events()[1],
        GameEvent::DiePicked {
            by: Participant::Computer,
            ..
        }
    ));
    assert!(rolled_faces(&channel).is_empty());
}

#[test]
fn test_turn_order_convention_player_first() {
    let dice = sample_dice();
    // Secret 0, choice 0 -> combined value 0 -> the player picks first.
    let session = GameSession::new(&dice, ForcedRng::new(&[0]), StdRng::seed_from_u64(3));
    let mut channel = ScriptedChannel::new(vec![Choice::Picked(0), Choice::Quit]);

    let outcome = session.play(&mut channel).unwrap();
    assert_eq!(outcome, SessionOutcome::Aborted);
    assert_eq!(channel.events()[0], GameEvent::FirstPicker(Participant::Player));
}

#[test]
fn test_cancel_at_turn_order_never_rolls() {
    let dice = sample_dice();
    let session = GameSession::new(&dice, StdRng::seed_from_u64(5), StdRng::seed_from_u64(6));
    let mut channel = ScriptedChannel::new(vec![Choice::Quit]);

    let outcome = session.play(&mut channel).unwrap();
    assert_eq!(outcome, SessionOutcome::Aborted);

    // The commitment went out, but nothing was revealed and no state
    // beyond it was reached.
    assert_eq!(channel.notified().len(), 1);
    assert!(channel.reveals().is_empty());
    assert!(channel.events().is_empty());
}

#[test]
fn test_cancel_during_roll_aborts() {
    let dice = sample_dice();
    let session = GameSession::new(&dice, ForcedRng::new(&[0]), StdRng::seed_from_u64(3));
    let mut channel = ScriptedChannel::new(vec![
        Choice::Picked(0), // turn order -> player first
        Choice::Picked(1), // player's die
        Choice::Quit,      // quit at the computer's roll
    ]);

    let outcome = session.play(&mut channel).unwrap();
    assert_eq!(outcome, SessionOutcome::Aborted);

    assert_eq!(channel.notified().len(), 2);
    assert_eq!(channel.reveals().len(), 1);
    assert!(rolled_faces(&channel).is_empty());
}

#[test]
fn test_equal_faces_tie() {
    // Single-face dice force both rolls to the same value.
    let dice = DiceSet::new(vec![
        Die::new(vec![1]),
        Die::new(vec![1]),
        Die::new(vec![1]),
    ]);
    let session = GameSession::new(&dice, ForcedRng::new(&[0]), StdRng::seed_from_u64(3));
    let mut channel = ScriptedChannel::new(vec![
        Choice::Picked(0), // turn order -> player first
        Choice::Picked(0), // player's die
        Choice::Picked(0), // computer's roll
        Choice::Picked(0), // player's roll
    ]);

    let outcome = session.play(&mut channel).unwrap();
    assert_eq!(outcome, SessionOutcome::Resolved(RoundResult::Tie));

    let rolls = rolled_faces(&channel);
    assert_eq!(rolls.len(), 2);
    assert_eq!(rolls[0].1, rolls[1].1);
}

#[test]
fn test_reveals_recompute_to_published_digests() {
    let dice = sample_dice();
    let session = GameSession::new(&dice, ForcedRng::new(&[0]), StdRng::seed_from_u64(9));
    let mut channel = ScriptedChannel::new(vec![
        Choice::Picked(0), // turn order -> player first
        Choice::Picked(2), // player's die
        Choice::Picked(0), // computer's roll
        Choice::Picked(4), // player's roll
    ]);

    session.play(&mut channel).unwrap();

    for ((secret, key), (digest, _)) in channel.reveals().iter().zip(channel.notified()) {
        assert!(verify(key, *secret, digest));
    }
    assert!(channel.audit());
}
