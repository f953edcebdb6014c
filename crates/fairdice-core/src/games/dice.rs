//! Dice model.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

/// One die: an ordered, immutable list of faces.
///
/// Face values are arbitrary non-negative integers; a roll picks an index
/// into the list, so face counts may differ between dice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Die {
    faces: Vec<u32>,
}

impl Die {
    /// Build a die from its faces. Callers guarantee at least one face;
    /// the CLI parser enforces this for program input.
    pub fn new(faces: Vec<u32>) -> Self {
        debug_assert!(!faces.is_empty(), "a die needs at least one face");
        Self { faces }
    }

    /// The face values, in configuration order
    pub fn faces(&self) -> &[u32] {
        &self.faces
    }

    /// Number of faces; the range of a roll exchange
    pub fn face_count(&self) -> u32 {
        self.faces.len() as u32
    }

    /// Face value at the rolled index
    pub fn face(&self, index: usize) -> u32 {
        self.faces[index]
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, face) in self.faces.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", face)?;
        }
        Ok(())
    }
}

/// The table's dice; indices are stable for the whole session.
///
/// Callers guarantee at least three dice; the CLI parser enforces this for
/// program input.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DiceSet {
    dice: Vec<Die>,
}

impl DiceSet {
    /// Build from parsed dice
    pub fn new(dice: Vec<Die>) -> Self {
        debug_assert!(dice.len() >= 3, "the game needs at least three dice");
        Self { dice }
    }

    /// Number of dice on the table
    pub fn len(&self) -> usize {
        self.dice.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dice.is_empty()
    }

    /// Die at `index`, if present
    pub fn get(&self, index: usize) -> Option<&Die> {
        self.dice.get(index)
    }

    /// Iterate the dice in index order
    pub fn iter(&self) -> impl Iterator<Item = &Die> {
        self.dice.iter()
    }

    /// Indices not yet claimed by either participant
    pub fn available(&self, taken: Option<usize>) -> Vec<usize> {
        (0..self.dice.len()).filter(|i| Some(*i) != taken).collect()
    }
}

impl Index<usize> for DiceSet {
    type Output = Die;

    fn index(&self, index: usize) -> &Die {
        &self.dice[index]
    }
}
