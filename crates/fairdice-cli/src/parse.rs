//! Command-line die parsing.

use fairdice_core::{DiceSet, Die};
use thiserror::Error;

const USAGE_EXAMPLE: &str = "example: fairdice 2,2,4,4,9,9 6,8,1,1,8,6 7,5,3,7,5,3";

/// Errors from die configuration parsing
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseDiceError {
    #[error("at least 3 dice are required, got {got}\n{USAGE_EXAMPLE}")]
    NotEnoughDice { got: usize },

    #[error("die #{position} has no faces\n{USAGE_EXAMPLE}")]
    EmptyDie { position: usize },

    #[error("die #{position} has invalid face {face:?}: faces must be non-negative integers\n{USAGE_EXAMPLE}")]
    InvalidFace { position: usize, face: String },
}

/// Parse die definitions, one comma-separated face list per argument.
///
/// This is the only place die input is validated; the core assumes the
/// returned set is well-formed.
pub fn parse_dice(args: &[String]) -> Result<DiceSet, ParseDiceError> {
    if args.len() < 3 {
        return Err(ParseDiceError::NotEnoughDice { got: args.len() });
    }

    let mut dice = Vec::with_capacity(args.len());
    for (position, arg) in args.iter().enumerate() {
        let position = position + 1;
        if arg.trim().is_empty() {
            return Err(ParseDiceError::EmptyDie { position });
        }
        let mut faces = Vec::new();
        for face in arg.split(',') {
            let face = face.trim();
            match face.parse::<u32>() {
                Ok(value) => faces.push(value),
                Err(_) => {
                    return Err(ParseDiceError::InvalidFace {
                        position,
                        face: face.to_string(),
                    })
                }
            }
        }
        dice.push(Die::new(faces));
    }
    Ok(DiceSet::new(dice))
}
