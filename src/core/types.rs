//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Round counter (fight time unit, starts at 1)
pub type Round = u32;

/// Which corner of the fight a fighter stands in
///
/// The first side is the one whose move is requested first each round
/// (the human player in the interactive game).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// The side facing this one
    pub fn opponent(&self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }

    pub fn both() -> [Side; 2] {
        [Side::First, Side::Second]
    }
}
