//! Move selection for each side of a fight
//!
//! Architecture: one trait, swappable sources
//! - MoveSource trait is what the fight asks every round
//! - RandomMoves is the computer opponent (uniform, not adaptive)
//! - HumanMoves reads the two choices from an InputProvider

use rand::RngCore;

use crate::combat::{DefencePair, FighterState, Move, Zone};
use crate::core::error::{BrawlError, Result};
use crate::ui::input::InputProvider;

/// Anything that can declare a move for a round
pub trait MoveSource {
    /// Pick this round's attack zone and defence pair
    ///
    /// `rng` is the fight's shared generator; sources that do not need
    /// randomness ignore it.
    fn choose_move(
        &mut self,
        me: &FighterState,
        opponent: &FighterState,
        rng: &mut dyn RngCore,
    ) -> Result<Move>;
}

/// Computer opponent: attack zone and defence pair drawn uniformly
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomMoves;

impl MoveSource for RandomMoves {
    fn choose_move(
        &mut self,
        _me: &FighterState,
        _opponent: &FighterState,
        rng: &mut dyn RngCore,
    ) -> Result<Move> {
        Ok(Move::random(rng))
    }
}

/// Human player answering two menus per round
pub struct HumanMoves<I> {
    input: I,
}

impl<I: InputProvider> HumanMoves<I> {
    pub fn new(input: I) -> Self {
        Self { input }
    }

    pub fn into_inner(self) -> I {
        self.input
    }

    fn choose_attack(&mut self) -> Result<Zone> {
        let options: Vec<String> = Zone::all()
            .iter()
            .map(|z| capitalize(z.name()))
            .collect();
        let choice = self.input.choose("Choose attack zone:", &options)?;
        Zone::from_menu(choice).ok_or(BrawlError::InvalidSelection {
            value: choice.to_string(),
            max: 4,
        })
    }

    fn choose_defence(&mut self) -> Result<DefencePair> {
        let options: Vec<String> = DefencePair::all()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        let choice = self.input.choose("Choose defence zone:", &options)?;
        DefencePair::from_menu(choice).ok_or(BrawlError::InvalidSelection {
            value: choice.to_string(),
            max: 4,
        })
    }
}

impl<I: InputProvider> MoveSource for HumanMoves<I> {
    fn choose_move(
        &mut self,
        _me: &FighterState,
        _opponent: &FighterState,
        _rng: &mut dyn RngCore,
    ) -> Result<Move> {
        let attack = self.choose_attack()?;
        let defence = self.choose_defence()?;
        Ok(Move::new(attack, defence))
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
