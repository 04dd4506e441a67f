//! Per-fight combat state for a fighter
//!
//! Lives only as long as one fight. The character itself never carries
//! hit points or round results.

use serde::{Deserialize, Serialize};

use crate::combat::body_zone::Move;
use crate::entity::Character;

/// Combat state for one fighter in one fight
#[derive(Debug, Clone)]
pub struct FighterState {
    pub character: Character,
    /// Current hit points, never below zero
    pub hp_left: i32,
    /// Move declared for the latest round
    pub chosen_move: Option<Move>,
    /// Did this fighter block the latest incoming attack?
    pub blocked: bool,
    /// Damage taken in the latest round (can be negative, see `take_hit`)
    pub damage_taken: i32,
}

impl FighterState {
    /// Enter a fight at full health
    pub fn new(character: Character) -> Self {
        let hp_left = character.max_hp().max(0);
        Self {
            character,
            hp_left,
            chosen_move: None,
            blocked: false,
            damage_taken: 0,
        }
    }

    /// Is this fighter out of hit points?
    pub fn is_down(&self) -> bool {
        self.hp_left == 0
    }

    /// Back to full health with no round history
    pub fn reset(&mut self) {
        self.hp_left = self.character.max_hp().max(0);
        self.chosen_move = None;
        self.blocked = false;
        self.damage_taken = 0;
    }

    /// Record a blocked attack: nothing lands
    pub fn block_hit(&mut self) {
        self.blocked = true;
        self.damage_taken = 0;
    }

    /// Apply an unblocked hit
    ///
    /// Negative damage is applied as-is and raises `hp_left`; the result is
    /// only floored at zero.
    pub fn take_hit(&mut self, damage: i32) {
        self.blocked = false;
        self.damage_taken = damage;
        self.hp_left = self.hp_left.saturating_sub(damage).max(0);
    }

    pub fn snapshot(&self) -> FighterSnapshot {
        FighterSnapshot {
            name: self.character.name.clone(),
            owner: self.character.owner.clone(),
            level: self.character.level,
            hp_left: self.hp_left,
            max_hp: self.character.max_hp(),
            skills: self.character.skills().as_array(),
        }
    }
}

/// Read-only view of a fighter for presentation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FighterSnapshot {
    pub name: String,
    pub owner: String,
    pub level: u32,
    pub hp_left: i32,
    pub max_hp: i32,
    /// Power, agility, intuition, strength
    pub skills: [u32; 4],
}
