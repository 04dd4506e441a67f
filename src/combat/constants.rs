//! Combat system constants - all tunable values in one place
//!
//! Values are preserved as given; nothing here has been rebalanced.

// Character creation
pub const BASELINE_SKILL: u32 = 3;
pub const INITIAL_IMPROVEMENTS: u32 = 3;
/// Highest skill value a roster entry may carry
pub const MAX_SKILL: u32 = 1000;

// Modifier formulas
pub const PUNCH_PER_POWER: i32 = 2;
pub const DODGE_BASE: i32 = 5;
pub const DODGE_PER_AGILITY: i32 = 5;
pub const CRIT_PER_INTUITION: i32 = 4;
pub const BASE_HP: i32 = 30;
pub const HP_PER_STRENGTH: i32 = 6;

// Damage
pub const DAMAGE_NOISE: i32 = 3;

// Outcome
pub const VICTORY_EXPERIENCE: u32 = 15;
