//! Round resolution
//!
//! Both sides declare an attack zone and a defence pair. Blocking is a pure
//! overlap test, never a roll. Both attacks are resolved against the state
//! from before the round, so neither fighter's hit changes the other's.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::body_zone::{DefencePair, Move, Zone};
use crate::combat::state::FighterState;
use crate::core::types::Side;
use crate::entity::Character;

/// Result of one attack within a round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackResult {
    pub attacker: Side,
    pub defender: Side,
    pub zone: Zone,
    pub blocked: bool,
    /// Raw damage dealt (0 when blocked, may be negative)
    pub damage: i32,
    pub defender_hp_left: i32,
    pub defender_max_hp: i32,
}

/// Both attacks of a round, first side's attack first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub by_first: AttackResult,
    pub by_second: AttackResult,
}

impl RoundReport {
    pub fn attacks(&self) -> [AttackResult; 2] {
        [self.by_first, self.by_second]
    }
}

/// Does `defence` cover the attacked zone?
pub fn blocked(attack: Zone, defence: DefencePair) -> bool {
    defence.covers(attack)
}

/// Roll damage for one hit: punch plus uniform noise in `-noise..=noise`
///
/// The result is not floored; a weak attacker can roll below zero.
pub fn roll_damage<R: Rng + ?Sized>(attacker: &Character, noise: i32, rng: &mut R) -> i32 {
    let noise = noise.saturating_abs();
    attacker.punch().saturating_add(rng.gen_range(-noise..=noise))
}

/// Resolve one round between two fighters
///
/// # Arguments
/// * `first` / `second` - The fighters, mutated in place
/// * `first_move` / `second_move` - Their declared moves
/// * `noise` - Damage noise half-width
/// * `rng` - Source for damage noise
///
/// # Returns
/// Report with both attacks and the resulting hit points
pub fn resolve_round<R: Rng + ?Sized>(
    first: &mut FighterState,
    second: &mut FighterState,
    first_move: Move,
    second_move: Move,
    noise: i32,
    rng: &mut R,
) -> RoundReport {
    first.chosen_move = Some(first_move);
    second.chosen_move = Some(second_move);

    // Step 1: Blocks come from the declared moves only
    let first_blocks = blocked(second_move.attack, first_move.defence);
    let second_blocks = blocked(first_move.attack, second_move.defence);

    // Step 2: Roll both hits before touching hit points. Punch is the only
    // attacker input, so the order of application cannot leak between sides.
    let damage_to_second = if second_blocks {
        None
    } else {
        Some(roll_damage(&first.character, noise, rng))
    };
    let damage_to_first = if first_blocks {
        None
    } else {
        Some(roll_damage(&second.character, noise, rng))
    };

    // Step 3: Apply
    apply(second, damage_to_second);
    apply(first, damage_to_first);

    let by_first = attack_result(Side::First, first_move.attack, second);
    let by_second = attack_result(Side::Second, second_move.attack, first);

    tracing::debug!(
        first_hp = first.hp_left,
        second_hp = second.hp_left,
        first_blocked = first.blocked,
        second_blocked = second.blocked,
        "Round resolved"
    );

    RoundReport {
        by_first,
        by_second,
    }
}

fn apply(defender: &mut FighterState, damage: Option<i32>) {
    match damage {
        Some(damage) => defender.take_hit(damage),
        None => defender.block_hit(),
    }
}

fn attack_result(attacker: Side, zone: Zone, defender: &FighterState) -> AttackResult {
    AttackResult {
        attacker,
        defender: attacker.opponent(),
        zone,
        blocked: defender.blocked,
        damage: defender.damage_taken,
        defender_hp_left: defender.hp_left,
        defender_max_hp: defender.character.max_hp(),
    }
}
