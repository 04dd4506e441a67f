//! Trainable skills and the improvement budget
//!
//! Skills are plain counters with no upper bound. The only way to raise one
//! during play is `SkillSet::improve`, which spends one improvement point.

use serde::{Deserialize, Serialize};

use crate::combat::constants::BASELINE_SKILL;
use crate::core::error::{BrawlError, Result};

/// Identifier for one of the four skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkillId {
    /// Increases damage
    Power,
    /// Feeds the dodge modifier
    Agility,
    /// Feeds the critical hit modifier
    Intuition,
    /// Increases hit points
    Strength,
}

impl SkillId {
    /// All skills in menu order
    pub fn all() -> [SkillId; 4] {
        [
            SkillId::Power,
            SkillId::Agility,
            SkillId::Intuition,
            SkillId::Strength,
        ]
    }

    /// Map a 1-based menu choice to a skill
    pub fn from_menu(choice: u32) -> Option<SkillId> {
        match choice {
            1 => Some(SkillId::Power),
            2 => Some(SkillId::Agility),
            3 => Some(SkillId::Intuition),
            4 => Some(SkillId::Strength),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SkillId::Power => "Power",
            SkillId::Agility => "Agility",
            SkillId::Intuition => "Intuition",
            SkillId::Strength => "Strength",
        }
    }

    /// What the skill does, for the improvement menu
    pub fn description(&self) -> &'static str {
        match self {
            SkillId::Power => "increases damage",
            SkillId::Agility => "probability of dodging",
            SkillId::Intuition => "probability to make a critical (x2) damage",
            SkillId::Strength => "increases hit points of character",
        }
    }
}

/// A character's four skills plus unspent improvement points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSet {
    pub power: u32,
    pub agility: u32,
    pub intuition: u32,
    pub strength: u32,
    improvements_remaining: u32,
}

impl SkillSet {
    /// Fixed skills with no improvement points (catalog opponents)
    pub fn new(power: u32, agility: u32, intuition: u32, strength: u32) -> Self {
        Self {
            power,
            agility,
            intuition,
            strength,
            improvements_remaining: 0,
        }
    }

    /// Starting skills of a freshly created character
    pub fn baseline(improvements: u32) -> Self {
        Self {
            improvements_remaining: improvements,
            ..Self::new(BASELINE_SKILL, BASELINE_SKILL, BASELINE_SKILL, BASELINE_SKILL)
        }
    }

    pub fn from_array(values: [u32; 4]) -> Self {
        let [power, agility, intuition, strength] = values;
        Self::new(power, agility, intuition, strength)
    }

    /// Skills in menu order (power, agility, intuition, strength)
    pub fn as_array(&self) -> [u32; 4] {
        [self.power, self.agility, self.intuition, self.strength]
    }

    pub fn get(&self, skill: SkillId) -> u32 {
        match skill {
            SkillId::Power => self.power,
            SkillId::Agility => self.agility,
            SkillId::Intuition => self.intuition,
            SkillId::Strength => self.strength,
        }
    }

    fn get_mut(&mut self, skill: SkillId) -> &mut u32 {
        match skill {
            SkillId::Power => &mut self.power,
            SkillId::Agility => &mut self.agility,
            SkillId::Intuition => &mut self.intuition,
            SkillId::Strength => &mut self.strength,
        }
    }

    pub fn improvements_remaining(&self) -> u32 {
        self.improvements_remaining
    }

    /// Spend one improvement point on `skill`
    ///
    /// Leaves the set untouched and returns `NoImprovementsLeft` when the
    /// budget is exhausted. Modifiers are not recomputed here; go through
    /// `Character::improve_skill` for that.
    pub fn improve(&mut self, skill: SkillId) -> Result<()> {
        if self.improvements_remaining == 0 {
            return Err(BrawlError::NoImprovementsLeft);
        }

        *self.get_mut(skill) += 1;
        self.improvements_remaining -= 1;
        Ok(())
    }
}
