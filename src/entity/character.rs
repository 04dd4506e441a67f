//! Characters and their derived combat modifiers

use serde::Serialize;

use crate::combat::constants::{
    BASELINE_SKILL, BASE_HP, CRIT_PER_INTUITION, DODGE_BASE, DODGE_PER_AGILITY, HP_PER_STRENGTH,
    INITIAL_IMPROVEMENTS, PUNCH_PER_POWER,
};
use crate::core::error::Result;
use crate::entity::skills::{SkillId, SkillSet};

/// Combat statistics derived from skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Modifiers {
    pub punch: i32,
    /// Computed but not yet consulted by the combat engine
    pub dodge_chance: i32,
    /// Computed but not yet consulted by the combat engine
    pub crit_chance: i32,
    pub max_hp: i32,
}

impl Modifiers {
    /// Apply the modifier formulas, saturating at the `i32` bounds
    pub fn from_skills(skills: &SkillSet) -> Self {
        let value = |skill: u32| i32::try_from(skill).unwrap_or(i32::MAX);
        let baseline = value(BASELINE_SKILL);

        Self {
            punch: PUNCH_PER_POWER.saturating_mul(value(skills.power)),
            dodge_chance: DODGE_BASE
                .saturating_add(value(skills.agility).saturating_mul(DODGE_PER_AGILITY)),
            crit_chance: CRIT_PER_INTUITION.saturating_mul(value(skills.intuition)),
            max_hp: BASE_HP.saturating_add(
                HP_PER_STRENGTH.saturating_mul(value(skills.strength).saturating_sub(baseline)),
            ),
        }
    }
}

/// A fighter: identity, skills and the modifiers derived from them
///
/// Skills and modifiers are private so every skill change goes through a
/// method that refreshes the modifiers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Character {
    pub name: String,
    /// Account that controls this character
    pub owner: String,
    pub level: u32,
    pub experience: u32,
    skills: SkillSet,
    modifiers: Modifiers,
}

impl Character {
    /// New character at baseline skills with the default improvement budget
    pub fn new(name: impl Into<String>, owner: impl Into<String>) -> Self {
        Self::with_improvements(name, owner, INITIAL_IMPROVEMENTS)
    }

    /// New character at baseline skills with a custom improvement budget
    pub fn with_improvements(
        name: impl Into<String>,
        owner: impl Into<String>,
        improvements: u32,
    ) -> Self {
        Self::from_skills(name, owner, 0, SkillSet::baseline(improvements))
    }

    /// Character with explicit skills (used for catalog opponents)
    pub fn from_skills(
        name: impl Into<String>,
        owner: impl Into<String>,
        level: u32,
        skills: SkillSet,
    ) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            level,
            experience: 0,
            modifiers: Modifiers::from_skills(&skills),
            skills,
        }
    }

    pub fn skills(&self) -> &SkillSet {
        &self.skills
    }

    pub fn modifiers(&self) -> &Modifiers {
        &self.modifiers
    }

    pub fn punch(&self) -> i32 {
        self.modifiers.punch
    }

    pub fn max_hp(&self) -> i32 {
        self.modifiers.max_hp
    }

    /// Recompute modifiers from the current skills
    pub fn refresh_modifiers(&mut self) {
        self.modifiers = Modifiers::from_skills(&self.skills);
    }

    /// Replace all four skills (improvement budget is kept)
    pub fn set_skills(&mut self, power: u32, agility: u32, intuition: u32, strength: u32) {
        self.skills.power = power;
        self.skills.agility = agility;
        self.skills.intuition = intuition;
        self.skills.strength = strength;
        self.refresh_modifiers();
    }

    /// Spend one improvement point and refresh modifiers
    pub fn improve_skill(&mut self, skill: SkillId) -> Result<()> {
        self.skills.improve(skill)?;
        self.refresh_modifiers();
        tracing::info!(
            character = %self.name,
            skill = skill.name(),
            value = self.skills.get(skill),
            "Skill improved"
        );
        Ok(())
    }

    /// Run the character-creation improvement phase
    ///
    /// Asks `choose` for up to `count` skills, applying each one before the
    /// next question. The chooser sees the character as it stands and the
    /// number of improvements still to make. Stops early once the budget
    /// is exhausted. Returns how many improvements were applied.
    pub fn apply_initial_skill_improvements<F>(&mut self, count: u32, mut choose: F) -> Result<u32>
    where
        F: FnMut(&Character, u32) -> Result<SkillId>,
    {
        let mut applied = 0;
        while applied < count && self.skills.improvements_remaining() > 0 {
            let left = (count - applied).min(self.skills.improvements_remaining());
            let skill = choose(self, left)?;
            self.improve_skill(skill)?;
            applied += 1;
        }
        Ok(applied)
    }

    /// Credit experience (kept in memory only)
    pub fn award_experience(&mut self, amount: u32) {
        self.experience = self.experience.saturating_add(amount);
    }
}
