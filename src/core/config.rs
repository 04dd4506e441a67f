//! Fight configuration with documented constants
//!
//! The numbers here are the game's tuning values. They are preserved as
//! given; the config only exists so tests and the CLI can pin them.

use serde::{Deserialize, Serialize};

use crate::combat::constants::{DAMAGE_NOISE, INITIAL_IMPROVEMENTS, VICTORY_EXPERIENCE};
use crate::core::error::{BrawlError, Result};

/// Configuration for character creation and fights
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FightConfig {
    // === DAMAGE ===
    /// Half-width of the uniform noise added to punch on every hit
    ///
    /// A hit deals `punch + uniform(-damage_noise..=damage_noise)`.
    /// Setting it to 0 makes damage equal to punch exactly.
    pub damage_noise: i32,

    // === CHARACTER CREATION ===
    /// Skill points a freshly created character may spend
    pub initial_improvements: u32,

    // === OUTCOME ===
    /// Experience awarded to the winner of a fight (none on a draw)
    pub victory_experience: u32,

    /// Optional cap on the number of rounds
    ///
    /// `None` lets the fight run until someone drops, which can in theory
    /// loop forever if every attack is blocked. When the cap is hit with
    /// both fighters standing the fight ends in a draw.
    pub max_rounds: Option<u32>,
}

impl Default for FightConfig {
    fn default() -> Self {
        Self {
            damage_noise: DAMAGE_NOISE,
            initial_improvements: INITIAL_IMPROVEMENTS,
            victory_experience: VICTORY_EXPERIENCE,
            max_rounds: None,
        }
    }
}

impl FightConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.damage_noise < 0 {
            return Err(format!(
                "damage_noise ({}) must not be negative",
                self.damage_noise
            ));
        }

        if self.max_rounds == Some(0) {
            return Err("max_rounds must be at least 1 when set".into());
        }

        Ok(())
    }

    /// Load and validate a config from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate a config from a TOML string
    ///
    /// Missing keys fall back to their defaults; unknown keys are rejected.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: FightConfig = toml::from_str(content)?;
        config.validate().map_err(BrawlError::ConfigError)?;
        Ok(config)
    }
}
