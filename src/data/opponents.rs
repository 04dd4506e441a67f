//! Opponent catalog - the roster a player can challenge
//!
//! Entries are read-only. Selections are 1-based to match the menu.

use serde::{Deserialize, Serialize};

use crate::combat::constants::MAX_SKILL;
use crate::core::error::{BrawlError, Result};
use crate::entity::{Character, SkillSet};

/// A pre-built opponent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentEntry {
    pub name: String,
    /// Account label shown as "(character of ...)"
    pub owner: String,
    pub level: u32,
    /// Power, agility, intuition, strength
    pub skills: [u32; 4],
}

impl OpponentEntry {
    pub fn new(name: &str, owner: &str, level: u32, skills: [u32; 4]) -> Self {
        Self {
            name: name.into(),
            owner: owner.into(),
            level,
            skills,
        }
    }

    /// Build a fight-ready character; catalog skills are fixed
    pub fn to_character(&self) -> Character {
        Character::from_skills(
            self.name.clone(),
            self.owner.clone(),
            self.level,
            SkillSet::from_array(self.skills),
        )
    }
}

/// Ordered roster of opponents
#[derive(Debug, Clone, Default)]
pub struct OpponentCatalog {
    entries: Vec<OpponentEntry>,
}

impl OpponentCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in roster
    pub fn with_defaults() -> Self {
        let mut catalog = Self::new();
        catalog.add(OpponentEntry::new("PrivateWolf", "Corey Nicholson", 0, [3, 4, 4, 4]));
        catalog.add(OpponentEntry::new("Pharos", "Blake Thomson", 0, [4, 5, 3, 3]));
        catalog.add(OpponentEntry::new("NumbLeg", "Timothy Kinney", 2, [6, 5, 6, 4]));
        catalog.add(OpponentEntry::new("Crucifery", "Leonard Simmons", 3, [9, 6, 5, 4]));
        catalog
    }

    pub fn add(&mut self, entry: OpponentEntry) {
        self.entries.push(entry);
    }

    /// All entries in menu order
    pub fn entries(&self) -> &[OpponentEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up an entry by 1-based selection
    pub fn get(&self, selection: usize) -> Result<&OpponentEntry> {
        selection
            .checked_sub(1)
            .and_then(|i| self.entries.get(i))
            .ok_or(BrawlError::InvalidCatalogIndex {
                index: selection,
                len: self.entries.len(),
            })
    }

    /// Build the opponent at a 1-based selection
    pub fn build_character(&self, selection: usize) -> Result<Character> {
        self.get(selection).map(OpponentEntry::to_character)
    }

    /// Check the roster is usable; run at startup so problems surface early
    pub fn validate(&self) -> std::result::Result<(), CatalogLoadError> {
        if self.entries.is_empty() {
            return Err(CatalogLoadError::Empty);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogLoadError::InvalidEntry(format!(
                    "entry {} has an empty name",
                    i + 1
                )));
            }
            if let Some(skill) = entry.skills.iter().find(|s| **s > MAX_SKILL) {
                return Err(CatalogLoadError::InvalidEntry(format!(
                    "{} has skill value {} (at most {} allowed)",
                    entry.name, skill, MAX_SKILL
                )));
            }
            if self.entries[..i].iter().any(|e| e.name == entry.name) {
                return Err(CatalogLoadError::InvalidEntry(format!(
                    "duplicate opponent name {}",
                    entry.name
                )));
            }
        }

        Ok(())
    }

    /// Load opponents from a TOML file
    pub fn load_from_toml(path: &std::path::Path) -> std::result::Result<Self, CatalogLoadError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CatalogLoadError::IoError(e.to_string()))?;
        Self::parse_toml(&content)
    }

    /// Parse opponents from a TOML string
    pub fn parse_toml(content: &str) -> std::result::Result<Self, CatalogLoadError> {
        let toml_data: TomlOpponents =
            toml::from_str(content).map_err(|e| CatalogLoadError::ParseError(e.to_string()))?;

        let mut catalog = Self::new();
        for opponent in toml_data.opponents {
            catalog.add(opponent.into_entry());
        }
        catalog.validate()?;
        Ok(catalog)
    }
}

/// Error type for catalog loading
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogLoadError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Catalog has no opponents")]
    Empty,
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),
}

/// TOML representation of the catalog file
#[derive(Debug, Deserialize)]
struct TomlOpponents {
    opponents: Vec<TomlOpponent>,
}

/// TOML representation of a single opponent
#[derive(Debug, Deserialize)]
struct TomlOpponent {
    name: String,
    owner: String,
    #[serde(default)]
    level: u32,
    power: u32,
    agility: u32,
    intuition: u32,
    strength: u32,
}

impl TomlOpponent {
    fn into_entry(self) -> OpponentEntry {
        OpponentEntry {
            name: self.name,
            owner: self.owner,
            level: self.level,
            skills: [self.power, self.agility, self.intuition, self.strength],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_roster() {
        let catalog = OpponentCatalog::with_defaults();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.validate().is_ok());

        let names: Vec<&str> = catalog.entries().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["PrivateWolf", "Pharos", "NumbLeg", "Crucifery"]);
    }

    #[test]
    fn test_build_character_uses_catalog_skills() {
        let catalog = OpponentCatalog::with_defaults();
        let wolf = catalog.build_character(1).unwrap();

        assert_eq!(wolf.name, "PrivateWolf");
        assert_eq!(wolf.owner, "Corey Nicholson");
        assert_eq!(wolf.skills().as_array(), [3, 4, 4, 4]);
        assert_eq!(wolf.max_hp(), 36);
        assert_eq!(wolf.punch(), 6);
        assert_eq!(wolf.skills().improvements_remaining(), 0);
    }

    #[test]
    fn test_out_of_range_selection() {
        let catalog = OpponentCatalog::with_defaults();
        for selection in [0, 5, 100] {
            let err = catalog.build_character(selection).unwrap_err();
            assert!(matches!(err, BrawlError::InvalidCatalogIndex { len: 4, .. }));
            assert!(err.is_recoverable());
        }
    }

    #[test]
    fn test_parse_toml() {
        let toml = r#"
            [[opponents]]
            name = "Brick"
            owner = "Test Owner"
            level = 1
            power = 5
            agility = 3
            intuition = 3
            strength = 6
        "#;

        let catalog = OpponentCatalog::parse_toml(toml).unwrap();
        let brick = catalog.build_character(1).unwrap();
        assert_eq!(brick.level, 1);
        assert_eq!(brick.max_hp(), 48);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let err = OpponentCatalog::parse_toml("opponents = []").unwrap_err();
        assert_eq!(err, CatalogLoadError::Empty);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut catalog = OpponentCatalog::with_defaults();
        catalog.add(OpponentEntry::new("Pharos", "Someone Else", 0, [3, 3, 3, 3]));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogLoadError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_oversized_skills_rejected_at_load() {
        let toml = r#"
            [[opponents]]
            name = "Colossus"
            owner = "Test Owner"
            power = 2000000000
            agility = 3
            intuition = 3
            strength = 3
        "#;

        let err = OpponentCatalog::parse_toml(toml).unwrap_err();
        assert!(matches!(err, CatalogLoadError::InvalidEntry(msg) if msg.contains("Colossus")));
    }

    #[test]
    fn test_skill_cap_is_inclusive() {
        let mut catalog = OpponentCatalog::new();
        catalog.add(OpponentEntry::new("Top", "Owner", 0, [MAX_SKILL; 4]));
        assert!(catalog.validate().is_ok());

        catalog.add(OpponentEntry::new("Over", "Owner", 0, [3, 3, MAX_SKILL + 1, 3]));
        assert!(matches!(
            catalog.validate(),
            Err(CatalogLoadError::InvalidEntry(_))
        ));
    }

    #[test]
    fn test_malformed_toml_rejected() {
        let err = OpponentCatalog::parse_toml("[[opponents]]\nname = 3").unwrap_err();
        assert!(matches!(err, CatalogLoadError::ParseError(_)));
    }
}
