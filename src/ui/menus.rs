//! Menus for the steps before a fight

use crate::core::error::Result;
use crate::data::accounts::{self, ACCOUNTS};
use crate::data::OpponentCatalog;
use crate::entity::{Character, SkillId};
use crate::ui::input::InputProvider;

/// Pick an account (stand-in for real login)
pub fn choose_account<I: InputProvider + ?Sized>(input: &mut I) -> Result<&'static str> {
    let options: Vec<String> = ACCOUNTS.iter().map(|a| a.to_string()).collect();
    loop {
        let choice = input.choose(
            "(This will be replaced by proper authorization.) Choose your account:",
            &options,
        )?;
        match accounts::account(choice as usize) {
            Ok(name) => return Ok(name),
            Err(err) if err.is_recoverable() => continue,
            Err(err) => return Err(err),
        }
    }
}

/// Pick a skill to improve
pub fn choose_skill<I: InputProvider + ?Sized>(input: &mut I) -> Result<SkillId> {
    let options: Vec<String> = SkillId::all()
        .iter()
        .map(|s| format!("{} ({})", s.name(), s.description()))
        .collect();
    loop {
        let choice = input.choose("Choose improvement:", &options)?;
        if let Some(skill) = SkillId::from_menu(choice) {
            return Ok(skill);
        }
    }
}

/// One roster line: `1. PrivateWolf[0] (Corey Nicholson) [3-4-4-4]`
pub fn opponent_label(name: &str, level: u32, owner: &str, skills: &[u32; 4]) -> String {
    let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();
    format!("{}[{}] ({}) [{}]", name, level, owner, skills.join("-"))
}

/// Pick an opponent from the catalog and build it
pub fn choose_opponent<I: InputProvider + ?Sized>(
    input: &mut I,
    catalog: &OpponentCatalog,
) -> Result<Character> {
    let options: Vec<String> = catalog
        .entries()
        .iter()
        .map(|e| opponent_label(&e.name, e.level, &e.owner, &e.skills))
        .collect();
    loop {
        let choice = input.choose("Choose your opponent:", &options)?;
        match catalog.build_character(choice as usize) {
            Ok(opponent) => {
                tracing::info!(opponent = %opponent.name, "Opponent chosen");
                return Ok(opponent);
            }
            Err(err) if err.is_recoverable() => continue,
            Err(err) => return Err(err),
        }
    }
}
