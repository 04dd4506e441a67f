//! Text rendering for profiles and fight events
//!
//! The fight core only emits structured events. Everything a player reads
//! is built here.

use std::io::Write;

use crossterm::style::Stylize;

use crate::combat::{AttackResult, FighterSnapshot};
use crate::core::types::Side;
use crate::entity::{Character, SkillId};
use crate::fight::{FightEvent, FightEventType, FightObserver, FightOutcome};

/// Number of cells in a life bar
pub const LIFE_BAR_CELLS: usize = 20;

const HEADER_WIDTH: usize = 90;
const COLUMN_WIDTH: usize = 60;

/// Cells in the profile bar, which is always drawn full
const PROFILE_BAR_CELLS: usize = 10;

/// `[*****_____]` style bar for one side of the fight header
///
/// The first fighter's bar rounds up, so a living player always shows a
/// star. The opponent's bar truncates.
pub fn life_bar(side: Side, hp_left: i32, max_hp: i32) -> String {
    let filled = if max_hp <= 0 {
        0
    } else {
        let scaled = hp_left.max(0) as usize * LIFE_BAR_CELLS;
        let cells = match side {
            Side::First => scaled.div_ceil(max_hp as usize),
            Side::Second => scaled / max_hp as usize,
        };
        cells.min(LIFE_BAR_CELLS)
    };
    format!(
        "[{}{}]",
        "*".repeat(filled),
        "_".repeat(LIFE_BAR_CELLS - filled)
    )
}

fn two_columns(left: &str, right: &str) -> String {
    format!("{:<width$}{}", left, right, width = COLUMN_WIDTH)
}

/// Character sheet shown during creation
pub fn render_profile(character: &Character, additional_info: bool) -> String {
    let skills = character.skills();
    let mods = character.modifiers();
    let mut out = String::new();

    out.push_str(&"=".repeat(48));
    out.push('\n');
    out.push_str(&format!(
        "{} [{}] [{}]  {}/{}\n",
        character.name,
        character.level,
        "*".repeat(PROFILE_BAR_CELLS),
        mods.max_hp,
        mods.max_hp
    ));
    out.push_str(&format!("({}'s character)\n", character.owner));
    for skill in SkillId::all() {
        out.push_str(&format!("{}: {}\n", skill.name(), skills.get(skill)));
    }

    if additional_info {
        out.push('\n');
        out.push_str(&format!("Attack power: {}\n", mods.punch));
        out.push_str(&format!("Dodging modifier: {}\n", mods.dodge_chance));
        out.push_str(&format!("Critical hit modifier: {}\n", mods.crit_chance));
    }
    out
}

/// Side-by-side header with both fighters
pub fn render_header(first: &FighterSnapshot, second: &FighterSnapshot) -> String {
    let mut lines = Vec::new();
    lines.push("=".repeat(HEADER_WIDTH));

    let describe = |f: &FighterSnapshot| {
        format!("{}[{}]     [{}/{}]", f.name, f.level, f.hp_left, f.max_hp)
    };
    lines.push(two_columns(&describe(first), &describe(second)));
    lines.push(two_columns(
        &life_bar(Side::First, first.hp_left, first.max_hp),
        &life_bar(Side::Second, second.hp_left, second.max_hp),
    ));

    for (i, skill) in SkillId::all().iter().enumerate() {
        lines.push(two_columns(
            &format!("  {}: {}", skill.name(), first.skills[i]),
            &format!("  {}: {}", skill.name(), second.skills[i]),
        ));
    }

    lines.push(two_columns(
        &format!("(character of {})", first.owner),
        &format!("(character of {})", second.owner),
    ));
    lines.push("=".repeat(HEADER_WIDTH));
    lines.join("\n")
}

/// One line of round narrative
///
/// A hit that dealt exactly zero reads like a block.
pub fn render_attack(attack: &AttackResult, attacker: &str, defender: &str) -> String {
    let landed = !attack.blocked && attack.damage != 0;
    let status = format!(
        "{} -{}HP [{}/{}]",
        defender, attack.damage, attack.defender_hp_left, attack.defender_max_hp
    );

    match (attack.attacker, landed) {
        (Side::First, true) => format!(
            "Quick {} decided to hit the opponent and made a smashing attack -{}HP to the enemy's {}. \
             As a consequence, {} lost their balance and fell down. {}",
            attacker,
            attack.damage,
            attack.zone.name(),
            defender,
            status
        ),
        (Side::First, false) => format!(
            "Quick {} decided to hit the opponent, but prudent {} blocked the attack with perfect timing.",
            attacker, defender
        ),
        (Side::Second, true) => format!(
            "Naughty {} swung at the enemy and struck the {} of the enemy with their fist -{}HP. \
             Hence, {} suddenly felt unhealthy. {}",
            attacker,
            attack.zone.name(),
            attack.damage,
            defender,
            status
        ),
        (Side::Second, false) => format!(
            "Naughty {} swung at the enemy, but this time the block helped {}.",
            attacker, defender
        ),
    }
}

/// Writes fight events to a terminal
pub struct ConsoleRenderer<W> {
    writer: W,
    styled: bool,
    names: [String; 2],
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            styled: true,
            names: [String::new(), String::new()],
        }
    }

    /// Plain text without terminal styling
    pub fn plain(writer: W) -> Self {
        Self {
            styled: false,
            ..Self::new(writer)
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn name(&self, side: Side) -> &str {
        match side {
            Side::First => &self.names[0],
            Side::Second => &self.names[1],
        }
    }

    fn remember(&mut self, first: &FighterSnapshot, second: &FighterSnapshot) {
        self.names = [first.name.clone(), second.name.clone()];
    }

    /// Header with only the name row in bold
    fn header(&self, first: &FighterSnapshot, second: &FighterSnapshot) -> String {
        let text = render_header(first, second);
        if !self.styled {
            return text;
        }
        text.lines()
            .enumerate()
            .map(|(i, line)| {
                if i == 1 {
                    format!("{}", line.bold())
                } else {
                    line.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn success(&self, text: String) -> String {
        if self.styled {
            format!("{}", text.green())
        } else {
            text
        }
    }

    fn render(&mut self, event: &FightEvent) -> Option<String> {
        match &event.event_type {
            FightEventType::FightStarted { first, second } => {
                self.remember(first, second);
                None
            }
            FightEventType::RoundStarted { first, second } => {
                self.remember(first, second);
                Some(self.header(first, second))
            }
            FightEventType::AttackResolved(attack) => {
                let line = render_attack(
                    attack,
                    self.name(attack.attacker),
                    self.name(attack.defender),
                );
                // Blank line before the first attack of a round
                Some(match attack.attacker {
                    Side::First => format!("\n{}", line),
                    Side::Second => line,
                })
            }
            FightEventType::RoundLimitReached => {
                Some("Both fighters are exhausted. The judges stop the fight.".to_string())
            }
            FightEventType::FightEnded {
                outcome,
                first,
                second,
            } => {
                let header = self.header(first, second);
                let verdict = match outcome {
                    FightOutcome::Draw => "The battle is over. Draw.".to_string(),
                    FightOutcome::Victory { winner } => self.success(format!(
                        "The battle is over. The winner is {}.",
                        self.name(*winner)
                    )),
                };
                Some(format!("{}\n{}", header, verdict))
            }
            FightEventType::ExperienceAwarded { name, amount, .. } => Some(format!(
                "Brave warrior {} has received {}XP.",
                name, amount
            )),
        }
    }

    /// Print a styled line outside the fight (profiles, banners)
    pub fn print(&mut self, text: &str) -> std::io::Result<()> {
        writeln!(self.writer, "{}", text)
    }

    pub fn print_success(&mut self, text: &str) -> std::io::Result<()> {
        let text = self.success(text.to_string());
        writeln!(self.writer, "{}", text)
    }

    /// Print a character sheet with the name line in bold
    pub fn print_profile(
        &mut self,
        character: &Character,
        additional_info: bool,
    ) -> std::io::Result<()> {
        for (i, line) in render_profile(character, additional_info).lines().enumerate() {
            if i == 1 && self.styled {
                writeln!(self.writer, "{}", line.bold())?;
            } else {
                writeln!(self.writer, "{}", line)?;
            }
        }
        Ok(())
    }
}

impl<W: Write> FightObserver for ConsoleRenderer<W> {
    fn on_event(&mut self, event: &FightEvent) {
        if let Some(text) = self.render(event) {
            if let Err(err) = writeln!(self.writer, "{}", text) {
                tracing::warn!(error = %err, "Failed to write fight output");
            }
        }
    }
}
