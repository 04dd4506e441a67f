//! Brawl - Entry Point
//!
//! Logs the player in, walks through character creation, lets them pick an
//! opponent from the roster and runs one fight to the end.

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use brawl::core::config::FightConfig;
use brawl::core::error::{BrawlError, Result};
use brawl::data::OpponentCatalog;
use brawl::entity::{Character, SkillId};
use brawl::fight::{Fight, HumanMoves, RandomMoves};
use brawl::ui::menus::{choose_account, choose_opponent, choose_skill};
use brawl::ui::{ConsoleInput, ConsoleRenderer, InputProvider};
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

/// Brawl - turn-based text duel against a computer opponent
#[derive(Parser, Debug)]
#[command(name = "brawl")]
#[command(about = "Create a fighter, pick an opponent and trade blows until one drops")]
struct Args {
    /// Random seed for a reproducible fight
    #[arg(long)]
    seed: Option<u64>,

    /// Fight tuning file (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Opponent roster file (TOML); the built-in roster is used when omitted
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// End the fight as a draw after this many rounds
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Write the full fight log as JSON to this file when the fight ends
    #[arg(long)]
    json_log: Option<PathBuf>,

    /// Skip the dramatic pauses between screens
    #[arg(long)]
    fast: bool,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the game text
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("brawl=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Err(BrawlError::InputClosed) => {
            tracing::info!("Input closed, leaving the arena");
            Ok(())
        }
        other => other,
    }
}

fn run(args: &Args) -> Result<()> {
    // Configuration problems fail here, before anyone is asked anything
    let mut config = match &args.config {
        Some(path) => FightConfig::load_from_toml(path)?,
        None => FightConfig::default(),
    };
    if args.max_rounds.is_some() {
        config.max_rounds = args.max_rounds;
    }
    config.validate().map_err(BrawlError::ConfigError)?;

    let catalog = match &args.catalog {
        Some(path) => OpponentCatalog::load_from_toml(path)?,
        None => OpponentCatalog::with_defaults(),
    };
    catalog.validate()?;

    let seed = args.seed.unwrap_or_else(rand::random);
    tracing::info!(seed, opponents = catalog.len(), "Brawl starting");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let mut renderer = ConsoleRenderer::new(io::stdout());

    // === LOGIN ===
    let user = choose_account(&mut input)?;
    renderer.print("")?;

    // === CHARACTER CREATION ===
    let name = loop {
        let name = input.get_line("Your character's nickname: ")?;
        if !name.is_empty() {
            break name;
        }
    };
    let mut character = Character::with_improvements(name, user, config.initial_improvements);

    renderer.print(&format!(
        "\nWelcome {}! (character of {})\n",
        character.name, character.owner
    ))?;
    pause(args, 1);
    renderer.print_profile(&character, false)?;

    let total = config
        .initial_improvements
        .min(character.skills().improvements_remaining());
    renderer.print(&format!("Possible skill improvements: {}", total))?;

    let mut last: Option<SkillId> = None;
    character.apply_initial_skill_improvements(config.initial_improvements, |current, left| {
        if let Some(skill) = last {
            announce_improvement(&mut renderer, skill)?;
            renderer.print_profile(current, false)?;
            renderer.print(&format!("\nPossible skill improvements: {}\n", left))?;
        }
        let skill = choose_skill(&mut input)?;
        last = Some(skill);
        Ok(skill)
    })?;
    if let Some(skill) = last {
        announce_improvement(&mut renderer, skill)?;
    }
    renderer.print_profile(&character, true)?;

    // === OPPONENT ===
    renderer.print("Looking for opponents...")?;
    pause(args, 3);
    let opponent = choose_opponent(&mut input, &catalog)?;

    renderer.print("Get ready to fight!")?;
    pause(args, 3);

    // === FIGHT ===
    let mut fight = Fight::new(character, opponent, config);
    let mut player = HumanMoves::new(&mut input);
    fight.run(&mut player, &mut RandomMoves, &mut rng, &mut renderer)?;

    if let Some(path) = &args.json_log {
        std::fs::write(path, serde_json::to_string_pretty(fight.log())?)?;
        tracing::info!(path = %path.display(), events = fight.log().len(), "Fight log written");
    }

    Ok(())
}

fn announce_improvement<W: io::Write>(
    renderer: &mut ConsoleRenderer<W>,
    skill: SkillId,
) -> Result<()> {
    renderer.print_success(&format!(
        "Skill \"{}\" was successfully increased.",
        skill.name()
    ))?;
    Ok(())
}

fn pause(args: &Args, seconds: u64) {
    if !args.fast {
        std::thread::sleep(Duration::from_secs(seconds));
    }
}
