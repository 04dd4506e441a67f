//! Fight execution - the round loop
//!
//! Each round:
//! 1. Announce the round with both fighters' state
//! 2. Ask the first side for its move, then the second side
//! 3. Resolve the exchange
//! 4. Report both attacks
//! 5. Finish if anyone is down (or the round cap is hit)

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::combat::{resolve_round, AttackResult, FighterSnapshot, FighterState};
use crate::core::config::FightConfig;
use crate::core::error::Result;
use crate::core::types::{Round, Side};
use crate::entity::Character;
use crate::fight::ai::MoveSource;

/// How a finished fight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightOutcome {
    Victory { winner: Side },
    Draw,
}

impl FightOutcome {
    pub fn winner(&self) -> Option<Side> {
        match self {
            FightOutcome::Victory { winner } => Some(*winner),
            FightOutcome::Draw => None,
        }
    }
}

/// Fight state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FightPhase {
    InProgress,
    Finished(FightOutcome),
}

/// A fight event with the round it happened in (0 = before the first round)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightEvent {
    pub round: Round,
    pub event_type: FightEventType,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FightEventType {
    FightStarted {
        first: FighterSnapshot,
        second: FighterSnapshot,
    },
    RoundStarted {
        first: FighterSnapshot,
        second: FighterSnapshot,
    },
    AttackResolved(AttackResult),
    RoundLimitReached,
    FightEnded {
        outcome: FightOutcome,
        first: FighterSnapshot,
        second: FighterSnapshot,
    },
    ExperienceAwarded {
        side: Side,
        name: String,
        amount: u32,
    },
}

/// Presentation sink for fight events
pub trait FightObserver {
    fn on_event(&mut self, event: &FightEvent);
}

/// Observer that ignores everything (headless runs and tests)
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl FightObserver for NullObserver {
    fn on_event(&mut self, _event: &FightEvent) {}
}

/// Decide the outcome from current hit points, if the fight is over
pub fn check_fight_end(first: &FighterState, second: &FighterState) -> Option<FightOutcome> {
    match (first.is_down(), second.is_down()) {
        (true, true) => Some(FightOutcome::Draw),
        (false, true) => Some(FightOutcome::Victory {
            winner: Side::First,
        }),
        (true, false) => Some(FightOutcome::Victory {
            winner: Side::Second,
        }),
        (false, false) => None,
    }
}

/// One fight between two characters
///
/// Owns both characters for the duration; `into_characters` hands them
/// back (with any experience awarded) once the fight is done.
#[derive(Debug, Clone)]
pub struct Fight {
    first: FighterState,
    second: FighterState,
    config: FightConfig,
    round: Round,
    phase: FightPhase,
    started: bool,
    log: Vec<FightEvent>,
}

impl Fight {
    /// Pair two characters; both start at full health
    pub fn new(first: Character, second: Character, config: FightConfig) -> Self {
        Self {
            first: FighterState::new(first),
            second: FighterState::new(second),
            config,
            round: 0,
            phase: FightPhase::InProgress,
            started: false,
            log: Vec::new(),
        }
    }

    pub fn fighter(&self, side: Side) -> &FighterState {
        match side {
            Side::First => &self.first,
            Side::Second => &self.second,
        }
    }

    fn fighter_mut(&mut self, side: Side) -> &mut FighterState {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }

    pub fn phase(&self) -> FightPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, FightPhase::Finished(_))
    }

    pub fn outcome(&self) -> Option<FightOutcome> {
        match self.phase {
            FightPhase::Finished(outcome) => Some(outcome),
            FightPhase::InProgress => None,
        }
    }

    /// Rounds completed so far
    pub fn round(&self) -> Round {
        self.round
    }

    /// Every event emitted so far, in order
    pub fn log(&self) -> &[FightEvent] {
        &self.log
    }

    /// Hand the characters back, first side first
    pub fn into_characters(self) -> (Character, Character) {
        (self.first.character, self.second.character)
    }

    fn emit(&mut self, observer: &mut dyn FightObserver, event_type: FightEventType) {
        let event = FightEvent {
            round: self.round,
            event_type,
        };
        observer.on_event(&event);
        self.log.push(event);
    }

    /// Announce the fight (idempotent)
    pub fn start(&mut self, observer: &mut dyn FightObserver) {
        if self.started {
            return;
        }
        self.announce(observer);
        let event = self.start_event();
        self.log.push(event);
    }

    fn announce(&mut self, observer: &mut dyn FightObserver) {
        self.started = true;
        tracing::info!(
            first = %self.first.character.name,
            second = %self.second.character.name,
            "Fight started"
        );
        observer.on_event(&self.start_event());
    }

    fn start_event(&self) -> FightEvent {
        FightEvent {
            round: self.round,
            event_type: FightEventType::FightStarted {
                first: self.first.snapshot(),
                second: self.second.snapshot(),
            },
        }
    }

    /// Play one round
    ///
    /// Does nothing once the fight is finished. Errors only come from the
    /// move sources (e.g. input closed); the fight state and log are
    /// untouched then, so the round can be retried.
    pub fn run_round<R: RngCore>(
        &mut self,
        first_source: &mut dyn MoveSource,
        second_source: &mut dyn MoveSource,
        rng: &mut R,
        observer: &mut dyn FightObserver,
    ) -> Result<FightPhase> {
        if self.is_finished() {
            return Ok(self.phase);
        }
        if !self.started {
            self.announce(observer);
        }

        // Header is shown before the moves are asked for
        let header = FightEvent {
            round: self.round + 1,
            event_type: FightEventType::RoundStarted {
                first: self.first.snapshot(),
                second: self.second.snapshot(),
            },
        };
        observer.on_event(&header);

        // ===== MOVES =====
        let first_move = first_source.choose_move(&self.first, &self.second, rng)?;
        let second_move = second_source.choose_move(&self.second, &self.first, rng)?;

        if self.log.is_empty() {
            let event = self.start_event();
            self.log.push(event);
        }
        self.round = header.round;
        self.log.push(header);

        // ===== RESOLUTION =====
        let report = resolve_round(
            &mut self.first,
            &mut self.second,
            first_move,
            second_move,
            self.config.damage_noise,
            rng,
        );
        for attack in report.attacks() {
            self.emit(observer, FightEventType::AttackResolved(attack));
        }

        // ===== END CHECK =====
        if let Some(outcome) = check_fight_end(&self.first, &self.second) {
            self.finish(outcome, observer);
        } else if self.config.max_rounds.is_some_and(|cap| self.round >= cap) {
            tracing::warn!(round = self.round, "Round limit reached, declaring a draw");
            self.emit(observer, FightEventType::RoundLimitReached);
            self.finish(FightOutcome::Draw, observer);
        }

        Ok(self.phase)
    }

    /// Play rounds until the fight finishes
    pub fn run<R: RngCore>(
        &mut self,
        first_source: &mut dyn MoveSource,
        second_source: &mut dyn MoveSource,
        rng: &mut R,
        observer: &mut dyn FightObserver,
    ) -> Result<FightOutcome> {
        loop {
            if let FightPhase::Finished(outcome) =
                self.run_round(first_source, second_source, rng, observer)?
            {
                return Ok(outcome);
            }
        }
    }

    fn finish(&mut self, outcome: FightOutcome, observer: &mut dyn FightObserver) {
        self.phase = FightPhase::Finished(outcome);
        tracing::info!(round = self.round, ?outcome, "Fight finished");

        let event_type = FightEventType::FightEnded {
            outcome,
            first: self.first.snapshot(),
            second: self.second.snapshot(),
        };
        self.emit(observer, event_type);

        if let Some(winner) = outcome.winner() {
            self.distribute_experience(winner, observer);
        }
    }

    fn distribute_experience(&mut self, winner: Side, observer: &mut dyn FightObserver) {
        let amount = self.config.victory_experience;
        let character = &mut self.fighter_mut(winner).character;
        character.award_experience(amount);
        let name = character.name.clone();

        self.emit(
            observer,
            FightEventType::ExperienceAwarded {
                side: winner,
                name,
                amount,
            },
        );
    }
}
