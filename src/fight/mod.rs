//! Fight controller: the round loop and the move sources that feed it

pub mod ai;
pub mod execution;

pub use ai::{HumanMoves, MoveSource, RandomMoves};
pub use execution::{
    check_fight_end, Fight, FightEvent, FightEventType, FightObserver, FightOutcome, FightPhase,
    NullObserver,
};
