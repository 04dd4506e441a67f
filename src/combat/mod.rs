pub mod body_zone;
pub mod constants;
pub mod resolution;
pub mod state;

pub use body_zone::{DefencePair, Move, Zone};
pub use resolution::{blocked, resolve_round, roll_damage, AttackResult, RoundReport};
pub use state::{FighterSnapshot, FighterState};
