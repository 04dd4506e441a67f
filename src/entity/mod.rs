pub mod character;
pub mod skills;

pub use character::{Character, Modifiers};
pub use skills::{SkillId, SkillSet};
