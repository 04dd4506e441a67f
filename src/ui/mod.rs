//! UI module - console input and text rendering

pub mod input;
pub mod menus;
pub mod narrative;

pub use input::{ConsoleInput, InputProvider, ScriptedInput};
pub use narrative::ConsoleRenderer;
