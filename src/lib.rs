//! Brawl - Turn-Based Text Duel Simulator

pub mod combat;
pub mod core;
pub mod data;
pub mod entity;
pub mod fight;
pub mod ui;
