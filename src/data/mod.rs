//! Static game data: accounts and the opponent roster

pub mod accounts;
pub mod opponents;

pub use opponents::{CatalogLoadError, OpponentCatalog, OpponentEntry};
