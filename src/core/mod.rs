pub mod config;
pub mod error;
pub mod types;

pub use config::FightConfig;
pub use error::{BrawlError, Result};
pub use types::{Round, Side};
