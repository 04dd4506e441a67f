use thiserror::Error;

#[derive(Error, Debug)]
pub enum BrawlError {
    #[error("Invalid selection: {value} (expected 1..={max})")]
    InvalidSelection { value: String, max: u32 },

    #[error("No skill improvements left")]
    NoImprovementsLeft,

    #[error("Invalid catalog index: {index} (catalog has {len} entries)")]
    InvalidCatalogIndex { index: usize, len: usize },

    #[error("Catalog error: {0}")]
    CatalogError(#[from] crate::data::opponents::CatalogLoadError),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Input closed before a choice was made")]
    InputClosed,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl BrawlError {
    /// Errors that a menu recovers from by asking again
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            BrawlError::InvalidSelection { .. } | BrawlError::InvalidCatalogIndex { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, BrawlError>;
