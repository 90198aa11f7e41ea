use spendwise_config::ConfigError;
use spendwise_core::CoreError;
use thiserror::Error;

/// Error type that captures failures outside the pure engine.
#[derive(Debug, Error)]
pub enum SpendwiseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Unsupported ledger schema v{found} (expected v{expected} or older)")]
    UnsupportedSchema { found: u32, expected: u32 },
}
