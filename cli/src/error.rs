//! CLI error types

use isaac_engine_core_rs::IsaacError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Cannot read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config JSON: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Engine error: {0}")]
    Engine(#[from] IsaacError),
}
