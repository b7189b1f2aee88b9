//! Benchmark configuration
//!
//! Values come from an optional JSON file, then command-line flags
//! override whatever the file set.

use crate::error::CliError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Engine word width to benchmark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Isaac32,
    Isaac64,
}

impl Variant {
    pub fn name(self) -> &'static str {
        match self {
            Variant::Isaac32 => "isaac32",
            Variant::Isaac64 => "isaac64",
        }
    }
}

/// Alphas the benchmark is compiled for
pub const SUPPORTED_ALPHAS: [usize; 2] = [4, 8];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub variant: Variant,
    pub alpha: usize,

    /// Bytes to generate with each generator
    pub bytes: u64,

    /// Initial scalar seed; wall-clock time when absent
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            variant: Variant::Isaac64,
            alpha: 8,
            bytes: 1 << 30,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn from_json(json: &str) -> Result<Self, CliError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let json = fs::read_to_string(path).map_err(|source| CliError::ConfigRead {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> Result<(), CliError> {
        if !SUPPORTED_ALPHAS.contains(&self.alpha) {
            return Err(CliError::InvalidConfig(format!(
                "alpha must be one of {:?}, got {}",
                SUPPORTED_ALPHAS, self.alpha
            )));
        }
        Ok(())
    }
}
