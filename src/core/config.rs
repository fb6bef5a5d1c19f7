use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{PrimehuntError, Result};

pub const DEFAULT_RANGE: u64 = 100_000;
pub const DEFAULT_SLICE_SIZE: u64 = 10_000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Upper bound of the candidate range [0, range).
    pub range: u64,
    /// Number of candidates per work slice.
    pub slice_size: u64,
    /// Maximum simultaneously running evaluator tasks (0 = all available cores).
    pub concurrency: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            range: DEFAULT_RANGE,
            slice_size: DEFAULT_SLICE_SIZE,
            concurrency: 0,
        }
    }
}

impl SearchConfig {
    pub fn new(range: u64, slice_size: u64, concurrency: usize) -> Result<Self> {
        let config = Self {
            range,
            slice_size,
            concurrency,
        };
        config.validate()?;
        Ok(config)
    }

    /// A slice size of zero would divide by zero when planning slices, so it
    /// is rejected up front rather than left to misbehave downstream.
    pub fn validate(&self) -> Result<()> {
        if self.slice_size == 0 {
            return Err(PrimehuntError::Config(
                "slice size must be a positive integer, got 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Number of evaluator tasks allowed to run at once.
    pub fn resolved_concurrency(&self) -> usize {
        if self.concurrency == 0 {
            num_cpus::get()
        } else {
            self.concurrency
        }
    }
}

/// On-disk configuration: a `[search]` table mirroring the CLI values.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub search: SearchConfig,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SearchConfig> {
    let contents = std::fs::read_to_string(path)?;
    let file: ConfigFile = toml::from_str(&contents)
        .map_err(|e| PrimehuntError::Config(format!("Failed to parse config: {}", e)))?;
    Ok(file.search)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &SearchConfig) -> Result<()> {
    let file = ConfigFile {
        search: config.clone(),
    };
    let contents = toml::to_string_pretty(&file)
        .map_err(|e| PrimehuntError::Config(format!("Failed to serialize config: {}", e)))?;
    std::fs::write(path, contents)?;
    Ok(())
}
