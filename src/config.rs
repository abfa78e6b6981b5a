//! Application configuration loaded from TOML.
//!
//! ```toml
//! seed = 42
//!
//! [engine]
//! blend_probability = 0.7
//! scoring = "depth_adjusted"
//! ```
//!
//! Every key is optional.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts_core::{Engine, EngineSettings};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Getters, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Engine tuning.
    #[serde(default)]
    engine: EngineSettings,

    /// Seed for the random source; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

impl AppConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml(&content)?;
        info!(
            blend_probability = config.engine.blend_probability,
            scoring = ?config.engine.scoring,
            seed = ?config.seed,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config
            .engine
            .validate()
            .map_err(|e| ConfigError::new(format!("Invalid engine settings: {}", e)))?;
        Ok(config)
    }

    /// Replaces the seed, as a command-line override does.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// Builds the engine described by this configuration.
    pub fn build_engine(&self) -> Result<Engine, ConfigError> {
        Engine::new(self.engine)
            .map_err(|e| ConfigError::new(format!("Invalid engine settings: {}", e)))
    }

    /// Random source: seeded when a seed is configured.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
