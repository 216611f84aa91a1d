//! Top-level configuration with layered resolution.

pub mod defaults;
mod observability_config;
mod pretraining_config;
mod storage_config;
mod training_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use pretraining_config::PretrainingConfig;
pub use storage_config::StorageConfig;
pub use training_config::TrainingConfig;

use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`PHI_*`)
/// 2. Config file passed to [`PhiConfig::load`]
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhiConfig {
    pub training: TrainingConfig,
    pub pretraining: PretrainingConfig,
    pub storage: StorageConfig,
    pub observability: ObservabilityConfig,
}

impl PhiConfig {
    /// Load configuration from an optional TOML file, then apply `PHI_*`
    /// environment overrides and validate.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => {
                let content =
                    std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                        path: path.display().to_string(),
                    })?;
                toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                    path: path.display().to_string(),
                    message: e.to_string(),
                })?
            }
            None => Self::default(),
        };

        config.apply_env_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from a variable lookup. Unparseable values are ignored.
    pub fn apply_env_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("PHI_LEARNING_RATE").and_then(|v| v.parse().ok()) {
            self.training.learning_rate = v;
        }
        if let Some(v) = lookup("PHI_TRAINING_SEED").and_then(|v| v.parse().ok()) {
            self.training.seed = Some(v);
        }
        if let Some(v) = lookup("PHI_SYNTHETIC_NOTES").and_then(|v| v.parse().ok()) {
            self.pretraining.synthetic_note_count = v;
        }
        if let Some(v) = lookup("PHI_AUTO_PRETRAIN").and_then(|v| v.parse().ok()) {
            self.pretraining.auto_pretrain = v;
        }
        if let Some(v) = lookup("PHI_DB_PATH") {
            self.storage.db_path = v;
        }
        if let Some(v) = lookup("PHI_LOG_LEVEL") {
            self.observability.log_level = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.training;
        if !(t.learning_rate > 0.0 && t.learning_rate.is_finite()) {
            return Err(invalid("training.learning_rate", "must be a positive number"));
        }
        if t.supervised_epochs == 0 {
            return Err(invalid("training.supervised_epochs", "must be greater than 0"));
        }
        if t.pretrain_epochs == 0 {
            return Err(invalid("training.pretrain_epochs", "must be greater than 0"));
        }
        if !(t.pretrain_initial_rate > 0.0 && t.pretrain_initial_rate.is_finite()) {
            return Err(invalid(
                "training.pretrain_initial_rate",
                "must be a positive number",
            ));
        }
        if !(0.0..=1.0).contains(&t.pretrain_rate_decay) || t.pretrain_rate_decay == 0.0 {
            return Err(invalid(
                "training.pretrain_rate_decay",
                "must be in (0.0, 1.0]",
            ));
        }
        if self.pretraining.max_notes == 0 {
            return Err(invalid("pretraining.max_notes", "must be greater than 0"));
        }
        if self.pretraining.fetch_timeout_secs == 0 {
            return Err(invalid(
                "pretraining.fetch_timeout_secs",
                "must be greater than 0",
            ));
        }
        if !self.storage.in_memory && self.storage.db_path.trim().is_empty() {
            return Err(invalid("storage.db_path", "must not be empty"));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
