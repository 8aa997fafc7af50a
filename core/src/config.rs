//! Generator configuration
//!
//! A [`GeneratorConfig`] is the recipe for building a [`Generator`]: an
//! optional seed and a discard offset. It is loaded from JSON by embedding
//! systems that keep their run parameters in config files.
//!
//! ```
//! use randgen_core::GeneratorConfig;
//!
//! let config = GeneratorConfig::from_json(r#"{"seed": 42, "discard_time": 10}"#).unwrap();
//! let rng = config.build();
//! assert_eq!(rng.seed(), 42);
//! assert_eq!(rng.generation_time(), 0);
//! ```

use crate::rng::Generator;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// Errors raised while loading a generator configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid generator config JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// How to construct a generator
///
/// Both fields are optional in JSON: a missing seed means "seed from
/// entropy", a missing discard means 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Explicit seed (None = entropy)
    #[serde(default)]
    pub seed: Option<u64>,

    /// Engine outputs to skip before the first visible draw
    #[serde(default)]
    pub discard_time: u64,
}

impl GeneratorConfig {
    /// Config for an explicitly seeded generator with no discard
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            discard_time: 0,
        }
    }

    /// Parse a config from a JSON object
    ///
    /// # Errors
    /// Returns `ConfigError::InvalidJson` on malformed JSON, wrong field
    /// types or unknown fields.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Build the generator this config describes
    ///
    /// Without a seed the generator is entropy-seeded and `discard_time`
    /// has no effect.
    pub fn build(&self) -> Generator {
        match self.seed {
            Some(seed) => Generator::with_discard(seed, self.discard_time),
            None => {
                if self.discard_time != 0 {
                    warn!(
                        discard_time = self.discard_time,
                        "discard_time ignored for entropy-seeded generator"
                    );
                }
                Generator::new()
            }
        }
    }
}

impl Generator {
    /// Create a generator from a [`GeneratorConfig`]
    pub fn from_config(config: &GeneratorConfig) -> Self {
        config.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = GeneratorConfig::from_json("{}").unwrap();
        assert_eq!(config, GeneratorConfig::default());
        assert_eq!(config.seed, None);
        assert_eq!(config.discard_time, 0);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = GeneratorConfig::from_json(r#"{"sead": 1}"#);
        assert!(matches!(result, Err(ConfigError::InvalidJson(_))));
    }

    #[test]
    fn test_negative_seed_rejected() {
        assert!(GeneratorConfig::from_json(r#"{"seed": -1}"#).is_err());
    }
}
