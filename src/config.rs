//! config.rs
//!
//! Calculator settings, read from an optional TOML file.
//!
//! ```toml
//! [defaults]
//! release_fraction = 0.5
//!
//! [output]
//! format = "json"
//! ```

use serde::Deserialize;

use crate::error::SentenceError;
use crate::sentence::DEFAULT_RELEASE_FRACTION;

/// Top-level calculator configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Values used when a form leaves a field blank.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DefaultsConfig {
    #[serde(default = "default_release_fraction")]
    pub release_fraction: f64,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            release_fraction: DEFAULT_RELEASE_FRACTION,
        }
    }
}

fn default_release_fraction() -> f64 {
    DEFAULT_RELEASE_FRACTION
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// How results are printed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl CalcConfig {
    /// Parses and validates a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, SentenceError> {
        let config: CalcConfig = toml::from_str(text).map_err(|e| SentenceError::InvalidConfig {
            reason: e.message().to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the default release fraction lies in `(0, 1]`.
    pub fn validate(&self) -> Result<(), SentenceError> {
        let f = self.defaults.release_fraction;
        if !(f.is_finite() && f > 0.0 && f <= 1.0) {
            return Err(SentenceError::InvalidConfig {
                reason: format!("defaults.release_fraction must be in (0, 1], got {f}"),
            });
        }
        Ok(())
    }
}
