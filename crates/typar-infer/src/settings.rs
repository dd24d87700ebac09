//! Inference settings.
//!
//! Settings are plain serde structs so they can be embedded in a larger tool
//! configuration or loaded on their own from TOML:
//!
//! ```toml
//! conflict_policy = "strict"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What to do when two arguments bind the same type parameter to different types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConflictPolicy {
    /// Keep the first binding and report the later one as a warning.
    #[default]
    FirstWins,
    /// Reject the call.
    Strict,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub conflict_policy: ConflictPolicy,
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Settings {
    pub fn from_toml_str(text: &str) -> Result<Self, SettingsError> {
        Ok(toml::from_str(text)?)
    }
}
