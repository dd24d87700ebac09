//! Checker settings.
//!
//! The inference settings are flattened in, so one TOML table configures both:
//!
//! ```toml
//! conflict_policy = "strict"
//! list_literal_base = "list"
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;
use typar_infer::Settings;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckSettings {
    #[serde(flatten)]
    pub inference: Settings,

    /// Generic base given to the type of a list literal (`[1, 2]` is `Sequence[int]`).
    #[serde(default = "default_list_literal_base")]
    pub list_literal_base: String,
}

impl Default for CheckSettings {
    fn default() -> Self {
        Self {
            inference: Settings::default(),
            list_literal_base: default_list_literal_base(),
        }
    }
}

impl From<Settings> for CheckSettings {
    fn from(inference: Settings) -> Self {
        Self { inference, ..Self::default() }
    }
}

pub fn default_list_literal_base() -> String {
    "Sequence".to_string()
}

#[derive(Debug, Error)]
pub enum CheckSettingsError {
    #[error("invalid settings: {0}")]
    Parse(#[from] toml::de::Error),
}

impl CheckSettings {
    pub fn from_toml_str(text: &str) -> Result<Self, CheckSettingsError> {
        Ok(toml::from_str(text)?)
    }
}
