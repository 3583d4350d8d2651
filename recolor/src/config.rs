use crate::error::ConfigError;
use crate::model::SelectionMode;
use serde::{Deserialize, Serialize};

pub const DEFAULT_FILL: &str = "#cccccc";

/// What to do with text that is not well-formed XML.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MalformedPolicy {
    /// Fail the upload with `IngestError::Malformed`.
    #[default]
    Reject,
    /// Load an empty document, the way a browser DOM parser would.
    Empty,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct Config {
    pub mode: SelectionMode,
    /// Fill used for shapes without a `fill` attribute.
    pub default_fill: String,
    pub malformed: MalformedPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            mode: SelectionMode::default(),
            default_fill: DEFAULT_FILL.to_string(),
            malformed: MalformedPolicy::default(),
        }
    }
}

impl Config {
    pub fn single() -> Self { Config { mode: SelectionMode::Single, ..Config::default() } }

    pub fn grouped() -> Self { Config { mode: SelectionMode::Grouped, ..Config::default() } }

    pub fn from_json_str(text: &str) -> Result<Config, ConfigError> {
        let cfg: Config = serde_json::from_str(text)?;
        cfg.validate()
    }

    pub fn from_json_value(v: serde_json::Value) -> Result<Config, ConfigError> {
        let cfg: Config = serde_json::from_value(v)?;
        cfg.validate()
    }

    pub fn validate(self) -> Result<Config, ConfigError> {
        if self.default_fill.trim().is_empty() {
            return Err(ConfigError::EmptyDefaultFill);
        }
        Ok(self)
    }
}
