//! Environment-backed module configuration.
//!
//! All settings have defaults. Override with `SOFTLEP_*` environment
//! variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;

use crate::constants::VERTEX_DISABLED_LABEL;

/// Default jet dataset label.
pub const DEFAULT_JETS_LABEL: &str = "jets";
/// Default vertex dataset label.
pub const DEFAULT_VERTEX_LABEL: &str = "primaryVertex";
/// Default lepton dataset label.
pub const DEFAULT_LEPTONS_LABEL: &str = "leptons";
/// Default label the produced tag results are published under.
pub const DEFAULT_OUTPUT_LABEL: &str = "softLeptonTags";

/// Per-producer configuration, resolved once per module instance.
///
/// Use [`Config::from_env`] to read `SOFTLEP_*` overrides on top of
/// defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Jet dataset label. Default: `"jets"`.
    pub jets: String,

    /// Vertex dataset label; the reserved value `"none"` disables vertex
    /// input. Default: `"primaryVertex"`.
    pub primary_vertex: String,

    /// Lepton dataset label. Default: `"leptons"`.
    pub leptons: String,

    /// Label the ordered tag-result dataset is published under.
    /// Default: `"softLeptonTags"`.
    pub output: String,

    /// Opaque configuration block passed through to the tagger, never
    /// interpreted by this crate. Default: `null`.
    pub tagger_settings: serde_json::Value,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jets: DEFAULT_JETS_LABEL.to_string(),
            primary_vertex: DEFAULT_VERTEX_LABEL.to_string(),
            leptons: DEFAULT_LEPTONS_LABEL.to_string(),
            output: DEFAULT_OUTPUT_LABEL.to_string(),
            tagger_settings: serde_json::Value::Null,
        }
    }
}

impl Config {
    const ENV_JETS: &'static str = "SOFTLEP_JETS";
    const ENV_PRIMARY_VERTEX: &'static str = "SOFTLEP_PRIMARY_VERTEX";
    const ENV_LEPTONS: &'static str = "SOFTLEP_LEPTONS";
    const ENV_OUTPUT: &'static str = "SOFTLEP_OUTPUT";
    const ENV_TAGGER_SETTINGS: &'static str = "SOFTLEP_TAGGER_SETTINGS";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let jets = Self::parse_string_from_env(Self::ENV_JETS, defaults.jets);
        let primary_vertex =
            Self::parse_string_from_env(Self::ENV_PRIMARY_VERTEX, defaults.primary_vertex);
        let leptons = Self::parse_string_from_env(Self::ENV_LEPTONS, defaults.leptons);
        let output = Self::parse_string_from_env(Self::ENV_OUTPUT, defaults.output);
        let tagger_settings = Self::parse_settings_from_env(defaults.tagger_settings)?;

        Ok(Self {
            jets,
            primary_vertex,
            leptons,
            output,
            tagger_settings,
        })
    }

    /// Validates labels: none may be empty, and the output label must not
    /// collide with an input label.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jets.is_empty() {
            return Err(ConfigError::EmptyLabel { field: "jets" });
        }
        if self.primary_vertex.is_empty() {
            return Err(ConfigError::EmptyLabel {
                field: "primary_vertex",
            });
        }
        if self.leptons.is_empty() {
            return Err(ConfigError::EmptyLabel { field: "leptons" });
        }
        if self.output.is_empty() {
            return Err(ConfigError::EmptyLabel { field: "output" });
        }

        let collides = self.output == self.jets
            || self.output == self.leptons
            || (self.output == self.primary_vertex && !self.vertex_disabled());
        if collides {
            return Err(ConfigError::OutputLabelCollision {
                label: self.output.clone(),
            });
        }

        Ok(())
    }

    /// Returns whether vertex input is disabled via the reserved label.
    #[inline]
    pub fn vertex_disabled(&self) -> bool {
        self.primary_vertex == VERTEX_DISABLED_LABEL
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_settings_from_env(
        default: serde_json::Value,
    ) -> Result<serde_json::Value, ConfigError> {
        match env::var(Self::ENV_TAGGER_SETTINGS) {
            Ok(value) => {
                serde_json::from_str(&value).map_err(|source| ConfigError::InvalidTaggerSettings {
                    value,
                    source,
                })
            }
            Err(_) => Ok(default),
        }
    }
}
