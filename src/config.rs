//! TOML-based application configuration.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::calc::ComplianceMode;

/// Top-level application configuration parsed from TOML.
///
/// All fields have defaults; load from TOML with
/// [`AppConfig::from_toml_file`] or use [`AppConfig::default`].
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Compliance classification settings.
    pub compliance: ComplianceConfig,
    /// Report branding settings.
    pub branding: BrandingConfig,
}

/// Compliance classification settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ComplianceConfig {
    /// Classification policy: `"usage"` or `"tiered"`.
    pub mode: ComplianceMode,
}

impl Default for ComplianceConfig {
    fn default() -> Self {
        Self {
            mode: ComplianceMode::Usage,
        }
    }
}

/// Report branding settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct BrandingConfig {
    /// Title line printed at the top of every report.
    pub title: String,
    /// Optional path to a text banner (logo) file. Empty means none; an
    /// unreadable file degrades to the title text, never an error.
    pub logo_path: String,
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self {
            title: "Voltage drop report (NF C 15-100)".to_string(),
            logo_path: String::new(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug, Error)]
#[error("config error: {field} — {message}")]
pub struct ConfigError {
    /// Dotted field path (e.g., `"compliance.mode"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl AppConfig {
    /// Parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "config".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown
    /// fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if configuration is valid. The enum fields
    /// are already constrained by deserialization; only the branding title
    /// carries a runtime constraint.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.branding.title.trim().is_empty() {
            errors.push(ConfigError {
                field: "branding.title".into(),
                message: "must not be blank".into(),
            });
        }
        errors
    }
}
