//! Batch circuit files and built-in circuit presets.
//!
//! A batch file is a TOML document holding one `[[circuit]]` table per
//! circuit to evaluate. Each entry is validated independently so one bad
//! circuit does not hide the others.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::calc::input::{CircuitInput, Material, Phase, Usage};
use crate::config::ConfigError;

/// A parsed batch of circuits.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct BatchFile {
    /// Circuits to evaluate, in file order. Defaults to empty so a file
    /// with no `[[circuit]]` tables hits the explicit emptiness check
    /// rather than a missing-field parse error.
    #[serde(rename = "circuit", default)]
    pub circuits: Vec<CircuitInput>,
}

impl BatchFile {
    /// Parses a batch from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is
    /// invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "batch".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a batch from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid, contains unknown
    /// fields, or holds no circuits.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let batch: Self = toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })?;
        if batch.circuits.is_empty() {
            return Err(ConfigError {
                field: "circuit".to_string(),
                message: "batch file holds no [[circuit]] entries".to_string(),
            });
        }
        Ok(batch)
    }

    /// Validates every circuit, returning one error per bad entry with its
    /// zero-based index in the field path.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        for (i, circuit) in self.circuits.iter().enumerate() {
            if let Err(e) = circuit.validate() {
                errors.push(ConfigError {
                    field: format!("circuit[{i}]"),
                    message: e.to_string(),
                });
            }
        }
        errors
    }
}

/// Available circuit preset names.
pub const PRESETS: &[&str] = &["domestic_lighting", "workshop_feed", "long_run"];

/// Loads a built-in circuit preset.
///
/// # Errors
///
/// Returns a `ConfigError` if the preset name is unknown.
pub fn from_preset(name: &str) -> Result<CircuitInput, ConfigError> {
    match name {
        "domestic_lighting" => Ok(domestic_lighting()),
        "workshop_feed" => Ok(workshop_feed()),
        "long_run" => Ok(long_run()),
        _ => Err(ConfigError {
            field: "preset".to_string(),
            message: format!("unknown preset \"{name}\", available: {}", PRESETS.join(", ")),
        }),
    }
}

/// Domestic lighting run: single-phase copper 1.5 mm² over 18 m.
pub fn domestic_lighting() -> CircuitInput {
    CircuitInput {
        phase: Phase::Mono,
        material: Material::Copper,
        area_mm2: 1.5,
        length_m: 18.0,
        current_a: 10.0,
        cos_phi: 0.95,
        usage: Usage::Lighting,
    }
}

/// Workshop feed: three-phase copper 2.5 mm² over 20 m at 16 A.
pub fn workshop_feed() -> CircuitInput {
    CircuitInput {
        phase: Phase::Tri,
        material: Material::Copper,
        area_mm2: 2.5,
        length_m: 20.0,
        current_a: 16.0,
        cos_phi: 0.8,
        usage: Usage::Other,
    }
}

/// The workshop feed stretched to 500 m, a deliberately failing run.
pub fn long_run() -> CircuitInput {
    CircuitInput {
        length_m: 500.0,
        ..workshop_feed()
    }
}
