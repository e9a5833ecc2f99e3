//! Circuit input record and its domain validation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Phase topology of the circuit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    /// Single-phase 230 V (phase coefficient b = 2).
    #[serde(alias = "single-phase", alias = "single_phase")]
    Mono,
    /// Balanced three-phase 400 V (phase coefficient b = 1).
    #[serde(alias = "three-phase", alias = "three_phase")]
    Tri,
}

impl FromStr for Phase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mono" | "single-phase" | "single_phase" => Ok(Self::Mono),
            "tri" | "three-phase" | "three_phase" => Ok(Self::Tri),
            other => Err(format!("unknown phase \"{other}\", expected mono or tri")),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mono => write!(f, "single-phase 230V"),
            Self::Tri => write!(f, "three-phase 400V"),
        }
    }
}

/// Conductor material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    /// Copper conductor, ρ = 0.0225 Ω·mm²/m at service temperature.
    Copper,
    /// Aluminum conductor, ρ = 0.036 Ω·mm²/m at service temperature.
    #[serde(alias = "aluminium")]
    Aluminum,
}

impl FromStr for Material {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "copper" => Ok(Self::Copper),
            "aluminum" | "aluminium" => Ok(Self::Aluminum),
            other => Err(format!(
                "unknown material \"{other}\", expected copper or aluminum"
            )),
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Copper => write!(f, "copper"),
            Self::Aluminum => write!(f, "aluminum"),
        }
    }
}

/// Circuit usage category. Affects only which compliance limit applies
/// under the usage-threshold mode, never the voltage-drop value itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Usage {
    /// Lighting circuit, 3% limit.
    Lighting,
    /// Any other use, 5% limit.
    Other,
}

impl FromStr for Usage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lighting" => Ok(Self::Lighting),
            "other" => Ok(Self::Other),
            other => Err(format!(
                "unknown usage \"{other}\", expected lighting or other"
            )),
        }
    }
}

impl fmt::Display for Usage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lighting => write!(f, "lighting"),
            Self::Other => write!(f, "other"),
        }
    }
}

/// Immutable per-computation circuit description.
///
/// Constructed fresh for each submission and passed by value into the
/// calculator; no shared state survives a computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CircuitInput {
    /// Phase topology.
    pub phase: Phase,
    /// Conductor material.
    pub material: Material,
    /// Conductor cross-section (mm², must be > 0).
    pub area_mm2: f64,
    /// One-way cable length (m, must be > 0).
    pub length_m: f64,
    /// Load current (A, must be > 0).
    pub current_a: f64,
    /// Power factor cos φ, in (0, 1].
    pub cos_phi: f64,
    /// Usage category for compliance classification.
    pub usage: Usage,
}

impl CircuitInput {
    /// Checks every numeric field against its domain constraint.
    ///
    /// Fields are checked in a fixed order (area, length, current, cos φ)
    /// and the first violation is returned. Non-finite values are rejected
    /// here rather than left to surface as arithmetic faults.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> Result<(), Error> {
        require_positive("area_mm2", self.area_mm2)?;
        require_positive("length_m", self.length_m)?;
        require_positive("current_a", self.current_a)?;
        if !self.cos_phi.is_finite() || self.cos_phi <= 0.0 || self.cos_phi > 1.0 {
            return Err(Error::invalid(
                "cos_phi",
                format!("must be in (0, 1], got {}", self.cos_phi),
            ));
        }
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), Error> {
    if !value.is_finite() || value <= 0.0 {
        return Err(Error::invalid(
            field,
            format!("must be a positive finite number, got {value}"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> CircuitInput {
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

    #[test]
    fn valid_input_passes() {
        assert!(valid_input().validate().is_ok());
    }

    #[test]
    fn zero_area_names_area_field() {
        let mut input = valid_input();
        input.area_mm2 = 0.0;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("area_mm2"), "got: {err}");
    }

    #[test]
    fn negative_length_rejected() {
        let mut input = valid_input();
        input.length_m = -5.0;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("length_m"));
    }

    #[test]
    fn zero_current_rejected() {
        let mut input = valid_input();
        input.current_a = 0.0;
        assert!(input.validate().is_err());
    }

    #[test]
    fn cos_phi_zero_rejected() {
        // cos φ = 0 would give sin φ = 1 validly, but the domain is (0, 1].
        let mut input = valid_input();
        input.cos_phi = 0.0;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("cos_phi"));
    }

    #[test]
    fn cos_phi_one_accepted() {
        let mut input = valid_input();
        input.cos_phi = 1.0;
        assert!(input.validate().is_ok());
    }

    #[test]
    fn cos_phi_above_one_rejected() {
        let mut input = valid_input();
        input.cos_phi = 1.01;
        assert!(input.validate().is_err());
    }

    #[test]
    fn nan_area_rejected() {
        let mut input = valid_input();
        input.area_mm2 = f64::NAN;
        let err = input.validate().unwrap_err();
        assert!(err.to_string().contains("area_mm2"));
    }

    #[test]
    fn enum_parsing_accepts_aliases() {
        assert_eq!("mono".parse::<Phase>().ok(), Some(Phase::Mono));
        assert_eq!("three-phase".parse::<Phase>().ok(), Some(Phase::Tri));
        assert_eq!(
            "aluminium".parse::<Material>().ok(),
            Some(Material::Aluminum)
        );
        assert!("steel".parse::<Material>().is_err());
    }

    #[test]
    fn circuit_input_toml_round() {
        let toml = r#"
phase = "tri"
material = "copper"
area_mm2 = 2.5
length_m = 20.0
current_a = 16.0
cos_phi = 0.8
usage = "other"
"#;
        let input: Result<CircuitInput, _> = toml::from_str(toml);
        assert!(input.is_ok(), "valid circuit TOML should parse");
        assert_eq!(input.ok(), Some(valid_input()));
    }

    #[test]
    fn unknown_field_rejected() {
        let toml = r#"
phase = "tri"
material = "copper"
area_mm2 = 2.5
length_m = 20.0
current_a = 16.0
cos_phi = 0.8
usage = "other"
bogus = 1
"#;
        let input: Result<CircuitInput, _> = toml::from_str(toml);
        assert!(input.is_err());
    }
}
