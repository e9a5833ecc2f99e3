//! API response types.
//!
//! The request payload for `/calculate` is [`crate::calc::CircuitInput`]
//! itself; responses flatten the calculation record into one object so
//! clients never need to join inputs and results.

use serde::Serialize;

use crate::calc::{Calculation, ComplianceMode, Material, Phase, Usage, Verdict};

/// Full calculation response: inputs echoed, resolved constants, results.
#[derive(Debug, Serialize)]
pub struct CalculationResponse {
    /// Phase topology as submitted.
    pub phase: Phase,
    /// Conductor material as submitted.
    pub material: Material,
    /// Cross-section as submitted (mm²).
    pub area_mm2: f64,
    /// Cable length as submitted (m).
    pub length_m: f64,
    /// Load current as submitted (A).
    pub current_a: f64,
    /// Power factor as submitted.
    pub cos_phi: f64,
    /// Usage category as submitted.
    pub usage: Usage,
    /// Resolved resistivity ρ (Ω·mm²/m).
    pub rho_ohm_mm2_per_m: f64,
    /// Resolved per-length reactance X (Ω/m).
    pub reactance_ohm_per_m: f64,
    /// Resolved phase coefficient b.
    pub phase_coeff: f64,
    /// Resolved nominal voltage (V).
    pub nominal_v: f64,
    /// Absolute voltage drop ΔU (V), full precision.
    pub drop_v: f64,
    /// Relative voltage drop ΔU% (percent), full precision.
    pub drop_pct: f64,
    /// Compliance verdict under the deployed mode.
    pub verdict: Verdict,
    /// Remediation advice, present exactly when non-compliant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<&'static str>,
}

impl From<&Calculation> for CalculationResponse {
    fn from(calc: &Calculation) -> Self {
        Self {
            phase: calc.input.phase,
            material: calc.input.material,
            area_mm2: calc.input.area_mm2,
            length_m: calc.input.length_m,
            current_a: calc.input.current_a,
            cos_phi: calc.input.cos_phi,
            usage: calc.input.usage,
            rho_ohm_mm2_per_m: calc.constants.rho,
            reactance_ohm_per_m: calc.constants.reactance_per_m,
            phase_coeff: calc.constants.phase_coeff,
            nominal_v: calc.constants.nominal_v,
            drop_v: calc.result.drop_v,
            drop_pct: calc.result.drop_pct,
            verdict: calc.result.verdict,
            advice: calc.result.verdict.advice(),
        }
    }
}

/// Enumerated input choices and the standard section catalog.
#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    /// Standard conductor cross-sections (mm²), a UI convenience.
    pub sections_mm2: &'static [f64],
    /// Accepted phase tokens.
    pub phases: &'static [&'static str],
    /// Accepted material tokens.
    pub materials: &'static [&'static str],
    /// Accepted usage tokens.
    pub usages: &'static [&'static str],
}

/// Deployed compliance settings.
#[derive(Debug, Serialize)]
pub struct ConfigResponse {
    /// Classification mode in effect for this deployment.
    pub mode: ComplianceMode,
    /// Lighting limit (%), inclusive.
    pub limit_lighting_pct: f64,
    /// Other-uses limit (%), inclusive.
    pub limit_other_pct: f64,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message naming the offending field.
    pub error: String,
}
