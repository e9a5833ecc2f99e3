//! The voltage-drop formula and the calculator entry point.

use std::fmt;

use serde::Serialize;

use super::compliance::{ComplianceMode, Verdict, classify};
use super::constants::{
    NOMINAL_V_SINGLE, NOMINAL_V_THREE, PHASE_COEFF_SINGLE, PHASE_COEFF_THREE, REACTANCE_PER_M,
    RHO_ALUMINUM, RHO_COPPER,
};
use super::input::{CircuitInput, Material, Phase};
use crate::error::Error;

/// Constants resolved for one computation.
///
/// Derivable only from (material, phase) via [`ResolvedConstants::resolve`];
/// there is no constructor taking raw numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResolvedConstants {
    /// Resistivity ρ at service temperature (Ω·mm²/m).
    pub rho: f64,
    /// Per-length reactance X (Ω/m).
    pub reactance_per_m: f64,
    /// Phase coefficient b (2 single-phase, 1 three-phase).
    pub phase_coeff: f64,
    /// Nominal voltage the relative drop refers to (V).
    pub nominal_v: f64,
}

impl ResolvedConstants {
    /// Looks up the constants for a material/phase pair.
    pub fn resolve(material: Material, phase: Phase) -> Self {
        let rho = match material {
            Material::Copper => RHO_COPPER,
            Material::Aluminum => RHO_ALUMINUM,
        };
        let (phase_coeff, nominal_v) = match phase {
            Phase::Mono => (PHASE_COEFF_SINGLE, NOMINAL_V_SINGLE),
            Phase::Tri => (PHASE_COEFF_THREE, NOMINAL_V_THREE),
        };
        Self {
            rho,
            reactance_per_m: REACTANCE_PER_M,
            phase_coeff,
            nominal_v,
        }
    }
}

/// Computed drop figures and the compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VoltageDropResult {
    /// Absolute voltage drop ΔU (V).
    pub drop_v: f64,
    /// Relative voltage drop ΔU% (percent of nominal voltage).
    pub drop_pct: f64,
    /// Compliance verdict under the deployed mode.
    pub verdict: Verdict,
}

/// Complete record of one computation, handed to renderers and exporters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Calculation {
    /// The input as submitted.
    pub input: CircuitInput,
    /// Constants resolved for this input.
    pub constants: ResolvedConstants,
    /// Drop figures and verdict.
    pub result: VoltageDropResult,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ΔU = {:.2} V  ΔU% = {:.2} % of {} V | {} {} {} mm², {} m, {} A, cos φ {} | {}",
            self.result.drop_v,
            self.result.drop_pct,
            self.constants.nominal_v,
            self.input.phase,
            self.input.material,
            self.input.area_mm2,
            self.input.length_m,
            self.input.current_a,
            self.input.cos_phi,
            self.result.verdict,
        )
    }
}

/// Stateless calculator configured with the deployment's compliance mode.
///
/// `run` is pure: same input, same output, no side effects.
#[derive(Debug, Clone, Copy)]
pub struct Calculator {
    mode: ComplianceMode,
}

impl Calculator {
    /// Creates a calculator classifying under the given mode.
    pub fn new(mode: ComplianceMode) -> Self {
        Self { mode }
    }

    /// The deployed compliance mode.
    pub fn mode(&self) -> ComplianceMode {
        self.mode
    }

    /// Validates the input, applies the NF C 15-100 simplified formula,
    /// and classifies the relative drop.
    ///
    ///   ΔU  = b × (ρ × L/S × cos φ + X × L × sin φ) × Ib
    ///   ΔU% = 100 × ΔU / V_nom
    ///
    /// Computed on full precision; rounding is left to presentation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] for any field outside its domain.
    pub fn run(&self, input: &CircuitInput) -> Result<Calculation, Error> {
        input.validate()?;

        let c = ResolvedConstants::resolve(input.material, input.phase);
        let sin_phi = (1.0 - input.cos_phi * input.cos_phi).sqrt();

        let resistive = c.rho * input.length_m / input.area_mm2 * input.cos_phi;
        let reactive = c.reactance_per_m * input.length_m * sin_phi;
        let drop_v = c.phase_coeff * (resistive + reactive) * input.current_a;
        let drop_pct = 100.0 * drop_v / c.nominal_v;

        Ok(Calculation {
            input: *input,
            constants: c,
            result: VoltageDropResult {
                drop_v,
                drop_pct,
                verdict: classify(self.mode, drop_pct, input.usage),
            },
        })
    }
}
