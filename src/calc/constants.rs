//! NF C 15-100 calculation constants.
//!
//! Resistivities already embed the 1.25 correction for a 70°C service
//! temperature, per the standard's simplified method. These values are a
//! deterministic function of (material, phase) and are never
//! user-overridable.

/// Copper resistivity ρ at service temperature (Ω·mm²/m), 0.018 × 1.25.
pub const RHO_COPPER: f64 = 0.0225;

/// Aluminum resistivity ρ at service temperature (Ω·mm²/m), 0.0288 × 1.25.
pub const RHO_ALUMINUM: f64 = 0.036;

/// Per-length reactance X (Ω/m). Fixed default of 0.08 mΩ/m; negligible
/// below 50 mm² but applied uniformly.
pub const REACTANCE_PER_M: f64 = 0.000_08;

/// Phase coefficient b for single-phase circuits (out and return conductor).
pub const PHASE_COEFF_SINGLE: f64 = 2.0;

/// Phase coefficient b for balanced three-phase circuits.
pub const PHASE_COEFF_THREE: f64 = 1.0;

/// Nominal phase-to-neutral voltage for single-phase circuits (V).
pub const NOMINAL_V_SINGLE: f64 = 230.0;

/// Nominal phase-to-phase voltage for three-phase circuits (V).
pub const NOMINAL_V_THREE: f64 = 400.0;

/// Relative-drop limit for lighting circuits (%), inclusive.
pub const LIMIT_LIGHTING_PCT: f64 = 3.0;

/// Relative-drop limit for all other uses (%), inclusive.
pub const LIMIT_OTHER_PCT: f64 = 5.0;

/// Standard conductor cross-sections (mm²) offered by the input surfaces.
///
/// A UI convenience only: any positive area is accepted by the calculator.
pub const STANDARD_SECTIONS_MM2: &[f64] = &[
    1.5, 2.5, 4.0, 6.0, 10.0, 16.0, 25.0, 35.0, 50.0, 70.0, 95.0,
];

/// Whether `area_mm2` is one of the catalog sections.
pub fn is_standard_section(area_mm2: f64) -> bool {
    STANDARD_SECTIONS_MM2
        .iter()
        .any(|s| (s - area_mm2).abs() < 1e-9)
}
