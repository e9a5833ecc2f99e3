//! Shared test fixtures for integration tests.

use voltdrop::calc::{Calculator, CircuitInput, ComplianceMode, Material, Phase, Usage};

/// Calculator under the default usage-threshold mode.
pub fn usage_calculator() -> Calculator {
    Calculator::new(ComplianceMode::Usage)
}

/// Calculator under the tiered mode.
pub fn tiered_calculator() -> Calculator {
    Calculator::new(ComplianceMode::Tiered)
}

/// The reference circuit: three-phase copper 2.5 mm², 20 m, 16 A, cos φ 0.8.
pub fn reference_circuit() -> CircuitInput {
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
