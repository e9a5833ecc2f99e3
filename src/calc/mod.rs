//! Core voltage-drop computation: constants, input model, formula, and
//! compliance classification.

pub mod compliance;
pub mod constants;
pub mod drop;
pub mod input;

pub use compliance::{ComplianceMode, Verdict};
pub use drop::{Calculation, Calculator, ResolvedConstants, VoltageDropResult};
pub use input::{CircuitInput, Material, Phase, Usage};
