//! Voltage drop calculator for low-voltage circuits per NF C 15-100.

#[cfg(feature = "api")]
pub mod api;
pub mod batch;
/// Core computation: constants, input model, formula, compliance.
pub mod calc;
pub mod config;
pub mod error;
pub mod io;
pub mod report;
