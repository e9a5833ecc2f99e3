//! Crate-wide error taxonomy.

use thiserror::Error;

use crate::config::ConfigError;

/// Top-level error type for the crate.
///
/// Invalid input is a deterministic rejection, never a transient fault;
/// there are no retry semantics anywhere in the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// A circuit input field violates its domain constraint. Carries the
    /// offending field name so callers can point at the exact control.
    #[error("invalid input: {field} — {reason}")]
    InvalidInput {
        /// Name of the offending field (e.g. `"area_mm2"`).
        field: &'static str,
        /// Human-readable constraint description.
        reason: String,
    },

    /// A decorative asset (logo banner) could not be loaded. Always
    /// recovered locally with a text fallback; never reaches the caller
    /// of the rendering entry points.
    #[error("asset unavailable: {path} — {source}")]
    AssetUnavailable {
        /// Path of the asset that failed to load.
        path: String,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file or batch file problem.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl Error {
    /// Shorthand for an [`Error::InvalidInput`] with a formatted reason.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_display_names_field() {
        let e = Error::invalid("area_mm2", "must be > 0");
        let msg = e.to_string();
        assert!(msg.contains("area_mm2"));
        assert!(msg.contains("must be > 0"));
    }
}
