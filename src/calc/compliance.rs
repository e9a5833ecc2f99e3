//! Compliance classification against the NF C 15-100 drop limits.
//!
//! Two distinct policies exist in the field and are not interchangeable:
//!
//! - usage-threshold: pass/fail against the limit for the declared usage
//!   (3% lighting, 5% other);
//! - tiered: three-way classification independent of usage (≤3% fine for
//!   all usages, ≤5% fine for non-lighting only, above 5% out).
//!
//! The deployed mode is an explicit configuration choice, never inferred.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::constants::{LIMIT_LIGHTING_PCT, LIMIT_OTHER_PCT};
use super::input::Usage;

/// Deployment-level choice of classification policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComplianceMode {
    /// Pass/fail against the usage-specific limit.
    Usage,
    /// Three-way tiered classification, usage ignored.
    Tiered,
}

impl fmt::Display for ComplianceMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "usage"),
            Self::Tiered => write!(f, "tiered"),
        }
    }
}

/// Advisory shown whenever a circuit fails classification.
pub const NON_COMPLIANT_ADVICE: &str =
    "increase the conductor cross-section or reduce the cable length";

/// Closed verdict set covering both classification modes.
///
/// Usage mode produces `Compliant` / `NonCompliant`; tiered mode produces
/// `CompliantAllUsages` / `CompliantOtherUsesOnly` / `NonCompliant`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// Within the limit for the declared usage (usage mode).
    Compliant,
    /// Within 3%, acceptable for every usage (tiered mode).
    CompliantAllUsages,
    /// In (3%, 5%], acceptable for non-lighting circuits only (tiered mode).
    CompliantOtherUsesOnly,
    /// Above the applicable limit (both modes).
    NonCompliant,
}

impl Verdict {
    /// Whether the circuit may be put in service as declared.
    pub fn is_compliant(self) -> bool {
        !matches!(self, Self::NonCompliant)
    }

    /// Remediation advice, present exactly when the verdict is non-compliant.
    pub fn advice(self) -> Option<&'static str> {
        match self {
            Self::NonCompliant => Some(NON_COMPLIANT_ADVICE),
            _ => None,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compliant => write!(f, "COMPLIANT"),
            Self::CompliantAllUsages => write!(f, "COMPLIANT (all usages)"),
            Self::CompliantOtherUsesOnly => write!(f, "COMPLIANT (other uses only, not lighting)"),
            Self::NonCompliant => write!(f, "NON-COMPLIANT"),
        }
    }
}

/// Limit (%) applicable to a usage category under the usage mode.
pub fn limit_for_usage(usage: Usage) -> f64 {
    match usage {
        Usage::Lighting => LIMIT_LIGHTING_PCT,
        Usage::Other => LIMIT_OTHER_PCT,
    }
}

/// Classifies a relative drop under the given mode.
///
/// Threshold comparisons are inclusive: a drop of exactly 3.00% passes the
/// lighting limit and the first tier.
pub fn classify(mode: ComplianceMode, drop_pct: f64, usage: Usage) -> Verdict {
    match mode {
        ComplianceMode::Usage => {
            if drop_pct <= limit_for_usage(usage) {
                Verdict::Compliant
            } else {
                Verdict::NonCompliant
            }
        }
        ComplianceMode::Tiered => {
            if drop_pct <= LIMIT_LIGHTING_PCT {
                Verdict::CompliantAllUsages
            } else if drop_pct <= LIMIT_OTHER_PCT {
                Verdict::CompliantOtherUsesOnly
            } else {
                Verdict::NonCompliant
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usage_mode_lighting_boundary_is_inclusive() {
        let v = classify(ComplianceMode::Usage, 3.0, Usage::Lighting);
        assert_eq!(v, Verdict::Compliant);
    }

    #[test]
    fn usage_mode_lighting_above_limit_fails() {
        let v = classify(ComplianceMode::Usage, 3.01, Usage::Lighting);
        assert_eq!(v, Verdict::NonCompliant);
    }

    #[test]
    fn usage_mode_other_allows_up_to_five() {
        assert_eq!(
            classify(ComplianceMode::Usage, 4.5, Usage::Other),
            Verdict::Compliant
        );
        assert_eq!(
            classify(ComplianceMode::Usage, 5.0, Usage::Other),
            Verdict::Compliant
        );
        assert_eq!(
            classify(ComplianceMode::Usage, 5.1, Usage::Other),
            Verdict::NonCompliant
        );
    }

    #[test]
    fn tiered_mode_boundaries_inclusive() {
        assert_eq!(
            classify(ComplianceMode::Tiered, 3.0, Usage::Lighting),
            Verdict::CompliantAllUsages
        );
        assert_eq!(
            classify(ComplianceMode::Tiered, 5.0, Usage::Lighting),
            Verdict::CompliantOtherUsesOnly
        );
        assert_eq!(
            classify(ComplianceMode::Tiered, 5.000001, Usage::Lighting),
            Verdict::NonCompliant
        );
    }

    #[test]
    fn tiered_mode_ignores_usage() {
        let a = classify(ComplianceMode::Tiered, 4.0, Usage::Lighting);
        let b = classify(ComplianceMode::Tiered, 4.0, Usage::Other);
        assert_eq!(a, b);
        assert_eq!(a, Verdict::CompliantOtherUsesOnly);
    }

    #[test]
    fn modes_diverge_between_three_and_five_for_lighting() {
        // The same 4% drop on a lighting circuit fails under usage mode but
        // is only downgraded under tiered mode.
        let usage = classify(ComplianceMode::Usage, 4.0, Usage::Lighting);
        let tiered = classify(ComplianceMode::Tiered, 4.0, Usage::Lighting);
        assert_eq!(usage, Verdict::NonCompliant);
        assert_eq!(tiered, Verdict::CompliantOtherUsesOnly);
    }

    #[test]
    fn advice_present_only_when_non_compliant() {
        assert!(Verdict::NonCompliant.advice().is_some());
        assert!(Verdict::Compliant.advice().is_none());
        assert!(Verdict::CompliantAllUsages.advice().is_none());
        assert!(Verdict::CompliantOtherUsesOnly.advice().is_none());
    }

    #[test]
    fn is_compliant_flags() {
        assert!(Verdict::Compliant.is_compliant());
        assert!(Verdict::CompliantOtherUsesOnly.is_compliant());
        assert!(!Verdict::NonCompliant.is_compliant());
    }
}
