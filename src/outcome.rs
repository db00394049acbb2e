//! Damage outcome module.
//!
//! A `DamageOutcome` holds the four possible damage magnitudes of a hit
//! and the probabilities of its critical and direct hit rolls.
//! [`expected_value`] reduces it to the mean damage.

use crate::context::check_rate;
use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// Possible damage of a single hit.
///
/// Built by the damage engine. `critical_hit` and `direct_hit` are never
/// below `hit`, and `critical_direct_hit` is never below either of them,
/// for stats at or above their baselines.
///
/// Rates are not clamped and may leave `[0, 1]` when bonuses or stats
/// are out of range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DamageOutcome {
    pub hit: i64,
    pub critical_hit: i64,
    pub direct_hit: i64,
    pub critical_direct_hit: i64,
    pub critical_rate: f64,
    pub direct_rate: f64,
}

impl DamageOutcome {
    /// Expected damage of this hit. See [`expected_value`].
    pub fn expected(&self) -> f64 {
        expected_value(self)
    }

    /// Check that both rates are probabilities.
    pub fn validate_rates(&self) -> Result<(), CalcError> {
        check_rate("critical rate", self.critical_rate)?;
        check_rate("direct hit rate", self.direct_rate)
    }
}

/// Mean damage over the four hit categories.
///
/// Critical and direct hits are treated as independent events. The
/// result is not rounded even though real hits always deal whole
/// damage.
///
/// # Examples
///
/// ```rust
/// use xivcalc::{expected_value, DamageOutcome};
///
/// let outcome = DamageOutcome {
///     hit: 1000,
///     critical_hit: 1500,
///     direct_hit: 1250,
///     critical_direct_hit: 1875,
///     critical_rate: 0.5,
///     direct_rate: 0.0,
/// };
/// assert_eq!(expected_value(&outcome), 1250.0);
/// ```
pub fn expected_value(outcome: &DamageOutcome) -> f64 {
    let critical_rate = outcome.critical_rate;
    let direct_rate = outcome.direct_rate;
    let joint_rate = critical_rate * direct_rate;
    let normal_rate = 1.0 - critical_rate - direct_rate + joint_rate;

    outcome.hit as f64 * normal_rate
        + outcome.critical_hit as f64 * (critical_rate - joint_rate)
        + outcome.direct_hit as f64 * (direct_rate - joint_rate)
        + outcome.critical_direct_hit as f64 * joint_rate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(critical_rate: f64, direct_rate: f64) -> DamageOutcome {
        DamageOutcome {
            hit: 10_000,
            critical_hit: 15_680,
            direct_hit: 12_500,
            critical_direct_hit: 19_600,
            critical_rate,
            direct_rate,
        }
    }

    #[test]
    fn test_no_rates_is_plain_hit() {
        assert_eq!(expected_value(&outcome(0.0, 0.0)), 10_000.0);
    }

    #[test]
    fn test_guaranteed_crit() {
        assert_eq!(expected_value(&outcome(1.0, 0.0)), 15_680.0);
        assert_eq!(expected_value(&outcome(1.0, 1.0)), 19_600.0);
    }

    #[test]
    fn test_guaranteed_direct_hit() {
        assert_eq!(expected_value(&outcome(0.0, 1.0)), 12_500.0);
    }

    #[test]
    fn test_mixed_rates() {
        // normal 0.4, crit only 0.1, dh only 0.4, both 0.1
        let value = expected_value(&outcome(0.2, 0.5));
        let manual = 10_000.0 * 0.4 + 15_680.0 * 0.1 + 12_500.0 * 0.4 + 19_600.0 * 0.1;
        assert!((value - manual).abs() < 1e-6);
    }

    #[test]
    fn test_out_of_range_rates_are_not_clamped() {
        let skewed = outcome(0.9, 0.9);
        let skewed = DamageOutcome {
            critical_rate: 1.2,
            ..skewed
        };
        // normal rate 1 - 1.2 - 0.9 + 1.08 = -0.02
        let value = expected_value(&skewed);
        assert!(value.is_finite());
        assert!(skewed.validate_rates().is_err());
    }

    #[test]
    fn test_method_matches_function() {
        let o = outcome(0.3, 0.2);
        assert_eq!(o.expected(), expected_value(&o));
        assert!(o.validate_rates().is_ok());
    }
}
