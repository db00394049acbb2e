//! Hit context module.
//!
//! The `HitContext` bundles the external modifiers applied to a single
//! hit: rate bonuses granted by party buffs, the ordered list of damage
//! multipliers, and whether the action is a guaranteed critical or
//! direct hit.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};

/// External modifiers for one hit.
///
/// # Examples
///
/// ```rust
/// use xivcalc::HitContext;
///
/// let context = HitContext::new()
///     .with_critical_rate_bonus(0.10)
///     .with_buff(1.05)
///     .with_auto_crit(true);
///
/// assert_eq!(context.buffs, vec![1.05]);
/// assert!(context.auto_crit);
/// assert!(!context.auto_direct_hit);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HitContext {
    pub critical_rate_bonus: f64,
    pub direct_hit_rate_bonus: f64,
    /// Damage multipliers in application order.
    pub buffs: Vec<f64>,
    pub auto_crit: bool,
    pub auto_direct_hit: bool,
}

impl HitContext {
    /// Create a context with no bonuses or buffs.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the critical rate bonus granted by external buffs.
    pub fn with_critical_rate_bonus(mut self, bonus: f64) -> Self {
        self.critical_rate_bonus = bonus;
        self
    }

    /// Set the direct hit rate bonus granted by external buffs.
    pub fn with_direct_hit_rate_bonus(mut self, bonus: f64) -> Self {
        self.direct_hit_rate_bonus = bonus;
        self
    }

    /// Append a damage multiplier after the existing ones.
    pub fn with_buff(mut self, multiplier: f64) -> Self {
        self.buffs.push(multiplier);
        self
    }

    /// Append several damage multipliers, keeping their order.
    pub fn with_buffs(mut self, multipliers: impl IntoIterator<Item = f64>) -> Self {
        self.buffs.extend(multipliers);
        self
    }

    /// Mark the hit as a guaranteed critical hit.
    pub fn with_auto_crit(mut self, auto_crit: bool) -> Self {
        self.auto_crit = auto_crit;
        self
    }

    /// Mark the hit as a guaranteed direct hit.
    pub fn with_auto_direct_hit(mut self, auto_direct_hit: bool) -> Self {
        self.auto_direct_hit = auto_direct_hit;
        self
    }

    /// Check that both rate bonuses lie in `[0, 1]` and every buff is a
    /// finite, non-negative multiplier.
    pub fn validate(&self) -> Result<(), CalcError> {
        check_rate("critical rate bonus", self.critical_rate_bonus)?;
        check_rate("direct hit rate bonus", self.direct_hit_rate_bonus)?;
        for (index, &value) in self.buffs.iter().enumerate() {
            if !value.is_finite() || value < 0.0 {
                tracing::warn!(index, value, "invalid buff multiplier");
                return Err(CalcError::InvalidBuff { index, value });
            }
        }
        Ok(())
    }
}

/// Reject a rate outside `[0, 1]`.
pub(crate) fn check_rate(name: &'static str, value: f64) -> Result<(), CalcError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        tracing::warn!(name, value, "rate out of range");
        Err(CalcError::RateOutOfRange { name, value })
    }
}
