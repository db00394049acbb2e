//! Character statistics.

use crate::attribute::Attribute;
use crate::error::CalcError;
use crate::job::LevelModifiers;
use serde::{Deserialize, Serialize};

/// Raw attributes of a character build.
///
/// Equality is structural. Weapon delay is carried for completeness
/// but no formula in this crate reads it.
///
/// # Examples
///
/// ```rust
/// use xivcalc::CharacterStats;
///
/// let stats = CharacterStats {
///     wd: 100,
///     w_delay: 3.44,
///     dex: 2000,
///     crit: 2000,
///     det: 1600,
///     dh: 1000,
///     sks: 400,
/// };
/// assert_eq!(stats.get(xivcalc::Attribute::Critical), 2000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterStats {
    pub wd: i64,
    pub w_delay: f64,
    pub dex: i64,
    pub crit: i64,
    pub det: i64,
    pub dh: i64,
    pub sks: i64,
}

impl CharacterStats {
    /// Raw value of one attribute.
    pub fn get(&self, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::WeaponDamage => self.wd,
            Attribute::Dexterity => self.dex,
            Attribute::Critical => self.crit,
            Attribute::Determination => self.det,
            Attribute::DirectHit => self.dh,
            Attribute::SkillSpeed => self.sks,
        }
    }

    /// Subtracted baseline of an attribute at `level`.
    fn baseline(level: &LevelModifiers, attribute: Attribute) -> i64 {
        match attribute {
            Attribute::WeaponDamage => 0,
            Attribute::Dexterity | Attribute::Determination => level.main,
            Attribute::Critical | Attribute::DirectHit | Attribute::SkillSpeed => level.sub,
        }
    }

    /// Check that no attribute lies below the baseline its conversion
    /// subtracts at `level`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::{CharacterStats, LevelModifiers};
    ///
    /// let stats = CharacterStats {
    ///     wd: 100, w_delay: 3.44, dex: 2000, crit: 2000,
    ///     det: 1600, dh: 1000, sks: 399,
    /// };
    /// assert!(stats.validate(&LevelModifiers::LEVEL_90).is_err());
    /// ```
    pub fn validate(&self, level: &LevelModifiers) -> Result<(), CalcError> {
        for attribute in Attribute::ALL {
            let value = self.get(attribute);
            let baseline = Self::baseline(level, attribute);
            if value < baseline {
                tracing::warn!(%attribute, value, baseline, "attribute below baseline");
                return Err(CalcError::BelowBaseline {
                    attribute,
                    value,
                    baseline,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build() -> CharacterStats {
        CharacterStats {
            wd: 100,
            w_delay: 3.44,
            dex: 2000,
            crit: 2000,
            det: 1600,
            dh: 1000,
            sks: 400,
        }
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(build(), build());
        let mut other = build();
        other.dh += 1;
        assert_ne!(build(), other);
    }

    #[test]
    fn test_validate_accepts_baseline() {
        assert!(build().validate(&LevelModifiers::LEVEL_90).is_ok());
    }

    #[test]
    fn test_validate_reports_first_failure() {
        let mut stats = build();
        stats.det = 389;
        stats.dh = 10;
        assert_eq!(
            stats.validate(&LevelModifiers::LEVEL_90).unwrap_err(),
            CalcError::BelowBaseline {
                attribute: Attribute::Determination,
                value: 389,
                baseline: 390,
            }
        );
    }

    #[test]
    fn test_stats_from_json() {
        let json = r#"{"wd":100,"w_delay":3.44,"dex":2000,"crit":2000,"det":1600,"dh":1000,"sks":400}"#;
        let stats: CharacterStats = serde_json::from_str(json).unwrap();
        assert_eq!(stats, build());
    }
}
