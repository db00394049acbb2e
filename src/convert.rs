//! Attribute conversion module.
//!
//! Converts raw character attributes into the fixed-point scalars the
//! damage formulas consume. Every conversion truncates at the same points
//! the game does; none of them are algebraically simplified.
//!
//! The free functions in this module use the level 90 Dancer constants.
//! [`Converter`] exposes the same conversions for any level/job row.
//!
//! No conversion validates its input. Attributes below their baseline
//! produce values below the neutral multiplier (or negative rates).

use crate::attribute::Attribute;
use crate::job::{JobProfile, LevelModifiers};
use crate::numeric::trunc_div;

/// Attribute converter bound to one level and one weapon damage bonus.
///
/// Build it from [`Converter::DANCER_90`] or [`Converter::for_profile`],
/// which only accepts levels with a [`LevelModifiers`] row.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::Converter;
///
/// let converter = Converter::DANCER_90;
/// assert_eq!(converter.attack_power(2000), 905);
/// assert_eq!(converter.determination_multiplier(1600), 1089);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Converter {
    pub level: LevelModifiers,
    pub weapon_damage_bonus: i64,
}

impl Converter {
    /// Level 90 Dancer converter.
    pub const DANCER_90: Converter = Converter {
        level: LevelModifiers::LEVEL_90,
        weapon_damage_bonus: JobProfile::DANCER_90.weapon_damage_bonus,
    };

    /// Create a converter from a level row and a weapon damage bonus.
    pub fn new(level: LevelModifiers, weapon_damage_bonus: i64) -> Self {
        Self {
            level,
            weapon_damage_bonus,
        }
    }

    /// Build a converter for a job profile, if its level is supported.
    pub fn for_profile(profile: &JobProfile) -> Option<Self> {
        LevelModifiers::for_level(profile.level)
            .map(|level| Self::new(level, profile.weapon_damage_bonus))
    }

    /// Sub attribute points above baseline, scaled by `coefficient / div`.
    fn sub_scaled(&self, coefficient: i64, value: i64) -> i64 {
        trunc_div(coefficient * (value - self.level.sub), self.level.div)
    }

    /// Effective weapon damage: `wd + weapon_damage_bonus`.
    pub fn weapon_damage(&self, wd: i64) -> i64 {
        wd + self.weapon_damage_bonus
    }

    /// Attack power: `100 + ⌊(dex - main) × attack_power / main⌋`.
    pub fn attack_power(&self, dex: i64) -> i64 {
        100 + trunc_div((dex - self.level.main) * self.level.attack_power, self.level.main)
    }

    /// Determination multiplier in permille: `⌊140 × (det - main) / div⌋ + 1000`.
    pub fn determination_multiplier(&self, det: i64) -> i64 {
        trunc_div(140 * (det - self.level.main), self.level.div) + 1000
    }

    /// Critical hit damage multiplier in permille: `⌊200 × (crit - sub) / div⌋ + 1400`.
    pub fn critical_multiplier_base(&self, crit: i64) -> i64 {
        self.sub_scaled(200, crit) + 1400
    }

    /// Skill speed multiplier in permille: `⌊130 × (sks - sub) / div⌋ + 1000`.
    pub fn skill_speed_multiplier(&self, sks: i64) -> i64 {
        self.sub_scaled(130, sks) + 1000
    }

    /// Critical hit probability: `0.50 + ⌊200 × (crit - sub) / div⌋ / 1000`.
    pub fn critical_hit_rate(&self, crit: i64) -> f64 {
        0.50 + self.sub_scaled(200, crit) as f64 / 1000.0
    }

    /// Direct hit probability: `⌊550 × (dh - sub) / div⌋ / 1000`.
    pub fn direct_hit_rate(&self, dh: i64) -> f64 {
        self.sub_scaled(550, dh) as f64 / 1000.0
    }

    /// Critical hit damage multiplier as a factor:
    /// `(1000 + ⌊200 × (crit - sub) / div⌋ + 400) / 1000`.
    pub fn critical_damage_multiplier(&self, crit: i64) -> f64 {
        (1000 + self.sub_scaled(200, crit) + 400) as f64 / 1000.0
    }

    /// Recast time in seconds for an action with a `base_ms` recast.
    ///
    /// Truncates to milliseconds, then to the game's 10 ms display
    /// precision. The steps must stay in this order:
    ///
    /// ```text
    /// ⌊⌊10000 × ⌊base_ms × (1000 - ⌊130 × (sks - sub) / div⌋) / 1000⌋ / 1000⌋ / 100⌋ / 100
    /// ```
    pub fn recast_time_with_base(&self, base_ms: i64, sks: i64) -> f64 {
        let speed = 1000 - self.sub_scaled(130, sks);
        let ms = trunc_div(base_ms * speed, 1000);
        let scaled = trunc_div(10000 * ms, 1000);
        trunc_div(scaled, 100) as f64 / 100.0
    }

    /// Recast time in seconds for a 2.5 s base recast.
    pub fn recast_time(&self, sks: i64) -> f64 {
        self.recast_time_with_base(2500, sks)
    }

    /// Convert a raw attribute into its fixed-point scalar.
    ///
    /// | Attribute | Result |
    /// |---|---|
    /// | `WeaponDamage` | effective weapon damage |
    /// | `Dexterity` | attack power |
    /// | `Determination` | damage multiplier, permille |
    /// | `Critical` | critical *damage* multiplier, permille (not the rate) |
    /// | `DirectHit` | direct hit *rate*, permille |
    /// | `SkillSpeed` | speed multiplier, permille |
    ///
    /// Direct hits always deal 125%, so only their rate depends on the
    /// attribute.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::convert::Converter;
    /// use xivcalc::Attribute;
    ///
    /// let converter = Converter::DANCER_90;
    /// assert_eq!(converter.convert(Attribute::WeaponDamage, 100), 144);
    /// assert_eq!(converter.convert(Attribute::Critical, 2000), 1568);
    /// assert_eq!(converter.convert(Attribute::DirectHit, 1000), 173);
    /// ```
    pub fn convert(&self, attribute: Attribute, raw: i64) -> i64 {
        match attribute {
            Attribute::WeaponDamage => self.weapon_damage(raw),
            Attribute::Dexterity => self.attack_power(raw),
            Attribute::Critical => self.critical_multiplier_base(raw),
            Attribute::Determination => self.determination_multiplier(raw),
            Attribute::DirectHit => self.sub_scaled(550, raw),
            Attribute::SkillSpeed => self.skill_speed_multiplier(raw),
        }
    }
}

/// Effective weapon damage for a level 90 Dancer: `wd + 44`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::weapon_damage;
///
/// assert_eq!(weapon_damage(100), 144);
/// ```
pub fn weapon_damage(wd: i64) -> i64 {
    Converter::DANCER_90.weapon_damage(wd)
}

/// Attack power at level 90: `100 + ⌊(dex - 390) × 195 / 390⌋`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::attack_power;
///
/// assert_eq!(attack_power(390), 100);
/// assert_eq!(attack_power(2000), 905);
/// ```
pub fn attack_power(dex: i64) -> i64 {
    Converter::DANCER_90.attack_power(dex)
}

/// Determination multiplier in permille at level 90:
/// `⌊140 × (det - 390) / 1900⌋ + 1000`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::determination_multiplier;
///
/// assert_eq!(determination_multiplier(1600), 1089);
/// ```
pub fn determination_multiplier(det: i64) -> i64 {
    Converter::DANCER_90.determination_multiplier(det)
}

/// Critical hit damage multiplier in permille at level 90:
/// `⌊200 × (crit - 400) / 1900⌋ + 1400`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::critical_multiplier_base;
///
/// assert_eq!(critical_multiplier_base(2000), 1568);
/// ```
pub fn critical_multiplier_base(crit: i64) -> i64 {
    Converter::DANCER_90.critical_multiplier_base(crit)
}

/// Skill speed multiplier in permille at level 90:
/// `⌊130 × (sks - 400) / 1900⌋ + 1000`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::skill_speed_multiplier;
///
/// assert_eq!(skill_speed_multiplier(1000), 1041);
/// ```
pub fn skill_speed_multiplier(sks: i64) -> i64 {
    Converter::DANCER_90.skill_speed_multiplier(sks)
}

/// Critical hit probability at level 90:
/// `0.50 + ⌊200 × (crit - 400) / 1900⌋ / 1000`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::critical_hit_rate;
///
/// assert_eq!(critical_hit_rate(2000), 0.668);
/// ```
pub fn critical_hit_rate(crit: i64) -> f64 {
    Converter::DANCER_90.critical_hit_rate(crit)
}

/// Direct hit probability at level 90: `⌊550 × (dh - 400) / 1900⌋ / 1000`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::direct_hit_rate;
///
/// assert_eq!(direct_hit_rate(1000), 0.173);
/// ```
pub fn direct_hit_rate(dh: i64) -> f64 {
    Converter::DANCER_90.direct_hit_rate(dh)
}

/// Critical hit damage multiplier as a factor at level 90:
/// `(1000 + ⌊200 × (crit - 400) / 1900⌋ + 400) / 1000`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::critical_damage_multiplier;
///
/// assert_eq!(critical_damage_multiplier(2000), 1.568);
/// ```
pub fn critical_damage_multiplier(crit: i64) -> f64 {
    Converter::DANCER_90.critical_damage_multiplier(crit)
}

/// Global cooldown in seconds for a 2.5 s base recast.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::recast_time;
///
/// assert_eq!(recast_time(400), 2.5);
/// assert_eq!(recast_time(1000), 2.39);
/// ```
pub fn recast_time(sks: i64) -> f64 {
    Converter::DANCER_90.recast_time(sks)
}

/// Recast time in seconds for an action with a `base_ms` recast.
///
/// See [`Converter::recast_time_with_base`] for the truncation chain.
///
/// # Examples
///
/// ```rust
/// use xivcalc::convert::recast_time_with_base;
///
/// assert_eq!(recast_time_with_base(1500, 1000), 1.43);
/// ```
pub fn recast_time_with_base(base_ms: i64, sks: i64) -> f64 {
    Converter::DANCER_90.recast_time_with_base(base_ms, sks)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_values() {
        assert_eq!(attack_power(390), 100);
        assert_eq!(determination_multiplier(390), 1000);
        assert_eq!(critical_multiplier_base(400), 1400);
        assert_eq!(skill_speed_multiplier(400), 1000);
        assert_eq!(critical_hit_rate(400), 0.5);
        assert_eq!(direct_hit_rate(400), 0.0);
        assert_eq!(critical_damage_multiplier(400), 1.4);
    }

    #[test]
    fn test_reference_build() {
        assert_eq!(weapon_damage(100), 144);
        assert_eq!(attack_power(2000), 905);
        assert_eq!(determination_multiplier(1600), 1089);
        assert_eq!(critical_multiplier_base(2000), 1568);
        assert_eq!(critical_hit_rate(2000), 0.668);
        assert_eq!(direct_hit_rate(1000), 0.173);
        assert_eq!(critical_damage_multiplier(2000), 1.568);
    }

    #[test]
    fn test_second_build() {
        assert_eq!(attack_power(2560), 1185);
        assert_eq!(determination_multiplier(1800), 1103);
        assert_eq!(critical_multiplier_base(2300), 1600);
        assert_eq!(critical_hit_rate(2300), 0.7);
        assert_eq!(direct_hit_rate(1400), 0.289);
    }

    #[test]
    fn test_critical_multiplier_matches_damage_multiplier() {
        for crit in (400..4000).step_by(37) {
            let permille = critical_multiplier_base(crit);
            assert_eq!(permille as f64 / 1000.0, critical_damage_multiplier(crit));
        }
    }

    #[test]
    fn test_below_baseline_truncates_toward_zero() {
        // 140 * -290 / 1900 = -21.37
        assert_eq!(determination_multiplier(100), 979);
        assert!(direct_hit_rate(0) < 0.0);
    }

    #[test]
    fn test_recast_time_table() {
        assert_eq!(recast_time(400), 2.5);
        assert_eq!(recast_time(500), 2.48);
        assert_eq!(recast_time(800), 2.43);
        assert_eq!(recast_time(1200), 2.36);
        assert_eq!(recast_time(2000), 2.22);
        assert_eq!(recast_time(2500), 2.14);
    }

    #[test]
    fn test_recast_time_diverges_from_untruncated() {
        let naive = |sks: i64| 2.5 * (1000.0 - 130.0 * (sks - 400) as f64 / 1900.0) / 1000.0;
        assert_eq!(recast_time(400), naive(400));
        assert_ne!(recast_time(500), naive(500));
        assert!((naive(500) - 2.4828947).abs() < 1e-6);
        assert_eq!(recast_time(500), 2.48);
    }

    #[test]
    fn test_recast_time_other_bases() {
        assert_eq!(recast_time_with_base(2500, 1000), recast_time(1000));
        assert_eq!(recast_time_with_base(1500, 400), 1.5);
        // 1500 * 959 / 1000 = 1438
        assert_eq!(recast_time_with_base(1500, 1000), 1.43);
    }

    #[test]
    fn test_conversions_are_repeatable() {
        for attr in Attribute::ALL {
            let first = Converter::DANCER_90.convert(attr, 1777);
            let second = Converter::DANCER_90.convert(attr, 1777);
            assert_eq!(first, second);
        }
        assert_eq!(recast_time(1333), recast_time(1333));
    }

    #[test]
    fn test_convert_critical_is_damage_and_direct_hit_is_rate() {
        let converter = Converter::DANCER_90;
        for raw in [400, 1234, 2000, 3100] {
            assert_eq!(
                converter.convert(Attribute::Critical, raw),
                converter.critical_multiplier_base(raw)
            );
            assert_eq!(
                converter.convert(Attribute::DirectHit, raw) as f64 / 1000.0,
                converter.direct_hit_rate(raw)
            );
        }
    }

    #[test]
    fn test_converter_for_profile() {
        let converter = Converter::for_profile(&JobProfile::DANCER_90).unwrap();
        assert_eq!(converter, Converter::DANCER_90);

        let mut profile = JobProfile::DANCER_90;
        profile.level = 50;
        assert!(Converter::for_profile(&profile).is_none());
    }
}
