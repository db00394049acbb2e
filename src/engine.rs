//! Damage engine module.
//!
//! Combines converted attributes, a potency (or the auto-attack
//! constant) and external modifiers into a [`DamageOutcome`].
//!
//! Two formula variants exist:
//!
//! ```text
//! auto-attack: AP × 95 × WD × ⌊DET/1000⌋ / 100 → buffs → crit/dh
//! action:      potency × AP × DET / 100 → auto-type → WD → trait → buffs → crit/dh
//! ```
//!
//! Every arrow truncates toward zero, in exactly this order.

use crate::context::HitContext;
use crate::convert::Converter;
use crate::error::CalcError;
use crate::job::{Job, JobProfile, JobTable, LevelModifiers};
use crate::numeric::{apply_buffs, mul_trunc, scale, trunc_div};
use crate::outcome::DamageOutcome;
use crate::stats::CharacterStats;

/// Potency-equivalent constant of the auto-attack formula.
const AUTO_ATTACK_POTENCY: i64 = 95;

/// Direct hit damage multiplier in permille.
const DIRECT_HIT_MULTIPLIER: i64 = 1250;

/// Damage engine bound to one job profile.
///
/// # Examples
///
/// ```rust
/// use xivcalc::{CharacterStats, DamageEngine, HitContext};
///
/// let stats = CharacterStats {
///     wd: 100, w_delay: 3.44, dex: 2000, crit: 2000,
///     det: 1600, dh: 1000, sks: 400,
/// };
/// let engine = DamageEngine::DANCER_90;
/// let outcome = engine.action(500, &stats, &HitContext::new());
/// assert_eq!(outcome.hit, 9_224_701);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DamageEngine {
    converter: Converter,
    trait_bonus: f64,
}

impl DamageEngine {
    /// Level 90 Dancer engine.
    pub const DANCER_90: DamageEngine = DamageEngine {
        converter: Converter::DANCER_90,
        trait_bonus: JobProfile::DANCER_90.trait_bonus,
    };

    /// Build an engine for a job profile.
    ///
    /// Fails when the profile's level has no [`LevelModifiers`] row.
    pub fn new(profile: &JobProfile) -> Result<Self, CalcError> {
        let converter = Converter::for_profile(profile).ok_or(CalcError::UnknownProfile {
            job: profile.job,
            level: profile.level,
        })?;
        Ok(Self {
            converter,
            trait_bonus: profile.trait_bonus,
        })
    }

    /// Build an engine from a table row.
    pub fn from_table(table: &JobTable, job: Job, level: u8) -> Result<Self, CalcError> {
        Self::new(table.get(job, level)?)
    }

    /// Attribute converter used by this engine.
    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    /// Level row this engine computes against.
    pub fn level(&self) -> &LevelModifiers {
        &self.converter.level
    }

    /// Trait multiplier applied after weapon damage.
    pub fn trait_bonus(&self) -> f64 {
        self.trait_bonus
    }

    /// Auto-attack damage.
    ///
    /// The auto-crit and auto-direct-hit flags of `context` do not apply
    /// to auto-attacks and are ignored.
    pub fn auto_attack(&self, stats: &CharacterStats, context: &HitContext) -> DamageOutcome {
        self.compute_auto_attack(
            stats,
            context.critical_rate_bonus,
            context.direct_hit_rate_bonus,
            &context.buffs,
        )
    }

    /// Damage of an action with the given potency.
    pub fn action(
        &self,
        potency: i64,
        stats: &CharacterStats,
        context: &HitContext,
    ) -> DamageOutcome {
        self.compute_action(
            potency,
            stats,
            context.critical_rate_bonus,
            context.direct_hit_rate_bonus,
            &context.buffs,
            context.auto_crit,
            context.auto_direct_hit,
        )
    }

    /// [`auto_attack`](Self::auto_attack) with stats, context and
    /// resulting rates validated.
    pub fn checked_auto_attack(
        &self,
        stats: &CharacterStats,
        context: &HitContext,
    ) -> Result<DamageOutcome, CalcError> {
        stats.validate(self.level())?;
        context.validate()?;
        let outcome = self.auto_attack(stats, context);
        outcome.validate_rates()?;
        Ok(outcome)
    }

    /// [`action`](Self::action) with stats, context and resulting rates
    /// validated.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::{CalcError, CharacterStats, DamageEngine, HitContext};
    ///
    /// let stats = CharacterStats {
    ///     wd: 100, w_delay: 3.44, dex: 2000, crit: 2000,
    ///     det: 1600, dh: 1000, sks: 400,
    /// };
    /// let context = HitContext::new().with_critical_rate_bonus(0.5);
    /// let result = DamageEngine::DANCER_90.checked_action(500, &stats, &context);
    /// assert!(matches!(result, Err(CalcError::RateOutOfRange { .. })));
    /// ```
    pub fn checked_action(
        &self,
        potency: i64,
        stats: &CharacterStats,
        context: &HitContext,
    ) -> Result<DamageOutcome, CalcError> {
        stats.validate(self.level())?;
        context.validate()?;
        let outcome = self.action(potency, stats, context);
        outcome.validate_rates()?;
        Ok(outcome)
    }

    fn compute_auto_attack(
        &self,
        stats: &CharacterStats,
        critical_rate_bonus: f64,
        direct_hit_rate_bonus: f64,
        buffs: &[f64],
    ) -> DamageOutcome {
        let conv = &self.converter;

        let base = trunc_div(
            conv.attack_power(stats.dex)
                * AUTO_ATTACK_POTENCY
                * conv.weapon_damage(stats.wd)
                * trunc_div(conv.determination_multiplier(stats.det), 1000),
            100,
        );
        tracing::trace!(base, "auto-attack base damage");

        let damage = apply_buffs(base, buffs);
        tracing::trace!(damage, buffs = buffs.len(), "buffs applied");

        self.finish(
            damage,
            stats,
            conv.critical_hit_rate(stats.crit) + critical_rate_bonus,
            conv.direct_hit_rate(stats.dh) + direct_hit_rate_bonus,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn compute_action(
        &self,
        potency: i64,
        stats: &CharacterStats,
        critical_rate_bonus: f64,
        direct_hit_rate_bonus: f64,
        buffs: &[f64],
        auto_crit: bool,
        auto_direct_hit: bool,
    ) -> DamageOutcome {
        let conv = &self.converter;
        let critical_damage = conv.critical_damage_multiplier(stats.crit);

        // Rate bonuses convert into flat damage on guaranteed hits.
        let mut auto_type = 1.0;
        if auto_crit {
            auto_type *= 1.0 + critical_damage * critical_rate_bonus;
        }
        if auto_direct_hit {
            auto_type *= 1.0 + direct_hit_rate_bonus * 0.25;
        }

        let base = trunc_div(
            potency * conv.attack_power(stats.dex) * conv.determination_multiplier(stats.det),
            100,
        );
        tracing::trace!(potency, base, "action base damage");

        let base = mul_trunc(base, auto_type);
        tracing::trace!(base, auto_type, "auto-type multiplier applied");

        let base = mul_trunc(
            trunc_div(base * conv.weapon_damage(stats.wd), 100),
            self.trait_bonus,
        );
        tracing::trace!(base, trait_bonus = self.trait_bonus, "weapon damage and trait applied");

        let damage = apply_buffs(base, buffs);
        tracing::trace!(damage, buffs = buffs.len(), "buffs applied");

        let critical_rate = if auto_crit {
            1.0
        } else {
            conv.critical_hit_rate(stats.crit) + critical_rate_bonus
        };
        let direct_rate = if auto_direct_hit {
            1.0
        } else {
            conv.direct_hit_rate(stats.dh) + direct_hit_rate_bonus
        };

        self.finish(damage, stats, critical_rate, direct_rate)
    }

    /// Derive the critical and direct hit magnitudes from the plain hit.
    fn finish(
        &self,
        hit: i64,
        stats: &CharacterStats,
        critical_rate: f64,
        direct_rate: f64,
    ) -> DamageOutcome {
        let critical_hit = scale(
            hit,
            self.converter.critical_multiplier_base(stats.crit),
            1000,
        );
        let direct_hit = scale(hit, DIRECT_HIT_MULTIPLIER, 1000);
        let critical_direct_hit = scale(critical_hit, DIRECT_HIT_MULTIPLIER, 1000);

        let outcome = DamageOutcome {
            hit,
            critical_hit,
            direct_hit,
            critical_direct_hit,
            critical_rate,
            direct_rate,
        };
        tracing::debug!(?outcome, "damage computed");
        outcome
    }
}

impl Default for DamageEngine {
    fn default() -> Self {
        Self::DANCER_90
    }
}

/// Auto-attack damage for a level 90 Dancer.
///
/// # Examples
///
/// ```rust
/// use xivcalc::{auto_attack_damage, CharacterStats};
///
/// let stats = CharacterStats {
///     wd: 100, w_delay: 3.44, dex: 2000, crit: 2000,
///     det: 1600, dh: 1000, sks: 400,
/// };
/// let outcome = auto_attack_damage(&stats, 0.0, 0.0, &[]);
/// assert_eq!(outcome.hit, 123_804);
/// ```
pub fn auto_attack_damage(
    stats: &CharacterStats,
    critical_rate_bonus: f64,
    direct_hit_rate_bonus: f64,
    buffs: &[f64],
) -> DamageOutcome {
    DamageEngine::DANCER_90.compute_auto_attack(
        stats,
        critical_rate_bonus,
        direct_hit_rate_bonus,
        buffs,
    )
}

/// Damage of an action with `potency` for a level 90 Dancer.
pub fn action_damage(
    potency: i64,
    stats: &CharacterStats,
    critical_rate_bonus: f64,
    direct_hit_rate_bonus: f64,
    buffs: &[f64],
    auto_crit: bool,
    auto_direct_hit: bool,
) -> DamageOutcome {
    DamageEngine::DANCER_90.compute_action(
        potency,
        stats,
        critical_rate_bonus,
        direct_hit_rate_bonus,
        buffs,
        auto_crit,
        auto_direct_hit,
    )
}

/// [`auto_attack_damage`] with boundary validation.
pub fn checked_auto_attack_damage(
    stats: &CharacterStats,
    context: &HitContext,
) -> Result<DamageOutcome, CalcError> {
    DamageEngine::DANCER_90.checked_auto_attack(stats, context)
}

/// [`action_damage`] with boundary validation.
pub fn checked_action_damage(
    potency: i64,
    stats: &CharacterStats,
    context: &HitContext,
) -> Result<DamageOutcome, CalcError> {
    DamageEngine::DANCER_90.checked_action(potency, stats, context)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_stats() -> CharacterStats {
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
    fn test_action_reference_values() {
        let o = action_damage(500, &reference_stats(), 0.0, 0.0, &[], false, false);
        assert_eq!(o.hit, 9_224_701);
        assert_eq!(o.critical_hit, 14_464_331);
        assert_eq!(o.direct_hit, 11_530_876);
        assert_eq!(o.critical_direct_hit, 18_080_413);
        assert_eq!(o.critical_rate, 0.668);
        assert_eq!(o.direct_rate, 0.173);
    }

    #[test]
    fn test_auto_attack_reference_values() {
        let o = auto_attack_damage(&reference_stats(), 0.0, 0.0, &[]);
        assert_eq!(o.hit, 123_804);
        assert_eq!(o.critical_hit, 194_124);
        assert_eq!(o.direct_hit, 154_755);
        assert_eq!(o.critical_direct_hit, 242_655);
    }

    #[test]
    fn test_auto_types_force_rates() {
        let o = action_damage(500, &reference_stats(), 0.1, 0.2, &[], true, true);
        assert_eq!(o.critical_rate, 1.0);
        assert_eq!(o.direct_rate, 1.0);
        assert_eq!(o.hit, 11_204_688);
        assert_eq!(o.critical_direct_hit, 21_961_187);
    }

    #[test]
    fn test_rate_bonuses_add_without_clamping() {
        let o = auto_attack_damage(&reference_stats(), 0.5, 0.9, &[]);
        assert!((o.critical_rate - 1.168).abs() < 1e-12);
        assert!((o.direct_rate - 1.073).abs() < 1e-12);
    }

    #[test]
    fn test_engine_matches_free_functions() {
        let context = HitContext::new()
            .with_critical_rate_bonus(0.1)
            .with_buffs([1.05, 1.1]);
        let via_engine = DamageEngine::default().action(500, &reference_stats(), &context);
        let via_fn = action_damage(500, &reference_stats(), 0.1, 0.0, &[1.05, 1.1], false, false);
        assert_eq!(via_engine, via_fn);
    }

    #[test]
    fn test_engine_from_table() {
        let engine = DamageEngine::from_table(&JobTable::default(), Job::Dancer, 90).unwrap();
        assert_eq!(engine, DamageEngine::DANCER_90);
        assert!(DamageEngine::from_table(&JobTable::default(), Job::Bard, 90).is_err());
    }

    #[test]
    fn test_trait_bonus_from_profile() {
        let profile = JobProfile {
            job: Job::Bard,
            level: 90,
            weapon_damage_bonus: 44,
            trait_bonus: 1.2,
        };
        let engine = DamageEngine::new(&profile).unwrap();
        let bard = engine.action(500, &reference_stats(), &HitContext::new());
        let dancer = DamageEngine::DANCER_90.action(500, &reference_stats(), &HitContext::new());
        assert!(bard.hit < dancer.hit);
    }

    #[test]
    fn test_checked_rejects_low_stats() {
        let mut stats = reference_stats();
        stats.dex = 100;
        let err = checked_action_damage(500, &stats, &HitContext::new()).unwrap_err();
        assert!(matches!(err, CalcError::BelowBaseline { .. }));
    }

    #[test]
    fn test_checked_matches_unchecked_in_range() {
        let context = HitContext::new().with_direct_hit_rate_bonus(0.2);
        let checked = checked_auto_attack_damage(&reference_stats(), &context).unwrap();
        assert_eq!(
            checked,
            auto_attack_damage(&reference_stats(), 0.0, 0.2, &[])
        );
    }
}
