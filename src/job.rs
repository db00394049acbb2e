//! Job and level constants.
//!
//! The damage formulas depend on a handful of constants that vary by
//! character level (attribute baselines and divisors) and by job
//! (weapon damage bonus, trait multiplier). They are kept here as data
//! so the formulas never inline them.

use crate::error::CalcError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A combat job.
///
/// Only jobs with a row in a [`JobTable`] can be used by the engine.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Job {
    #[serde(rename = "DNC")]
    Dancer,
    #[serde(rename = "BRD")]
    Bard,
    #[serde(rename = "MCH")]
    Machinist,
}

impl Job {
    /// Three-letter abbreviation.
    pub fn abbreviation(self) -> &'static str {
        match self {
            Job::Dancer => "DNC",
            Job::Bard => "BRD",
            Job::Machinist => "MCH",
        }
    }
}

impl std::fmt::Display for Job {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Per-level attribute baselines and divisors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelModifiers {
    pub level: u8,
    /// Main attribute baseline subtracted before scaling.
    pub main: i64,
    /// Sub attribute baseline subtracted before scaling.
    pub sub: i64,
    /// Divisor shared by all sub attribute conversions.
    pub div: i64,
    /// Attack power gained per `main` points over the baseline.
    pub attack_power: i64,
}

impl LevelModifiers {
    /// Level 90 baselines.
    pub const LEVEL_90: LevelModifiers = LevelModifiers {
        level: 90,
        main: 390,
        sub: 400,
        div: 1900,
        attack_power: 195,
    };

    /// Look up the modifiers for a character level.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::LevelModifiers;
    ///
    /// assert_eq!(LevelModifiers::for_level(90).unwrap().div, 1900);
    /// assert!(LevelModifiers::for_level(70).is_none());
    /// ```
    pub fn for_level(level: u8) -> Option<LevelModifiers> {
        match level {
            90 => Some(Self::LEVEL_90),
            _ => None,
        }
    }
}

/// Job-specific damage constants at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JobProfile {
    pub job: Job,
    pub level: u8,
    /// Flat amount added to weapon damage.
    ///
    /// Stands in for `main * job_attribute_modifier / 1000`.
    pub weapon_damage_bonus: i64,
    /// Multiplier from passive damage traits.
    pub trait_bonus: f64,
}

impl JobProfile {
    /// Level 90 Dancer: `+44` weapon damage, `1.3` trait multiplier.
    pub const DANCER_90: JobProfile = JobProfile {
        job: Job::Dancer,
        level: 90,
        weapon_damage_bonus: 44,
        trait_bonus: 1.3,
    };
}

/// Table of job profiles keyed by `(job, level)`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::{Job, JobTable};
///
/// let table = JobTable::default();
/// let dancer = table.get(Job::Dancer, 90).unwrap();
/// assert_eq!(dancer.weapon_damage_bonus, 44);
/// assert!(table.get(Job::Bard, 90).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct JobTable {
    profiles: HashMap<(Job, u8), JobProfile>,
}

impl Default for JobTable {
    fn default() -> Self {
        let mut table = Self::empty();
        table.insert(JobProfile::DANCER_90);
        table
    }
}

impl JobTable {
    /// Create a table with no rows.
    pub fn empty() -> Self {
        Self {
            profiles: HashMap::new(),
        }
    }

    /// Build the default table and merge rows from a JSON array of profiles.
    ///
    /// Rows in the document replace default rows with the same key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::{Job, JobTable};
    ///
    /// let json = r#"[{"job": "BRD", "level": 90, "weapon_damage_bonus": 44, "trait_bonus": 1.2}]"#;
    /// let table = JobTable::from_json(json).unwrap();
    /// assert_eq!(table.get(Job::Bard, 90).unwrap().trait_bonus, 1.2);
    /// assert!(table.get(Job::Dancer, 90).is_ok());
    /// ```
    pub fn from_json(json: &str) -> Result<Self, CalcError> {
        let mut table = Self::default();
        table.extend_from_json(json)?;
        Ok(table)
    }

    /// Merge rows from a JSON array of profiles into this table.
    ///
    /// Every row is checked before any is inserted, so a rejected
    /// document leaves the table unchanged.
    pub fn extend_from_json(&mut self, json: &str) -> Result<(), CalcError> {
        let rows: Vec<JobProfile> = serde_json::from_str(json)?;
        if let Some(row) = rows
            .iter()
            .find(|row| LevelModifiers::for_level(row.level).is_none())
        {
            return Err(CalcError::UnknownProfile {
                job: row.job,
                level: row.level,
            });
        }
        for row in rows {
            self.insert(row);
        }
        Ok(())
    }

    /// Insert or replace a profile.
    pub fn insert(&mut self, profile: JobProfile) {
        tracing::debug!(job = %profile.job, level = profile.level, "registering job profile");
        self.profiles.insert((profile.job, profile.level), profile);
    }

    /// Fetch the profile for `job` at `level`.
    pub fn get(&self, job: Job, level: u8) -> Result<&JobProfile, CalcError> {
        self.profiles
            .get(&(job, level))
            .ok_or(CalcError::UnknownProfile { job, level })
    }

    /// Number of registered profiles.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Whether no profile is registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table_has_dancer() {
        let table = JobTable::default();
        assert_eq!(table.len(), 1);
        assert_eq!(*table.get(Job::Dancer, 90).unwrap(), JobProfile::DANCER_90);
    }

    #[test]
    fn test_missing_profile() {
        let table = JobTable::default();
        assert_eq!(
            table.get(Job::Dancer, 80).unwrap_err(),
            CalcError::UnknownProfile {
                job: Job::Dancer,
                level: 80
            }
        );
    }

    #[test]
    fn test_json_replaces_existing_row() {
        let json = r#"[{"job": "DNC", "level": 90, "weapon_damage_bonus": 45, "trait_bonus": 1.3}]"#;
        let table = JobTable::from_json(json).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get(Job::Dancer, 90).unwrap().weapon_damage_bonus, 45);
    }

    #[test]
    fn test_json_rejects_unsupported_level() {
        let json = r#"[{"job": "MCH", "level": 80, "weapon_damage_bonus": 40, "trait_bonus": 1.2}]"#;
        assert!(matches!(
            JobTable::from_json(json),
            Err(CalcError::UnknownProfile { level: 80, .. })
        ));
    }

    #[test]
    fn test_job_serde_abbreviation() {
        assert_eq!(serde_json::to_string(&Job::Machinist).unwrap(), "\"MCH\"");
        assert_eq!(Job::Bard.to_string(), "BRD");
    }
}
