//! Error types for validated damage computation.
//!
//! The unchecked conversion and engine functions never fail. These
//! errors are only produced by explicit validation and by the
//! `checked_*` entry points of the engine.

use crate::attribute::Attribute;
use crate::job::Job;
use thiserror::Error;

/// Errors reported by boundary validation and configuration loading.
///
/// # Examples
///
/// ```rust
/// use xivcalc::{Attribute, CalcError};
///
/// let err = CalcError::BelowBaseline {
///     attribute: Attribute::Determination,
///     value: 100,
///     baseline: 390,
/// };
/// assert_eq!(err.to_string(), "det 100 is below its baseline of 390");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CalcError {
    /// A raw attribute is lower than the baseline its conversion subtracts.
    #[error("{attribute} {value} is below its baseline of {baseline}")]
    BelowBaseline {
        attribute: Attribute,
        value: i64,
        baseline: i64,
    },

    /// A rate or rate bonus lies outside `[0, 1]`.
    #[error("{name} of {value} is outside [0, 1]")]
    RateOutOfRange { name: &'static str, value: f64 },

    /// A buff multiplier is negative, NaN or infinite.
    #[error("buff #{index} has invalid multiplier {value}")]
    InvalidBuff { index: usize, value: f64 },

    /// No profile is registered for the job at this level.
    #[error("no profile for {job} at level {level}")]
    UnknownProfile { job: Job, level: u8 },

    /// An attribute name could not be parsed.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::Config(err.to_string())
    }
}
