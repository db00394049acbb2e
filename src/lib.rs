//! # xivcalc - Deterministic Expected-Damage Calculator
//!
//! Predicts the average damage of a character build without running the
//! game, by reproducing the game's internal fixed-point damage pipeline:
//! - **Exact** truncation at every step the game truncates
//! - **Pure** functions over immutable inputs, safe to call from any thread
//! - **Table-driven** job and level constants
//!
//! ## Pipeline
//!
//! ```text
//! [CharacterStats] → [Converter] → [DamageEngine] → [DamageOutcome] → expected_value
//!                                        ↑
//!                                   [HitContext]
//! ```
//!
//! 1. **Converter** maps raw attributes to fixed-point multipliers and rates
//! 2. **DamageEngine** composes them with a potency and buffs
//! 3. **DamageOutcome** holds the four hit magnitudes and two hit rates
//! 4. **expected_value** reduces an outcome to its mean damage
//!
//! ## Example
//!
//! ```rust
//! use xivcalc::*;
//!
//! let stats = CharacterStats {
//!     wd: 100,
//!     w_delay: 3.44,
//!     dex: 2000,
//!     crit: 2000,
//!     det: 1600,
//!     dh: 1000,
//!     sks: 400,
//! };
//!
//! let outcome = action_damage(500, &stats, 0.0, 0.0, &[], false, false);
//! assert!(outcome.critical_hit >= outcome.hit);
//!
//! let mean = expected_value(&outcome);
//! assert!(mean > outcome.hit as f64);
//! ```
//!
//! ## Modules
//!
//! - [`attribute`] - Attribute identifiers
//! - [`numeric`] - Truncating arithmetic primitives
//! - [`convert`] - Attribute conversions
//! - [`job`] - Job and level constant tables
//! - [`stats`] - Character statistics
//! - [`context`] - Per-hit external modifiers
//! - [`engine`] - Damage formulas
//! - [`outcome`] - Damage outcomes and expectation
//! - [`error`] - Error types

pub mod attribute;
pub mod context;
pub mod convert;
pub mod engine;
pub mod error;
pub mod job;
pub mod numeric;
pub mod outcome;
pub mod stats;

// Re-export main types for convenience
pub use attribute::Attribute;
pub use context::HitContext;
pub use convert::Converter;
pub use engine::{
    action_damage, auto_attack_damage, checked_action_damage, checked_auto_attack_damage,
    DamageEngine,
};
pub use error::CalcError;
pub use job::{Job, JobProfile, JobTable, LevelModifiers};
pub use outcome::{expected_value, DamageOutcome};
pub use stats::CharacterStats;
