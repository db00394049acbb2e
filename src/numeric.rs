//! Truncating arithmetic primitives.
//!
//! The game engine computes damage in integers and drops the fractional
//! part after every multiplication by a non-integer factor. Every formula
//! in this crate is composed from the helpers below so that truncation
//! happens at exactly one place per step and always toward zero.

/// Integer division truncating toward zero.
///
/// Rust's `/` on signed integers already truncates toward zero; this
/// exists so formulas read the same way the game's tables are written.
///
/// # Examples
///
/// ```rust
/// use xivcalc::numeric::trunc_div;
///
/// assert_eq!(trunc_div(7, 2), 3);
/// assert_eq!(trunc_div(-7, 2), -3);
/// ```
#[inline]
pub const fn trunc_div(numerator: i64, denominator: i64) -> i64 {
    numerator / denominator
}

/// Multiply by `num / den`, truncating once after the division.
///
/// # Examples
///
/// ```rust
/// use xivcalc::numeric::scale;
///
/// // 1250 permille, as used for direct hits
/// assert_eq!(scale(1003, 1250, 1000), 1253);
/// ```
#[inline]
pub const fn scale(value: i64, num: i64, den: i64) -> i64 {
    value * num / den
}

/// Multiply by a real-valued factor and truncate toward zero.
///
/// # Examples
///
/// ```rust
/// use xivcalc::numeric::mul_trunc;
///
/// assert_eq!(mul_trunc(1000, 1.3), 1300);
/// assert_eq!(mul_trunc(999, 1.05), 1048);
/// ```
#[inline]
pub fn mul_trunc(value: i64, factor: f64) -> i64 {
    (value as f64 * factor).trunc() as i64
}

/// Apply multiplicative buffs in order, truncating after each one.
///
/// Because of the per-step truncation the result depends on the order
/// of `buffs`.
///
/// # Examples
///
/// ```rust
/// use xivcalc::numeric::apply_buffs;
///
/// assert_eq!(apply_buffs(1000, &[]), 1000);
/// assert_eq!(apply_buffs(1001, &[1.05, 1.1]), 1156);
/// ```
pub fn apply_buffs(value: i64, buffs: &[f64]) -> i64 {
    buffs.iter().fold(value, |acc, &buff| mul_trunc(acc, buff))
}
