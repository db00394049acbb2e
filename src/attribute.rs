//! Attribute identifier module.
//!
//! Provides the `Attribute` type, which names each raw character
//! attribute the converter understands. Attributes are written and
//! parsed using their short in-game abbreviations.

use crate::error::CalcError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// A raw character attribute consumed by the attribute converter.
///
/// # Examples
///
/// ```rust
/// use xivcalc::Attribute;
///
/// let crit: Attribute = "crit".parse().unwrap();
/// assert_eq!(crit, Attribute::Critical);
/// assert_eq!(crit.to_string(), "crit");
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Attribute {
    WeaponDamage,
    Dexterity,
    Critical,
    Determination,
    DirectHit,
    SkillSpeed,
}

impl Attribute {
    /// Every attribute, in character-sheet order.
    pub const ALL: [Attribute; 6] = [
        Attribute::WeaponDamage,
        Attribute::Dexterity,
        Attribute::Critical,
        Attribute::Determination,
        Attribute::DirectHit,
        Attribute::SkillSpeed,
    ];

    /// Short abbreviation used in display and serialized form.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use xivcalc::Attribute;
    ///
    /// assert_eq!(Attribute::SkillSpeed.as_str(), "sks");
    /// ```
    pub fn as_str(self) -> &'static str {
        match self {
            Attribute::WeaponDamage => "wd",
            Attribute::Dexterity => "dex",
            Attribute::Critical => "crit",
            Attribute::Determination => "det",
            Attribute::DirectHit => "dh",
            Attribute::SkillSpeed => "sks",
        }
    }
}

impl FromStr for Attribute {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Attribute::ALL
            .into_iter()
            .find(|attr| attr.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalcError::UnknownAttribute(s.to_string()))
    }
}

impl Serialize for Attribute {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Attribute {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for Attribute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
