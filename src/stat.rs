//! Stat identifiers, levels and inputs.
//!
//! Levels are validated when they are built, so every lookup further
//! down the pipeline indexes a table with a level that is known to be in
//! range.

use crate::error::EpError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The stats a character sheet tracks.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    Endurance,
    PowerUse1,
    PowerUse2,
    Range,
    Control,
    Mobility,
    BuffDebuff,
}

impl StatKind {
    /// Stats that contribute their own entry to the cost breakdown,
    /// in display order.
    pub const COSTED: [StatKind; 4] = [
        StatKind::PowerUse1,
        StatKind::PowerUse2,
        StatKind::Range,
        StatKind::Mobility,
    ];

    /// Human-readable label.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::StatKind;
    ///
    /// assert_eq!(StatKind::PowerUse1.label(), "Power Use 1");
    /// ```
    pub fn label(self) -> &'static str {
        match self {
            StatKind::Endurance => "Endurance",
            StatKind::PowerUse1 => "Power Use 1",
            StatKind::PowerUse2 => "Power Use 2",
            StatKind::Range => "Range",
            StatKind::Control => "Control",
            StatKind::Mobility => "Mobility",
            StatKind::BuffDebuff => "Buff/Debuff",
        }
    }

    /// Whether upkeep halving may apply to this stat.
    pub fn supports_upkeep(self) -> bool {
        matches!(self, StatKind::PowerUse1 | StatKind::PowerUse2)
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

fn check_level(stat: Option<StatKind>, value: i64, max: u8) -> Result<u8, EpError> {
    if (0..=i64::from(max)).contains(&value) {
        // in 0..=max, which fits in u8
        Ok(value as u8)
    } else {
        Err(match stat {
            Some(stat) => EpError::OutOfRange { stat, value, max },
            None => EpError::LevelOutOfRange { value, max },
        })
    }
}

/// A stat level in `0..=13`.
///
/// # Examples
///
/// ```rust
/// use epstat::{StatKind, StatLevel};
///
/// let level = StatLevel::new(4).unwrap();
/// assert_eq!(level.get(), 4);
///
/// assert!(StatLevel::new(14).is_err());
/// assert!(StatLevel::for_stat(StatKind::Control, -1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StatLevel(u8);

impl StatLevel {
    /// Highest stat level.
    pub const MAX: u8 = 13;

    /// Build a level, rejecting values above [`StatLevel::MAX`].
    pub fn new(value: u8) -> Result<Self, EpError> {
        check_level(None, i64::from(value), Self::MAX).map(Self)
    }

    /// Build a level for a named stat from raw input.
    ///
    /// The error names the stat, which is what an input form wants to show.
    pub fn for_stat(stat: StatKind, value: i64) -> Result<Self, EpError> {
        check_level(Some(stat), value, Self::MAX).map(Self)
    }

    /// Level as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) const fn from_const(value: u8) -> Self {
        assert!(value <= Self::MAX);
        Self(value)
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for StatLevel {
    type Error = EpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StatLevel> for u8 {
    fn from(level: StatLevel) -> Self {
        level.0
    }
}

/// A Buff/Debuff level in `0..=18`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BuffLevel(u8);

impl BuffLevel {
    /// Highest Buff/Debuff level.
    pub const MAX: u8 = 18;

    /// Build a level, rejecting values above [`BuffLevel::MAX`].
    pub fn new(value: u8) -> Result<Self, EpError> {
        check_level(None, i64::from(value), Self::MAX).map(Self)
    }

    /// Build a level from raw input, naming Buff/Debuff in the error.
    pub fn from_input(value: i64) -> Result<Self, EpError> {
        check_level(Some(StatKind::BuffDebuff), value, Self::MAX).map(Self)
    }

    /// Level as an integer.
    pub fn get(self) -> u8 {
        self.0
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.0)
    }
}

impl TryFrom<u8> for BuffLevel {
    type Error = EpError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<BuffLevel> for u8 {
    fn from(level: BuffLevel) -> Self {
        level.0
    }
}

/// One stat as entered: a level plus an active flag.
///
/// An inactive stat contributes nothing: no cost and, for Control, no
/// reduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatInput<L = StatLevel> {
    pub value: L,
    #[serde(default = "active_by_default")]
    pub active: bool,
}

fn active_by_default() -> bool {
    true
}

impl<L> StatInput<L> {
    /// An active stat at the given level.
    pub fn active(value: L) -> Self {
        Self {
            value,
            active: true,
        }
    }

    /// An inactive stat at the given level.
    pub fn inactive(value: L) -> Self {
        Self {
            value,
            active: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_level_bounds() {
        assert!(StatLevel::new(0).is_ok());
        assert!(StatLevel::new(13).is_ok());
        assert_eq!(
            StatLevel::new(14),
            Err(EpError::LevelOutOfRange { value: 14, max: 13 })
        );
    }

    #[test]
    fn test_stat_level_for_stat_names_stat() {
        assert_eq!(
            StatLevel::for_stat(StatKind::Mobility, 20),
            Err(EpError::OutOfRange {
                stat: StatKind::Mobility,
                value: 20,
                max: 13
            })
        );
        assert_eq!(StatLevel::for_stat(StatKind::Mobility, 3).map(StatLevel::get), Ok(3));
    }

    #[test]
    fn test_buff_level_bounds() {
        assert!(BuffLevel::new(18).is_ok());
        assert!(BuffLevel::new(19).is_err());
        assert!(BuffLevel::from_input(-3).is_err());
    }

    #[test]
    fn test_stat_level_deserialize_validates() {
        let ok: StatLevel = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<StatLevel>("14").is_err());
        assert!(serde_json::from_str::<BuffLevel>("18").is_ok());
    }

    #[test]
    fn test_stat_input_active_defaults_to_true() {
        let input: StatInput = serde_json::from_str(r#"{"value": 5}"#).unwrap();
        assert!(input.active);
        assert_eq!(input.value.get(), 5);
    }

    #[test]
    fn test_upkeep_support() {
        assert!(StatKind::PowerUse1.supports_upkeep());
        assert!(StatKind::PowerUse2.supports_upkeep());
        assert!(!StatKind::Range.supports_upkeep());
        assert!(!StatKind::Mobility.supports_upkeep());
        assert!(!StatKind::BuffDebuff.supports_upkeep());
    }
}
