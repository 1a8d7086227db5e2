//! Lookup tables.
//!
//! Fixed mappings from stat level to EP cost, Control reduction,
//! Buff/Debuff surcharge and maximum EP. Lookups take validated levels and
//! cannot go out of bounds.

use crate::numeric::EpAmount;
use crate::stat::{BuffLevel, StatLevel};

/// Base EP cost of an action by stat level.
pub const EP_COST_TABLE: [u32; 14] = [1, 1, 2, 3, 4, 5, 7, 9, 11, 14, 17, 20, 23, 26];

/// Flat EP discount by Control level (`level * 0.5`).
pub const CONTROL_REDUCTION_TABLE: [EpAmount; 14] = [
    0.0, 0.5, 1.0, 1.5, 2.0, 2.5, 3.0, 3.5, 4.0, 4.5, 5.0, 5.5, 6.0, 6.5,
];

/// Flat EP surcharge by Buff/Debuff level (`level * 3`).
pub const BUFF_DEBUFF_TABLE: [u32; 19] = [
    0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30, 33, 36, 39, 42, 45, 48, 51, 54,
];

/// Maximum EP by Endurance level (`20 + level * 10`).
pub const ENDURANCE_TO_MAX_EP: [u32; 14] = [
    20, 30, 40, 50, 60, 70, 80, 90, 100, 110, 120, 130, 140, 150,
];

/// Base EP cost for a level.
pub fn ep_cost(level: StatLevel) -> EpAmount {
    f64::from(EP_COST_TABLE[level.index()])
}

/// Control reduction for a level.
pub fn control_reduction(level: StatLevel) -> EpAmount {
    CONTROL_REDUCTION_TABLE[level.index()]
}

/// Buff/Debuff surcharge for a level.
pub fn buff_debuff(level: BuffLevel) -> EpAmount {
    f64::from(BUFF_DEBUFF_TABLE[level.index()])
}

/// Maximum EP for an Endurance level.
pub fn max_ep(endurance: StatLevel) -> u32 {
    ENDURANCE_TO_MAX_EP[endurance.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_tables_follow_their_formulas() {
        for level in 0..=StatLevel::MAX {
            let i = usize::from(level);
            assert_eq!(CONTROL_REDUCTION_TABLE[i], f64::from(level) * 0.5);
            assert_eq!(ENDURANCE_TO_MAX_EP[i], 20 + u32::from(level) * 10);
        }
        for level in 0..=BuffLevel::MAX {
            assert_eq!(BUFF_DEBUFF_TABLE[usize::from(level)], u32::from(level) * 3);
        }
    }

    #[test]
    fn test_lookups() {
        let level = StatLevel::new(6).unwrap();
        assert_eq!(ep_cost(level), 7.0);
        assert_eq!(control_reduction(level), 3.0);
        assert_eq!(max_ep(level), 80);
        assert_eq!(buff_debuff(BuffLevel::new(18).unwrap()), 54.0);
    }

    #[test]
    fn test_cost_table_is_non_decreasing() {
        assert!(EP_COST_TABLE.windows(2).all(|w| w[0] <= w[1]));
    }
}
