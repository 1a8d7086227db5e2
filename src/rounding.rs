//! Rounding and minimum policy.
//!
//! Raw EP values are turned into canonical amounts in two separate steps:
//!
//! 1. [`normalize`] rounds a raw value to a whole or half EP.
//! 2. [`apply_minimum`] enforces the "an action that costs anything costs
//!    at least 1 EP" rule.
//!
//! The steps are kept apart because callers gate the minimum differently:
//! per-stat resolvers gate on their own normalized value, while the total
//! gates on the raw sum before normalization.

use crate::numeric::{EpAmount, EpNumeric};
use serde::{Deserialize, Serialize};

/// Smallest non-zero EP amount an action can cost.
pub const MINIMUM_COST: EpAmount = 1.0;

/// How [`normalize`] treats a raw value whose fraction is exactly `0.5`.
///
/// Quarter fractions always round up to the next half. Any other
/// fraction rounds to the nearest whole EP. An exact half is already a
/// canonical amount, so the default keeps it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfStep {
    /// Leave `x.5` untouched. Keeps [`normalize`] idempotent.
    #[default]
    Keep,
    /// Round `x.5` up to the next whole EP.
    RoundUp,
    /// Round `x.5` to the nearest even whole EP.
    RoundEven,
}

/// Where the per-action minimum of 1 EP is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinimumPolicy {
    /// Every active stat is floored to 1 EP, and the total is floored again.
    #[default]
    PerStat,
    /// Only the total is floored; per-stat costs may be below 1 EP.
    AggregateOnly,
}

/// Normalize a raw EP value.
///
/// - Fraction `0.25` or `0.75`: round up to the next multiple of 0.5.
/// - Fraction `0.5`: handled by `half_step`.
/// - Anything else: round to the nearest whole EP.
///
/// # Examples
///
/// ```rust
/// use epstat::rounding::{normalize, HalfStep};
///
/// assert_eq!(normalize(3.25, HalfStep::Keep), 3.5);
/// assert_eq!(normalize(3.75, HalfStep::Keep), 4.0);
/// assert_eq!(normalize(3.5, HalfStep::Keep), 3.5);
/// assert_eq!(normalize(3.5, HalfStep::RoundUp), 4.0);
/// assert_eq!(normalize(2.5, HalfStep::RoundEven), 2.0);
/// assert_eq!(normalize(3.3, HalfStep::Keep), 3.0);
/// ```
pub fn normalize(raw: EpAmount, half_step: HalfStep) -> EpAmount {
    if raw.is_quarter_step() {
        return (raw * 2.0).ceil() / 2.0;
    }

    if raw.fraction() == 0.5 {
        return match half_step {
            HalfStep::Keep => raw,
            HalfStep::RoundUp => raw.floor() + 1.0,
            HalfStep::RoundEven => raw.round_ties_even(),
        };
    }

    raw.round()
}

/// Enforce the minimum cost.
///
/// If `gate` is positive the result is `value` floored up to
/// [`MINIMUM_COST`], otherwise it is zero.
///
/// # Examples
///
/// ```rust
/// use epstat::rounding::apply_minimum;
///
/// assert_eq!(apply_minimum(0.5, 0.5), 1.0);
/// assert_eq!(apply_minimum(3.5, 3.5), 3.5);
/// // Total gated on its raw sum: 0.2 rounds to 0 but still costs 1.
/// assert_eq!(apply_minimum(0.2, 0.0), 1.0);
/// assert_eq!(apply_minimum(-2.0, 0.0), 0.0);
/// ```
pub fn apply_minimum(gate: EpAmount, value: EpAmount) -> EpAmount {
    if gate > 0.0 {
        value.max(MINIMUM_COST)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quarter_fractions_round_up_to_half() {
        assert_eq!(normalize(0.25, HalfStep::Keep), 0.5);
        assert_eq!(normalize(0.75, HalfStep::Keep), 1.0);
        assert_eq!(normalize(6.25, HalfStep::RoundEven), 6.5);
        assert_eq!(normalize(6.75, HalfStep::RoundUp), 7.0);
    }

    #[test]
    fn test_other_fractions_round_to_nearest() {
        assert_eq!(normalize(2.1, HalfStep::Keep), 2.0);
        assert_eq!(normalize(2.6, HalfStep::Keep), 3.0);
        assert_eq!(normalize(0.4, HalfStep::RoundUp), 0.0);
        assert_eq!(normalize(5.0, HalfStep::RoundEven), 5.0);
    }

    #[test]
    fn test_half_fraction_conventions() {
        assert_eq!(normalize(0.5, HalfStep::Keep), 0.5);
        assert_eq!(normalize(0.5, HalfStep::RoundUp), 1.0);
        assert_eq!(normalize(0.5, HalfStep::RoundEven), 0.0);
        assert_eq!(normalize(1.5, HalfStep::RoundEven), 2.0);
        assert_eq!(normalize(2.5, HalfStep::RoundUp), 3.0);
    }

    #[test]
    fn test_normalize_keep_is_idempotent_on_quarters() {
        for quarters in 0..200 {
            let raw = quarters as f64 * 0.25;
            let once = normalize(raw, HalfStep::Keep);
            assert_eq!(normalize(once, HalfStep::Keep), once, "raw = {raw}");
            assert!(once.is_half_step());
        }
    }

    #[test]
    fn test_negative_quarter_rounds_toward_zero_half() {
        // -0.75 has fraction 0.25, so it takes the ceiling branch
        assert_eq!(normalize(-0.75, HalfStep::Keep), -0.5);
    }

    #[test]
    fn test_minimum_floor() {
        assert_eq!(apply_minimum(0.5, 0.5), 1.0);
        assert_eq!(apply_minimum(1.0, 1.0), 1.0);
        assert_eq!(apply_minimum(0.0, 0.0), 0.0);
        assert_eq!(apply_minimum(-0.5, 3.0), 0.0);
    }

    #[test]
    fn test_policy_defaults() {
        assert_eq!(HalfStep::default(), HalfStep::Keep);
        assert_eq!(MinimumPolicy::default(), MinimumPolicy::PerStat);
    }
}
