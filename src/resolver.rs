//! Per-stat resolvers.
//!
//! Each resolver maps one input to an EP amount. They are pure: the
//! Control reduction is resolved once and injected into the cost
//! resolvers rather than recomputed inside them.
//!
//! ```text
//! Control ──► reduction ──┬──► Power Use 1 / Power Use 2 / Range cost
//!                         ├──► Mobility cost (halved)
//!                         └──► Mobility value (movement, not EP)
//! ```

use crate::config::RulesConfig;
use crate::numeric::{EpAmount, EpNumeric};
use crate::rounding::{apply_minimum, normalize, MinimumPolicy};
use crate::stat::{BuffLevel, StatInput, StatLevel};
use crate::tables;

fn finalize(cost: EpAmount, rules: &RulesConfig) -> EpAmount {
    let normalized = normalize(cost, rules.half_step);
    match rules.minimum {
        MinimumPolicy::PerStat => apply_minimum(normalized, normalized),
        MinimumPolicy::AggregateOnly => normalized.non_negative(),
    }
}

/// EP cost of Power Use 1, Power Use 2 or Range.
///
/// Inactive stats cost nothing and skip rounding entirely. Otherwise the
/// base cost is optionally halved for upkeep, the Control reduction is
/// subtracted (never below zero), and the result is normalized and
/// floored to the minimum.
///
/// # Examples
///
/// ```rust
/// use epstat::config::RulesConfig;
/// use epstat::resolver::resolve_stat_cost;
/// use epstat::{StatInput, StatLevel};
///
/// let rules = RulesConfig::default();
/// let power = StatInput::active(StatLevel::new(4).unwrap());
///
/// assert_eq!(resolve_stat_cost(power, false, 0.0, &rules), 4.0);
/// assert_eq!(resolve_stat_cost(power, true, 0.5, &rules), 1.5);
/// assert_eq!(resolve_stat_cost(StatInput::inactive(power.value), false, 0.0, &rules), 0.0);
/// ```
pub fn resolve_stat_cost(
    input: StatInput,
    apply_upkeep: bool,
    control_reduction: EpAmount,
    rules: &RulesConfig,
) -> EpAmount {
    if !input.active {
        return 0.0;
    }

    let mut cost = tables::ep_cost(input.value);
    if apply_upkeep {
        cost /= 2.0;
    }
    finalize((cost - control_reduction).non_negative(), rules)
}

/// Flat EP discount granted by Control. Zero when inactive.
pub fn resolve_control_reduction(control: StatInput) -> EpAmount {
    if control.active {
        tables::control_reduction(control.value)
    } else {
        0.0
    }
}

/// Flat EP surcharge for a Buff/Debuff level.
///
/// Buff/Debuff is active unless a front end explicitly exposes a toggle
/// and switches it off.
pub fn resolve_buff_debuff(buff: StatInput<BuffLevel>) -> EpAmount {
    if buff.active {
        tables::buff_debuff(buff.value)
    } else {
        0.0
    }
}

/// EP cost of a Mobility action.
///
/// Same pipeline as [`resolve_stat_cost`] without upkeep, except that
/// the reduced base cost is halved before normalization.
///
/// # Examples
///
/// ```rust
/// use epstat::config::RulesConfig;
/// use epstat::resolver::resolve_mobility_cost;
/// use epstat::{StatInput, StatLevel};
///
/// let rules = RulesConfig::default();
/// let mobility = StatInput::active(StatLevel::new(6).unwrap());
///
/// // 7 / 2 = 3.5, an exact half, kept under the default rules
/// assert_eq!(resolve_mobility_cost(mobility, 0.0, &rules), 3.5);
/// // (7 - 0.5) / 2 = 3.25 rounds up to 3.5
/// assert_eq!(resolve_mobility_cost(mobility, 0.5, &rules), 3.5);
/// ```
pub fn resolve_mobility_cost(
    input: StatInput,
    control_reduction: EpAmount,
    rules: &RulesConfig,
) -> EpAmount {
    if !input.active {
        return 0.0;
    }

    let base = (tables::ep_cost(input.value) - control_reduction).non_negative() / 2.0;
    finalize(base, rules)
}

/// Movement distance shown next to the Mobility cost.
///
/// `ceil((power1 - control_reduction) / 2)`, read from Power Use 1's level
/// whatever the active flags say. This is a distance, not an EP cost, and
/// never goes below zero.
pub fn resolve_mobility_value(power1: StatLevel, control_reduction: EpAmount) -> u32 {
    let value = ((f64::from(power1.get()) - control_reduction) / 2.0).ceil();
    // at most ceil(13 / 2) = 7
    value.non_negative() as u32
}

/// Maximum EP for an Endurance level.
pub fn resolve_max_ep(endurance: StatLevel) -> u32 {
    tables::max_ep(endurance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::HalfStep;

    fn level(value: u8) -> StatLevel {
        StatLevel::new(value).unwrap()
    }

    fn active(value: u8) -> StatInput {
        StatInput::active(level(value))
    }

    fn rules_with(half_step: HalfStep) -> RulesConfig {
        RulesConfig {
            half_step,
            ..RulesConfig::default()
        }
    }

    #[test]
    fn test_inactive_stat_costs_nothing() {
        let rules = RulesConfig::default();
        for value in 0..=StatLevel::MAX {
            let input = StatInput::inactive(level(value));
            assert_eq!(resolve_stat_cost(input, false, 0.0, &rules), 0.0);
            assert_eq!(resolve_stat_cost(input, true, 0.0, &rules), 0.0);
            assert_eq!(resolve_mobility_cost(input, 0.0, &rules), 0.0);
        }
    }

    #[test]
    fn test_table_cost_is_identity_without_modifiers() {
        let rules = RulesConfig::default();
        for value in 0..=StatLevel::MAX {
            assert_eq!(
                resolve_stat_cost(active(value), false, 0.0, &rules),
                tables::ep_cost(level(value))
            );
        }
    }

    #[test]
    fn test_reduction_is_subtracted_and_clamped() {
        let rules = RulesConfig::default();
        // 4 - 2 = 2
        assert_eq!(resolve_stat_cost(active(4), false, 2.0, &rules), 2.0);
        // 2 - 2 = 0: nothing left, no floor
        assert_eq!(resolve_stat_cost(active(2), false, 2.0, &rules), 0.0);
        // 2 - 6.5 clamps to 0
        assert_eq!(resolve_stat_cost(active(2), false, 6.5, &rules), 0.0);
    }

    #[test]
    fn test_upkeep_halves_before_reduction() {
        let rules = RulesConfig::default();
        // 5 / 2 = 2.5
        assert_eq!(resolve_stat_cost(active(5), true, 0.0, &rules), 2.5);
        // 5 / 2 - 0.5 = 2
        assert_eq!(resolve_stat_cost(active(5), true, 0.5, &rules), 2.0);
        // 7 / 2 - 1 = 2.5
        assert_eq!(resolve_stat_cost(active(6), true, 1.0, &rules), 2.5);
    }

    #[test]
    fn test_small_positive_cost_is_floored_to_one() {
        let rules = RulesConfig::default();
        // 1 / 2 = 0.5
        assert_eq!(resolve_stat_cost(active(0), true, 0.0, &rules), 1.0);
        // 1 - 0.5 = 0.5
        assert_eq!(resolve_stat_cost(active(1), false, 0.5, &rules), 1.0);
    }

    #[test]
    fn test_half_step_conventions_on_upkeep() {
        assert_eq!(
            resolve_stat_cost(active(5), true, 0.0, &rules_with(HalfStep::RoundUp)),
            3.0
        );
        assert_eq!(
            resolve_stat_cost(active(5), true, 0.0, &rules_with(HalfStep::RoundEven)),
            2.0
        );
    }

    #[test]
    fn test_aggregate_only_minimum_skips_floor() {
        let rules = RulesConfig {
            minimum: MinimumPolicy::AggregateOnly,
            ..RulesConfig::default()
        };
        assert_eq!(resolve_stat_cost(active(1), false, 0.5, &rules), 0.5);
        assert_eq!(resolve_mobility_cost(active(0), 0.0, &rules), 0.5);
    }

    #[test]
    fn test_control_reduction() {
        assert_eq!(resolve_control_reduction(active(4)), 2.0);
        assert_eq!(resolve_control_reduction(active(13)), 6.5);
        assert_eq!(resolve_control_reduction(StatInput::inactive(level(13))), 0.0);
    }

    #[test]
    fn test_buff_debuff() {
        let buff = BuffLevel::new(5).unwrap();
        assert_eq!(resolve_buff_debuff(StatInput::active(buff)), 15.0);
        assert_eq!(resolve_buff_debuff(StatInput::inactive(buff)), 0.0);
    }

    #[test]
    fn test_mobility_cost_level_six() {
        assert_eq!(
            resolve_mobility_cost(active(6), 0.0, &rules_with(HalfStep::Keep)),
            3.5
        );
        assert_eq!(
            resolve_mobility_cost(active(6), 0.0, &rules_with(HalfStep::RoundUp)),
            4.0
        );
        assert_eq!(
            resolve_mobility_cost(active(6), 0.0, &rules_with(HalfStep::RoundEven)),
            4.0
        );
    }

    #[test]
    fn test_mobility_quarter_rounding() {
        let rules = RulesConfig::default();
        // (7 - 1.5) / 2 = 2.75 -> 3
        assert_eq!(resolve_mobility_cost(active(6), 1.5, &rules), 3.0);
        // (1 - 0.5) / 2 = 0.25 -> 0.5 -> floor 1
        assert_eq!(resolve_mobility_cost(active(1), 0.5, &rules), 1.0);
    }

    #[test]
    fn test_mobility_default_sheet_value() {
        // (3 - 2) / 2 = 0.5
        assert_eq!(
            resolve_mobility_cost(active(3), 2.0, &rules_with(HalfStep::Keep)),
            1.0
        );
        assert_eq!(
            resolve_mobility_cost(active(3), 2.0, &rules_with(HalfStep::RoundEven)),
            0.0
        );
    }

    #[test]
    fn test_mobility_fully_reduced() {
        let rules = RulesConfig::default();
        assert_eq!(resolve_mobility_cost(active(2), 6.5, &rules), 0.0);
    }

    #[test]
    fn test_mobility_value() {
        // ceil((4 - 2) / 2) = 1
        assert_eq!(resolve_mobility_value(level(4), 2.0), 1);
        // ceil((7 - 0.5) / 2) = ceil(3.25) = 4
        assert_eq!(resolve_mobility_value(level(7), 0.5), 4);
        assert_eq!(resolve_mobility_value(level(13), 0.0), 7);
        // ceil((0 - 6.5) / 2) would be -3
        assert_eq!(resolve_mobility_value(level(0), 6.5), 0);
    }

    #[test]
    fn test_max_ep() {
        assert_eq!(resolve_max_ep(level(0)), 20);
        assert_eq!(resolve_max_ep(level(5)), 70);
        assert_eq!(resolve_max_ep(level(13)), 150);
    }
}
