//! Total cost aggregation.

use crate::config::{ReductionStage, RulesConfig};
use crate::numeric::EpAmount;
use crate::rounding::{apply_minimum, normalize};

/// Raw total before normalization.
///
/// Sums the per-stat costs and flat surcharges. The Control reduction is
/// only subtracted here under [`ReductionStage::Aggregate`]; under
/// [`ReductionStage::PerStat`] the stat costs already net it out.
pub fn raw_total(
    stat_costs: &[EpAmount],
    buff_debuff_cost: EpAmount,
    control_reduction: EpAmount,
    extra_costs: EpAmount,
    rules: &RulesConfig,
) -> EpAmount {
    let sum: EpAmount = stat_costs.iter().sum::<EpAmount>() + buff_debuff_cost + extra_costs;
    match rules.reduction_stage {
        ReductionStage::PerStat => sum,
        ReductionStage::Aggregate => sum - control_reduction,
    }
}

/// Total EP cost of an action.
///
/// Normalizes the raw total, then applies the minimum gated on the raw
/// total: any positive raw sum costs at least 1 EP, even one that rounds
/// down to zero.
///
/// # Examples
///
/// ```rust
/// use epstat::aggregate::aggregate;
/// use epstat::config::RulesConfig;
///
/// let rules = RulesConfig::default();
///
/// assert_eq!(aggregate(&[2.0, 0.0, 1.0, 1.0], 0.0, 2.0, 0.0, &rules), 4.0);
/// assert_eq!(aggregate(&[2.0], 0.0, 0.0, 0.25, &rules), 2.5);
/// assert_eq!(aggregate(&[0.0], 0.0, 0.0, 0.2, &rules), 1.0);
/// assert_eq!(aggregate(&[], 0.0, 0.0, 0.0, &rules), 0.0);
/// ```
pub fn aggregate(
    stat_costs: &[EpAmount],
    buff_debuff_cost: EpAmount,
    control_reduction: EpAmount,
    extra_costs: EpAmount,
    rules: &RulesConfig,
) -> EpAmount {
    let raw = raw_total(
        stat_costs,
        buff_debuff_cost,
        control_reduction,
        extra_costs,
        rules,
    );
    apply_minimum(raw, normalize(raw, rules.half_step))
}
