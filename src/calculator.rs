//! EP calculator.
//!
//! Provides `EpCalculator`, the entry point that runs the full cost
//! pipeline for a character sheet:
//!
//! 1. Resolve the Control reduction
//! 2. Cost Power Use 1, Power Use 2, Range and Mobility
//! 3. Resolve the Buff/Debuff surcharge
//! 4. Aggregate into the total
//!
//! Every call recomputes from the sheet; there is no cache to invalidate.

use crate::aggregate::{aggregate, raw_total};
use crate::breakdown::{CostBreakdown, CostEntry};
use crate::config::{ReductionStage, RulesConfig};
use crate::numeric::{EpAmount, EpNumeric};
use crate::resolver::{
    resolve_buff_debuff, resolve_control_reduction, resolve_max_ep, resolve_mobility_cost,
    resolve_mobility_value, resolve_stat_cost,
};
use crate::sheet::CharacterSheet;
use crate::stat::StatKind;

/// Runs the cost pipeline under a set of rules.
///
/// # Examples
///
/// ```rust
/// use epstat::{CharacterSheet, EpCalculator, StatKind};
///
/// let calculator = EpCalculator::default();
/// let breakdown = calculator.evaluate(&CharacterSheet::default());
///
/// assert_eq!(breakdown.control_reduction, 2.0);
/// assert_eq!(breakdown.cost_of(StatKind::PowerUse1), Some(2.0));
/// assert_eq!(breakdown.cost_of(StatKind::PowerUse2), Some(0.0));
/// assert_eq!(breakdown.cost_of(StatKind::Range), Some(1.0));
/// assert_eq!(breakdown.cost_of(StatKind::Mobility), Some(1.0));
/// assert_eq!(breakdown.total_cost, 4.0);
/// assert_eq!(breakdown.mobility_value, 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EpCalculator {
    rules: RulesConfig,
}

impl EpCalculator {
    /// Create a calculator for the given rules.
    pub fn new(rules: RulesConfig) -> Self {
        Self { rules }
    }

    /// The rules in use.
    pub fn rules(&self) -> &RulesConfig {
        &self.rules
    }

    /// Maximum EP for the sheet's Endurance.
    pub fn max_ep(&self, sheet: &CharacterSheet) -> u32 {
        resolve_max_ep(sheet.endurance)
    }

    /// Evaluate the total cost of the sheet's action.
    pub fn evaluate(&self, sheet: &CharacterSheet) -> CostBreakdown {
        let rules = &self.rules;
        let control_reduction = resolve_control_reduction(sheet.control);

        // Under the aggregate stage stats are costed without the reduction
        let injected = match rules.reduction_stage {
            ReductionStage::PerStat => control_reduction,
            ReductionStage::Aggregate => 0.0,
        };

        let mut breakdown = CostBreakdown {
            control_reduction,
            buff_debuff_cost: resolve_buff_debuff(sheet.buff_debuff),
            extra_costs: sheet.modifiers.extra_costs.non_negative(),
            mobility_value: resolve_mobility_value(sheet.power1.value, control_reduction),
            ..CostBreakdown::default()
        };

        for stat in StatKind::COSTED {
            let Some(input) = sheet.input(stat) else {
                continue;
            };
            let upkeep = sheet.upkeep(stat);
            let cost = match stat {
                StatKind::Mobility => resolve_mobility_cost(input, injected, rules),
                _ => resolve_stat_cost(input, upkeep, injected, rules),
            };
            breakdown.push(CostEntry {
                stat,
                level: input.value.get(),
                active: input.active,
                upkeep: upkeep && input.active,
                cost,
            });
        }

        let stat_costs: Vec<EpAmount> = breakdown.stat_costs();
        breakdown.raw_total = raw_total(
            &stat_costs,
            breakdown.buff_debuff_cost,
            control_reduction,
            breakdown.extra_costs,
            rules,
        );
        breakdown.total_cost = aggregate(
            &stat_costs,
            breakdown.buff_debuff_cost,
            control_reduction,
            breakdown.extra_costs,
            rules,
        );

        tracing::debug!(
            raw_total = breakdown.raw_total,
            total_cost = breakdown.total_cost,
            control_reduction,
            "evaluated EP cost"
        );

        breakdown
    }
}
