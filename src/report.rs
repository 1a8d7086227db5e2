//! Evaluation reports.
//!
//! An `EpReport` is everything a front end shows after one interaction:
//! capacity, current EP, the cost breakdown, regen, what would remain,
//! and whether the action is affordable.

use crate::breakdown::CostBreakdown;
use crate::numeric::{EpAmount, EpNumeric};
use crate::stat::StatKind;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether the character can pay for the action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sufficiency {
    Sufficient,
    Insufficient,
}

impl Sufficiency {
    /// Classify a remaining-EP value.
    pub fn from_remaining(remaining_ep: EpAmount) -> Self {
        if remaining_ep < 0.0 {
            Sufficiency::Insufficient
        } else {
            Sufficiency::Sufficient
        }
    }

    /// True when the action is affordable.
    pub fn is_sufficient(self) -> bool {
        self == Sufficiency::Sufficient
    }
}

/// Values for a two-bar used/remaining chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageBars {
    /// The total cost, or all of the current EP when it cannot cover it.
    pub used: EpAmount,
    /// Remaining EP, floored at zero.
    pub remaining: EpAmount,
}

impl UsageBars {
    /// Split current EP into used and remaining bars.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::UsageBars;
    ///
    /// let bars = UsageBars::new(70.0, 4.0);
    /// assert_eq!((bars.used, bars.remaining), (4.0, 66.0));
    ///
    /// // An unaffordable action uses everything that is left.
    /// let bars = UsageBars::new(3.0, 4.0);
    /// assert_eq!((bars.used, bars.remaining), (3.0, 0.0));
    /// ```
    pub fn new(current_ep: EpAmount, total_cost: EpAmount) -> Self {
        let remaining_ep = current_ep - total_cost;
        Self {
            used: if remaining_ep >= 0.0 {
                total_cost
            } else {
                current_ep
            },
            remaining: remaining_ep.non_negative(),
        }
    }
}

/// Full output of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EpReport {
    pub endurance: u8,
    pub max_ep: u32,
    pub current_ep: EpAmount,
    pub turn_count: u32,
    pub breakdown: CostBreakdown,
    /// EP the next turn would restore.
    pub regen_amount: EpAmount,
    /// `current_ep - total_cost`; negative when unaffordable.
    pub remaining_ep: EpAmount,
    pub sufficiency: Sufficiency,
    pub usage: UsageBars,
}

impl EpReport {
    /// Total EP cost of the action.
    pub fn total_cost(&self) -> EpAmount {
        self.breakdown.total_cost
    }
}

impl fmt::Display for EpReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max EP (Endurance {}): {}", self.endurance, self.max_ep)?;
        writeln!(
            f,
            "Current EP (Turn {}): {}",
            self.turn_count, self.current_ep
        )?;

        for entry in &self.breakdown.entries {
            write!(f, "{} Cost (Inactive: {}", entry.stat, !entry.active)?;
            if entry.stat.supports_upkeep() {
                write!(f, ", Upkeep: {}", entry.upkeep)?;
            }
            writeln!(f, "): {}", entry.cost)?;
        }

        writeln!(
            f,
            "{} Cost: {}",
            StatKind::BuffDebuff,
            self.breakdown.buff_debuff_cost
        )?;
        writeln!(f, "Control Reduction: {}", self.breakdown.control_reduction)?;
        writeln!(f, "Extra Costs: {}", self.breakdown.extra_costs)?;
        writeln!(f, "Total EP Cost: {}", self.breakdown.total_cost)?;
        writeln!(f, "Regen this turn: {}", self.regen_amount)?;
        writeln!(f, "Remaining EP After Action: {}", self.remaining_ep)?;
        writeln!(f, "Mobility Value: {}", self.breakdown.mobility_value)?;

        match self.sufficiency {
            Sufficiency::Sufficient => write!(f, "EP is sufficient for this action."),
            Sufficiency::Insufficient => write!(f, "Not enough EP for this action!"),
        }
    }
}
