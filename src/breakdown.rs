//! Cost breakdown results.
//!
//! Contains the `CostBreakdown` type, the read-only result of one
//! evaluation with every per-stat contribution kept for display.

use crate::numeric::EpAmount;
use crate::stat::StatKind;
use serde::{Deserialize, Serialize};

/// One costed stat in a breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Which stat this is.
    pub stat: StatKind,
    /// Level the cost was looked up at.
    pub level: u8,
    /// Whether the stat was active.
    pub active: bool,
    /// Whether upkeep halving applied.
    pub upkeep: bool,
    /// Final EP cost of the stat.
    pub cost: EpAmount,
}

/// A fully evaluated cost with its breakdown.
///
/// Rebuilt from scratch on every evaluation; nothing here is cached.
///
/// # Examples
///
/// ```rust
/// use epstat::{CostBreakdown, StatKind};
/// use epstat::breakdown::CostEntry;
///
/// let mut breakdown = CostBreakdown::default();
/// breakdown.push(CostEntry {
///     stat: StatKind::Range,
///     level: 3,
///     active: true,
///     upkeep: false,
///     cost: 3.0,
/// });
///
/// assert_eq!(breakdown.cost_of(StatKind::Range), Some(3.0));
/// assert_eq!(breakdown.cost_of(StatKind::Mobility), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Per-stat costs in display order.
    pub entries: Vec<CostEntry>,
    /// Control reduction in effect.
    pub control_reduction: EpAmount,
    /// Buff/Debuff surcharge.
    pub buff_debuff_cost: EpAmount,
    /// Flat extra costs.
    pub extra_costs: EpAmount,
    /// Sum before normalization and minimum.
    pub raw_total: EpAmount,
    /// Final total EP cost.
    pub total_cost: EpAmount,
    /// Movement distance shown next to Mobility.
    pub mobility_value: u32,
}

impl CostBreakdown {
    /// Append a per-stat entry.
    pub fn push(&mut self, entry: CostEntry) {
        self.entries.push(entry);
    }

    /// Look up the entry for a stat.
    pub fn entry(&self, stat: StatKind) -> Option<&CostEntry> {
        self.entries.iter().find(|e| e.stat == stat)
    }

    /// Final cost of a stat, if it was costed.
    pub fn cost_of(&self, stat: StatKind) -> Option<EpAmount> {
        self.entry(stat).map(|e| e.cost)
    }

    /// The per-stat costs in display order.
    pub fn stat_costs(&self) -> Vec<EpAmount> {
        self.entries.iter().map(|e| e.cost).collect()
    }
}
