//! Rules configuration.
//!
//! The rounding tie-break, where the minimum cost is enforced, where the
//! Control reduction is subtracted, and the session start values are all
//! configurable. Documents may be JSON or TOML; missing fields fall back
//! to [`RulesConfig::default`].

use crate::error::EpError;
use crate::numeric::EpAmount;
use crate::rounding::{HalfStep, MinimumPolicy};
use serde::{Deserialize, Serialize};

/// Where the Control reduction is subtracted.
///
/// The reduction is always subtracted exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReductionStage {
    /// Each costed stat nets out the reduction before rounding.
    #[default]
    PerStat,
    /// Stats are costed without it; it is subtracted once from the raw total.
    Aggregate,
}

/// Rules that shape cost resolution and turn tracking.
///
/// # Examples
///
/// ```rust
/// use epstat::config::{ReductionStage, RulesConfig};
/// use epstat::rounding::HalfStep;
///
/// let rules = RulesConfig::from_toml_str(r#"
///     half_step = "round_up"
///     reduction_stage = "aggregate"
/// "#).unwrap();
///
/// assert_eq!(rules.half_step, HalfStep::RoundUp);
/// assert_eq!(rules.reduction_stage, ReductionStage::Aggregate);
/// assert_eq!(rules.starting_ep, 70.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Tie handling for exact `.5` fractions during normalization.
    pub half_step: HalfStep,
    /// Where the minimum cost of 1 EP is enforced.
    pub minimum: MinimumPolicy,
    /// Where the Control reduction is subtracted.
    pub reduction_stage: ReductionStage,
    /// Current EP when a session starts (clamped to the session's max EP).
    pub starting_ep: EpAmount,
    /// Turn counter when a session starts.
    pub starting_turn: u32,
    /// Fraction of max EP restored on a regen turn.
    pub regen_rate: f64,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            half_step: HalfStep::Keep,
            minimum: MinimumPolicy::PerStat,
            reduction_stage: ReductionStage::PerStat,
            starting_ep: 70.0,
            starting_turn: 1,
            regen_rate: 0.10,
        }
    }
}

impl RulesConfig {
    /// The standard rules: reduction and minimum per stat, halves kept.
    pub fn canonical() -> Self {
        Self::default()
    }

    /// Rules that settle everything on the total.
    ///
    /// Stats are costed without the Control reduction. The reduction is
    /// subtracted once from the raw total, which alone is floored to 1 EP.
    /// Exact halves round to even. The default sheet costs 9 EP here.
    pub fn legacy_totals() -> Self {
        Self {
            half_step: HalfStep::RoundEven,
            minimum: MinimumPolicy::AggregateOnly,
            reduction_stage: ReductionStage::Aggregate,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON rules document.
    pub fn from_json_str(s: &str) -> Result<Self, EpError> {
        let rules: Self =
            serde_json::from_str(s).map_err(|e| EpError::ConfigParse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Parse and validate a TOML rules document.
    pub fn from_toml_str(s: &str) -> Result<Self, EpError> {
        let rules: Self = toml::from_str(s).map_err(|e| EpError::ConfigParse(e.to_string()))?;
        rules.validate()?;
        Ok(rules)
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), EpError> {
        if !(0.0..=1.0).contains(&self.regen_rate) {
            return Err(EpError::InvalidConfig(format!(
                "regen_rate must be within 0..=1, got {}",
                self.regen_rate
            )));
        }
        if !self.starting_ep.is_finite() || self.starting_ep < 0.0 {
            return Err(EpError::InvalidConfig(format!(
                "starting_ep must be finite and non-negative, got {}",
                self.starting_ep
            )));
        }
        Ok(())
    }
}
