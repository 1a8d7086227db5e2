//! Turn and resource state.
//!
//! `TurnState` holds the current EP and the turn counter. It only
//! changes through [`TurnState::next_turn`], [`TurnState::reset`] and the
//! manual override; each computes the new state in full before committing
//! it.

use crate::config::RulesConfig;
use crate::error::EpError;
use crate::numeric::{EpAmount, EpNumeric};
use serde::{Deserialize, Serialize};

/// Current EP and turn counter for one session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnState {
    current_ep: EpAmount,
    turn_count: u32,
}

/// What happened during one Next Turn.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Turn counter before advancing; its parity decided regen.
    pub turn: u32,
    /// EP restored before paying.
    pub regen: EpAmount,
    /// EP charged.
    pub cost: EpAmount,
    /// Current EP before the turn.
    pub ep_before: EpAmount,
    /// Current EP after the turn.
    pub ep_after: EpAmount,
    /// The cost exceeded the EP available after regen and was cut off at 0.
    pub exhausted: bool,
}

/// Whether a turn restores EP.
///
/// Regen happens on even turn counters, or on every turn when regen is
/// deactivated.
pub fn is_regen_turn(turn_count: u32, deactivated_regen: bool) -> bool {
    deactivated_regen || turn_count % 2 == 0
}

/// EP restored on a regen turn: `round(max_ep * regen_rate)`.
pub fn regen_amount(max_ep: u32, regen_rate: f64) -> EpAmount {
    (f64::from(max_ep) * regen_rate).round()
}

impl TurnState {
    /// State at session start: the configured starting EP (clamped to
    /// `max_ep`) and starting turn.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::config::RulesConfig;
    /// use epstat::TurnState;
    ///
    /// let state = TurnState::start(&RulesConfig::default(), 70);
    /// assert_eq!(state.current_ep(), 70.0);
    /// assert_eq!(state.turn_count(), 1);
    ///
    /// // Endurance 0 caps the starting EP at 20
    /// assert_eq!(TurnState::start(&RulesConfig::default(), 20).current_ep(), 20.0);
    /// ```
    pub fn start(rules: &RulesConfig, max_ep: u32) -> Self {
        Self {
            current_ep: rules.starting_ep.non_negative().min(f64::from(max_ep)),
            turn_count: rules.starting_turn,
        }
    }

    /// Current EP.
    pub fn current_ep(&self) -> EpAmount {
        self.current_ep
    }

    /// Turn counter.
    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    /// EP left if the action were paid now. Negative means unaffordable.
    ///
    /// Display only; nothing is committed.
    pub fn remaining_after(&self, total_cost: EpAmount) -> EpAmount {
        self.current_ep - total_cost
    }

    /// EP this turn would restore.
    pub fn pending_regen(&self, max_ep: u32, deactivated_regen: bool, regen_rate: f64) -> EpAmount {
        if is_regen_turn(self.turn_count, deactivated_regen) {
            regen_amount(max_ep, regen_rate)
        } else {
            0.0
        }
    }

    /// Advance one turn.
    ///
    /// Regen is added first and capped at `max_ep`, then the cost is paid
    /// and the result floored at 0. No debt carries over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::config::RulesConfig;
    /// use epstat::TurnState;
    ///
    /// let rules = RulesConfig::default();
    /// let mut state = TurnState::start(&rules, 70);
    ///
    /// // turn 1 is odd: no regen
    /// let outcome = state.next_turn(70, 4.0, false, rules.regen_rate);
    /// assert_eq!(outcome.regen, 0.0);
    /// assert_eq!(state.current_ep(), 66.0);
    /// assert_eq!(state.turn_count(), 2);
    ///
    /// // turn 2 is even: +7, capped at 70, then -4
    /// state.next_turn(70, 4.0, false, rules.regen_rate);
    /// assert_eq!(state.current_ep(), 66.0);
    /// ```
    pub fn next_turn(
        &mut self,
        max_ep: u32,
        total_cost: EpAmount,
        deactivated_regen: bool,
        regen_rate: f64,
    ) -> TurnOutcome {
        let regen = self.pending_regen(max_ep, deactivated_regen, regen_rate);
        let available = (self.current_ep + regen).min(f64::from(max_ep));
        let cost = total_cost.non_negative();
        let ep_after = (available - cost).non_negative();

        let outcome = TurnOutcome {
            turn: self.turn_count,
            regen,
            cost,
            ep_before: self.current_ep,
            ep_after,
            exhausted: cost > available,
        };

        *self = Self {
            current_ep: ep_after,
            turn_count: self.turn_count.saturating_add(1),
        };

        outcome
    }

    /// Reset to full EP at turn 0.
    pub fn reset(&mut self, max_ep: u32) {
        *self = Self {
            current_ep: f64::from(max_ep),
            turn_count: 0,
        };
    }

    /// Manually set the current EP, clamped to `max_ep`.
    pub fn set_current_ep(&mut self, value: EpAmount, max_ep: u32) -> Result<(), EpError> {
        if !value.is_finite() || value < 0.0 {
            return Err(EpError::InvalidCurrentEp(value));
        }
        self.current_ep = value.min(f64::from(max_ep));
        Ok(())
    }

    /// Bring the current EP back under a new maximum.
    pub fn clamp_to(&mut self, max_ep: u32) {
        self.current_ep = self.current_ep.min(f64::from(max_ep));
    }
}
