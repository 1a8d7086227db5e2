//! Interactive sessions.
//!
//! A `Session` owns one character sheet and its turn state. Each front-end
//! interaction maps to one call: `evaluate` to redraw, `next_turn`,
//! `reset` or `set_current_ep` to act. `SessionStore` keeps sessions
//! isolated from each other when several users are served.

use crate::calculator::EpCalculator;
use crate::config::RulesConfig;
use crate::error::EpError;
use crate::numeric::EpAmount;
use crate::report::{EpReport, Sufficiency, UsageBars};
use crate::sheet::CharacterSheet;
use crate::turn::{TurnOutcome, TurnState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifier of a session in a [`SessionStore`].
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SessionId(Uuid);

impl SessionId {
    /// A fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One character's calculator session.
///
/// # Examples
///
/// ```rust
/// use epstat::{Session, Sufficiency};
///
/// let mut session = Session::default();
///
/// let report = session.evaluate();
/// assert_eq!(report.max_ep, 70);
/// assert_eq!(report.total_cost(), 4.0);
/// assert_eq!(report.remaining_ep, 66.0);
/// assert_eq!(report.sufficiency, Sufficiency::Sufficient);
///
/// session.next_turn();
/// assert_eq!(session.turn().current_ep(), 66.0);
/// assert_eq!(session.turn().turn_count(), 2);
///
/// session.reset();
/// assert_eq!(session.turn().current_ep(), 70.0);
/// assert_eq!(session.turn().turn_count(), 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    calculator: EpCalculator,
    sheet: CharacterSheet,
    turn: TurnState,
}

impl Default for Session {
    fn default() -> Self {
        Self::start(RulesConfig::default(), CharacterSheet::default())
    }
}

impl Session {
    /// Start a session with the rules' starting EP and turn.
    ///
    /// Both the rules and the sheet are validated first, so a rate or
    /// starting value built by hand goes through the same checks as one
    /// loaded from a rules document.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::{CharacterSheet, EpError, RulesConfig, Session};
    ///
    /// let rules = RulesConfig {
    ///     regen_rate: f64::NAN,
    ///     ..RulesConfig::default()
    /// };
    /// let err = Session::new(rules, CharacterSheet::default()).unwrap_err();
    /// assert!(matches!(err, EpError::InvalidConfig(_)));
    /// ```
    pub fn new(rules: RulesConfig, sheet: CharacterSheet) -> Result<Self, EpError> {
        rules.validate()?;
        sheet.validate()?;
        Ok(Self::start(rules, sheet))
    }

    fn start(rules: RulesConfig, sheet: CharacterSheet) -> Self {
        let calculator = EpCalculator::new(rules);
        let turn = TurnState::start(&rules, calculator.max_ep(&sheet));
        Self {
            calculator,
            sheet,
            turn,
        }
    }

    /// Rules this session was started with.
    pub fn rules(&self) -> &RulesConfig {
        self.calculator.rules()
    }

    /// Current inputs.
    pub fn sheet(&self) -> &CharacterSheet {
        &self.sheet
    }

    /// Current EP and turn counter.
    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    /// Max EP for the current Endurance.
    pub fn max_ep(&self) -> u32 {
        self.calculator.max_ep(&self.sheet)
    }

    /// Replace the inputs, keeping current EP within the new maximum.
    pub fn set_sheet(&mut self, sheet: CharacterSheet) -> Result<(), EpError> {
        sheet.validate()?;
        self.sheet = sheet;
        self.turn.clamp_to(self.max_ep());
        Ok(())
    }

    /// Recompute everything a front end displays.
    pub fn evaluate(&self) -> EpReport {
        let max_ep = self.max_ep();
        let breakdown = self.calculator.evaluate(&self.sheet);
        let total_cost = breakdown.total_cost;
        let current_ep = self.turn.current_ep();
        let remaining_ep = self.turn.remaining_after(total_cost);

        EpReport {
            endurance: self.sheet.endurance.get(),
            max_ep,
            current_ep,
            turn_count: self.turn.turn_count(),
            regen_amount: self.turn.pending_regen(
                max_ep,
                self.sheet.modifiers.deactivated_regen,
                self.rules().regen_rate,
            ),
            remaining_ep,
            sufficiency: Sufficiency::from_remaining(remaining_ep),
            usage: UsageBars::new(current_ep, total_cost),
            breakdown,
        }
    }

    /// Regenerate, pay the current total cost and advance the counter.
    pub fn next_turn(&mut self) -> TurnOutcome {
        let max_ep = self.max_ep();
        let total_cost = self.calculator.evaluate(&self.sheet).total_cost;
        let outcome = self.turn.next_turn(
            max_ep,
            total_cost,
            self.sheet.modifiers.deactivated_regen,
            self.rules().regen_rate,
        );

        if outcome.exhausted {
            tracing::warn!(
                turn = outcome.turn,
                cost = outcome.cost,
                available = outcome.ep_before + outcome.regen,
                "action cost more EP than available"
            );
        }
        tracing::info!(
            turn = outcome.turn,
            regen = outcome.regen,
            cost = outcome.cost,
            ep_after = outcome.ep_after,
            "advanced turn"
        );

        outcome
    }

    /// Back to full EP at turn 0.
    pub fn reset(&mut self) {
        let max_ep = self.max_ep();
        self.turn.reset(max_ep);
        tracing::info!(max_ep, "reset session");
    }

    /// Manual Current EP override, clamped to max EP.
    pub fn set_current_ep(&mut self, value: EpAmount) -> Result<(), EpError> {
        let max_ep = self.max_ep();
        self.turn.set_current_ep(value, max_ep)?;
        tracing::debug!(current_ep = self.turn.current_ep(), "current EP overridden");
        Ok(())
    }
}

/// Sessions keyed by id; each has its own turn state.
///
/// # Examples
///
/// ```rust
/// use epstat::config::RulesConfig;
/// use epstat::{CharacterSheet, SessionStore};
///
/// let mut store = SessionStore::new();
/// let a = store.open(RulesConfig::default(), CharacterSheet::default()).unwrap();
/// let b = store.open(RulesConfig::default(), CharacterSheet::default()).unwrap();
///
/// store.get_mut(&a).unwrap().next_turn();
///
/// assert_eq!(store.get(&a).unwrap().turn().turn_count(), 2);
/// assert_eq!(store.get(&b).unwrap().turn().turn_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: HashMap<SessionId, Session>,
}

impl SessionStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new session and return its id.
    ///
    /// Fails without storing anything if the rules or sheet are invalid.
    pub fn open(
        &mut self,
        rules: RulesConfig,
        sheet: CharacterSheet,
    ) -> Result<SessionId, EpError> {
        let session = Session::new(rules, sheet)?;
        let id = SessionId::new();
        self.sessions.insert(id, session);
        tracing::debug!(%id, "opened session");
        Ok(id)
    }

    /// Look up a session.
    pub fn get(&self, id: &SessionId) -> Result<&Session, EpError> {
        self.sessions.get(id).ok_or(EpError::UnknownSession(*id))
    }

    /// Look up a session for a turn, reset or override.
    pub fn get_mut(&mut self, id: &SessionId) -> Result<&mut Session, EpError> {
        self.sessions
            .get_mut(id)
            .ok_or(EpError::UnknownSession(*id))
    }

    /// End a session, returning its final state.
    pub fn close(&mut self, id: &SessionId) -> Result<Session, EpError> {
        let session = self
            .sessions
            .remove(id)
            .ok_or(EpError::UnknownSession(*id))?;
        tracing::debug!(%id, "closed session");
        Ok(session)
    }

    /// Number of open sessions.
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    /// Whether no session is open.
    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_session_report() {
        let report = Session::default().evaluate();
        assert_eq!(report.endurance, 5);
        assert_eq!(report.max_ep, 70);
        assert_eq!(report.current_ep, 70.0);
        assert_eq!(report.turn_count, 1);
        assert_eq!(report.regen_amount, 0.0);
        assert_eq!(report.total_cost(), 4.0);
        assert_eq!(report.remaining_ep, 66.0);
        assert_eq!(report.usage.used, 4.0);
        assert_eq!(report.usage.remaining, 66.0);
        assert_eq!(report.breakdown.mobility_value, 1);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let session = Session::default();
        let before = session.clone();
        let _ = session.evaluate();
        assert_eq!(session, before);
    }

    #[test]
    fn test_turn_sequence() {
        let mut session = Session::default();
        let eps: Vec<EpAmount> = (0..4).map(|_| session.next_turn().ep_after).collect();
        assert_eq!(eps, vec![66.0, 66.0, 62.0, 65.0]);
        assert_eq!(session.turn().turn_count(), 5);
    }

    #[test]
    fn test_set_sheet_clamps_current_ep() {
        let mut session = Session::default();
        let smaller = CharacterSheet::builder().endurance(1).build().unwrap();
        session.set_sheet(smaller).unwrap();
        assert_eq!(session.max_ep(), 30);
        assert_eq!(session.turn().current_ep(), 30.0);
    }

    #[test]
    fn test_set_sheet_rejects_invalid_modifiers() {
        let mut session = Session::default();
        let mut sheet = CharacterSheet::default();
        sheet.modifiers.extra_costs = -2.0;
        assert_eq!(
            session.set_sheet(sheet),
            Err(EpError::InvalidExtraCosts(-2.0))
        );
        assert_eq!(session.sheet(), &CharacterSheet::default());
    }

    #[test]
    fn test_insufficient_report() {
        let mut session = Session::default();
        session.set_current_ep(3.0).unwrap();
        let report = session.evaluate();
        assert_eq!(report.remaining_ep, -1.0);
        assert_eq!(report.sufficiency, Sufficiency::Insufficient);
        assert_eq!(report.usage.used, 3.0);
        assert_eq!(report.usage.remaining, 0.0);
    }

    #[test]
    fn test_store_unknown_session() {
        let mut store = SessionStore::new();
        let missing = SessionId::new();
        assert_eq!(
            store.get(&missing).unwrap_err(),
            EpError::UnknownSession(missing)
        );
        assert!(store.close(&missing).is_err());
    }

    #[test]
    fn test_store_open_close() {
        let mut store = SessionStore::new();
        assert!(store.is_empty());
        let id = store
            .open(RulesConfig::default(), CharacterSheet::default())
            .unwrap();
        assert_eq!(store.len(), 1);
        let session = store.close(&id).unwrap();
        assert_eq!(session.turn().turn_count(), 1);
        assert!(store.is_empty());
    }

    #[test]
    fn test_new_rejects_invalid_rules() {
        for regen_rate in [f64::NAN, -0.1, 1.5] {
            let rules = RulesConfig {
                regen_rate,
                ..RulesConfig::default()
            };
            assert!(matches!(
                Session::new(rules, CharacterSheet::default()),
                Err(EpError::InvalidConfig(_))
            ));
        }

        let rules = RulesConfig {
            starting_ep: f64::NAN,
            ..RulesConfig::default()
        };
        assert!(Session::new(rules, CharacterSheet::default()).is_err());
    }

    #[test]
    fn test_new_rejects_invalid_sheet() {
        let mut sheet = CharacterSheet::default();
        sheet.modifiers.extra_costs = f64::NAN;
        assert!(matches!(
            Session::new(RulesConfig::default(), sheet),
            Err(EpError::InvalidExtraCosts(_))
        ));
    }

    #[test]
    fn test_store_open_rejects_invalid_rules() {
        let mut store = SessionStore::new();
        let rules = RulesConfig {
            regen_rate: f64::NAN,
            ..RulesConfig::default()
        };
        assert!(store.open(rules, CharacterSheet::default()).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_regen_never_refills_past_the_rate() {
        let mut session = Session::default();
        session.set_current_ep(10.0).unwrap();
        let first = session.next_turn();
        let second = session.next_turn();
        // 10 - 4, then 6 + 7 - 4
        assert_eq!(first.ep_after, 6.0);
        assert_eq!(second.regen, 7.0);
        assert_eq!(second.ep_after, 9.0);
    }
}
