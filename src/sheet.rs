//! Character sheet inputs.
//!
//! A `CharacterSheet` is the full set of values a front end collects:
//! one level per stat, active flags, and the modifiers. It is plain data;
//! costs are derived from it on every evaluation and never stored.

use crate::error::EpError;
use crate::numeric::EpAmount;
use crate::stat::{BuffLevel, StatInput, StatKind, StatLevel};
use serde::{Deserialize, Serialize};

/// Flags and flat values applied on top of the stats.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Modifiers {
    /// Halve Power Use 1's base cost.
    pub upkeep_power1: bool,
    /// Halve Power Use 2's base cost.
    pub upkeep_power2: bool,
    /// Flat EP added to the total.
    pub extra_costs: EpAmount,
    /// Regenerate every turn instead of every other turn.
    pub deactivated_regen: bool,
}

impl Modifiers {
    /// Check that `extra_costs` is finite and non-negative.
    pub fn validate(&self) -> Result<(), EpError> {
        if self.extra_costs.is_finite() && self.extra_costs >= 0.0 {
            Ok(())
        } else {
            Err(EpError::InvalidExtraCosts(self.extra_costs))
        }
    }
}

/// All inputs for one character.
///
/// The default sheet matches the form defaults: Endurance 5, Power Use 1
/// at 4, Power Use 2 at 2, Range 3, Control 4, Mobility 3, no Buff/Debuff,
/// everything active and no modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CharacterSheet {
    pub endurance: StatLevel,
    pub power1: StatInput,
    pub power2: StatInput,
    pub range: StatInput,
    pub control: StatInput,
    pub mobility: StatInput,
    pub buff_debuff: StatInput<BuffLevel>,
    #[serde(default)]
    pub modifiers: Modifiers,
}

impl Default for CharacterSheet {
    fn default() -> Self {
        Self {
            endurance: StatLevel::from_const(5),
            power1: StatInput::active(StatLevel::from_const(4)),
            power2: StatInput::active(StatLevel::from_const(2)),
            range: StatInput::active(StatLevel::from_const(3)),
            control: StatInput::active(StatLevel::from_const(4)),
            mobility: StatInput::active(StatLevel::from_const(3)),
            buff_debuff: StatInput::active(BuffLevel::default()),
            modifiers: Modifiers::default(),
        }
    }
}

impl CharacterSheet {
    /// Start a builder seeded with the default sheet.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use epstat::CharacterSheet;
    ///
    /// let sheet = CharacterSheet::builder()
    ///     .endurance(7)
    ///     .power1(6, true)
    ///     .power2(0, false)
    ///     .upkeep_power1(true)
    ///     .extra_costs(1.5)
    ///     .build()
    ///     .unwrap();
    ///
    /// assert_eq!(sheet.endurance.get(), 7);
    /// assert!(!sheet.power2.active);
    /// assert!(sheet.modifiers.upkeep_power1);
    ///
    /// assert!(CharacterSheet::builder().range(14, true).build().is_err());
    /// ```
    pub fn builder() -> CharacterSheetBuilder {
        CharacterSheetBuilder::default()
    }

    /// The input for a stat that carries an active flag.
    ///
    /// Returns `None` for Endurance and Buff/Debuff, which use other
    /// level types.
    pub fn input(&self, stat: StatKind) -> Option<StatInput> {
        match stat {
            StatKind::PowerUse1 => Some(self.power1),
            StatKind::PowerUse2 => Some(self.power2),
            StatKind::Range => Some(self.range),
            StatKind::Control => Some(self.control),
            StatKind::Mobility => Some(self.mobility),
            StatKind::Endurance | StatKind::BuffDebuff => None,
        }
    }

    /// Whether upkeep halving is switched on for a stat.
    pub fn upkeep(&self, stat: StatKind) -> bool {
        match stat {
            StatKind::PowerUse1 => self.modifiers.upkeep_power1,
            StatKind::PowerUse2 => self.modifiers.upkeep_power2,
            _ => false,
        }
    }

    /// Validate the parts that the level types cannot enforce.
    pub fn validate(&self) -> Result<(), EpError> {
        self.modifiers.validate()
    }
}

/// Builder that takes raw form values and validates them on `build`.
///
/// Setters accept `i64` so that out-of-range slider values surface as
/// [`EpError::OutOfRange`] naming the offending stat. The first failing
/// setter's error is returned.
#[derive(Debug, Clone)]
pub struct CharacterSheetBuilder {
    sheet: CharacterSheet,
    error: Option<EpError>,
}

impl Default for CharacterSheetBuilder {
    fn default() -> Self {
        Self {
            sheet: CharacterSheet::default(),
            error: None,
        }
    }
}

impl CharacterSheetBuilder {
    fn record<T>(&mut self, result: Result<T, EpError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.error.get_or_insert(err);
                None
            }
        }
    }

    fn stat(
        mut self,
        stat: StatKind,
        value: i64,
        active: bool,
        slot: fn(&mut CharacterSheet) -> &mut StatInput,
    ) -> Self {
        if let Some(level) = self.record(StatLevel::for_stat(stat, value)) {
            *slot(&mut self.sheet) = StatInput { value: level, active };
        }
        self
    }

    /// Endurance level, which sets max EP.
    pub fn endurance(mut self, value: i64) -> Self {
        if let Some(level) = self.record(StatLevel::for_stat(StatKind::Endurance, value)) {
            self.sheet.endurance = level;
        }
        self
    }

    /// Power Use 1 level and active flag.
    pub fn power1(self, value: i64, active: bool) -> Self {
        self.stat(StatKind::PowerUse1, value, active, |s| &mut s.power1)
    }

    /// Power Use 2 level and active flag.
    pub fn power2(self, value: i64, active: bool) -> Self {
        self.stat(StatKind::PowerUse2, value, active, |s| &mut s.power2)
    }

    /// Range level and active flag.
    pub fn range(self, value: i64, active: bool) -> Self {
        self.stat(StatKind::Range, value, active, |s| &mut s.range)
    }

    /// Control level and active flag. An inactive Control gives no reduction.
    pub fn control(self, value: i64, active: bool) -> Self {
        self.stat(StatKind::Control, value, active, |s| &mut s.control)
    }

    /// Mobility level and active flag.
    pub fn mobility(self, value: i64, active: bool) -> Self {
        self.stat(StatKind::Mobility, value, active, |s| &mut s.mobility)
    }

    /// Buff/Debuff level; active unless [`buff_debuff_active`](Self::buff_debuff_active) says otherwise.
    pub fn buff_debuff(mut self, value: i64) -> Self {
        if let Some(level) = self.record(BuffLevel::from_input(value)) {
            self.sheet.buff_debuff.value = level;
        }
        self
    }

    /// Switch the Buff/Debuff surcharge on or off.
    pub fn buff_debuff_active(mut self, active: bool) -> Self {
        self.sheet.buff_debuff.active = active;
        self
    }

    /// Halve Power Use 1's base cost.
    pub fn upkeep_power1(mut self, on: bool) -> Self {
        self.sheet.modifiers.upkeep_power1 = on;
        self
    }

    /// Halve Power Use 2's base cost.
    pub fn upkeep_power2(mut self, on: bool) -> Self {
        self.sheet.modifiers.upkeep_power2 = on;
        self
    }

    /// Flat EP added to the total. Negative or non-finite values fail `build`.
    pub fn extra_costs(mut self, extra: EpAmount) -> Self {
        self.sheet.modifiers.extra_costs = extra;
        self
    }

    /// Regenerate on every turn instead of every other turn.
    pub fn deactivated_regen(mut self, on: bool) -> Self {
        self.sheet.modifiers.deactivated_regen = on;
        self
    }

    /// Finish, returning the first recorded error if any.
    pub fn build(self) -> Result<CharacterSheet, EpError> {
        if let Some(err) = self.error {
            return Err(err);
        }
        self.sheet.validate()?;
        Ok(self.sheet)
    }
}
