//! Error types for EP calculation.
//!
//! All errors that can occur while building inputs, loading rules or
//! addressing sessions are represented by the `EpError` enum. Running
//! short on EP is not an error; it is reported through
//! [`Sufficiency`](crate::report::Sufficiency).

use crate::session::SessionId;
use crate::stat::StatKind;
use thiserror::Error;

/// Errors that can occur during EP calculation.
///
/// # Examples
///
/// ```rust
/// use epstat::{EpError, StatKind};
///
/// let err = EpError::OutOfRange { stat: StatKind::Range, value: 14, max: 13 };
/// assert_eq!(err.to_string(), "Range level 14 is out of range (0..=13)");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EpError {
    /// A level for a known stat fell outside its lookup table.
    #[error("{stat} level {value} is out of range (0..={max})")]
    OutOfRange { stat: StatKind, value: i64, max: u8 },

    /// A bare level fell outside its lookup table.
    ///
    /// Produced when a level is built or deserialized without knowing
    /// which stat it belongs to.
    #[error("Level {value} is out of range (0..={max})")]
    LevelOutOfRange { value: i64, max: u8 },

    /// Extra costs must be finite and non-negative.
    #[error("Invalid extra costs: {0}")]
    InvalidExtraCosts(f64),

    /// A manual Current EP override must be finite and non-negative.
    #[error("Invalid current EP: {0}")]
    InvalidCurrentEp(f64),

    /// A rules configuration value failed validation.
    #[error("Invalid rules configuration: {0}")]
    InvalidConfig(String),

    /// A rules document could not be parsed.
    #[error("Failed to parse rules configuration: {0}")]
    ConfigParse(String),

    /// No session is registered under this id.
    #[error("Unknown session: {0}")]
    UnknownSession(SessionId),
}
