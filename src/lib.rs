//! # epstat - Energy Point cost and turn tracking
//!
//! A deterministic calculator for tabletop-RPG Energy Points (EP):
//! - **Per-stat costs** from fixed lookup tables, with upkeep halving and
//!   inactive toggles
//! - **Control reduction** and **Buff/Debuff surcharge** as flat terms
//! - **Rounding policy** that snaps raw costs to whole or half EP and
//!   enforces a 1 EP minimum
//! - **Turn tracking** with regeneration, capped and floored EP
//!
//! ## Core Concepts
//!
//! ### Cost Pipeline
//!
//! ```text
//! [CharacterSheet] → [resolvers] → [aggregate] → [CostBreakdown]
//! ```
//!
//! 1. **Resolvers** turn one stat input into an EP amount
//! 2. **Aggregation** sums them with flat surcharges and normalizes the total
//! 3. **CostBreakdown** keeps every contribution for display
//!
//! ### Turns
//!
//! A [`Session`] pairs a sheet with a [`TurnState`]. Next Turn restores
//! 10% of max EP on even turns (or every turn with regen deactivated),
//! caps at max EP, pays the total and floors at zero.
//!
//! ## Example
//!
//! ```rust
//! use epstat::*;
//!
//! let sheet = CharacterSheet::builder()
//!     .endurance(5)
//!     .power1(4, true)
//!     .control(4, true)
//!     .build()
//!     .unwrap();
//!
//! let mut session = Session::new(RulesConfig::default(), sheet).unwrap();
//! let report = session.evaluate();
//! assert_eq!(report.max_ep, 70);
//! assert_eq!(report.total_cost(), 4.0);
//! assert!(report.sufficiency.is_sufficient());
//!
//! let outcome = session.next_turn();
//! assert_eq!(outcome.ep_after, 66.0);
//! ```
//!
//! ## Modules
//!
//! - [`tables`] - Lookup tables
//! - [`stat`] - Stat identifiers, levels and inputs
//! - [`sheet`] - Character sheet and modifiers
//! - [`rounding`] - Normalization and minimum policy
//! - [`resolver`] - Per-stat resolvers
//! - [`aggregate`] - Total cost aggregation
//! - [`calculator`] - Full evaluation pipeline
//! - [`turn`] - Turn and resource state
//! - [`session`] - Sessions and the session store
//! - [`config`] - Rules configuration
//! - [`error`] - Error types

pub mod aggregate;
pub mod breakdown;
pub mod calculator;
pub mod config;
pub mod error;
pub mod numeric;
pub mod report;
pub mod resolver;
pub mod rounding;
pub mod session;
pub mod sheet;
pub mod stat;
pub mod tables;
pub mod turn;

// Re-export main types for convenience
pub use breakdown::CostBreakdown;
pub use calculator::EpCalculator;
pub use config::{ReductionStage, RulesConfig};
pub use error::EpError;
pub use numeric::EpAmount;
pub use report::{EpReport, Sufficiency, UsageBars};
pub use rounding::{HalfStep, MinimumPolicy};
pub use session::{Session, SessionId, SessionStore};
pub use sheet::{CharacterSheet, Modifiers};
pub use stat::{BuffLevel, StatInput, StatKind, StatLevel};
pub use turn::{TurnOutcome, TurnState};
