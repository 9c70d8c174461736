//! Match rules.
//!
//! The phase authority, win conditions, rule errors, and the `Game` match
//! context that applies committed actions.

pub mod error;
pub mod game;
pub mod phase;

pub use error::RuleError;
pub use game::{Game, GameConfig, Snapshot, Transition, DEFAULT_TOKENS_PER_SIDE, MAX_TOKENS_PER_SIDE};
pub use phase::{evaluate_outcome, phase_for, Outcome, SideState, WinReason, JUMP_THRESHOLD, MIN_TOKENS};
