//! Rule violations reported back to the caller.

use crate::board::{ActionKind, Phase, Position};

/// Why an action or selection was rejected.
///
/// A rejected call never mutates the match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    #[error("position {0} is not a legal choice right now")]
    InvalidSelection(Position),

    #[error("cannot {action} during the {phase} phase")]
    IllegalPhaseAction { action: ActionKind, phase: Phase },

    #[error("inconsistent match state: {0}")]
    InconsistentState(String),
}

impl RuleError {
    /// Returns the short reason code used by the text protocol.
    pub const fn code(&self) -> &'static str {
        match self {
            RuleError::InvalidSelection(_) => "invalid_selection",
            RuleError::IllegalPhaseAction { .. } => "illegal_phase_action",
            RuleError::InconsistentState(_) => "inconsistent_state",
        }
    }
}
