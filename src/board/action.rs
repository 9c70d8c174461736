//! Committed actions for every phase.
//!
//! An action is what a player submits once a choice is final: a
//! placement, a relocation (step or jump), or a capture.

use super::position::Position;
use super::state::Phase;

/// A committed board action by the side to act.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Put a token from the pool on an empty position.
    Place(Position),

    /// Relocate a token. During `Move` the destination must be adjacent,
    /// during `Jump` it may be any empty position.
    Move { from: Position, to: Position },

    /// Take an opponent token off the board after closing a mill.
    Remove(Position),
}

/// The kind of an action, without its positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Place,
    /// Picking up a token ahead of a move. Never committed on its own.
    Select,
    Move,
    Remove,
}

impl Action {
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Place(_) => ActionKind::Place,
            Action::Move { .. } => ActionKind::Move,
            Action::Remove(_) => ActionKind::Remove,
        }
    }
}

impl ActionKind {
    /// Returns true if this kind of action may be submitted during `phase`.
    pub const fn allowed_in(self, phase: Phase) -> bool {
        matches!(
            (self, phase),
            (ActionKind::Place, Phase::Set)
                | (ActionKind::Select, Phase::Move)
                | (ActionKind::Select, Phase::Jump)
                | (ActionKind::Move, Phase::Move)
                | (ActionKind::Move, Phase::Jump)
                | (ActionKind::Remove, Phase::Remove)
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            ActionKind::Place => "place",
            ActionKind::Select => "select",
            ActionKind::Move => "move",
            ActionKind::Remove => "remove",
        }
    }
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Place(p) => write!(f, "place {}", p),
            Action::Move { from, to } => write!(f, "move {} {}", from, to),
            Action::Remove(p) => write!(f, "remove {}", p),
        }
    }
}
