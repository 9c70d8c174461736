//! Legal move generation.
//!
//! Answers "which positions may the side to act click on right now" for
//! every phase, and enumerates complete committed actions for callers that
//! need whole moves rather than clicks.

pub mod movement;
pub mod remove;
pub mod set;

pub use movement::{legal_jumps, legal_moves, step_destinations};
pub use remove::legal_removals;
pub use set::legal_placements;

use crate::board::{Action, BoardState, Phase, Position, Side};

/// Dispatches to the generator for `phase`.
///
/// For `Move` and `Jump` the result depends on `selection` (sources vs.
/// destinations). `GameOver` has no legal positions.
pub fn legal_positions(
    phase: Phase,
    side: Side,
    selection: Option<Position>,
    state: &BoardState,
) -> Vec<Position> {
    match phase {
        Phase::Set => legal_placements(state),
        Phase::Move => legal_moves(side, selection, state),
        Phase::Jump => legal_jumps(side, selection, state),
        Phase::Remove => legal_removals(side, state),
        Phase::GameOver => Vec::new(),
    }
}

/// Enumerates every complete action `side` may commit during `phase`.
///
/// Relocations are listed source-major, both ends in index order.
pub fn legal_actions(phase: Phase, side: Side, state: &BoardState) -> Vec<Action> {
    match phase {
        Phase::Set => legal_placements(state).into_iter().map(Action::Place).collect(),
        Phase::Remove => legal_removals(side, state)
            .into_iter()
            .map(Action::Remove)
            .collect(),
        Phase::Move | Phase::Jump => {
            let mut actions = Vec::new();
            for from in legal_positions(phase, side, None, state) {
                for to in legal_positions(phase, side, Some(from), state) {
                    actions.push(Action::Move { from, to });
                }
            }
            actions
        }
        Phase::GameOver => Vec::new(),
    }
}

/// Returns true if `side` has at least one committed action in `phase`.
pub fn has_legal_action(phase: Phase, side: Side, state: &BoardState) -> bool {
    match phase {
        Phase::Set => state.empty_count() > 0,
        Phase::Move => !legal_moves(side, None, state).is_empty(),
        Phase::Jump => state.count(side) > 0 && state.empty_count() > 0,
        Phase::Remove => state.count(side.opponent()) > 0,
        Phase::GameOver => false,
    }
}
