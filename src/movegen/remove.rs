//! Remove-phase move generation.
//!
//! After closing a mill the side to act captures one opponent token. Tokens
//! sitting in an opponent mill are protected, unless every opponent token is
//! protected, in which case any of them may be taken.

use crate::board::{protected_positions, BoardState, Position, Side};

/// Generates the opponent positions `remover` may capture, in index order.
///
/// Returns an empty vec only when the opponent has no token on the board.
pub fn legal_removals(remover: Side, state: &BoardState) -> Vec<Position> {
    let victim = remover.opponent();
    let occupied: Vec<Position> = state.positions_of(victim).collect();
    let protected = protected_positions(state, victim);

    let unprotected: Vec<Position> = occupied
        .iter()
        .copied()
        .filter(|p| !protected.contains(p))
        .collect();

    if unprotected.is_empty() {
        occupied
    } else {
        unprotected
    }
}
