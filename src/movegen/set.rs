//! Set-phase move generation.

use crate::board::{BoardState, Position};

/// Generates every legal placement: all empty positions in index order.
///
/// Only empty when the board is full.
pub fn legal_placements(state: &BoardState) -> Vec<Position> {
    state.empty_positions().collect()
}
