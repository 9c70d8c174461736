//! Move- and jump-phase move generation.
//!
//! Both generators answer two questions with one call, disambiguated by the
//! current selection:
//! - no selection, or a selection not owned by the acting side: which tokens
//!   can be picked up (sources);
//! - a selection owned by the acting side: where it can be put down
//!   (destinations).

use crate::board::{BoardState, Position, Side};

/// Returns the selection if it holds a `side` token.
fn owned_selection(side: Side, selection: Option<Position>, state: &BoardState) -> Option<Position> {
    selection.filter(|&p| state.owner(p) == Some(side))
}

/// Returns true if the token at `position` has at least one empty neighbour.
fn can_step(position: Position, state: &BoardState) -> bool {
    position.neighbors().iter().any(|&n| state.is_empty(n))
}

/// Generates move-phase positions for `side`.
///
/// Without a valid selection: every `side` token with an empty neighbour.
/// With one: the empty neighbours of the selected token.
pub fn legal_moves(side: Side, selection: Option<Position>, state: &BoardState) -> Vec<Position> {
    match owned_selection(side, selection, state) {
        Some(src) => step_destinations(src, state),
        None => state
            .positions_of(side)
            .filter(|&p| can_step(p, state))
            .collect(),
    }
}

/// Generates jump-phase positions for `side`.
///
/// Without a valid selection: every `side` token. With one: every empty
/// position on the board.
pub fn legal_jumps(side: Side, selection: Option<Position>, state: &BoardState) -> Vec<Position> {
    match owned_selection(side, selection, state) {
        Some(_) => state.empty_positions().collect(),
        None => state.positions_of(side).collect(),
    }
}

/// Returns the empty neighbours of `from` in index order.
pub fn step_destinations(from: Position, state: &BoardState) -> Vec<Position> {
    from.neighbors()
        .iter()
        .copied()
        .filter(|&n| state.is_empty(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(i: u8) -> Position {
        Position::new(i).unwrap()
    }

    fn positions(indices: &[u8]) -> Vec<Position> {
        indices.iter().map(|&i| pos(i)).collect()
    }

    /// White at 0,1,7,10 and black at 8,13,20,23.
    fn move_layout() -> BoardState {
        let mut state = BoardState::empty();
        for i in [0, 1, 7, 10] {
            state.place(pos(i), Side::White);
        }
        for i in [8, 13, 20, 23] {
            state.place(pos(i), Side::Black);
        }
        state
    }

    #[test]
    fn sources_need_an_empty_neighbour() {
        let state = move_layout();
        // 0 is boxed in by 1 and 7.
        assert_eq!(legal_moves(Side::White, None, &state), positions(&[1, 7, 10]));
    }

    #[test]
    fn selection_yields_destinations() {
        let state = move_layout();
        assert_eq!(legal_moves(Side::White, Some(pos(10)), &state), positions(&[9, 11]));
        assert_eq!(legal_moves(Side::White, Some(pos(7)), &state), positions(&[6, 15]));
    }

    #[test]
    fn opponent_selection_falls_back_to_sources() {
        let state = move_layout();
        let sources = legal_moves(Side::White, None, &state);
        assert_eq!(legal_moves(Side::White, Some(pos(8)), &state), sources);
        assert_eq!(legal_moves(Side::White, Some(pos(2)), &state), sources);
    }

    #[test]
    fn boxed_in_selection_has_no_destinations() {
        let state = move_layout();
        assert!(legal_moves(Side::White, Some(pos(0)), &state).is_empty());
    }

    #[test]
    fn jump_sources_ignore_adjacency() {
        let mut state = BoardState::empty();
        for i in [0, 1, 2] {
            state.place(pos(i), Side::White);
        }
        for i in [3, 7, 9] {
            state.place(pos(i), Side::Black);
        }
        // Every white token is boxed in, but all may jump.
        assert!(legal_moves(Side::White, None, &state).is_empty());
        assert_eq!(legal_jumps(Side::White, None, &state), positions(&[0, 1, 2]));
    }

    #[test]
    fn jump_destinations_are_all_empty_positions() {
        let mut state = BoardState::empty();
        for i in [0, 1, 2] {
            state.place(pos(i), Side::White);
        }
        for i in [4, 8, 16, 23] {
            state.place(pos(i), Side::Black);
        }
        let dests = legal_jumps(Side::White, Some(pos(0)), &state);
        assert_eq!(dests.len(), 17);
        assert!(dests.iter().all(|&d| state.is_empty(d)));
        assert!(dests.contains(&pos(12)));
    }
}
