//! Mill lines and the mill detector.
//!
//! A mill is three positions on one straight board line owned by the same
//! side. Each ring contributes its four sides and the four spokes cross the
//! rings, giving 16 lines. Every position lies on exactly two of them.

use super::position::{Position, ALL_POSITIONS, POSITION_COUNT};
use super::side::Side;
use super::state::BoardState;

/// The number of mill lines on the board.
pub const MILL_LINE_COUNT: usize = 16;

/// An unordered triple of positions forming a straight board line.
pub type MillLine = [Position; 3];

const fn line(a: u8, b: u8, c: u8) -> MillLine {
    match (Position::new(a), Position::new(b), Position::new(c)) {
        (Some(a), Some(b), Some(c)) => [a, b, c],
        _ => panic!("mill line index out of range"),
    }
}

const MILL_TABLE: [MillLine; MILL_LINE_COUNT] = [
    // Outer ring sides
    line(0, 1, 2),
    line(2, 3, 4),
    line(4, 5, 6),
    line(6, 7, 0),
    // Middle ring sides
    line(8, 9, 10),
    line(10, 11, 12),
    line(12, 13, 14),
    line(14, 15, 8),
    // Inner ring sides
    line(16, 17, 18),
    line(18, 19, 20),
    line(20, 21, 22),
    line(22, 23, 16),
    // Spokes
    line(1, 9, 17),
    line(3, 11, 19),
    line(5, 13, 21),
    line(7, 15, 23),
];

/// The complete mill-line table.
pub static MILL_LINES: [MillLine; MILL_LINE_COUNT] = MILL_TABLE;

/// Indices into `MILL_LINES` for the two lines through each position.
static LINES_THROUGH: [[u8; 2]; POSITION_COUNT] = build_lines_through();

const fn build_lines_through() -> [[u8; 2]; POSITION_COUNT] {
    let mut table = [[0u8; 2]; POSITION_COUNT];
    let mut filled = [0usize; POSITION_COUNT];
    let mut l = 0;
    while l < MILL_LINE_COUNT {
        let mut m = 0;
        while m < 3 {
            let idx = MILL_TABLE[l][m].index();
            table[idx][filled[idx]] = l as u8;
            filled[idx] += 1;
            m += 1;
        }
        l += 1;
    }
    table
}

/// Returns the mill lines passing through `position`.
pub fn lines_through(position: Position) -> impl Iterator<Item = &'static MillLine> {
    LINES_THROUGH[position.index()]
        .iter()
        .map(|&l| &MILL_LINES[l as usize])
}

/// Returns true if every member of `line` is owned by `side`.
fn line_owned_by(state: &BoardState, line: &MillLine, side: Side) -> bool {
    line.iter().all(|&p| state.owner(p) == Some(side))
}

/// Returns true if `position` currently sits in at least one completed mill
/// owned by `side`.
///
/// Both lines through the position are evaluated. An empty position, or one
/// held by the other side, is never in a mill for `side`.
pub fn is_mill(state: &BoardState, position: Position, side: Side) -> bool {
    lines_through(position).any(|l| line_owned_by(state, l, side))
}

/// Returns the number of completed `side` mills through `position` (0, 1 or 2).
pub fn mills_through(state: &BoardState, position: Position, side: Side) -> usize {
    lines_through(position)
        .filter(|l| line_owned_by(state, l, side))
        .count()
}

/// Returns every position currently protected by a `side` mill.
pub fn protected_positions(state: &BoardState, side: Side) -> Vec<Position> {
    ALL_POSITIONS
        .iter()
        .copied()
        .filter(|&p| is_mill(state, p, side))
        .collect()
}
