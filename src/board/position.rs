//! Board positions and the static adjacency graph.
//!
//! The board is three concentric squares ("rings") of eight positions each.
//! The outer ring holds indices 0-7, the middle ring 8-15 and the inner ring
//! 16-23. Within a ring, index `base + k` runs clockwise from the top-left
//! corner, so even `k` are corners and odd `k` are side midpoints:
//!
//! ```text
//!  0-----------1-----------2
//!  |           |           |
//!  |   8-------9------10   |
//!  |   |       |       |   |
//!  |   |  16--17--18   |   |
//!  |   |   |       |   |   |
//!  7--15--23      19--11---3
//!  |   |   |       |   |   |
//!  |   |  22--21--20   |   |
//!  |   |       |       |   |
//!  |  14------13------12   |
//!  |           |           |
//!  6-----------5-----------4
//! ```
//!
//! Midpoints are joined across rings by four spokes (1-9-17, 3-11-19,
//! 5-13-21, 7-15-23). All data is compile-time `static`.

use serde::{Deserialize, Serialize};

/// The number of positions on the board.
pub const POSITION_COUNT: usize = 24;

/// A validated board position index in `[0, 23]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Position(u8);

/// Returned when an index falls outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("position index {0} is outside 0..24")]
pub struct PositionOutOfRange(pub u8);

impl Position {
    /// Creates a position, or None if the index is off the board.
    pub const fn new(index: u8) -> Option<Position> {
        if (index as usize) < POSITION_COUNT {
            Some(Position(index))
        } else {
            None
        }
    }

    /// Returns the raw index, usable as an array index.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Returns the adjacent positions in ascending index order.
    pub fn neighbors(self) -> &'static [Position] {
        NEIGHBORS[self.index()]
    }

    /// Returns true if `other` is one step away along a board line.
    pub fn is_adjacent(self, other: Position) -> bool {
        self.neighbors().contains(&other)
    }
}

impl TryFrom<u8> for Position {
    type Error = PositionOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Position::new(index).ok_or(PositionOutOfRange(index))
    }
}

impl From<Position> for u8 {
    fn from(p: Position) -> u8 {
        p.0
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let idx: u8 = s
            .parse()
            .map_err(|_| format!("invalid position '{}'", s))?;
        Position::new(idx).ok_or_else(|| format!("position {} is off the board", idx))
    }
}

/// Shorthand constructor used only in table construction.
const fn p(index: u8) -> Position {
    Position(index)
}

/// All positions in index order.
pub const ALL_POSITIONS: [Position; POSITION_COUNT] = [
    p(0), p(1), p(2), p(3), p(4), p(5), p(6), p(7),
    p(8), p(9), p(10), p(11), p(12), p(13), p(14), p(15),
    p(16), p(17), p(18), p(19), p(20), p(21), p(22), p(23),
];

/// Neighbour table indexed by position, each list sorted ascending.
///
/// Corners: 2 neighbours. Outer and inner midpoints: 3. Middle midpoints: 4.
static NEIGHBORS: [&[Position]; POSITION_COUNT] = [
    // Outer ring
    &[p(1), p(7)],
    &[p(0), p(2), p(9)],
    &[p(1), p(3)],
    &[p(2), p(4), p(11)],
    &[p(3), p(5)],
    &[p(4), p(6), p(13)],
    &[p(5), p(7)],
    &[p(0), p(6), p(15)],
    // Middle ring
    &[p(9), p(15)],
    &[p(1), p(8), p(10), p(17)],
    &[p(9), p(11)],
    &[p(3), p(10), p(12), p(19)],
    &[p(11), p(13)],
    &[p(5), p(12), p(14), p(21)],
    &[p(13), p(15)],
    &[p(7), p(8), p(14), p(23)],
    // Inner ring
    &[p(17), p(23)],
    &[p(9), p(16), p(18)],
    &[p(17), p(19)],
    &[p(11), p(18), p(20)],
    &[p(19), p(21)],
    &[p(13), p(20), p(22)],
    &[p(21), p(23)],
    &[p(15), p(16), p(22)],
];
