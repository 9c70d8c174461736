//! Board occupancy and game phase.
//!
//! `BoardState` holds only which side, if any, occupies each of the 24
//! positions. Token pools and the active phase belong to the match context
//! in `rules::game`.

use serde::{Deserialize, Serialize};

use super::position::{Position, ALL_POSITIONS, POSITION_COUNT};
use super::side::Side;

/// The phase of the match. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Set,
    Move,
    Jump,
    Remove,
    GameOver,
}

impl Phase {
    /// Returns the single-character notation abbreviation.
    pub const fn notation_char(self) -> char {
        match self {
            Phase::Set => 's',
            Phase::Move => 'm',
            Phase::Jump => 'j',
            Phase::Remove => 'r',
            Phase::GameOver => 'x',
        }
    }

    /// Parses a phase from its single-character notation abbreviation.
    pub fn from_notation_char(c: char) -> Option<Phase> {
        match c {
            's' => Some(Phase::Set),
            'm' => Some(Phase::Move),
            'j' => Some(Phase::Jump),
            'r' => Some(Phase::Remove),
            'x' => Some(Phase::GameOver),
            _ => None,
        }
    }

    /// Returns the lowercase name used by the text protocol.
    pub const fn name(self) -> &'static str {
        match self {
            Phase::Set => "set",
            Phase::Move => "move",
            Phase::Jump => "jump",
            Phase::Remove => "remove",
            Phase::GameOver => "gameover",
        }
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Occupancy of every board position.
///
/// Uses a fixed-size array indexed by `Position::index()`, so the state is
/// trivially copyable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardState {
    cells: [Option<Side>; POSITION_COUNT],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::empty()
    }
}

impl BoardState {
    /// Creates a board with every position empty.
    pub const fn empty() -> Self {
        BoardState {
            cells: [None; POSITION_COUNT],
        }
    }

    /// Returns the side occupying `position`, if any.
    pub fn owner(&self, position: Position) -> Option<Side> {
        self.cells[position.index()]
    }

    /// Returns true if nobody occupies `position`.
    pub fn is_empty(&self, position: Position) -> bool {
        self.cells[position.index()].is_none()
    }

    /// Puts a `side` token on `position`. Returns false if it is occupied.
    pub fn place(&mut self, position: Position, side: Side) -> bool {
        let cell = &mut self.cells[position.index()];
        if cell.is_some() {
            return false;
        }
        *cell = Some(side);
        true
    }

    /// Clears `position`, returning the side that was there.
    pub fn clear(&mut self, position: Position) -> Option<Side> {
        self.cells[position.index()].take()
    }

    /// Moves the token on `from` to the empty `to`.
    ///
    /// Returns false, leaving the board untouched, if `from` is empty or
    /// `to` is occupied.
    pub fn relocate(&mut self, from: Position, to: Position) -> bool {
        if from == to || !self.is_empty(to) {
            return false;
        }
        match self.cells[from.index()].take() {
            Some(side) => {
                self.cells[to.index()] = Some(side);
                true
            }
            None => false,
        }
    }

    /// Removes every token.
    pub fn reset(&mut self) {
        self.cells = [None; POSITION_COUNT];
    }

    /// Counts the positions occupied by `side`.
    pub fn count(&self, side: Side) -> usize {
        self.cells.iter().filter(|c| **c == Some(side)).count()
    }

    /// Counts the empty positions.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// Iterates over the positions held by `side` in index order.
    pub fn positions_of(&self, side: Side) -> impl Iterator<Item = Position> + '_ {
        ALL_POSITIONS
            .iter()
            .copied()
            .filter(move |&p| self.owner(p) == Some(side))
    }

    /// Iterates over the empty positions in index order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        ALL_POSITIONS.iter().copied().filter(move |&p| self.is_empty(p))
    }

    /// Returns the raw occupancy array, indexed by position.
    pub fn cells(&self) -> &[Option<Side>; POSITION_COUNT] {
        &self.cells
    }
}
