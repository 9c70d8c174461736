//! Board representation.
//!
//! Contains the position graph, mill lines, occupancy, sides, phases and
//! the committed action type.

pub mod action;
pub mod mill;
pub mod position;
pub mod side;
pub mod state;

pub use action::{Action, ActionKind};
pub use mill::{
    is_mill, lines_through, mills_through, protected_positions, MillLine, MILL_LINES,
    MILL_LINE_COUNT,
};
pub use position::{Position, PositionOutOfRange, ALL_POSITIONS, POSITION_COUNT};
pub use side::{PerSide, Side, ALL_SIDES};
pub use state::{BoardState, Phase};
