//! Scenario setup for arbitrary mid-game positions.
//!
//! A `Scenario` describes a position directly (who holds which points, how
//! many tokens remain in each pool, whose turn it is and in which phase)
//! so a match can start without walking through the placement phase.
//! Scenarios deserialize from JSON and a handful of named presets cover the
//! guided layouts.

use serde::{Deserialize, Serialize};

use crate::board::{PerSide, Phase, Position, Side};

/// Errors raised while turning a scenario into a match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScenarioError {
    #[error("position {0} is listed more than once")]
    DoubleOccupied(Position),

    #[error("{side} declares {declared} tokens on board but occupies {actual}")]
    CountMismatch {
        side: Side,
        declared: u8,
        actual: usize,
    },

    #[error("{side} holds more tokens than a pool can count")]
    PoolOverflow { side: Side },

    #[error("starting phase {declared} does not match the token counts, expected {expected}")]
    PhaseMismatch { declared: Phase, expected: Phase },

    #[error("a remove phase needs at least one opponent token on the board")]
    NothingToRemove,

    #[error("starting phase is gameover but neither side has lost")]
    NotOver,

    #[error("unknown scenario preset '{0}'")]
    UnknownPreset(String),

    #[error("invalid scenario json: {0}")]
    Json(String),
}

/// A complete description of a starting position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    /// Positions held by each side.
    pub occupancy: PerSide<Vec<Position>>,
    /// Declared on-board counts, checked against `occupancy`.
    pub tokens_on_board: PerSide<u8>,
    /// Tokens still to be placed.
    pub tokens_to_place: PerSide<u8>,
    pub starting_phase: Phase,
    #[serde(default = "default_to_move")]
    pub to_move: Side,
}

fn default_to_move() -> Side {
    Side::White
}

/// Names accepted by `Scenario::preset`.
pub const PRESET_NAMES: [&str; 6] = ["set", "move", "remove", "jump", "token-count", "blocked"];

fn positions(indices: &[u8]) -> Vec<Position> {
    indices.iter().filter_map(|&i| Position::new(i)).collect()
}

impl Scenario {
    /// An empty board with full pools, White to place first.
    pub fn opening(tokens_per_side: u8) -> Self {
        Scenario {
            occupancy: PerSide::default(),
            tokens_on_board: PerSide::splat(0),
            tokens_to_place: PerSide::splat(tokens_per_side),
            starting_phase: Phase::Set,
            to_move: Side::White,
        }
    }

    /// Builds a scenario with empty pools from two lists of occupied points.
    pub fn layout(white: &[u8], black: &[u8], starting_phase: Phase, to_move: Side) -> Self {
        let occupancy = PerSide::new(positions(white), positions(black));
        let tokens_on_board = PerSide::new(occupancy.white.len() as u8, occupancy.black.len() as u8);
        Scenario {
            occupancy,
            tokens_on_board,
            tokens_to_place: PerSide::splat(0),
            starting_phase,
            to_move,
        }
    }

    /// Looks up one of the guided layouts by name.
    pub fn preset(name: &str) -> Result<Scenario, ScenarioError> {
        let scenario = match name {
            "set" => Scenario::opening(9),
            "move" => Scenario::layout(&[0, 1, 7, 10], &[8, 13, 20, 23], Phase::Move, Side::White),
            "remove" => Scenario::layout(&[0, 1, 2], &[4, 8, 16, 23], Phase::Remove, Side::White),
            "jump" => Scenario::layout(&[0, 1, 2], &[4, 8, 16, 23], Phase::Jump, Side::White),
            "token-count" => Scenario::layout(&[0, 1, 2], &[16, 23], Phase::Move, Side::Black),
            "blocked" => Scenario::layout(
                &[1, 5, 9, 13, 23],
                &[0, 6, 7, 8, 14, 15],
                Phase::Move,
                Side::Black,
            ),
            other => return Err(ScenarioError::UnknownPreset(other.to_string())),
        };
        Ok(scenario)
    }

    /// Parses a scenario from JSON.
    pub fn from_json(json: &str) -> Result<Scenario, ScenarioError> {
        serde_json::from_str(json).map_err(|e| ScenarioError::Json(e.to_string()))
    }

    /// Serializes the scenario to a single JSON line.
    pub fn to_json(&self) -> Result<String, ScenarioError> {
        serde_json::to_string(self).map_err(|e| ScenarioError::Json(e.to_string()))
    }
}
