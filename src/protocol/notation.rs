//! Compact single-line position notation.
//!
//! A position string records everything needed to resume a match without
//! replaying it, in the spirit of chess FEN.
//!
//! Format: `<turn><phase>/<occupancy>/<white_to_place>,<black_to_place>`
//!
//! - turn: `w` or `b`
//! - phase: `s` set, `m` move, `j` jump, `r` remove, `x` game over
//! - occupancy: 24 characters in position order, `w`, `b` or `.`
//!
//! The opening position is `ws/......................../9,9`.

use crate::board::{PerSide, Phase, Position, Side, ALL_POSITIONS, POSITION_COUNT};
use crate::rules::Game;
use crate::scenario::Scenario;

/// Errors that can occur during notation parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected 3 sections separated by '/', got {0}")]
    WrongSectionCount(usize),

    #[error("turn info must be exactly 2 characters: '{0}'")]
    InvalidTurnInfo(String),

    #[error("invalid side character: '{0}'")]
    InvalidSide(char),

    #[error("invalid phase character: '{0}'")]
    InvalidPhase(char),

    #[error("occupancy must list 24 positions, got {0}")]
    WrongOccupancyLength(usize),

    #[error("invalid occupancy character: '{0}'")]
    InvalidOccupancy(char),

    #[error("invalid pool section: '{0}'")]
    InvalidPools(String),
}

/// Parses the turn info section (e.g., "ws").
fn parse_turn_info(s: &str) -> Result<(Side, Phase), NotationError> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != 2 {
        return Err(NotationError::InvalidTurnInfo(s.to_string()));
    }
    let side = Side::from_notation_char(chars[0]).ok_or(NotationError::InvalidSide(chars[0]))?;
    let phase = Phase::from_notation_char(chars[1]).ok_or(NotationError::InvalidPhase(chars[1]))?;
    Ok((side, phase))
}

/// Parses the occupancy section into per-side position lists.
fn parse_occupancy(s: &str) -> Result<PerSide<Vec<Position>>, NotationError> {
    let count = s.chars().count();
    if count != POSITION_COUNT {
        return Err(NotationError::WrongOccupancyLength(count));
    }

    let mut occupancy: PerSide<Vec<Position>> = PerSide::default();
    for (c, &position) in s.chars().zip(ALL_POSITIONS.iter()) {
        match c {
            '.' => {}
            _ => {
                let side = Side::from_notation_char(c).ok_or(NotationError::InvalidOccupancy(c))?;
                occupancy[side].push(position);
            }
        }
    }
    Ok(occupancy)
}

/// Parses the pool section (e.g., "9,9").
fn parse_pools(s: &str) -> Result<PerSide<u8>, NotationError> {
    let invalid = || NotationError::InvalidPools(s.to_string());
    let (white, black) = s.split_once(',').ok_or_else(invalid)?;
    let white: u8 = white.parse().map_err(|_| invalid())?;
    let black: u8 = black.parse().map_err(|_| invalid())?;
    Ok(PerSide::new(white, black))
}

/// Parses a position string into a scenario.
///
/// Only the syntax is checked here. `Game::from_scenario` validates the
/// counts and phase against the rules.
pub fn parse_notation(s: &str) -> Result<Scenario, NotationError> {
    let sections: Vec<&str> = s.split('/').collect();
    if sections.len() != 3 {
        return Err(NotationError::WrongSectionCount(sections.len()));
    }

    let (to_move, starting_phase) = parse_turn_info(sections[0])?;
    let occupancy = parse_occupancy(sections[1])?;
    let tokens_to_place = parse_pools(sections[2])?;
    let tokens_on_board = PerSide::new(occupancy.white.len() as u8, occupancy.black.len() as u8);

    Ok(Scenario {
        occupancy,
        tokens_on_board,
        tokens_to_place,
        starting_phase,
        to_move,
    })
}

/// Encodes a match as a canonical position string.
pub fn format_notation(game: &Game) -> String {
    let mut result = String::with_capacity(POSITION_COUNT + 12);

    result.push(game.turn().notation_char());
    result.push(game.phase().notation_char());
    result.push('/');

    for cell in game.board().cells() {
        result.push(cell.map_or('.', Side::notation_char));
    }

    result.push('/');
    result.push_str(&format!(
        "{},{}",
        game.side(Side::White).to_place,
        game.side(Side::Black).to_place
    ));

    result
}
