//! Command parser for the text protocol.
//!
//! Parses incoming lines into structured `Command` variants that the main
//! loop can dispatch on.

use tracing::warn;

use crate::board::Position;

/// A parsed controller-to-engine command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Synchronization ping; engine must reply `readyok`.
    IsReady,

    /// Set an engine option: `setoption name <id> [value <x>]`.
    SetOption { name: String, value: Option<String> },

    /// Reset the board for a new match.
    NewGame,

    /// Load a position from notation.
    Position { notation: String },

    /// Load a preset by name or an inline JSON scenario.
    Scenario { source: String },

    /// Pick up a token, or drop the selection with `none`.
    Select(Option<Position>),

    Place(Position),

    Move { from: Position, to: Position },

    Remove(Position),

    /// Report the current phase and side to act.
    Phase,

    /// Report the positions the side to act may choose.
    Legal,

    /// Report the current position in notation.
    Board,

    /// Report a JSON snapshot of the match.
    Snapshot,

    /// Terminate the engine process.
    Quit,
}

/// Parses a single line of input into a `Command`.
///
/// Returns `None` for empty lines or unrecognized commands. Malformed
/// arguments for known commands also return `None` after logging a warning.
pub fn parse_command(line: &str) -> Option<Command> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    match tokens[0] {
        "isready" => Some(Command::IsReady),
        "quit" => Some(Command::Quit),
        "newgame" => Some(Command::NewGame),
        "phase" => Some(Command::Phase),
        "legal" => Some(Command::Legal),
        "board" => Some(Command::Board),
        "snapshot" => Some(Command::Snapshot),

        "setoption" => parse_setoption(&tokens),
        "position" => parse_position(&tokens),
        "scenario" => parse_scenario(trimmed),
        "select" => parse_select(&tokens),
        "place" => parse_single(&tokens).map(Command::Place),
        "remove" => parse_single(&tokens).map(Command::Remove),
        "move" => parse_move(&tokens),

        other => {
            warn!(command = other, "unknown command");
            None
        }
    }
}

/// Parses a position argument, logging on failure.
fn parse_position_arg(token: &str) -> Option<Position> {
    match token.parse::<Position>() {
        Ok(p) => Some(p),
        Err(e) => {
            warn!("{}", e);
            None
        }
    }
}

/// Parses `setoption name <id> [value <x>]`.
fn parse_setoption(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 || tokens[1] != "name" {
        warn!("malformed setoption: expected 'setoption name <id> [value <x>]'");
        return None;
    }

    let value_idx = tokens.iter().position(|&t| t == "value");

    let (name, value) = match value_idx {
        Some(vi) => {
            let name_parts = &tokens[2..vi];
            let value_parts = &tokens[vi + 1..];
            if name_parts.is_empty() {
                warn!("malformed setoption: empty name");
                return None;
            }
            let value = if value_parts.is_empty() {
                None
            } else {
                Some(value_parts.join(" "))
            };
            (name_parts.join(" "), value)
        }
        None => (tokens[2..].join(" "), None),
    };

    Some(Command::SetOption { name, value })
}

/// Parses `position <notation>`.
fn parse_position(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 2 {
        warn!("malformed position: expected 'position <notation>'");
        return None;
    }
    Some(Command::Position {
        notation: tokens[1].to_string(),
    })
}

/// Parses `scenario <preset|json>`. JSON may contain spaces, so the rest of
/// the line is kept verbatim.
fn parse_scenario(line: &str) -> Option<Command> {
    let source = line["scenario".len()..].trim();
    if source.is_empty() {
        warn!("malformed scenario: expected 'scenario <preset|json>'");
        return None;
    }
    Some(Command::Scenario {
        source: source.to_string(),
    })
}

/// Parses `select <p|none>`.
fn parse_select(tokens: &[&str]) -> Option<Command> {
    match tokens.get(1) {
        Some(&"none") => Some(Command::Select(None)),
        Some(t) => parse_position_arg(t).map(|p| Command::Select(Some(p))),
        None => {
            warn!("malformed select: expected 'select <position|none>'");
            None
        }
    }
}

/// Parses the single position argument of `place` and `remove`.
fn parse_single(tokens: &[&str]) -> Option<Position> {
    match tokens.get(1) {
        Some(t) => parse_position_arg(t),
        None => {
            warn!(command = tokens[0], "missing position argument");
            None
        }
    }
}

/// Parses `move <from> <to>`.
fn parse_move(tokens: &[&str]) -> Option<Command> {
    if tokens.len() < 3 {
        warn!("malformed move: expected 'move <from> <to>'");
        return None;
    }
    let from = parse_position_arg(tokens[1])?;
    let to = parse_position_arg(tokens[2])?;
    Some(Command::Move { from, to })
}
