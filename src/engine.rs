//! Engine session state.
//!
//! Holds the current match and engine options between commands, and turns
//! each parsed command into protocol output.

use std::collections::HashMap;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::board::Position;
use crate::protocol::notation::{format_notation, parse_notation};
use crate::protocol::parser::Command;
use crate::rules::{Game, GameConfig, RuleError, Transition, DEFAULT_TOKENS_PER_SIDE};
use crate::scenario::Scenario;

/// Option name for the per-side pool size.
pub const OPTION_TOKENS_PER_SIDE: &str = "TokensPerSide";

/// Whether the main loop should keep reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Holds the mutable state of the engine between commands.
pub struct Engine {
    pub game: Game,
    pub options: HashMap<String, String>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine with a fresh standard match.
    pub fn new() -> Self {
        Engine {
            game: Game::default(),
            options: HashMap::new(),
        }
    }

    /// Returns the match configuration derived from the options.
    pub fn config(&self) -> GameConfig {
        let tokens_per_side = self
            .options
            .get(OPTION_TOKENS_PER_SIDE)
            .and_then(|v| v.parse::<u8>().ok())
            .unwrap_or(DEFAULT_TOKENS_PER_SIDE);
        GameConfig { tokens_per_side }
    }

    /// Starts a new match with the configured pool size.
    pub fn new_game(&mut self) {
        self.game = Game::new(self.config());
        debug!(pool = self.config().pool(), "new game");
    }

    /// Sets an engine option. Takes effect at the next `newgame`.
    pub fn set_option(&mut self, name: String, value: Option<String>) {
        self.options.insert(name, value.unwrap_or_default());
    }

    /// Loads a position from notation.
    /// Returns an error message on failure, leaving the current match intact.
    pub fn set_position(&mut self, notation: &str) -> Result<(), String> {
        let scenario =
            parse_notation(notation).map_err(|e| format!("failed to parse position: {}", e))?;
        self.load(&scenario)
    }

    /// Loads a preset by name, or an inline JSON scenario.
    pub fn set_scenario(&mut self, source: &str) -> Result<(), String> {
        let scenario = if source.starts_with('{') {
            Scenario::from_json(source)
        } else {
            Scenario::preset(source)
        }
        .map_err(|e| e.to_string())?;
        self.load(&scenario)
    }

    fn load(&mut self, scenario: &Scenario) -> Result<(), String> {
        self.game = Game::from_scenario(scenario, self.config()).map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Handles one command, writing any response to `out`.
    pub fn handle<W: Write>(&mut self, cmd: Command, out: &mut W) -> io::Result<Flow> {
        match cmd {
            Command::IsReady => writeln!(out, "readyok")?,
            Command::SetOption { name, value } => self.set_option(name, value),
            Command::NewGame => self.new_game(),
            Command::Position { notation } => {
                if let Err(e) = self.set_position(&notation) {
                    warn!("{}", e);
                    writeln!(out, "error invalid_position {}", e)?;
                }
            }
            Command::Scenario { source } => {
                if let Err(e) = self.set_scenario(&source) {
                    warn!("{}", e);
                    writeln!(out, "error invalid_scenario {}", e)?;
                }
            }
            Command::Select(selection) => {
                let result = self.game.select(selection);
                self.report_selection(result, out)?;
            }
            Command::Place(p) => {
                let result = self.game.place(p);
                self.report(result, out)?;
            }
            Command::Move { from, to } => {
                let result = self.game.move_token(from, to);
                self.report(result, out)?;
            }
            Command::Remove(p) => {
                let result = self.game.remove(p);
                self.report(result, out)?;
            }
            Command::Phase => {
                writeln!(out, "phase {} {}", self.game.phase(), self.game.turn())?;
            }
            Command::Legal => {
                writeln!(out, "legal{}", join_positions(&self.game.legal_positions()))?;
            }
            Command::Board => writeln!(out, "board {}", format_notation(&self.game))?,
            Command::Snapshot => {
                let json = serde_json::to_string(&self.game.snapshot())
                    .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
                writeln!(out, "{}", json)?;
            }
            Command::Quit => return Ok(Flow::Quit),
        }
        out.flush()?;
        Ok(Flow::Continue)
    }

    /// Writes the result of an action: `ok`, optionally followed by
    /// `gameover`, or `error`.
    fn report<W: Write>(&self, result: Result<Transition, RuleError>, out: &mut W) -> io::Result<()> {
        match result {
            Ok(t) => {
                writeln!(out, "ok {} {}", t.phase, t.turn)?;
                if let Some(outcome) = t.outcome {
                    writeln!(out, "gameover {} {}", outcome.winner, outcome.reason.name())?;
                }
            }
            Err(e) => write_error(&e, out)?,
        }
        Ok(())
    }

    fn report_selection<W: Write>(&self, result: Result<(), RuleError>, out: &mut W) -> io::Result<()> {
        match result {
            Ok(()) => writeln!(out, "ok {} {}", self.game.phase(), self.game.turn()),
            Err(e) => write_error(&e, out),
        }
    }
}

fn write_error<W: Write>(e: &RuleError, out: &mut W) -> io::Result<()> {
    debug!(error = %e, "action rejected");
    writeln!(out, "error {} {}", e.code(), e)
}

/// Formats positions as a space-prefixed list, empty for no positions.
fn join_positions(positions: &[Position]) -> String {
    positions.iter().map(|p| format!(" {}", p)).collect()
}
