//! Text protocol handling.
//!
//! Parsing and serialization for the line protocol spoken by the `morris`
//! binary: the compact position notation and the command parser for the
//! main loop.

pub mod notation;
pub mod parser;

pub use notation::{format_notation, parse_notation, NotationError};
pub use parser::{parse_command, Command};
