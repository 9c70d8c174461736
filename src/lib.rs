//! Morris engine library.
//!
//! Exposes the board graph, move generation, match rules, scenario setup and
//! protocol modules for use by integration tests and the binary entry point.

pub mod board;
pub mod engine;
pub mod movegen;
pub mod protocol;
pub mod rules;
pub mod scenario;
