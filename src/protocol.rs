//! The wire boundary to the host engine.
//!
//! Input is a whitespace-delimited token stream: a setup block (factory
//! count plus link list) once at startup, then one entity block per turn.
//! Output is exactly one action line per turn. The reader works over any
//! [`std::io::BufRead`] so tests can drive a whole session from a string.

mod action;
mod reader;

pub use action::Action;
pub use reader::{Setup, TokenReader, read_setup, read_turn};
