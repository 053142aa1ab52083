//! Actions the bot can emit.

use std::fmt;

use crate::graph::FactoryId;

/// One turn's order, serialized by its `Display` impl.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Do nothing this turn.
    Wait,
    /// Send cyborgs from one factory to another.
    Move {
        /// Dispatching factory.
        source: FactoryId,
        /// Target factory.
        destination: FactoryId,
        /// Cyborgs to send; the engine treats 0 as a no-op.
        cyborgs: u32,
    },
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Wait => write!(f, "WAIT"),
            Action::Move {
                source,
                destination,
                cyborgs,
            } => write!(f, "MOVE {source} {destination} {cyborgs}"),
        }
    }
}
