// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Garrison: a greedy factory-targeting bot for CodinGame's Ghost in the Cell.
//!
//! Factories sit on a fixed graph of weighted links, produce cyborgs, and
//! fight over ownership. Every turn the host engine sends the full visible
//! state on stdin and expects one order line on stdout. This crate keeps
//! the decision logic deliberately single-step greedy: for each owned
//! factory, rank the other factories nearest-first, prefer neutrals, skip
//! anything already being reinforced, and send half the garrison to the
//! nearest survivor.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │       Session Loop (session)        │
//! ├──────────────────┬──────────────────┤
//! │ Wire (protocol)  │  Agent (agent)   │
//! ├──────────────────┼──────────────────┤
//! │  World (world)   │ Rank (targeting) │
//! ├──────────────────┴──────────────────┤
//! │       Distance Graph (graph)        │
//! └─────────────────────────────────────┘
//! ```
//!
//! The distance graph is built once at startup and never mutated; the world
//! snapshot is rebuilt from the wire every turn.

pub mod agent;
pub mod error;
pub mod graph;
pub mod protocol;
pub mod session;
pub mod targeting;
pub mod world;

pub use error::{ProtocolError, ProtocolResult};

// Re-export key game types at crate root for convenience
pub use graph::{DistanceGraph, FactoryId, Link};
pub use protocol::Action;
pub use targeting::TargetingPolicy;
pub use world::{Faction, Factory, Troop, TroopId, WorldState};
