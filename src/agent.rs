//! The per-turn decision pass.

use log::debug;

use crate::graph::DistanceGraph;
use crate::protocol::Action;
use crate::targeting::{TargetingPolicy, candidate_target};
use crate::world::{Faction, WorldState};

/// Decide this turn's single order.
///
/// Runs the targeting pipeline for every player factory in ascending id
/// order and halves the garrison of the dispatching factory (truncating, so
/// a garrison of 1 sends 0 cyborgs, which the engine ignores). Each factory
/// that finds a target overwrites the pending order, so when several
/// factories want to move, only the highest-id one is actually heard; one
/// order per turn is all the emitter sends. Falls back to [`Action::Wait`]
/// when no factory finds a target.
#[must_use]
pub fn act(graph: &DistanceGraph, world: &WorldState, policy: TargetingPolicy) -> Action {
    let mut action = Action::Wait;
    for factory in world.faction_factories(Faction::Player) {
        let Some(destination) = candidate_target(graph, world, policy, factory.id) else {
            continue;
        };
        let cyborgs = factory.garrison / 2;
        debug!(
            "factory {} -> {destination} with {cyborgs} of {} cyborgs",
            factory.id, factory.garrison
        );
        action = Action::Move {
            source: factory.id,
            destination,
            cyborgs,
        };
    }
    action
}
