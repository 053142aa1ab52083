//! The per-factory targeting pipeline.
//!
//! For one owned factory this ranks every other factory nearest-first,
//! drops the ones that are not worth sending to (our own, and anything a
//! player troop is already flying toward) and keeps the nearest survivor.
//! The pipeline is pure: it reads the static graph and the current snapshot
//! and never fails. "Nothing left to target" is a normal outcome.

use log::debug;

use crate::graph::{DistanceGraph, FactoryId};
use crate::world::{Faction, WorldState};

/// Tunable knobs for target ranking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetingPolicy {
    /// Rank every neutral factory ahead of every opponent factory,
    /// regardless of distance.
    ///
    /// Neutral factories cost no fight to claim, so they are worth taking
    /// first even when an opponent factory is strictly closer. With the
    /// flag off, candidates stay in pure distance order.
    pub prefer_neutral_over_opponent: bool,
}

impl Default for TargetingPolicy {
    fn default() -> Self {
        Self {
            prefer_neutral_over_opponent: true,
        }
    }
}

/// All candidate targets for `source`, best first.
///
/// Nearest-first over the reachable factories, with player-owned factories
/// removed. Under [`TargetingPolicy::prefer_neutral_over_opponent`] the
/// neutral candidates are pulled ahead of the opponent ones, each subset
/// keeping its internal distance order.
#[must_use]
pub fn ranked_targets(
    graph: &DistanceGraph,
    world: &WorldState,
    policy: TargetingPolicy,
    source: FactoryId,
) -> Vec<FactoryId> {
    let mut neutral = Vec::new();
    let mut opponent = Vec::new();
    let mut by_distance = Vec::new();

    for (id, _) in graph.neighbors_by_distance(source) {
        // Neighbors without a factory record are invisible this turn.
        let Some(factory) = world.factory(id) else {
            continue;
        };
        match factory.faction {
            Faction::Neutral => neutral.push(id),
            Faction::Opponent => opponent.push(id),
            Faction::Player => {}
        }
        if factory.faction != Faction::Player {
            by_distance.push(id);
        }
    }

    if policy.prefer_neutral_over_opponent {
        neutral.extend(opponent);
        neutral
    } else {
        by_distance
    }
}

/// The factory `source` should reinforce this turn, if any.
///
/// First ranked target that no player troop is already en route to.
/// `None` when `source` is isolated or every candidate is already claimed.
#[must_use]
pub fn candidate_target(
    graph: &DistanceGraph,
    world: &WorldState,
    policy: TargetingPolicy,
    source: FactoryId,
) -> Option<FactoryId> {
    let ranked = ranked_targets(graph, world, policy, source);
    debug!("factory {source}: ranked targets {ranked:?}");
    ranked
        .into_iter()
        .find(|&id| !world.has_inbound_troop(Faction::Player, id))
}
