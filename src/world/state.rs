//! The per-turn snapshot container.

use std::collections::BTreeMap;

use crate::graph::FactoryId;
use crate::world::{Faction, Factory, Troop, TroopId};

/// Everything visible this turn, keyed by entity id.
///
/// Both collections are ordered maps so every iterator below walks ids in
/// ascending order; the engine's entity order is not meaningful, and the
/// turn loop needs a defined order to be reproducible. Inserting an id twice
/// keeps the later record, which the engine never actually does.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorldState {
    /// All visible factories.
    factories: BTreeMap<FactoryId, Factory>,
    /// All troops currently in transit.
    troops: BTreeMap<TroopId, Troop>,
}

impl WorldState {
    /// Create an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a factory, replacing any earlier record with the same id.
    pub fn insert_factory(&mut self, factory: Factory) {
        self.factories.insert(factory.id, factory);
    }

    /// Record a troop, replacing any earlier record with the same id.
    pub fn insert_troop(&mut self, troop: Troop) {
        self.troops.insert(troop.id, troop);
    }

    /// Look up a factory by id.
    #[must_use]
    pub fn factory(&self, id: FactoryId) -> Option<&Factory> {
        self.factories.get(&id)
    }

    /// All factories, ascending by id.
    pub fn factories(&self) -> impl Iterator<Item = &Factory> {
        self.factories.values()
    }

    /// Factories controlled by one faction, ascending by id.
    pub fn faction_factories(&self, faction: Faction) -> impl Iterator<Item = &Factory> {
        self.factories.values().filter(move |f| f.faction == faction)
    }

    /// All troops in transit, ascending by id.
    pub fn troops(&self) -> impl Iterator<Item = &Troop> {
        self.troops.values()
    }

    /// Whether any troop of `faction` is en route to `destination`.
    ///
    /// The dispatching source does not matter: one inbound troop claims the
    /// destination for the whole faction.
    #[must_use]
    pub fn has_inbound_troop(&self, faction: Faction, destination: FactoryId) -> bool {
        self.troops
            .values()
            .any(|t| t.faction == faction && t.destination == destination)
    }

    /// Number of visible factories.
    #[must_use]
    pub fn factory_count(&self) -> usize {
        self.factories.len()
    }

    /// Number of troops in transit.
    #[must_use]
    pub fn troop_count(&self) -> usize {
        self.troops.len()
    }
}
