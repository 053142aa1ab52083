//! The static distance graph built once at startup.
//!
//! Factories sit on a fixed graph whose links never change after the setup
//! phase, so all travel times live in one immutable square table. Absent
//! pairs are kept distinct from zero-cost pairs: an entry of `None` means
//! the two factories are not linked at all, which matters for maps that are
//! not fully connected.

use std::fmt;

/// Stable integer identity of a factory, also its index into the table.
pub type FactoryId = usize;

/// One startup link triple: two factory endpoints and the travel time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Link {
    /// First endpoint.
    pub a: FactoryId,
    /// Second endpoint.
    pub b: FactoryId,
    /// Travel time between the endpoints, in turns.
    pub distance: u32,
}

/// Immutable all-pairs travel-time table.
///
/// Symmetric by construction: every link sets both `(a, b)` and `(b, a)`.
/// The diagonal is `Some(0)`. Never mutated after [`DistanceGraph::build`].
#[derive(Clone, PartialEq, Eq)]
pub struct DistanceGraph {
    /// Number of factories; the table is `count * count` entries.
    count: usize,
    /// Row-major entries; `None` marks an unlinked pair.
    distances: Vec<Option<u32>>,
}

impl fmt::Debug for DistanceGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DistanceGraph")
            .field("count", &self.count)
            .finish_non_exhaustive()
    }
}

impl DistanceGraph {
    /// Build the table from the startup link list.
    ///
    /// Link endpoints must be below `factory_count`; the protocol reader
    /// range-checks them before this is called.
    #[must_use]
    pub fn build(factory_count: usize, links: &[Link]) -> Self {
        let mut distances = vec![None; factory_count * factory_count];
        for id in 0..factory_count {
            distances[id * factory_count + id] = Some(0);
        }
        for link in links {
            distances[link.a * factory_count + link.b] = Some(link.distance);
            distances[link.b * factory_count + link.a] = Some(link.distance);
        }
        Self {
            count: factory_count,
            distances,
        }
    }

    /// Number of factories the table was built for.
    #[must_use]
    pub const fn factory_count(&self) -> usize {
        self.count
    }

    /// Travel time between two factories, or `None` if they are not linked.
    #[must_use]
    pub fn distance(&self, a: FactoryId, b: FactoryId) -> Option<u32> {
        self.distances[a * self.count + b]
    }

    /// Every factory reachable from `id`, nearest first.
    ///
    /// Ascending by distance, ties broken by ascending factory id. `id`
    /// itself is excluded, as are factories with no recorded link to it. On
    /// a fully-linked map the result always has `factory_count - 1` entries.
    #[must_use]
    pub fn neighbors_by_distance(&self, id: FactoryId) -> Vec<(FactoryId, u32)> {
        let mut ranked: Vec<(FactoryId, u32)> = (0..self.count)
            .filter(|&other| other != id)
            .filter_map(|other| self.distance(id, other).map(|d| (other, d)))
            .collect();
        ranked.sort_by_key(|&(other, d)| (d, other));
        ranked
    }
}
