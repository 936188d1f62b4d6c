//! Best-first shortest-path search

use super::index::AdjacencyIndex;
use super::types::{Direction, DistancePolicy};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// A shortest route between two slots
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Route {
    pub distance: f64,
    /// Slots from source to target, inclusive
    pub slots: Vec<usize>,
}

/// Heap entry: min-ordered by distance, then by slot
#[derive(Debug, Clone, Copy)]
struct Candidate {
    distance: f64,
    slot: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Run the relaxation loop from `source` until `target` is settled or the
/// queue runs dry. Expects `source != target`.
///
/// A relaxed distance is compared untouched against the best known value
/// and only then passed through `policy` before being stored.
pub(crate) fn shortest_route(
    index: &AdjacencyIndex,
    source: usize,
    target: usize,
    policy: DistancePolicy,
) -> Option<Route> {
    let n = index.len();
    // None until a slot is first reached
    let mut distance: Vec<Option<f64>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut predecessor: Vec<Option<usize>> = vec![None; n];
    let mut queue = BinaryHeap::new();

    distance[source] = Some(0.0);
    queue.push(Candidate {
        distance: 0.0,
        slot: source,
    });

    while let Some(Candidate {
        distance: current_distance,
        slot: current,
    }) = queue.pop()
    {
        if settled[current] {
            continue;
        }
        settled[current] = true;
        if current == target {
            break;
        }

        for &(neighbor, weight) in index.neighbors(current, Direction::Outgoing) {
            if settled[neighbor] {
                continue;
            }
            // Sums past f64::MAX become infinite but still count as reached
            let relaxed = current_distance + weight;
            if distance[neighbor].map_or(true, |best| relaxed < best) {
                let stored = policy.store(relaxed);
                distance[neighbor] = Some(stored);
                predecessor[neighbor] = Some(current);
                queue.push(Candidate {
                    distance: stored,
                    slot: neighbor,
                });
            }
        }
    }

    let distance = distance[target].filter(|_| settled[target])?;

    let mut slots = vec![target];
    let mut current = target;
    while let Some(prev) = predecessor[current] {
        slots.push(prev);
        current = prev;
    }
    slots.reverse();

    Some(Route { distance, slots })
}
