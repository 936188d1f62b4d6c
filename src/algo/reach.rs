//! Breadth-first reachability over the adjacency index

use super::index::AdjacencyIndex;
use super::types::Direction;
use std::collections::VecDeque;

/// Slots reachable from `start` (including `start`) following `direction`
pub(crate) fn reachable(index: &AdjacencyIndex, start: usize, direction: Direction) -> Vec<bool> {
    let mut visited = vec![false; index.len()];
    let mut queue: VecDeque<usize> = VecDeque::new();

    visited[start] = true;
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for &(neighbor, _) in index.neighbors(current, direction) {
            if !visited[neighbor] {
                visited[neighbor] = true;
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

fn reaches_all(index: &AdjacencyIndex, start: usize, direction: Direction) -> bool {
    reachable(index, start, direction).iter().all(|&seen| seen)
}

/// Whether every node can reach every other node.
///
/// One forward pass proves the start reaches everyone, one pass over the
/// reversed graph proves everyone reaches the start; together they give
/// mutual reachability for all pairs.
pub(crate) fn is_strongly_connected(index: &AdjacencyIndex) -> bool {
    if index.len() <= 1 {
        return true;
    }
    reaches_all(index, 0, Direction::Outgoing) && reaches_all(index, 0, Direction::Incoming)
}
