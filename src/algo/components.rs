//! Grouping nodes by mutual reachability

use super::index::AdjacencyIndex;
use super::reach::reachable;
use super::types::Direction;

/// Group nodes by intersecting forward and backward reachability.
///
/// Starting from each node not yet consumed, the group is the set of nodes
/// reachable from the start that can also reach it. A start with no
/// outgoing or no incoming edges produces an empty group and stays
/// unconsumed. Groups are returned in order of their start node; members
/// are in slot order.
pub(crate) fn reachability_groups(index: &AdjacencyIndex) -> Vec<Vec<usize>> {
    let n = index.len();
    let mut groups = Vec::new();
    let mut consumed = vec![false; n];

    for start in 0..n {
        if consumed[start] {
            continue;
        }
        if index.degree(start, Direction::Outgoing) == 0
            || index.degree(start, Direction::Incoming) == 0
        {
            groups.push(Vec::new());
            continue;
        }

        let forward = reachable(index, start, Direction::Outgoing);
        let backward = reachable(index, start, Direction::Incoming);
        let group: Vec<usize> = (0..n).filter(|&s| forward[s] && backward[s]).collect();
        for &slot in &group {
            consumed[slot] = true;
        }
        groups.push(group);
    }

    groups
}

/// Strongly connected components by Tarjan's index/low-link method.
///
/// Iterative to keep deep graphs off the call stack. Every node lands in
/// exactly one group (singletons included). Groups are sorted by their
/// smallest slot; members are in slot order.
pub(crate) fn strong_groups(index: &AdjacencyIndex) -> Vec<Vec<usize>> {
    const UNVISITED: usize = usize::MAX;

    let n = index.len();
    let mut order = vec![UNVISITED; n];
    let mut low_link = vec![0usize; n];
    let mut on_stack = vec![false; n];
    let mut stack: Vec<usize> = Vec::new();
    let mut groups: Vec<Vec<usize>> = Vec::new();
    let mut counter = 0usize;

    // (slot, position of the next neighbor to explore)
    let mut frames: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if order[root] != UNVISITED {
            continue;
        }
        order[root] = counter;
        low_link[root] = counter;
        counter += 1;
        stack.push(root);
        on_stack[root] = true;
        frames.push((root, 0));

        while let Some(frame) = frames.last_mut() {
            let (v, pos) = *frame;
            let neighbors = index.neighbors(v, Direction::Outgoing);

            if pos < neighbors.len() {
                frame.1 += 1;
                let w = neighbors[pos].0;
                if order[w] == UNVISITED {
                    order[w] = counter;
                    low_link[w] = counter;
                    counter += 1;
                    stack.push(w);
                    on_stack[w] = true;
                    frames.push((w, 0));
                } else if on_stack[w] {
                    low_link[v] = low_link[v].min(order[w]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                low_link[parent] = low_link[parent].min(low_link[v]);
            }

            if low_link[v] == order[v] {
                let mut group = Vec::new();
                while let Some(w) = stack.pop() {
                    on_stack[w] = false;
                    group.push(w);
                    if w == v {
                        break;
                    }
                }
                group.sort_unstable();
                groups.push(group);
            }
        }
    }

    groups.sort_by_key(|group| group.first().copied());
    groups
}
