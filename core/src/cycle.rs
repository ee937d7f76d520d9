//! Directed-cycle detection by three-state DFS coloring.
//!
//! Every vertex starts `NotVisited`, turns `InProcess` while it is on the
//! current DFS path and `Completed` once all its outgoing edges have been
//! explored. Reaching an `InProcess` vertex again is a back edge, which
//! closes a cycle. Walks are started from every still-unvisited vertex so
//! disconnected components are all covered.

use std::collections::BTreeMap;

use tracing::debug;

use crate::adjacency::AdjacencyList;

/// Coloring state of a vertex during cycle detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    NotVisited,
    /// On the current DFS path.
    InProcess,
    /// Fully explored. Terminal.
    Completed,
}

fn initial_states<V: Ord + Clone>(graph: &AdjacencyList<V>) -> BTreeMap<&V, NodeState> {
    graph
        .vertices()
        .map(|v| (v, NodeState::NotVisited))
        .collect()
}

/// True if the graph, read as directed, contains a cycle.
///
/// Runs the coloring walk with an explicit stack of `(vertex, next edge
/// index)` frames, so depth is bounded by memory rather than the call stack.
/// Returns at the first back edge found. O(V + E).
pub fn has_cycle_directed<V: Ord + Clone>(graph: &AdjacencyList<V>) -> bool {
    let mut state = initial_states(graph);
    let roots: Vec<&V> = graph.vertices().collect();

    for root in roots {
        if state[root] != NodeState::NotVisited {
            continue;
        }

        state.insert(root, NodeState::InProcess);
        let mut stack: Vec<(&V, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let node = frame.0;
            let next = graph.neighbors(node).get(frame.1);
            frame.1 += 1;

            match next {
                Some(neighbor) => {
                    match state.get(neighbor).copied().unwrap_or(NodeState::NotVisited) {
                        NodeState::InProcess => {
                            debug!(vertices = graph.node_count(), "back edge found");
                            return true;
                        }
                        NodeState::NotVisited => {
                            state.insert(neighbor, NodeState::InProcess);
                            stack.push((neighbor, 0));
                        }
                        NodeState::Completed => {}
                    }
                }
                None => {
                    state.insert(node, NodeState::Completed);
                    stack.pop();
                }
            }
        }
    }

    false
}

/// Recursive formulation of [`has_cycle_directed`].
///
/// Kept for readability and cross-checking; recursion depth equals the
/// longest DFS path, so deep graphs can exhaust the call stack.
pub fn has_cycle_directed_recursive<V: Ord + Clone>(graph: &AdjacencyList<V>) -> bool {
    let mut state = initial_states(graph);
    let roots: Vec<&V> = graph.vertices().collect();

    for root in roots {
        if state[root] == NodeState::NotVisited && visit(graph, root, &mut state) {
            return true;
        }
    }

    false
}

fn visit<'a, V: Ord + Clone>(
    graph: &'a AdjacencyList<V>,
    node: &'a V,
    state: &mut BTreeMap<&'a V, NodeState>,
) -> bool {
    state.insert(node, NodeState::InProcess);

    for neighbor in graph.neighbors(node) {
        match state.get(neighbor).copied().unwrap_or(NodeState::NotVisited) {
            NodeState::InProcess => return true,
            NodeState::NotVisited => {
                if visit(graph, neighbor, state) {
                    return true;
                }
            }
            NodeState::Completed => {}
        }
    }

    state.insert(node, NodeState::Completed);
    false
}
