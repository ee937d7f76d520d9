use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::fmt::Debug;

use tracing::debug;

use crate::adjacency::AdjacencyList;
use crate::error::{GraphError, GraphResult};

/// Breadth-first visitation order from `start`.
///
/// Neighbours of each dequeued vertex are enqueued in ascending order, so the
/// result is a pure function of the graph content. Every reachable vertex
/// appears exactly once.
pub fn bfs<V: Ord + Clone + Debug>(graph: &AdjacencyList<V>, start: &V) -> GraphResult<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut queue: VecDeque<&V> = VecDeque::new();
    let mut order: Vec<V> = Vec::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        order.push(current.clone());

        for neighbor in graph.sorted_neighbors(current) {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(start = ?start, visited = order.len(), "bfs complete");
    Ok(order)
}

/// Minimum hop count from `start` to every reachable vertex.
///
/// A vertex's distance is fixed the first time it is discovered, which is
/// minimal because BFS explores in non-decreasing hop order. Unreachable
/// vertices are absent; an unknown `start` yields an empty map.
pub fn bfs_distances<V: Ord + Clone>(graph: &AdjacencyList<V>, start: &V) -> BTreeMap<V, usize> {
    if !graph.contains(start) {
        return BTreeMap::new();
    }

    let mut distances: BTreeMap<&V, usize> = BTreeMap::new();
    let mut queue: VecDeque<(&V, usize)> = VecDeque::new();

    distances.insert(start, 0);
    queue.push_back((start, 0));

    while let Some((current, depth)) = queue.pop_front() {
        for neighbor in graph.sorted_neighbors(current) {
            if !distances.contains_key(neighbor) {
                distances.insert(neighbor, depth + 1);
                queue.push_back((neighbor, depth + 1));
            }
        }
    }

    distances
        .into_iter()
        .map(|(v, d)| (v.clone(), d))
        .collect()
}

/// Shortest (fewest-hops) path from `start` to `end`, both endpoints included.
///
/// Returns `None` if `end` is unreachable or either vertex is unknown.
/// `start == end` yields a single-vertex path.
pub fn bfs_shortest_path<V: Ord + Clone>(
    graph: &AdjacencyList<V>,
    start: &V,
    end: &V,
) -> Option<Vec<V>> {
    if !graph.contains(start) || !graph.contains(end) {
        return None;
    }

    // parent: node -> predecessor; the start vertex alone maps to None
    let mut parent: BTreeMap<&V, Option<&V>> = BTreeMap::new();
    let mut queue: VecDeque<&V> = VecDeque::new();

    parent.insert(start, None);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        if current == end {
            return Some(reconstruct_path(&parent, end));
        }

        for neighbor in graph.sorted_neighbors(current) {
            if !parent.contains_key(neighbor) {
                parent.insert(neighbor, Some(current));
                queue.push_back(neighbor);
            }
        }
    }

    None
}

/// Walk parent pointers from `end` back to the root, then reverse.
fn reconstruct_path<V: Ord + Clone>(parent: &BTreeMap<&V, Option<&V>>, end: &V) -> Vec<V> {
    let mut path = Vec::new();
    let mut current = Some(end);

    while let Some(node) = current {
        path.push(node.clone());
        current = parent.get(node).copied().flatten();
    }

    path.reverse();
    path
}

/// Per-call state threaded through the recursive DFS.
struct DfsContext<'a, V> {
    visited: BTreeSet<&'a V>,
    order: Vec<&'a V>,
}

/// Recursive depth-first visitation order from `start`.
///
/// Recursion depth grows with the longest simple path explored; prefer
/// [`dfs_iterative`] on deep graphs. Both produce the same order.
pub fn dfs_recursive<V: Ord + Clone + Debug>(
    graph: &AdjacencyList<V>,
    start: &V,
) -> GraphResult<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut ctx = DfsContext {
        visited: BTreeSet::new(),
        order: Vec::new(),
    };
    dfs_visit(graph, start, &mut ctx);

    debug!(start = ?start, visited = ctx.order.len(), "recursive dfs complete");
    Ok(ctx.order.into_iter().cloned().collect())
}

fn dfs_visit<'a, V: Ord + Clone>(
    graph: &'a AdjacencyList<V>,
    node: &'a V,
    ctx: &mut DfsContext<'a, V>,
) {
    ctx.visited.insert(node);
    ctx.order.push(node);

    for neighbor in graph.sorted_neighbors(node) {
        if !ctx.visited.contains(neighbor) {
            dfs_visit(graph, neighbor, ctx);
        }
    }
}

/// Depth-first visitation order from `start` using an explicit stack.
///
/// Neighbours are pushed in descending order so that LIFO popping explores
/// them in ascending order, reproducing [`dfs_recursive`] exactly. A vertex
/// may sit on the stack several times; copies popped after the first visit
/// are skipped.
pub fn dfs_iterative<V: Ord + Clone + Debug>(
    graph: &AdjacencyList<V>,
    start: &V,
) -> GraphResult<Vec<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }

    let mut visited: BTreeSet<&V> = BTreeSet::new();
    let mut stack: Vec<&V> = vec![start];
    let mut order: Vec<V> = Vec::new();

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        order.push(current.clone());

        for neighbor in graph.sorted_neighbors(current).into_iter().rev() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    debug!(start = ?start, visited = order.len(), "iterative dfs complete");
    Ok(order)
}
