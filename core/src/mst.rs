//! Minimum spanning trees over undirected [`Graph`]s.
//!
//! Both algorithms expect every edge stored in both directions, as
//! [`EdgeMode::Undirected`](crate::EdgeMode::Undirected) inserts do. Prim
//! grows one tree from a start vertex; Kruskal spans every component and
//! so returns a minimum spanning forest on disconnected input.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::Debug;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{EdgeRecord, Graph};

/// Edges chosen for a spanning tree (or forest) and their summed weight.
#[derive(Debug, Clone, PartialEq)]
pub struct MstResult<V> {
    pub edges: Vec<EdgeRecord<V>>,
    pub total_weight: f64,
}

impl<V> MstResult<V> {
    fn empty() -> Self {
        Self {
            edges: Vec::new(),
            total_weight: 0.0,
        }
    }

    fn push(&mut self, from: V, to: V, weight: f64) {
        self.total_weight += weight;
        self.edges.push(EdgeRecord { from, to, weight });
    }
}

/// Union-find over dense indices, with path compression and union by rank.
struct DisjointSet {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl DisjointSet {
    fn new(len: usize) -> Self {
        Self {
            parent: (0..len).collect(),
            rank: vec![0; len],
        }
    }

    fn find(&mut self, id: usize) -> usize {
        let mut root = id;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        // Second pass: point everything on the walk at the root
        let mut curr = id;
        while curr != root {
            let parent = self.parent[curr];
            self.parent[curr] = root;
            curr = parent;
        }
        root
    }

    /// Merge the sets of `a` and `b`; `false` if they were already one set.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a == root_b {
            return false;
        }

        match self.rank[root_a].cmp(&self.rank[root_b]) {
            Ordering::Less => self.parent[root_a] = root_b,
            Ordering::Greater => self.parent[root_b] = root_a,
            Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            }
        }
        true
    }
}

/// Prim frontier entry, reversed so the max-heap pops the lightest edge.
/// Equal weights pop the smaller `(from, to)` pair first.
struct Candidate<'a, V> {
    weight: f64,
    from: &'a V,
    to: &'a V,
}

impl<V: Ord> PartialEq for Candidate<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for Candidate<'_, V> {}

impl<V: Ord> PartialOrd for Candidate<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for Candidate<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.from.cmp(self.from))
            .then_with(|| other.to.cmp(self.to))
    }
}

fn reject_nan<V: Ord + Clone + Debug>(graph: &Graph<V>) -> GraphResult<()> {
    match graph.edges().find(|(_, e)| e.weight.is_nan()) {
        Some((from, edge)) => Err(GraphError::NanWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", edge.target),
        }),
        None => Ok(()),
    }
}

/// Prim's algorithm from `start`, covering only the component of `start`.
///
/// Each result edge is oriented from the tree side to the vertex it adds.
pub fn prim_mst<V: Ord + Clone + Debug>(graph: &Graph<V>, start: &V) -> GraphResult<MstResult<V>> {
    if !graph.contains(start) {
        return Err(GraphError::vertex_not_found(start));
    }
    reject_nan(graph)?;

    let mut in_tree: BTreeSet<&V> = BTreeSet::new();
    let mut heap = BinaryHeap::new();
    let mut result = MstResult::empty();

    in_tree.insert(start);
    for edge in graph.neighbors(start) {
        heap.push(Candidate {
            weight: edge.weight,
            from: start,
            to: &edge.target,
        });
    }

    while let Some(Candidate { weight, from, to }) = heap.pop() {
        if !in_tree.insert(to) {
            continue;
        }
        result.push(from.clone(), to.clone(), weight);

        for edge in graph.neighbors(to) {
            if !in_tree.contains(&edge.target) {
                heap.push(Candidate {
                    weight: edge.weight,
                    from: to,
                    to: &edge.target,
                });
            }
        }
    }

    debug!(
        start = ?start,
        edges = result.edges.len(),
        total_weight = result.total_weight,
        "prim complete"
    );
    Ok(result)
}

/// Kruskal's algorithm: a minimum spanning forest over every component.
///
/// Edges are considered by ascending weight; equal weights keep adjacency
/// order (ascending source vertex, then insertion order).
pub fn kruskal_mst<V: Ord + Clone + Debug>(graph: &Graph<V>) -> GraphResult<MstResult<V>> {
    reject_nan(graph)?;

    let index: BTreeMap<&V, usize> = graph.vertices().enumerate().map(|(i, v)| (v, i)).collect();
    let mut edges: Vec<_> = graph.edges().collect();
    edges.sort_by(|(_, a), (_, b)| a.weight.total_cmp(&b.weight));

    let mut components = DisjointSet::new(index.len());
    let mut result = MstResult::empty();

    for (from, edge) in edges {
        if components.union(index[from], index[&edge.target]) {
            result.push(from.clone(), edge.target.clone(), edge.weight);
        }
    }

    debug!(
        edges = result.edges.len(),
        total_weight = result.total_weight,
        "kruskal complete"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::EdgeMode;

    fn undirected(edges: &[(u32, u32, f64)]) -> Graph<u32> {
        let mut g = Graph::new();
        for &(u, v, w) in edges {
            g.add_weighted_edge(u, v, w, EdgeMode::Undirected);
        }
        g
    }

    fn sensors() -> Graph<u32> {
        undirected(&[
            (0, 1, 10.0),
            (0, 2, 6.0),
            (0, 3, 5.0),
            (1, 3, 15.0),
            (2, 3, 4.0),
        ])
    }

    // --- Union-find ---

    #[test]
    fn test_disjoint_set() {
        let mut ds = DisjointSet::new(4);
        assert!(ds.union(0, 1));
        assert!(ds.union(2, 3));
        assert!(!ds.union(1, 0));
        assert_ne!(ds.find(0), ds.find(2));
        assert!(ds.union(1, 3));
        assert_eq!(ds.find(0), ds.find(2));
    }

    // --- Prim / Kruskal ---

    #[test]
    fn test_mst_simple_connected() {
        let g = sensors();
        let prim = prim_mst(&g, &0).unwrap();
        let kruskal = kruskal_mst(&g).unwrap();

        assert_eq!(prim.total_weight, 19.0);
        assert_eq!(kruskal.total_weight, 19.0);
        assert_eq!(prim.edges.len(), 3);
        assert_eq!(kruskal.edges.len(), 3);

        assert_eq!(
            kruskal.edges,
            vec![
                EdgeRecord { from: 2, to: 3, weight: 4.0 },
                EdgeRecord { from: 0, to: 3, weight: 5.0 },
                EdgeRecord { from: 0, to: 1, weight: 10.0 },
            ]
        );
        assert_eq!(
            prim.edges,
            vec![
                EdgeRecord { from: 0, to: 3, weight: 5.0 },
                EdgeRecord { from: 3, to: 2, weight: 4.0 },
                EdgeRecord { from: 0, to: 1, weight: 10.0 },
            ]
        );
    }

    #[test]
    fn test_mst_disconnected() {
        let g = undirected(&[(0, 1, 5.0), (2, 3, 10.0)]);

        let prim = prim_mst(&g, &0).unwrap();
        assert_eq!(prim.total_weight, 5.0);
        assert_eq!(prim.edges.len(), 1);

        let kruskal = kruskal_mst(&g).unwrap();
        assert_eq!(kruskal.total_weight, 15.0);
        assert_eq!(kruskal.edges.len(), 2);
    }

    #[test]
    fn test_mst_single_node() {
        let mut g = Graph::new();
        g.add_vertex(0u32);

        let prim = prim_mst(&g, &0).unwrap();
        let kruskal = kruskal_mst(&g).unwrap();
        assert_eq!(prim, MstResult::empty());
        assert_eq!(kruskal, MstResult::empty());
    }

    #[test]
    fn test_mst_cycle() {
        let g = undirected(&[(0, 1, 10.0), (1, 2, 10.0), (2, 0, 10.0)]);
        assert_eq!(prim_mst(&g, &0).unwrap().total_weight, 20.0);
        assert_eq!(kruskal_mst(&g).unwrap().total_weight, 20.0);
    }

    #[test]
    fn test_mst_duplicate_weights() {
        let g = undirected(&[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)]);
        let prim = prim_mst(&g, &0).unwrap();
        let kruskal = kruskal_mst(&g).unwrap();
        assert_eq!(prim.total_weight, 3.0);
        assert_eq!(kruskal.total_weight, 3.0);
        assert_eq!(prim.edges.len(), 3);
        assert_eq!(kruskal.edges.len(), 3);
    }

    #[test]
    fn test_mst_ignores_self_loops_and_keeps_cheapest_parallel_edge() {
        let g = undirected(&[(0, 0, 0.5), (0, 1, 7.0), (0, 1, 2.0)]);
        let expected = 2.0;
        assert_eq!(prim_mst(&g, &0).unwrap().total_weight, expected);
        assert_eq!(kruskal_mst(&g).unwrap().total_weight, expected);
    }

    #[test]
    fn test_mst_negative_weights_allowed() {
        let g = undirected(&[(0, 1, -3.0), (1, 2, 4.0), (0, 2, 1.0)]);
        assert_eq!(prim_mst(&g, &2).unwrap().total_weight, -2.0);
        assert_eq!(kruskal_mst(&g).unwrap().total_weight, -2.0);
    }

    #[test]
    fn test_prim_unknown_start() {
        assert!(matches!(
            prim_mst(&sensors(), &42),
            Err(GraphError::VertexNotFound(_))
        ));
    }

    #[test]
    fn test_mst_rejects_nan() {
        let g = undirected(&[(0, 1, f64::NAN)]);
        assert!(matches!(kruskal_mst(&g), Err(GraphError::NanWeight { .. })));
        assert!(matches!(prim_mst(&g, &0), Err(GraphError::NanWeight { .. })));
    }

    #[test]
    fn test_mst_empty_graph() {
        let g: Graph<u32> = Graph::new();
        assert_eq!(kruskal_mst(&g).unwrap(), MstResult::empty());
    }
}
