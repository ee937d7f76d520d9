use std::collections::BTreeMap;

/// Unweighted adjacency list consumed by the traversal algorithms.
///
/// Neighbour lists keep insertion order and may hold duplicates; traversals
/// sort a copy before exploring, so results never depend on the order in
/// which edges were added.
#[derive(Debug, Clone)]
pub struct AdjacencyList<V> {
    adjacency: BTreeMap<V, Vec<V>>,
}

impl<V: Ord + Clone> AdjacencyList<V> {
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
        }
    }

    pub fn add_vertex(&mut self, vertex: V) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Add an undirected edge: `v` is appended to `u`'s list and `u` to `v`'s.
    pub fn add_edge(&mut self, u: V, v: V) {
        self.adjacency.entry(u.clone()).or_default().push(v.clone());
        self.adjacency.entry(v).or_default().push(u);
    }

    /// Add a directed edge `u -> v`. Both endpoints become known vertices.
    pub fn add_directed_edge(&mut self, u: V, v: V) {
        self.adjacency.entry(u).or_default().push(v.clone());
        self.adjacency.entry(v).or_default();
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Known vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Neighbours in insertion order, empty for an unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> &[V] {
        self.adjacency
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Neighbours in ascending order: the tie-break every traversal uses.
    pub(crate) fn sorted_neighbors(&self, vertex: &V) -> Vec<&V> {
        let mut neighbors: Vec<&V> = self.neighbors(vertex).iter().collect();
        neighbors.sort();
        neighbors
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|v| v.len()).sum()
    }
}

impl<V: Ord + Clone> Default for AdjacencyList<V> {
    fn default() -> Self {
        Self::new()
    }
}
