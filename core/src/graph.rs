use std::collections::BTreeMap;

/// Whether an inserted edge is stored in one direction or in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeMode {
    #[default]
    Directed,
    /// Also appends the reverse edge, emulating an undirected graph.
    Undirected,
}

/// Weight given to edges inserted without one.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A weighted edge in the adjacency list.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<V> {
    pub target: V,
    pub weight: f64,
}

/// One edge for bulk loading via [`Graph::load_edges`].
#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord<V> {
    pub from: V,
    pub to: V,
    pub weight: f64,
}

/// Weighted adjacency-list graph.
///
/// Vertices are keyed by an ordered map, so iteration over vertices never
/// depends on hashing. Per-vertex edge lists keep insertion order. Parallel
/// edges and self-loops are stored as given; nothing is deduplicated.
///
/// `incoming` counts edges targeting each vertex so that `in_degree` does
/// not have to scan every adjacency list.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    outgoing: BTreeMap<V, Vec<Edge<V>>>,
    incoming: BTreeMap<V, usize>,
}

impl<V: Ord + Clone> Graph<V> {
    pub fn new() -> Self {
        Self {
            outgoing: BTreeMap::new(),
            incoming: BTreeMap::new(),
        }
    }

    /// Register a vertex. Idempotent: existing edges are left untouched.
    pub fn add_vertex(&mut self, vertex: V) {
        self.incoming.entry(vertex.clone()).or_insert(0);
        self.outgoing.entry(vertex).or_default();
    }

    /// Add a directed edge with the default weight.
    pub fn add_edge(&mut self, from: V, to: V) {
        self.add_weighted_edge(from, to, DEFAULT_WEIGHT, EdgeMode::Directed);
    }

    /// Add an edge, creating missing endpoints.
    ///
    /// With [`EdgeMode::Undirected`] the reverse edge `(to, from)` is appended
    /// as well, so a single undirected insert contributes one to the
    /// out-degree of each endpoint (two for a self-loop).
    pub fn add_weighted_edge(&mut self, from: V, to: V, weight: f64, mode: EdgeMode) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        self.push_edge(from.clone(), to.clone(), weight);
        if mode == EdgeMode::Undirected {
            self.push_edge(to, from, weight);
        }
    }

    fn push_edge(&mut self, from: V, to: V, weight: f64) {
        *self.incoming.entry(to.clone()).or_insert(0) += 1;
        self.outgoing
            .entry(from)
            .or_default()
            .push(Edge { target: to, weight });
    }

    /// Bulk load edge records, all stored with the same `mode`.
    pub fn load_edges<I>(&mut self, edges: I, mode: EdgeMode)
    where
        I: IntoIterator<Item = EdgeRecord<V>>,
    {
        for record in edges {
            self.add_weighted_edge(record.from, record.to, record.weight, mode);
        }
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.outgoing.contains_key(vertex)
    }

    /// Known vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.outgoing.keys()
    }

    /// Outgoing edges of a vertex, empty for an unknown vertex.
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.outgoing
            .get(vertex)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of outgoing adjacency entries; 0 for an unknown vertex.
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }

    /// Number of adjacency entries (over all vertices) that target `vertex`.
    pub fn in_degree(&self, vertex: &V) -> usize {
        self.incoming.get(vertex).copied().unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.outgoing.len()
    }

    /// Total adjacency entries. An undirected insert counts twice.
    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(|v| v.len()).sum()
    }

    /// Directed density `E / (V * (V - 1))`, or `None` below two vertices.
    pub fn density(&self) -> Option<f64> {
        let n = self.node_count();
        if n < 2 {
            return None;
        }
        Some(self.edge_count() as f64 / (n * (n - 1)) as f64)
    }

    pub(crate) fn edges(&self) -> impl Iterator<Item = (&V, &Edge<V>)> {
        self.outgoing
            .iter()
            .flat_map(|(from, edges)| edges.iter().map(move |e| (from, e)))
    }
}

impl<V: Ord + Clone> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}
