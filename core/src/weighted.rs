//! Weighted shortest paths over [`Graph`]: single-source Dijkstra and
//! all-pairs Floyd–Warshall.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap};
use std::fmt::Debug;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// Frontier entry. Ordering is reversed so `BinaryHeap` (a max-heap) pops
/// the cheapest entry first; equal costs pop the smaller vertex first.
struct HeapEntry<'a, V> {
    cost: f64,
    vertex: &'a V,
}

impl<V: Ord> PartialEq for HeapEntry<'_, V> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V: Ord> Eq for HeapEntry<'_, V> {}

impl<V: Ord> PartialOrd for HeapEntry<'_, V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Ord> Ord for HeapEntry<'_, V> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.vertex.cmp(self.vertex))
    }
}

/// Distances and predecessors computed by [`dijkstra`].
#[derive(Debug, Clone)]
pub struct ShortestPaths<V> {
    source: V,
    distances: BTreeMap<V, f64>,
    /// Predecessor on one cheapest path; the source alone maps to `None`.
    parents: BTreeMap<V, Option<V>>,
}

impl<V: Ord + Clone> ShortestPaths<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Cost of the cheapest path to `target`, `None` if unreachable.
    pub fn distance(&self, target: &V) -> Option<f64> {
        self.distances.get(target).copied()
    }

    /// Every reachable vertex with its cost, ascending by vertex.
    pub fn distances(&self) -> &BTreeMap<V, f64> {
        &self.distances
    }

    /// Vertices of the cheapest path from the source to `target`, both
    /// included, or `None` if `target` is unreachable.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.parents.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut current = target;
        while let Some(Some(parent)) = self.parents.get(current) {
            path.push(parent.clone());
            current = parent;
        }

        path.reverse();
        Some(path)
    }
}

/// Dijkstra's algorithm from `source` over the weighted edges of `graph`.
///
/// Fails if `source` is unknown or any edge weight is negative or NaN.
/// Stale heap entries are skipped on pop instead of being decreased in place.
pub fn dijkstra<V: Ord + Clone + Debug>(
    graph: &Graph<V>,
    source: &V,
) -> GraphResult<ShortestPaths<V>> {
    if !graph.contains(source) {
        return Err(GraphError::vertex_not_found(source));
    }

    if let Some((from, edge)) = graph
        .edges()
        .find(|(_, e)| e.weight.is_nan() || e.weight < 0.0)
    {
        return Err(GraphError::NegativeWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", edge.target),
            weight: edge.weight,
        });
    }

    let mut dist: BTreeMap<&V, f64> = BTreeMap::new();
    let mut parent: BTreeMap<&V, Option<&V>> = BTreeMap::new();
    let mut settled: BTreeSet<&V> = BTreeSet::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source, 0.0);
    parent.insert(source, None);
    heap.push(HeapEntry {
        cost: 0.0,
        vertex: source,
    });

    while let Some(HeapEntry { cost, vertex }) = heap.pop() {
        if !settled.insert(vertex) {
            continue;
        }

        for edge in graph.neighbors(vertex) {
            let candidate = cost + edge.weight;
            let improves = dist
                .get(&edge.target)
                .map_or(true, |&known| candidate < known);
            if improves {
                dist.insert(&edge.target, candidate);
                parent.insert(&edge.target, Some(vertex));
                heap.push(HeapEntry {
                    cost: candidate,
                    vertex: &edge.target,
                });
            }
        }
    }

    debug!(source = ?source, reached = settled.len(), "dijkstra complete");

    Ok(ShortestPaths {
        source: source.clone(),
        distances: dist.into_iter().map(|(v, d)| (v.clone(), d)).collect(),
        parents: parent
            .into_iter()
            .map(|(v, p)| (v.clone(), p.cloned()))
            .collect(),
    })
}

/// All-pairs distances and next hops computed by [`floyd_warshall`].
#[derive(Debug, Clone)]
pub struct AllPairsPaths<V> {
    vertices: Vec<V>,
    index: BTreeMap<V, usize>,
    /// Row-major `n * n`; `f64::INFINITY` where no path exists.
    dist: Vec<f64>,
    /// First hop after `i` on a cheapest `i -> j` path.
    next: Vec<Option<usize>>,
}

impl<V: Ord + Clone> AllPairsPaths<V> {
    /// Vertices in matrix order (ascending).
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    fn cell(&self, from: &V, to: &V) -> Option<(usize, usize)> {
        Some((*self.index.get(from)?, *self.index.get(to)?))
    }

    /// Cost of the cheapest `from -> to` path, `None` if either vertex is
    /// unknown or `to` is unreachable.
    pub fn distance(&self, from: &V, to: &V) -> Option<f64> {
        let (i, j) = self.cell(from, to)?;
        let d = self.dist[i * self.vertices.len() + j];
        d.is_finite().then_some(d)
    }

    /// Vertices of the cheapest `from -> to` path, both included.
    pub fn path(&self, from: &V, to: &V) -> Option<Vec<V>> {
        let (i, j) = self.cell(from, to)?;
        let n = self.vertices.len();

        let mut path = vec![self.vertices[i].clone()];
        let mut current = i;
        while current != j {
            current = self.next[current * n + j]?;
            path.push(self.vertices[current].clone());
            if path.len() > n {
                return None;
            }
        }
        Some(path)
    }
}

/// Floyd–Warshall over every vertex of `graph`.
///
/// Negative weights are allowed; a negative cycle anywhere is an error.
/// Parallel edges keep the cheapest weight. O(V³) time, O(V²) memory.
pub fn floyd_warshall<V: Ord + Clone + Debug>(graph: &Graph<V>) -> GraphResult<AllPairsPaths<V>> {
    let vertices: Vec<V> = graph.vertices().cloned().collect();
    let index: BTreeMap<V, usize> = vertices
        .iter()
        .enumerate()
        .map(|(i, v)| (v.clone(), i))
        .collect();
    let n = vertices.len();

    let mut dist = vec![f64::INFINITY; n * n];
    let mut next = vec![None; n * n];
    for i in 0..n {
        dist[i * n + i] = 0.0;
        next[i * n + i] = Some(i);
    }

    for (from, edge) in graph.edges() {
        if edge.weight.is_nan() {
            return Err(GraphError::NanWeight {
                from: format!("{:?}", from),
                to: format!("{:?}", edge.target),
            });
        }
        let (i, j) = (index[from], index[&edge.target]);
        if edge.weight < dist[i * n + j] {
            dist[i * n + j] = edge.weight;
            next[i * n + j] = Some(j);
        }
    }

    for k in 0..n {
        for i in 0..n {
            let via = dist[i * n + k];
            if via == f64::INFINITY {
                continue;
            }
            for j in 0..n {
                let candidate = via + dist[k * n + j];
                if candidate < dist[i * n + j] {
                    dist[i * n + j] = candidate;
                    next[i * n + j] = next[i * n + k];
                }
            }
        }
    }

    if let Some(i) = (0..n).find(|&i| dist[i * n + i] < 0.0) {
        return Err(GraphError::NegativeCycle(format!("{:?}", vertices[i])));
    }

    debug!(vertices = n, "floyd-warshall complete");

    Ok(AllPairsPaths {
        vertices,
        index,
        dist,
        next,
    })
}
