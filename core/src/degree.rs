use tracing::trace;

use crate::graph::Graph;

/// Degree information for a single vertex.
#[derive(Debug, Clone, PartialEq)]
pub struct DegreeResult<V> {
    pub vertex: V,
    pub out_degree: usize,
    pub in_degree: usize,
    pub total_degree: usize,
}

/// Decide whether `sequence` is the degree sequence of some simple
/// undirected graph, using the Havel–Hakimi reduction.
///
/// Works on a private copy sorted in descending order; the caller's slice is
/// untouched and the input order is irrelevant. O(n² log n) from re-sorting
/// after every reduction step.
pub fn is_graphical_sequence(sequence: &[usize]) -> bool {
    if sequence.is_empty() {
        return true;
    }

    let mut seq = sequence.to_vec();
    seq.sort_unstable_by(|a, b| b.cmp(a));

    if seq[0] >= seq.len() {
        return false;
    }

    // parity of the sum, without summing
    let odd = seq.iter().fold(0usize, |acc, d| acc ^ (d & 1));
    if odd != 0 {
        return false;
    }

    while !seq.is_empty() {
        let d = seq.remove(0);
        trace!(d, remaining = seq.len(), "havel-hakimi step");

        if d == 0 {
            return true;
        }
        if d > seq.len() {
            return false;
        }

        for value in seq.iter_mut().take(d) {
            // would go negative
            if *value == 0 {
                return false;
            }
            *value -= 1;
        }

        seq.sort_unstable_by(|a, b| b.cmp(a));
    }

    true
}

/// Sum of out-degrees is even: a necessary condition for a graph stored with
/// every edge in both directions. O(V).
pub fn validate_consistency<V: Ord + Clone>(graph: &Graph<V>) -> bool {
    let total: usize = graph.vertices().map(|v| graph.out_degree(v)).sum();
    total % 2 == 0
}

/// Out-degree of every vertex, sorted descending.
pub fn extract_degree_sequence<V: Ord + Clone>(graph: &Graph<V>) -> Vec<usize> {
    let mut degrees: Vec<usize> = graph.vertices().map(|v| graph.out_degree(v)).collect();
    degrees.sort_unstable_by(|a, b| b.cmp(a));
    degrees
}

/// Return vertices ranked by degree (total connections).
///
/// If `top_n` is 0, returns all vertices. Otherwise returns the top N by
/// total degree (descending). Ties are broken by vertex (ascending).
pub fn degree_report<V: Ord + Clone>(graph: &Graph<V>, top_n: usize) -> Vec<DegreeResult<V>> {
    let mut results: Vec<DegreeResult<V>> = graph
        .vertices()
        .map(|v| {
            let out_degree = graph.out_degree(v);
            let in_degree = graph.in_degree(v);
            DegreeResult {
                vertex: v.clone(),
                out_degree,
                in_degree,
                total_degree: out_degree + in_degree,
            }
        })
        .collect();

    // vertices() is ascending and the sort is stable, so ties keep vertex order
    results.sort_by(|a, b| b.total_degree.cmp(&a.total_degree));

    if top_n > 0 && top_n < results.len() {
        results.truncate(top_n);
    }

    results
}
