//! Edge-list text ingestion.
//!
//! One record per line: `from to [weight]`, whitespace separated. Blank
//! lines and lines starting with `#` are ignored. Malformed records never
//! abort the load; they are skipped (or given the default weight) with a
//! warning that names the line.

use tracing::{debug, warn};

use crate::graph::{EdgeMode, Graph, DEFAULT_WEIGHT};

/// Parse an edge list into a graph with string vertices.
pub fn parse_edge_list(text: &str, mode: EdgeMode) -> Graph<String> {
    let mut graph = Graph::new();
    let mut skipped = 0usize;

    for (idx, raw) in text.lines().enumerate() {
        let line_num = idx + 1;
        let line = raw.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 2 {
            warn!(line = line_num, content = line, "edge record ignored: missing vertices");
            skipped += 1;
            continue;
        }

        let weight = match parts.get(2) {
            None => DEFAULT_WEIGHT,
            Some(w) => match w.parse::<f64>() {
                Ok(w) => w,
                Err(_) => {
                    warn!(line = line_num, weight = *w, "invalid edge weight, using default");
                    DEFAULT_WEIGHT
                }
            },
        };

        graph.add_weighted_edge(parts[0].to_string(), parts[1].to_string(), weight, mode);
    }

    debug!(
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        skipped,
        "edge list loaded"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    const CITY: &str = "\
# street map
A B 2.0
A C 3
B D 1.5

C E 4.0
";

    fn key(s: &str) -> String {
        s.to_string()
    }

    #[test]
    fn test_parse_directed() {
        let g = parse_edge_list(CITY, EdgeMode::Directed);
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.out_degree(&key("A")), 2);
        assert_eq!(g.out_degree(&key("B")), 1);
        assert_eq!(g.out_degree(&key("E")), 0);
        assert_eq!(g.neighbors(&key("A"))[1].weight, 3.0);
    }

    #[test]
    fn test_parse_undirected() {
        let g = parse_edge_list(CITY, EdgeMode::Undirected);
        assert_eq!(g.edge_count(), 8);
        assert_eq!(g.out_degree(&key("B")), 2);
        assert_eq!(g.neighbors(&key("D"))[0].target, "B");
        assert_eq!(g.neighbors(&key("D"))[0].weight, 1.5);
    }

    #[test]
    fn test_missing_weight_defaults() {
        let g = parse_edge_list("x y\n", EdgeMode::Directed);
        assert_eq!(g.neighbors(&key("x"))[0].weight, 1.0);
    }

    #[test]
    fn test_invalid_weight_defaults() {
        let g = parse_edge_list("x y heavy\n", EdgeMode::Directed);
        assert_eq!(g.neighbors(&key("x"))[0].weight, 1.0);
    }

    #[test]
    fn test_short_lines_skipped() {
        let g = parse_edge_list("lonely\n  \n# c\np q 2\n", EdgeMode::Directed);
        assert_eq!(g.node_count(), 2);
        assert!(!g.contains(&key("lonely")));
    }

    #[test]
    fn test_empty_input() {
        let g = parse_edge_list("", EdgeMode::Undirected);
        assert_eq!(g.node_count(), 0);
    }
}
