use std::collections::BTreeSet;

use graphwalk_core::{
    bfs, bfs_distances, bfs_shortest_path, dfs_iterative, dfs_recursive,
    extract_degree_sequence, has_cycle_directed, has_cycle_directed_recursive,
    is_graphical_sequence, validate_consistency, AdjacencyList, EdgeMode, Graph,
};
use proptest::prelude::*;

fn edge_list() -> impl Strategy<Value = Vec<(u8, u8)>> {
    proptest::collection::vec((0u8..20, 0u8..20), 1..60)
}

fn undirected(edges: &[(u8, u8)]) -> AdjacencyList<u8> {
    let mut g = AdjacencyList::new();
    for &(u, v) in edges {
        g.add_edge(u, v);
    }
    g
}

fn directed(edges: &[(u8, u8)]) -> AdjacencyList<u8> {
    let mut g = AdjacencyList::new();
    for &(u, v) in edges {
        g.add_directed_edge(u, v);
    }
    g
}

proptest! {
    #[test]
    fn test_dfs_forms_agree(edges in edge_list(), directed_graph in any::<bool>()) {
        let g = if directed_graph { directed(&edges) } else { undirected(&edges) };
        for start in g.vertices() {
            let rec = dfs_recursive(&g, start).unwrap();
            let iter = dfs_iterative(&g, start).unwrap();
            prop_assert_eq!(rec, iter, "DFS orders differ from start {}", start);
        }
    }

    #[test]
    fn test_bfs_visits_reachable_once(edges in edge_list()) {
        let g = directed(&edges);
        let start = edges[0].0;
        let order = bfs(&g, &start).unwrap();
        let unique: BTreeSet<u8> = order.iter().copied().collect();
        prop_assert_eq!(unique.len(), order.len());

        let reachable: BTreeSet<u8> = bfs_distances(&g, &start).into_keys().collect();
        prop_assert_eq!(unique, reachable);
    }

    #[test]
    fn test_distance_matches_path_length(edges in edge_list()) {
        let g = undirected(&edges);
        let start = edges[0].0;
        for (target, dist) in bfs_distances(&g, &start) {
            let path = bfs_shortest_path(&g, &start, &target).unwrap();
            prop_assert_eq!(path.len() - 1, dist);
            prop_assert_eq!(path.first(), Some(&start));
            prop_assert_eq!(path.last(), Some(&target));
        }
    }

    #[test]
    fn test_graphical_permutation_invariant(
        (seq, shuffled) in proptest::collection::vec(0usize..8, 0..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(is_graphical_sequence(&seq), is_graphical_sequence(&shuffled));
    }

    #[test]
    fn test_simple_graph_round_trip(edges in edge_list()) {
        let simple: BTreeSet<(u8, u8)> = edges
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();

        let mut g = Graph::new();
        for (u, v) in simple {
            g.add_weighted_edge(u, v, 1.0, EdgeMode::Undirected);
        }

        prop_assert!(validate_consistency(&g));
        prop_assert!(is_graphical_sequence(&extract_degree_sequence(&g)));
    }

    #[test]
    fn test_forward_edges_are_acyclic(edges in edge_list()) {
        // Edges only from smaller to larger ids admit a topological order
        let dag: Vec<(u8, u8)> = edges
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        let g = directed(&dag);
        prop_assert!(!has_cycle_directed(&g));
        prop_assert!(!has_cycle_directed_recursive(&g));
    }

    #[test]
    fn test_back_edge_in_any_component(edges in edge_list(), pick in any::<prop::sample::Index>()) {
        let dag: Vec<(u8, u8)> = edges
            .iter()
            .filter(|(u, v)| u != v)
            .map(|&(u, v)| (u.min(v), u.max(v)))
            .collect();
        prop_assume!(!dag.is_empty());

        // Acyclic component on 0..20, reversed edge placed in a shifted copy
        let mut g = directed(&dag);
        let (u, v) = dag[pick.index(dag.len())];
        for &(a, b) in &dag {
            g.add_directed_edge(a + 100, b + 100);
        }
        g.add_directed_edge(v + 100, u + 100);

        prop_assert!(has_cycle_directed(&g));
        prop_assert!(has_cycle_directed_recursive(&g));
    }

    #[test]
    fn test_cycle_forms_agree(edges in edge_list()) {
        let g = directed(&edges);
        prop_assert_eq!(has_cycle_directed(&g), has_cycle_directed_recursive(&g));
    }
}
