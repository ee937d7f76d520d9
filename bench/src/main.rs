use std::collections::VecDeque;
use std::fmt::Debug;
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use graphwalk_core::{
    bfs, bfs_distances, bfs_shortest_path, dfs_iterative, dfs_recursive, dijkstra,
    extract_degree_sequence, floyd_warshall, has_cycle_directed, has_cycle_directed_recursive,
    is_graphical_sequence, kruskal_mst, parse_edge_list, prim_mst, validate_consistency,
    AdjacencyList, EdgeMode, Graph,
};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "graphwalk-bench",
    about = "Time graphwalk-core traversals and validators on synthetic or loaded graphs"
)]
struct Args {
    /// Generator to benchmark.
    #[arg(value_enum, default_value_t = Mode::All)]
    mode: Mode,

    /// Target vertex count for generated graphs.
    #[arg(default_value_t = 100_000)]
    node_count: u64,

    /// Largest graph on which the recursive DFS and recursive cycle check run.
    #[arg(long, default_value_t = 10_000)]
    recursive_limit: usize,

    /// Largest graph whose degree sequence is fed to Havel–Hakimi (quadratic).
    #[arg(long, default_value_t = 5_000)]
    havel_hakimi_limit: usize,

    /// Largest graph Floyd–Warshall runs on (cubic time, quadratic memory).
    #[arg(long, default_value_t = 1_000)]
    all_pairs_limit: usize,

    /// Benchmark an undirected edge list (`from to [weight]` per line) instead of a generator.
    #[arg(long)]
    edge_list: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    /// Run every generator.
    All,
    /// Fractal branching tree (deep paths).
    Lsystem,
    /// Preferential attachment via edge sampling (hub-and-spoke).
    Scalefree,
    /// Watts-Strogatz ring lattice + shortcuts.
    Smallworld,
    /// Erdos-Renyi uniform random edges.
    Random,
    /// Two dense cliques connected by a thin bridge.
    Barbell,
    /// Diffusion-limited aggregation (organic branching).
    Dla,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("graphwalk-bench");
    println!("===============");
    println!();

    if let Some(path) = &args.edge_list {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading edge list {}", path.display()))?;
        let graph = parse_edge_list(&text, EdgeMode::Undirected);
        let workload = Workload::from_graph(graph);
        let (Some(start), Some(far)) = (
            workload.graph.vertices().next().cloned(),
            workload.graph.vertices().last().cloned(),
        ) else {
            bail!("edge list {} contains no edges", path.display());
        };
        run_benchmark(&path.display().to_string(), &workload, &start, &far, &args);
        return Ok(());
    }

    if args.node_count < 2 {
        bail!("node_count must be at least 2, got {}", args.node_count);
    }

    let generators: Vec<(&str, fn(u64) -> Workload<u64>)> = match args.mode {
        Mode::Lsystem => vec![("L-system tree", gen_lsystem)],
        Mode::Scalefree => vec![("Scale-free (edge sampling)", gen_scale_free)],
        Mode::Smallworld => vec![("Small-world (Watts-Strogatz)", gen_small_world)],
        Mode::Random => vec![("Erdos-Renyi random", gen_random)],
        Mode::Barbell => vec![("Barbell (clique-bridge-clique)", gen_barbell)],
        Mode::Dla => vec![("DLA (organic branching)", gen_dla)],
        Mode::All => vec![
            ("L-system tree", gen_lsystem as fn(u64) -> Workload<u64>),
            ("Scale-free (edge sampling)", gen_scale_free),
            ("Small-world (Watts-Strogatz)", gen_small_world),
            ("Erdos-Renyi random", gen_random),
            ("Barbell (clique-bridge-clique)", gen_barbell),
            ("DLA (organic branching)", gen_dla),
        ],
    };

    for (name, generator) in generators {
        let t = Instant::now();
        let workload = generator(args.node_count);
        info!(
            generator = name,
            vertices = workload.graph.node_count(),
            elapsed_ms = t.elapsed().as_secs_f64() * 1000.0,
            "graph generated"
        );
        let far = workload.graph.node_count() as u64 - 1;
        run_benchmark(name, &workload, &0, &far, &args);
    }

    Ok(())
}

/// The three views of one graph that the core operations consume.
///
/// `undirected` drives the traversals, `directed` keeps each generated edge
/// one way for cycle detection, `graph` holds the weighted undirected store
/// for degree validation and Dijkstra.
struct Workload<V> {
    undirected: AdjacencyList<V>,
    directed: AdjacencyList<V>,
    graph: Graph<V>,
}

impl<V: Ord + Clone> Workload<V> {
    fn new() -> Self {
        Self {
            undirected: AdjacencyList::new(),
            directed: AdjacencyList::new(),
            graph: Graph::new(),
        }
    }

    fn vertex(&mut self, id: V) {
        self.undirected.add_vertex(id.clone());
        self.directed.add_vertex(id.clone());
        self.graph.add_vertex(id);
    }

    fn edge(&mut self, from: V, to: V, weight: f64) {
        self.undirected.add_edge(from.clone(), to.clone());
        self.directed.add_directed_edge(from.clone(), to.clone());
        self.graph
            .add_weighted_edge(from, to, weight, EdgeMode::Undirected);
    }

    /// Derive the traversal views from an already-undirected store. Each
    /// stored direction becomes a directed edge, so `directed` mirrors it.
    fn from_graph(graph: Graph<V>) -> Self {
        let mut undirected = AdjacencyList::new();
        let mut directed = AdjacencyList::new();
        for v in graph.vertices() {
            undirected.add_vertex(v.clone());
            directed.add_vertex(v.clone());
            for e in graph.neighbors(v) {
                undirected.add_directed_edge(v.clone(), e.target.clone());
                directed.add_directed_edge(v.clone(), e.target.clone());
            }
        }
        Self {
            undirected,
            directed,
            graph,
        }
    }
}

fn ms(t: Instant) -> f64 {
    t.elapsed().as_secs_f64() * 1000.0
}

fn run_benchmark<V: Ord + Clone + Debug>(
    name: &str,
    workload: &Workload<V>,
    start: &V,
    far: &V,
    args: &Args,
) {
    let n = workload.graph.node_count();
    println!("--- {} ---", name);
    println!(
        "{} vertices, {} adjacency entries, density {}",
        n,
        workload.graph.edge_count(),
        workload
            .graph
            .density()
            .map(|d| format!("{:.6}", d))
            .unwrap_or_else(|| "n/a".into())
    );
    println!();
    println!("{:<28} {:>14} {:>10}", "operation", "result", "time");
    println!("{:-<28} {:->14} {:->10}", "", "", "");

    let t = Instant::now();
    match bfs(&workload.undirected, start) {
        Ok(order) => row("bfs", order.len().to_string(), t),
        Err(e) => warn!(error = %e, "bfs failed"),
    }

    let t = Instant::now();
    let distances = bfs_distances(&workload.undirected, start);
    let eccentricity = distances.values().max().copied().unwrap_or(0);
    row("bfs_distances (max hops)", eccentricity.to_string(), t);

    let t = Instant::now();
    let path = bfs_shortest_path(&workload.undirected, start, far);
    row(
        "bfs_shortest_path (hops)",
        path.map(|p| (p.len() - 1).to_string())
            .unwrap_or_else(|| "none".into()),
        t,
    );

    let t = Instant::now();
    let iterative = dfs_iterative(&workload.undirected, start);
    if let Ok(order) = &iterative {
        row("dfs_iterative", order.len().to_string(), t);
    }

    if n <= args.recursive_limit {
        let t = Instant::now();
        let recursive = dfs_recursive(&workload.undirected, start);
        if let Ok(order) = &recursive {
            row("dfs_recursive", order.len().to_string(), t);
        }
        if recursive != iterative {
            warn!("recursive and iterative DFS orders differ");
        }
    }

    let t = Instant::now();
    let cyclic = has_cycle_directed(&workload.directed);
    row("has_cycle_directed", cyclic.to_string(), t);

    if n <= args.recursive_limit {
        let t = Instant::now();
        let cyclic_rec = has_cycle_directed_recursive(&workload.directed);
        row("has_cycle_directed_recursive", cyclic_rec.to_string(), t);
    }

    let t = Instant::now();
    row(
        "validate_consistency",
        validate_consistency(&workload.graph).to_string(),
        t,
    );

    let t = Instant::now();
    let sequence = extract_degree_sequence(&workload.graph);
    row(
        "extract_degree_sequence",
        sequence.first().copied().unwrap_or(0).to_string(),
        t,
    );

    if n <= args.havel_hakimi_limit {
        let t = Instant::now();
        row(
            "is_graphical_sequence",
            is_graphical_sequence(&sequence).to_string(),
            t,
        );
    }

    let t = Instant::now();
    match dijkstra(&workload.graph, start) {
        Ok(sp) => row(
            "dijkstra (cost to far)",
            sp.distance(far)
                .map(|d| format!("{:.1}", d))
                .unwrap_or_else(|| "none".into()),
            t,
        ),
        Err(e) => warn!(error = %e, "dijkstra failed"),
    }

    if n <= args.all_pairs_limit {
        let t = Instant::now();
        match floyd_warshall(&workload.graph) {
            Ok(ap) => row(
                "floyd_warshall (cost to far)",
                ap.distance(start, far)
                    .map(|d| format!("{:.1}", d))
                    .unwrap_or_else(|| "none".into()),
                t,
            ),
            Err(e) => warn!(error = %e, "floyd_warshall failed"),
        }
    }

    let t = Instant::now();
    match prim_mst(&workload.graph, start) {
        Ok(tree) => row("prim_mst (weight)", format!("{:.1}", tree.total_weight), t),
        Err(e) => warn!(error = %e, "prim_mst failed"),
    }

    let t = Instant::now();
    match kruskal_mst(&workload.graph) {
        Ok(forest) => row(
            "kruskal_mst (weight)",
            format!("{:.1}", forest.total_weight),
            t,
        ),
        Err(e) => warn!(error = %e, "kruskal_mst failed"),
    }

    println!();
}

fn row(op: &str, result: String, t: Instant) {
    println!("{:<28} {:>14} {:>8.1}ms", op, result, ms(t));
}

// ---------------------------------------------------------------------------
// Generators: O(n + edges), single-threaded, deterministic
// ---------------------------------------------------------------------------

/// Simple LCG for deterministic, fast pseudo-random numbers.
struct FastRng(u64);

impl FastRng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next(&mut self, max: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 33) % max
    }
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1u64 << 53) as f64
    }
    /// Edge weight in [1, 10).
    fn weight(&mut self) -> f64 {
        1.0 + 9.0 * self.next_f64()
    }
}

/// L-system fractal tree: every vertex spawns three children.
///
/// Deep paths with exponential width; acyclic when read as directed.
fn gen_lsystem(node_count: u64) -> Workload<u64> {
    let mut w = Workload::new();
    let mut rng = FastRng::new(42);
    let branching = 3u64;
    w.vertex(0);

    let mut next_id: u64 = 1;
    let mut frontier: Vec<u64> = vec![0];

    while next_id < node_count && !frontier.is_empty() {
        let mut next_frontier = Vec::with_capacity(frontier.len() * branching as usize);
        for &parent in &frontier {
            for _ in 0..branching {
                if next_id >= node_count {
                    break;
                }
                let child = next_id;
                next_id += 1;
                w.edge(parent, child, rng.weight());
                next_frontier.push(child);
            }
        }
        frontier = next_frontier;
    }

    w
}

/// Scale-free via edge-list sampling (O(edges), not O(n²)).
///
/// Picking a random endpoint of an existing edge attaches proportionally to
/// degree.
fn gen_scale_free(node_count: u64) -> Workload<u64> {
    let edges_per_node = 10u64;
    let mut w = Workload::new();
    let mut rng = FastRng::new(12345);
    let mut edge_endpoints: Vec<u64> =
        Vec::with_capacity((node_count * edges_per_node * 2) as usize);

    let seed = 5u64.min(node_count);
    for i in 0..seed {
        w.vertex(i);
    }
    for i in 0..seed {
        for j in (i + 1)..seed {
            w.edge(i, j, rng.weight());
            edge_endpoints.push(i);
            edge_endpoints.push(j);
        }
    }

    for new_node in seed..node_count {
        w.vertex(new_node);
        let attach = edges_per_node.min(new_node);
        for _ in 0..attach {
            let idx = rng.next(edge_endpoints.len() as u64) as usize;
            let target = edge_endpoints[idx];
            if target != new_node {
                w.edge(new_node, target, rng.weight());
                edge_endpoints.push(new_node);
                edge_endpoints.push(target);
            }
        }
    }

    w
}

/// Small-world (Watts-Strogatz): ring lattice with random rewiring.
fn gen_small_world(node_count: u64) -> Workload<u64> {
    let k = 10u64.min(node_count - 1);
    let p = 0.05f64;
    let mut w = Workload::new();
    let mut rng = FastRng::new(67890);

    for i in 0..node_count {
        w.vertex(i);
    }

    for i in 0..node_count {
        for j in 1..=k {
            let neighbor = (i + j) % node_count;
            let weight = rng.weight();
            if rng.next_f64() < p {
                let rewired = rng.next(node_count);
                w.edge(i, if rewired != i { rewired } else { neighbor }, weight);
            } else {
                w.edge(i, neighbor, weight);
            }
        }
    }

    w
}

/// Erdos-Renyi: ~10 uniform random edges per vertex.
fn gen_random(node_count: u64) -> Workload<u64> {
    let target_edges = node_count * 10;
    let mut w = Workload::new();
    let mut rng = FastRng::new(54321);

    for i in 0..node_count {
        w.vertex(i);
    }

    for _ in 0..target_edges {
        let from = rng.next(node_count);
        let to = rng.next(node_count);
        if from != to {
            w.edge(from, to, rng.weight());
        }
    }

    w
}

/// Barbell: two dense clusters joined by a chain of bridge vertices.
///
/// Worst case for a path through a bottleneck.
fn gen_barbell(node_count: u64) -> Workload<u64> {
    let bridge_len = 10u64.min(node_count / 2);
    let clique_size = ((node_count - bridge_len) / 2).max(1);
    let mut w = Workload::new();
    let mut rng = FastRng::new(99999);

    let fanout = 20u64.min(clique_size.saturating_sub(1));
    let cluster = |w: &mut Workload<u64>, offset: u64, rng: &mut FastRng| {
        for i in 0..clique_size {
            w.vertex(offset + i);
        }
        for i in 0..clique_size {
            for _ in 0..fanout {
                let target = rng.next(clique_size);
                if target != i {
                    w.edge(offset + i, offset + target, rng.weight());
                }
            }
        }
    };

    cluster(&mut w, 0, &mut rng);

    let bridge_start = clique_size;
    let mut prev = clique_size - 1;
    for i in 0..bridge_len {
        let id = bridge_start + i;
        w.edge(prev, id, 1.0);
        prev = id;
    }

    let b_start = bridge_start + bridge_len;
    cluster(&mut w, b_start, &mut rng);
    w.edge(prev, b_start, 1.0);

    // pad so the far vertex id is node_count - 1
    for id in (b_start + clique_size)..node_count {
        w.edge(id - 1, id, 1.0);
    }

    w
}

/// DLA (Diffusion-Limited Aggregation): organic, tree-like growth.
///
/// Each new vertex attaches to a random recent "surface" vertex, with an
/// occasional long-range second edge that closes loops.
fn gen_dla(node_count: u64) -> Workload<u64> {
    let mut w = Workload::new();
    let mut rng = FastRng::new(77777);
    w.vertex(0);

    let surface_max = 10000usize;
    let mut surface: VecDeque<u64> = VecDeque::with_capacity(surface_max + 1);
    surface.push_back(0);

    for new_node in 1..node_count {
        let attach_to = surface[rng.next(surface.len() as u64) as usize];
        w.edge(new_node, attach_to, rng.weight());

        if rng.next(10) == 0 && new_node > 1 {
            let other = rng.next(new_node);
            if other != attach_to {
                w.edge(new_node, other, rng.weight());
            }
        }

        surface.push_back(new_node);
        if surface.len() > surface_max {
            surface.pop_front();
        }
    }

    w
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generators_hit_target_size() {
        for generator in [
            gen_lsystem as fn(u64) -> Workload<u64>,
            gen_scale_free,
            gen_small_world,
            gen_random,
            gen_barbell,
            gen_dla,
        ] {
            let w = generator(500);
            assert_eq!(w.graph.node_count(), 500);
            assert_eq!(w.undirected.node_count(), 500);
            assert!(w.graph.contains(&499));
        }
    }

    #[test]
    fn test_lsystem_directed_view_is_acyclic() {
        let w = gen_lsystem(1_000);
        assert!(!has_cycle_directed(&w.directed));
        assert!(validate_consistency(&w.graph));
    }

    #[test]
    fn test_barbell_path_crosses_bridge() {
        let w = gen_barbell(100);
        let path = bfs_shortest_path(&w.undirected, &0, &99).unwrap();
        assert!(path.contains(&45));
    }

    #[test]
    fn test_workload_from_edge_list() {
        let graph = parse_edge_list("a b\nb c 2\n", EdgeMode::Undirected);
        let w = Workload::from_graph(graph);
        assert_eq!(
            bfs(&w.undirected, &"a".to_string()).unwrap(),
            vec!["a", "b", "c"]
        );
        assert!(has_cycle_directed(&w.directed));
        assert_eq!(kruskal_mst(&w.graph).unwrap().total_weight, 3.0);
    }

    #[test]
    fn test_args_parse() {
        let args =
            Args::try_parse_from(["graphwalk-bench", "dla", "2000", "--recursive-limit", "5"])
                .unwrap();
        assert_eq!(args.mode, Mode::Dla);
        assert_eq!(args.node_count, 2000);
        assert_eq!(args.recursive_limit, 5);
        assert_eq!(args.all_pairs_limit, 1_000);
        assert!(args.edge_list.is_none());
    }
}
