//! graphwalk-core: adjacency-list graphs and the textbook algorithms over them.
//!
//! Two graph representations live here. [`Graph`] is the weighted store used
//! for degree analysis, weighted paths and spanning trees; [`AdjacencyList`]
//! is the plain neighbour map the traversals run on. Every traversal explores
//! neighbours in ascending vertex order, so results depend only on graph
//! content and never on insertion order.
//!
//! All algorithms are free functions that own their working state for the
//! duration of one call. Nothing here is synchronised; a graph must not be
//! mutated while a query over it is running.

mod adjacency;
mod cycle;
mod degree;
mod edge_list;
mod error;
mod graph;
mod mst;
mod traversal;
mod weighted;

pub use adjacency::AdjacencyList;
pub use cycle::{has_cycle_directed, has_cycle_directed_recursive, NodeState};
pub use degree::{
    degree_report, extract_degree_sequence, is_graphical_sequence, validate_consistency,
    DegreeResult,
};
pub use edge_list::parse_edge_list;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, EdgeMode, EdgeRecord, Graph, DEFAULT_WEIGHT};
pub use mst::{kruskal_mst, prim_mst, MstResult};
pub use traversal::{bfs, bfs_distances, bfs_shortest_path, dfs_iterative, dfs_recursive};
pub use weighted::{dijkstra, floyd_warshall, AllPairsPaths, ShortestPaths};
