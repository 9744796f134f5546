//! Graph analysis engine.
//!
//! # Overview
//!
//! Every function here is a pure computation over a node slice and an edge
//! slice. Derived structures (adjacency, visited sets, discovery times) are
//! built from scratch inside each call and dropped before it returns, so the
//! engine is reentrant and safe to call from any thread.
//!
//! ## Pipeline
//!
//! ```text
//! nodes + edges + directed
//!        ↓  adjacency::build_adjacency()
//! Adjacency (node → neighbors in edge-insertion order)
//!        ├─ traversal::{bfs, dfs}          → Vec<K> visiting order
//!        ├─ components::find_connected_components → Vec<Vec<K>> (undirected)
//!        ├─ articulation::find_articulation_points → HashSet<K> (undirected)
//!        └─ stats::GraphStats::compute     → counts, degree, density
//! ```
//!
//! ## Degradation
//!
//! No operation fails. An empty node set yields an empty result, an unknown
//! start node falls back to the first node, and dangling edges, duplicates
//! and self-loops are absorbed by visited-set bookkeeping.

pub mod adjacency;
pub mod articulation;
pub mod components;
pub mod stats;
pub mod traversal;

// Re-export primary types at module level for convenience.
pub use adjacency::{Adjacency, build_adjacency};
pub use articulation::{ArticulationPoints, find_articulation_points};
pub use components::{component_index, find_connected_components};
pub use stats::GraphStats;
pub use traversal::{bfs, dfs, traverse};
