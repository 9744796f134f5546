#![forbid(unsafe_code)]
//! graphwalk-core library.
//!
//! The graph analysis engine behind the graphwalk teaching tool. Every
//! operation is a pure function of a graph snapshot: nothing is cached or
//! retained between calls, so results are recomputed whenever the caller's
//! node or edge set changes.
//!
//! # Conventions
//!
//! - **Errors**: engine operations never fail. Caller-side helpers (snapshot
//!   editing, decoding, config) return [`error::GraphError`] or `anyhow::Result`.
//! - **Logging**: Use `tracing` macros (`info!`, `warn!`, `error!`, `debug!`, `trace!`).
//!
//! # Typical Usage
//!
//! ```rust
//! use graphwalk_core::graph::{bfs, find_articulation_points, find_connected_components};
//! use graphwalk_core::sample::sample_graph;
//!
//! let g = sample_graph();
//! let order = bfs(&g.nodes, &g.edges, g.nodes.first().map(|n| &n.id), g.directed);
//! assert_eq!(order.len(), g.nodes.len());
//!
//! let components = find_connected_components(&g.nodes, &g.edges);
//! assert_eq!(components.len(), 2);
//!
//! let cut = find_articulation_points(&g.nodes, &g.edges);
//! assert_eq!(cut.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod palette;
pub mod playback;
pub mod sample;

pub use error::{ErrorCode, GraphError};
pub use graph::{
    Adjacency, ArticulationPoints, GraphStats, bfs, build_adjacency, dfs,
    find_articulation_points, find_connected_components, traverse,
};
pub use model::{Algorithm, Edge, GraphSnapshot, Node, NodeId, NodeKey};
pub use palette::{Color, Palette, assign_colors, color_nodes};
pub use playback::{Playback, PlaybackSpeed, reconstruct_frontier};
