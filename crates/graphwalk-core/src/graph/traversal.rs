//! Breadth-first and depth-first visiting orders across all components.
//!
//! # Design
//!
//! - **Seed first**: the traversal starts at the requested node. If that node
//!   is not in the snapshot it falls back to the first node in caller order.
//! - **Full coverage**: once the seed's reachable set is exhausted, the node
//!   list is swept in caller order and the same procedure restarts from every
//!   node not yet visited. One call therefore covers a disconnected graph.
//! - **BFS** marks nodes visited when they are enqueued, so no node is ever
//!   queued twice.
//! - **DFS** is pre-order: a node is appended before any of its descendants.
//!   It runs on an explicit stack of `(neighbors, cursor)` frames, so depth
//!   is bounded by memory rather than by the call stack.
//!
//! Both run in O(V+E); cycles and self-loops terminate through the visited
//! set.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument, warn};

use crate::graph::adjacency::{Adjacency, build_adjacency};
use crate::model::{Algorithm, Edge, Node, NodeKey};

/// Breadth-first visiting order over every component.
///
/// See [`traverse`] for start-node fallback and sweep rules.
#[must_use]
pub fn bfs<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>], start: Option<&K>, directed: bool) -> Vec<K> {
    traverse(Algorithm::Bfs, nodes, edges, start, directed)
}

/// Depth-first (pre-order) visiting order over every component.
///
/// See [`traverse`] for start-node fallback and sweep rules.
#[must_use]
pub fn dfs<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>], start: Option<&K>, directed: bool) -> Vec<K> {
    traverse(Algorithm::Dfs, nodes, edges, start, directed)
}

/// Visiting order for `algorithm`, starting at `start`.
///
/// - Empty `nodes` yields an empty order.
/// - A missing or unknown `start` falls back to the first node.
/// - After the seed's component, every unvisited node (in caller order)
///   starts a new component.
///
/// The result contains every node exactly once when no edge references an id
/// outside `nodes`. Dangling ids appear only if some edge reaches them.
#[must_use]
#[instrument(skip_all, fields(algorithm = %algorithm, nodes = nodes.len(), edges = edges.len(), directed = directed))]
pub fn traverse<K: NodeKey>(
    algorithm: Algorithm,
    nodes: &[Node<K>],
    edges: &[Edge<K>],
    start: Option<&K>,
    directed: bool,
) -> Vec<K> {
    if nodes.is_empty() {
        warn!("no nodes provided");
        return Vec::new();
    }

    let Some(seed) = resolve_start(nodes, start) else {
        return Vec::new();
    };

    let adjacency = build_adjacency(nodes, edges, directed);
    let mut walk = Walk::new(&adjacency, nodes.len());

    walk.component(algorithm, seed);
    for node in nodes {
        walk.component(algorithm, &node.id);
    }

    debug!(visited = walk.order.len(), "traversal complete");
    walk.order
}

/// The requested start node if present, else the first node.
fn resolve_start<'a, K: NodeKey>(nodes: &'a [Node<K>], start: Option<&'a K>) -> Option<&'a K> {
    match start {
        Some(id) if nodes.iter().any(|n| n.id == *id) => Some(id),
        Some(_) => {
            warn!("start node not in graph; falling back to first node");
            nodes.first().map(|n| &n.id)
        }
        None => nodes.first().map(|n| &n.id),
    }
}

// ---------------------------------------------------------------------------
// Walk state
// ---------------------------------------------------------------------------

/// Visited set and output shared by every component of one call.
struct Walk<'a, K: NodeKey> {
    adjacency: &'a Adjacency<K>,
    visited: HashSet<K>,
    order: Vec<K>,
}

impl<'a, K: NodeKey> Walk<'a, K> {
    fn new(adjacency: &'a Adjacency<K>, capacity: usize) -> Self {
        Self {
            adjacency,
            visited: HashSet::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    fn component(&mut self, algorithm: Algorithm, start: &K) {
        if self.visited.contains(start) {
            return;
        }
        match algorithm {
            Algorithm::Bfs => self.bfs_from(start),
            Algorithm::Dfs => self.dfs_from(start),
        }
    }

    fn bfs_from(&mut self, start: &K) {
        let adjacency = self.adjacency;
        self.visited.insert(start.clone());
        let mut queue: VecDeque<K> = VecDeque::from([start.clone()]);

        while let Some(current) = queue.pop_front() {
            for neighbor in adjacency.neighbors(&current) {
                if self.visited.insert(neighbor.clone()) {
                    queue.push_back(neighbor.clone());
                }
            }
            self.order.push(current);
        }
    }

    fn dfs_from(&mut self, start: &K) {
        let adjacency = self.adjacency;
        self.visited.insert(start.clone());
        self.order.push(start.clone());

        // Each frame: (neighbors of the node being explored, next index).
        let mut stack: Vec<(&'a [K], usize)> = vec![(adjacency.neighbors(start), 0)];

        while let Some(frame) = stack.last_mut() {
            let (neighbors, cursor) = *frame;
            let Some(next) = neighbors.get(cursor) else {
                stack.pop();
                continue;
            };
            frame.1 = cursor + 1;

            if self.visited.insert(next.clone()) {
                self.order.push(next.clone());
                stack.push((adjacency.neighbors(next), 0));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
