//! Articulation point (cut vertex) detection.
//!
//! # Overview
//!
//! A node is an articulation point when removing it, together with its
//! incident edges, splits its component in two or more. Direction is ignored:
//! cut vertices are defined on the undirected skeleton.
//!
//! # Algorithm
//!
//! Depth-first search assigning each node a discovery time `disc` and a
//! low-link `low` (the smallest discovery time reachable from the node's DFS
//! subtree through at most one back-edge). One counter is shared by the whole
//! DFS forest and never reset between trees.
//!
//! For a node `u` and each neighbor `v`:
//!
//! - `v` unvisited: `v` becomes a tree child. After it is finished,
//!   `low[u] = min(low[u], low[v])`, and `u` is a cut vertex if it is a tree
//!   root with more than one child, or a non-root with `low[v] >= disc[u]`.
//! - `v` visited and not `u`'s tree parent: back-edge,
//!   `low[u] = min(low[u], disc[v])`.
//!
//! A node is a tree root exactly when it has no parent entry, which holds for
//! every node the outer sweep starts a new tree from.
//!
//! The search runs on an explicit frame stack; a finished frame hands its
//! low-link to the frame below it, which is always its tree parent.
//!
//! Self-loops and parallel edges are not filtered. They never panic, but the
//! result for multigraphs is not specified.

#![allow(clippy::module_name_repetitions)]

use std::collections::{HashMap, HashSet};

use tracing::{debug, instrument};

use crate::graph::adjacency::{Adjacency, build_adjacency};
use crate::model::{Edge, Node, NodeId, NodeKey};

/// Set of cut vertices. Iteration order is unspecified.
pub type ArticulationPoints<K = NodeId> = HashSet<K>;

/// Find every articulation point of the undirected skeleton.
#[must_use]
#[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn find_articulation_points<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>]) -> ArticulationPoints<K> {
    let adjacency = build_adjacency(nodes, edges, false);
    let mut search = CutVertexSearch::new(&adjacency, nodes.len());

    for node in nodes {
        if !search.disc.contains_key(&node.id) {
            search.run_tree(&node.id);
        }
    }

    debug!(points = search.points.len(), "articulation points found");
    search.points
}

// ---------------------------------------------------------------------------
// Search state
// ---------------------------------------------------------------------------

/// One node being explored.
struct Frame<'a, K> {
    node: K,
    neighbors: &'a [K],
    cursor: usize,
    children: usize,
}

/// Discovery/low-link bookkeeping owned by one call.
struct CutVertexSearch<'a, K: NodeKey> {
    adjacency: &'a Adjacency<K>,
    disc: HashMap<K, usize>,
    low: HashMap<K, usize>,
    parent: HashMap<K, K>,
    time: usize,
    points: HashSet<K>,
}

impl<'a, K: NodeKey> CutVertexSearch<'a, K> {
    fn new(adjacency: &'a Adjacency<K>, capacity: usize) -> Self {
        Self {
            adjacency,
            disc: HashMap::with_capacity(capacity),
            low: HashMap::with_capacity(capacity),
            parent: HashMap::new(),
            time: 0,
            points: HashSet::new(),
        }
    }

    fn discover(&mut self, node: &K) -> Frame<'a, K> {
        self.time += 1;
        self.disc.insert(node.clone(), self.time);
        self.low.insert(node.clone(), self.time);
        Frame {
            node: node.clone(),
            neighbors: self.adjacency.neighbors(node),
            cursor: 0,
            children: 0,
        }
    }

    fn disc_of(&self, node: &K) -> usize {
        self.disc.get(node).copied().unwrap_or(usize::MAX)
    }

    fn low_of(&self, node: &K) -> usize {
        self.low.get(node).copied().unwrap_or(usize::MAX)
    }

    fn lower(&mut self, node: &K, candidate: usize) {
        if let Some(low) = self.low.get_mut(node) {
            *low = (*low).min(candidate);
        }
    }

    /// Explore the DFS tree rooted at `root`.
    fn run_tree(&mut self, root: &K) {
        let mut stack = vec![self.discover(root)];

        while let Some(frame) = stack.last_mut() {
            let neighbors: &'a [K] = frame.neighbors;
            let Some(v) = neighbors.get(frame.cursor) else {
                // `u` is finished; report to its tree parent (the frame below).
                if let Some(done) = stack.pop() {
                    self.finish_child(stack.last(), &done.node);
                }
                continue;
            };
            frame.cursor += 1;
            let u = frame.node.clone();

            if !self.disc.contains_key(v) {
                frame.children += 1;
                self.parent.insert(v.clone(), u);
                let child = self.discover(v);
                stack.push(child);
            } else if self.parent.get(&u) != Some(v) {
                let back = self.disc_of(v);
                self.lower(&u, back);
            }
        }
    }

    /// Fold a finished child's low-link into its parent and apply the
    /// cut-vertex rules to the parent.
    fn finish_child(&mut self, parent: Option<&Frame<'a, K>>, child: &K) {
        let Some(parent) = parent else {
            return;
        };
        let u = &parent.node;
        let child_low = self.low_of(child);
        self.lower(u, child_low);

        let is_root = !self.parent.contains_key(u);
        if is_root {
            if parent.children > 1 {
                self.points.insert(u.clone());
            }
        } else if child_low >= self.disc_of(u) {
            self.points.insert(u.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
