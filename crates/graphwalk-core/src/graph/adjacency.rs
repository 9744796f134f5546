//! Neighbor lookup built from a node/edge list.
//!
//! ## Edge Direction
//!
//! An edge `A → B` always lists `B` among `A`'s neighbors. For undirected
//! graphs it also lists `A` among `B`'s neighbors. Neighbor order is edge
//! insertion order, which is what makes traversal tie-breaking reproducible.
//!
//! ## Dangling references
//!
//! Edges may name ids that are not in the node list. Such ids get an entry on
//! demand instead of causing a failure; traversals only reach them through
//! edges, never through the component sweep.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashMap;

use crate::model::{Edge, Node, NodeKey};

/// Node id → ordered neighbor ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjacency<K: NodeKey> {
    lists: HashMap<K, Vec<K>>,
}

impl<K: NodeKey> Adjacency<K> {
    /// Neighbors of `id` in edge-insertion order.
    ///
    /// Unknown ids have no neighbors.
    #[must_use]
    pub fn neighbors(&self, id: &K) -> &[K] {
        self.lists.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns `true` if `id` has an entry (node or edge endpoint).
    #[must_use]
    pub fn contains(&self, id: &K) -> bool {
        self.lists.contains_key(id)
    }

    /// Number of neighbor entries of `id`, counting duplicates.
    #[must_use]
    pub fn degree(&self, id: &K) -> usize {
        self.neighbors(id).len()
    }

    /// Number of ids with an entry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Returns `true` if no id has an entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    fn push(&mut self, from: &K, to: &K) {
        self.lists.entry(from.clone()).or_default().push(to.clone());
    }
}

/// Build the neighbor lookup for a snapshot.
///
/// Every node in `nodes` gets an entry, so isolated nodes map to an empty
/// list rather than being absent. When `directed` is `false` each edge is
/// mirrored.
#[must_use]
pub fn build_adjacency<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>], directed: bool) -> Adjacency<K> {
    let mut lists: HashMap<K, Vec<K>> = HashMap::with_capacity(nodes.len());
    for node in nodes {
        lists.entry(node.id.clone()).or_default();
    }

    let mut adjacency = Adjacency { lists };
    for edge in edges {
        adjacency.push(&edge.source, &edge.target);
        if directed {
            // Make sure the target has an (possibly empty) entry too.
            adjacency.lists.entry(edge.target.clone()).or_default();
        } else {
            adjacency.push(&edge.target, &edge.source);
        }
    }

    adjacency
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
