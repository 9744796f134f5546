//! Connected components over the undirected skeleton of a snapshot.
//!
//! Edge direction is ignored: a connected component is defined on the
//! underlying undirected structure. Nodes are swept in caller order and each
//! unvisited node seeds a breadth-first walk whose visit order becomes one
//! component, so both the component order and the member order are
//! reproducible.

use std::collections::{HashMap, HashSet, VecDeque};

use tracing::{debug, instrument};

use crate::graph::adjacency::{Adjacency, build_adjacency};
use crate::model::{Edge, Node, NodeKey};

/// Partition `nodes` into connected components.
///
/// Every node appears in exactly one component, components are non-empty and
/// isolated nodes form singletons. Ids that only appear as dangling edge
/// endpoints are pulled into the component of the node they touch.
#[must_use]
#[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
pub fn find_connected_components<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>]) -> Vec<Vec<K>> {
    let adjacency = build_adjacency(nodes, edges, false);
    let mut visited: HashSet<K> = HashSet::with_capacity(nodes.len());
    let mut components = Vec::new();

    for node in nodes {
        if visited.contains(&node.id) {
            continue;
        }
        components.push(collect_component(&adjacency, &node.id, &mut visited));
    }

    debug!(components = components.len(), "components found");
    components
}

/// Map every member id to the index of its component.
#[must_use]
pub fn component_index<K: NodeKey>(components: &[Vec<K>]) -> HashMap<K, usize> {
    components
        .iter()
        .enumerate()
        .flat_map(|(idx, members)| members.iter().map(move |id| (id.clone(), idx)))
        .collect()
}

fn collect_component<K: NodeKey>(adjacency: &Adjacency<K>, start: &K, visited: &mut HashSet<K>) -> Vec<K> {
    let mut component = Vec::new();
    let mut queue: VecDeque<K> = VecDeque::from([start.clone()]);
    visited.insert(start.clone());

    while let Some(current) = queue.pop_front() {
        for neighbor in adjacency.neighbors(&current) {
            if visited.insert(neighbor.clone()) {
                queue.push_back(neighbor.clone());
            }
        }
        component.push(current);
    }

    component
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
