//! Ready-made graphs: the teaching sample and seeded random graphs.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::model::{Edge, GraphSnapshot, Node, NodeId};
use crate::palette::DEFAULT_NODE_COLOR;

/// Canvas area random nodes are placed in.
const CANVAS_X: (f64, f64) = (50.0, 850.0);
const CANVAS_Y: (f64, f64) = (50.0, 550.0);

const SAMPLE_NODES: [(i64, f64, f64); 8] = [
    (1, 200.0, 150.0),
    (2, 350.0, 150.0),
    (3, 500.0, 150.0),
    (4, 275.0, 280.0),
    (5, 425.0, 280.0),
    (6, 350.0, 400.0),
    (7, 650.0, 200.0),
    (8, 750.0, 300.0),
];

const SAMPLE_EDGES: [(i64, i64); 9] = [
    (1, 2),
    (2, 3),
    (1, 4),
    (2, 4),
    (2, 5),
    (3, 5),
    (4, 5),
    (5, 6),
    (7, 8),
];

/// The eight-node undirected sample: a six-node cluster `{1..6}` and a
/// separate pair `{7, 8}`. Node 5 is its only cut vertex.
#[must_use]
pub fn sample_graph() -> GraphSnapshot {
    let nodes = SAMPLE_NODES
        .iter()
        .map(|&(id, x, y)| Node {
            color: Some(DEFAULT_NODE_COLOR.to_string()),
            ..Node::new(NodeId::Int(id)).at(x, y).with_label(id.to_string())
        })
        .collect();

    let edges = SAMPLE_EDGES
        .iter()
        .zip(1..)
        .map(|(&(a, b), n)| Edge::new(NodeId::Int(a), NodeId::Int(b)).with_id(format!("e{n}")))
        .collect();

    GraphSnapshot {
        nodes,
        edges,
        directed: false,
    }
}

/// A reproducible random simple graph.
///
/// Nodes get ids `1..=node_count` at random canvas positions. Edges follow
/// the editing rules of [`GraphSnapshot::add_edge`]: no self-loops and at
/// most one edge per node pair, so `edge_count` is capped at
/// `n * (n - 1) / 2`. The same arguments always produce the same snapshot.
#[must_use]
#[instrument]
pub fn random_graph(node_count: usize, edge_count: usize, seed: u64) -> GraphSnapshot {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut graph = GraphSnapshot::new(false);

    let ids: Vec<NodeId> = (0..node_count)
        .map(|_| {
            let x = rng.gen_range(CANVAS_X.0..CANVAS_X.1).round();
            let y = rng.gen_range(CANVAS_Y.0..CANVAS_Y.1).round();
            graph.add_node(x, y)
        })
        .collect();

    let max_edges = node_count * node_count.saturating_sub(1) / 2;
    let target = edge_count.min(max_edges);
    let pairs = if target > max_edges / 2 {
        dense_pairs(&mut rng, node_count, target)
    } else {
        sparse_pairs(&mut rng, node_count, target)
    };

    for (a, b) in pairs {
        graph.edges.push(
            Edge::new(ids[a].clone(), ids[b].clone()).with_id(format!("e{}", graph.edges.len() + 1)),
        );
    }

    debug!(nodes = graph.nodes.len(), edges = graph.edges.len(), "random graph generated");
    graph
}

/// Shuffle every pair and keep the first `count`.
fn dense_pairs(rng: &mut StdRng, n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut all: Vec<(usize, usize)> = (0..n).flat_map(|a| (a + 1..n).map(move |b| (a, b))).collect();
    all.shuffle(rng);
    all.truncate(count);
    all
}

/// Draw random pairs until `count` distinct ones are found.
fn sparse_pairs(rng: &mut StdRng, n: usize, count: usize) -> Vec<(usize, usize)> {
    let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(count);
    let mut pairs = Vec::with_capacity(count);
    while pairs.len() < count {
        let a = rng.gen_range(0..n);
        let b = rng.gen_range(0..n);
        if a == b {
            continue;
        }
        let key = (a.min(b), a.max(b));
        if seen.insert(key) {
            pairs.push((a, b));
        }
    }
    pairs
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_graph_shape() {
        let g = sample_graph();
        assert_eq!(g.nodes.len(), 8);
        assert_eq!(g.edges.len(), 9);
        assert!(!g.directed);
        assert_eq!(g.edges[0].id, "e1");
        assert_eq!(g.edges[8].id, "e9");
        assert_eq!(g.edges[8].source, NodeId::Int(7));
        let n4 = g.node(&NodeId::Int(4)).expect("node 4");
        assert!((n4.x - 275.0).abs() < f64::EPSILON);
        assert_eq!(n4.label.as_deref(), Some("4"));
        assert_eq!(n4.color.as_deref(), Some(DEFAULT_NODE_COLOR));
    }

    #[test]
    fn random_graph_is_reproducible() {
        assert_eq!(random_graph(30, 60, 7), random_graph(30, 60, 7));
        assert_ne!(random_graph(30, 60, 7), random_graph(30, 60, 8));
    }

    #[test]
    fn random_graph_obeys_editing_rules() {
        for (n, m) in [(10, 5), (10, 40), (10, 45), (10, 100), (1, 3), (0, 0)] {
            let g = random_graph(n, m, 42);
            assert_eq!(g.nodes.len(), n);
            assert_eq!(g.edges.len(), m.min(n * n.saturating_sub(1) / 2));
            let mut pairs = HashSet::new();
            for e in &g.edges {
                assert_ne!(e.source, e.target, "self-loop");
                assert!(g.contains_node(&e.source) && g.contains_node(&e.target));
                let key = if e.source < e.target {
                    (e.source.clone(), e.target.clone())
                } else {
                    (e.target.clone(), e.source.clone())
                };
                assert!(pairs.insert(key), "duplicate edge {}", e.id);
            }
        }
    }

    #[test]
    fn random_graph_ids_are_sequential() {
        let g = random_graph(4, 0, 1);
        let ids: Vec<NodeId> = g.node_ids().cloned().collect();
        assert_eq!(ids, (1..=4).map(NodeId::Int).collect::<Vec<_>>());
    }
}
