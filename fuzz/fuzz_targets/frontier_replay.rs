#![no_main]

use graphwalk_core::{Algorithm, Edge, Node, reconstruct_frontier, traverse};
use libfuzzer_sys::fuzz_target;

// Bytes are read as (node count, edge pairs...). Every replay step must
// terminate, and past the end the frontier is empty.
fuzz_target!(|data: &[u8]| {
    let Some((&count, pairs)) = data.split_first() else {
        return;
    };
    let count = u32::from(count % 32);
    let nodes: Vec<Node<u32>> = (0..count).map(Node::new).collect();
    let edges: Vec<Edge<u32>> = pairs
        .chunks_exact(2)
        .map(|p| Edge::new(u32::from(p[0]) % count.max(1), u32::from(p[1]) % count.max(1)))
        .collect();

    for kind in [Algorithm::Bfs, Algorithm::Dfs] {
        for directed in [false, true] {
            let order = traverse(kind, &nodes, &edges, None, directed);
            assert_eq!(order.len(), nodes.len());
            for step in 0..=order.len() {
                let frontier = reconstruct_frontier(&order, step, &nodes, &edges, directed, kind);
                assert!(frontier.len() <= nodes.len());
            }
            assert!(reconstruct_frontier(&order, order.len() + 1, &nodes, &edges, directed, kind).is_empty());
        }
    }
});
