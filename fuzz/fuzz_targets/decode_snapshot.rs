#![no_main]

use graphwalk_core::graph::{bfs, dfs, find_articulation_points, find_connected_components};
use graphwalk_core::GraphSnapshot;
use libfuzzer_sys::fuzz_target;

// Arbitrary JSON must either be rejected or analysed without panicking,
// dangling edge endpoints included.
fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(g) = GraphSnapshot::from_json_str(text) else {
        return;
    };

    let start = g.nodes.first().map(|n| &n.id);
    let order = bfs(&g.nodes, &g.edges, start, g.directed);
    let _ = dfs(&g.nodes, &g.edges, start, g.directed);
    let components = find_connected_components(&g.nodes, &g.edges);
    let _ = find_articulation_points(&g.nodes, &g.edges);

    assert_eq!(order.is_empty(), g.nodes.is_empty());
    assert!(components.iter().all(|c| !c.is_empty()));
});
