use graphwalk_core::graph::{bfs, build_adjacency, dfs, find_articulation_points, find_connected_components};
use graphwalk_core::playback::FrontierReplay;
use graphwalk_core::{Algorithm, reconstruct_frontier};
use proptest::prelude::*;

use generators::*;

proptest! {
    #![proptest_config(proptest::test_runner::Config::with_cases(512))]

    // Coverage
    #[test]
    fn traversals_visit_every_node_once((graph, start) in arb_graph_with_start(), directed in any::<bool>()) {
        for order in [
            bfs(&graph.nodes, &graph.edges, Some(&start), directed),
            dfs(&graph.nodes, &graph.edges, Some(&start), directed),
        ] {
            let mut sorted = order.clone();
            sorted.sort_unstable();
            prop_assert_eq!(sorted, graph.sorted_ids());
        }
    }

    #[test]
    fn traversal_starts_at_start_or_first_node((graph, start) in arb_graph_with_start()) {
        let order = bfs(&graph.nodes, &graph.edges, Some(&start), false);
        let expected = if graph.ids().contains(&start) { Some(start) } else { graph.ids().first().copied() };
        prop_assert_eq!(order.first().copied(), expected);
    }

    // Partition
    #[test]
    fn components_partition_the_node_set(graph in arb_multigraph()) {
        let components = find_connected_components(&graph.nodes, &graph.edges);
        prop_assert!(components.iter().all(|c| !c.is_empty()));

        let mut members: Vec<u32> = components.concat();
        members.sort_unstable();
        prop_assert_eq!(members, graph.sorted_ids());
        prop_assert_eq!(components.len(), graph.oracle_components_without(None));
    }

    // Articulation correctness
    #[test]
    fn articulation_points_match_removal_oracle(graph in arb_simple_graph()) {
        let points = find_articulation_points(&graph.nodes, &graph.edges);
        let base = graph.oracle_components_without(None);
        for id in graph.ids() {
            let after = graph.oracle_components_without(Some(id));
            prop_assert_eq!(points.contains(&id), after > base, "node {}", id);
        }
    }

    #[test]
    fn articulation_points_ignore_loops_and_parallel_edges(graph in arb_multigraph()) {
        let points = find_articulation_points(&graph.nodes, &graph.edges);
        let base = graph.oracle_components_without(None);
        for id in graph.ids() {
            prop_assert_eq!(points.contains(&id), graph.oracle_components_without(Some(id)) > base);
        }
    }

    // Determinism
    #[test]
    fn repeated_calls_agree((graph, start) in arb_graph_with_start(), directed in any::<bool>()) {
        prop_assert_eq!(
            bfs(&graph.nodes, &graph.edges, Some(&start), directed),
            bfs(&graph.nodes, &graph.edges, Some(&start), directed)
        );
        prop_assert_eq!(
            dfs(&graph.nodes, &graph.edges, Some(&start), directed),
            dfs(&graph.nodes, &graph.edges, Some(&start), directed)
        );
        prop_assert_eq!(
            find_connected_components(&graph.nodes, &graph.edges),
            find_connected_components(&graph.nodes, &graph.edges)
        );
        prop_assert_eq!(
            find_articulation_points(&graph.nodes, &graph.edges),
            find_articulation_points(&graph.nodes, &graph.edges)
        );
    }

    // Frontier replay idempotence
    #[test]
    fn replay_from_scratch_matches_incremental_simulation(
        (graph, start) in arb_graph_with_start(),
        directed in any::<bool>(),
        dfs_kind in any::<bool>(),
    ) {
        let kind = if dfs_kind { Algorithm::Dfs } else { Algorithm::Bfs };
        let order = graphwalk_core::traverse(kind, &graph.nodes, &graph.edges, Some(&start), directed);
        let adjacency = build_adjacency(&graph.nodes, &graph.edges, directed);
        let mut replay = FrontierReplay::new(&adjacency, &order, kind);

        for step in 1..=order.len() + 1 {
            prop_assert_eq!(
                reconstruct_frontier(&order, step, &graph.nodes, &graph.edges, directed, kind),
                replay.open(),
                "step {}", step
            );
            replay.advance();
        }
    }

    #[test]
    fn bfs_replay_removes_nodes_in_bfs_order((graph, start) in arb_graph_with_start(), directed in any::<bool>()) {
        let order = bfs(&graph.nodes, &graph.edges, Some(&start), directed);
        let adjacency = build_adjacency(&graph.nodes, &graph.edges, directed);
        let mut replay = FrontierReplay::new(&adjacency, &order, Algorithm::Bfs);
        let removed: Vec<u32> = std::iter::from_fn(|| replay.advance()).collect();
        prop_assert_eq!(removed, order);
    }

    #[test]
    fn replay_processes_every_node_once((graph, start) in arb_graph_with_start(), directed in any::<bool>()) {
        let order = dfs(&graph.nodes, &graph.edges, Some(&start), directed);
        let adjacency = build_adjacency(&graph.nodes, &graph.edges, directed);
        let mut replay = FrontierReplay::new(&adjacency, &order, Algorithm::Dfs);
        let mut removed: Vec<u32> = std::iter::from_fn(|| replay.advance()).collect();
        removed.sort_unstable();
        prop_assert_eq!(removed, graph.sorted_ids());
    }
}
