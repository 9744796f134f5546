//! Stateless reconstruction of a traversal's open list.
//!
//! The playback UI needs to show what the BFS queue or DFS stack held at an
//! arbitrary step, including after stepping backwards. Rather than keeping a
//! history, [`reconstruct_frontier`] replays a simplified simulation from
//! step 0 on every call:
//!
//! 1. Seed the open list with `order[0]`.
//! 2. Remove one node (front for BFS, top for DFS) and mark it visited.
//! 3. Push every neighbor that is neither visited nor already open.
//! 4. If the open list is now empty, reseed it with the first id of `order`
//!    that is not yet visited (the next component of the sweep).
//!
//! Steps 2–4 run `step - 1` times and the remaining open list is returned.
//! [`FrontierReplay`] exposes the same simulation one removal at a time.
//!
//! For BFS the removal sequence equals the BFS order itself. For DFS the
//! simplified stack never re-pushes an open node, so its removal sequence
//! can differ from the pre-order of [`crate::graph::dfs`].

use std::collections::{HashSet, VecDeque};

use tracing::instrument;

use crate::graph::adjacency::{Adjacency, build_adjacency};
use crate::model::{Algorithm, Edge, Node, NodeKey};

/// Open list immediately before processing the `step`-th node (1-based) of
/// `order`.
///
/// Empty when `step == 0` or `order` is empty. Steps past the end of the
/// order yield an empty list once every node has been processed.
///
/// The list is returned in storage order: queue front first for BFS, stack
/// bottom first (top last) for DFS.
#[must_use]
#[instrument(skip_all, fields(step = step, kind = %kind, order = order.len()))]
pub fn reconstruct_frontier<K: NodeKey>(
    order: &[K],
    step: usize,
    nodes: &[Node<K>],
    edges: &[Edge<K>],
    directed: bool,
    kind: Algorithm,
) -> Vec<K> {
    if step == 0 || order.is_empty() {
        return Vec::new();
    }

    let adjacency = build_adjacency(nodes, edges, directed);
    let mut replay = FrontierReplay::new(&adjacency, order, kind);
    for _ in 1..step {
        if replay.advance().is_none() {
            break;
        }
    }
    replay.into_open()
}

/// Incremental form of the frontier simulation.
#[derive(Debug)]
pub struct FrontierReplay<'a, K: NodeKey> {
    adjacency: &'a Adjacency<K>,
    order: &'a [K],
    kind: Algorithm,
    open: VecDeque<K>,
    queued: HashSet<K>,
    visited: HashSet<K>,
    /// Index into `order` where the reseed scan resumes.
    seed_cursor: usize,
}

impl<'a, K: NodeKey> FrontierReplay<'a, K> {
    /// Start a replay seeded with `order[0]`.
    #[must_use]
    pub fn new(adjacency: &'a Adjacency<K>, order: &'a [K], kind: Algorithm) -> Self {
        let mut replay = Self {
            adjacency,
            order,
            kind,
            open: VecDeque::new(),
            queued: HashSet::new(),
            visited: HashSet::with_capacity(order.len()),
            seed_cursor: 0,
        };
        replay.reseed();
        replay
    }

    /// Remove the next node from the open list and expand it.
    ///
    /// Returns the removed node, or `None` once the open list is exhausted.
    pub fn advance(&mut self) -> Option<K> {
        let current = match self.kind {
            Algorithm::Bfs => self.open.pop_front(),
            Algorithm::Dfs => self.open.pop_back(),
        }?;
        self.queued.remove(&current);
        self.visited.insert(current.clone());

        for neighbor in self.adjacency.neighbors(&current) {
            if !self.visited.contains(neighbor) && self.queued.insert(neighbor.clone()) {
                self.open.push_back(neighbor.clone());
            }
        }

        if self.open.is_empty() {
            self.reseed();
        }
        Some(current)
    }

    /// Current open list in storage order.
    #[must_use]
    pub fn open(&self) -> Vec<K> {
        self.open.iter().cloned().collect()
    }

    #[must_use]
    pub fn into_open(self) -> Vec<K> {
        self.open.into()
    }

    fn reseed(&mut self) {
        while let Some(id) = self.order.get(self.seed_cursor) {
            self.seed_cursor += 1;
            if !self.visited.contains(id) {
                self.queued.insert(id.clone());
                self.open.push_back(id.clone());
                return;
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::traversal::{bfs, dfs};

    fn nodes(ids: &[u32]) -> Vec<Node<u32>> {
        ids.iter().copied().map(Node::new).collect()
    }

    fn edges(pairs: &[(u32, u32)]) -> Vec<Edge<u32>> {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    fn tree() -> (Vec<Node<u32>>, Vec<Edge<u32>>) {
        //     1
        //    / \
        //   2   3
        //  / \
        // 4   5
        (nodes(&[1, 2, 3, 4, 5]), edges(&[(1, 2), (1, 3), (2, 4), (2, 5)]))
    }

    #[test]
    fn step_zero_and_empty_order_are_empty() {
        let (ns, es) = tree();
        assert!(reconstruct_frontier(&[1, 2], 0, &ns, &es, false, Algorithm::Bfs).is_empty());
        assert!(reconstruct_frontier(&[], 3, &ns, &es, false, Algorithm::Dfs).is_empty());
    }

    #[test]
    fn step_one_is_the_seed() {
        let (ns, es) = tree();
        let order = bfs(&ns, &es, Some(&1), false);
        assert_eq!(reconstruct_frontier(&order, 1, &ns, &es, false, Algorithm::Bfs), vec![1]);
    }

    #[test]
    fn bfs_queue_at_each_step() {
        let (ns, es) = tree();
        let order = bfs(&ns, &es, Some(&1), false);
        assert_eq!(order, vec![1, 2, 3, 4, 5]);
        let at = |k| reconstruct_frontier(&order, k, &ns, &es, false, Algorithm::Bfs);
        assert_eq!(at(2), vec![2, 3]);
        assert_eq!(at(3), vec![3, 4, 5]);
        assert_eq!(at(4), vec![4, 5]);
        assert_eq!(at(5), vec![5]);
        assert!(at(6).is_empty());
        assert!(at(100).is_empty());
    }

    #[test]
    fn dfs_stack_at_each_step() {
        let (ns, es) = tree();
        let order = dfs(&ns, &es, Some(&1), false);
        let at = |k| reconstruct_frontier(&order, k, &ns, &es, false, Algorithm::Dfs);
        assert_eq!(at(2), vec![2, 3]);
        // 3 is on top, so it is expanded before 2.
        assert_eq!(at(3), vec![2]);
        assert_eq!(at(4), vec![4, 5]);
    }

    #[test]
    fn bfs_removal_sequence_equals_bfs_order() {
        let ns = nodes(&[1, 2, 3, 4, 5, 6, 7]);
        let es = edges(&[(1, 2), (2, 3), (1, 3), (3, 4), (5, 6)]);
        for start in 1..=7 {
            let order = bfs(&ns, &es, Some(&start), false);
            let adjacency = build_adjacency(&ns, &es, false);
            let mut replay = FrontierReplay::new(&adjacency, &order, Algorithm::Bfs);
            let removed: Vec<u32> = std::iter::from_fn(|| replay.advance()).collect();
            assert_eq!(removed, order, "start={start}");
        }
    }

    #[test]
    fn disconnected_graph_reseeds_from_order() {
        let ns = nodes(&[1, 2, 3, 4]);
        let es = edges(&[(1, 2), (3, 4)]);
        let order = bfs(&ns, &es, Some(&3), false);
        assert_eq!(order, vec![3, 4, 1, 2]);
        let at = |k| reconstruct_frontier(&order, k, &ns, &es, false, Algorithm::Bfs);
        assert_eq!(at(2), vec![4]);
        assert_eq!(at(3), vec![1]);
        assert_eq!(at(4), vec![2]);
    }

    #[test]
    fn replay_matches_incremental_simulation() {
        let ns = nodes(&[1, 2, 3, 4, 5, 6]);
        let es = edges(&[(1, 2), (2, 3), (3, 1), (3, 4), (4, 5), (6, 6)]);
        for kind in [Algorithm::Bfs, Algorithm::Dfs] {
            let order = crate::graph::traverse(kind, &ns, &es, Some(&1), false);
            let adjacency = build_adjacency(&ns, &es, false);
            let mut replay = FrontierReplay::new(&adjacency, &order, kind);
            for step in 1..=order.len() + 1 {
                assert_eq!(
                    reconstruct_frontier(&order, step, &ns, &es, false, kind),
                    replay.open(),
                    "kind={kind} step={step}"
                );
                replay.advance();
            }
        }
    }
}
