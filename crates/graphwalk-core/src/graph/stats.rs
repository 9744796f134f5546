//! Summary statistics for the stats panel and `gw stats`.

use serde::Serialize;
use tracing::instrument;

use crate::graph::adjacency::build_adjacency;
use crate::graph::components::find_connected_components;
use crate::model::{Edge, Node, NodeKey};

/// Counts and shape measures of one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GraphStats {
    pub node_count: usize,
    pub edge_count: usize,
    pub component_count: usize,
    /// Nodes with no incident edge.
    pub isolated_node_count: usize,
    /// Largest number of edge endpoints on a single node, direction ignored.
    pub max_degree: usize,
    /// Edge count over the number of possible edges. `0.0` below two nodes.
    pub density: f64,
}

impl GraphStats {
    /// Compute statistics for a snapshot.
    ///
    /// `directed` only changes the density denominator: `n(n-1)` possible
    /// arcs instead of `n(n-1)/2` possible edges.
    #[must_use]
    #[instrument(skip_all, fields(nodes = nodes.len(), edges = edges.len()))]
    pub fn compute<K: NodeKey>(nodes: &[Node<K>], edges: &[Edge<K>], directed: bool) -> Self {
        let adjacency = build_adjacency(nodes, edges, false);
        let degrees = nodes.iter().map(|n| adjacency.degree(&n.id));

        let (isolated_node_count, max_degree) =
            degrees.fold((0, 0), |(isolated, max), d| (isolated + usize::from(d == 0), max.max(d)));

        Self {
            node_count: nodes.len(),
            edge_count: edges.len(),
            component_count: find_connected_components(nodes, edges).len(),
            isolated_node_count,
            max_degree,
            density: density(nodes.len(), edges.len(), directed),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn density(nodes: usize, edges: usize, directed: bool) -> f64 {
    if nodes < 2 {
        return 0.0;
    }
    let pairs = (nodes * (nodes - 1)) as f64;
    let edges = edges as f64;
    if directed { edges / pairs } else { 2.0 * edges / pairs }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes(ids: &[u32]) -> Vec<Node<u32>> {
        ids.iter().copied().map(Node::new).collect()
    }

    fn edges(pairs: &[(u32, u32)]) -> Vec<Edge<u32>> {
        pairs.iter().map(|&(a, b)| Edge::new(a, b)).collect()
    }

    #[test]
    fn empty_graph() {
        let stats = GraphStats::compute::<u32>(&[], &[], false);
        assert_eq!(stats.node_count, 0);
        assert_eq!(stats.component_count, 0);
        assert_eq!(stats.max_degree, 0);
        assert!(stats.density.abs() < f64::EPSILON);
    }

    #[test]
    fn triangle_plus_isolated_node() {
        let ns = nodes(&[1, 2, 3, 4]);
        let es = edges(&[(1, 2), (2, 3), (3, 1)]);
        let stats = GraphStats::compute(&ns, &es, false);
        assert_eq!(stats.node_count, 4);
        assert_eq!(stats.edge_count, 3);
        assert_eq!(stats.component_count, 2);
        assert_eq!(stats.isolated_node_count, 1);
        assert_eq!(stats.max_degree, 2);
        // 2 * 3 / (4 * 3)
        assert!((stats.density - 0.5).abs() < 1e-9);
    }

    #[test]
    fn directed_density_uses_arc_count() {
        let ns = nodes(&[1, 2]);
        let es = edges(&[(1, 2)]);
        assert!((GraphStats::compute(&ns, &es, true).density - 0.5).abs() < 1e-9);
        assert!((GraphStats::compute(&ns, &es, false).density - 1.0).abs() < 1e-9);
    }

    #[test]
    fn star_max_degree() {
        let ns = nodes(&[0, 1, 2, 3, 4]);
        let es = edges(&[(0, 1), (0, 2), (0, 3), (4, 0)]);
        let stats = GraphStats::compute(&ns, &es, true);
        assert_eq!(stats.max_degree, 4);
        assert_eq!(stats.isolated_node_count, 0);
    }
}
