//! `gw bfs` / `gw dfs`: visit order from a start node.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Algorithm, NodeId, traverse};
use serde::Serialize;

use super::CommandContext;
use crate::output::{OutputMode, join, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct TraverseArgs {
    /// Start node id. Falls back to the first node when absent or unknown.
    #[arg(short, long, value_parser = super::parse_node_id)]
    pub start: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct TraversalReport {
    pub algorithm: Algorithm,
    pub directed: bool,
    /// The node the walk actually started from.
    pub start: Option<NodeId>,
    pub order: Vec<NodeId>,
}

pub fn run_traverse(algorithm: Algorithm, args: &TraverseArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let g = &graph.snapshot;

    let order = traverse(algorithm, &g.nodes, &g.edges, args.start.as_ref(), graph.directed);
    let report = TraversalReport {
        algorithm,
        directed: graph.directed,
        start: order.first().cloned(),
        order,
    };

    render_report(ctx.output, &report)
}

fn render_report(mode: OutputMode, report: &TraversalReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            for id in &r.order {
                writeln!(w, "{id}")?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} traversal", r.algorithm.name()))?;
            pretty_kv(w, "Start", r.start.as_ref().map_or_else(|| "-".to_string(), ToString::to_string))?;
            pretty_kv(w, "Directed", r.directed.to_string())?;
            pretty_kv(w, "Visited", r.order.len().to_string())?;
            pretty_kv(w, "Order", join(&r.order, " → "))
        },
    )
}
