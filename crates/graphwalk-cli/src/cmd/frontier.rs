//! `gw frontier`: the open queue or stack at one playback step.

use std::collections::HashSet;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Algorithm, NodeId, reconstruct_frontier, traverse};
use serde::Serialize;

use super::{CommandContext, LoadedGraph};
use crate::output::{OutputMode, join, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug)]
pub struct FrontierArgs {
    /// Traversal kind; defaults to `[traversal] algorithm` from `.graphwalk.toml`.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Number of nodes revealed so far (0 = nothing started).
    #[arg(short = 'k', long)]
    pub step: usize,

    /// Start node id.
    #[arg(short, long, value_parser = super::parse_node_id)]
    pub start: Option<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct FrontierReport {
    pub algorithm: Algorithm,
    /// `queue` for BFS, `stack` for DFS.
    pub structure: &'static str,
    pub step: usize,
    pub visited: Vec<NodeId>,
    pub frontier: Vec<NodeId>,
}

pub fn run_frontier(args: &FrontierArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let g = &graph.snapshot;
    let algorithm = args.algorithm.unwrap_or(ctx.config.traversal.algorithm);

    let order = traverse(algorithm, &g.nodes, &g.edges, args.start.as_ref(), graph.directed);
    let revealed = args.step.saturating_sub(1).min(order.len());
    let visited = order[..revealed].to_vec();
    let report = FrontierReport {
        algorithm,
        structure: algorithm.frontier_name(),
        step: args.step,
        frontier: open_nodes(algorithm, &order, args.step, &visited, &graph),
        visited,
    };

    render_report(ctx.output, &report)
}

/// Replayed open list at `step` with the processed prefix removed.
fn open_nodes(algorithm: Algorithm, order: &[NodeId], step: usize, visited: &[NodeId], graph: &LoadedGraph) -> Vec<NodeId> {
    let g = &graph.snapshot;
    let seen: HashSet<&NodeId> = visited.iter().collect();
    reconstruct_frontier(order, step, &g.nodes, &g.edges, graph.directed, algorithm)
        .into_iter()
        .filter(|id| !seen.contains(id))
        .collect()
}

fn render_report(mode: OutputMode, report: &FrontierReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| writeln!(w, "{}", join(&r.frontier, " ")),
        |r, w| {
            pretty_section(w, &format!("{} {} at step {}", r.algorithm.name(), r.structure, r.step))?;
            pretty_kv(w, "Processed", join(&r.visited, ", "))?;
            pretty_kv(w, "Frontier", if r.frontier.is_empty() { "(empty)".to_string() } else { join(&r.frontier, ", ") })
        },
    )
}
