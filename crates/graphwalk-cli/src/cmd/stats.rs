//! `gw stats`: size, connectivity and degree summary.

use anyhow::Result;
use clap::Args;
use graphwalk_core::GraphStats;
use serde::Serialize;

use super::CommandContext;
use crate::output::{OutputMode, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct StatsArgs {}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub directed: bool,
    #[serde(flatten)]
    pub stats: GraphStats,
}

pub fn run_stats(_args: &StatsArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let stats = GraphStats::compute(&graph.snapshot.nodes, &graph.snapshot.edges, graph.directed);
    render_report(
        ctx.output,
        &StatsReport {
            directed: graph.directed,
            stats,
        },
    )
}

fn render_report(mode: OutputMode, report: &StatsReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            let s = &r.stats;
            writeln!(w, "nodes\t{}", s.node_count)?;
            writeln!(w, "edges\t{}", s.edge_count)?;
            writeln!(w, "components\t{}", s.component_count)?;
            writeln!(w, "isolated\t{}", s.isolated_node_count)?;
            writeln!(w, "max_degree\t{}", s.max_degree)?;
            writeln!(w, "density\t{:.4}", s.density)
        },
        |r, w| {
            let s = &r.stats;
            pretty_section(w, if r.directed { "Directed graph" } else { "Undirected graph" })?;
            pretty_kv(w, "Nodes", s.node_count.to_string())?;
            pretty_kv(w, "Edges", s.edge_count.to_string())?;
            pretty_kv(w, "Components", s.component_count.to_string())?;
            pretty_kv(w, "Isolated", s.isolated_node_count.to_string())?;
            pretty_kv(w, "Max degree", s.max_degree.to_string())?;
            pretty_kv(w, "Density", format!("{:.4}", s.density))
        },
    )
}
