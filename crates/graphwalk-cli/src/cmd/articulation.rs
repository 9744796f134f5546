//! `gw articulation`: cut vertices, sorted for display.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{NodeId, find_articulation_points};
use serde::Serialize;

use super::CommandContext;
use crate::output::{OutputMode, join, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct ArticulationArgs {}

#[derive(Debug, Serialize)]
pub struct ArticulationReport {
    pub count: usize,
    pub points: Vec<NodeId>,
}

pub fn run_articulation(_args: &ArticulationArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let mut points: Vec<NodeId> =
        find_articulation_points(&graph.snapshot.nodes, &graph.snapshot.edges).into_iter().collect();
    points.sort_unstable();

    let report = ArticulationReport {
        count: points.len(),
        points,
    };

    render_report(ctx.output, &report)
}

fn render_report(mode: OutputMode, report: &ArticulationReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            for id in &r.points {
                writeln!(w, "{id}")?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, "Articulation points")?;
            if r.points.is_empty() {
                return writeln!(w, "none: removing any single node keeps the graph connected");
            }
            pretty_kv(w, "Count", r.count.to_string())?;
            pretty_kv(w, "Nodes", join(&r.points, ", "))
        },
    )
}
