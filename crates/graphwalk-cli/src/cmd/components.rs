//! `gw components`: connected components with their assigned colors.

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Color, NodeId, find_connected_components};
use serde::Serialize;

use super::CommandContext;
use crate::output::{OutputMode, join, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct ComponentsArgs {}

#[derive(Debug, Serialize)]
pub struct ComponentEntry {
    pub color: Color,
    pub nodes: Vec<NodeId>,
}

#[derive(Debug, Serialize)]
pub struct ComponentsReport {
    pub count: usize,
    pub components: Vec<ComponentEntry>,
}

/// Direction never matters here: components are always undirected.
pub fn run_components(_args: &ComponentsArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let components = find_connected_components(&graph.snapshot.nodes, &graph.snapshot.edges);
    let colors = ctx.config.palette.palette().assign(components.len());

    let report = ComponentsReport {
        count: components.len(),
        components: colors
            .into_iter()
            .zip(components)
            .map(|(color, nodes)| ComponentEntry { color, nodes })
            .collect(),
    };

    render_report(ctx.output, &report)
}

fn render_report(mode: OutputMode, report: &ComponentsReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            for c in &r.components {
                writeln!(w, "{}\t{}", c.color, join(&c.nodes, " "))?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} connected component(s)", r.count))?;
            for (i, c) in r.components.iter().enumerate() {
                writeln!(w, "#{:<3} {:<22} {}", i + 1, c.color.as_str(), join(&c.nodes, ", "))?;
            }
            Ok(())
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::sample::sample_graph;

    #[test]
    fn report_pairs_each_component_with_a_color() {
        let g = sample_graph();
        let components = find_connected_components(&g.nodes, &g.edges);
        let colors = graphwalk_core::Palette::default().assign(components.len());
        let entries: Vec<ComponentEntry> = colors
            .into_iter()
            .zip(components)
            .map(|(color, nodes)| ComponentEntry { color, nodes })
            .collect();

        let value = serde_json::to_value(&entries).expect("json");
        assert_eq!(value[0]["color"], "#FF6B6B");
        assert_eq!(value[1]["nodes"], serde_json::json!([7, 8]));
    }
}
