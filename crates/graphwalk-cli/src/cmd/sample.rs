//! `gw sample`: print a ready-made snapshot to feed the other commands.

use std::io::{self, Write};

use anyhow::Result;
use clap::Args;
use graphwalk_core::sample::{random_graph, sample_graph};

use super::CommandContext;

#[derive(Args, Debug)]
pub struct SampleArgs {
    /// Generate a seeded random graph instead of the eight-node sample.
    #[arg(long)]
    pub random: bool,

    /// Node count for `--random`.
    #[arg(long, default_value_t = 10, requires = "random")]
    pub nodes: usize,

    /// Edge count for `--random`; capped at the number of node pairs.
    #[arg(long, default_value_t = 15, requires = "random")]
    pub edges: usize,

    /// Seed for `--random`. The same seed always yields the same graph.
    #[arg(long, default_value_t = 42, requires = "random")]
    pub seed: u64,
}

/// The snapshot is JSON in every output mode so it can be piped straight back in.
pub fn run_sample(args: &SampleArgs, ctx: &CommandContext) -> Result<()> {
    let mut snapshot = if args.random {
        random_graph(args.nodes, args.edges, args.seed)
    } else {
        sample_graph()
    };
    snapshot.directed |= ctx.directed;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", snapshot.to_json_pretty()?)?;
    Ok(())
}
