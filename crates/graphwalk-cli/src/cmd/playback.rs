//! `gw playback`: every step of a traversal with its visited prefix and frontier.

use std::io::{self, Write};
use std::thread;

use anyhow::Result;
use clap::Args;
use graphwalk_core::{Algorithm, NodeId, Playback, PlaybackSpeed, traverse};
use serde::Serialize;
use tracing::info;

use super::{CommandContext, LoadedGraph};
use crate::output::{OutputMode, join, pretty_kv, pretty_section, render_mode};

#[derive(Args, Debug, Default)]
pub struct PlaybackArgs {
    /// Traversal kind; defaults to `[traversal] algorithm` from `.graphwalk.toml`.
    #[arg(short, long)]
    pub algorithm: Option<Algorithm>,

    /// Start node id.
    #[arg(short, long, value_parser = super::parse_node_id)]
    pub start: Option<NodeId>,

    /// Step interval preset (0.5x, 1x, 2x, 4x) or milliseconds.
    #[arg(long)]
    pub speed: Option<PlaybackSpeed>,

    /// Print steps as they happen, waiting one interval between them.
    #[arg(long)]
    pub live: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlaybackFrame {
    pub step: usize,
    pub current: Option<NodeId>,
    pub visited: Vec<NodeId>,
    pub frontier: Vec<NodeId>,
    pub progress: f64,
}

#[derive(Debug, Serialize)]
pub struct PlaybackReport {
    pub algorithm: Algorithm,
    pub structure: &'static str,
    pub speed: PlaybackSpeed,
    pub interval_ms: u128,
    pub frames: Vec<PlaybackFrame>,
}

fn frame(playback: &Playback<NodeId>, graph: &LoadedGraph) -> PlaybackFrame {
    let g = &graph.snapshot;
    PlaybackFrame {
        step: playback.step(),
        current: playback.current().cloned(),
        visited: playback.visited().to_vec(),
        frontier: playback.frontier(&g.nodes, &g.edges, graph.directed),
        progress: playback.progress(),
    }
}

/// Runs the cursor from step 0 to the end, one frame per tick.
pub fn run_playback(args: &PlaybackArgs, ctx: &CommandContext) -> Result<()> {
    let graph = ctx.load_graph()?;
    let g = &graph.snapshot;
    let algorithm = args.algorithm.unwrap_or(ctx.config.traversal.algorithm);
    let speed = args.speed.unwrap_or(ctx.config.playback.speed);

    let order = traverse(algorithm, &g.nodes, &g.edges, args.start.as_ref(), graph.directed);
    let mut playback = Playback::new(order, algorithm).with_speed(speed);
    info!(steps = playback.total_steps(), %speed, live = args.live, "starting playback");

    let mut frames = vec![frame(&playback, &graph)];
    if args.live {
        write_live(ctx.output, &frames[0])?;
    }
    while playback.tick() {
        if args.live {
            thread::sleep(playback.speed().interval());
        }
        let next = frame(&playback, &graph);
        if args.live {
            write_live(ctx.output, &next)?;
        }
        frames.push(next);
    }

    if args.live {
        return Ok(());
    }

    let report = PlaybackReport {
        algorithm,
        structure: algorithm.frontier_name(),
        speed,
        interval_ms: speed.interval().as_millis(),
        frames,
    };
    render_report(ctx.output, &report)
}

/// One line per frame: JSON lines in JSON mode, text otherwise.
fn write_live(mode: OutputMode, frame: &PlaybackFrame) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if mode.is_json() {
        serde_json::to_writer(&mut out, frame)?;
        writeln!(out)?;
    } else {
        write_frame_line(&mut out, frame)?;
    }
    out.flush()?;
    Ok(())
}

fn write_frame_line(w: &mut dyn Write, f: &PlaybackFrame) -> io::Result<()> {
    writeln!(
        w,
        "{}\t{}\t{}\t{}",
        f.step,
        f.current.as_ref().map_or_else(|| "-".to_string(), ToString::to_string),
        join(&f.visited, " "),
        join(&f.frontier, " ")
    )
}

fn render_report(mode: OutputMode, report: &PlaybackReport) -> Result<()> {
    render_mode(
        mode,
        report,
        |r, w| {
            for f in &r.frames {
                write_frame_line(w, f)?;
            }
            Ok(())
        },
        |r, w| {
            pretty_section(w, &format!("{} playback", r.algorithm.name()))?;
            pretty_kv(w, "Speed", format!("{} ({} ms/step)", r.speed, r.interval_ms))?;
            pretty_kv(w, "Steps", r.frames.len().saturating_sub(1).to_string())?;
            writeln!(w)?;
            for f in &r.frames {
                writeln!(
                    w,
                    "[{:>3}] {:>5.1}%  visited: {:<28} {}: {}",
                    f.step,
                    f.progress * 100.0,
                    join(&f.visited, " "),
                    r.structure,
                    join(&f.frontier, " ")
                )?;
            }
            Ok(())
        },
    )
}
