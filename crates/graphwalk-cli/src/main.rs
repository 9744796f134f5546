#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;
mod timing;

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{CommandFactory, Parser, Subcommand};
use graphwalk_core::Algorithm;
use graphwalk_core::config::{load_project_config, load_user_config};
use output::{CliError, OutputMode};
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    name = "gw",
    author,
    version,
    about = "graphwalk: traversal, connectivity and cut-vertex analysis for teaching graphs",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit command timing report to stderr.
    #[arg(long, global = true)]
    timing: bool,

    /// Emit JSON output (shorthand for `--format json`).
    #[arg(long, global = true)]
    json: bool,

    /// Output format. Overrides `--json`, `FORMAT` and the user config.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Treat edges as directed, whatever the snapshot says.
    #[arg(long, global = true)]
    directed: bool,

    /// Graph snapshot JSON. `-` or absent reads stdin.
    #[arg(short, long, global = true, value_name = "PATH")]
    graph: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Traversal",
        about = "Breadth-first visit order",
        long_about = "Visit every node breadth-first from a start node, then sweep the remaining nodes in snapshot order.",
        after_help = "EXAMPLES:\n    # Order from node 1\n    gw bfs --start 1 --graph graph.json\n\n    # Pipe a snapshot in\n    gw sample | gw bfs --json"
    )]
    Bfs(cmd::traverse::TraverseArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Depth-first visit order",
        long_about = "Visit every node depth-first from a start node, then sweep the remaining nodes in snapshot order.",
        after_help = "EXAMPLES:\n    # Order from node 1\n    gw dfs --start 1 --graph graph.json\n\n    # Follow edge direction\n    gw dfs --directed --graph graph.json"
    )]
    Dfs(cmd::traverse::TraverseArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Queue or stack contents at one step",
        long_about = "Replay a traversal and show the open queue (BFS) or stack (DFS) before the given step is processed.",
        after_help = "EXAMPLES:\n    # BFS queue before the third node is processed\n    gw frontier --algorithm bfs --step 3 --graph graph.json\n\n    # DFS stack, machine-readable\n    gw frontier -a dfs -k 4 --json --graph graph.json"
    )]
    Frontier(cmd::frontier::FrontierArgs),

    #[command(
        next_help_heading = "Traversal",
        about = "Step through a traversal",
        long_about = "Run the playback cursor from the first to the last step, showing the visited prefix and frontier of each.",
        after_help = "EXAMPLES:\n    # Every step at once\n    gw playback --algorithm dfs --graph graph.json\n\n    # Animate at double speed\n    gw playback --live --speed 2x --graph graph.json"
    )]
    Playback(cmd::playback::PlaybackArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Connected components and their colors",
        long_about = "Group nodes into connected components, ignoring edge direction, and assign each a palette color.",
        after_help = "EXAMPLES:\n    # List components\n    gw components --graph graph.json\n\n    # Emit machine-readable output\n    gw components --json --graph graph.json"
    )]
    Components(cmd::components::ComponentsArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Articulation points (cut vertices)",
        long_about = "List nodes whose removal increases the number of connected components.",
        after_help = "EXAMPLES:\n    # Cut vertices of the sample\n    gw sample | gw articulation"
    )]
    Articulation(cmd::articulation::ArticulationArgs),

    #[command(
        next_help_heading = "Connectivity",
        about = "Graph statistics",
        long_about = "Node, edge and component counts, isolated nodes, maximum degree and density.",
        after_help = "EXAMPLES:\n    # Summary\n    gw stats --graph graph.json"
    )]
    Stats(cmd::stats::StatsArgs),

    #[command(
        next_help_heading = "Utilities",
        about = "Component colors",
        long_about = "Print the first COUNT component colors: the palette, then golden-angle hues.",
        after_help = "EXAMPLES:\n    # Twenty colors\n    gw colors 20"
    )]
    Colors(cmd::colors::ColorsArgs),

    #[command(
        next_help_heading = "Utilities",
        about = "Print a sample graph snapshot",
        long_about = "Print the eight-node teaching sample, or a seeded random graph, as snapshot JSON.",
        after_help = "EXAMPLES:\n    # Teaching sample\n    gw sample > graph.json\n\n    # Random graph\n    gw sample --random --nodes 50 --edges 80 --seed 7"
    )]
    Sample(cmd::sample::SampleArgs),

    #[command(
        next_help_heading = "Utilities",
        about = "Generate shell completions",
        long_about = "Generate shell completion scripts for gw.",
        after_help = "EXAMPLES:\n    # Generate zsh completions\n    gw completions zsh > ~/.zfunc/_gw"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

impl Commands {
    /// Commands that never read a snapshot.
    const fn needs_graph(&self) -> bool {
        !matches!(self, Self::Colors(_) | Self::Sample(_) | Self::Completions(_))
    }
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("GRAPHWALK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "graphwalk=debug,info"
        } else {
            "graphwalk=info,warn"
        })
    });

    let format = env::var("GRAPHWALK_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());
    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => registry
            .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
            .init(),
        _ => registry.with(fmt::layer().compact().with_writer(std::io::stderr)).init(),
    }
}

fn run(cli: Cli, output: OutputMode) -> anyhow::Result<()> {
    let project_root = env::current_dir()?;
    let config = load_project_config(&project_root)?;
    debug!(?config, "project config");

    if cli.command.needs_graph() && cli.graph.is_none() {
        debug!("no --graph given, reading snapshot from stdin");
    }

    let ctx = cmd::CommandContext {
        output,
        config,
        graph: cli.graph,
        directed: cli.directed,
    };

    match cli.command {
        Commands::Bfs(ref args) => timing::timed("cmd.bfs", || {
            cmd::traverse::run_traverse(Algorithm::Bfs, args, &ctx)
        }),
        Commands::Dfs(ref args) => timing::timed("cmd.dfs", || {
            cmd::traverse::run_traverse(Algorithm::Dfs, args, &ctx)
        }),
        Commands::Frontier(ref args) => {
            timing::timed("cmd.frontier", || cmd::frontier::run_frontier(args, &ctx))
        }
        Commands::Playback(ref args) => {
            timing::timed("cmd.playback", || cmd::playback::run_playback(args, &ctx))
        }
        Commands::Components(ref args) => timing::timed("cmd.components", || {
            cmd::components::run_components(args, &ctx)
        }),
        Commands::Articulation(ref args) => timing::timed("cmd.articulation", || {
            cmd::articulation::run_articulation(args, &ctx)
        }),
        Commands::Stats(ref args) => timing::timed("cmd.stats", || cmd::stats::run_stats(args, &ctx)),
        Commands::Colors(ref args) => timing::timed("cmd.colors", || cmd::colors::run_colors(args, &ctx)),
        Commands::Sample(ref args) => timing::timed("cmd.sample", || cmd::sample::run_sample(args, &ctx)),
        Commands::Completions(ref args) => timing::timed("cmd.completions", || {
            let mut command = Cli::command();
            cmd::completions::run_completions(args, &mut command)
        }),
    }
}

fn print_timing_report() -> anyhow::Result<()> {
    let report = timing::collect_report();
    if report.is_empty() {
        eprintln!("timing report: no samples recorded");
        return Ok(());
    }
    eprintln!("timing report:");
    eprintln!("{}", report.display_table());
    eprintln!("timing report (json):");
    eprintln!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let timing_enabled = cli.timing || timing::enabled_from_env();
    timing::set_enabled(timing_enabled);
    timing::clear();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let user_output = match load_user_config() {
        Ok(user) => user.output,
        Err(err) => {
            warn!(error = %format!("{err:#}"), "ignoring unreadable user config");
            None
        }
    };
    let output = output::resolve_output_mode(cli.format, cli.json, user_output.as_deref());

    let result = run(cli, output);

    if timing_enabled {
        if let Err(err) = print_timing_report() {
            warn!(error = %err, "failed to print timing report");
        }
    }

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if output::render_error(output, &CliError::from(&err)).is_err() {
                eprintln!("error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::NodeId;

    #[test]
    fn timing_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["gw", "--timing", "stats"]);
        assert!(cli.timing);
        assert!(matches!(cli.command, Commands::Stats(_)));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::parse_from(["gw", "bfs", "--start", "3", "--json", "--directed", "--graph", "g.json"]);
        assert!(cli.json);
        assert!(cli.directed);
        assert_eq!(cli.graph, Some(PathBuf::from("g.json")));
        match cli.command {
            Commands::Bfs(args) => assert_eq!(args.start, Some(NodeId::Int(3))),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn format_flag_parses_value_enum() {
        let cli = Cli::parse_from(["gw", "--format", "text", "components"]);
        assert_eq!(cli.format, Some(OutputMode::Text));
        assert!(Cli::try_parse_from(["gw", "--format", "xml", "components"]).is_err());
    }

    #[test]
    fn graph_is_only_needed_by_analysis_commands() {
        let cli = Cli::parse_from(["gw", "colors", "3"]);
        assert!(!cli.command.needs_graph());
        let cli = Cli::parse_from(["gw", "articulation"]);
        assert!(cli.command.needs_graph());
    }

    #[test]
    fn completions_require_known_shell() {
        assert!(Cli::try_parse_from(["gw", "completions", "bash"]).is_ok());
        assert!(Cli::try_parse_from(["gw", "completions", "cmd.exe"]).is_err());
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
