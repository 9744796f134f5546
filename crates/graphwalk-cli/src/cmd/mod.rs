pub mod articulation;
pub mod colors;
pub mod completions;
pub mod components;
pub mod frontier;
pub mod playback;
pub mod sample;
pub mod stats;
pub mod traverse;

use std::path::PathBuf;

use anyhow::Result;
use graphwalk_core::{GraphSnapshot, NodeId};
use graphwalk_core::config::ProjectConfig;

use crate::input;
use crate::output::OutputMode;

/// Everything a command needs besides its own arguments.
#[derive(Debug)]
pub struct CommandContext {
    pub output: OutputMode,
    pub config: ProjectConfig,
    /// Snapshot path; `None` or `-` reads stdin.
    pub graph: Option<PathBuf>,
    /// `--directed` on the command line.
    pub directed: bool,
}

/// A loaded snapshot with its effective direction.
#[derive(Debug)]
pub struct LoadedGraph {
    pub snapshot: GraphSnapshot,
    pub directed: bool,
}

impl CommandContext {
    /// Load the snapshot and OR its direction flag with the config and CLI flags.
    pub fn load_graph(&self) -> Result<LoadedGraph> {
        let snapshot = input::load_snapshot(self.graph.as_deref())?;
        let directed = snapshot.directed || self.config.traversal.directed || self.directed;
        Ok(LoadedGraph { snapshot, directed })
    }
}

/// `--start` value parser: integers become [`NodeId::Int`], anything else a name.
///
/// Passed explicitly because clap would otherwise pick `From<&str>` and read
/// every id as a name.
pub fn parse_node_id(raw: &str) -> Result<NodeId, std::convert::Infallible> {
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphwalk_core::sample::sample_graph;

    fn context_for(path: PathBuf, directed: bool, config: ProjectConfig) -> CommandContext {
        CommandContext {
            output: OutputMode::Json,
            config,
            graph: Some(path),
            directed,
        }
    }

    #[test]
    fn direction_is_or_of_snapshot_config_and_flag() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("g.json");
        std::fs::write(&path, sample_graph().to_json_pretty().expect("encode")).expect("write");

        let plain = context_for(path.clone(), false, ProjectConfig::default());
        assert!(!plain.load_graph().expect("load").directed);

        let flagged = context_for(path.clone(), true, ProjectConfig::default());
        assert!(flagged.load_graph().expect("load").directed);

        let mut config = ProjectConfig::default();
        config.traversal.directed = true;
        let configured = context_for(path, false, config);
        assert!(configured.load_graph().expect("load").directed);
    }

    #[test]
    fn start_ids_parse_as_integers_when_numeric() {
        assert_eq!(parse_node_id("7"), Ok(NodeId::Int(7)));
        assert_eq!(parse_node_id("-2"), Ok(NodeId::Int(-2)));
        assert_eq!(parse_node_id("hub"), Ok(NodeId::from("hub")));
        assert_eq!(parse_node_id("7a"), Ok(NodeId::from("7a")));
    }
}
