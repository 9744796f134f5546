//! Reading graph snapshots from a file or stdin.

use anyhow::{Context, Result};
use graphwalk_core::{GraphError, GraphSnapshot};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;
use tracing::debug;

/// `None` and `-` both mean stdin.
pub fn load_snapshot(path: Option<&Path>) -> Result<GraphSnapshot> {
    match path {
        Some(path) if path != Path::new("-") => {
            let file = File::open(path)
                .map_err(GraphError::from)
                .with_context(|| format!("Failed to open graph snapshot {}", path.display()))?;
            read_snapshot(BufReader::new(file), &path.display().to_string())
        }
        _ => read_snapshot(io::stdin().lock(), "stdin"),
    }
}

fn read_snapshot(reader: impl Read, source: &str) -> Result<GraphSnapshot> {
    let snapshot = GraphSnapshot::from_reader(reader)
        .with_context(|| format!("Failed to load graph snapshot from {source}"))?;
    debug!(
        source,
        nodes = snapshot.nodes.len(),
        edges = snapshot.edges.len(),
        directed = snapshot.directed,
        "loaded snapshot"
    );
    Ok(snapshot)
}
