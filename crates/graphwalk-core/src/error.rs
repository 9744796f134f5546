use std::fmt;
use std::io;

use crate::model::NodeId;

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the caller-side helpers around the engine.
///
/// The engine operations themselves ([`crate::graph`], [`crate::playback`])
/// never fail; these variants cover snapshot editing, decoding and config.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// An edge whose endpoints are the same node.
    #[error("self-loop on node {0} is not allowed")]
    SelfLoop(NodeId),

    /// An edge between the pair already exists (in either direction).
    #[error("edge between {from} and {to} already exists")]
    DuplicateEdge {
        /// Endpoint the new edge starts from.
        from: NodeId,
        /// Endpoint the new edge points to.
        to: NodeId,
    },

    /// A node id that is not part of the snapshot.
    #[error("unknown node {0}")]
    UnknownNode(NodeId),

    /// An edge id that is not part of the snapshot.
    #[error("unknown edge {0}")]
    UnknownEdge(String),

    /// Snapshot JSON could not be decoded.
    #[error("failed to decode graph snapshot: {0}")]
    Decode(#[from] serde_json::Error),

    /// I/O error while reading a snapshot.
    #[error("graph I/O error: {0}")]
    Io(#[from] io::Error),

    /// Config file could not be parsed.
    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),
}

impl GraphError {
    /// Machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::SelfLoop(_) => ErrorCode::SelfLoop,
            Self::DuplicateEdge { .. } => ErrorCode::DuplicateEdge,
            Self::UnknownNode(_) => ErrorCode::UnknownNode,
            Self::UnknownEdge(_) => ErrorCode::UnknownEdge,
            Self::Decode(_) => ErrorCode::SnapshotDecode,
            Self::Io(_) => ErrorCode::SnapshotRead,
            Self::Config(_) => ErrorCode::ConfigParseError,
        }
    }
}

/// Machine-readable error codes for script-friendly decision making.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    ConfigParseError,
    SnapshotRead,
    SnapshotDecode,
    UnknownNode,
    UnknownEdge,
    SelfLoop,
    DuplicateEdge,
    InternalUnexpected,
}

impl ErrorCode {
    /// Stable code identifier (`E####`) for machine parsing.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::ConfigParseError => "E1001",
            Self::SnapshotRead => "E2001",
            Self::SnapshotDecode => "E2002",
            Self::UnknownNode => "E3001",
            Self::UnknownEdge => "E3002",
            Self::SelfLoop => "E3003",
            Self::DuplicateEdge => "E3004",
            Self::InternalUnexpected => "E9001",
        }
    }

    /// Short human-facing summary for logs and terminal output.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::ConfigParseError => "Config file parse error",
            Self::SnapshotRead => "Graph snapshot could not be read",
            Self::SnapshotDecode => "Graph snapshot is not valid JSON",
            Self::UnknownNode => "Node not found",
            Self::UnknownEdge => "Edge not found",
            Self::SelfLoop => "Self-loop rejected",
            Self::DuplicateEdge => "Duplicate edge rejected",
            Self::InternalUnexpected => "Internal unexpected error",
        }
    }

    /// Optional remediation hint that can be surfaced to users and scripts.
    #[must_use]
    pub const fn hint(self) -> Option<&'static str> {
        match self {
            Self::ConfigParseError => Some("Fix syntax in .graphwalk.toml and retry."),
            Self::SnapshotRead => Some("Check the --graph path, or pipe a snapshot on stdin."),
            Self::SnapshotDecode => {
                Some("Expected {\"nodes\": [...], \"edges\": [...], \"directed\": false}.")
            }
            Self::UnknownNode => Some("Use `gw bfs` to list the node ids in the snapshot."),
            Self::UnknownEdge | Self::SelfLoop => None,
            Self::DuplicateEdge => Some("Each pair of nodes may be joined by at most one edge."),
            Self::InternalUnexpected => Some("Retry once. If persistent, report a bug with logs."),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorCode, GraphError};
    use crate::model::NodeId;
    use std::collections::HashSet;

    #[test]
    fn all_codes_are_unique() {
        let all = [
            ErrorCode::ConfigParseError,
            ErrorCode::SnapshotRead,
            ErrorCode::SnapshotDecode,
            ErrorCode::UnknownNode,
            ErrorCode::UnknownEdge,
            ErrorCode::SelfLoop,
            ErrorCode::DuplicateEdge,
            ErrorCode::InternalUnexpected,
        ];

        let mut seen = HashSet::new();
        for code in all {
            assert!(seen.insert(code.code()), "duplicate code {}", code.code());
        }
    }

    #[test]
    fn code_format_is_machine_friendly() {
        let code = ErrorCode::DuplicateEdge.code();
        assert_eq!(code.len(), 5);
        assert!(code.starts_with('E'));
        assert!(code.chars().skip(1).all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn graph_error_maps_to_code() {
        let err = GraphError::DuplicateEdge {
            from: NodeId::Int(1),
            to: NodeId::Int(2),
        };
        assert_eq!(err.code(), ErrorCode::DuplicateEdge);
        assert_eq!(err.to_string(), "edge between 1 and 2 already exists");

        let err = GraphError::SelfLoop(NodeId::from("a"));
        assert_eq!(err.code(), ErrorCode::SelfLoop);
        assert!(err.to_string().contains("self-loop on node a"));
    }
}
