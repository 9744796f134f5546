//! Graph snapshot data model.
//!
//! # Overview
//!
//! A [`GraphSnapshot`] is the set of all [`Node`]s and [`Edge`]s at a point in
//! time. The engine receives it by reference on every call and never retains
//! or mutates it. Display attributes on nodes (label, position, color) travel
//! with the snapshot but are not interpreted by any algorithm.
//!
//! ## Node identifiers
//!
//! Callers assign ids. The JSON form accepts either integers or strings, so
//! [`NodeId`] is an untagged enum over both. Engine operations are generic
//! over any [`NodeKey`], which lets embedders plug in their own id type.
//!
//! ## Editing rules
//!
//! The engine tolerates self-loops, duplicate edges and dangling references.
//! Rejecting them is the caller's job; [`GraphSnapshot::add_edge`] implements
//! those caller-side rules for the CLI and tests.

#![allow(clippy::module_name_repetitions)]

use std::collections::HashSet;
use std::fmt;
use std::hash::Hash;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;

// ---------------------------------------------------------------------------
// Identifiers
// ---------------------------------------------------------------------------

/// Any type usable as a node identifier by the engine.
pub trait NodeKey: Clone + Eq + Hash {}

impl<T: Clone + Eq + Hash> NodeKey for T {}

/// A caller-assigned node identifier: an integer or a string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NodeId {
    /// Integer id, as produced by the editor's id counter.
    Int(i64),
    /// Free-form string id.
    Name(String),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Name(s) => f.write_str(s),
        }
    }
}

impl From<i64> for NodeId {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for NodeId {
    fn from(value: &str) -> Self {
        Self::Name(value.to_string())
    }
}

impl From<String> for NodeId {
    fn from(value: String) -> Self {
        Self::Name(value)
    }
}

impl FromStr for NodeId {
    type Err = std::convert::Infallible;

    /// Integers parse as [`NodeId::Int`]; anything else becomes a name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.trim()
            .parse::<i64>()
            .map_or_else(|_| Self::Name(s.to_string()), Self::Int))
    }
}

// ---------------------------------------------------------------------------
// Node / Edge
// ---------------------------------------------------------------------------

/// A graph node with opaque display attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node<K = NodeId> {
    /// Unique, stable identifier.
    pub id: K,
    /// Display label. Defaults to the id when rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Canvas x position.
    #[serde(default)]
    pub x: f64,
    /// Canvas y position.
    #[serde(default)]
    pub y: f64,
    /// Fill color assigned from the component palette.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl<K> Node<K> {
    /// A node with no display attributes.
    pub const fn new(id: K) -> Self {
        Self {
            id,
            label: None,
            x: 0.0,
            y: 0.0,
            color: None,
        }
    }

    /// Builder-style position setter.
    #[must_use]
    pub const fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    /// Builder-style label setter.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// An edge between two nodes.
///
/// `source`/`target` also accept the editor's `from`/`to` field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge<K = NodeId> {
    /// Edge identifier (e.g. `"e3"`). Not interpreted by the engine.
    #[serde(default)]
    pub id: String,
    /// Node the edge starts from.
    #[serde(alias = "from")]
    pub source: K,
    /// Node the edge points to.
    #[serde(alias = "to")]
    pub target: K,
    /// Per-edge directedness, graph-global in practice.
    #[serde(default)]
    pub directed: bool,
}

impl<K> Edge<K> {
    /// An undirected edge with an empty id.
    pub const fn new(source: K, target: K) -> Self {
        Self {
            id: String::new(),
            source,
            target,
            directed: false,
        }
    }

    /// Builder-style id setter.
    #[must_use]
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }
}

impl<K: PartialEq> Edge<K> {
    /// Returns `true` if this edge joins `a` and `b` in either direction.
    pub fn joins(&self, a: &K, b: &K) -> bool {
        (self.source == *a && self.target == *b) || (self.source == *b && self.target == *a)
    }

    /// Returns `true` if `id` is one of the endpoints.
    pub fn touches(&self, id: &K) -> bool {
        self.source == *id || self.target == *id
    }
}

// ---------------------------------------------------------------------------
// Algorithm
// ---------------------------------------------------------------------------

/// Traversal strategy, which also selects the frontier discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    /// Breadth-first search: FIFO queue frontier.
    #[default]
    Bfs,
    /// Depth-first search: LIFO stack frontier.
    Dfs,
}

impl Algorithm {
    /// Upper-case display name (`"BFS"` / `"DFS"`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bfs => "BFS",
            Self::Dfs => "DFS",
        }
    }

    /// Name of the open list this algorithm maintains.
    #[must_use]
    pub const fn frontier_name(self) -> &'static str {
        match self {
            Self::Bfs => "queue",
            Self::Dfs => "stack",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bfs" => Ok(Self::Bfs),
            "dfs" => Ok(Self::Dfs),
            other => Err(format!("unknown algorithm '{other}' (expected bfs or dfs)")),
        }
    }
}

// ---------------------------------------------------------------------------
// GraphSnapshot
// ---------------------------------------------------------------------------

/// All nodes and edges of a graph at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    /// Nodes in caller order. Order drives component sweep order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges in insertion order. Order drives neighbor tie-breaking.
    #[serde(default)]
    pub edges: Vec<Edge>,
    /// Whether traversals follow edges only from source to target.
    #[serde(default)]
    pub directed: bool,
}

impl GraphSnapshot {
    /// An empty snapshot.
    #[must_use]
    pub const fn new(directed: bool) -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            directed,
        }
    }

    /// Decode a snapshot from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if the text is not a valid snapshot.
    pub fn from_json_str(text: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a snapshot from a reader (file or stdin).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Io`] if reading fails, or [`GraphError::Decode`]
    /// if the content is not a valid snapshot.
    pub fn from_reader(mut reader: impl Read) -> Result<Self, GraphError> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::from_json_str(&text)
    }

    /// Encode as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::Decode`] if serialization fails.
    pub fn to_json_pretty(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns `true` if a node with `id` exists.
    #[must_use]
    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.nodes.iter().any(|n| n.id == *id)
    }

    /// Look up a node by id.
    #[must_use]
    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == *id)
    }

    /// Iterate node ids in caller order.
    pub fn node_ids(&self) -> impl Iterator<Item = &NodeId> {
        self.nodes.iter().map(|n| &n.id)
    }

    /// Add a node at `(x, y)` with the next free integer id.
    ///
    /// The id is one more than the largest integer id present (1 for a graph
    /// without integer ids); the label is the id. When the largest id is
    /// `i64::MAX` the smallest unused positive id is taken instead.
    pub fn add_node(&mut self, x: f64, y: f64) -> NodeId {
        let taken: HashSet<i64> = self
            .nodes
            .iter()
            .filter_map(|n| match n.id {
                NodeId::Int(i) => Some(i),
                NodeId::Name(_) => None,
            })
            .collect();
        let next = match taken.iter().max() {
            None => 1,
            Some(max) => max.checked_add(1).unwrap_or_else(|| {
                // At most `taken.len()` ids are used, so one of 1..=len+1 is free.
                (1..=i64::MAX).find(|id| !taken.contains(id)).unwrap_or_default()
            }),
        };

        let id = NodeId::Int(next);
        self.nodes
            .push(Node::new(id.clone()).at(x, y).with_label(next.to_string()));
        debug!(node = %id, "node added");
        id
    }

    /// Add an edge between two existing nodes and return its id.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnknownNode`] if either endpoint is missing.
    /// - [`GraphError::SelfLoop`] if `source == target`.
    /// - [`GraphError::DuplicateEdge`] if the pair is already joined in either
    ///   direction.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> Result<String, GraphError> {
        for id in [&source, &target] {
            if !self.contains_node(id) {
                return Err(GraphError::UnknownNode(id.clone()));
            }
        }
        if source == target {
            return Err(GraphError::SelfLoop(source));
        }
        if self.edges.iter().any(|e| e.joins(&source, &target)) {
            return Err(GraphError::DuplicateEdge {
                from: source,
                to: target,
            });
        }

        let id = format!("e{}", self.next_edge_number());
        debug!(edge = %id, %source, %target, "edge added");
        self.edges.push(Edge {
            id: id.clone(),
            source,
            target,
            directed: self.directed,
        });
        Ok(id)
    }

    /// Remove a node together with every incident edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownNode`] if the node does not exist.
    pub fn remove_node(&mut self, id: &NodeId) -> Result<Node, GraphError> {
        let pos = self
            .nodes
            .iter()
            .position(|n| n.id == *id)
            .ok_or_else(|| GraphError::UnknownNode(id.clone()))?;

        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(id));
        debug!(node = %id, dropped_edges = before - self.edges.len(), "node removed");
        Ok(self.nodes.remove(pos))
    }

    /// Remove an edge by id.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::UnknownEdge`] if no edge has this id.
    pub fn remove_edge(&mut self, edge_id: &str) -> Result<Edge, GraphError> {
        let pos = self
            .edges
            .iter()
            .position(|e| e.id == edge_id)
            .ok_or_else(|| GraphError::UnknownEdge(edge_id.to_string()))?;
        Ok(self.edges.remove(pos))
    }

    /// Drop all nodes and edges, keeping the directedness flag.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    fn next_edge_number(&self) -> u64 {
        self.edges
            .iter()
            .filter_map(|e| e.id.strip_prefix('e')?.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max.saturating_add(1))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
