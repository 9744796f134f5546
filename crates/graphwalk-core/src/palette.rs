//! Component color assignment.
//!
//! Colors are CSS color strings. The built-in palette holds fifteen hex
//! colors; counts beyond the palette are extended with HSL colors whose hue
//! advances by the golden angle (137.5°), which keeps neighbouring indices
//! far apart on the color wheel without any randomness.

#![allow(clippy::module_name_repetitions)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::graph::components::component_index;
use crate::model::{Node, NodeKey};

/// Color of nodes that belong to no known component.
pub const DEFAULT_NODE_COLOR: &str = "#3B82F6";

/// Hue step, in degrees, between generated colors.
const GOLDEN_ANGLE: f64 = 137.5;

const BUILTIN: [&str; 15] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#FFA07A", "#98D8C8", "#F7DC6F", "#BB8FCE", "#85C1E2",
    "#F8B500", "#52B788", "#FF7F50", "#87CEEB", "#DDA15E", "#BC6C25", "#B8336A",
];

/// A CSS color string (`#RRGGBB` or `hsl(...)`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generated color for palette index `index`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn golden_angle(index: usize) -> Self {
        let hue = (index as f64 * GOLDEN_ANGLE) % 360.0;
        Self(format!("hsl({hue}, 70%, 60%)"))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Ordered base colors, extended on demand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    base: Vec<Color>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            base: BUILTIN.iter().copied().map(Color::from).collect(),
        }
    }
}

impl Palette {
    /// Palette with custom base colors. An empty list falls back to the
    /// built-in colors.
    #[must_use]
    pub fn new(colors: impl IntoIterator<Item = Color>) -> Self {
        let base: Vec<Color> = colors.into_iter().collect();
        if base.is_empty() {
            Self::default()
        } else {
            Self { base }
        }
    }

    /// Number of base colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.base.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.base.is_empty()
    }

    /// Exactly `count` colors: the base prefix, then golden-angle colors
    /// indexed from the end of the base.
    #[must_use]
    pub fn assign(&self, count: usize) -> Vec<Color> {
        let mut colors: Vec<Color> = self.base.iter().take(count).cloned().collect();
        colors.extend((self.base.len()..count).map(Color::golden_angle));
        colors
    }
}

/// `count` colors from the built-in palette.
#[must_use]
pub fn assign_colors(count: usize) -> Vec<Color> {
    Palette::default().assign(count)
}

/// Set every node's color to the color of its component.
///
/// `colors[i]` belongs to `components[i]`. Nodes without a component, or
/// whose component has no color, get [`DEFAULT_NODE_COLOR`].
pub fn color_nodes<K: NodeKey>(nodes: &mut [Node<K>], components: &[Vec<K>], colors: &[Color]) {
    let index = component_index(components);
    for node in nodes {
        let color = index
            .get(&node.id)
            .and_then(|&i| colors.get(i))
            .map_or(DEFAULT_NODE_COLOR, Color::as_str);
        node.color = Some(color.to_string());
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
