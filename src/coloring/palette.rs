//! Color palettes.
//!
//! A palette bounds the colors a heuristic may hand out. Its size, not its
//! labels, decides whether a coloring can succeed.

use serde::{Deserialize, Serialize};

use crate::graph::ConflictGraph;

/// Ordered set of colors available to a heuristic.
///
/// A color is identified by its index; labels are carried along for
/// whoever renders the result (e.g. node fill colors in a drawing).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    labels: Vec<String>,
}

impl Palette {
    /// Palette of `size` colors labelled `color-0`, `color-1`, ...
    pub fn sized(size: usize) -> Self {
        Self {
            labels: (0..size).map(|i| format!("color-{i}")).collect(),
        }
    }

    /// Palette with explicit labels, in order.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Smallest palette guaranteed to color `graph`: max degree + 1.
    pub fn sufficient_for(graph: &ConflictGraph) -> Self {
        Self::sized(graph.max_degree() + 1)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label of a color index.
    pub fn label(&self, color: usize) -> Option<&str> {
        self.labels.get(color).map(String::as_str)
    }

    /// Whether the palette can color any graph with `graph`'s max degree.
    pub fn covers(&self, graph: &ConflictGraph) -> bool {
        self.len() > graph.max_degree()
    }
}
