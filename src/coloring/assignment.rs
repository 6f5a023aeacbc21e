//! Coloring results.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A complete node → color assignment.
///
/// Produced once per heuristic run and never mutated afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coloring {
    /// Heuristic that produced the assignment.
    pub strategy: String,
    colors: Vec<usize>,
}

impl Coloring {
    /// Wraps a color per node (index = node index).
    pub fn new(strategy: impl Into<String>, colors: Vec<usize>) -> Self {
        Self {
            strategy: strategy.into(),
            colors,
        }
    }

    /// Colors indexed by node.
    pub fn colors(&self) -> &[usize] {
        &self.colors
    }

    /// Color of a node.
    pub fn color_of(&self, node: usize) -> Option<usize> {
        self.colors.get(node).copied()
    }

    /// Number of colored nodes.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Whether no node is colored.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Distinct colors in use, ascending.
    pub fn distinct_colors(&self) -> Vec<usize> {
        self.classes().into_keys().collect()
    }

    /// Number of distinct colors in use.
    pub fn color_count(&self) -> usize {
        self.classes().len()
    }

    /// Color classes: color → node indices (ascending).
    pub fn classes(&self) -> BTreeMap<usize, Vec<usize>> {
        let mut classes: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
        for (node, &color) in self.colors.iter().enumerate() {
            classes.entry(color).or_default().push(node);
        }
        classes
    }
}
