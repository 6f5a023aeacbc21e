//! Saturation-degree coloring (DSATUR).
//!
//! # Algorithm
//!
//! 1. Every node starts uncolored with an empty saturation set (the
//!    distinct colors seen among its colored neighbors).
//! 2. Pick the uncolored node with the largest saturation set; break ties
//!    by larger degree, then by lower node index. On the first step all
//!    sets are empty, so this seeds with the max-degree node.
//! 3. Give it the first palette color absent from its saturation set.
//! 4. Add that color to the saturation sets of its uncolored neighbors.
//! 5. Repeat until every node is colored.
//!
//! # Complexity
//! O(n² + n·c) for n nodes and c palette colors.
//!
//! # Reference
//! Brélaz (1979), "New methods to color the vertices of a graph",
//! Communications of the ACM 22(4)

use std::collections::BTreeSet;

use super::greedy::{unsatisfiable, UNCOLORED};
use super::{Coloring, ColoringStrategy, Palette};
use crate::error::Result;
use crate::graph::ConflictGraph;

/// DSATUR heuristic.
///
/// Reacts to local color pressure instead of a static order, which tends
/// to use fewer colors on graphs with irregular degree distribution.
#[derive(Debug, Clone, Copy, Default)]
pub struct Saturation;

impl Saturation {
    /// Picks the next node to color, or `None` when all are colored.
    fn select(graph: &ConflictGraph, colors: &[usize], saturation: &[BTreeSet<usize>]) -> Option<usize> {
        let mut best: Option<usize> = None;
        for node in (0..colors.len()).filter(|&i| colors[i] == UNCOLORED) {
            let better = match best {
                None => true,
                Some(b) => {
                    (saturation[node].len(), graph.degree(node))
                        > (saturation[b].len(), graph.degree(b))
                }
            };
            if better {
                best = Some(node);
            }
        }
        best
    }
}

impl ColoringStrategy for Saturation {
    fn name(&self) -> &'static str {
        "saturation"
    }

    fn color(&self, graph: &ConflictGraph, palette: &Palette) -> Result<Coloring> {
        let n = graph.node_count();
        let mut colors = vec![UNCOLORED; n];
        let mut saturation: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];

        while let Some(node) = Self::select(graph, &colors, &saturation) {
            let color = (0..palette.len())
                .find(|c| !saturation[node].contains(c))
                .ok_or_else(|| unsatisfiable(graph, node, palette))?;
            colors[node] = color;

            for neighbor in graph.neighbors(node) {
                if colors[neighbor] == UNCOLORED {
                    saturation[neighbor].insert(color);
                }
            }
        }

        Ok(Coloring::new(self.name(), colors))
    }

    fn description(&self) -> &'static str {
        "Saturation degree (DSATUR), dynamic order"
    }
}
