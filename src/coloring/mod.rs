//! Greedy graph-coloring heuristics.
//!
//! Assigns every conflict-graph node a color (a small non-negative
//! integer) so that adjacent nodes differ. A color later becomes a time
//! slot, so fewer colors means a shorter timetable.
//!
//! # Heuristics
//!
//! | Heuristic | Order | Notes |
//! |-----------|-------|-------|
//! | `LargestFirst` | static, degree descending | classic Welsh–Powell order |
//! | `Saturation` | dynamic, most constrained first | DSATUR |
//! | `SmallestLast` | static, reverse min-degree elimination | ≤ degeneracy + 1 colors |
//! | `RandomSequential` | static, seeded shuffle | baseline |
//!
//! All ties break by lowest node index, i.e. registration order, so runs
//! are reproducible. Each heuristic picks the first palette color not
//! already used by a colored neighbor, so with a palette of at least
//! max degree + 1 colors none of them can fail.
//!
//! # Usage
//!
//! ```
//! use u_timetable::coloring::{ColoringEngine, Heuristic, Palette};
//! use u_timetable::graph::ConflictGraph;
//! use u_timetable::models::MeetingRegistry;
//!
//! let mut registry = MeetingRegistry::new();
//! registry.add_participants("1", ["Edmund", "Graham"]).unwrap();
//! registry.add_participants("2", ["Graham"]).unwrap();
//! let graph = ConflictGraph::build(&registry);
//!
//! let coloring = ColoringEngine::new()
//!     .color(&graph, &Heuristic::Saturation, &Palette::sufficient_for(&graph))
//!     .unwrap();
//! assert_ne!(coloring.color_of(0), coloring.color_of(1));
//! ```
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Brélaz (1979), "New methods to color the vertices of a graph"

mod assignment;
mod dsatur;
mod greedy;
mod palette;

pub use assignment::Coloring;
pub use dsatur::Saturation;
pub use greedy::{LargestFirst, RandomSequential, SmallestLast};
pub use palette::Palette;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::{Result, TimetableError};
use crate::graph::ConflictGraph;
use crate::validation::validate_coloring;

/// A coloring heuristic.
///
/// Implementations must color every node or fail with
/// `UnsatisfiableColoring`; they never leave gaps. [`ColoringEngine`]
/// rejects any result that is incomplete, out of palette or improper
/// with `InvalidColoring`.
pub trait ColoringStrategy: Send + Sync + Debug {
    /// Heuristic name (e.g., "largest_first").
    fn name(&self) -> &'static str;

    /// Colors every node of `graph` from `palette`.
    fn color(&self, graph: &ConflictGraph, palette: &Palette) -> Result<Coloring>;

    /// Heuristic description.
    fn description(&self) -> &'static str {
        self.name()
    }
}

/// Selectable heuristic, as it appears in a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Heuristic {
    /// Largest degree first.
    #[default]
    LargestFirst,
    /// Saturation degree (DSATUR).
    Saturation,
    /// Smallest degree last.
    SmallestLast,
    /// Seeded random order.
    RandomSequential {
        /// Shuffle seed.
        seed: u64,
    },
}

impl Heuristic {
    /// The strategy implementing this heuristic.
    pub fn strategy(&self) -> Box<dyn ColoringStrategy> {
        match *self {
            Heuristic::LargestFirst => Box::new(LargestFirst),
            Heuristic::Saturation => Box::new(Saturation),
            Heuristic::SmallestLast => Box::new(SmallestLast),
            Heuristic::RandomSequential { seed } => Box::new(RandomSequential::new(seed)),
        }
    }
}

/// Runs a heuristic over a conflict graph.
#[derive(Debug, Clone, Default)]
pub struct ColoringEngine;

impl ColoringEngine {
    /// Creates an engine.
    pub fn new() -> Self {
        Self
    }

    /// Colors `graph` with the selected heuristic.
    pub fn color(
        &self,
        graph: &ConflictGraph,
        heuristic: &Heuristic,
        palette: &Palette,
    ) -> Result<Coloring> {
        self.color_with(graph, heuristic.strategy().as_ref(), palette)
    }

    /// Colors `graph` with any strategy implementation.
    ///
    /// The result is checked against the graph and palette before it is
    /// returned.
    pub fn color_with(
        &self,
        graph: &ConflictGraph,
        strategy: &dyn ColoringStrategy,
        palette: &Palette,
    ) -> Result<Coloring> {
        if !palette.covers(graph) {
            tracing::warn!(
                palette = palette.len(),
                max_degree = graph.max_degree(),
                strategy = strategy.name(),
                "palette smaller than max degree + 1; coloring may fail"
            );
        }

        let coloring = strategy.color(graph, palette)?;
        if let Err(issues) = validate_coloring(graph, &coloring, palette) {
            tracing::warn!(
                strategy = strategy.name(),
                issues = issues.len(),
                "strategy returned an invalid coloring"
            );
            return Err(TimetableError::InvalidColoring {
                strategy: strategy.name().to_string(),
                reason: issues
                    .first()
                    .map(|issue| issue.message.clone())
                    .unwrap_or_default(),
            });
        }

        tracing::debug!(
            strategy = strategy.name(),
            nodes = coloring.len(),
            colors = coloring.color_count(),
            "colored conflict graph"
        );
        Ok(coloring)
    }
}
