//! Timetable quality metrics (KPIs).
//!
//! Computes summary indicators from a conflict graph, the coloring chosen
//! for it and the scheduling window.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Colors used | Distinct colors = time slots |
//! | Degree bound | max degree + 1, the greedy guarantee |
//! | Clique lower bound | Size of a greedily found clique |
//! | Density | edges / (n·(n-1)/2) |
//! | Slot length | window / colors used |
//!
//! # Reference
//! Jensen & Toft (1995), "Graph Coloring Problems", Ch. 1

use crate::coloring::Coloring;
use crate::graph::ConflictGraph;
use crate::models::TimeWindow;

/// Timetable performance indicators.
///
/// All time values are in milliseconds.
#[derive(Debug, Clone)]
pub struct TimetableKpi {
    /// Number of meetings.
    pub meeting_count: usize,
    /// Number of conflicting meeting pairs.
    pub conflict_count: usize,
    /// Largest number of conflicts of a single meeting.
    pub max_degree: usize,
    /// Conflict density (0.0..1.0); 0.0 below two meetings.
    pub density: f64,
    /// Distinct colors (slots) used.
    pub colors_used: usize,
    /// Upper bound guaranteed by greedy coloring: max degree + 1.
    pub degree_bound: usize,
    /// Size of a clique found greedily; no coloring can use fewer colors.
    pub clique_lower_bound: usize,
    /// Length of each slot (ms); 0 when nothing is colored.
    pub slot_length_ms: i64,
}

impl TimetableKpi {
    /// Computes KPIs for a coloring of `graph` laid out over `window`.
    pub fn calculate(graph: &ConflictGraph, coloring: &Coloring, window: &TimeWindow) -> Self {
        let colors_used = coloring.color_count();
        let span = window.span_ms().max(0);
        let slot_length_ms = if colors_used == 0 {
            0
        } else {
            i64::try_from(span / colors_used as i128).unwrap_or(i64::MAX)
        };

        Self {
            meeting_count: graph.node_count(),
            conflict_count: graph.edge_count(),
            max_degree: graph.max_degree(),
            density: graph.density().unwrap_or(0.0),
            colors_used,
            degree_bound: graph.max_degree() + 1,
            clique_lower_bound: greedy_clique_size(graph),
            slot_length_ms,
        }
    }

    /// Whether the coloring hit the clique lower bound (provably optimal).
    pub fn is_optimal(&self) -> bool {
        self.colors_used == self.clique_lower_bound
    }
}

/// Grows a clique from each node, visiting candidates by degree descending,
/// and returns the largest found.
fn greedy_clique_size(graph: &ConflictGraph) -> usize {
    let mut by_degree: Vec<usize> = (0..graph.node_count()).collect();
    by_degree.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));

    let mut best = 0;
    for &seed in &by_degree {
        let mut clique = vec![seed];
        for &candidate in &by_degree {
            if candidate != seed && clique.iter().all(|&m| graph.are_adjacent(m, candidate)) {
                clique.push(candidate);
            }
        }
        best = best.max(clique.len());
    }
    best
}
