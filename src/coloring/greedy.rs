//! Static-order greedy coloring.
//!
//! Each strategy here fixes a node order up front and then colors nodes
//! one at a time with the first palette color not already used by a
//! colored neighbor. Only the order differs between strategies.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{Coloring, ColoringStrategy, Palette};
use crate::error::{Result, TimetableError};
use crate::graph::ConflictGraph;

pub(crate) const UNCOLORED: usize = usize::MAX;

/// Colors `graph` visiting nodes in `order` (a permutation of node indices).
pub(crate) fn color_in_order(
    graph: &ConflictGraph,
    order: &[usize],
    palette: &Palette,
    strategy: &str,
) -> Result<Coloring> {
    let mut colors = vec![UNCOLORED; graph.node_count()];
    let mut used = vec![false; palette.len()];

    for &node in order {
        used.iter_mut().for_each(|u| *u = false);
        for neighbor in graph.neighbors(node) {
            if let Some(slot) = used.get_mut(colors[neighbor]) {
                *slot = true;
            }
        }
        colors[node] = first_free(&used).ok_or_else(|| unsatisfiable(graph, node, palette))?;
    }

    debug_assert!(colors.iter().all(|&c| c != UNCOLORED));
    Ok(Coloring::new(strategy, colors))
}

/// Index of the first `false` entry.
pub(crate) fn first_free(used: &[bool]) -> Option<usize> {
    used.iter().position(|&u| !u)
}

pub(crate) fn unsatisfiable(graph: &ConflictGraph, node: usize, palette: &Palette) -> TimetableError {
    TimetableError::UnsatisfiableColoring {
        node,
        label: graph
            .node(node)
            .map(|n| n.label.clone())
            .unwrap_or_default(),
        palette_size: palette.len(),
    }
}

/// Largest-degree-first ordering.
///
/// Nodes are sorted once by degree, descending; equal degrees keep
/// ascending node index. The order is not recomputed while coloring.
#[derive(Debug, Clone, Copy, Default)]
pub struct LargestFirst;

impl LargestFirst {
    /// Visiting order for `graph`.
    pub fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let mut order: Vec<usize> = (0..graph.node_count()).collect();
        // Stable sort: ties stay in index order.
        order.sort_by(|&a, &b| graph.degree(b).cmp(&graph.degree(a)));
        order
    }
}

impl ColoringStrategy for LargestFirst {
    fn name(&self) -> &'static str {
        "largest_first"
    }

    fn color(&self, graph: &ConflictGraph, palette: &Palette) -> Result<Coloring> {
        color_in_order(graph, &self.order(graph), palette, self.name())
    }

    fn description(&self) -> &'static str {
        "Largest degree first, static order"
    }
}

/// Smallest-last ordering (Matula & Beck).
///
/// Repeatedly removes a node of minimum residual degree (lowest index on
/// ties), then colors nodes in reverse removal order. Uses at most
/// degeneracy + 1 colors.
///
/// # Reference
/// Matula & Beck (1983), "Smallest-last ordering and clustering and graph
/// coloring algorithms"
#[derive(Debug, Clone, Copy, Default)]
pub struct SmallestLast;

impl SmallestLast {
    /// Visiting order for `graph`.
    pub fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let n = graph.node_count();
        let mut residual: Vec<usize> = (0..n).map(|i| graph.degree(i)).collect();
        let mut removed = vec![false; n];
        let mut removal = Vec::with_capacity(n);

        for _ in 0..n {
            let Some(next) = (0..n)
                .filter(|&i| !removed[i])
                .min_by_key(|&i| residual[i])
            else {
                break;
            };
            removed[next] = true;
            removal.push(next);
            for neighbor in graph.neighbors(next) {
                if !removed[neighbor] {
                    residual[neighbor] -= 1;
                }
            }
        }

        removal.reverse();
        removal
    }
}

impl ColoringStrategy for SmallestLast {
    fn name(&self) -> &'static str {
        "smallest_last"
    }

    fn color(&self, graph: &ConflictGraph, palette: &Palette) -> Result<Coloring> {
        color_in_order(graph, &self.order(graph), palette, self.name())
    }

    fn description(&self) -> &'static str {
        "Smallest degree last, reverse elimination order"
    }
}

/// Random sequential ordering.
///
/// Shuffles node indices with a seeded generator, so a given seed always
/// produces the same order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSequential {
    /// Shuffle seed.
    pub seed: u64,
}

impl RandomSequential {
    /// Creates the strategy with a seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Visiting order for `graph`.
    pub fn order(&self, graph: &ConflictGraph) -> Vec<usize> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let mut order: Vec<usize> = (0..graph.node_count()).collect();
        order.shuffle(&mut rng);
        order
    }
}

impl ColoringStrategy for RandomSequential {
    fn name(&self) -> &'static str {
        "random_sequential"
    }

    fn color(&self, graph: &ConflictGraph, palette: &Palette) -> Result<Coloring> {
        color_in_order(graph, &self.order(graph), palette, self.name())
    }

    fn description(&self) -> &'static str {
        "Seeded random order"
    }
}
