//! Shared test fixtures.
//!
//! The department example: seven meetings among four people. Meetings
//! 1, 3, 4 and 5 form a 4-clique, so every proper coloring needs at least
//! four colors.

use crate::graph::ConflictGraph;
use crate::models::MeetingRegistry;

/// Department meetings in registration order "1" to "7".
pub(crate) fn sample_registry() -> MeetingRegistry {
    let mut r = MeetingRegistry::new();
    r.add_participants("1", ["Edmund", "Graham", "Sanja"]).unwrap();
    r.add_participants("2", ["Graham"]).unwrap();
    r.add_participants("3", ["Graham", "Kath", "Sanja"]).unwrap();
    r.add_participants("4", ["Edmund", "Sanja"]).unwrap();
    r.add_participants("5", ["Edmund", "Kath", "Sanja"]).unwrap();
    r.add_participants("6", ["Kath"]).unwrap();
    r.add_participants("7", ["Edmund"]).unwrap();
    r
}

/// Conflict graph of [`sample_registry`].
pub(crate) fn sample_graph() -> ConflictGraph {
    ConflictGraph::build(&sample_registry())
}
