//! Participant conflict graph.
//!
//! Each registered meeting becomes one node; two nodes are joined when
//! their meetings share at least one participant. The graph is simple,
//! undirected and unweighted, and is immutable once built.
//!
//! # Complexity
//! Construction compares every pair of meetings: O(n² · p log p) for
//! n meetings of at most p participants.

mod conflict;

pub use conflict::{ConflictEdge, ConflictGraph, ConflictNode};
