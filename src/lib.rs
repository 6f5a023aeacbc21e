//! Conflict-free meeting timetabling for the U-Engine ecosystem.
//!
//! Places meetings into time slots so that no two meetings sharing a
//! participant run at the same time. Participant overlap becomes a
//! conflict graph, a greedy coloring heuristic turns the graph into color
//! classes, and each class is mapped onto a contiguous piece of the
//! scheduling window.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Meeting`, `MeetingRegistry`, `TimeWindow`,
//!   `TimeSlot`, `Timetable`
//! - **`graph`**: `ConflictGraph` construction and queries
//! - **`coloring`**: `LargestFirst`, `Saturation` (DSATUR), `SmallestLast`,
//!   `RandomSequential` and the `ColoringEngine`
//! - **`scheduler`**: `SlotAssigner`, `TimetableScheduler`, `TimetableKpi`
//! - **`validation`**: Registration and coloring integrity checks
//!
//! # Architecture
//!
//! The core is synchronous and owns no global state: every run builds its
//! own graph. Drawing, attendance printing and other reporting consume the
//! plain data exposed here and are out of scope.
//!
//! # References
//!
//! - Welsh & Powell (1967), "An upper bound for the chromatic number of a graph"
//! - Brélaz (1979), "New methods to color the vertices of a graph"
//! - de Werra (1985), "An introduction to timetabling"

pub mod coloring;
pub mod error;
pub mod graph;
pub mod models;
pub mod scheduler;
pub mod validation;

#[cfg(test)]
pub(crate) mod fixtures;

pub use error::{Result, TimetableError};
