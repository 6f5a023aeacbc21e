//! Slot assignment, the scheduling pipeline and KPI evaluation.
//!
//! # Algorithm
//!
//! `TimetableScheduler` builds the conflict graph, colors it and hands
//! the coloring to `SlotAssigner`, which turns each color class into one
//! contiguous slot of the window. Meetings sharing a participant always
//! land in different slots.
//!
//! # KPI
//!
//! `TimetableKpi` reports colors used against the max-degree upper bound
//! and a clique lower bound.
//!
//! # References
//!
//! - de Werra (1985), "An introduction to timetabling"
//! - Burke & Petrovic (2002), "Recent research directions in automated timetabling"

mod kpi;
mod slots;
mod timetabler;

pub use kpi::TimetableKpi;
pub use slots::SlotAssigner;
pub use timetabler::{TimetableRequest, TimetableRun, TimetableScheduler};
