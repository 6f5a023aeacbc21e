//! Color → time slot mapping.
//!
//! # Algorithm
//!
//! 1. Collect the distinct colors in use, ascending.
//! 2. Split the window into that many back-to-back pieces.
//! 3. The i-th smallest color gets the i-th piece.

use std::collections::BTreeMap;

use crate::coloring::Coloring;
use crate::error::Result;
use crate::models::TimeWindow;

/// Lays color classes out over a time window.
///
/// # Example
///
/// ```
/// use u_timetable::coloring::Coloring;
/// use u_timetable::scheduler::SlotAssigner;
///
/// const HOUR: i64 = 3_600_000;
/// let coloring = Coloring::new("manual", vec![0, 1, 0, 2, 3]);
///
/// let slots = SlotAssigner::new().assign(&coloring, 14 * HOUR, 18 * HOUR).unwrap();
/// assert_eq!(slots.len(), 4);
/// assert_eq!(slots[&2].start_ms, 16 * HOUR);
/// assert_eq!(slots[&3].end_ms, 18 * HOUR);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SlotAssigner;

impl SlotAssigner {
    /// Creates an assigner.
    pub fn new() -> Self {
        Self
    }

    /// Maps each color in use to its slot within `[from_ms, to_ms)`.
    ///
    /// Fails with `NoMeetings` for an empty coloring and `InvalidWindow`
    /// when `to_ms <= from_ms`.
    pub fn assign(
        &self,
        coloring: &Coloring,
        from_ms: i64,
        to_ms: i64,
    ) -> Result<BTreeMap<usize, TimeWindow>> {
        self.assign_window(coloring, &TimeWindow::new(from_ms, to_ms))
    }

    /// Same as [`assign`](Self::assign), taking the window as a value.
    pub fn assign_window(
        &self,
        coloring: &Coloring,
        window: &TimeWindow,
    ) -> Result<BTreeMap<usize, TimeWindow>> {
        let colors = coloring.distinct_colors();
        let pieces = window.split(colors.len())?;

        tracing::debug!(
            slots = colors.len(),
            start_ms = window.start_ms,
            end_ms = window.end_ms,
            "assigned time slots"
        );
        Ok(colors.into_iter().zip(pieces).collect())
    }
}
