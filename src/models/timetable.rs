//! Timetable (solution) model.
//!
//! A timetable lists, for each time slot, the meetings held in it. It is
//! the shape handed to reporting: slot windows in ascending order, each
//! with the meeting identifiers in registration order.

use serde::{Deserialize, Serialize};

use super::TimeWindow;

/// One time slot and the meetings placed in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Color index this slot was derived from.
    pub color: usize,
    /// Slot interval.
    pub window: TimeWindow,
    /// Meeting identifiers, in registration order.
    pub meetings: Vec<String>,
}

impl TimeSlot {
    /// Creates an empty slot.
    pub fn new(color: usize, window: TimeWindow) -> Self {
        Self {
            color,
            window,
            meetings: Vec::new(),
        }
    }

    /// Adds a meeting to the slot.
    pub fn with_meeting(mut self, meeting_id: impl Into<String>) -> Self {
        self.meetings.push(meeting_id.into());
        self
    }
}

/// A complete timetable.
///
/// Slots are only appended through [`add_slot`](Timetable::add_slot) and
/// read through [`slots`](Timetable::slots).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timetable {
    /// Coloring heuristic that produced the slot grouping.
    pub strategy: String,
    /// Slots in ascending color (= time) order.
    slots: Vec<TimeSlot>,
}

impl Timetable {
    /// Creates an empty timetable.
    pub fn new(strategy: impl Into<String>) -> Self {
        Self {
            strategy: strategy.into(),
            slots: Vec::new(),
        }
    }

    /// Adds a slot.
    pub fn add_slot(&mut self, slot: TimeSlot) {
        self.slots.push(slot);
    }

    /// Slots in time order.
    pub fn slots(&self) -> &[TimeSlot] {
        &self.slots
    }

    /// Number of slots.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Whether the timetable has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slot holding a meeting.
    pub fn slot_for_meeting(&self, meeting_id: &str) -> Option<&TimeSlot> {
        self.slots
            .iter()
            .find(|s| s.meetings.iter().any(|m| m == meeting_id))
    }

    /// Meetings held in the slot derived from `color`.
    pub fn meetings_in_slot(&self, color: usize) -> Option<&[String]> {
        self.slots
            .iter()
            .find(|s| s.color == color)
            .map(|s| s.meetings.as_slice())
    }

    /// Total number of scheduled meetings.
    pub fn meeting_count(&self) -> usize {
        self.slots.iter().map(|s| s.meetings.len()).sum()
    }

    /// Time span covered: first slot start to last slot end.
    pub fn span(&self) -> Option<TimeWindow> {
        let first = self.slots.first()?;
        let last = self.slots.last()?;
        Some(TimeWindow::new(first.window.start_ms, last.window.end_ms))
    }
}
