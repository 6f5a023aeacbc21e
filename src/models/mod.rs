//! Timetabling domain models.
//!
//! Provides the data types for describing a timetabling problem (meetings
//! and their participants, the scheduling window) and its solution (time
//! slots holding meetings).
//!
//! # Domain Mappings
//!
//! | u-timetable | Office | University | Conference |
//! |-------------|--------|------------|------------|
//! | Meeting | Meeting | Exam | Session |
//! | Participant | Attendee | Student | Speaker |
//! | TimeSlot | Hour block | Exam period | Track slot |
//! | Timetable | Day plan | Exam timetable | Programme |

mod meeting;
mod timetable;
mod window;

pub use meeting::{Meeting, MeetingRegistry};
pub use timetable::{TimeSlot, Timetable};
pub use window::TimeWindow;
