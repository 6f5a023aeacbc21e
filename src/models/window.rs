//! Time window model.
//!
//! # Time Model
//! All times are in milliseconds relative to a scheduling epoch.
//! The consumer defines what epoch means (midnight, shift start, UTC).

use serde::{Deserialize, Serialize};

use crate::error::{Result, TimetableError};

/// A time interval [start, end).
///
/// Half-open interval: includes start, excludes end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeWindow {
    /// Interval start (ms, inclusive).
    pub start_ms: i64,
    /// Interval end (ms, exclusive).
    pub end_ms: i64,
}

impl TimeWindow {
    /// Creates a new time window. No ordering check is made here.
    pub fn new(start_ms: i64, end_ms: i64) -> Self {
        Self { start_ms, end_ms }
    }

    /// Creates a window, rejecting `end_ms <= start_ms`.
    pub fn checked(start_ms: i64, end_ms: i64) -> Result<Self> {
        let window = Self::new(start_ms, end_ms);
        window.validate()?;
        Ok(window)
    }

    /// Fails with `InvalidWindow` unless the window is non-empty.
    pub fn validate(&self) -> Result<()> {
        if self.end_ms <= self.start_ms {
            return Err(TimetableError::InvalidWindow {
                start_ms: self.start_ms,
                end_ms: self.end_ms,
            });
        }
        Ok(())
    }

    /// Duration of this window (ms), saturating at `i64::MAX` / `i64::MIN`.
    #[inline]
    pub fn duration_ms(&self) -> i64 {
        self.end_ms.saturating_sub(self.start_ms)
    }

    /// Exact duration, wide enough for any pair of `i64` endpoints.
    #[inline]
    pub(crate) fn span_ms(&self) -> i128 {
        i128::from(self.end_ms) - i128::from(self.start_ms)
    }

    /// Whether a timestamp falls within this window.
    #[inline]
    pub fn contains(&self, time_ms: i64) -> bool {
        time_ms >= self.start_ms && time_ms < self.end_ms
    }

    /// Whether two windows overlap.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start_ms < other.end_ms && other.start_ms < self.end_ms
    }

    /// Splits the window into `parts` back-to-back sub-windows.
    ///
    /// Boundaries are `start + duration * i / parts`, so the pieces are
    /// equal whenever `parts` divides the duration and otherwise differ by
    /// at most one millisecond. The first piece starts at `start_ms` and
    /// the last ends at `end_ms`.
    pub fn split(&self, parts: usize) -> Result<Vec<TimeWindow>> {
        if parts == 0 {
            return Err(TimetableError::NoMeetings);
        }
        self.validate()?;

        let span = self.span_ms();
        let start = i128::from(self.start_ms);
        let n = parts as i128;
        // Always within [start_ms, end_ms], so the narrowing is lossless.
        let boundary = |i: i128| (start + span * i / n) as i64;

        Ok((0..n)
            .map(|i| TimeWindow::new(boundary(i), boundary(i + 1)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: i64 = 3_600_000;

    #[test]
    fn test_time_window() {
        let w = TimeWindow::new(100, 200);
        assert_eq!(w.duration_ms(), 100);
        assert!(w.contains(100));
        assert!(w.contains(199));
        assert!(!w.contains(200)); // exclusive end
        assert!(!w.contains(50));
    }

    #[test]
    fn test_time_window_overlap() {
        let a = TimeWindow::new(0, 100);
        let b = TimeWindow::new(50, 150);
        assert!(a.overlaps(&b));
        assert!(b.overlaps(&a));

        let c = TimeWindow::new(100, 200); // touching
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_checked_rejects_degenerate() {
        assert!(TimeWindow::checked(0, 10).is_ok());
        assert_eq!(
            TimeWindow::checked(10, 10).unwrap_err(),
            TimetableError::InvalidWindow {
                start_ms: 10,
                end_ms: 10
            }
        );
        assert!(TimeWindow::checked(10, 5).is_err());
    }

    #[test]
    fn test_split_afternoon_into_hours() {
        let afternoon = TimeWindow::new(14 * HOUR, 18 * HOUR);
        let slots = afternoon.split(4).unwrap();
        let starts: Vec<i64> = slots.iter().map(|s| s.start_ms / HOUR).collect();
        assert_eq!(starts, vec![14, 15, 16, 17]);
        assert!(slots.iter().all(|s| s.duration_ms() == HOUR));
        assert_eq!(slots[3].end_ms, 18 * HOUR);
    }

    #[test]
    fn test_split_uneven_is_contiguous() {
        let w = TimeWindow::new(0, 10);
        let slots = w.split(3).unwrap();
        assert_eq!(slots[0].start_ms, 0);
        assert_eq!(slots[2].end_ms, 10);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
        assert!(slots.iter().all(|s| (3..=4).contains(&s.duration_ms())));
    }

    #[test]
    fn test_full_range_duration_saturates() {
        let w = TimeWindow::new(i64::MIN, i64::MAX);
        assert_eq!(w.duration_ms(), i64::MAX);
        assert_eq!(TimeWindow::new(i64::MAX, i64::MIN).duration_ms(), i64::MIN);
    }

    #[test]
    fn test_split_full_range() {
        let w = TimeWindow::new(i64::MIN, i64::MAX);
        let slots = w.split(2).unwrap();
        assert_eq!(slots.len(), 2);
        assert_eq!(slots[0].start_ms, i64::MIN);
        assert_eq!(slots[0].end_ms, slots[1].start_ms);
        assert_eq!(slots[1].end_ms, i64::MAX);
        assert!(slots.iter().all(|s| s.start_ms < s.end_ms));

        let slots = w.split(7).unwrap();
        assert_eq!(slots[6].end_ms, i64::MAX);
        for pair in slots.windows(2) {
            assert_eq!(pair[0].end_ms, pair[1].start_ms);
        }
    }

    #[test]
    fn test_split_errors() {
        assert_eq!(
            TimeWindow::new(0, 10).split(0).unwrap_err(),
            TimetableError::NoMeetings
        );
        assert!(matches!(
            TimeWindow::new(10, 0).split(2),
            Err(TimetableError::InvalidWindow { .. })
        ));
    }
}
