//! Conflict-free timetabling pipeline.
//!
//! # Algorithm
//!
//! 1. Build the participant conflict graph from the registry.
//! 2. Color it with the configured heuristic.
//! 3. Split the window into one slot per color, in color order.
//! 4. Place every meeting in the slot of its color.
//!
//! # Complexity
//! O(n²) graph construction plus O(n·c) coloring for n meetings and c
//! palette colors.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::SlotAssigner;
use crate::coloring::{Coloring, ColoringEngine, Heuristic, Palette};
use crate::error::{Result, TimetableError};
use crate::graph::ConflictGraph;
use crate::models::{MeetingRegistry, TimeSlot, TimeWindow, Timetable};

/// Input container for timetabling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimetableRequest {
    /// Meetings to place.
    pub registry: MeetingRegistry,
    /// Window to divide into slots.
    pub window: TimeWindow,
    /// Coloring heuristic.
    #[serde(default)]
    pub heuristic: Heuristic,
    /// Colors available. `None` = max degree + 1.
    #[serde(default)]
    pub palette: Option<Palette>,
}

impl TimetableRequest {
    /// Creates a request using the default heuristic and an automatic palette.
    pub fn new(registry: MeetingRegistry, window: TimeWindow) -> Self {
        Self {
            registry,
            window,
            heuristic: Heuristic::default(),
            palette: None,
        }
    }

    /// Sets the heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets an explicit palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }
}

/// Everything produced by one scheduling run.
///
/// Reporting needs the graph and coloring alongside the timetable (to
/// draw conflicts, attendance, color-coded nodes).
#[derive(Debug, Clone)]
pub struct TimetableRun {
    /// Conflict graph of the registered meetings.
    pub graph: ConflictGraph,
    /// Node → color assignment.
    pub coloring: Coloring,
    /// Color → slot interval.
    pub slots: BTreeMap<usize, TimeWindow>,
    /// Slot → meetings listing.
    pub timetable: Timetable,
}

/// Conflict-free meeting scheduler.
///
/// # Example
///
/// ```
/// use u_timetable::coloring::Heuristic;
/// use u_timetable::models::{MeetingRegistry, TimeWindow};
/// use u_timetable::scheduler::TimetableScheduler;
///
/// const HOUR: i64 = 3_600_000;
/// let mut registry = MeetingRegistry::new();
/// registry.add_participants("design", ["Ana", "Bo"]).unwrap();
/// registry.add_participants("budget", ["Bo", "Cy"]).unwrap();
/// registry.add_participants("hiring", ["Dee"]).unwrap();
///
/// let timetable = TimetableScheduler::new()
///     .with_heuristic(Heuristic::Saturation)
///     .schedule(&registry, TimeWindow::new(9 * HOUR, 11 * HOUR))
///     .unwrap();
///
/// assert_eq!(timetable.slot_count(), 2);
/// assert_ne!(
///     timetable.slot_for_meeting("design").unwrap().color,
///     timetable.slot_for_meeting("budget").unwrap().color,
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct TimetableScheduler {
    heuristic: Heuristic,
    palette: Option<Palette>,
    engine: ColoringEngine,
}

impl TimetableScheduler {
    /// Creates a scheduler with the default heuristic and automatic palette.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the coloring heuristic.
    pub fn with_heuristic(mut self, heuristic: Heuristic) -> Self {
        self.heuristic = heuristic;
        self
    }

    /// Sets an explicit palette.
    ///
    /// A palette smaller than max degree + 1 may make coloring fail.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Schedules registered meetings into `window`.
    pub fn schedule(&self, registry: &MeetingRegistry, window: TimeWindow) -> Result<Timetable> {
        Ok(self.run(registry, window)?.timetable)
    }

    /// Schedules from a request.
    pub fn schedule_request(&self, request: &TimetableRequest) -> Result<Timetable> {
        Ok(self.run_request(request)?.timetable)
    }

    /// Runs a request, keeping the intermediate graph and coloring.
    pub fn run_request(&self, request: &TimetableRequest) -> Result<TimetableRun> {
        let scheduler = Self {
            heuristic: request.heuristic,
            palette: request.palette.clone(),
            engine: self.engine.clone(),
        };
        scheduler.run(&request.registry, request.window)
    }

    /// Schedules, keeping the intermediate graph and coloring.
    pub fn run(&self, registry: &MeetingRegistry, window: TimeWindow) -> Result<TimetableRun> {
        if registry.is_empty() {
            return Err(TimetableError::NoMeetings);
        }
        window.validate()?;

        let graph = ConflictGraph::build(registry);
        let palette = match &self.palette {
            Some(p) => p.clone(),
            None => Palette::sufficient_for(&graph),
        };

        let coloring = self.engine.color(&graph, &self.heuristic, &palette)?;
        let slots = SlotAssigner::new().assign_window(&coloring, &window)?;
        let timetable = build_timetable(&graph, &coloring, &slots);

        tracing::info!(
            meetings = graph.node_count(),
            conflicts = graph.edge_count(),
            slots = timetable.slot_count(),
            strategy = %coloring.strategy,
            "timetable scheduled"
        );

        Ok(TimetableRun {
            graph,
            coloring,
            slots,
            timetable,
        })
    }
}

/// Groups meetings by color into their slots.
fn build_timetable(
    graph: &ConflictGraph,
    coloring: &Coloring,
    slots: &BTreeMap<usize, TimeWindow>,
) -> Timetable {
    let mut timetable = Timetable::new(coloring.strategy.clone());
    for (color, nodes) in coloring.classes() {
        let Some(window) = slots.get(&color) else {
            continue;
        };
        let mut slot = TimeSlot::new(color, *window);
        for node in nodes {
            if let Some(n) = graph.node(node) {
                slot = slot.with_meeting(n.label.clone());
            }
        }
        timetable.add_slot(slot);
    }
    timetable
}
