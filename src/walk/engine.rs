//! Walk engine: the step rule and the segment-scheduling loop.
//!
//! The engine owns all mutable walk state. Each step builds a three-way
//! priority list of candidate orientations from the current lean, probes
//! the candidates' target cells against the visited set and commits to
//! the first unvisited one. Steps commit or fail atomically; a failed
//! step leaves no observable partial state.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::direction::Orientation;
use crate::geometry::{Point, Points};
use crate::walk::ordered_set::OrderedPointSet;
use crate::walk::report::WalkReport;

/// Turn preference held for the duration of one segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lean {
    /// Try the counter-clockwise turn first.
    Left,
    /// Try the clockwise turn first.
    Right,
}

impl Lean {
    /// The other preference.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Lean::Left => Lean::Right,
            Lean::Right => Lean::Left,
        }
    }

    /// Candidate orientations in priority order for the given facing.
    ///
    /// The two orderings are spelled out rather than built by reversing a
    /// list, so the tie-break rule is explicit: the first candidate whose
    /// target cell is unvisited wins.
    #[inline]
    const fn priority(self, facing: Orientation) -> [Orientation; 3] {
        match self {
            Lean::Left => [facing.turned_left(), facing, facing.turned_right()],
            Lean::Right => [facing.turned_right(), facing, facing.turned_left()],
        }
    }
}

/// Terminal state of the segment scheduler.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WalkOutcome {
    /// Segments remain and the walker is not blocked.
    Running,
    /// Every segment completed.
    Succeeded,
    /// A step found all three candidate cells already visited.
    Failed,
}

/// Construction input for a walk.
///
/// The segment lengths are immutable for the life of the walk. A
/// zero-length segment is legal: it contributes no steps but still
/// records a boundary and flips the lean. An empty plan yields an
/// immediately successful walk containing only the origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkPlan {
    /// Ordered step counts, one per segment.
    pub segments: Vec<u32>,

    /// Turn preference for the first segment.
    pub initial_lean: Lean,
}

impl WalkPlan {
    /// Create a plan from segment lengths and an initial lean.
    pub fn new(segments: Vec<u32>, initial_lean: Lean) -> Self {
        Self {
            segments,
            initial_lean,
        }
    }

    /// Total number of steps across all segments.
    pub fn total_steps(&self) -> usize {
        self.segments.iter().map(|&n| n as usize).sum()
    }
}

impl Default for WalkPlan {
    fn default() -> Self {
        Self {
            segments: Vec::new(),
            initial_lean: Lean::Right,
        }
    }
}

/// The walk engine.
///
/// Owns the full mutable state of one walk: position, facing, lean,
/// visited set, boundaries and outcome. Single-threaded and
/// deterministic; identical plans always produce identical reports.
#[derive(Debug, Clone)]
pub struct Walker {
    plan: WalkPlan,
    position: Point,
    orientation: Orientation,
    lean: Lean,
    visited: OrderedPointSet,
    boundaries: Points,
    outcome: WalkOutcome,
}

impl Walker {
    /// Create a walker at the origin, ready to run the given plan.
    ///
    /// The starting orientation depends on the initial lean: `West` for a
    /// right lean, `East` for a left lean. The asymmetry makes the very
    /// first step go North in both cases, since the preferred turn from
    /// either starting facing points North.
    pub fn new(plan: WalkPlan) -> Self {
        let orientation = match plan.initial_lean {
            Lean::Left => Orientation::East,
            Lean::Right => Orientation::West,
        };
        let mut visited = OrderedPointSet::new();
        visited.insert(Point::zero());
        Self {
            lean: plan.initial_lean,
            plan,
            position: Point::zero(),
            orientation,
            visited,
            boundaries: Points::new(),
            outcome: WalkOutcome::Running,
        }
    }

    /// Current position of the walker.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Current facing direction.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Turn preference for the segment in progress.
    pub fn lean(&self) -> Lean {
        self.lean
    }

    /// Scheduler state.
    pub fn outcome(&self) -> WalkOutcome {
        self.outcome
    }

    /// Visited positions so far, in step order.
    pub fn visited(&self) -> &[Point] {
        self.visited.as_slice()
    }

    /// Boundaries of completed segments, in order.
    pub fn boundaries(&self) -> &[Point] {
        &self.boundaries
    }

    /// Attempt a single step.
    ///
    /// Probes the lean-ordered candidates and commits to the first one
    /// whose target cell is unvisited, updating facing, position and the
    /// visited set together. Returns `false` without mutating anything
    /// when all three targets are already visited.
    pub fn try_step(&mut self) -> bool {
        for candidate in self.lean.priority(self.orientation) {
            let target = self.position + candidate.displacement();
            if self.visited.contains(&target) {
                continue;
            }
            self.orientation = candidate;
            self.position = target;
            self.visited.insert(target);
            return true;
        }
        false
    }

    /// Run the plan to completion or blockage.
    pub fn run(self) -> WalkReport {
        self.run_with_callback(|_, _| {})
    }

    /// Run the plan, reporting progress after each successful step.
    ///
    /// The callback receives `(steps_completed, steps_total)`. It only
    /// observes; the walk state cannot be touched from inside it.
    pub fn run_with_callback<F>(mut self, mut callback: F) -> WalkReport
    where
        F: FnMut(usize, usize),
    {
        let total = self.plan.total_steps();
        let mut completed = 0usize;

        for index in 0..self.plan.segments.len() {
            let length = self.plan.segments[index];
            for _ in 0..length {
                if !self.try_step() {
                    debug!(
                        "walk blocked at {} during segment {} ({} of {} steps taken)",
                        self.position, index, completed, total
                    );
                    self.outcome = WalkOutcome::Failed;
                    return self.into_report();
                }
                completed += 1;
                callback(completed, total);
            }
            // Boundary is recorded before the lean flips.
            self.boundaries.push(self.position);
            self.lean = self.lean.opposite();
            trace!("segment {} complete at {}", index, self.position);
        }

        self.outcome = WalkOutcome::Succeeded;
        self.into_report()
    }

    fn into_report(self) -> WalkReport {
        WalkReport {
            success: self.outcome == WalkOutcome::Succeeded,
            visited: self.visited.into_points(),
            boundaries: self.boundaries,
        }
    }
}
