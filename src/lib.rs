//! Self-avoiding labyrinth walks on an integer 2D grid.
//!
//! A walk starts at the origin and advances one grid cell at a time,
//! following a caller-supplied sequence of segment lengths. Within a
//! segment the walker holds a fixed turn preference (its "lean"): at each
//! step it tries the preferred turn first, then straight ahead, then the
//! opposite turn, committing to the first cell it has not visited before.
//! When a segment completes, the position is recorded as a boundary and
//! the lean flips for the next segment. The walk either completes every
//! segment or blocks when all three candidate cells are already visited.
//!
//! The crate is the path-generation core only: it produces ordered visited
//! positions, segment boundaries and a success flag. Rendering the result
//! is left to consumers of [`WalkReport`].
//!
//! # Example
//! ```
//! use labyrinth::{Lean, Point, WalkPlan, Walker};
//!
//! let plan = WalkPlan::new(vec![2, 1], Lean::Right);
//! let report = Walker::new(plan).run();
//!
//! assert!(report.success);
//! assert_eq!(report.start(), Point::zero());
//! assert_eq!(report.end(), Point::new(1, 2));
//! ```

pub mod direction;
pub mod geometry;
pub mod walk;

pub use direction::Orientation;
pub use geometry::Point;
pub use walk::{Lean, WalkOutcome, WalkPlan, WalkReport, Walker};

/// Integer grid coordinate. One unit = one grid cell.
pub type Coord = i64;

/// Crate-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The walk ran out of unvisited candidate cells before completing
    /// every segment.
    #[error("walk blocked at {at}: all three candidate cells already visited")]
    Blocked {
        /// Position the walker was frozen at.
        at: Point,
    },
}

/// Result type for crate operations.
pub type Result<T> = std::result::Result<T, Error>;
