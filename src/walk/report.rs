//! Terminal output of a walk.

use crate::geometry::{Point, Points};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// The frozen result of a finished walk.
///
/// This is the full output surface consumed by collaborators such as a
/// renderer: the ordered path, the segment boundaries and the success
/// flag. `visited` always starts at the origin; on failure it retains the
/// partial path up to the last successful step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkReport {
    /// True if every segment completed without blocking.
    pub success: bool,

    /// Every visited position in step order, origin first.
    pub visited: Points,

    /// Position reached at the end of each completed segment, in order.
    pub boundaries: Points,
}

impl WalkReport {
    /// First visited position. Always the origin.
    pub fn start(&self) -> Point {
        self.visited.first().copied().unwrap_or_else(Point::zero)
    }

    /// Position at termination, whether the walk succeeded or blocked.
    pub fn end(&self) -> Point {
        self.visited.last().copied().unwrap_or_else(Point::zero)
    }

    /// Number of steps actually taken (excludes the origin).
    pub fn steps_taken(&self) -> usize {
        self.visited.len().saturating_sub(1)
    }

    /// Convert a blocked report into an error for `?`-style callers.
    pub fn require_complete(self) -> Result<Self> {
        if self.success {
            Ok(self)
        } else {
            Err(Error::Blocked { at: self.end() })
        }
    }
}
