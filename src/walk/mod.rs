//! Walk engine - segment-scheduled self-avoiding stepping.
//!
//! This module holds the whole mutable core of the crate: the
//! insertion-ordered visited set, the step rule with its lean-ordered
//! candidate priorities, and the segment scheduler that flips the lean at
//! every boundary. The output is a frozen [`WalkReport`].

mod engine;
mod ordered_set;
mod report;

pub use engine::{Lean, WalkOutcome, WalkPlan, Walker};
pub use ordered_set::OrderedPointSet;
pub use report::WalkReport;
