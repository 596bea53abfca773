//! Geometry primitives for the walk grid.

mod point;

pub use point::{Point, Points};
