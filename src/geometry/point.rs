//! Grid point type for 2D walks.
//!
//! Positions are plain integer cell coordinates; there is no sub-cell
//! resolution and no floating-point variant. Identity is value equality,
//! so points can be used directly as hash-set keys.

use crate::Coord;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// A 2D grid point with integer coordinates.
///
/// Doubles as a displacement vector; orientation unit vectors are plain
/// `Point` values added to positions.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    /// Create a new point with the given coordinates.
    #[inline]
    pub const fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    /// Create a point at the origin (0, 0).
    #[inline]
    pub const fn zero() -> Self {
        Self { x: 0, y: 0 }
    }

    /// Manhattan distance to another point.
    #[inline]
    pub const fn manhattan_distance(&self, other: &Point) -> Coord {
        (other.x - self.x).abs() + (other.y - self.y).abs()
    }

    /// True if `other` is exactly one cell away along a single axis.
    #[inline]
    pub const fn is_adjacent(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl AddAssign for Point {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl SubAssign for Point {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

impl From<(Coord, Coord)> for Point {
    #[inline]
    fn from((x, y): (Coord, Coord)) -> Self {
        Self { x, y }
    }
}

impl From<Point> for (Coord, Coord) {
    #[inline]
    fn from(p: Point) -> Self {
        (p.x, p.y)
    }
}

/// Type alias for a collection of grid points.
pub type Points = Vec<Point>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_new() {
        let p = Point::new(3, -7);
        assert_eq!(p.x, 3);
        assert_eq!(p.y, -7);
    }

    #[test]
    fn test_point_zero() {
        assert_eq!(Point::zero(), Point::new(0, 0));
        assert_eq!(Point::default(), Point::zero());
    }

    #[test]
    fn test_point_arithmetic() {
        let p1 = Point::new(10, 20);
        let p2 = Point::new(3, 4);

        let sum = p1 + p2;
        assert_eq!(sum, Point::new(13, 24));

        let diff = p1 - p2;
        assert_eq!(diff, Point::new(7, 16));

        let neg = -p1;
        assert_eq!(neg, Point::new(-10, -20));

        let mut p = p1;
        p += p2;
        assert_eq!(p, sum);
        p -= p2;
        assert_eq!(p, p1);
    }

    #[test]
    fn test_manhattan_distance() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(a.manhattan_distance(&b), 7);
        assert_eq!(b.manhattan_distance(&a), 7);
        assert_eq!(a.manhattan_distance(&a), 0);
    }

    #[test]
    fn test_is_adjacent() {
        let p = Point::new(2, 2);
        assert!(p.is_adjacent(&Point::new(2, 3)));
        assert!(p.is_adjacent(&Point::new(2, 1)));
        assert!(p.is_adjacent(&Point::new(1, 2)));
        assert!(p.is_adjacent(&Point::new(3, 2)));

        // Diagonal and identical cells are not adjacent
        assert!(!p.is_adjacent(&Point::new(3, 3)));
        assert!(!p.is_adjacent(&p));
    }

    #[test]
    fn test_tuple_conversions() {
        let p: Point = (5, 6).into();
        assert_eq!(p, Point::new(5, 6));
        let t: (Coord, Coord) = p.into();
        assert_eq!(t, (5, 6));
    }

    #[test]
    fn test_formatting() {
        let p = Point::new(1, -2);
        assert_eq!(format!("{:?}", p), "Point(1, -2)");
        assert_eq!(format!("{}", p), "(1, -2)");
    }
}
