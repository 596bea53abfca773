//! Insertion-ordered set of visited grid points.

use crate::geometry::{Point, Points};
use std::collections::HashSet;

/// An insertion-ordered collection of unique points.
///
/// Keeps a `Vec` for ordered replay and a `HashSet` of the same points for
/// O(1) membership tests, in lock-step. The set only ever grows.
#[derive(Debug, Clone, Default)]
pub struct OrderedPointSet {
    order: Points,
    members: HashSet<Point>,
}

impl OrderedPointSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point, preserving insertion order.
    ///
    /// Returns `true` if the point was not already present.
    pub fn insert(&mut self, point: Point) -> bool {
        if !self.members.insert(point) {
            return false;
        }
        self.order.push(point);
        true
    }

    /// True if the point has been inserted before.
    #[inline]
    pub fn contains(&self, point: &Point) -> bool {
        self.members.contains(point)
    }

    /// First inserted point, if any.
    pub fn first(&self) -> Option<Point> {
        self.order.first().copied()
    }

    /// Most recently inserted point, if any.
    pub fn last(&self) -> Option<Point> {
        self.order.last().copied()
    }

    /// Number of points in the set.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True if no points have been inserted.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Points in insertion order.
    pub fn as_slice(&self) -> &[Point] {
        &self.order
    }

    /// Consume the set, yielding the points in insertion order.
    pub fn into_points(self) -> Points {
        self.order
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_preserves_order() {
        let mut set = OrderedPointSet::new();
        assert!(set.insert(Point::new(0, 0)));
        assert!(set.insert(Point::new(0, 1)));
        assert!(set.insert(Point::new(-1, 1)));

        assert_eq!(
            set.as_slice(),
            &[Point::new(0, 0), Point::new(0, 1), Point::new(-1, 1)]
        );
        assert_eq!(set.first(), Some(Point::new(0, 0)));
        assert_eq!(set.last(), Some(Point::new(-1, 1)));
    }

    #[test]
    fn test_duplicate_insert_is_rejected() {
        let mut set = OrderedPointSet::new();
        assert!(set.insert(Point::new(1, 1)));
        assert!(!set.insert(Point::new(1, 1)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_contains() {
        let mut set = OrderedPointSet::new();
        set.insert(Point::new(2, 3));
        assert!(set.contains(&Point::new(2, 3)));
        assert!(!set.contains(&Point::new(3, 2)));
    }

    #[test]
    fn test_empty_set() {
        let set = OrderedPointSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[test]
    fn test_into_points() {
        let mut set = OrderedPointSet::new();
        set.insert(Point::new(0, 0));
        set.insert(Point::new(1, 0));
        assert_eq!(set.into_points(), vec![Point::new(0, 0), Point::new(1, 0)]);
    }
}
