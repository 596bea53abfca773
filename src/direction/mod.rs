//! Cardinal orientations and their rotation table.
//!
//! The walker only ever faces one of the four cardinal directions. Each
//! orientation has a unit displacement vector, and turning left or right
//! maps to the orientation rotated 90 degrees counter-clockwise or
//! clockwise. All three mappings are total, pure and constant:
//!
//! | Orientation | vector  | left-of | right-of |
//! |-------------|---------|---------|----------|
//! | North       | (0, 1)  | West    | East     |
//! | West        | (-1, 0) | South   | North    |
//! | South       | (0, -1) | East    | West     |
//! | East        | (1, 0)  | North   | South    |

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// One of the four cardinal facing directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Orientation {
    North,
    West,
    South,
    East,
}

impl Orientation {
    /// All four orientations, in rotation-table order.
    pub const ALL: [Orientation; 4] = [
        Orientation::North,
        Orientation::West,
        Orientation::South,
        Orientation::East,
    ];

    /// Unit displacement vector for a single step in this direction.
    #[inline]
    pub const fn displacement(self) -> Point {
        match self {
            Orientation::North => Point::new(0, 1),
            Orientation::West => Point::new(-1, 0),
            Orientation::South => Point::new(0, -1),
            Orientation::East => Point::new(1, 0),
        }
    }

    /// Orientation after rotating 90 degrees counter-clockwise.
    #[inline]
    pub const fn turned_left(self) -> Self {
        match self {
            Orientation::North => Orientation::West,
            Orientation::West => Orientation::South,
            Orientation::South => Orientation::East,
            Orientation::East => Orientation::North,
        }
    }

    /// Orientation after rotating 90 degrees clockwise.
    #[inline]
    pub const fn turned_right(self) -> Self {
        match self {
            Orientation::North => Orientation::East,
            Orientation::East => Orientation::South,
            Orientation::South => Orientation::West,
            Orientation::West => Orientation::North,
        }
    }
}
