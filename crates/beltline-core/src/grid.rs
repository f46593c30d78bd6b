//! Grid value types: cells, cardinal directions, and orientations.
//!
//! The grid is axis-aligned, unit-spaced, and unbounded. Directions follow
//! the fixed connectivity order `[Forward(+z), Right(+x), Back(-z), Left(-x)]`;
//! everything that builds or consumes a connectivity mask relies on that
//! order and must never reindex it.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GridCell
// ---------------------------------------------------------------------------

/// A position on the 2D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub z: i32,
}

impl GridCell {
    pub fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// The adjacent cell in the given direction.
    pub fn neighbor(&self, dir: Direction) -> GridCell {
        let (dx, dz) = dir.offset();
        GridCell::new(self.x + dx, self.z + dz)
    }

    /// Manhattan distance to another cell.
    pub fn manhattan_distance(&self, other: &GridCell) -> u32 {
        (self.x - other.x).unsigned_abs() + (self.z - other.z).unsigned_abs()
    }
}

// ---------------------------------------------------------------------------
// Direction
// ---------------------------------------------------------------------------

/// Cardinal directions, in the fixed connectivity order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// +z
    Forward,
    /// +x
    Right,
    /// -z
    Back,
    /// -x
    Left,
}

impl Direction {
    /// All four directions in connectivity order [+z, +x, -z, -x].
    pub fn all() -> [Direction; 4] {
        [
            Direction::Forward,
            Direction::Right,
            Direction::Back,
            Direction::Left,
        ]
    }

    /// Grid offset for this direction.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::Forward => (0, 1),
            Direction::Right => (1, 0),
            Direction::Back => (0, -1),
            Direction::Left => (-1, 0),
        }
    }

    /// Index into the connectivity order.
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The opposite direction.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Forward => Direction::Back,
            Direction::Right => Direction::Left,
            Direction::Back => Direction::Forward,
            Direction::Left => Direction::Right,
        }
    }

    /// Direction of a unit grid offset, if it is one.
    pub fn from_offset(dx: i32, dz: i32) -> Option<Direction> {
        match (dx, dz) {
            (0, 1) => Some(Direction::Forward),
            (1, 0) => Some(Direction::Right),
            (0, -1) => Some(Direction::Back),
            (-1, 0) => Some(Direction::Left),
            _ => None,
        }
    }

    /// Direction of the unit step from `from` to `to`, if they are adjacent.
    pub fn between(from: GridCell, to: GridCell) -> Option<Direction> {
        Direction::from_offset(to.x - from.x, to.z - from.z)
    }
}

// ---------------------------------------------------------------------------
// Orientation
// ---------------------------------------------------------------------------

/// Rotation of a placed segment, in 90-degree increments around the grid axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Orientation {
    /// Facing forward (+z).
    #[default]
    Deg0,
    /// Facing right (+x).
    Deg90,
    /// Facing back (-z).
    Deg180,
    /// Facing left (-x).
    Deg270,
}

impl Orientation {
    /// All four orientations.
    pub fn all() -> [Orientation; 4] {
        [
            Orientation::Deg0,
            Orientation::Deg90,
            Orientation::Deg180,
            Orientation::Deg270,
        ]
    }

    /// Rotation in degrees.
    pub fn degrees(&self) -> u16 {
        match self {
            Orientation::Deg0 => 0,
            Orientation::Deg90 => 90,
            Orientation::Deg180 => 180,
            Orientation::Deg270 => 270,
        }
    }

    /// The direction this orientation faces.
    pub fn facing(&self) -> Direction {
        match self {
            Orientation::Deg0 => Direction::Forward,
            Orientation::Deg90 => Direction::Right,
            Orientation::Deg180 => Direction::Back,
            Orientation::Deg270 => Direction::Left,
        }
    }

    /// Orientation facing the given direction.
    pub fn from_direction(dir: Direction) -> Orientation {
        match dir {
            Direction::Forward => Orientation::Deg0,
            Direction::Right => Orientation::Deg90,
            Direction::Back => Orientation::Deg180,
            Direction::Left => Orientation::Deg270,
        }
    }

    /// Rotate 90 degrees clockwise.
    pub fn rotate_cw(self) -> Self {
        match self {
            Orientation::Deg0 => Orientation::Deg90,
            Orientation::Deg90 => Orientation::Deg180,
            Orientation::Deg180 => Orientation::Deg270,
            Orientation::Deg270 => Orientation::Deg0,
        }
    }

    /// Rotate 90 degrees counter-clockwise.
    pub fn rotate_ccw(self) -> Self {
        match self {
            Orientation::Deg0 => Orientation::Deg270,
            Orientation::Deg90 => Orientation::Deg0,
            Orientation::Deg180 => Orientation::Deg90,
            Orientation::Deg270 => Orientation::Deg180,
        }
    }
}
