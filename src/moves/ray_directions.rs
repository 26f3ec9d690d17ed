//! Step vectors used by the detector and the per-piece generators.
//!
//! North is toward row 0 (Dark's back rank).

/// A `(d_row, d_col)` step. Rays use unit steps; knight offsets do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Self { d_row, d_col }
    }

    #[inline]
    pub const fn reversed(self) -> Self {
        Self {
            d_row: -self.d_row,
            d_col: -self.d_col,
        }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.d_row == 0) != (self.d_col == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.d_row != 0 && (self.d_row == self.d_col || self.d_row == -self.d_col)
    }

    /// True when `self` runs along `axis` in either sense.
    #[inline]
    pub fn is_along(self, axis: Direction) -> bool {
        self == axis || self == axis.reversed()
    }
}

pub const NORTH: Direction = Direction::new(-1, 0);
pub const SOUTH: Direction = Direction::new(1, 0);
pub const WEST: Direction = Direction::new(0, -1);
pub const EAST: Direction = Direction::new(0, 1);
pub const NORTH_EAST: Direction = Direction::new(-1, 1);
pub const NORTH_WEST: Direction = Direction::new(-1, -1);
pub const SOUTH_EAST: Direction = Direction::new(1, 1);
pub const SOUTH_WEST: Direction = Direction::new(1, -1);

pub const ORTHOGONAL_DIRECTIONS: [Direction; 4] = [NORTH, SOUTH, WEST, EAST];
pub const DIAGONAL_DIRECTIONS: [Direction; 4] = [NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST];

/// Detector scan order: the four orthogonal rays, then the four diagonals.
pub const ALL_RAY_DIRECTIONS: [Direction; 8] = [
    NORTH, SOUTH, WEST, EAST, NORTH_EAST, NORTH_WEST, SOUTH_EAST, SOUTH_WEST,
];

pub const KNIGHT_OFFSETS: [Direction; 8] = [
    Direction::new(-2, -1),
    Direction::new(-2, 1),
    Direction::new(-1, -2),
    Direction::new(-1, 2),
    Direction::new(1, -2),
    Direction::new(1, 2),
    Direction::new(2, -1),
    Direction::new(2, 1),
];

pub const KING_OFFSETS: [Direction; 8] = [
    Direction::new(-1, -1),
    Direction::new(-1, 0),
    Direction::new(-1, 1),
    Direction::new(0, -1),
    Direction::new(0, 1),
    Direction::new(1, -1),
    Direction::new(1, 0),
    Direction::new(1, 1),
];
