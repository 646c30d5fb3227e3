//! Board coordinates and straight-line directions.
//!
//! ## Position
//!
//! A `(row, col)` pair with row 0 at the top. Positions are plain values:
//! they carry no knowledge of the board they refer to, so bounds checks
//! live on [`Board`](crate::board::Board).
//!
//! ## Direction
//!
//! One of the four orthogonal unit steps. Totem movement, jumps and
//! alignment windows only ever travel along these.

use serde::{Deserialize, Serialize};

/// A cell coordinate on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Row index, 0 at the top.
    pub row: usize,
    /// Column index, 0 at the left.
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `direction`.
    ///
    /// Returns `None` when the result would have a negative coordinate.
    /// The upper bound is not checked here.
    #[must_use]
    pub fn offset(self, direction: Direction, steps: usize) -> Option<Self> {
        let (dr, dc) = direction.delta();
        let steps = isize::try_from(steps).ok()?;
        Some(Self {
            row: self.row.checked_add_signed(dr.checked_mul(steps)?)?,
            col: self.col.checked_add_signed(dc.checked_mul(steps)?)?,
        })
    }

    /// The neighbouring cell along `direction`, if it has non-negative coordinates.
    #[must_use]
    pub fn step(self, direction: Direction) -> Option<Self> {
        self.offset(direction, 1)
    }

    /// Whether `other` is one of the four orthogonal neighbours.
    #[must_use]
    pub fn is_adjacent_to(self, other: Position) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }

    /// Direction of travel from `self` towards `target`.
    ///
    /// Returns `None` for identical positions and for targets that are not
    /// on the same row or column.
    #[must_use]
    pub fn direction_to(self, target: Position) -> Option<Direction> {
        use std::cmp::Ordering::{Equal, Greater, Less};

        match (target.row.cmp(&self.row), target.col.cmp(&self.col)) {
            (Less, Equal) => Some(Direction::Up),
            (Greater, Equal) => Some(Direction::Down),
            (Equal, Less) => Some(Direction::Left),
            (Equal, Greater) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Orthogonal unit step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions.
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// `(row, col)` delta of one step.
    #[must_use]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_in_range() {
        let p = Position::new(2, 3);
        assert_eq!(p.offset(Direction::Down, 2), Some(Position::new(4, 3)));
        assert_eq!(p.offset(Direction::Left, 3), Some(Position::new(2, 0)));
        assert_eq!(p.step(Direction::Up), Some(Position::new(1, 3)));
    }

    #[test]
    fn test_offset_underflow() {
        let p = Position::new(0, 1);
        assert_eq!(p.step(Direction::Up), None);
        assert_eq!(p.offset(Direction::Left, 2), None);
    }

    #[test]
    fn test_adjacency() {
        let p = Position::new(2, 2);
        assert!(p.is_adjacent_to(Position::new(1, 2)));
        assert!(p.is_adjacent_to(Position::new(2, 3)));
        assert!(!p.is_adjacent_to(Position::new(3, 3)));
        assert!(!p.is_adjacent_to(p));
    }

    #[test]
    fn test_direction_to() {
        let p = Position::new(2, 2);
        assert_eq!(p.direction_to(Position::new(0, 2)), Some(Direction::Up));
        assert_eq!(p.direction_to(Position::new(5, 2)), Some(Direction::Down));
        assert_eq!(p.direction_to(Position::new(2, 0)), Some(Direction::Left));
        assert_eq!(p.direction_to(Position::new(2, 4)), Some(Direction::Right));
        assert_eq!(p.direction_to(Position::new(3, 3)), None);
        assert_eq!(p.direction_to(p), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(1, 4).to_string(), "(1, 4)");
    }

    #[test]
    fn test_position_serialization() {
        let p = Position::new(3, 5);
        let json = serde_json::to_string(&p).unwrap();
        let deserialized: Position = serde_json::from_str(&json).unwrap();
        assert_eq!(p, deserialized);
    }
}
