//! # Game Module
//!
//! Grid coordinates and board geometry shared by the layout systems.
//!
//! The board is an `rows × columns` rectangle of cells surrounded by a
//! one-cell ring of outer walls. Interior cells additionally exclude the
//! outermost playable row and column on each side, so randomized placement
//! never blocks the border-adjacent walkway.

use serde::{Deserialize, Serialize};

/// Represents a 2D cell coordinate on the game board.
///
/// # Examples
///
/// ```
/// use burrow::Position;
///
/// let pos = Position::new(10, 5);
/// assert_eq!(pos.x, 10);
/// assert_eq!(pos.y, 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Creates a new position with the given coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the origin position (0, 0).
    pub fn origin() -> Self {
        Self::new(0, 0)
    }

    /// Converts this cell coordinate into engine world space.
    ///
    /// The depth axis is always zero; the board is flat but the host engine
    /// expects three components.
    pub fn to_world(self) -> [f32; 3] {
        [self.x as f32, self.y as f32, 0.0]
    }

    /// Checks whether this position lies on the one-cell border ring that
    /// surrounds an `rows × columns` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::Position;
    ///
    /// assert!(Position::new(-1, 3).is_border(8, 8));
    /// assert!(Position::new(8, 0).is_border(8, 8));
    /// assert!(!Position::new(0, 0).is_border(8, 8));
    /// ```
    pub fn is_border(self, rows: i32, columns: i32) -> bool {
        self.x == -1 || self.x == columns || self.y == -1 || self.y == rows
    }

    /// Checks whether this position is an interior cell of an
    /// `rows × columns` board, i.e. eligible for randomized placement.
    pub fn is_interior(self, rows: i32, columns: i32) -> bool {
        self.x >= 1 && self.x <= columns - 2 && self.y >= 1 && self.y <= rows - 2
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
