//! Position pool for draw-without-replacement placement.

use crate::game::Position;
use crate::{BurrowError, BurrowResult};
use rand::rngs::StdRng;
use rand::Rng;

/// The set of interior cells still available for randomized placement.
///
/// The pool is rebuilt at the start of every level generation and consumed
/// one uniform draw at a time; a drawn position can never be returned
/// again within the same cycle, which is what guarantees that no two
/// randomized placements share a cell.
#[derive(Debug, Clone)]
pub struct PositionPool {
    positions: Vec<Position>,
}

impl PositionPool {
    /// Creates an empty pool. Call [`PositionPool::reset`] before drawing.
    pub fn new() -> Self {
        Self {
            positions: Vec::new(),
        }
    }

    /// Clears the pool, then fills it with every interior cell of an
    /// `rows × columns` board.
    ///
    /// Boards with fewer than three rows or columns have no interior, so
    /// the pool stays empty; callers must tolerate that.
    pub fn reset(&mut self, rows: i32, columns: i32) {
        self.positions.clear();
        for x in 1..=(columns - 2) {
            for y in 1..=(rows - 2) {
                self.positions.push(Position::new(x, y));
            }
        }
    }

    /// Number of cells still available.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Checks whether the pool has been exhausted (or never filled).
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Checks whether a cell is still available.
    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Draws a uniformly random cell and removes it from the pool.
    ///
    /// Drawing from an empty pool means the caller requested more unique
    /// placements than the board has interior cells; that misconfiguration
    /// is surfaced as [`BurrowError::PoolExhausted`], never swallowed.
    pub fn draw_random(&mut self, rng: &mut StdRng) -> BurrowResult<Position> {
        if self.positions.is_empty() {
            return Err(BurrowError::PoolExhausted(
                "no unclaimed interior cells remain".to_string(),
            ));
        }
        let index = rng.gen_range(0..self.positions.len());
        Ok(self.positions.swap_remove(index))
    }
}

impl Default for PositionPool {
    fn default() -> Self {
        Self::new()
    }
}
