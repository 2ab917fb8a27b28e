//! # Generation Module
//!
//! Procedural board layout for game levels.
//!
//! This module provides the configuration surface and the layout algorithm
//! for Burrow boards: the position pool that guarantees draw-without-
//! replacement placement, the kind catalogs that pick among interchangeable
//! tile variants, and the composer that orchestrates one level generation
//! from border painting through exit placement.

pub mod board;
pub mod pool;

pub use board::*;
pub use pool::*;

use crate::game::Position;
use crate::{BurrowError, BurrowResult};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Categories of placeable objects on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileCategory {
    /// Walkable background tile
    Floor,
    /// Impassable tile on the border ring
    OuterWall,
    /// Destructible interior wall
    Wall,
    /// Food pickup
    Food,
    /// Enemy spawn
    Enemy,
    /// Level exit marker
    Exit,
}

impl TileCategory {
    /// Human-readable category name for logs and summaries.
    pub fn name(self) -> &'static str {
        match self {
            TileCategory::Floor => "floor",
            TileCategory::OuterWall => "outer wall",
            TileCategory::Wall => "wall",
            TileCategory::Food => "food",
            TileCategory::Enemy => "enemy",
            TileCategory::Exit => "exit",
        }
    }
}

/// One placeable variant of a category, e.g. the third floor tile art.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileKind {
    /// Category this kind belongs to
    pub category: TileCategory,
    /// Variant name within the category
    pub name: String,
}

impl TileKind {
    /// Creates a new kind.
    pub fn new(category: TileCategory, name: impl Into<String>) -> Self {
        Self {
            category,
            name: name.into(),
        }
    }
}

/// A registered, non-empty collection of interchangeable kinds for one
/// category. One entry is chosen uniformly at random per placement.
///
/// # Examples
///
/// ```
/// use burrow::{KindCatalog, TileCategory};
///
/// let catalog = KindCatalog::new(
///     TileCategory::Food,
///     vec!["food".to_string(), "soda".to_string()],
/// )
/// .unwrap();
/// assert_eq!(catalog.len(), 2);
///
/// assert!(KindCatalog::new(TileCategory::Food, vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindCatalog {
    category: TileCategory,
    variants: Vec<String>,
}

impl KindCatalog {
    /// Registers a catalog, rejecting empty variant lists up front.
    pub fn new(category: TileCategory, variants: Vec<String>) -> BurrowResult<Self> {
        let catalog = Self { category, variants };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Category this catalog serves.
    pub fn category(&self) -> TileCategory {
        self.category
    }

    /// Number of registered variants.
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Checks whether the catalog has no variants. Construction forbids
    /// this, but deserialized catalogs are only checked by
    /// [`KindCatalog::validate`].
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Rejects catalogs with no variants.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.variants.is_empty() {
            return Err(BurrowError::InvalidConfig(format!(
                "no {} kinds registered",
                self.category.name()
            )));
        }
        Ok(())
    }

    /// Chooses one kind uniformly at random.
    pub fn choose(&self, rng: &mut StdRng) -> BurrowResult<TileKind> {
        let name = self.variants.choose(rng).ok_or_else(|| {
            BurrowError::InvalidConfig(format!("no {} kinds registered", self.category.name()))
        })?;
        Ok(TileKind::new(self.category, name.clone()))
    }
}

/// Inclusive bounds for a randomized placement quantity.
///
/// # Examples
///
/// ```
/// use burrow::CountRange;
///
/// let walls = CountRange::new(5, 9);
/// assert!(walls.is_valid());
/// assert!(!CountRange::new(9, 5).is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountRange {
    /// Lower inclusive bound
    pub minimum: u32,
    /// Upper inclusive bound
    pub maximum: u32,
}

impl CountRange {
    /// Creates a new range.
    pub fn new(minimum: u32, maximum: u32) -> Self {
        Self { minimum, maximum }
    }

    /// Creates a degenerate range that always samples to `count`.
    pub fn fixed(count: u32) -> Self {
        Self::new(count, count)
    }

    /// Checks that the bounds are ordered.
    pub fn is_valid(&self) -> bool {
        self.minimum <= self.maximum
    }

    /// Samples a count uniformly from the inclusive range. Callers must
    /// ensure the range is valid; config validation does this before any
    /// placement begins.
    pub fn sample(&self, rng: &mut StdRng) -> u32 {
        rng.gen_range(self.minimum..=self.maximum)
    }
}

/// Configuration for board layout.
///
/// Controls grid size, placement count ranges, and the kind catalogs for
/// every placeable category. Serializable so hosts can load it from a
/// settings file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Random seed for reproducible layout
    pub seed: u64,
    /// Number of rows on the board
    pub rows: i32,
    /// Number of columns on the board
    pub columns: i32,
    /// Interior walls per level
    pub wall_count: CountRange,
    /// Food pickups per level
    pub food_count: CountRange,
    /// Walkable background kinds
    pub floor_kinds: KindCatalog,
    /// Border ring kinds
    pub outer_wall_kinds: KindCatalog,
    /// Interior wall kinds
    pub wall_kinds: KindCatalog,
    /// Food pickup kinds
    pub food_kinds: KindCatalog,
    /// Enemy kinds
    pub enemy_kinds: KindCatalog,
    /// Exit marker kinds
    pub exit_kinds: KindCatalog,
}

impl BoardConfig {
    /// Creates the stock configuration: an 8×8 board with the classic
    /// variant counts for each category.
    ///
    /// # Examples
    ///
    /// ```
    /// use burrow::BoardConfig;
    ///
    /// let config = BoardConfig::new(99);
    /// assert_eq!(config.seed, 99);
    /// assert_eq!(config.rows, 8);
    /// assert!(config.validate().is_ok());
    /// ```
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rows: crate::config::DEFAULT_ROWS,
            columns: crate::config::DEFAULT_COLUMNS,
            wall_count: CountRange::new(
                crate::config::DEFAULT_WALL_RANGE.0,
                crate::config::DEFAULT_WALL_RANGE.1,
            ),
            food_count: CountRange::new(
                crate::config::DEFAULT_FOOD_RANGE.0,
                crate::config::DEFAULT_FOOD_RANGE.1,
            ),
            floor_kinds: numbered_catalog(TileCategory::Floor, "floor", 8),
            outer_wall_kinds: numbered_catalog(TileCategory::OuterWall, "outer_wall", 3),
            wall_kinds: numbered_catalog(TileCategory::Wall, "wall", 8),
            food_kinds: named_catalog(TileCategory::Food, &["food", "soda"]),
            enemy_kinds: numbered_catalog(TileCategory::Enemy, "enemy", 2),
            exit_kinds: named_catalog(TileCategory::Exit, &["exit"]),
        }
    }

    /// Creates a configuration for testing with a smaller, denser board.
    pub fn for_testing(seed: u64) -> Self {
        Self {
            rows: 6,
            columns: 6,
            wall_count: CountRange::new(2, 4),
            food_count: CountRange::new(1, 2),
            ..Self::new(seed)
        }
    }

    /// Fails fast on misconfiguration instead of surfacing it mid-layout.
    pub fn validate(&self) -> BurrowResult<()> {
        if self.rows < 1 || self.columns < 1 {
            return Err(BurrowError::InvalidConfig(format!(
                "board dimensions must be positive, got {}x{}",
                self.rows, self.columns
            )));
        }
        if !self.wall_count.is_valid() {
            return Err(BurrowError::InvalidConfig(format!(
                "wall count range {}..={} is reversed",
                self.wall_count.minimum, self.wall_count.maximum
            )));
        }
        if !self.food_count.is_valid() {
            return Err(BurrowError::InvalidConfig(format!(
                "food count range {}..={} is reversed",
                self.food_count.minimum, self.food_count.maximum
            )));
        }

        let catalogs = [
            (&self.floor_kinds, TileCategory::Floor),
            (&self.outer_wall_kinds, TileCategory::OuterWall),
            (&self.wall_kinds, TileCategory::Wall),
            (&self.food_kinds, TileCategory::Food),
            (&self.enemy_kinds, TileCategory::Enemy),
            (&self.exit_kinds, TileCategory::Exit),
        ];
        for (catalog, expected) in catalogs {
            catalog.validate()?;
            if catalog.category() != expected {
                return Err(BurrowError::InvalidConfig(format!(
                    "{} catalog registered under {}",
                    expected.name(),
                    catalog.category().name()
                )));
            }
        }

        if self.interior_area() == 0 {
            log::warn!(
                "board {}x{} has no interior cells; randomized placement will fail unless all minimums are zero",
                self.rows,
                self.columns
            );
        }
        Ok(())
    }

    /// Number of interior cells eligible for randomized placement.
    pub fn interior_area(&self) -> u32 {
        let interior_columns = (self.columns - 2).max(0) as u32;
        let interior_rows = (self.rows - 2).max(0) as u32;
        interior_columns * interior_rows
    }

    /// The fixed corner cell where the exit marker is placed.
    pub fn exit_position(&self) -> Position {
        Position::new(self.columns - 1, self.rows - 1)
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(42)
    }
}

fn numbered_catalog(category: TileCategory, prefix: &str, count: u32) -> KindCatalog {
    KindCatalog {
        category,
        variants: (1..=count).map(|i| format!("{}{}", prefix, i)).collect(),
    }
}

fn named_catalog(category: TileCategory, names: &[&str]) -> KindCatalog {
    KindCatalog {
        category,
        variants: names.iter().map(|name| name.to_string()).collect(),
    }
}

/// Utility functions for layout generation.
pub mod utils {
    use super::*;
    use rand::SeedableRng;

    /// Creates a seeded random number generator from the config.
    pub fn create_rng(config: &BoardConfig) -> StdRng {
        StdRng::seed_from_u64(config.seed)
    }
}
