//! # Burrow Roguelike
//!
//! Procedural board layout for a tile-based survival roguelike.
//!
//! ## Architecture Overview
//!
//! Burrow is designed around a small set of concepts:
//!
//! - **Board Configuration**: Serializable settings describing grid size,
//!   placement count ranges, and the catalogs of placeable tile kinds
//! - **Position Pool**: Draw-without-replacement bookkeeping over the
//!   interior cells of the grid
//! - **Board Composer**: The layout algorithm itself, scaling enemy counts
//!   logarithmically with the level number
//! - **World Seam**: The host engine's instantiation and parenting services,
//!   abstracted behind the [`Spawner`] trait with an in-memory recording
//!   implementation for tests and offline runs
//!
//! Generation is deterministic per seed: every entry point takes an
//! explicitly injected random number generator rather than relying on
//! ambient global randomness.

pub mod game;
pub mod generation;
pub mod world;

// Core module re-exports
pub use game::*;
pub use generation::*;
pub use world::*;

// Explicit re-exports for commonly used types
pub use game::Position;
pub use generation::{
    enemy_count_for_level, BoardComposer, BoardConfig, CountRange, Generator, KindCatalog,
    PositionPool, TileCategory, TileKind,
};
pub use world::{PlacedObject, Rotation, SpawnHandle, SpawnedWorld, Spawner};

/// Core error type for the Burrow layout engine.
#[derive(thiserror::Error, Debug)]
pub enum BurrowError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Configuration is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// More unique positions were requested than the board can supply
    #[error("Position pool exhausted: {0}")]
    PoolExhausted(String),
}

/// Result type used throughout the Burrow codebase.
pub type BurrowResult<T> = Result<T, BurrowError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Board configuration constants.
pub mod config {
    /// Default number of rows on the game board
    pub const DEFAULT_ROWS: i32 = 8;

    /// Default number of columns on the game board
    pub const DEFAULT_COLUMNS: i32 = 8;

    /// Default inclusive range for interior walls per level
    pub const DEFAULT_WALL_RANGE: (u32, u32) = (5, 9);

    /// Default inclusive range for food pickups per level
    pub const DEFAULT_FOOD_RANGE: (u32, u32) = (1, 5);
}
