//! # Board Composition
//!
//! The level layout algorithm: border painting, randomized interior
//! placement, and level-scaled enemy counts.
//!
//! One [`BoardComposer::generate`] call lays out a complete level through
//! the [`Spawner`] seam:
//! 1. Paint the full bounding rectangle with floor, replacing the border
//!    ring with outer walls, all grouped under a `"Board"` container
//! 2. Rebuild the interior position pool
//! 3. Scatter interior walls, food, and enemies on unique cells
//! 4. Place the exit marker in the fixed far corner

use crate::game::Position;
use crate::generation::{BoardConfig, CountRange, KindCatalog, PositionPool};
use crate::world::{Rotation, SpawnHandle, Spawner};
use crate::BurrowResult;
use log::{debug, info};
use rand::rngs::StdRng;

/// Name of the container that groups the painted board tiles.
const BOARD_CONTAINER: &str = "Board";

/// Trait for level layout generators.
///
/// Generators are side-effecting: the layout is communicated to the host
/// exclusively through placement requests on the spawner, so hosts that
/// need to observe it (tests, offline tools) pass a recording spawner.
pub trait Generator<S: Spawner> {
    /// Lays out one level using the provided configuration and random
    /// number generator.
    fn generate(
        &mut self,
        config: &BoardConfig,
        level: i32,
        rng: &mut StdRng,
        world: &mut S,
    ) -> BurrowResult<()>;

    /// Validates that a configuration is usable before any placement.
    fn validate(&self, config: &BoardConfig) -> BurrowResult<()>;

    /// Gets the generator type name for logging and debugging.
    fn generator_type(&self) -> &'static str;
}

/// Enemy count for a level number: `floor(log2(level))`.
///
/// Levels below 1 clamp to zero enemies instead of propagating a
/// logarithm-domain error.
///
/// # Examples
///
/// ```
/// use burrow::enemy_count_for_level;
///
/// assert_eq!(enemy_count_for_level(1), 0);
/// assert_eq!(enemy_count_for_level(4), 2);
/// assert_eq!(enemy_count_for_level(0), 0);
/// assert_eq!(enemy_count_for_level(-3), 0);
/// ```
pub fn enemy_count_for_level(level: i32) -> u32 {
    if level < 1 {
        0
    } else {
        (level as u32).ilog2()
    }
}

/// Primary board layout generator.
///
/// The composer owns the transient position pool; outside of a `generate`
/// call it holds no level state, so one composer can lay out any number of
/// consecutive levels.
#[derive(Debug, Clone)]
pub struct BoardComposer {
    pool: PositionPool,
}

impl BoardComposer {
    /// Creates a new composer with an empty pool.
    pub fn new() -> Self {
        Self {
            pool: PositionPool::new(),
        }
    }

    /// Paints the board background: floor everywhere in the bounding
    /// rectangle, outer walls on the one-cell border ring. Every tile is
    /// parented under a fresh `"Board"` container; the grouping is
    /// organizational only.
    fn board_setup<S: Spawner>(
        &self,
        config: &BoardConfig,
        rng: &mut StdRng,
        world: &mut S,
    ) -> BurrowResult<SpawnHandle> {
        let board = world.create_container(BOARD_CONTAINER);

        for x in -1..=config.columns {
            for y in -1..=config.rows {
                let position = Position::new(x, y);
                let kind = if position.is_border(config.rows, config.columns) {
                    config.outer_wall_kinds.choose(rng)?
                } else {
                    config.floor_kinds.choose(rng)?
                };
                let tile = world.instantiate(&kind, position, Rotation::identity());
                world.set_parent(tile, board);
            }
        }

        Ok(board)
    }

    /// Scatters a randomized number of objects from one catalog across
    /// unique interior cells. Returns how many were placed.
    ///
    /// The pool must hold at least `range.maximum` cells, or the draw that
    /// overruns it surfaces [`crate::BurrowError::PoolExhausted`].
    fn layout_at_random<S: Spawner>(
        &mut self,
        catalog: &KindCatalog,
        range: &CountRange,
        rng: &mut StdRng,
        world: &mut S,
    ) -> BurrowResult<u32> {
        let object_count = range.sample(rng);

        for _ in 0..object_count {
            let position = self.pool.draw_random(rng)?;
            let kind = catalog.choose(rng)?;
            let _ = world.instantiate(&kind, position, Rotation::identity());
        }

        debug!("scattered {} {} objects", object_count, catalog.category().name());
        Ok(object_count)
    }
}

impl<S: Spawner> Generator<S> for BoardComposer {
    fn generate(
        &mut self,
        config: &BoardConfig,
        level: i32,
        rng: &mut StdRng,
        world: &mut S,
    ) -> BurrowResult<()> {
        Generator::<S>::validate(self, config)?;

        info!(
            "laying out level {} on a {}x{} board",
            level, config.rows, config.columns
        );

        let _board = self.board_setup(config, rng, world)?;
        self.pool.reset(config.rows, config.columns);

        let walls = self.layout_at_random(&config.wall_kinds, &config.wall_count, rng, world)?;
        let food = self.layout_at_random(&config.food_kinds, &config.food_count, rng, world)?;

        if level < 1 {
            debug!("level {} is below 1, clamping enemy count to zero", level);
        }
        let enemies = enemy_count_for_level(level);
        let _ = self.layout_at_random(
            &config.enemy_kinds,
            &CountRange::fixed(enemies),
            rng,
            world,
        )?;

        let exit_kind = config.exit_kinds.choose(rng)?;
        let exit = config.exit_position();
        let _ = world.instantiate(&exit_kind, exit, Rotation::identity());

        info!(
            "level {} laid out: {} walls, {} food, {} enemies, exit at {}",
            level, walls, food, enemies, exit
        );
        Ok(())
    }

    fn validate(&self, config: &BoardConfig) -> BurrowResult<()> {
        config.validate()
    }

    fn generator_type(&self) -> &'static str {
        "BoardComposer"
    }
}

impl Default for BoardComposer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generation::utils;
    use crate::world::SpawnedWorld;
    use crate::{BurrowError, TileCategory};
    use std::collections::HashSet;

    #[test]
    fn test_enemy_count_scales_logarithmically() {
        assert_eq!(enemy_count_for_level(1), 0);
        assert_eq!(enemy_count_for_level(2), 1);
        assert_eq!(enemy_count_for_level(3), 1);
        assert_eq!(enemy_count_for_level(4), 2);
        assert_eq!(enemy_count_for_level(7), 2);
        assert_eq!(enemy_count_for_level(8), 3);
        assert_eq!(enemy_count_for_level(15), 3);
        assert_eq!(enemy_count_for_level(16), 4);
    }

    #[test]
    fn test_enemy_count_clamps_below_level_one() {
        assert_eq!(enemy_count_for_level(0), 0);
        assert_eq!(enemy_count_for_level(-1), 0);
        assert_eq!(enemy_count_for_level(i32::MIN), 0);
    }

    #[test]
    fn test_board_setup_paints_full_rectangle() {
        let config = BoardConfig::new(12345);
        let mut rng = utils::create_rng(&config);
        let mut world = SpawnedWorld::new();
        let composer = BoardComposer::new();

        let board = composer.board_setup(&config, &mut rng, &mut world).unwrap();

        // (8+2) * (8+2) cells, of which the ring is 2*10 + 2*10 - 4.
        assert_eq!(world.placed_count(), 100);
        assert_eq!(world.count_in_category(TileCategory::OuterWall), 36);
        assert_eq!(world.count_in_category(TileCategory::Floor), 64);
        assert_eq!(world.children_of(board), 100);

        for object in world.objects() {
            let on_border = object.position.is_border(config.rows, config.columns);
            match object.kind.category {
                TileCategory::OuterWall => assert!(on_border),
                TileCategory::Floor => assert!(!on_border),
                other => panic!("board setup placed a {} object", other.name()),
            }
            assert!(object.rotation.is_identity());
        }
    }

    #[test]
    fn test_layout_at_random_consumes_pool() {
        let config = BoardConfig::new(777);
        let mut rng = utils::create_rng(&config);
        let mut world = SpawnedWorld::new();
        let mut composer = BoardComposer::new();
        composer.pool.reset(config.rows, config.columns);

        let placed = composer
            .layout_at_random(&config.wall_kinds, &config.wall_count, &mut rng, &mut world)
            .unwrap();

        assert!((5..=9).contains(&placed));
        assert_eq!(world.placed_count(), placed as usize);
        assert_eq!(composer.pool.len(), 36 - placed as usize);

        // Every placement landed on a distinct interior cell.
        let cells: HashSet<_> = world.objects().map(|object| object.position).collect();
        assert_eq!(cells.len(), placed as usize);
        for cell in cells {
            assert!(cell.is_interior(config.rows, config.columns));
        }
    }

    #[test]
    fn test_layout_at_random_fixed_range() {
        let config = BoardConfig::new(9);
        let mut rng = utils::create_rng(&config);
        let mut world = SpawnedWorld::new();
        let mut composer = BoardComposer::new();
        composer.pool.reset(config.rows, config.columns);

        let placed = composer
            .layout_at_random(
                &config.enemy_kinds,
                &CountRange::fixed(2),
                &mut rng,
                &mut world,
            )
            .unwrap();
        assert_eq!(placed, 2);
        assert_eq!(world.count_in_category(TileCategory::Enemy), 2);
    }

    #[test]
    fn test_layout_at_random_propagates_pool_exhaustion() {
        let config = BoardConfig::new(3);
        let mut rng = utils::create_rng(&config);
        let mut world = SpawnedWorld::new();
        let mut composer = BoardComposer::new();
        composer.pool.reset(3, 3); // single interior cell

        let result = composer.layout_at_random(
            &config.wall_kinds,
            &CountRange::fixed(2),
            &mut rng,
            &mut world,
        );
        assert!(matches!(result, Err(BurrowError::PoolExhausted(_))));
    }

    #[test]
    fn test_generate_rejects_invalid_config() {
        let mut config = BoardConfig::new(1);
        config.wall_count = CountRange::new(9, 5);
        let mut rng = utils::create_rng(&config);
        let mut world = SpawnedWorld::new();
        let mut composer = BoardComposer::new();

        let result = composer.generate(&config, 1, &mut rng, &mut world);
        assert!(matches!(result, Err(BurrowError::InvalidConfig(_))));
        // Fail-fast: nothing was placed.
        assert!(world.is_empty());
    }

    #[test]
    fn test_generator_type() {
        let composer = BoardComposer::new();
        assert_eq!(
            <BoardComposer as Generator<SpawnedWorld>>::generator_type(&composer),
            "BoardComposer"
        );
    }
}
