//! Property tests for position pool invariants.

use burrow::{BurrowError, Position, PositionPool};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::collections::HashSet;

proptest! {
    #[test]
    fn reset_fills_exactly_the_interior(rows in 1i32..16, columns in 1i32..16) {
        let mut pool = PositionPool::new();
        pool.reset(rows, columns);

        let expected = ((rows - 2).max(0) * (columns - 2).max(0)) as usize;
        prop_assert_eq!(pool.len(), expected);
    }

    #[test]
    fn draws_are_unique_in_bounds_and_exhaustive(
        rows in 3i32..12,
        columns in 3i32..12,
        seed in any::<u64>(),
    ) {
        let mut pool = PositionPool::new();
        pool.reset(rows, columns);
        let mut rng = StdRng::seed_from_u64(seed);

        let expected = ((rows - 2) * (columns - 2)) as usize;
        let mut seen: HashSet<Position> = HashSet::new();
        for remaining in (1..=expected).rev() {
            prop_assert_eq!(pool.len(), remaining);
            let position = pool.draw_random(&mut rng).unwrap();
            prop_assert!(position.x >= 1 && position.x <= columns - 2);
            prop_assert!(position.y >= 1 && position.y <= rows - 2);
            prop_assert!(seen.insert(position), "drew {} twice", position);
        }

        prop_assert!(pool.is_empty());
        prop_assert!(matches!(
            pool.draw_random(&mut rng),
            Err(BurrowError::PoolExhausted(_))
        ));
    }

    #[test]
    fn reset_is_idempotent_per_dimensions(
        rows in 3i32..12,
        columns in 3i32..12,
        draws in 0usize..8,
        seed in any::<u64>(),
    ) {
        let mut pool = PositionPool::new();
        let mut rng = StdRng::seed_from_u64(seed);

        pool.reset(rows, columns);
        let full = pool.len();
        for _ in 0..draws.min(full) {
            let _ = pool.draw_random(&mut rng).unwrap();
        }

        // A fresh cycle restores the full interior regardless of prior draws.
        pool.reset(rows, columns);
        prop_assert_eq!(pool.len(), full);
    }
}
