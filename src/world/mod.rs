//! # World Module
//!
//! The seam between the layout core and the host engine.
//!
//! Layout code never talks to a scene graph directly. It issues placement
//! requests through the [`Spawner`] trait, which the host engine implements
//! on top of its prefab instantiation and parenting services. The crate
//! ships [`SpawnedWorld`], an in-memory implementation that records every
//! request; it backs the CLI snapshot output and the test suite.

use crate::game::Position;
use crate::generation::{TileCategory, TileKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Unique identifier for spawned objects and containers.
pub type SpawnHandle = Uuid;

/// Creates a new unique spawn handle.
pub fn new_spawn_handle() -> SpawnHandle {
    Uuid::new_v4()
}

/// Rotation applied to a spawned object.
///
/// Board layout always places tiles upright, so in practice this is the
/// identity rotation; the field exists because the engine contract takes one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub degrees: f32,
}

impl Rotation {
    /// The identity rotation (no offset).
    pub fn identity() -> Self {
        Self { degrees: 0.0 }
    }

    /// Checks whether this rotation leaves the object unrotated.
    pub fn is_identity(self) -> bool {
        self.degrees == 0.0
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::identity()
    }
}

/// Instantiation and parenting services consumed by the layout core.
///
/// Implementors are assumed to succeed: the engine contract returns a
/// handle, never an error, so the trait does too.
pub trait Spawner {
    /// Instantiates one object of the given kind at a board position.
    fn instantiate(&mut self, kind: &TileKind, position: Position, rotation: Rotation)
        -> SpawnHandle;

    /// Creates a named container object used only for organizational
    /// grouping of spawned tiles.
    fn create_container(&mut self, name: &str) -> SpawnHandle;

    /// Re-parents a spawned object under a container.
    fn set_parent(&mut self, object: SpawnHandle, container: SpawnHandle);
}

/// A single recorded placement request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedObject {
    /// Handle the spawner returned for this object
    pub handle: SpawnHandle,
    /// Kind that was instantiated
    pub kind: TileKind,
    /// Board cell the object occupies
    pub position: Position,
    /// Rotation the object was placed with
    pub rotation: Rotation,
    /// Container the object was parented to, if any
    pub parent: Option<SpawnHandle>,
}

/// In-memory world that records every spawn request.
///
/// Placements are kept in issue order so layouts generated from the same
/// seed can be compared request-for-request.
#[derive(Debug, Clone)]
pub struct SpawnedWorld {
    objects: HashMap<SpawnHandle, PlacedObject>,
    containers: HashMap<SpawnHandle, String>,
    order: Vec<SpawnHandle>,
}

impl SpawnedWorld {
    /// Creates an empty world.
    pub fn new() -> Self {
        Self {
            objects: HashMap::new(),
            containers: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Number of placed objects (containers excluded).
    pub fn placed_count(&self) -> usize {
        self.objects.len()
    }

    /// Checks whether nothing has been placed yet.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over placed objects in the order they were instantiated.
    pub fn objects(&self) -> impl Iterator<Item = &PlacedObject> + '_ {
        self.order.iter().filter_map(move |handle| self.objects.get(handle))
    }

    /// All placed objects of one category, in placement order.
    pub fn in_category(&self, category: TileCategory) -> Vec<&PlacedObject> {
        self.objects()
            .filter(|object| object.kind.category == category)
            .collect()
    }

    /// Number of placed objects of one category.
    pub fn count_in_category(&self, category: TileCategory) -> usize {
        self.objects()
            .filter(|object| object.kind.category == category)
            .count()
    }

    /// All objects occupying a cell, in placement order. A cell can hold
    /// more than one object: randomized placement lands on top of the
    /// painted floor.
    pub fn objects_at(&self, position: Position) -> Vec<&PlacedObject> {
        self.objects()
            .filter(|object| object.position == position)
            .collect()
    }

    /// Looks up a container handle by its name.
    pub fn container_named(&self, name: &str) -> Option<SpawnHandle> {
        self.containers
            .iter()
            .find(|(_, container_name)| container_name.as_str() == name)
            .map(|(handle, _)| *handle)
    }

    /// Number of objects parented under the given container.
    pub fn children_of(&self, container: SpawnHandle) -> usize {
        self.objects()
            .filter(|object| object.parent == Some(container))
            .count()
    }

    /// Placement log in issue order, for serialization or inspection.
    pub fn snapshot(&self) -> Vec<&PlacedObject> {
        self.objects().collect()
    }
}

impl Default for SpawnedWorld {
    fn default() -> Self {
        Self::new()
    }
}

impl Spawner for SpawnedWorld {
    fn instantiate(
        &mut self,
        kind: &TileKind,
        position: Position,
        rotation: Rotation,
    ) -> SpawnHandle {
        let handle = new_spawn_handle();
        let placed = PlacedObject {
            handle,
            kind: kind.clone(),
            position,
            rotation,
            parent: None,
        };
        log::trace!("instantiated {} at {}", placed.kind.name, position);
        let _previous = self.objects.insert(handle, placed);
        self.order.push(handle);
        handle
    }

    fn create_container(&mut self, name: &str) -> SpawnHandle {
        let handle = new_spawn_handle();
        let _previous = self.containers.insert(handle, name.to_string());
        handle
    }

    fn set_parent(&mut self, object: SpawnHandle, container: SpawnHandle) {
        if let Some(placed) = self.objects.get_mut(&object) {
            placed.parent = Some(container);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn food_kind() -> TileKind {
        TileKind::new(TileCategory::Food, "soda")
    }

    #[test]
    fn test_spawn_handles_are_unique() {
        let id1 = new_spawn_handle();
        let id2 = new_spawn_handle();
        assert_ne!(id1, id2);
    }

    #[test]
    fn test_identity_rotation() {
        assert!(Rotation::identity().is_identity());
        assert!(Rotation::default().is_identity());
        assert!(!Rotation { degrees: 90.0 }.is_identity());
    }

    #[test]
    fn test_world_records_placements_in_order() {
        let mut world = SpawnedWorld::new();
        assert!(world.is_empty());

        let first = world.instantiate(&food_kind(), Position::new(1, 1), Rotation::identity());
        let second = world.instantiate(&food_kind(), Position::new(2, 2), Rotation::identity());

        assert_eq!(world.placed_count(), 2);
        let handles: Vec<SpawnHandle> = world.objects().map(|object| object.handle).collect();
        assert_eq!(handles, vec![first, second]);
    }

    #[test]
    fn test_parenting_groups_objects_under_container() {
        let mut world = SpawnedWorld::new();
        let board = world.create_container("Board");
        let tile = world.instantiate(&food_kind(), Position::new(1, 1), Rotation::identity());
        let loose = world.instantiate(&food_kind(), Position::new(2, 1), Rotation::identity());

        world.set_parent(tile, board);

        assert_eq!(world.container_named("Board"), Some(board));
        assert_eq!(world.children_of(board), 1);
        assert_eq!(world.objects_at(Position::new(2, 1))[0].handle, loose);
        assert!(world.objects_at(Position::new(2, 1))[0].parent.is_none());
    }

    #[test]
    fn test_category_queries() {
        let mut world = SpawnedWorld::new();
        let wall = TileKind::new(TileCategory::Wall, "wall3");
        let _ = world.instantiate(&wall, Position::new(1, 1), Rotation::identity());
        let _ = world.instantiate(&food_kind(), Position::new(1, 1), Rotation::identity());

        assert_eq!(world.count_in_category(TileCategory::Wall), 1);
        assert_eq!(world.count_in_category(TileCategory::Food), 1);
        assert_eq!(world.count_in_category(TileCategory::Exit), 0);
        // Both objects share the cell: floor-level stacking is allowed.
        assert_eq!(world.objects_at(Position::new(1, 1)).len(), 2);
    }
}
