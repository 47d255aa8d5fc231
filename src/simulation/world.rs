//! The world registry: every entity keyed by its identifier.
//!
//! # Invariants
//! - `seed` is strictly greater than every id ever allocated, so ids are
//!   never reused even after removal.
//! - Only [`World::insert`] advances `seed`.

use std::collections::BTreeMap;

use super::entity::{Entity, Id};

/// Entity registry. A `BTreeMap` so that every scan and every fold walks the
/// entities in ascending id order.
pub type Entities = BTreeMap<Id, Entity>;

/// The authoritative simulation state.
///
/// The world exclusively owns all entities. Relations between entities
/// (attraction, proximity) are never stored; they are recomputed by scanning.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct World {
    seed: Id,
    entities: Entities,
}

impl World {
    /// Creates an empty world whose first allocated id will be 0.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The id the next insert will allocate.
    pub fn seed(&self) -> Id {
        self.seed
    }

    /// Read-only access to all entities.
    pub fn entities(&self) -> &Entities {
        &self.entities
    }

    /// Number of entities in the world.
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Checks whether the world holds no entities.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Looks up an entity.
    pub fn get(&self, id: Id) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Inserts an entity under a freshly allocated id.
    ///
    /// # Returns
    ///
    /// The id assigned to the entity.
    pub fn insert(&mut self, entity: Entity) -> Id {
        let id = self.seed;
        self.seed += 1;
        self.entities.insert(id, entity);
        id
    }

    /// Overwrites the entity stored under `id`. The seed is left untouched.
    ///
    /// # Returns
    ///
    /// The previous value, or `None` (and no change) if `id` is not present.
    pub fn replace(&mut self, id: Id, entity: Entity) -> Option<Entity> {
        let slot = self.entities.get_mut(&id)?;
        Some(std::mem::replace(slot, entity))
    }

    /// Removes an entity. The seed is left untouched, so `id` is retired.
    ///
    /// # Returns
    ///
    /// The removed entity if it existed.
    pub fn remove(&mut self, id: Id) -> Option<Entity> {
        self.entities.remove(&id)
    }
}
