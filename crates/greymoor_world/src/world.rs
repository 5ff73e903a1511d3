//! The entity registry: ownership, movement, plurality splitting, and
//! heartbeat membership.
//!
//! The registry is mutated only from within one command's dispatch; the
//! surrounding scheduler never runs two commands against overlapping
//! entities concurrently.

use std::collections::{BTreeMap, BTreeSet};

use crate::entity::{Entity, EntityId};
use crate::error::{Error, Result};

/// Bookkeeping for one in-flight plurality split.
///
/// The record's existence marks the replica as pending: the dispatcher
/// must end every split with either [`World::merge_replica`] or
/// [`World::keep_replica`] before the command returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSplit {
    /// The stack the unit was peeled from.
    pub original: EntityId,
    /// The one-unit replica.
    pub replica: EntityId,
}

/// Owns every entity in the world.
#[derive(Debug, Default)]
pub struct World {
    entities: BTreeMap<EntityId, Entity>,
    heartbeats: BTreeSet<EntityId>,
    replica_counter: u64,
}

impl World {
    /// Creates an empty world.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an entity with no location (rooms, detached objects).
    ///
    /// Returns the entity's identifier for convenience.
    pub fn insert(&mut self, entity: Entity) -> EntityId {
        let id = entity.id().clone();
        self.entities.insert(id.clone(), entity);
        id
    }

    /// Registers an entity inside a container, without a capacity check.
    ///
    /// This is the world-content creation path; player-driven movement
    /// goes through [`World::move_to`].
    pub fn spawn_in(&mut self, mut entity: Entity, container: &EntityId) -> Result<EntityId> {
        let id = entity.id().clone();
        entity.location = Some(container.clone());
        let state = self
            .get_mut(container)?
            .container_mut()
            .ok_or_else(|| Error::NotAContainer(container.clone()))?;
        state.contents.push(id.clone());
        self.entities.insert(id.clone(), entity);
        Ok(id)
    }

    /// Whether an entity is registered.
    #[must_use]
    pub fn contains(&self, id: &EntityId) -> bool {
        self.entities.contains_key(id)
    }

    /// Looks up an entity.
    pub fn get(&self, id: &EntityId) -> Result<&Entity> {
        self.entities.get(id).ok_or_else(|| Error::unknown(id))
    }

    /// Looks up an entity mutably.
    pub fn get_mut(&mut self, id: &EntityId) -> Result<&mut Entity> {
        self.entities.get_mut(id).ok_or_else(|| Error::unknown(id))
    }

    /// Removes an entity from the registry, detaching it from its
    /// container and from the heartbeat registry.
    pub fn remove(&mut self, id: &EntityId) -> Result<Entity> {
        self.detach(id);
        self.heartbeats.remove(id);
        self.entities.remove(id).ok_or_else(|| Error::unknown(id))
    }

    /// The ordered contents of a container.
    pub fn contents_of(&self, id: &EntityId) -> Result<&[EntityId]> {
        let entity = self.get(id)?;
        let state = entity
            .container()
            .ok_or_else(|| Error::NotAContainer(id.clone()))?;
        Ok(&state.contents)
    }

    /// Total weight and volume currently held by a container.
    pub fn carried_load(&self, id: &EntityId) -> Result<(u32, u32)> {
        let mut weight = 0u32;
        let mut volume = 0u32;
        for held in self.contents_of(id)? {
            let entity = self.get(held)?;
            weight = weight.saturating_add(entity.weight);
            volume = volume.saturating_add(entity.volume);
        }
        Ok((weight, volume))
    }

    /// Moves an entity into a container, enforcing the destination's
    /// weight and volume capacity.
    pub fn move_to(&mut self, id: &EntityId, dest: &EntityId) -> Result<()> {
        let (weight, volume) = {
            let entity = self.get(id)?;
            (entity.weight, entity.volume)
        };
        let (max_weight, max_volume) = {
            let state = self
                .get(dest)?
                .container()
                .ok_or_else(|| Error::NotAContainer(dest.clone()))?;
            (state.max_weight, state.max_volume)
        };
        let (held_weight, held_volume) = self.carried_load(dest)?;
        if held_weight.saturating_add(weight) > max_weight
            || held_volume.saturating_add(volume) > max_volume
        {
            return Err(Error::WouldExceedCapacity {
                entity: id.clone(),
                container: dest.clone(),
                weight,
                volume,
                max_weight,
                max_volume,
                held_weight,
                held_volume,
            });
        }
        self.force_move(id, dest)
    }

    /// Moves an entity into a container, ignoring capacity.
    pub fn force_move(&mut self, id: &EntityId, dest: &EntityId) -> Result<()> {
        self.get(id)?;
        if self.get(dest)?.container().is_none() {
            return Err(Error::NotAContainer(dest.clone()));
        }
        self.detach(id);
        if let Some(state) = self.get_mut(dest)?.container_mut() {
            state.contents.push(id.clone());
        }
        self.get_mut(id)?.location = Some(dest.clone());
        Ok(())
    }

    /// Removes an entity from its current container's contents, if any.
    fn detach(&mut self, id: &EntityId) {
        let location = self
            .entities
            .get(id)
            .and_then(|entity| entity.location.clone());
        if let Some(location) = location {
            if let Some(state) = self
                .entities
                .get_mut(&location)
                .and_then(Entity::container_mut)
            {
                state.contents.retain(|held| held != id);
            }
        }
    }

    /// Peels one unit off a plurality stack into a fully registered
    /// replica, placed next to the original in its container.
    ///
    /// The original's plurality drops by one; the replica carries exactly
    /// one unit and stays pending until merged or kept.
    pub fn split_replica(&mut self, id: &EntityId) -> Result<PendingSplit> {
        if self.get(id)?.plurality < 2 {
            return Err(Error::NotStacked(id.clone()));
        }
        self.replica_counter += 1;
        let replica_id = EntityId::new(format!("{id}~{}", self.replica_counter));
        let replica = self.get(id)?.replicate(replica_id.clone());
        let location = replica.location.clone();

        self.get_mut(id)?.plurality -= 1;
        if let Some(location) = location {
            if let Some(state) = self
                .entities
                .get_mut(&location)
                .and_then(Entity::container_mut)
            {
                let at = state
                    .contents
                    .iter()
                    .position(|held| held == id)
                    .map_or(state.contents.len(), |i| i + 1);
                state.contents.insert(at, replica_id.clone());
            }
        }
        self.entities.insert(replica_id.clone(), replica);

        tracing::debug!(original = %id, replica = %replica_id, "split one unit off plurality stack");
        Ok(PendingSplit {
            original: id.clone(),
            replica: replica_id,
        })
    }

    /// Returns a replica's plurality to its original and destroys the
    /// replica.
    pub fn merge_replica(&mut self, split: &PendingSplit) -> Result<()> {
        let replica = self.remove(&split.replica)?;
        self.get_mut(&split.original)?.plurality += replica.plurality;
        tracing::debug!(original = %split.original, replica = %split.replica, "merged replica back");
        Ok(())
    }

    /// Promotes a replica to an independent entity.
    ///
    /// The replica is already registered; this copies the original's
    /// heartbeat membership so a live stack keeps ticking as two records.
    pub fn keep_replica(&mut self, split: &PendingSplit) -> Result<()> {
        self.get(&split.replica)?;
        if self.has_heartbeat(&split.original) {
            self.register_heartbeat(&split.replica);
        }
        tracing::debug!(original = %split.original, replica = %split.replica, "kept replica as independent entity");
        Ok(())
    }

    /// Adds an entity to the background-tick registry.
    pub fn register_heartbeat(&mut self, id: &EntityId) {
        self.heartbeats.insert(id.clone());
    }

    /// Removes an entity from the background-tick registry.
    pub fn deregister_heartbeat(&mut self, id: &EntityId) {
        self.heartbeats.remove(id);
    }

    /// Whether an entity receives background ticks.
    #[must_use]
    pub fn has_heartbeat(&self, id: &EntityId) -> bool {
        self.heartbeats.contains(id)
    }

    /// Number of registered entities.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Whether the world is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Iterates over all registered entity identifiers.
    pub fn ids(&self) -> impl Iterator<Item = &EntityId> {
        self.entities.keys()
    }
}
