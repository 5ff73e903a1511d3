//! World entities: identity, naming, plurality, and per-entity actions.

use std::fmt;

use crate::action::ActionTable;
use crate::container::ContainerState;

/// Stable string identifier for a world entity.
///
/// Identifiers are assigned by world content at creation and never change;
/// replica identifiers are derived from the original's key.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntityId(String);

impl EntityId {
    /// Creates an identifier from a string key.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntityId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for EntityId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A world object or actor.
///
/// An entity with `plurality > 1` is a single record standing for N
/// indistinguishable items; it matches as one candidate and is split into
/// a one-unit replica before any handler may mutate it.
#[derive(Clone, Debug)]
pub struct Entity {
    id: EntityId,
    /// Nouns this entity answers to.
    pub names: Vec<String>,
    /// Adjectives that may qualify the nouns.
    pub adjectives: Vec<String>,
    /// Short description, used in clarification lists and room text.
    pub short_desc: String,
    /// Weight in grams, for container capacity checks.
    pub weight: u32,
    /// Volume in liters, for container capacity checks.
    pub volume: u32,
    /// The container that owns this entity, if any.
    pub location: Option<EntityId>,
    /// How many indistinguishable units this record represents.
    /// Invariant: always at least 1.
    pub plurality: u32,
    /// Verb bindings.
    pub actions: ActionTable,
    /// Container state, if this entity can hold others.
    pub container: Option<ContainerState>,
}

impl Entity {
    /// Creates an entity answering to one noun, with plurality 1 and no
    /// container state.
    #[must_use]
    pub fn new(id: impl Into<EntityId>, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            id: id.into(),
            short_desc: name.clone(),
            names: vec![name],
            adjectives: Vec::new(),
            weight: 0,
            volume: 0,
            location: None,
            plurality: 1,
            actions: ActionTable::new(),
            container: None,
        }
    }

    /// The stable identifier.
    #[must_use]
    pub fn id(&self) -> &EntityId {
        &self.id
    }

    /// Adds another noun this entity answers to.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.names.push(name.into());
        self
    }

    /// Adds an adjective.
    #[must_use]
    pub fn with_adjective(mut self, adjective: impl Into<String>) -> Self {
        self.adjectives.push(adjective.into());
        self
    }

    /// Sets the short description.
    #[must_use]
    pub fn with_short_desc(mut self, desc: impl Into<String>) -> Self {
        self.short_desc = desc.into();
        self
    }

    /// Sets weight and volume.
    #[must_use]
    pub fn with_size(mut self, weight: u32, volume: u32) -> Self {
        self.weight = weight;
        self.volume = volume;
        self
    }

    /// Sets the plurality count. Counts below 1 are clamped to 1.
    #[must_use]
    pub fn with_plurality(mut self, plurality: u32) -> Self {
        self.plurality = plurality.max(1);
        self
    }

    /// Attaches container state.
    #[must_use]
    pub fn with_container(mut self, state: ContainerState) -> Self {
        self.container = Some(state);
        self
    }

    /// Sets the action table.
    #[must_use]
    pub fn with_actions(mut self, actions: ActionTable) -> Self {
        self.actions = actions;
        self
    }

    /// Whether the given noun is among this entity's names.
    #[must_use]
    pub fn answers_to(&self, noun: &str) -> bool {
        self.names.iter().any(|n| n == noun)
    }

    /// Whether the given word is among this entity's adjectives.
    #[must_use]
    pub fn has_adjective(&self, word: &str) -> bool {
        self.adjectives.iter().any(|a| a == word)
    }

    /// Container state, if any.
    #[must_use]
    pub fn container(&self) -> Option<&ContainerState> {
        self.container.as_ref()
    }

    /// Mutable container state, if any.
    pub fn container_mut(&mut self) -> Option<&mut ContainerState> {
        self.container.as_mut()
    }

    /// Whether this entity is still interchangeable with another unit of
    /// the same stack.
    ///
    /// Used for the merge-or-keep decision after a plurality split:
    /// identifier and plurality are ignored, everything else (names,
    /// adjectives, description, size, location, container state, verb
    /// bindings) must match.
    #[must_use]
    pub fn stack_equivalent(&self, other: &Self) -> bool {
        self.names == other.names
            && self.adjectives == other.adjectives
            && self.short_desc == other.short_desc
            && self.weight == other.weight
            && self.volume == other.volume
            && self.location == other.location
            && self.container == other.container
            && self.actions.same_bindings(&other.actions)
    }

    /// Copies this entity into a one-unit replica under a new identifier.
    ///
    /// The caller is responsible for decrementing the original's
    /// plurality and registering the replica; see
    /// [`World::split_replica`](crate::world::World::split_replica).
    #[must_use]
    pub fn replicate(&self, id: EntityId) -> Self {
        let mut replica = self.clone();
        replica.id = id;
        replica.plurality = 1;
        replica
    }
}
