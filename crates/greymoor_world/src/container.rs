//! Container state: contents, capacity, and visibility.
//!
//! Any entity may carry [`ContainerState`], which makes it able to own
//! other entities. Rooms are containers too; a room's `dark` flag
//! suppresses its contents from command scope.

use crate::entity::EntityId;

/// The container-specific state of an entity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContainerState {
    /// Identifiers of contained entities, in insertion order.
    pub contents: Vec<EntityId>,
    /// Maximum weight carried, in grams.
    pub max_weight: u32,
    /// Maximum volume carried, in liters.
    pub max_volume: u32,
    /// Whether the contents are visible from outside without opening.
    pub see_inside: bool,
    /// Whether the container is dark inside (meaningful for rooms).
    pub dark: bool,
}

impl ContainerState {
    /// Creates a container with the given carrying capacity.
    ///
    /// Contents start empty; `see_inside` defaults to true and `dark` to
    /// false.
    #[must_use]
    pub fn new(max_weight: u32, max_volume: u32) -> Self {
        Self {
            contents: Vec::new(),
            max_weight,
            max_volume,
            see_inside: true,
            dark: false,
        }
    }

    /// Creates a room-sized container: effectively unlimited capacity.
    #[must_use]
    pub fn room() -> Self {
        Self::new(u32::MAX, u32::MAX)
    }

    /// Sets whether contents are visible without opening.
    #[must_use]
    pub fn with_see_inside(mut self, see_inside: bool) -> Self {
        self.see_inside = see_inside;
        self
    }

    /// Sets the darkness flag.
    #[must_use]
    pub fn with_dark(mut self, dark: bool) -> Self {
        self.dark = dark;
        self
    }

    /// Whether the container directly holds the given entity.
    #[must_use]
    pub fn holds(&self, id: &EntityId) -> bool {
        self.contents.contains(id)
    }
}
