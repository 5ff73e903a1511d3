//! Error types for the Greymoor entity model.
//!
//! Uses `thiserror` for ergonomic error definition.

use thiserror::Error;

use crate::entity::EntityId;

/// Result alias for world operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the entity model.
#[derive(Debug, Error)]
pub enum Error {
    /// No entity is registered under this identifier.
    #[error("unknown entity: {0}")]
    UnknownEntity(EntityId),

    /// The entity cannot hold other entities.
    #[error("{0} is not a container")]
    NotAContainer(EntityId),

    /// The entity has no location (it is outside the world tree).
    #[error("{0} is nowhere")]
    Nowhere(EntityId),

    /// The entity is not inside the named container.
    #[error("{entity} is not inside {container}")]
    NotInContainer {
        /// The entity that was looked for.
        entity: EntityId,
        /// The container that was searched.
        container: EntityId,
    },

    /// The destination cannot carry the additional weight or volume.
    #[error(
        "the {entity} ({weight}g, {volume}L) can't be held by the {container}, \
         which can only carry {max_weight}g and {max_volume}L \
         (currently holding {held_weight}g and {held_volume}L)"
    )]
    WouldExceedCapacity {
        /// The entity being moved.
        entity: EntityId,
        /// The destination container.
        container: EntityId,
        /// Weight of the moved entity, in grams.
        weight: u32,
        /// Volume of the moved entity, in liters.
        volume: u32,
        /// Maximum weight the container carries.
        max_weight: u32,
        /// Maximum volume the container carries.
        max_volume: u32,
        /// Weight already held.
        held_weight: u32,
        /// Volume already held.
        held_volume: u32,
    },

    /// The entity represents a single unit and cannot be split.
    #[error("{0} has no plurality to split")]
    NotStacked(EntityId),

    /// A verb handler reported an unrecoverable failure.
    #[error("handler for '{verb}' on {entity} failed: {message}")]
    HandlerFailed {
        /// The verb being enacted.
        verb: String,
        /// The entity whose handler ran.
        entity: EntityId,
        /// Diagnostic text from the handler.
        message: String,
    },
}

impl Error {
    /// Creates an unknown-entity error.
    #[must_use]
    pub fn unknown(id: &EntityId) -> Self {
        Self::UnknownEntity(id.clone())
    }

    /// Creates a handler-failure error.
    #[must_use]
    pub fn handler_failed(
        verb: impl Into<String>,
        entity: &EntityId,
        message: impl Into<String>,
    ) -> Self {
        Self::HandlerFailed {
            verb: verb.into(),
            entity: entity.clone(),
            message: message.into(),
        }
    }
}
