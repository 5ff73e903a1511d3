//! Entity model for the Greymoor text world.
//!
//! This crate provides:
//! - [`Entity`] / [`EntityId`] - world objects and their stable string keys
//! - [`ContainerState`] - contents, capacity, and visibility
//! - [`Action`] / [`ActionTable`] - verb-to-handler bindings with
//!   transitivity capability flags
//! - [`World`] - the registry: movement, plurality splitting, heartbeats
//! - [`Console`] - the abstract output channel handlers write to
//!
//! The command-interpretation pipeline lives in `greymoor_parser`; this
//! crate only defines what entities are and how they may be mutated.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod action;
pub mod container;
pub mod entity;
pub mod error;
pub mod output;
pub mod world;

pub use action::{Action, ActionTable, Handler, Invocation, Outcome};
pub use container::ContainerState;
pub use entity::{Entity, EntityId};
pub use error::{Error, Result};
pub use output::{Console, Transcript};
pub use world::{PendingSplit, World};
