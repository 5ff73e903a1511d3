//! Greymoor - Multi-user text world engine
//!
//! This crate re-exports both layers of the Greymoor system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 1: greymoor_parser — Tokenizing, diagramming, resolution, dispatch
//! Layer 0: greymoor_world  — Entities, containers, actions, plurality
//! ```

pub use greymoor_parser as parser;
pub use greymoor_world as world;
