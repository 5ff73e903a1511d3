//! Integration tests for the greymoor_world crate.
//!
//! Tests for the entity layer:
//! - Container capacity enforcement
//! - Plurality stacks, splitting, and merging
