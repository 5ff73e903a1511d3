//! Integration tests for verb dispatch.
//!
//! Tests for the candidate loop:
//! - Priority ordering (direct object, indirect object, scope order)
//! - Transactional rollback when a handler fails
//! - Transitivity filtering

mod priority_tests;
mod rollback_tests;
