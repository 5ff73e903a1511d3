//! Command interpretation for Greymoor.
//!
//! This crate turns a raw line of player input into an action invocation
//! against the world, in four stages:
//!
//! - **Tokenize**: split, lowercase, strip articles (speech verbs keep
//!   their text verbatim).
//! - **Diagram**: identify verb, direct-object text, preposition, and
//!   indirect-object text.
//! - **Resolve**: match object text against the actor's scope, honoring
//!   adjectives and ordinals.
//! - **Dispatch**: offer the command to each candidate entity's action
//!   table until one handles it, splitting stacked entities so only one
//!   unit is acted upon.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod diagram;
pub mod dispatch;
pub mod error;
pub mod resolve;
pub mod scope;
pub mod stdlib;
pub mod tokenize;

pub use diagram::{Command, PREPOSITIONS, diagram};
pub use dispatch::{TurnStatus, dispatch};
pub use error::ResolveError;
pub use resolve::{ORDINALS, Resolution, clarification, ordinal_rank, resolve};
pub use scope::scope_for;
pub use tokenize::{ARTICLES, VERBATIM_VERBS, only_articles, tokenize};
