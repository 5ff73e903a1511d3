//! Verb-to-handler bindings and the handler calling convention.
//!
//! Every entity owns an [`ActionTable`] mapping verb strings to
//! [`Action`]s. An action binds a handler to a verb together with two
//! independent capability flags: whether it can be called with no direct
//! object (intransitive) and whether it can be called with one
//! (transitive). One handler may be bound under several verbs.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::entity::EntityId;
use crate::error::Result;
use crate::output::Console;
use crate::world::World;

/// What a handler reports back to the dispatcher.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The command was fully handled; stop trying further candidates.
    Handled,
    /// This candidate declines in a recoverable way; the dispatcher keeps
    /// the first such message and tries the next candidate.
    Decline(String),
}

/// Everything a handler is invoked with.
///
/// `this`, `direct`, and `indirect` are post-split: when a plurality
/// stack was split for this invocation, they name the single-unit
/// replica, not the stack.
#[derive(Clone, Debug)]
pub struct Invocation {
    /// The acting entity.
    pub actor: EntityId,
    /// The candidate whose handler is running.
    pub this: EntityId,
    /// The resolved direct object, if any.
    pub direct: Option<EntityId>,
    /// The resolved indirect object, if any.
    pub indirect: Option<EntityId>,
    /// The verb as typed.
    pub verb: String,
    /// The diagrammed preposition, if any.
    pub preposition: Option<String>,
    /// The full tokenized command, verb first.
    pub words: Vec<String>,
}

impl Invocation {
    /// The words after the verb, rejoined as typed.
    ///
    /// Speech-style verbs use this rather than the object resolution.
    #[must_use]
    pub fn text_after_verb(&self) -> String {
        self.words[1..].join(" ")
    }
}

/// The handler calling convention.
///
/// `Ok(Outcome)` is the normal path; `Err` is an unrecoverable failure
/// and triggers the dispatcher's rollback.
pub type Handler =
    Arc<dyn Fn(&mut World, &Invocation, &mut dyn Console) -> Result<Outcome> + Send + Sync>;

/// A verb binding: a handler plus its transitivity capabilities.
#[derive(Clone)]
pub struct Action {
    handler: Handler,
    /// Callable with a direct object.
    pub transitive: bool,
    /// Callable with no direct object.
    pub intransitive: bool,
}

impl Action {
    /// Creates an action callable only without a direct object.
    pub fn intransitive<F>(handler: F) -> Self
    where
        F: Fn(&mut World, &Invocation, &mut dyn Console) -> Result<Outcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            handler: Arc::new(handler),
            transitive: false,
            intransitive: true,
        }
    }

    /// Creates an action callable only with a direct object.
    pub fn transitive<F>(handler: F) -> Self
    where
        F: Fn(&mut World, &Invocation, &mut dyn Console) -> Result<Outcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            handler: Arc::new(handler),
            transitive: true,
            intransitive: false,
        }
    }

    /// Creates an action callable both ways.
    pub fn both<F>(handler: F) -> Self
    where
        F: Fn(&mut World, &Invocation, &mut dyn Console) -> Result<Outcome>
            + Send
            + Sync
            + 'static,
    {
        Self {
            handler: Arc::new(handler),
            transitive: true,
            intransitive: true,
        }
    }

    /// Whether this binding supports a call with or without a direct
    /// object text.
    #[must_use]
    pub fn supports(&self, has_direct_text: bool) -> bool {
        (self.intransitive && !has_direct_text) || self.transitive
    }

    /// Invokes the bound handler.
    pub fn invoke(
        &self,
        world: &mut World,
        invocation: &Invocation,
        console: &mut dyn Console,
    ) -> Result<Outcome> {
        (self.handler)(world, invocation, console)
    }

    /// Whether two actions are the same binding: identical handler and
    /// identical capability flags.
    #[must_use]
    pub fn same_binding(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.handler, &other.handler)
            && self.transitive == other.transitive
            && self.intransitive == other.intransitive
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Action")
            .field("transitive", &self.transitive)
            .field("intransitive", &self.intransitive)
            .finish_non_exhaustive()
    }
}

/// The per-entity mapping from verb string to action.
#[derive(Clone, Debug, Default)]
pub struct ActionTable {
    map: BTreeMap<String, Action>,
}

impl ActionTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds an action under one verb, replacing any previous binding.
    pub fn bind(&mut self, verb: impl Into<String>, action: Action) {
        self.map.insert(verb.into(), action);
    }

    /// Binds one action under several verbs, sharing the handler.
    pub fn bind_all<I, S>(&mut self, verbs: I, action: &Action)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for verb in verbs {
            self.map.insert(verb.into(), action.clone());
        }
    }

    /// Looks up the binding for a verb.
    #[must_use]
    pub fn get(&self, verb: &str) -> Option<&Action> {
        self.map.get(verb)
    }

    /// Whether any verb is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates over bound verbs.
    pub fn verbs(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }

    /// Whether two tables carry the same bindings verb for verb.
    #[must_use]
    pub fn same_bindings(&self, other: &Self) -> bool {
        self.map.len() == other.map.len()
            && self
                .map
                .iter()
                .all(|(verb, action)| other.map.get(verb).is_some_and(|b| action.same_binding(b)))
    }
}
