//! Parser-side error types.

use thiserror::Error;

/// Hard errors raised while matching object text against scope.
///
/// Both abort the command before any dispatch; the message text is shown
/// to the actor as-is.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// Two different ordinal words qualified the same noun.
    #[error("I'm confused: you specified both {first} and {second}!")]
    ConflictingOrdinals {
        /// The ordinal word seen first.
        first: String,
        /// The conflicting ordinal word.
        second: String,
    },

    /// An ordinal selected a position beyond the matched set.
    #[error("You specified '{word}' but I only see {matched} objects matching {described}!")]
    OrdinalOutOfRange {
        /// The ordinal word as typed.
        word: String,
        /// How many candidates actually matched.
        matched: usize,
        /// The non-ordinal adjectives and noun, as typed.
        described: String,
    },
}
