//! Object resolution: matching object text against scope.
//!
//! The final word of an object fragment is the noun; everything before it
//! is an adjective. Ordinal words ("first".."tenth") are pulled out of
//! the adjective list and select among multiple matches by 1-based
//! position in scope-scan order.

use greymoor_world::{EntityId, World};

use crate::error::ResolveError;

/// The ordinal vocabulary, mapping word to 1-based position.
pub const ORDINALS: [(&str, usize); 10] = [
    ("first", 1),
    ("second", 2),
    ("third", 3),
    ("fourth", 4),
    ("fifth", 5),
    ("sixth", 6),
    ("seventh", 7),
    ("eighth", 8),
    ("ninth", 9),
    ("tenth", 10),
];

/// Looks up a word in the ordinal vocabulary.
#[must_use]
pub fn ordinal_rank(word: &str) -> Option<usize> {
    ORDINALS
        .iter()
        .find(|(name, _)| *name == word)
        .map(|(_, rank)| *rank)
}

/// The result of matching one object fragment against scope.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Exactly one entity matched.
    Found(EntityId),
    /// No entity matched; the caller decides whether that is an error
    /// ("take banana") or fine ("go north").
    NotFound,
    /// More than one entity matched and no ordinal chose among them.
    /// The caller must stop and ask for clarification.
    Ambiguous(Vec<EntityId>),
}

/// Matches an object text fragment against the entities in scope.
///
/// An entity matches when the fragment's noun is among its names and
/// every non-ordinal adjective is among its adjectives. At most one
/// distinct ordinal word may appear; a second different one, or an
/// ordinal past the matched count, is a hard error.
pub fn resolve(
    world: &World,
    text: &str,
    scope: &[EntityId],
) -> Result<Resolution, ResolveError> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let Some((&noun, adjectives)) = words.split_last() else {
        return Ok(Resolution::NotFound);
    };

    // Pull ordinal words out of the adjective list before matching.
    let mut ordinal: Option<(&str, usize)> = None;
    let mut plain_adjectives: Vec<&str> = Vec::new();
    for &adjective in adjectives {
        if let Some(rank) = ordinal_rank(adjective) {
            if let Some((word, _)) = ordinal {
                if word != adjective {
                    return Err(ResolveError::ConflictingOrdinals {
                        first: word.to_string(),
                        second: adjective.to_string(),
                    });
                }
            }
            ordinal = Some((adjective, rank));
        } else {
            plain_adjectives.push(adjective);
        }
    }

    let matched: Vec<EntityId> = scope
        .iter()
        .filter(|id| {
            world.get(id).is_ok_and(|entity| {
                entity.answers_to(noun)
                    && plain_adjectives
                        .iter()
                        .all(|adjective| entity.has_adjective(adjective))
            })
        })
        .cloned()
        .collect();
    tracing::debug!(text = %text, matched = ?matched, "object resolution candidates");

    if let Some((word, rank)) = ordinal {
        return match matched.get(rank - 1) {
            Some(id) => Ok(Resolution::Found(id.clone())),
            None => Err(ResolveError::OrdinalOutOfRange {
                word: word.to_string(),
                matched: matched.len(),
                described: plain_adjectives
                    .iter()
                    .copied()
                    .chain(std::iter::once(noun))
                    .collect::<Vec<_>>()
                    .join(" "),
            }),
        };
    }

    match matched.len() {
        0 => Ok(Resolution::NotFound),
        1 => Ok(Resolution::Found(matched[0].clone())),
        _ => Ok(Resolution::Ambiguous(matched)),
    }
}

/// Renders the clarification shown when a fragment stays ambiguous:
/// each candidate's short description, and an invitation to add
/// adjectives or an ordinal.
#[must_use]
pub fn clarification(world: &World, text: &str, matched: &[EntityId]) -> String {
    let candidates = matched
        .iter()
        .filter_map(|id| world.get(id).ok())
        .map(|entity| entity.short_desc.clone())
        .collect::<Vec<_>>()
        .join(", or the ");
    format!(
        "By '{text}', do you mean the {candidates}? Please provide more adjectives, \
         or specify 'first', 'second', 'third', etc."
    )
}
