//! Sentence diagramming.
//!
//! Splits a tokenized command into verb, direct-object text, preposition,
//! and indirect-object text. Three sentence shapes are recognized:
//!
//! 1. `<verb>` — intransitive
//! 2. `<verb> <direct object>` — transitive
//! 3. `<verb> <direct object> <preposition> <indirect object>`

/// The fixed preposition vocabulary, scanned in this order.
pub const PREPOSITIONS: [&str; 13] = [
    "in", "on", "over", "under", "with", "at", "from", "off", "out", "into", "away", "around",
    "onto",
];

/// The diagrammed form of one input line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Command {
    /// The verb, always the first token.
    pub verb: String,
    /// Direct-object text, absent for intransitive sentences.
    pub direct_text: Option<String>,
    /// The recognized preposition, if any.
    pub preposition: Option<String>,
    /// Indirect-object text, absent unless a preposition was found.
    pub indirect_text: Option<String>,
}

impl Command {
    /// Whether the sentence carried direct-object text.
    #[must_use]
    pub fn has_direct_text(&self) -> bool {
        self.direct_text.is_some()
    }
}

fn join(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

/// Diagrams a tokenized sentence. The first token is always the verb.
///
/// The first token from [`PREPOSITIONS`] found after the verb splits the
/// remainder into direct- and indirect-object text, with one carve-out:
/// the directional verb `go` ignores a candidate `in` ("go in the cave"
/// names a destination, not a relation). A preposition with no trailing
/// indirect-object text is accepted and only logged.
///
/// # Panics
///
/// Panics if `words` is empty; the caller filters blank input.
#[must_use]
pub fn diagram(words: &[String]) -> Command {
    let verb = words[0].clone();
    let rest = &words[1..];

    let preposition_at = rest.iter().position(|word| {
        if verb == "go" && word == "in" {
            return false;
        }
        PREPOSITIONS.contains(&word.as_str())
    });

    let Some(at) = preposition_at else {
        return Command {
            verb,
            direct_text: join(rest),
            preposition: None,
            indirect_text: None,
        };
    };

    let preposition = rest[at].clone();
    let direct_text = join(&rest[..at]);
    let indirect_text = join(&rest[at + 1..]);
    if indirect_text.is_none() {
        tracing::warn!(
            verb = %verb,
            preposition = %preposition,
            "sentence ends in a preposition with no indirect object"
        );
    }

    Command {
        verb,
        direct_text,
        preposition: Some(preposition),
        indirect_text,
    }
}
