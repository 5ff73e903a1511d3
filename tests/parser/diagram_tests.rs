//! Sentence diagramming tests.
//!
//! Tests for verb/direct/preposition/indirect identification.

use greymoor_parser::{diagram, tokenize};

#[test]
fn intransitive_sentence() {
    let command = diagram(&tokenize("look"));
    assert_eq!(command.verb, "look");
    assert_eq!(command.direct_text, None);
    assert_eq!(command.preposition, None);
    assert_eq!(command.indirect_text, None);
}

#[test]
fn transitive_sentence() {
    let command = diagram(&tokenize("take rusty sword"));
    assert_eq!(command.verb, "take");
    assert_eq!(command.direct_text.as_deref(), Some("rusty sword"));
    assert_eq!(command.preposition, None);
}

#[test]
fn full_sentence_with_indirect_object() {
    let command = diagram(&tokenize("put gold coin in leather pouch"));
    assert_eq!(command.verb, "put");
    assert_eq!(command.direct_text.as_deref(), Some("gold coin"));
    assert_eq!(command.preposition.as_deref(), Some("in"));
    assert_eq!(command.indirect_text.as_deref(), Some("leather pouch"));
}

#[test]
fn leading_preposition_leaves_no_direct_object() {
    // "turn on flashlight" has no direct-object text at all.
    let command = diagram(&tokenize("turn on flashlight"));
    assert_eq!(command.verb, "turn");
    assert_eq!(command.direct_text, None);
    assert_eq!(command.preposition.as_deref(), Some("on"));
    assert_eq!(command.indirect_text.as_deref(), Some("flashlight"));
    assert!(!command.has_direct_text());
}

#[test]
fn first_preposition_wins() {
    let command = diagram(&tokenize("hit nail on head with hammer"));
    assert_eq!(command.direct_text.as_deref(), Some("nail"));
    assert_eq!(command.preposition.as_deref(), Some("on"));
    assert_eq!(command.indirect_text.as_deref(), Some("head with hammer"));
}

#[test]
fn go_in_names_a_destination() {
    let command = diagram(&tokenize("go in cave"));
    assert_eq!(command.verb, "go");
    assert_eq!(command.direct_text.as_deref(), Some("in cave"));
    assert_eq!(command.preposition, None);
}

#[test]
fn go_still_diagrams_other_prepositions() {
    let command = diagram(&tokenize("go around the corner"));
    assert_eq!(command.preposition.as_deref(), Some("around"));
    assert_eq!(command.indirect_text.as_deref(), Some("corner"));
}

#[test]
fn dangling_preposition_is_tolerated() {
    let command = diagram(&tokenize("look at"));
    assert_eq!(command.verb, "look");
    assert_eq!(command.preposition.as_deref(), Some("at"));
    assert_eq!(command.indirect_text, None);
}
