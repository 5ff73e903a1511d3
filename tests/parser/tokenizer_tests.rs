//! Tokenizer tests.
//!
//! Tests for lowercasing, article stripping, and verbatim speech text.

use greymoor_parser::{only_articles, tokenize};

#[test]
fn tokenize_simple_command() {
    assert_eq!(tokenize("take sword"), ["take", "sword"]);
}

#[test]
fn tokenize_lowercases_ordinary_commands() {
    assert_eq!(tokenize("TAKE the Brass LAMP"), ["take", "brass", "lamp"]);
}

#[test]
fn tokenize_strips_articles_everywhere() {
    assert_eq!(
        tokenize("put a coin in the pouch"),
        ["put", "coin", "in", "pouch"]
    );
}

#[test]
fn tokenize_blank_input_is_empty() {
    assert!(tokenize("").is_empty());
    assert!(tokenize("   \t  ").is_empty());
}

#[test]
fn tokenize_article_only_input_is_empty() {
    assert!(tokenize("the the an").is_empty());
    assert!(only_articles("the the an"));
    assert!(!only_articles(""));
    assert!(!only_articles("the lamp"));
}

#[test]
fn speech_keeps_text_verbatim() {
    assert_eq!(
        tokenize("say The Password is XYZZY"),
        ["say", "The", "Password", "is", "XYZZY"]
    );
}

#[test]
fn speech_verb_itself_is_still_lowercased() {
    assert_eq!(tokenize("SHOUT Help Me"), ["shout", "Help", "Me"]);
}

#[test]
fn tokenize_collapses_runs_of_whitespace() {
    assert_eq!(tokenize("take   the   brass   lamp"), ["take", "brass", "lamp"]);
}
