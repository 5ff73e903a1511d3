//! Command-line tokenization.
//!
//! Splits a raw input line into words, lowercases it, and strips
//! articles. Speech-style verbs keep everything after the verb untouched
//! so quoted speech survives verbatim.

/// Articles stripped from ordinary commands.
pub const ARTICLES: [&str; 3] = ["a", "an", "the"];

/// Verbs whose argument text is preserved as typed: articles stay,
/// casing stays.
pub const VERBATIM_VERBS: [&str; 6] = ["say", "shout", "whisper", "mutter", "emote", "execute"];

/// Tokenizes one command line.
///
/// Ordinary verbs: the whole line is lowercased and articles are removed.
/// Verbatim verbs: only the verb itself is lowercased; the rest of the
/// line is kept word for word.
///
/// Returns an empty vector for blank input; an input that was nothing but
/// articles also comes back empty (the caller reports that case).
#[must_use]
pub fn tokenize(line: &str) -> Vec<String> {
    let mut words = line.split_whitespace();
    let Some(first) = words.next() else {
        return Vec::new();
    };
    let verb = first.to_lowercase();

    if VERBATIM_VERBS.contains(&verb.as_str()) {
        let mut tokens = vec![verb];
        tokens.extend(words.map(str::to_string));
        return tokens;
    }

    std::iter::once(verb)
        .chain(words.map(str::to_lowercase))
        .filter(|word| !ARTICLES.contains(&word.as_str()))
        .collect()
}

/// Whether the line contained words but they were all articles.
///
/// `tokenize` returns an empty vector for both blank and article-only
/// input; this helper checks the raw line so the caller can report the
/// latter.
#[must_use]
pub fn only_articles(line: &str) -> bool {
    let mut words = line.split_whitespace().peekable();
    words.peek().is_some()
        && words.all(|word| ARTICLES.contains(&word.to_lowercase().as_str()))
}
