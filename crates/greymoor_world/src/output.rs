//! The output channel handlers write player-visible text to.
//!
//! The core never formats transport markup; the front end decides how a
//! line reaches the participant. Tests use [`Transcript`] to capture what
//! would have been shown.

/// An abstract output channel for one participant.
pub trait Console {
    /// Writes one line of text to the participant.
    fn write(&mut self, text: &str);
}

/// A buffering console that records everything written to it.
#[derive(Clone, Debug, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    /// Creates an empty transcript.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines written so far, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whether any recorded line contains the given fragment.
    #[must_use]
    pub fn saw(&self, fragment: &str) -> bool {
        self.lines.iter().any(|line| line.contains(fragment))
    }

    /// Takes the recorded lines, leaving the transcript empty.
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.lines)
    }
}

impl Console for Transcript {
    fn write(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}
