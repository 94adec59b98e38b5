use std::collections::HashSet;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalized keyword tokens extracted from a piece of text.
///
/// Tokens are lower-cased, accent-stripped, alphanumeric, at least three
/// characters long, and filtered against a generic-word stoplist. Used only
/// for the topic-adherence comparison, never for scoring.
#[derive(Debug, Clone, Default)]
pub struct TokenSet {
    tokens: HashSet<String>,
}

impl TokenSet {
    pub fn extract(text: &str, stoplist: &[&str]) -> Self {
        let normalized: String = text
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { ' ' })
            .collect();

        let tokens = normalized
            .split_whitespace()
            .filter(|word| word.len() >= 3 && !stoplist.contains(word))
            .map(str::to_owned)
            .collect();

        Self { tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Number of tokens shared with `other` (set intersection, not multiset).
    pub fn overlap(&self, other: &TokenSet) -> usize {
        self.tokens.intersection(&other.tokens).count()
    }
}

/// Coarse surface statistics of an essay, shared by the scorers, the tag
/// derivation, and the basic validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStats {
    pub word_count: usize,
    pub paragraph_count: usize,
    pub char_count: usize,
}

impl TextStats {
    pub fn of(text: &str) -> Self {
        Self {
            word_count: word_count(text),
            paragraph_count: paragraph_count(text),
            char_count: text.chars().count(),
        }
    }
}

/// Whitespace-delimited word count of the trimmed text.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Non-empty paragraphs delimited by blank lines. A line holding only
/// whitespace still counts as blank.
pub fn paragraph_count(text: &str) -> usize {
    let mut count = 0;
    let mut in_paragraph = false;
    for line in text.lines() {
        if line.trim().is_empty() {
            in_paragraph = false;
        } else if !in_paragraph {
            count += 1;
            in_paragraph = true;
        }
    }
    count
}

/// Case-insensitive substring check used by every keyword heuristic.
pub fn contains_phrase(lowered_text: &str, phrase: &str) -> bool {
    lowered_text.contains(phrase)
}
