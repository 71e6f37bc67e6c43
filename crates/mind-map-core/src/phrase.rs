//! Multi-word noun phrases.

use serde::{Deserialize, Serialize};

/// A contiguous span of source text identified as a noun phrase.
///
/// Always holds at least two whitespace-separated words; leading and trailing
/// whitespace is stripped on construction. Inner whitespace (including line
/// breaks copied from the source) is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phrase {
    text: String,
}

impl Phrase {
    /// Minimum number of words a phrase must carry.
    pub const MIN_WORDS: usize = 2;

    /// Create a phrase from a chunk of text.
    ///
    /// Returns `None` when the trimmed text has fewer than [`Phrase::MIN_WORDS`] words.
    pub fn new(text: impl AsRef<str>) -> Option<Self> {
        let trimmed = text.as_ref().trim();
        if trimmed.split_whitespace().count() < Self::MIN_WORDS {
            return None;
        }
        Some(Self {
            text: trimmed.to_string(),
        })
    }

    /// The phrase text as it appeared in the source.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whitespace-separated words in order of appearance.
    pub fn words(&self) -> impl Iterator<Item = &str> + '_ {
        self.text.split_whitespace()
    }

    /// Number of whitespace-separated words.
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    /// Consecutive word pairs `(i, i + 1)`.
    pub fn adjacent_pairs(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let words: Vec<&str> = self.words().collect();
        (1..words.len()).map(move |i| (words[i - 1], words[i]))
    }
}

impl std::fmt::Display for Phrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.text
    }
}

impl TryFrom<String> for Phrase {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Phrase::new(&value).ok_or_else(|| format!("phrase needs at least two words: {value:?}"))
    }
}
