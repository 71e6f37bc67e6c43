//! Word → tag lexicon backing the rule model.
//!
//! Format: one `word TAG` entry per line, separated by a tab or spaces.
//! Blank lines and lines starting with `#` are ignored. Words are stored
//! lower-cased.

use std::path::Path;

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::error::{NlpError, NlpResult};
use crate::types::PosTag;

/// Built-in English lexicon.
pub const ENGLISH_LEXICON: &str = include_str!("../lexicon/en.tsv");

/// A lower-cased word to tag mapping.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: FxHashMap<String, PosTag>,
}

impl Lexicon {
    /// Create an empty lexicon.
    pub fn new() -> Self {
        Self::default()
    }

    /// The embedded English lexicon.
    pub fn english() -> NlpResult<Self> {
        Self::parse(ENGLISH_LEXICON)
            .map_err(|e| NlpError::model_unavailable("en_rules", format!("embedded lexicon: {e}")))
    }

    /// Parse lexicon source text.
    ///
    /// Errors carry the 1-based line number of the first malformed entry.
    pub fn parse(source: &str) -> Result<Self, String> {
        let mut lexicon = Self::new();
        for (line_no, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let mut fields = line.split_whitespace();
            let (Some(word), Some(tag), None) = (fields.next(), fields.next(), fields.next())
            else {
                return Err(format!("line {}: expected `word TAG`", line_no + 1));
            };
            let tag: PosTag = tag
                .parse()
                .map_err(|e| format!("line {}: {}", line_no + 1, e))?;
            lexicon.insert(word, tag);
        }
        Ok(lexicon)
    }

    /// Load a lexicon file, reporting failures as an unavailable model.
    pub fn load(model: &str, path: &Path) -> NlpResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| {
            NlpError::model_unavailable(model, format!("cannot read {}: {}", path.display(), e))
        })?;
        let lexicon = Self::parse(&source)
            .map_err(|e| NlpError::model_unavailable(model, format!("{}: {}", path.display(), e)))?;
        debug!(path = %path.display(), entries = lexicon.len(), "Loaded lexicon");
        Ok(lexicon)
    }

    pub fn insert(&mut self, word: &str, tag: PosTag) {
        self.entries.insert(word.to_lowercase(), tag);
    }

    /// Tag for a word, matched case-insensitively.
    pub fn get(&self, word: &str) -> Option<PosTag> {
        self.entries.get(&word.to_lowercase()).copied()
    }

    /// Overlay `other` on top of this lexicon; its entries win.
    pub fn merge(&mut self, other: Lexicon) {
        self.entries.extend(other.entries);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
