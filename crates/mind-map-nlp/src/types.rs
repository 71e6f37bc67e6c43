//! Tokens, part-of-speech tags and chunk spans produced by a language model.

use std::str::FromStr;

/// Coarse universal part-of-speech tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Determiner,
    Adjective,
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Auxiliary,
    Adverb,
    Preposition,
    CoordinatingConjunction,
    SubordinatingConjunction,
    Particle,
    Numeral,
    Punctuation,
    Interjection,
    Other,
}

impl PosTag {
    /// Nouns and proper nouns.
    pub fn is_noun(self) -> bool {
        matches!(self, PosTag::Noun | PosTag::ProperNoun)
    }

    /// Tags that may sit between a determiner and the head noun.
    pub fn is_nominal_modifier(self) -> bool {
        matches!(
            self,
            PosTag::Adjective | PosTag::Noun | PosTag::ProperNoun | PosTag::Numeral
        )
    }

    /// Universal dependencies label for the tag.
    pub fn label(self) -> &'static str {
        match self {
            PosTag::Determiner => "DET",
            PosTag::Adjective => "ADJ",
            PosTag::Noun => "NOUN",
            PosTag::ProperNoun => "PROPN",
            PosTag::Pronoun => "PRON",
            PosTag::Verb => "VERB",
            PosTag::Auxiliary => "AUX",
            PosTag::Adverb => "ADV",
            PosTag::Preposition => "ADP",
            PosTag::CoordinatingConjunction => "CCONJ",
            PosTag::SubordinatingConjunction => "SCONJ",
            PosTag::Particle => "PART",
            PosTag::Numeral => "NUM",
            PosTag::Punctuation => "PUNCT",
            PosTag::Interjection => "INTJ",
            PosTag::Other => "X",
        }
    }
}

impl FromStr for PosTag {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = match s.to_ascii_uppercase().as_str() {
            "DET" => PosTag::Determiner,
            "ADJ" => PosTag::Adjective,
            "NOUN" => PosTag::Noun,
            "PROPN" => PosTag::ProperNoun,
            "PRON" => PosTag::Pronoun,
            "VERB" => PosTag::Verb,
            "AUX" => PosTag::Auxiliary,
            "ADV" => PosTag::Adverb,
            "ADP" => PosTag::Preposition,
            "CCONJ" => PosTag::CoordinatingConjunction,
            "SCONJ" => PosTag::SubordinatingConjunction,
            "PART" => PosTag::Particle,
            "NUM" => PosTag::Numeral,
            "PUNCT" => PosTag::Punctuation,
            "INTJ" => PosTag::Interjection,
            "X" => PosTag::Other,
            other => return Err(format!("unknown tag `{other}`")),
        };
        Ok(tag)
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single token of the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Surface form.
    pub text: String,
    /// Part-of-speech tag.
    pub pos: PosTag,
    /// Byte offset of the first character in the source.
    pub start: usize,
    /// Byte offset one past the last character in the source.
    pub end: usize,
    /// Sentence the token belongs to.
    pub sentence_idx: usize,
    /// Position of the token in the document.
    pub token_idx: usize,
}

impl Token {
    pub fn new(
        text: impl Into<String>,
        pos: PosTag,
        start: usize,
        end: usize,
        sentence_idx: usize,
        token_idx: usize,
    ) -> Self {
        Self {
            text: text.into(),
            pos,
            start,
            end,
            sentence_idx,
            token_idx,
        }
    }
}

/// A noun chunk expressed as token and byte boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkSpan {
    /// First token index (inclusive).
    pub start_token: usize,
    /// Last token index (exclusive).
    pub end_token: usize,
    /// Byte offset where the chunk starts.
    pub start_char: usize,
    /// Byte offset where the chunk ends.
    pub end_char: usize,
    /// Sentence containing the chunk.
    pub sentence_idx: usize,
}

impl ChunkSpan {
    /// Number of tokens covered.
    pub fn len(&self) -> usize {
        self.end_token - self.start_token
    }

    pub fn is_empty(&self) -> bool {
        self.end_token == self.start_token
    }
}

/// Output of a language model for one document.
#[derive(Debug, Clone, Default)]
pub struct ParsedDoc {
    /// All tokens in order.
    pub tokens: Vec<Token>,
    /// Noun chunks in order of appearance.
    pub chunks: Vec<ChunkSpan>,
}

impl ParsedDoc {
    /// Source slice covered by a chunk, if the span lies within `text`.
    pub fn chunk_text<'t>(&self, text: &'t str, chunk: &ChunkSpan) -> Option<&'t str> {
        text.get(chunk.start_char..chunk.end_char)
    }

    /// Number of sentences seen.
    pub fn sentence_count(&self) -> usize {
        self.tokens
            .last()
            .map(|t| t.sentence_idx + 1)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trips_through_label() {
        for tag in [PosTag::Determiner, PosTag::ProperNoun, PosTag::Other] {
            assert_eq!(tag.label().parse::<PosTag>().unwrap(), tag);
        }
        assert_eq!("noun".parse::<PosTag>().unwrap(), PosTag::Noun);
        assert!("NOPE".parse::<PosTag>().is_err());
    }

    #[test]
    fn test_chunk_text_slices_source() {
        let text = "computer science";
        let doc = ParsedDoc {
            tokens: vec![
                Token::new("computer", PosTag::Noun, 0, 8, 0, 0),
                Token::new("science", PosTag::Noun, 9, 16, 0, 1),
            ],
            chunks: vec![ChunkSpan {
                start_token: 0,
                end_token: 2,
                start_char: 0,
                end_char: 16,
                sentence_idx: 0,
            }],
        };

        assert_eq!(doc.chunk_text(text, &doc.chunks[0]), Some("computer science"));
        assert_eq!(doc.chunks[0].len(), 2);
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_chunk_text_out_of_bounds() {
        let doc = ParsedDoc::default();
        let span = ChunkSpan {
            start_token: 0,
            end_token: 1,
            start_char: 0,
            end_char: 50,
            sentence_idx: 0,
        };
        assert_eq!(doc.chunk_text("short", &span), None);
        assert_eq!(doc.sentence_count(), 0);
    }
}
