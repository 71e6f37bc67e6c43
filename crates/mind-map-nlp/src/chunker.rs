//! Noun chunk detection
//!
//! Identifies noun phrases using pattern matching on POS tags.
//! Pattern: (DET)? (ADV? ADJ | NOUN | PROPN | NUM)* (NOUN|PROPN)
//!
//! A bare pronoun forms a one-token chunk. Chunks never cross punctuation
//! or sentence boundaries.

use crate::types::{ChunkSpan, PosTag, Token};

/// Configuration for noun chunk detection
#[derive(Debug, Clone)]
pub struct ChunkerConfig {
    /// Minimum number of tokens in a chunk
    pub min_length: usize,
    /// Maximum number of tokens in a chunk
    pub max_length: usize,
    /// Whether to include determiners in chunks
    pub include_determiners: bool,
    /// Whether a lone pronoun counts as a chunk
    pub include_pronouns: bool,
}

impl Default for ChunkerConfig {
    fn default() -> Self {
        Self {
            min_length: 1,
            max_length: usize::MAX,
            include_determiners: true,
            include_pronouns: true,
        }
    }
}

/// Noun chunk detector
#[derive(Debug, Clone, Default)]
pub struct NounChunker {
    config: ChunkerConfig,
}

impl NounChunker {
    /// Create a new chunker with default config
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a chunker with custom config
    pub fn with_config(config: ChunkerConfig) -> Self {
        Self { config }
    }

    /// Set minimum chunk length
    pub fn with_min_length(mut self, min_length: usize) -> Self {
        self.config.min_length = min_length;
        self
    }

    /// Set maximum chunk length
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.config.max_length = max_length;
        self
    }

    /// Set whether determiners open a chunk
    pub fn with_determiners(mut self, include: bool) -> Self {
        self.config.include_determiners = include;
        self
    }

    /// Extract noun chunks from tagged tokens
    pub fn extract_chunks(&self, tokens: &[Token]) -> Vec<ChunkSpan> {
        let mut chunks = Vec::new();

        for sentence in tokens.chunk_by(|a, b| a.sentence_idx == b.sentence_idx) {
            self.extract_chunks_from_sentence(sentence, &mut chunks);
        }

        chunks
    }

    fn extract_chunks_from_sentence(&self, tokens: &[Token], chunks: &mut Vec<ChunkSpan>) {
        let mut i = 0;

        while i < tokens.len() {
            if let Some(end) = self.match_noun_phrase(tokens, i) {
                let len = end - i;
                if len >= self.config.min_length && len <= self.config.max_length {
                    chunks.push(ChunkSpan {
                        start_token: tokens[i].token_idx,
                        end_token: tokens[end - 1].token_idx + 1,
                        start_char: tokens[i].start,
                        end_char: tokens[end - 1].end,
                        sentence_idx: tokens[i].sentence_idx,
                    });
                    i = end;
                    continue;
                }
            }
            i += 1;
        }
    }

    /// Try to match a noun phrase starting at `start`, returning its exclusive end.
    fn match_noun_phrase(&self, tokens: &[Token], start: usize) -> Option<usize> {
        let first = tokens.get(start)?;

        if first.pos == PosTag::Pronoun {
            return self.config.include_pronouns.then_some(start + 1);
        }

        let mut end = start;
        if first.pos == PosTag::Determiner {
            if !self.config.include_determiners {
                return None;
            }
            end += 1;
        }
        let body_start = end;

        while let Some(token) = tokens.get(end) {
            let adverb_before_adjective = token.pos == PosTag::Adverb
                && tokens
                    .get(end + 1)
                    .is_some_and(|t| t.pos == PosTag::Adjective);
            if token.pos.is_nominal_modifier() || adverb_before_adjective {
                end += 1;
            } else {
                break;
            }
        }

        // Back off to the last noun
        while end > body_start && !tokens[end - 1].pos.is_noun() {
            end -= 1;
        }

        (end > body_start).then_some(end)
    }
}

/// Extract the text for a chunk span from its tokens, single-spaced
pub fn chunk_text(tokens: &[Token], chunk: &ChunkSpan) -> String {
    tokens[chunk.start_token..chunk.end_token]
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_tokens() -> Vec<Token> {
        // "The quick brown fox jumps over the lazy dog"
        vec![
            Token::new("The", PosTag::Determiner, 0, 3, 0, 0),
            Token::new("quick", PosTag::Adjective, 4, 9, 0, 1),
            Token::new("brown", PosTag::Adjective, 10, 15, 0, 2),
            Token::new("fox", PosTag::Noun, 16, 19, 0, 3),
            Token::new("jumps", PosTag::Verb, 20, 25, 0, 4),
            Token::new("over", PosTag::Preposition, 26, 30, 0, 5),
            Token::new("the", PosTag::Determiner, 31, 34, 0, 6),
            Token::new("lazy", PosTag::Adjective, 35, 39, 0, 7),
            Token::new("dog", PosTag::Noun, 40, 43, 0, 8),
        ]
    }

    #[test]
    fn test_basic_chunk_extraction() {
        let tokens = make_tokens();
        let chunks = NounChunker::new().extract_chunks(&tokens);
        let texts: Vec<_> = chunks.iter().map(|c| chunk_text(&tokens, c)).collect();

        assert_eq!(texts, vec!["The quick brown fox", "the lazy dog"]);
    }

    #[test]
    fn test_without_determiners() {
        let tokens = make_tokens();
        let chunks = NounChunker::new()
            .with_determiners(false)
            .extract_chunks(&tokens);
        let texts: Vec<_> = chunks.iter().map(|c| chunk_text(&tokens, c)).collect();

        assert_eq!(texts, vec!["quick brown fox", "lazy dog"]);
    }

    #[test]
    fn test_min_max_length() {
        let tokens = make_tokens();
        let chunker = NounChunker::new().with_min_length(2).with_max_length(3);
        let chunks = chunker.extract_chunks(&tokens);

        for chunk in &chunks {
            assert!((2..=3).contains(&chunk.len()));
        }
    }

    #[test]
    fn test_single_noun() {
        let tokens = vec![Token::new("machine", PosTag::Noun, 0, 7, 0, 0)];
        let chunks = NounChunker::new().extract_chunks(&tokens);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunk_text(&tokens, &chunks[0]), "machine");
    }

    #[test]
    fn test_proper_noun() {
        let tokens = vec![
            Token::new("New", PosTag::ProperNoun, 0, 3, 0, 0),
            Token::new("York", PosTag::ProperNoun, 4, 8, 0, 1),
            Token::new("City", PosTag::ProperNoun, 9, 13, 0, 2),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);

        assert_eq!(chunks.len(), 1);
        assert_eq!(chunk_text(&tokens, &chunks[0]), "New York City");
        assert_eq!((chunks[0].start_char, chunks[0].end_char), (0, 13));
    }

    #[test]
    fn test_cross_sentence_boundary() {
        let tokens = vec![
            Token::new("machine", PosTag::Noun, 0, 7, 0, 0),
            Token::new("learning", PosTag::Noun, 8, 16, 1, 1), // Different sentence
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);

        // Should not merge across sentences
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_punctuation_breaks_chunks() {
        let tokens = vec![
            Token::new("robotics", PosTag::Noun, 0, 8, 0, 0),
            Token::new(",", PosTag::Punctuation, 8, 9, 0, 1),
            Token::new("vision", PosTag::Noun, 10, 16, 0, 2),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        assert_eq!(chunks.len(), 2);
    }

    #[test]
    fn test_trailing_adjective_is_dropped() {
        // "the model accurate" -> back off to "the model"
        let tokens = vec![
            Token::new("the", PosTag::Determiner, 0, 3, 0, 0),
            Token::new("model", PosTag::Noun, 4, 9, 0, 1),
            Token::new("accurate", PosTag::Adjective, 10, 18, 0, 2),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunk_text(&tokens, &chunks[0]), "the model");
    }

    #[test]
    fn test_determiner_without_noun() {
        let tokens = vec![
            Token::new("the", PosTag::Determiner, 0, 3, 0, 0),
            Token::new("big", PosTag::Adjective, 4, 7, 0, 1),
            Token::new("runs", PosTag::Verb, 8, 12, 0, 2),
        ];
        assert!(NounChunker::new().extract_chunks(&tokens).is_empty());
    }

    #[test]
    fn test_pronoun_and_adverb() {
        let tokens = vec![
            Token::new("It", PosTag::Pronoun, 0, 2, 0, 0),
            Token::new("has", PosTag::Auxiliary, 3, 6, 0, 1),
            Token::new("very", PosTag::Adverb, 7, 11, 0, 2),
            Token::new("large", PosTag::Adjective, 12, 17, 0, 3),
            Token::new("models", PosTag::Noun, 18, 24, 0, 4),
        ];
        let chunks = NounChunker::new().extract_chunks(&tokens);
        let texts: Vec<_> = chunks.iter().map(|c| chunk_text(&tokens, c)).collect();
        assert_eq!(texts, vec!["It", "very large models"]);
    }
}
