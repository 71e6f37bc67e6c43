//! Multi-word noun phrase extraction.

use mind_map_core::Phrase;
use tracing::{debug, info};

use crate::error::{NlpError, NlpResult};
use crate::model::LanguageModel;

/// Extracts multi-word noun phrases using an injected [`LanguageModel`].
#[derive(Debug, Clone)]
pub struct PhraseExtractor<M> {
    model: M,
}

impl<M: LanguageModel> PhraseExtractor<M> {
    pub fn new(model: M) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Noun chunks of `text` with more than one word, in order of appearance.
    ///
    /// Each phrase is the exact source slice of its chunk with outer whitespace
    /// stripped. Duplicates are kept.
    pub fn extract(&self, text: &str) -> NlpResult<Vec<Phrase>> {
        let doc = self.model.parse(text)?;

        let mut phrases = Vec::with_capacity(doc.chunks.len());
        for chunk in &doc.chunks {
            let slice = doc.chunk_text(text, chunk).ok_or_else(|| {
                NlpError::parse(format!(
                    "model `{}` returned chunk {}..{} outside the input",
                    self.model.name(),
                    chunk.start_char,
                    chunk.end_char
                ))
            })?;
            match Phrase::new(slice) {
                Some(phrase) => phrases.push(phrase),
                None => debug!(chunk = slice, "Skipping single-word chunk"),
            }
        }

        info!(
            model = self.model.name(),
            chunks = doc.chunks.len(),
            phrases = phrases.len(),
            "Extracted phrases"
        );
        Ok(phrases)
    }

    /// Like [`PhraseExtractor::extract`], for raw bytes that must be UTF-8.
    pub fn extract_bytes(&self, bytes: &[u8]) -> NlpResult<Vec<Phrase>> {
        let text = std::str::from_utf8(bytes).map_err(|e| {
            NlpError::parse(format!(
                "input is not valid UTF-8 (invalid sequence at byte {})",
                e.valid_up_to()
            ))
        })?;
        self.extract(text)
    }

    /// Phrase texts only, as plain strings.
    pub fn extract_keywords(&self, text: &str) -> NlpResult<Vec<String>> {
        Ok(self.extract(text)?.into_iter().map(String::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ChunkSpan, ParsedDoc};

    /// Test double returning canned chunk spans.
    struct CannedModel {
        spans: Vec<(usize, usize)>,
    }

    impl LanguageModel for CannedModel {
        fn name(&self) -> &str {
            "canned"
        }

        fn parse(&self, _text: &str) -> NlpResult<ParsedDoc> {
            let chunks = self
                .spans
                .iter()
                .map(|&(start, end)| ChunkSpan {
                    start_token: 0,
                    end_token: 1,
                    start_char: start,
                    end_char: end,
                    sentence_idx: 0,
                })
                .collect();
            Ok(ParsedDoc {
                tokens: Vec::new(),
                chunks,
            })
        }
    }

    struct BrokenModel;

    impl LanguageModel for BrokenModel {
        fn name(&self) -> &str {
            "broken"
        }

        fn parse(&self, _text: &str) -> NlpResult<ParsedDoc> {
            Err(NlpError::parse("cannot cope"))
        }
    }

    #[test]
    fn test_filters_single_words_and_keeps_order() {
        let text = "robots and  big data and big data";
        let extractor = PhraseExtractor::new(CannedModel {
            spans: vec![(0, 6), (10, 20), (25, 33)],
        });

        let phrases = extractor.extract_keywords(text).unwrap();
        assert_eq!(phrases, vec!["big data", "big data"]);
    }

    #[test]
    fn test_strips_outer_whitespace() {
        let text = "x  machine learning  y";
        let extractor = PhraseExtractor::new(CannedModel {
            spans: vec![(1, 20)],
        });
        assert_eq!(extractor.extract_keywords(text).unwrap(), vec!["machine learning"]);
    }

    #[test]
    fn test_out_of_range_span_is_parse_error() {
        let extractor = PhraseExtractor::new(CannedModel {
            spans: vec![(0, 100)],
        });
        assert!(matches!(
            extractor.extract("short"),
            Err(NlpError::Parse { .. })
        ));
    }

    #[test]
    fn test_model_errors_propagate() {
        let extractor = PhraseExtractor::new(BrokenModel);
        assert!(matches!(extractor.extract("text"), Err(NlpError::Parse { .. })));
    }

    #[test]
    fn test_invalid_utf8_is_parse_error() {
        let extractor = PhraseExtractor::new(CannedModel { spans: vec![] });
        let err = extractor.extract_bytes(&[b'o', b'k', 0xff, 0xfe]).unwrap_err();
        match err {
            NlpError::Parse { message } => assert!(message.contains("byte 2"), "{message}"),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
