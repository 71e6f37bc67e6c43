//! The language model capability and its built-in rule implementation.

use std::path::PathBuf;

use tracing::{debug, info};

use crate::chunker::NounChunker;
use crate::error::{NlpError, NlpResult};
use crate::lexicon::Lexicon;
use crate::tagger::RuleTagger;
use crate::tokenizer::tokenize;
use crate::types::ParsedDoc;

/// Name of the built-in English rule model.
pub const DEFAULT_MODEL: &str = "en_rules";

/// Capability to segment text into tagged tokens and noun chunks.
pub trait LanguageModel {
    /// Identifier of the model, for diagnostics.
    fn name(&self) -> &str;

    /// Parse `text` into tokens and noun chunks.
    fn parse(&self, text: &str) -> NlpResult<ParsedDoc>;
}

impl<M: LanguageModel + ?Sized> LanguageModel for &M {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn parse(&self, text: &str) -> NlpResult<ParsedDoc> {
        (**self).parse(text)
    }
}

impl<M: LanguageModel + ?Sized> LanguageModel for Box<M> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn parse(&self, text: &str) -> NlpResult<ParsedDoc> {
        (**self).parse(text)
    }
}

/// Which model to load and with what extra resources.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSpec {
    /// Model name, e.g. `en_rules`.
    pub name: String,
    /// Optional lexicon file merged over the built-in entries.
    pub lexicon_path: Option<PathBuf>,
}

impl Default for ModelSpec {
    fn default() -> Self {
        Self {
            name: DEFAULT_MODEL.to_string(),
            lexicon_path: None,
        }
    }
}

impl ModelSpec {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lexicon_path: None,
        }
    }

    pub fn with_lexicon(mut self, path: impl Into<PathBuf>) -> Self {
        self.lexicon_path = Some(path.into());
        self
    }
}

/// Lexicon-driven English model: tokenizer, rule tagger and noun chunker.
#[derive(Debug, Clone)]
pub struct RuleModel {
    name: String,
    tagger: RuleTagger,
    chunker: NounChunker,
}

impl RuleModel {
    /// Load a model by spec.
    pub fn load(spec: &ModelSpec) -> NlpResult<Self> {
        let mut lexicon = match spec.name.to_ascii_lowercase().as_str() {
            "en_rules" | "en" | "english" => Lexicon::english()?,
            _ => {
                return Err(NlpError::model_unavailable(
                    &spec.name,
                    format!("unknown model (available: {DEFAULT_MODEL})"),
                ))
            }
        };

        if let Some(path) = &spec.lexicon_path {
            let extra = Lexicon::load(&spec.name, path)?;
            debug!(entries = extra.len(), "Merging user lexicon");
            lexicon.merge(extra);
        }

        info!(model = %spec.name, entries = lexicon.len(), "Loaded language model");
        Ok(Self {
            name: spec.name.clone(),
            tagger: RuleTagger::new(lexicon),
            chunker: NounChunker::new(),
        })
    }

    /// The built-in English model with no extra lexicon.
    pub fn english() -> NlpResult<Self> {
        Self::load(&ModelSpec::default())
    }

    /// Replace the chunker, e.g. to drop determiners.
    pub fn with_chunker(mut self, chunker: NounChunker) -> Self {
        self.chunker = chunker;
        self
    }
}

impl LanguageModel for RuleModel {
    fn name(&self) -> &str {
        &self.name
    }

    fn parse(&self, text: &str) -> NlpResult<ParsedDoc> {
        let mut tokens = tokenize(text);
        self.tagger.tag(&mut tokens);
        let chunks = self.chunker.extract_chunks(&tokens);
        debug!(
            tokens = tokens.len(),
            chunks = chunks.len(),
            "Parsed text"
        );
        Ok(ParsedDoc { tokens, chunks })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chunker::chunk_text;

    #[test]
    fn test_unknown_model_is_unavailable() {
        let err = RuleModel::load(&ModelSpec::new("en_core_web_sm")).unwrap_err();
        match err {
            NlpError::ModelUnavailable { model, reason } => {
                assert_eq!(model, "en_core_web_sm");
                assert!(reason.contains(DEFAULT_MODEL));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_aliases_load() {
        for name in ["en_rules", "EN", "english"] {
            let model = RuleModel::load(&ModelSpec::new(name)).unwrap();
            assert_eq!(model.name(), name);
        }
    }

    #[test]
    fn test_missing_lexicon_is_unavailable() {
        let spec = ModelSpec::default().with_lexicon("/no/such/lexicon.tsv");
        assert!(matches!(
            RuleModel::load(&spec),
            Err(NlpError::ModelUnavailable { .. })
        ));
    }

    #[test]
    fn test_parse_reference_sentence() {
        let model = RuleModel::english().unwrap();
        let doc = model
            .parse("Artificial intelligence is a branch of computer science.")
            .unwrap();
        let chunks: Vec<_> = doc
            .chunks
            .iter()
            .map(|c| chunk_text(&doc.tokens, c))
            .collect();

        assert_eq!(
            chunks,
            vec!["Artificial intelligence", "a branch", "computer science"]
        );
        assert_eq!(doc.sentence_count(), 1);
    }

    #[test]
    fn test_model_behind_box_and_reference() {
        let model: Box<dyn LanguageModel> = Box::new(RuleModel::english().unwrap());
        assert_eq!(model.name(), DEFAULT_MODEL);
        let by_ref = &model;
        assert!(by_ref.parse("").unwrap().tokens.is_empty());
    }
}
