//! Noun phrase extraction for mind maps.
//!
//! The [`PhraseExtractor`] asks a [`LanguageModel`] for noun chunks and keeps
//! the ones spanning more than one word. The model is an injected capability:
//! [`RuleModel`] is the built-in English implementation (tokenizer, lexicon
//! and verb-table tagger, pattern chunker), and tests substitute their own.
//!
//! ```no_run
//! use mind_map_nlp::{PhraseExtractor, RuleModel};
//!
//! let extractor = PhraseExtractor::new(RuleModel::english()?);
//! let phrases = extractor.extract("Machine learning is a branch of computer science.")?;
//! # Ok::<(), mind_map_nlp::NlpError>(())
//! ```

mod chunker;
mod error;
mod extractor;
mod lexicon;
mod model;
mod tagger;
mod tokenizer;
mod types;
mod verbs;

pub use chunker::{chunk_text, ChunkerConfig, NounChunker};
pub use error::{NlpError, NlpResult};
pub use extractor::PhraseExtractor;
pub use lexicon::{Lexicon, ENGLISH_LEXICON};
pub use model::{LanguageModel, ModelSpec, RuleModel, DEFAULT_MODEL};
pub use tagger::RuleTagger;
pub use tokenizer::tokenize;
pub use types::{ChunkSpan, ParsedDoc, PosTag, Token};
pub use verbs::{Number, VerbForms, VerbTable, ENGLISH_VERBS};
