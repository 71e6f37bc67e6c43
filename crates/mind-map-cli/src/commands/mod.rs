//! CLI command implementations.

use std::io::{IsTerminal, Read};
use std::path::Path;

use anyhow::{Context, Result};
use mind_map_nlp::{ModelSpec, NlpError, PhraseExtractor, RuleModel};
use tracing::debug;

use crate::config::Config;

pub mod config;
pub mod keywords;
pub mod render;

/// Text used when no input is given.
pub const DEMO_TEXT: &str = "
    Artificial intelligence is a branch of computer science that aims to
    create intelligent machines. It has applications in robotics, natural
    language processing, computer vision, and machine learning.
    ";

/// Where the input text came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Argument,
    File,
    Stdin,
    Demo,
}

/// Raw input bytes and where they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Input {
    pub bytes: Vec<u8>,
    pub source: Source,
}

/// Pick the input: argument, then file, then piped stdin, then the demo.
///
/// Piped stdin is the input even when it is empty. The demo text is used
/// when asked for, or when nothing is given and stdin is a terminal.
/// Files and stdin are read as bytes so that encoding problems surface as
/// language processing errors.
pub fn read_input(text: Option<String>, file: Option<&Path>, demo: bool) -> Result<Input> {
    if demo {
        return Ok(demo_input());
    }
    if let Some(text) = text {
        return Ok(Input {
            bytes: text.into_bytes(),
            source: Source::Argument,
        });
    }
    if let Some(path) = file {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read input file {}", path.display()))?;
        return Ok(Input {
            bytes,
            source: Source::File,
        });
    }

    let mut stdin = std::io::stdin();
    if stdin.is_terminal() {
        debug!("No input given, using demonstration text");
        return Ok(demo_input());
    }
    let mut bytes = Vec::new();
    stdin
        .read_to_end(&mut bytes)
        .context("Failed to read text from stdin")?;
    Ok(Input {
        bytes,
        source: Source::Stdin,
    })
}

fn demo_input() -> Input {
    Input {
        bytes: DEMO_TEXT.as_bytes().to_vec(),
        source: Source::Demo,
    }
}

/// Load the configured language model, overridden by command-line flags.
pub fn load_extractor(
    config: &Config,
    model: Option<&str>,
    lexicon: Option<&Path>,
) -> Result<PhraseExtractor<RuleModel>> {
    let mut spec = ModelSpec::new(model.unwrap_or(&config.model));
    if let Some(path) = lexicon.or(config.lexicon_path.as_deref()) {
        spec = spec.with_lexicon(path);
    }

    let model = RuleModel::load(&spec).map_err(with_hint)?;
    Ok(PhraseExtractor::new(model))
}

/// Attach the remediation hint to an extraction error.
pub fn with_hint(err: NlpError) -> anyhow::Error {
    let hint = err.hint();
    anyhow::Error::new(err).context(format!("Language processing failed (hint: {hint})"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_flag_wins() {
        let input = read_input(Some("ignored".into()), None, true).unwrap();
        assert_eq!(input.source, Source::Demo);
        assert_eq!(input.bytes, DEMO_TEXT.as_bytes());
    }

    #[test]
    fn test_argument_before_file() {
        let input = read_input(Some("deep learning".into()), Some(Path::new("missing.txt")), false)
            .unwrap();
        assert_eq!(input.source, Source::Argument);
        assert_eq!(input.bytes, b"deep learning");
    }

    #[test]
    fn test_file_is_read_as_raw_bytes() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("bad.txt");
        std::fs::write(&path, b"computer \xc3\x28 science").unwrap();

        let input = read_input(None, Some(&path), false).unwrap();
        assert_eq!(input.source, Source::File);
        assert_eq!(input.bytes, b"computer \xc3\x28 science");
    }

    #[test]
    fn test_missing_file_names_the_path() {
        let err = read_input(None, Some(Path::new("no-such-notes.txt")), false).unwrap_err();
        assert!(err.to_string().contains("no-such-notes.txt"));
    }
}
