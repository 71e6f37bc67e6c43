//! Keywords command implementation.
//!
//! Runs phrase extraction only.

use std::path::PathBuf;

use anyhow::Result;

use super::{load_extractor, read_input, with_hint};
use crate::config::Config;

/// Options for `mindmap keywords`.
#[derive(Debug, Clone, Default)]
pub struct KeywordsOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub demo: bool,
    pub json: bool,
    pub model: Option<String>,
    pub lexicon: Option<PathBuf>,
}

/// Print the multi-word noun phrases of the input, one per line.
pub fn execute(config: &Config, opts: KeywordsOptions) -> Result<()> {
    let input = read_input(opts.text, opts.file.as_deref(), opts.demo)?;
    let extractor = load_extractor(config, opts.model.as_deref(), opts.lexicon.as_deref())?;
    let keywords: Vec<String> = extractor
        .extract_bytes(&input.bytes)
        .map_err(with_hint)?
        .into_iter()
        .map(String::from)
        .collect();

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&keywords)?);
    } else {
        // One phrase per line, so line breaks inside a phrase are flattened.
        for keyword in &keywords {
            println!("{}", keyword.split_whitespace().collect::<Vec<_>>().join(" "));
        }
    }
    Ok(())
}
