//! CLI configuration management.
//!
//! Values come from, in increasing precedence: built-in defaults, the JSON
//! config file, environment variables (a `.env` file is honoured), and
//! finally command-line flags.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use mind_map_layout::DEFAULT_SEED;
use mind_map_nlp::DEFAULT_MODEL;
use mind_map_viz::DEFAULT_TITLE;
use serde::{Deserialize, Serialize};

/// Application-wide configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Language model name.
    pub model: String,

    /// Extra lexicon merged over the model's built-in one.
    pub lexicon_path: Option<PathBuf>,

    /// Title used when `--title` is not given.
    pub default_title: String,

    /// Base directory for relative `--output` paths.
    pub output_dir: PathBuf,

    /// Layout seed.
    pub seed: u64,

    /// Layout iteration budget.
    pub iterations: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            lexicon_path: None,
            default_title: DEFAULT_TITLE.to_string(),
            output_dir: PathBuf::from("."),
            seed: DEFAULT_SEED,
            iterations: 50,
        }
    }
}

/// Keys accepted by `mindmap config get/set`.
pub const KEYS: &[&str] = &[
    "model",
    "lexicon",
    "title",
    "output-dir",
    "seed",
    "iterations",
];

impl Config {
    /// Load configuration from the config file and environment variables.
    pub fn load() -> Result<Self> {
        // Load .env file if present (silently ignore if missing)
        let _ = dotenvy::dotenv();

        let mut config = match Self::config_file_path() {
            Some(path) if path.exists() => Self::read_file(&path)?,
            _ => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn read_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Override fields from `MINDMAP_*` variables.
    pub fn apply_env(&mut self, var: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(model) = var("MINDMAP_MODEL") {
            self.model = model;
        }
        if let Some(lexicon) = var("MINDMAP_LEXICON") {
            self.lexicon_path = Some(PathBuf::from(lexicon));
        }
        if let Some(title) = var("MINDMAP_TITLE") {
            self.default_title = title;
        }
        if let Some(output_dir) = var("MINDMAP_OUTPUT_DIR") {
            self.output_dir = PathBuf::from(output_dir);
        }
        if let Some(seed) = var("MINDMAP_SEED") {
            self.seed = parse_env("MINDMAP_SEED", &seed)?;
        }
        if let Some(iterations) = var("MINDMAP_ITERATIONS") {
            self.iterations = parse_env("MINDMAP_ITERATIONS", &iterations)?;
        }
        Ok(())
    }

    /// Save current configuration to the config file.
    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_file_path()
            .context("Could not determine a configuration directory for this user")?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;
        Ok(())
    }

    /// Get the path to the config file.
    pub fn config_file_path() -> Option<PathBuf> {
        ProjectDirs::from("dev", "mind-map", "mindmap")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Resolve an output path against `output_dir` unless it is absolute.
    pub fn resolve_output(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output_dir.join(path)
        }
    }

    /// Current value of a `config get` key.
    pub fn get(&self, key: &str) -> Result<String> {
        Ok(match key {
            "model" => self.model.clone(),
            "lexicon" | "lexicon-path" => self
                .lexicon_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(not set)".to_string()),
            "title" | "default-title" => self.default_title.clone(),
            "output-dir" => self.output_dir.display().to_string(),
            "seed" => self.seed.to_string(),
            "iterations" => self.iterations.to_string(),
            _ => unknown_key(key)?,
        })
    }

    /// Update a `config set` key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "model" => self.model = value.to_string(),
            "lexicon" | "lexicon-path" => {
                self.lexicon_path = match value {
                    "" | "none" => None,
                    path => Some(PathBuf::from(path)),
                }
            }
            "title" | "default-title" => self.default_title = value.to_string(),
            "output-dir" => self.output_dir = PathBuf::from(value),
            "seed" => {
                self.seed = value
                    .parse()
                    .with_context(|| format!("Invalid seed: {value}"))?
            }
            "iterations" => {
                self.iterations = value
                    .parse()
                    .with_context(|| format!("Invalid iteration count: {value}"))?
            }
            _ => unknown_key(key)?,
        }
        Ok(())
    }
}

fn unknown_key<T>(key: &str) -> Result<T> {
    anyhow::bail!(
        "Unknown config key: {}. Valid keys: {}",
        key,
        KEYS.join(", ")
    )
}

fn parse_env<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("Invalid {name} value: {value:?}"))
}
