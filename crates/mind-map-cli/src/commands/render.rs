//! Render command implementation.
//!
//! Runs the whole pipeline: extract phrases, build the word graph, lay it
//! out, then export and/or display it.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use mind_map_core::{build_graph, ConceptGraph, GraphSnapshot};
use mind_map_layout::{Layout, LayoutConfig, SpringLayout};
use mind_map_viz::{DisplayBackend, NativeWindow, RenderStyle, Scene, SvgExporter};
use serde::Serialize;
use tracing::{info, info_span};

use super::{load_extractor, read_input, with_hint, Source};
use crate::config::Config;

/// Export format for `--output`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    /// Guess the format from a file extension, defaulting to SVG.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Svg,
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!("Unknown format: {}. Use 'svg' or 'json'", s),
        }
    }
}

/// Options for `mindmap render`.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub text: Option<String>,
    pub file: Option<PathBuf>,
    pub demo: bool,
    pub title: Option<String>,
    pub output: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub no_display: bool,
    pub display: bool,
    pub seed: Option<u64>,
    pub iterations: Option<u32>,
    pub model: Option<String>,
    pub lexicon: Option<PathBuf>,
}

impl RenderOptions {
    /// Open a window unless suppressed, or unless writing a file without `--display`.
    pub fn wants_window(&self) -> bool {
        !self.no_display && (self.output.is_none() || self.display)
    }
}

/// JSON export: the graph plus where each word was placed.
#[derive(Debug, Serialize)]
struct Export<'a> {
    title: &'a str,
    keywords: &'a [String],
    graph: GraphSnapshot,
    layout: &'a Layout,
}

/// Run the full pipeline for one input.
pub fn execute(config: &Config, opts: RenderOptions) -> Result<()> {
    let input = read_input(opts.text.clone(), opts.file.as_deref(), opts.demo)?;
    if input.source == Source::Demo {
        println!("Rendering the demonstration text.");
    }

    let extractor = {
        let _span = info_span!("load_model").entered();
        load_extractor(config, opts.model.as_deref(), opts.lexicon.as_deref())?
    };

    let phrases = extractor.extract_bytes(&input.bytes).map_err(with_hint)?;
    let keywords: Vec<String> = phrases.iter().map(|p| p.text().to_string()).collect();
    println!("Extracted keywords: {keywords:?}");

    let graph = build_graph(&phrases);
    println!(
        "Graph: {} nodes, {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    let layout = compute_layout(config, &opts, &graph)?;
    let title = opts
        .title
        .clone()
        .unwrap_or_else(|| config.default_title.clone());
    let scene = Scene::compose(&graph, &layout, &title, &RenderStyle::default());

    if let Some(output) = &opts.output {
        let path = config.resolve_output(output);
        let format = opts.format.unwrap_or_else(|| OutputFormat::from_path(&path));
        match format {
            OutputFormat::Svg => SvgExporter::new(&path)
                .present(&scene)
                .with_context(|| format!("Failed to export SVG to {}", path.display()))?,
            OutputFormat::Json => {
                let export = Export {
                    title: &scene.title,
                    keywords: &keywords,
                    graph: graph.snapshot(),
                    layout: &layout,
                };
                write_json(&path, &export)?
            }
        }
        println!("Output written to: {}", path.display());
    }

    if opts.wants_window() {
        let mut window = NativeWindow::new();
        window
            .present(&scene)
            .with_context(|| format!("Failed to open the {}", window.name()))?;
    }

    Ok(())
}

fn compute_layout(config: &Config, opts: &RenderOptions, graph: &ConceptGraph) -> Result<Layout> {
    let layout_config = LayoutConfig::default()
        .with_seed(opts.seed.unwrap_or(config.seed))
        .with_iterations(opts.iterations.unwrap_or(config.iterations));

    let layout = SpringLayout::new(layout_config)
        .and_then(|mut engine| engine.compute(graph))
        .context("Failed to lay out the graph")?;

    info!(
        nodes = layout.len(),
        iterations = layout.iterations(),
        "Layout ready"
    );
    Ok(layout)
}

fn write_json(path: &Path, export: &Export<'_>) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let contents = serde_json::to_string_pretty(export)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write output to: {}", path.display()))
}
