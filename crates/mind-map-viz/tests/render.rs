//! Pipeline tests from graph to presented scene.

use mind_map_core::{build_graph, ConceptGraph, Phrase};
use mind_map_layout::{spring_layout, LayoutConfig};
use mind_map_viz::{DisplayBackend, RenderError, RenderResult, RenderStyle, Scene, SvgExporter};

/// Backend double that keeps every scene it is given.
#[derive(Default)]
struct RecordingBackend {
    scenes: Vec<Scene>,
}

impl DisplayBackend for RecordingBackend {
    fn name(&self) -> &'static str {
        "recording"
    }

    fn present(&mut self, scene: &Scene) -> RenderResult<()> {
        self.scenes.push(scene.clone());
        Ok(())
    }
}

fn compose(phrases: &[&str], title: &str) -> Scene {
    let phrases: Vec<Phrase> = phrases.iter().filter_map(Phrase::new).collect();
    let graph = build_graph(&phrases);
    let layout = spring_layout(&graph, &LayoutConfig::default()).unwrap();
    Scene::compose(&graph, &layout, title, &RenderStyle::default())
}

#[test]
fn test_reference_graph_renders() {
    let scene = compose(
        &["Artificial intelligence", "a branch", "computer science"],
        "Mind Map",
    );
    let mut backend = RecordingBackend::default();
    backend.present(&scene).unwrap();

    assert_eq!(backend.scenes.len(), 1);
    assert_eq!(backend.scenes[0].nodes.len(), 6);
    assert_eq!(backend.scenes[0].edges.len(), 3);
}

#[test]
fn test_composition_is_deterministic() {
    let phrases = ["natural language processing", "computer vision", "computer science"];
    assert_eq!(compose(&phrases, "x"), compose(&phrases, "x"));
}

#[test]
fn test_empty_graph_exports_title_only_svg() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested/out/empty.svg");

    let graph = ConceptGraph::empty();
    let layout = spring_layout(&graph, &LayoutConfig::default()).unwrap();
    let scene = Scene::compose(&graph, &layout, "", &RenderStyle::default());

    let mut exporter = SvgExporter::new(&path);
    exporter.present(&scene).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    assert!(svg.contains("Mind Map"));
    assert!(!svg.contains("<circle"));
}

#[test]
fn test_svg_export_writes_every_label() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("map.svg");
    let scene = compose(&["machine learning", "computer vision"], "AI");

    SvgExporter::new(&path).present(&scene).unwrap();

    let svg = std::fs::read_to_string(&path).unwrap();
    for word in ["machine", "learning", "computer", "vision"] {
        assert!(svg.contains(&format!(">{word}</text>")), "missing {word}");
    }
    assert_eq!(svg.matches("<line").count(), 2);
}

#[test]
fn test_unwritable_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    std::fs::write(&blocker, "not a directory").unwrap();

    let scene = compose(&["machine learning"], "AI");
    let err = SvgExporter::new(blocker.join("map.svg"))
        .present(&scene)
        .unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }), "{err}");
}
