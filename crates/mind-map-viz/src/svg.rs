//! SVG export.

use std::fs;
use std::path::{Path, PathBuf};

use askama::Template;
use tracing::info;

use crate::backend::DisplayBackend;
use crate::error::{RenderError, RenderResult};
use crate::scene::Scene;

/// Writes scenes to an SVG file.
#[derive(Debug, Clone)]
pub struct SvgExporter {
    path: PathBuf,
}

impl SvgExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplayBackend for SvgExporter {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn present(&mut self, scene: &Scene) -> RenderResult<()> {
        let document = render_svg(scene)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| RenderError::io(parent, e))?;
        }
        fs::write(&self.path, document).map_err(|e| RenderError::io(&self.path, e))?;

        info!(
            path = %self.path.display(),
            nodes = scene.nodes.len(),
            "Wrote SVG"
        );
        Ok(())
    }
}

/// Render `scene` as a standalone SVG document.
pub fn render_svg(scene: &Scene) -> RenderResult<String> {
    Ok(SvgTemplate::from_scene(scene).render()?)
}

/// Askama template for SVG output. Numbers are pre-formatted.
#[derive(Template)]
#[template(path = "mindmap.svg", escape = "html")]
struct SvgTemplate<'a> {
    title: &'a str,
    width: String,
    height: String,
    background: String,
    title_x: String,
    title_y: String,
    title_size: String,
    edge_color: String,
    edge_width: String,
    node_fill: String,
    node_outline: String,
    node_outline_width: String,
    label_color: String,
    label_size: String,
    label_weight: &'static str,
    edges: Vec<SvgLine>,
    nodes: Vec<SvgCircle<'a>>,
}

struct SvgLine {
    x1: String,
    y1: String,
    x2: String,
    y2: String,
}

struct SvgCircle<'a> {
    label: &'a str,
    cx: String,
    cy: String,
    r: String,
}

impl<'a> SvgTemplate<'a> {
    fn from_scene(scene: &'a Scene) -> Self {
        let style = &scene.style;
        Self {
            title: &scene.title,
            width: num(style.width),
            height: num(style.height),
            background: style.background.hex(),
            title_x: num(style.width / 2.0),
            title_y: num(style.margin / 2.0),
            title_size: num(style.title_size),
            edge_color: style.edge_color.hex(),
            edge_width: num(style.edge_width),
            node_fill: style.node_fill.hex(),
            node_outline: style.node_outline.hex(),
            node_outline_width: num(style.node_outline_width),
            label_color: style.label_color.hex(),
            label_size: num(style.label_size),
            label_weight: if style.label_bold { "bold" } else { "normal" },
            edges: scene
                .edges
                .iter()
                .map(|e| SvgLine {
                    x1: num(e.from.x),
                    y1: num(e.from.y),
                    x2: num(e.to.x),
                    y2: num(e.to.y),
                })
                .collect(),
            nodes: scene
                .nodes
                .iter()
                .map(|n| SvgCircle {
                    label: &n.label,
                    cx: num(n.center.x),
                    cy: num(n.center.y),
                    r: num(n.radius),
                })
                .collect(),
        }
    }
}

/// Two decimals, trailing zeros dropped.
fn num(value: f32) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "" | "-" | "-0" => "0".to_string(),
        s => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneEdge, SceneNode};
    use crate::style::RenderStyle;
    use mind_map_layout::Position;

    fn scene() -> Scene {
        Scene {
            title: "Tom & Jerry".to_string(),
            style: RenderStyle::default(),
            nodes: vec![
                SceneNode {
                    label: "<cat>".to_string(),
                    center: Position::new(100.0, 200.5),
                    radius: 25.0,
                },
                SceneNode {
                    label: "mouse".to_string(),
                    center: Position::new(300.0, 200.5),
                    radius: 25.0,
                },
            ],
            edges: vec![SceneEdge {
                from: Position::new(100.0, 200.5),
                to: Position::new(300.0, 200.5),
            }],
        }
    }

    #[test]
    fn test_num_formatting() {
        assert_eq!(num(1000.0), "1000");
        assert_eq!(num(200.5), "200.5");
        assert_eq!(num(0.126), "0.13");
        assert_eq!(num(-0.001), "0");
    }

    #[test]
    fn test_svg_contains_shapes() {
        let svg = render_svg(&scene()).unwrap();
        assert!(svg.starts_with("<?xml"));
        assert!(svg.contains(r#"width="1000" height="600""#));
        assert_eq!(svg.matches("<circle").count(), 2);
        assert_eq!(svg.matches("<line").count(), 1);
        assert!(svg.contains(r##"fill="#add8e6" stroke="#add8e6""##));
        assert!(svg.contains(r#"font-weight="bold""#));
        assert!(svg.contains(r#"x1="100" y1="200.5" x2="300" y2="200.5""#));
        assert!(svg.contains(">mouse</text>"));
    }

    #[test]
    fn test_labels_are_escaped() {
        let svg = render_svg(&scene()).unwrap();
        assert!(svg.contains("Tom &#38; Jerry") || svg.contains("Tom &amp; Jerry"));
        assert!(!svg.contains("<cat>"));
    }
}
