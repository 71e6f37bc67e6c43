//! Pure mapping from layout space onto a pixel canvas.

use mind_map_core::ConceptGraph;
use mind_map_layout::{Layout, Position};
use serde::Serialize;
use tracing::{debug, warn};

use crate::style::RenderStyle;

/// Title used when none is given.
pub const DEFAULT_TITLE: &str = "Mind Map";

/// A node placed on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneNode {
    pub label: String,
    pub center: Position,
    pub radius: f32,
}

/// A straight edge between two node centres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SceneEdge {
    pub from: Position,
    pub to: Position,
}

/// Everything a backend needs to draw, in canvas pixels (y grows downward).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    pub title: String,
    pub style: RenderStyle,
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl Scene {
    /// Place every node of `graph` at its layout position, scaled into the
    /// canvas inside the margins with the aspect ratio preserved.
    pub fn compose(
        graph: &ConceptGraph,
        layout: &Layout,
        title: &str,
        style: &RenderStyle,
    ) -> Scene {
        let title = match title.trim() {
            "" => DEFAULT_TITLE.to_string(),
            t => t.to_string(),
        };
        let to_canvas = CanvasMapping::new(layout, style);
        let positions = layout.positions();

        let mut nodes = Vec::with_capacity(graph.node_count());
        for word in graph.nodes() {
            match positions.get(word) {
                Some(&pos) => nodes.push(SceneNode {
                    label: word.to_string(),
                    center: to_canvas.map(pos),
                    radius: style.node_radius,
                }),
                None => warn!(word, "Node missing from layout, not drawn"),
            }
        }

        let edges: Vec<SceneEdge> = graph
            .edges()
            .filter_map(|(a, b)| {
                Some(SceneEdge {
                    from: to_canvas.map(*positions.get(a)?),
                    to: to_canvas.map(*positions.get(b)?),
                })
            })
            .collect();

        debug!(
            nodes = nodes.len(),
            edges = edges.len(),
            "Composed scene"
        );
        Scene {
            title,
            style: style.clone(),
            nodes,
            edges,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The node drawn for `label`, if any.
    pub fn node(&self, label: &str) -> Option<&SceneNode> {
        self.nodes.iter().find(|n| n.label == label)
    }
}

/// Affine map from layout coordinates to canvas pixels.
struct CanvasMapping {
    mid: Position,
    factor: f32,
    center: Position,
}

impl CanvasMapping {
    fn new(layout: &Layout, style: &RenderStyle) -> Self {
        let center = Position::new(style.width / 2.0, style.height / 2.0);
        let Some((min, max)) = layout.bounds() else {
            return Self {
                mid: Position::default(),
                factor: 0.0,
                center,
            };
        };

        let span_x = max.x - min.x;
        let span_y = max.y - min.y;
        let avail_x = (style.width - 2.0 * style.margin).max(0.0);
        let avail_y = (style.height - 2.0 * style.margin).max(0.0);

        let fit_x = (span_x > 0.0).then(|| avail_x / span_x);
        let fit_y = (span_y > 0.0).then(|| avail_y / span_y);
        let factor = match (fit_x, fit_y) {
            (Some(x), Some(y)) => x.min(y),
            (Some(f), None) | (None, Some(f)) => f,
            (None, None) => 0.0,
        };

        Self {
            mid: Position::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0),
            factor,
            center,
        }
    }

    fn map(&self, p: Position) -> Position {
        Position::new(
            self.center.x + (p.x - self.mid.x) * self.factor,
            self.center.y - (p.y - self.mid.y) * self.factor,
        )
    }
}
