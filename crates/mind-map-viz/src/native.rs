//! Native window backend (eframe/egui).

use std::ffi::OsString;

#[cfg(feature = "native")]
use tracing::{debug, info};

use crate::backend::DisplayBackend;
use crate::error::{RenderError, RenderResult};
use crate::scene::Scene;

const BACKEND: &str = "native window";
const HEADLESS_HINT: &str =
    "no display server found (DISPLAY and WAYLAND_DISPLAY are unset); \
     write an image instead with `--output mindmap.svg`";

/// Opens a window showing the scene and blocks until it is closed.
#[derive(Debug, Clone, Default)]
pub struct NativeWindow {
    _private: (),
}

impl NativeWindow {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplayBackend for NativeWindow {
    fn name(&self) -> &'static str {
        BACKEND
    }

    fn present(&mut self, scene: &Scene) -> RenderResult<()> {
        if missing_display(|key| std::env::var_os(key)) {
            return Err(RenderError::backend_unavailable(BACKEND, HEADLESS_HINT));
        }
        open_window(scene)
    }
}

/// Whether this platform needs a display server that is not configured.
fn missing_display(var: impl Fn(&str) -> Option<OsString>) -> bool {
    let needs_server = cfg!(any(
        target_os = "linux",
        target_os = "freebsd",
        target_os = "dragonfly",
        target_os = "openbsd",
        target_os = "netbsd"
    ));
    let set = |key: &str| var(key).is_some_and(|v| !v.is_empty());
    needs_server && !set("DISPLAY") && !set("WAYLAND_DISPLAY")
}

#[cfg(not(feature = "native"))]
fn open_window(_scene: &Scene) -> RenderResult<()> {
    Err(RenderError::backend_unavailable(
        BACKEND,
        "built without the `native` feature; write an image with `--output mindmap.svg`",
    ))
}

#[cfg(feature = "native")]
fn open_window(scene: &Scene) -> RenderResult<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([scene.style.width, scene.style.height])
            .with_title(scene.title.clone()),
        ..Default::default()
    };

    info!(title = %scene.title, nodes = scene.nodes.len(), "Opening window");
    let app = MindMapApp {
        scene: scene.clone(),
    };
    eframe::run_native(
        "mindmap",
        options,
        Box::new(move |_cc| Ok(Box::new(app))),
    )
    .map_err(|e| RenderError::backend_unavailable(BACKEND, e.to_string()))?;

    debug!("Window closed");
    Ok(())
}

/// Horizontal offsets at which a label is painted.
///
/// egui ships no bold face, so bold labels are painted twice, half a
/// canvas pixel apart.
#[cfg(any(feature = "native", test))]
fn label_offsets(bold: bool, zoom: f32) -> Vec<f32> {
    if bold {
        let half = 0.25 * zoom;
        vec![-half, half]
    } else {
        vec![0.0]
    }
}

#[cfg(feature = "native")]
struct MindMapApp {
    scene: Scene,
}

#[cfg(feature = "native")]
fn color(rgb: crate::style::Rgb) -> egui::Color32 {
    egui::Color32::from_rgb(rgb.0, rgb.1, rgb.2)
}

#[cfg(feature = "native")]
impl eframe::App for MindMapApp {
    fn update(&mut self, ctx: &egui::Context, _: &mut eframe::Frame) {
        use egui::{Align2, FontId, Pos2, Sense, Stroke};

        let style = &self.scene.style;
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(color(style.background)))
            .show(ctx, |ui| {
                let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::hover());
                let rect = response.rect;

                // Scene coordinates are canvas pixels; fit the canvas to the window.
                let zoom = (rect.width() / style.width).min(rect.height() / style.height);
                let origin = rect.center() - egui::vec2(style.width, style.height) * zoom / 2.0;
                let to_screen =
                    |p: mind_map_layout::Position| -> Pos2 { origin + egui::vec2(p.x, p.y) * zoom };

                let edge_stroke = Stroke::new(style.edge_width, color(style.edge_color));
                for edge in &self.scene.edges {
                    painter.line_segment([to_screen(edge.from), to_screen(edge.to)], edge_stroke);
                }

                let outline = Stroke::new(style.node_outline_width, color(style.node_outline));
                for node in &self.scene.nodes {
                    painter.circle(
                        to_screen(node.center),
                        node.radius * zoom,
                        color(style.node_fill),
                        outline,
                    );
                }
                let font = FontId::proportional(style.label_size * zoom);
                for node in &self.scene.nodes {
                    for dx in label_offsets(style.label_bold, zoom) {
                        painter.text(
                            to_screen(node.center) + egui::vec2(dx, 0.0),
                            Align2::CENTER_CENTER,
                            &node.label,
                            font.clone(),
                            color(style.label_color),
                        );
                    }
                }

                painter.text(
                    Pos2::new(rect.center().x, rect.top() + style.margin * zoom / 2.0),
                    Align2::CENTER_CENTER,
                    &self.scene.title,
                    FontId::proportional(style.title_size * zoom),
                    color(style.label_color),
                );
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<OsString> + 'a {
        move |key: &str| {
            pairs
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| OsString::from(*v))
        }
    }

    #[test]
    #[cfg(target_os = "linux")]
    fn test_headless_linux_has_no_display() {
        assert!(missing_display(env(&[])));
        assert!(missing_display(env(&[("DISPLAY", "")])));
        assert!(!missing_display(env(&[("DISPLAY", ":0")])));
        assert!(!missing_display(env(&[("WAYLAND_DISPLAY", "wayland-0")])));
    }

    #[test]
    #[cfg(any(target_os = "macos", target_os = "windows"))]
    fn test_desktop_platforms_never_headless() {
        assert!(!missing_display(env(&[])));
    }

    #[test]
    fn test_bold_labels_are_painted_twice() {
        assert_eq!(label_offsets(false, 2.0), vec![0.0]);

        let bold = label_offsets(true, 2.0);
        assert_eq!(bold.len(), 2);
        assert_eq!(bold[1] - bold[0], 1.0);
    }

    #[test]
    fn test_headless_hint_suggests_svg() {
        let err = RenderError::backend_unavailable(BACKEND, HEADLESS_HINT);
        assert!(err.to_string().contains("--output"));
    }
}
