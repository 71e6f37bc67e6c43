//! Rendering for mind maps.
//!
//! Drawing is split in two. [`Scene::compose`] is pure: it maps a
//! [`Layout`](mind_map_layout::Layout) onto canvas pixels using a
//! [`RenderStyle`]. A [`DisplayBackend`] then presents the scene:
//!
//! - [`SvgExporter`] writes a standalone SVG file.
//! - [`NativeWindow`] opens an egui window (feature `native`, on by default)
//!   and blocks until it is closed.

mod backend;
mod error;
mod native;
mod scene;
mod style;
mod svg;

pub use backend::DisplayBackend;
pub use error::{RenderError, RenderResult};
pub use native::NativeWindow;
pub use scene::{Scene, SceneEdge, SceneNode, DEFAULT_TITLE};
pub use style::{RenderStyle, Rgb};
pub use svg::{render_svg, SvgExporter};
