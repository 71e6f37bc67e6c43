//! Fixed visual parameters for rendered mind maps.

use serde::{Deserialize, Serialize};

/// An opaque RGB colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const WHITE: Rgb = Rgb(0xff, 0xff, 0xff);
    pub const BLACK: Rgb = Rgb(0x00, 0x00, 0x00);
    pub const GRAY: Rgb = Rgb(0x80, 0x80, 0x80);
    pub const LIGHT_BLUE: Rgb = Rgb(0xad, 0xd8, 0xe6);

    /// `#rrggbb` form, as used in SVG attributes.
    pub fn hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

/// Canvas, node, edge and text styling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderStyle {
    pub width: f32,
    pub height: f32,
    /// Space kept free around the drawing, in pixels.
    pub margin: f32,
    pub background: Rgb,
    pub node_fill: Rgb,
    pub node_radius: f32,
    /// Circle border; the same colour as the fill by default.
    pub node_outline: Rgb,
    pub node_outline_width: f32,
    pub edge_color: Rgb,
    pub edge_width: f32,
    pub label_color: Rgb,
    pub label_size: f32,
    pub label_bold: bool,
    pub title_size: f32,
}

impl Default for RenderStyle {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 600.0,
            margin: 60.0,
            background: Rgb::WHITE,
            node_fill: Rgb::LIGHT_BLUE,
            node_radius: 25.0,
            node_outline: Rgb::LIGHT_BLUE,
            node_outline_width: 1.0,
            edge_color: Rgb::GRAY,
            edge_width: 1.0,
            label_color: Rgb::BLACK,
            label_size: 10.0,
            label_bold: true,
            title_size: 16.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_formatting() {
        assert_eq!(Rgb::LIGHT_BLUE.hex(), "#add8e6");
        assert_eq!(Rgb::GRAY.hex(), "#808080");
    }

    #[test]
    fn test_default_canvas() {
        let style = RenderStyle::default();
        assert_eq!((style.width, style.height), (1000.0, 600.0));
        assert_eq!(style.node_fill, Rgb::LIGHT_BLUE);
    }

    #[test]
    fn test_outline_matches_fill() {
        let style = RenderStyle::default();
        assert_eq!(style.node_outline, style.node_fill);
        assert!(style.label_bold);
    }
}
