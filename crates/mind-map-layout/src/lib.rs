//! Deterministic force-directed layout for concept graphs.
//!
//! Nodes start at seeded pseudo-random positions in the unit square and are
//! moved by a Fruchterman-Reingold simulation: every pair repels with
//! `k²/d`, every edge attracts with `d²/k`, and each move is capped by a
//! temperature that cools linearly to zero. The result is re-centred on the
//! origin and scaled into `[-scale, scale]`.
//!
//! ```text
//!   seed ──▶ initial positions ──▶ step × iterations ──▶ rescale ──▶ Layout
//!                                   (stop early once the
//!                                    mean move < threshold)
//! ```
//!
//! The same graph and the same [`LayoutConfig`] always give bit-identical
//! coordinates.

mod error;
mod spring;

pub use error::LayoutError;
pub use spring::{spring_layout, Layout, LayoutConfig, LayoutState, PlacedNode, SpringLayout};

use serde::{Deserialize, Serialize};

/// Result type for layout operations.
pub type LayoutResult<T> = std::result::Result<T, LayoutError>;

/// Seed used when none is configured.
pub const DEFAULT_SEED: u64 = 42;

/// A 2D position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(&self, other: &Position) -> f32 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}
