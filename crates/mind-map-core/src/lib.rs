//! Core domain types shared across the mind-map workspace.
//!
//! A run moves through three owned values:
//!
//! ```text
//! text ──▶ Vec<Phrase> ──▶ ConceptGraph ──▶ (layout, rendering)
//! ```
//!
//! This crate owns the middle of that pipeline: the [`Phrase`] produced by the
//! extractor, the [`ConceptGraph`] that links adjacent words, and the
//! [`GraphBuilder`] that turns one into the other.

mod builder;
mod graph;
mod phrase;

pub use builder::{build_graph, GraphBuilder};
pub use graph::{ConceptGraph, GraphSnapshot, WordEdge};
pub use phrase::Phrase;

/// Identifier for nodes within the `ConceptGraph`.
pub type NodeIndex = petgraph::stable_graph::NodeIndex;
