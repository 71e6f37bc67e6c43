//! Error types for layout operations.

use thiserror::Error;

/// Errors that can occur during layout operations.
#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    /// A configuration value is out of range.
    #[error("Invalid layout config: {0}")]
    InvalidConfig(String),

    /// Layout stepped before being initialized with a graph.
    #[error("Layout not initialized")]
    NotInitialized,
}
