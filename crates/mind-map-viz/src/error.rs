//! Error types for rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;

/// Errors that can occur while presenting a scene.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The display backend cannot run in this environment.
    #[error("{backend} backend unavailable: {reason}")]
    BackendUnavailable {
        backend: &'static str,
        reason: String,
    },

    /// Writing an export failed.
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The SVG template failed to render.
    #[error("failed to render template: {0}")]
    Template(#[from] askama::Error),
}

impl RenderError {
    pub fn backend_unavailable(backend: &'static str, reason: impl Into<String>) -> Self {
        Self::BackendUnavailable {
            backend,
            reason: reason.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
