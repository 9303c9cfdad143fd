//! Error types for Quill operations.
//!
//! This module provides the main error type [`QuillError`] which wraps the
//! error conditions that can occur while loading and rendering a scene.

use std::io;

use thiserror::Error;

use quill_core::draw::ShapeError;

/// The main error type for Quill operations.
///
/// The `Scene` variant keeps the scene source so that callers can point at
/// the offending line and column of a malformed document.
#[derive(Debug, Error)]
pub enum QuillError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Invalid scene: {err}")]
    Scene {
        err: serde_json::Error,
        src: String,
    },

    #[error("Invalid shape at {path}: {err}")]
    Shape { path: String, err: ShapeError },

    #[error("Export error: {0}")]
    Export(#[from] crate::export::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuillError {
    /// Create a new `Scene` error with the associated source text.
    pub fn new_scene_error(err: serde_json::Error, src: impl Into<String>) -> Self {
        Self::Scene {
            err,
            src: src.into(),
        }
    }
}
