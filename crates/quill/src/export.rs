//! Output backends.
//!
//! Each backend pairs a [`Renderer`](quill_core::draw::Renderer) that
//! consumes drawing commands with an [`Exporter`] that runs a drawable
//! through a fresh renderer and returns the finished document.
//!
//! # Available Backends
//!
//! - [`svg`]: SVG documents via [`svg::SvgBuilder`] and [`svg::SvgRenderer`]
//! - [`text`]: a line-per-command dump via [`text::TextRenderer`]

pub mod svg;
pub mod text;

use thiserror::Error;

use quill_core::draw::Drawable;

/// Abstraction for export backends.
pub trait Exporter {
    /// Draws `drawable` and returns the backend's output document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the output cannot be produced.
    fn export(&self, drawable: &dyn Drawable) -> Result<String, Error>;
}

/// Errors that can occur during export.
///
/// Converted into [`QuillError::Export`](crate::QuillError::Export) at the
/// crate boundary.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Render error: {0}")]
    Render(String),

    #[error("Style error: {0}")]
    Style(String),
}
