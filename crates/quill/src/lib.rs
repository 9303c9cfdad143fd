//! Quill - composable vector shapes rendered to SVG or text.
//!
//! Scenes are described in JSON, turned into a [`Diagram`](diagram::Diagram)
//! of shapes and nested diagrams, and drawn through one of the export
//! backends.

pub mod config;
pub mod export;
pub mod scene;

mod error;

pub use quill_core::{color, diagram, draw, geometry};

pub use error::QuillError;

use log::{debug, info, trace};

use config::{AppConfig, OutputFormat};
use diagram::Diagram;
use draw::Drawable;
use export::Exporter;
use scene::Scene;

/// Builder for loading and rendering Quill scenes.
///
/// # Examples
///
/// ```rust
/// use quill::{SceneBuilder, config::AppConfig};
///
/// let source = r#"{ "elements": [
///     { "type": "circle", "center": [20, 20], "radius": 10 }
/// ] }"#;
///
/// let builder = SceneBuilder::new(AppConfig::default());
/// let diagram = builder.parse(source).expect("Failed to parse");
///
/// let svg = builder.render_svg(&diagram).expect("Failed to render");
/// assert!(svg.contains("<circle"));
///
/// let text = builder.render_text(&diagram).expect("Failed to render");
/// assert_eq!(text, "circle_at (20.0, 20.0) radius 10.0\n");
/// ```
#[derive(Debug, Default)]
pub struct SceneBuilder {
    config: AppConfig,
}

impl SceneBuilder {
    /// Create a new scene builder with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Parse a JSON scene description into a diagram.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Scene`] for malformed JSON or unknown element
    /// types, and [`QuillError::Shape`] for elements that fail validation.
    pub fn parse(&self, source: &str) -> Result<Diagram, QuillError> {
        info!("Parsing scene");

        let diagram = Scene::from_json(source)?.to_diagram()?;

        debug!(elements = diagram.len(); "Scene parsed successfully");
        trace!(diagram:?; "Parsed diagram");

        Ok(diagram)
    }

    /// Render a drawable to an SVG document string using the configured
    /// style and padding.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Export`] if the style configuration is invalid
    /// or the document cannot be written.
    pub fn render_svg(&self, drawable: &dyn Drawable) -> Result<String, QuillError> {
        info!(kind = drawable.kind(); "Rendering SVG");
        let exporter = export::svg::SvgBuilder::new()
            .with_style(self.config.style())
            .with_padding(self.config.render().padding())
            .build()?;
        let svg = exporter.export(drawable)?;
        debug!(bytes = svg.len(); "SVG rendered");
        Ok(svg)
    }

    /// Render a drawable to the line-per-command text dump.
    pub fn render_text(&self, drawable: &dyn Drawable) -> Result<String, QuillError> {
        info!(kind = drawable.kind(); "Rendering text");
        Ok(export::text::Text.export(drawable)?)
    }

    /// Render a drawable in the given format.
    pub fn render(&self, drawable: &dyn Drawable, format: OutputFormat) -> Result<String, QuillError> {
        match format {
            OutputFormat::Svg => self.render_svg(drawable),
            OutputFormat::Text => self.render_text(drawable),
        }
    }
}
