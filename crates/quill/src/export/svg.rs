//! SVG export backend.
//!
//! [`SvgBuilder`] turns a [`StyleConfig`] into an [`Svg`] exporter; the
//! exporter draws a [`Drawable`] through a fresh [`SvgRenderer`] and
//! serializes the resulting document.

mod renderer;

pub use renderer::{SvgNode, SvgRenderer};

use log::{debug, info};

use quill_core::{
    color::Color,
    draw::{Drawable, StrokeDefinition},
};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
};

/// Builder for [`Svg`] exporters.
#[derive(Debug, Default)]
pub struct SvgBuilder<'a> {
    style: Option<&'a StyleConfig>,
    padding: f32,
}

impl<'a> SvgBuilder<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_style(mut self, style: &'a StyleConfig) -> Self {
        self.style = Some(style);
        self
    }

    /// Space added around the drawing on every side of the viewport.
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    /// Resolves the style and returns the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Style`] if a configured color or stroke value
    /// cannot be parsed, or if the padding is negative.
    pub fn build(self) -> Result<Svg, export::Error> {
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(export::Error::Style(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }

        let (stroke, fill, background) = match self.style {
            Some(style) => (
                style.stroke().map_err(export::Error::Style)?,
                style.fill_color().map_err(export::Error::Style)?,
                style.background_color().map_err(export::Error::Style)?,
            ),
            None => (StrokeDefinition::default(), None, None),
        };

        Ok(Svg {
            stroke,
            fill,
            background,
            padding: self.padding,
        })
    }
}

/// SVG exporter with a resolved style.
#[derive(Debug, Clone)]
pub struct Svg {
    stroke: StrokeDefinition,
    fill: Option<Color>,
    background: Option<Color>,
    padding: f32,
}

impl Svg {
    /// Draws `drawable` and returns the document without serializing it.
    pub fn render(&self, drawable: &dyn Drawable) -> svg::Document {
        let mut renderer = SvgRenderer::new(self.stroke.clone(), self.fill);
        drawable.draw(&mut renderer);
        debug!(extent:? = renderer.extent(); "Drawing complete");
        renderer.into_document(self.padding, self.background)
    }
}

impl Exporter for Svg {
    fn export(&self, drawable: &dyn Drawable) -> Result<String, export::Error> {
        info!(kind = drawable.kind(); "Exporting SVG");
        let document = self.render(drawable);
        let mut output = Vec::new();
        svg::write(&mut output, &document)
            .map_err(|err| export::Error::Render(format!("failed to write SVG: {err}")))?;
        String::from_utf8(output)
            .map_err(|err| export::Error::Render(format!("SVG output is not UTF-8: {err}")))
    }
}

#[cfg(test)]
mod tests {
    use quill_core::{
        diagram::Diagram,
        draw::{Circle, Polygon},
        geometry::Point,
    };

    use super::*;

    fn style(json: &str) -> StyleConfig {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_export_empty_diagram() {
        let svg = SvgBuilder::new().build().unwrap();
        let output = svg.export(&Diagram::new()).unwrap();
        assert!(output.contains("<svg"));
        assert!(output.contains("viewBox=\"0 0 0 0\""));
    }

    #[test]
    fn test_export_uses_style() {
        let style = style(r#"{"background_color": "white", "stroke_color": "blue", "fill_color": "pink"}"#);
        let svg = SvgBuilder::new()
            .with_style(&style)
            .with_padding(2.0)
            .build()
            .unwrap();

        let diagram = Diagram::new()
            .with(Circle::new(Point::new(10.0, 10.0), 5.0))
            .with(Polygon::regular(Point::new(30.0, 10.0), 5.0, 3).unwrap());
        let output = svg.export(&diagram).unwrap();

        assert!(output.contains("<rect"));
        assert!(output.contains("<circle"));
        assert!(output.contains("<path"));
        assert!(!output.contains("fill=\"none\""));
    }

    #[test]
    fn test_build_rejects_bad_style() {
        let style = style(r#"{"stroke_color": "not-a-color"}"#);
        let err = SvgBuilder::new().with_style(&style).build().unwrap_err();
        assert!(matches!(err, export::Error::Style(msg) if msg.contains("stroke_color")));
    }

    #[test]
    fn test_build_rejects_negative_padding() {
        let err = SvgBuilder::new().with_padding(-1.0).build().unwrap_err();
        assert!(matches!(err, export::Error::Style(_)));
    }
}
