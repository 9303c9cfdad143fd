//! Plain-text export backend.
//!
//! Writes one line per drawing command with coordinates rounded to one
//! decimal place and arc angles in degrees:
//!
//! ```text
//! move_to (0.0, 0.0)
//! line_to (10.0, 0.0)
//! arc_at (5.0, 5.0) radius 2.0 start 0.0 end 90.0
//! circle_at (5.0, 5.0) radius 2.0
//! ```

use std::fmt::Write as _;

use log::{info, trace};

use quill_core::{
    draw::{Drawable, Renderer},
    geometry::{Angle, Point},
};

use crate::export::{self, Exporter};

/// Renderer that records each command as a line of text.
#[derive(Debug, Default)]
pub struct TextRenderer {
    output: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns everything written so far.
    pub fn finish(self) -> String {
        self.output
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // Writing into a String cannot fail.
        let _ = self.output.write_fmt(args);
        self.output.push('\n');
    }
}

impl Renderer for TextRenderer {
    fn move_to(&mut self, point: Point) {
        trace!(x = point.x(), y = point.y(); "text move_to");
        self.line(format_args!("move_to ({:.1}, {:.1})", point.x(), point.y()));
    }

    fn line_to(&mut self, point: Point) {
        trace!(x = point.x(), y = point.y(); "text line_to");
        self.line(format_args!("line_to ({:.1}, {:.1})", point.x(), point.y()));
    }

    fn arc_at(&mut self, center: Point, radius: f32, start: Angle, end: Angle) {
        trace!(x = center.x(), y = center.y(), radius; "text arc_at");
        self.line(format_args!(
            "arc_at ({:.1}, {:.1}) radius {:.1} start {:.1} end {:.1}",
            center.x(),
            center.y(),
            radius,
            start.to_degrees(),
            end.to_degrees()
        ));
    }

    fn circle_at(&mut self, center: Point, radius: f32) {
        trace!(x = center.x(), y = center.y(), radius; "text circle_at");
        self.line(format_args!(
            "circle_at ({:.1}, {:.1}) radius {:.1}",
            center.x(),
            center.y(),
            radius
        ));
    }
}

/// Exporter producing the text dump.
#[derive(Debug, Default, Clone, Copy)]
pub struct Text;

impl Exporter for Text {
    fn export(&self, drawable: &dyn Drawable) -> Result<String, export::Error> {
        info!(kind = drawable.kind(); "Exporting text");
        let mut renderer = TextRenderer::new();
        drawable.draw(&mut renderer);
        Ok(renderer.finish())
    }
}
