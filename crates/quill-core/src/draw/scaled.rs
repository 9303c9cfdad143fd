//! Uniform scaling as a renderer adapter.

use crate::{
    draw::{Drawable, Renderer, ShapeError},
    geometry::{Angle, Bounds, Point},
};

/// Forwards every command to an inner renderer with coordinates and radii
/// multiplied by `scale`. Angles pass through unchanged.
pub struct ScaledRenderer<'a> {
    base: &'a mut dyn Renderer,
    scale: f32,
}

impl<'a> ScaledRenderer<'a> {
    pub fn new(base: &'a mut dyn Renderer, scale: f32) -> Self {
        Self { base, scale }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl Renderer for ScaledRenderer<'_> {
    fn move_to(&mut self, point: Point) {
        self.base.move_to(point.scale(self.scale));
    }

    fn line_to(&mut self, point: Point) {
        self.base.line_to(point.scale(self.scale));
    }

    fn arc_at(&mut self, center: Point, radius: f32, start: Angle, end: Angle) {
        self.base
            .arc_at(center.scale(self.scale), radius * self.scale, start, end);
    }

    fn circle_at(&mut self, center: Point, radius: f32) {
        self.base
            .circle_at(center.scale(self.scale), radius * self.scale);
    }

    fn rectangle_at(&mut self, bounds: Bounds) {
        self.base.rectangle_at(bounds.scale(self.scale));
    }
}

/// A drawable drawn at a uniform scale about the origin.
///
/// ```
/// use quill_core::draw::{Circle, CommandList, Drawable, DrawCommand, Scaled};
/// use quill_core::geometry::Point;
///
/// let small = Scaled::new(Circle::new(Point::new(10.0, 0.0), 4.0), 0.5).unwrap();
/// let mut commands = CommandList::new();
/// small.draw(&mut commands);
///
/// assert_eq!(
///     commands.commands(),
///     &[DrawCommand::Circle { center: Point::new(5.0, 0.0), radius: 2.0 }]
/// );
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Scaled<D> {
    inner: D,
    scale: f32,
}

impl<D: Drawable> Scaled<D> {
    /// Wraps `inner`; `scale` must be finite and positive.
    pub fn new(inner: D, scale: f32) -> Result<Self, ShapeError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(ShapeError::InvalidScale(scale));
        }
        Ok(Self { inner, scale })
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }
}

impl<D> Drawable for Scaled<D>
where
    D: Drawable + Clone + PartialEq + 'static,
{
    fn draw(&self, renderer: &mut dyn Renderer) {
        let mut scaled = ScaledRenderer::new(renderer, self.scale);
        self.inner.draw(&mut scaled);
    }

    fn bounds(&self) -> Bounds {
        self.inner.bounds().scale(self.scale)
    }

    fn kind(&self) -> &'static str {
        "scaled"
    }
}
