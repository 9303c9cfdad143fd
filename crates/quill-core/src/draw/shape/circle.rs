use super::{ShapeError, validate_radius};
use crate::{
    draw::{Drawable, Renderer},
    geometry::{Bounds, Point, Size},
};

/// A circle, drawn with a single `circle_at` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point,
    radius: f32,
}

impl Circle {
    /// Creates a circle without validating the radius.
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Creates a circle, rejecting negative or non-finite radii.
    pub fn try_new(center: Point, radius: f32) -> Result<Self, ShapeError> {
        Ok(Self::new(center, validate_radius(radius)?))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn diameter(&self) -> f32 {
        self.radius * 2.0
    }
}

impl Drawable for Circle {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.circle_at(self.center, self.radius);
    }

    fn bounds(&self) -> Bounds {
        self.center
            .to_bounds(Size::new(self.diameter(), self.diameter()))
    }

    fn kind(&self) -> &'static str {
        "circle"
    }
}
