use super::{ShapeError, validate_radius};
use crate::{
    draw::{Drawable, Renderer},
    geometry::{Bounds, Point, Size},
};

/// Highlight radius as a fraction of the bubble radius.
const HIGHLIGHT_RATIO: f32 = 0.1;

/// Highlight offset from the center, as a fraction of the bubble radius.
const HIGHLIGHT_OFFSET: f32 = 0.33;

/// A circle with a small highlight circle up and to the right of its center.
///
/// Draws the outer circle first, then the highlight.
#[derive(Debug, Clone, PartialEq)]
pub struct Bubble {
    center: Point,
    radius: f32,
}

impl Bubble {
    pub fn new(center: Point, radius: f32) -> Self {
        Self { center, radius }
    }

    pub fn try_new(center: Point, radius: f32) -> Result<Self, ShapeError> {
        Ok(Self::new(center, validate_radius(radius)?))
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Center of the highlight circle. Y grows downward, so "up" is negative.
    pub fn highlight_center(&self) -> Point {
        let offset = self.radius * HIGHLIGHT_OFFSET;
        self.center.add_point(Point::new(offset, -offset))
    }

    pub fn highlight_radius(&self) -> f32 {
        self.radius * HIGHLIGHT_RATIO
    }
}

impl Drawable for Bubble {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.circle_at(self.center, self.radius);
        renderer.circle_at(self.highlight_center(), self.highlight_radius());
    }

    // The highlight always sits inside the outer circle.
    fn bounds(&self) -> Bounds {
        let diameter = self.radius * 2.0;
        self.center.to_bounds(Size::new(diameter, diameter))
    }

    fn kind(&self) -> &'static str {
        "bubble"
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{CommandList, DrawCommand};

    #[test]
    fn test_bubble_draws_outer_then_highlight() {
        let bubble = Bubble::new(Point::new(100.0, 100.0), 10.0);
        let mut list = CommandList::new();
        bubble.draw(&mut list);

        assert_eq!(list.len(), 2);
        let DrawCommand::Circle { center, radius } = list.commands()[1] else {
            panic!("expected a circle, got {:?}", list.commands()[1]);
        };
        assert_eq!(
            list.commands()[0],
            DrawCommand::Circle {
                center: Point::new(100.0, 100.0),
                radius: 10.0
            }
        );
        assert_approx_eq!(f32, center.x(), 103.3, epsilon = 1e-4);
        assert_approx_eq!(f32, center.y(), 96.7, epsilon = 1e-4);
        assert_approx_eq!(f32, radius, 1.0);
    }

    #[test]
    fn test_highlight_inside_outer_circle() {
        let bubble = Bubble::new(Point::new(0.0, 0.0), 50.0);
        let distance = bubble.highlight_center().hypot() + bubble.highlight_radius();
        assert!(distance < bubble.radius());
    }

    #[test]
    fn test_bubble_try_new_validates() {
        assert!(Bubble::try_new(Point::default(), f32::NAN).is_err());
    }
}
