use std::f32::consts::TAU;

use super::{MAX_SIDES, ShapeError, validate_radius};
use crate::{
    draw::{Drawable, Renderer},
    geometry::{Angle, Bounds, Point},
};

/// A closed polygon through `corners`.
///
/// Drawing moves to the last corner and then draws a line to every corner in
/// order, so the outline always closes. A polygon without corners draws
/// nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    corners: Vec<Point>,
}

impl Polygon {
    pub fn new(corners: Vec<Point>) -> Self {
        Self { corners }
    }

    /// Builds a regular polygon inscribed in the circle of `radius` around
    /// `center`, with its first corner at angle zero.
    ///
    /// ```
    /// use quill_core::draw::Polygon;
    /// use quill_core::geometry::Point;
    ///
    /// let hexagon = Polygon::regular(Point::new(0.0, 0.0), 10.0, 6).unwrap();
    /// assert_eq!(hexagon.corners().len(), 6);
    /// assert!(Polygon::regular(Point::new(0.0, 0.0), 10.0, 2).is_err());
    /// ```
    pub fn regular(center: Point, radius: f32, sides: usize) -> Result<Self, ShapeError> {
        if sides < 3 {
            return Err(ShapeError::TooFewSides(sides));
        }
        if sides > MAX_SIDES {
            return Err(ShapeError::TooManySides(sides));
        }
        let radius = validate_radius(radius)?;
        let step = TAU / sides as f32;
        let corners = (0..sides)
            .map(|i| Point::on_circle(center, radius, Angle::from_radians(step * i as f32)))
            .collect();
        Ok(Self { corners })
    }

    pub fn corners(&self) -> &[Point] {
        &self.corners
    }

    pub fn push(&mut self, corner: Point) {
        self.corners.push(corner);
    }
}

impl Drawable for Polygon {
    fn draw(&self, renderer: &mut dyn Renderer) {
        let Some(&last) = self.corners.last() else {
            return;
        };
        renderer.move_to(last);
        for &corner in &self.corners {
            renderer.line_to(corner);
        }
    }

    fn bounds(&self) -> Bounds {
        Bounds::from_points(self.corners.iter().copied()).unwrap_or_default()
    }

    fn kind(&self) -> &'static str {
        "polygon"
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;
    use crate::draw::{CommandList, DrawCommand};

    #[test]
    fn test_polygon_closes_outline() {
        let triangle = Polygon::new(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(5.0, 8.0),
        ]);
        let mut list = CommandList::new();
        triangle.draw(&mut list);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::MoveTo(Point::new(5.0, 8.0)),
                DrawCommand::LineTo(Point::new(0.0, 0.0)),
                DrawCommand::LineTo(Point::new(10.0, 0.0)),
                DrawCommand::LineTo(Point::new(5.0, 8.0)),
            ]
        );
    }

    #[test]
    fn test_empty_polygon_draws_nothing() {
        let mut list = CommandList::new();
        Polygon::default().draw(&mut list);
        assert!(list.is_empty());
        assert_eq!(Polygon::default().bounds(), Bounds::default());
    }

    #[test]
    fn test_regular_polygon_corners_on_circle() {
        let center = Point::new(5.0, 5.0);
        let square = Polygon::regular(center, 2.0, 4).unwrap();

        for corner in square.corners() {
            assert_approx_eq!(f32, corner.sub_point(center).hypot(), 2.0, epsilon = 1e-5);
        }
        assert_approx_eq!(f32, square.corners()[0].x(), 7.0);
        assert_approx_eq!(f32, square.corners()[0].y(), 5.0);
    }

    #[test]
    fn test_regular_polygon_rejects_bad_input() {
        assert_eq!(
            Polygon::regular(Point::default(), 1.0, 2),
            Err(ShapeError::TooFewSides(2))
        );
        assert_eq!(
            Polygon::regular(Point::default(), -1.0, 5),
            Err(ShapeError::InvalidRadius(-1.0))
        );
    }

    #[test]
    fn test_regular_polygon_side_limit() {
        let at_limit = Polygon::regular(Point::default(), 1.0, MAX_SIDES).unwrap();
        assert_eq!(at_limit.corners().len(), MAX_SIDES);

        assert_eq!(
            Polygon::regular(Point::default(), 1.0, MAX_SIDES + 1),
            Err(ShapeError::TooManySides(MAX_SIDES + 1))
        );
        assert_eq!(
            Polygon::regular(Point::default(), 1.0, usize::MAX),
            Err(ShapeError::TooManySides(usize::MAX))
        );
    }

    #[test]
    fn test_polygon_bounds() {
        let mut polygon = Polygon::new(vec![Point::new(-1.0, 2.0)]);
        polygon.push(Point::new(3.0, -4.0));
        let bounds = polygon.bounds();
        assert_eq!(bounds.min_point(), Point::new(-1.0, -4.0));
        assert_eq!(bounds.max_x(), 3.0);
        assert_eq!(bounds.max_y(), 2.0);
    }
}
