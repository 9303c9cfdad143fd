//! Geometric primitives for drawing.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in drawing space
//! - [`Size`] - Width and height dimensions
//! - [`Bounds`] - A rectangular bounding box defined by minimum and maximum coordinates
//! - [`Insets`] - Padding values for four sides
//! - [`Angle`] - An angle in radians, used by arcs
//!
//! # Coordinate System
//!
//! Quill uses a coordinate system consistent with SVG:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Angles are measured from the positive X axis towards the positive Y axis,
//! so with Y pointing down a positive angle turns clockwise on screen.

use std::f32::consts::TAU;

use serde::Deserialize;

/// A 2D point representing a position in drawing coordinate space.
///
/// # Examples
///
/// ```
/// # use quill_core::geometry::Point;
/// let p1 = Point::new(10.0, 20.0);
/// let p2 = Point::new(5.0, 5.0);
///
/// let sum = p1.add_point(p2);
/// assert_eq!(sum.x(), 15.0);
/// assert_eq!(sum.y(), 25.0);
///
/// let mid = p1.midpoint(p2);
/// assert_eq!(mid.x(), 7.5);
/// assert_eq!(mid.y(), 12.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Adds another point to this point, returning a new point.
    pub fn add_point(self, other: Point) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    /// Subtracts another point from this point, returning a new point
    pub fn sub_point(self, other: Point) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    /// Calculates the midpoint between this point and another point
    pub fn midpoint(self, other: Point) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
        }
    }

    /// Calculates the Euclidean distance from the origin
    pub fn hypot(self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Multiplies both coordinates by the given factor.
    ///
    /// ```
    /// # use quill_core::geometry::Point;
    /// let doubled = Point::new(10.0, 20.0).scale(2.0);
    /// assert_eq!(doubled.x(), 20.0);
    /// assert_eq!(doubled.y(), 40.0);
    /// ```
    pub fn scale(self, factor: f32) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Returns the point at `angle` on the circle of `radius` around `center`.
    pub fn on_circle(center: Point, radius: f32, angle: Angle) -> Self {
        let (sin, cos) = angle.radians().sin_cos();
        Self {
            x: cos.mul_add(radius, center.x), // center.x + cos * radius
            y: sin.mul_add(radius, center.y), // center.y + sin * radius
        }
    }

    /// Treats the point as a center and builds bounds of the given size around it.
    pub fn to_bounds(self, size: Size) -> Bounds {
        Bounds::new_from_center(self, size)
    }
}

impl From<[f32; 2]> for Point {
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

/// Represents the dimensions of an element with width and height
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "[f32; 2]")]
pub struct Size {
    width: f32,
    height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> f32 {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> f32 {
        self.height
    }

    /// Returns a new Size with the maximum width and height between this size and another
    pub fn max(self, other: Size) -> Self {
        Self {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }

    /// Returns a new Size grown by the given insets
    pub fn add_padding(self, insets: Insets) -> Self {
        Self {
            width: self.width + insets.horizontal_sum(),
            height: self.height + insets.vertical_sum(),
        }
    }

    /// Multiplies both dimensions by the given factor
    pub fn scale(self, factor: f32) -> Self {
        Self {
            width: self.width * factor,
            height: self.height * factor,
        }
    }

    /// Returns true if both width and height are zero
    pub fn is_zero(self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

impl From<[f32; 2]> for Size {
    fn from([width, height]: [f32; 2]) -> Self {
        Self::new(width, height)
    }
}

/// Represents a rectangular bounding box with minimum and maximum coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Bounds {
    min_x: f32,
    min_y: f32,
    max_x: f32,
    max_y: f32,
}

impl Bounds {
    /// Creates a new bounds from a center point and a size
    pub fn new_from_center(center: Point, size: Size) -> Self {
        let half_width = size.width / 2.0;
        let half_height = size.height / 2.0;
        Self {
            min_x: center.x - half_width,
            min_y: center.y - half_height,
            max_x: center.x + half_width,
            max_y: center.y + half_height,
        }
    }

    /// Creates a new bounds from a top-left point and a size
    pub fn new_from_top_left(top_left: Point, size: Size) -> Self {
        Self {
            min_x: top_left.x,
            min_y: top_left.y,
            max_x: top_left.x + size.width,
            max_y: top_left.y + size.height,
        }
    }

    /// Returns the smallest bounds containing every point, or `None` if there are no points.
    ///
    /// ```
    /// # use quill_core::geometry::{Bounds, Point};
    /// let bounds = Bounds::from_points([Point::new(1.0, 5.0), Point::new(4.0, 2.0)]).unwrap();
    /// assert_eq!(bounds.min_x(), 1.0);
    /// assert_eq!(bounds.min_y(), 2.0);
    /// assert_eq!(bounds.max_x(), 4.0);
    /// assert_eq!(bounds.max_y(), 5.0);
    ///
    /// assert!(Bounds::from_points(std::iter::empty()).is_none());
    /// ```
    pub fn from_points(points: impl IntoIterator<Item = Point>) -> Option<Self> {
        points
            .into_iter()
            .map(|point| Self::new_from_center(point, Size::default()))
            .reduce(|acc, bounds| acc.merge(&bounds))
    }

    /// Returns the minimum x-coordinate of the bounds
    pub fn min_x(self) -> f32 {
        self.min_x
    }

    /// Returns the minimum y-coordinate of the bounds
    pub fn min_y(self) -> f32 {
        self.min_y
    }

    /// Returns the maximum x-coordinate of the bounds
    pub fn max_x(self) -> f32 {
        self.max_x
    }

    /// Returns the maximum y-coordinate of the bounds
    pub fn max_y(self) -> f32 {
        self.max_y
    }

    /// Returns the center point of the bounds
    pub fn center(self) -> Point {
        Point::new(
            (self.min_x + self.max_x) / 2.0,
            (self.min_y + self.max_y) / 2.0,
        )
    }

    /// Returns the width of the bounds
    pub fn width(self) -> f32 {
        self.max_x - self.min_x
    }

    /// Returns the height of the bounds
    pub fn height(self) -> f32 {
        self.max_y - self.min_y
    }

    /// Returns the top-left corner as a Point
    pub fn min_point(self) -> Point {
        Point {
            x: self.min_x,
            y: self.min_y,
        }
    }

    /// Converts bounds to a Size object
    pub fn to_size(self) -> Size {
        Size {
            width: self.width(),
            height: self.height(),
        }
    }

    /// Merges two bounds to create a larger bounds that contains both.
    ///
    /// ```
    /// # use quill_core::geometry::{Bounds, Point, Size};
    /// let a = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(100.0, 30.0));
    /// let b = Bounds::new_from_top_left(Point::new(10.0, 40.0), Size::new(120.0, 80.0));
    ///
    /// let combined = a.merge(&b);
    /// assert_eq!(combined.width(), 130.0);
    /// assert_eq!(combined.height(), 120.0);
    /// ```
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            min_x: self.min_x.min(other.min_x),
            min_y: self.min_y.min(other.min_y),
            max_x: self.max_x.max(other.max_x),
            max_y: self.max_y.max(other.max_y),
        }
    }

    /// Moves the bounds by the specified offset.
    pub fn translate(&self, offset: Point) -> Self {
        Self {
            min_x: self.min_x + offset.x,
            min_y: self.min_y + offset.y,
            max_x: self.max_x + offset.x,
            max_y: self.max_y + offset.y,
        }
    }

    /// Scales the bounds about the origin.
    ///
    /// Negative factors mirror the box, so min and max are re-ordered.
    pub fn scale(&self, factor: f32) -> Self {
        let (x1, x2) = (self.min_x * factor, self.max_x * factor);
        let (y1, y2) = (self.min_y * factor, self.max_y * factor);
        Self {
            min_x: x1.min(x2),
            min_y: y1.min(y2),
            max_x: x1.max(x2),
            max_y: y1.max(y2),
        }
    }

    /// Expands the bounds by adding insets on each side.
    pub fn add_padding(&self, insets: Insets) -> Self {
        Self {
            min_x: self.min_x - insets.left(),
            min_y: self.min_y - insets.top(),
            max_x: self.max_x + insets.right(),
            max_y: self.max_y + insets.bottom(),
        }
    }
}

/// Represents spacing around an element with potentially different values for each side
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Insets {
    top: f32,
    right: f32,
    bottom: f32,
    left: f32,
}

impl Insets {
    /// Creates new insets with specified values for each side
    pub fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Creates uniform insets with the same value for all sides
    pub fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn top(self) -> f32 {
        self.top
    }

    pub fn right(self) -> f32 {
        self.right
    }

    pub fn bottom(self) -> f32 {
        self.bottom
    }

    pub fn left(self) -> f32 {
        self.left
    }

    /// Returns the sum of left and right insets
    pub fn horizontal_sum(self) -> f32 {
        self.left + self.right
    }

    /// Returns the sum of top and bottom insets
    pub fn vertical_sum(self) -> f32 {
        self.top + self.bottom
    }
}

/// An angle stored in radians.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd)]
pub struct Angle(f32);

impl Angle {
    /// A full turn (2π radians).
    pub const FULL: Angle = Angle(TAU);

    /// Zero radians.
    pub const ZERO: Angle = Angle(0.0);

    pub fn from_radians(radians: f32) -> Self {
        Self(radians)
    }

    pub fn from_degrees(degrees: f32) -> Self {
        Self(degrees.to_radians())
    }

    pub fn radians(self) -> f32 {
        self.0
    }

    pub fn to_degrees(self) -> f32 {
        self.0.to_degrees()
    }

    /// Signed sweep from `self` to `end`.
    pub fn sweep_to(self, end: Angle) -> Angle {
        Angle(end.0 - self.0)
    }
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    #[test]
    fn test_point_new() {
        let point = Point::new(3.5, 4.2);
        assert_eq!(point.x(), 3.5);
        assert_eq!(point.y(), 4.2);
    }

    #[test]
    fn test_point_sub_and_hypot() {
        let a = Point::new(4.0, 6.0);
        let b = Point::new(1.0, 2.0);
        assert_approx_eq!(f32, a.sub_point(b).hypot(), 5.0);
    }

    #[test]
    fn test_point_on_circle_cardinal_directions() {
        let center = Point::new(10.0, 10.0);

        let east = Point::on_circle(center, 5.0, Angle::ZERO);
        assert_approx_eq!(f32, east.x(), 15.0);
        assert_approx_eq!(f32, east.y(), 10.0);

        // Y grows downward, so a quarter turn lands below the center.
        let south = Point::on_circle(center, 5.0, Angle::from_degrees(90.0));
        assert_approx_eq!(f32, south.x(), 10.0, epsilon = 1e-5);
        assert_approx_eq!(f32, south.y(), 15.0);
    }

    #[test]
    fn test_point_deserialize_from_pair() {
        let point: Point = Point::from([1.5, -2.0]);
        assert_eq!(point, Point::new(1.5, -2.0));
    }

    #[test]
    fn test_size_add_padding() {
        let size = Size::new(10.0, 20.0).add_padding(Insets::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(size, Size::new(16.0, 24.0));
    }

    #[test]
    fn test_size_is_zero() {
        assert!(Size::default().is_zero());
        assert!(!Size::new(0.0, 1.0).is_zero());
    }

    #[test]
    fn test_bounds_new_from_center() {
        let bounds = Bounds::new_from_center(Point::new(50.0, 50.0), Size::new(20.0, 10.0));
        assert_eq!(bounds.min_x(), 40.0);
        assert_eq!(bounds.min_y(), 45.0);
        assert_eq!(bounds.max_x(), 60.0);
        assert_eq!(bounds.max_y(), 55.0);
        assert_eq!(bounds.center(), Point::new(50.0, 50.0));
    }

    #[test]
    fn test_bounds_translate() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
        let moved = bounds.translate(Point::new(100.0, 50.0));
        assert_eq!(moved.min_point(), Point::new(110.0, 70.0));
        assert_eq!(moved.to_size(), Size::new(50.0, 30.0));
    }

    #[test]
    fn test_bounds_scale_about_origin() {
        let bounds = Bounds::new_from_top_left(Point::new(10.0, 20.0), Size::new(50.0, 30.0));
        let scaled = bounds.scale(0.5);
        assert_eq!(scaled.min_point(), Point::new(5.0, 10.0));
        assert_eq!(scaled.to_size(), Size::new(25.0, 15.0));
    }

    #[test]
    fn test_bounds_scale_negative_keeps_ordering() {
        let bounds = Bounds::new_from_top_left(Point::new(1.0, 1.0), Size::new(2.0, 2.0));
        let mirrored = bounds.scale(-1.0);
        assert!(mirrored.min_x() <= mirrored.max_x());
        assert!(mirrored.min_y() <= mirrored.max_y());
        assert_eq!(mirrored.min_point(), Point::new(-3.0, -3.0));
    }

    #[test]
    fn test_bounds_add_padding() {
        let bounds = Bounds::new_from_top_left(Point::new(0.0, 0.0), Size::new(10.0, 10.0));
        let padded = bounds.add_padding(Insets::uniform(5.0));
        assert_eq!(padded.min_point(), Point::new(-5.0, -5.0));
        assert_eq!(padded.to_size(), Size::new(20.0, 20.0));
    }

    #[test]
    fn test_bounds_from_points() {
        let bounds = Bounds::from_points([
            Point::new(3.0, -1.0),
            Point::new(-2.0, 4.0),
            Point::new(0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(bounds.min_point(), Point::new(-2.0, -1.0));
        assert_eq!(bounds.to_size(), Size::new(5.0, 5.0));
    }

    #[test]
    fn test_angle_conversions() {
        assert_approx_eq!(f32, Angle::from_degrees(180.0).radians(), std::f32::consts::PI);
        assert_approx_eq!(f32, Angle::FULL.to_degrees(), 360.0, epsilon = 1e-3);
        assert_approx_eq!(
            f32,
            Angle::from_degrees(30.0).sweep_to(Angle::from_degrees(90.0)).to_degrees(),
            60.0,
            epsilon = 1e-3
        );
    }
}
