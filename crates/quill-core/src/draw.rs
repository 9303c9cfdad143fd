//! Drawing abstractions.
//!
//! Two traits meet in this module:
//!
//! - [`Renderer`] consumes primitive drawing commands (`move_to`, `line_to`,
//!   `arc_at`, plus the provided `circle_at` and `rectangle_at`).
//! - [`Drawable`] is implemented by anything that can emit those commands:
//!   the built-in shapes, [`Scaled`] wrappers and the composite
//!   [`Diagram`](crate::diagram::Diagram).
//!
//! Drawables are value types. Every `Drawable` that is also `Clone + PartialEq`
//! automatically implements [`DrawableValue`], which gives trait objects
//! cloning (`Box<dyn Drawable>: Clone`) and heterogeneous equality
//! (`dyn Drawable: PartialEq`).
//!
//! # Example
//!
//! ```
//! use quill_core::draw::{Circle, CommandList, Drawable, DrawCommand};
//! use quill_core::geometry::Point;
//!
//! let circle = Circle::new(Point::new(10.0, 10.0), 5.0);
//! let mut commands = CommandList::new();
//! circle.draw(&mut commands);
//!
//! assert_eq!(
//!     commands.commands(),
//!     &[DrawCommand::Circle { center: Point::new(10.0, 10.0), radius: 5.0 }]
//! );
//! ```

use std::{any::Any, fmt};

mod command;
mod scaled;
mod shape;
mod stroke;

pub use command::{CommandList, DrawCommand};
pub use scaled::{Scaled, ScaledRenderer};
pub use shape::{Bubble, Circle, MAX_SIDES, Polygon, Rectangle, ShapeError};
pub use stroke::{LineCap, LineJoin, StrokeDefinition, StrokeStyle};

use crate::geometry::{Angle, Bounds, Point};

/// A consumer of primitive drawing commands.
///
/// Only `move_to`, `line_to` and `arc_at` are required. `circle_at` and
/// `rectangle_at` have default implementations in terms of the required
/// methods; renderers with a native primitive should override them.
pub trait Renderer {
    /// Starts a new sub-path at `point`.
    fn move_to(&mut self, point: Point);

    /// Draws a straight segment from the current point to `point`.
    fn line_to(&mut self, point: Point);

    /// Draws a circular arc around `center` from `start` to `end`.
    fn arc_at(&mut self, center: Point, radius: f32, start: Angle, end: Angle);

    /// Draws a full circle.
    fn circle_at(&mut self, center: Point, radius: f32) {
        self.arc_at(center, radius, Angle::ZERO, Angle::FULL);
    }

    /// Draws the outline of an axis-aligned rectangle, starting and ending at
    /// its top-left corner.
    fn rectangle_at(&mut self, bounds: Bounds) {
        let top_left = bounds.min_point();
        self.move_to(top_left);
        self.line_to(Point::new(bounds.max_x(), bounds.min_y()));
        self.line_to(Point::new(bounds.max_x(), bounds.max_y()));
        self.line_to(Point::new(bounds.min_x(), bounds.max_y()));
        self.line_to(top_left);
    }
}

/// Something that can emit drawing commands.
pub trait Drawable: fmt::Debug + DrawableValue {
    /// Emits this drawable's commands to `renderer`.
    fn draw(&self, renderer: &mut dyn Renderer);

    /// Returns the geometric extent of this drawable.
    fn bounds(&self) -> Bounds;

    /// Returns a short name for this kind of drawable, used in logs and dumps.
    fn kind(&self) -> &'static str;
}

/// Value behaviour for drawable trait objects.
///
/// Implemented for every `Drawable + Clone + PartialEq`; there is no need to
/// implement it by hand.
pub trait DrawableValue {
    /// Creates a boxed copy of this drawable.
    fn clone_box(&self) -> Box<dyn Drawable>;

    /// Returns `self` as [`Any`] so callers can downcast.
    fn as_any(&self) -> &dyn Any;

    /// Returns true if `other` has the same concrete type and is equal by value.
    fn is_equal_to(&self, other: &dyn Drawable) -> bool;
}

impl<T> DrawableValue for T
where
    T: Drawable + Clone + PartialEq + 'static,
{
    fn clone_box(&self) -> Box<dyn Drawable> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn is_equal_to(&self, other: &dyn Drawable) -> bool {
        other
            .as_any()
            .downcast_ref::<T>()
            .is_some_and(|other| self == other)
    }
}

/// Enable cloning of `Box<dyn Drawable>` by delegating to the clone_box method.
/// This allows `Rc::make_mut` to work with collections of boxed drawables.
impl Clone for Box<dyn Drawable> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

impl PartialEq for dyn Drawable {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}
