//! Built-in shapes.
//!
//! Every shape is a small `Clone + PartialEq` value type implementing
//! [`Drawable`](crate::draw::Drawable). Constructors that can be handed
//! out-of-range input come in a validating `try_new`/`new` form returning
//! [`ShapeError`].

use thiserror::Error;

mod bubble;
mod circle;
mod polygon;
mod rectangle;

pub use bubble::Bubble;
pub use circle::Circle;
pub use polygon::Polygon;

pub use rectangle::Rectangle;

/// Errors raised when building a shape from invalid parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("radius must be finite and non-negative, got {0}")]
    InvalidRadius(f32),

    #[error("size must be finite and non-negative, got {width}x{height}")]
    InvalidSize { width: f32, height: f32 },

    #[error("scale must be finite and positive, got {0}")]
    InvalidScale(f32),

    #[error("a regular polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),

    #[error("a regular polygon can have at most {max} sides, got {0}", max = MAX_SIDES)]
    TooManySides(usize),
}

/// Largest side count accepted by [`Polygon::regular`].
pub const MAX_SIDES: usize = 1024;

pub(crate) fn validate_radius(radius: f32) -> Result<f32, ShapeError> {
    if radius.is_finite() && radius >= 0.0 {
        Ok(radius)
    } else {
        Err(ShapeError::InvalidRadius(radius))
    }
}
