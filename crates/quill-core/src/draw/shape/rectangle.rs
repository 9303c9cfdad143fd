use super::ShapeError;
use crate::{
    draw::{Drawable, Renderer},
    geometry::{Bounds, Point, Size},
};

/// An axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    origin: Point,
    size: Size,
}

impl Rectangle {
    /// Creates a rectangle; width and height must be finite and non-negative.
    pub fn new(origin: Point, size: Size) -> Result<Self, ShapeError> {
        let (width, height) = (size.width(), size.height());
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ShapeError::InvalidSize { width, height });
        }
        Ok(Self { origin, size })
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }
}

impl Drawable for Rectangle {
    fn draw(&self, renderer: &mut dyn Renderer) {
        renderer.rectangle_at(self.bounds());
    }

    fn bounds(&self) -> Bounds {
        Bounds::new_from_top_left(self.origin, self.size)
    }

    fn kind(&self) -> &'static str {
        "rectangle"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CommandList, DrawCommand};

    #[test]
    fn test_rectangle_outline() {
        let rect = Rectangle::new(Point::new(1.0, 1.0), Size::new(2.0, 3.0)).unwrap();
        let mut list = CommandList::new();
        rect.draw(&mut list);

        assert_eq!(
            list.commands(),
            &[
                DrawCommand::MoveTo(Point::new(1.0, 1.0)),
                DrawCommand::LineTo(Point::new(3.0, 1.0)),
                DrawCommand::LineTo(Point::new(3.0, 4.0)),
                DrawCommand::LineTo(Point::new(1.0, 4.0)),
                DrawCommand::LineTo(Point::new(1.0, 1.0)),
            ]
        );
    }

    #[test]
    fn test_rectangle_rejects_negative_size() {
        let err = Rectangle::new(Point::default(), Size::new(-1.0, 2.0)).unwrap_err();
        assert_eq!(
            err,
            ShapeError::InvalidSize {
                width: -1.0,
                height: 2.0
            }
        );
    }
}
