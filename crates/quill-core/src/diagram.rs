//! The composite [`Diagram`] drawable.
//!
//! A diagram is an ordered list of heterogeneous drawables and is itself
//! drawable, so diagrams nest. Storage is shared between clones and copied
//! on the first mutation (`Rc::make_mut`), which gives diagrams value
//! semantics at O(1) clone cost. In particular a diagram can contain a copy
//! of itself:
//!
//! ```
//! use quill_core::diagram::Diagram;
//! use quill_core::draw::{Circle, CommandList, Drawable};
//! use quill_core::geometry::Point;
//!
//! let mut diagram = Diagram::new();
//! diagram.add(Circle::new(Point::new(50.0, 50.0), 10.0));
//!
//! // The copy is a snapshot taken before the add, so drawing terminates.
//! diagram.add(diagram.scaled(0.5).unwrap());
//!
//! let mut commands = CommandList::new();
//! diagram.draw(&mut commands);
//! assert_eq!(commands.len(), 2);
//! ```

use std::rc::Rc;

use log::trace;

use crate::{
    draw::{Drawable, Renderer, Scaled, ShapeError},
    geometry::Bounds,
};

/// An ordered collection of drawables with value semantics.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    elements: Rc<Vec<Box<dyn Drawable>>>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a drawable.
    ///
    /// If this diagram currently shares storage with a clone, the storage is
    /// copied first, so the clone is unaffected.
    pub fn add(&mut self, element: impl Drawable + 'static) {
        self.push_boxed(Box::new(element));
    }

    /// Appends an already boxed drawable.
    pub fn push_boxed(&mut self, element: Box<dyn Drawable>) {
        trace!(kind = element.kind(), shared = self.is_shared(); "Adding element to diagram");
        Rc::make_mut(&mut self.elements).push(element);
    }

    /// Builder-style [`add`](Self::add).
    pub fn with(mut self, element: impl Drawable + 'static) -> Self {
        self.add(element);
        self
    }

    /// Returns a copy of this diagram drawn at `factor` scale.
    pub fn scaled(&self, factor: f32) -> Result<Scaled<Diagram>, ShapeError> {
        Scaled::new(self.clone(), factor)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Iterates over elements in insertion order.
    pub fn elements(&self) -> impl Iterator<Item = &dyn Drawable> {
        self.elements.iter().map(|element| element.as_ref())
    }

    /// True while another diagram value shares this diagram's storage.
    pub fn is_shared(&self) -> bool {
        Rc::strong_count(&self.elements) > 1
    }
}

impl Drawable for Diagram {
    fn draw(&self, renderer: &mut dyn Renderer) {
        for element in self.elements.iter() {
            element.draw(renderer);
        }
    }

    fn bounds(&self) -> Bounds {
        self.elements
            .iter()
            .map(|element| element.bounds())
            .reduce(|acc, bounds| acc.merge(&bounds))
            .unwrap_or_default()
    }

    fn kind(&self) -> &'static str {
        "diagram"
    }
}

impl PartialEq for Diagram {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.elements, &other.elements)
            || (self.len() == other.len()
                && self
                    .elements()
                    .zip(other.elements())
                    .all(|(a, b)| a.is_equal_to(b)))
    }
}

impl<D: Drawable + 'static> FromIterator<D> for Diagram {
    fn from_iter<I: IntoIterator<Item = D>>(iter: I) -> Self {
        let mut diagram = Self::new();
        for element in iter {
            diagram.add(element);
        }
        diagram
    }
}
