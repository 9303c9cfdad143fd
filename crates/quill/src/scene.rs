//! JSON scene descriptions.
//!
//! A scene is a list of elements tagged by `type`. Points and sizes are
//! two-element arrays:
//!
//! ```
//! # use quill::scene::Scene;
//! let scene = Scene::from_json(r#"{ "elements": [
//!     { "type": "circle", "center": [50, 50], "radius": 20 },
//!     { "type": "diagram", "scale": 0.5, "elements": [
//!         { "type": "rectangle", "origin": [0, 0], "size": [30, 10] }
//!     ] },
//!     { "type": "self", "scale": 0.3 }
//! ] }"#).unwrap();
//!
//! let diagram = scene.to_diagram().unwrap();
//! assert_eq!(diagram.len(), 3);
//! ```
//!
//! A `self` element inserts a copy of everything declared before it at the
//! same nesting level, optionally scaled.

use log::{debug, trace};
use serde::Deserialize;

use quill_core::{
    diagram::Diagram,
    draw::{Bubble, Circle, Drawable, Polygon, Rectangle, ShapeError},
    geometry::{Point, Size},
};

use crate::error::QuillError;

/// A parsed scene document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Scene {
    #[serde(default)]
    elements: Vec<SceneElement>,
}

/// One entry of a scene's `elements` list.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SceneElement {
    Circle {
        center: Point,
        radius: f32,
    },
    Polygon {
        corners: Vec<Point>,
    },
    RegularPolygon {
        center: Point,
        radius: f32,
        sides: usize,
    },
    Rectangle {
        origin: Point,
        size: Size,
    },
    Bubble {
        center: Point,
        radius: f32,
    },
    Diagram {
        #[serde(default)]
        elements: Vec<SceneElement>,
        #[serde(default)]
        scale: Option<f32>,
    },
    /// Copy of the enclosing diagram as built so far.
    #[serde(rename = "self")]
    SelfCopy {
        #[serde(default)]
        scale: Option<f32>,
    },
}

impl Scene {
    pub fn new(elements: Vec<SceneElement>) -> Self {
        Self { elements }
    }

    /// Parses a scene from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Scene`] carrying `src` when the text is not a
    /// valid scene document.
    pub fn from_json(src: &str) -> Result<Self, QuillError> {
        let scene: Scene =
            serde_json::from_str(src).map_err(|err| QuillError::new_scene_error(err, src))?;
        debug!(elements = scene.elements.len(); "Scene parsed");
        Ok(scene)
    }

    pub fn elements(&self) -> &[SceneElement] {
        &self.elements
    }

    /// Builds the diagram the scene describes.
    ///
    /// # Errors
    ///
    /// Returns [`QuillError::Shape`] naming the offending element, e.g.
    /// `elements[2].elements[0]`, when a shape fails validation.
    pub fn to_diagram(&self) -> Result<Diagram, QuillError> {
        build_diagram(&self.elements, "elements")
    }
}

fn build_diagram(elements: &[SceneElement], path: &str) -> Result<Diagram, QuillError> {
    let mut diagram = Diagram::new();
    for (idx, entry) in elements.iter().enumerate() {
        let element_path = format!("{path}[{idx}]");
        let element = build_element(entry, &diagram, &element_path)
            .map_err(|err| err.at_path(&element_path))?;
        trace!(path = element_path.as_str(), kind = element.kind(); "Element built");
        diagram.push_boxed(element);
    }
    Ok(diagram)
}

/// Error from building a single element: either a shape failure to be tagged
/// with the element's path, or a nested failure that already carries one.
enum BuildError {
    Shape(ShapeError),
    Nested(QuillError),
}

impl BuildError {
    fn at_path(self, path: &str) -> QuillError {
        match self {
            Self::Shape(err) => QuillError::Shape {
                path: path.to_string(),
                err,
            },
            Self::Nested(err) => err,
        }
    }
}

impl From<ShapeError> for BuildError {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}

fn build_element(
    entry: &SceneElement,
    so_far: &Diagram,
    path: &str,
) -> Result<Box<dyn Drawable>, BuildError> {
    let element: Box<dyn Drawable> = match entry {
        SceneElement::Circle { center, radius } => Box::new(Circle::try_new(*center, *radius)?),
        SceneElement::Polygon { corners } => Box::new(Polygon::new(corners.clone())),
        SceneElement::RegularPolygon {
            center,
            radius,
            sides,
        } => Box::new(Polygon::regular(*center, *radius, *sides)?),
        SceneElement::Rectangle { origin, size } => Box::new(Rectangle::new(*origin, *size)?),
        SceneElement::Bubble { center, radius } => Box::new(Bubble::try_new(*center, *radius)?),
        SceneElement::Diagram { elements, scale } => {
            let nested = build_diagram(elements, &format!("{path}.elements"))
                .map_err(BuildError::Nested)?;
            maybe_scaled(nested, *scale)?
        }
        SceneElement::SelfCopy { scale } => maybe_scaled(so_far.clone(), *scale)?,
    };
    Ok(element)
}

fn maybe_scaled(diagram: Diagram, scale: Option<f32>) -> Result<Box<dyn Drawable>, ShapeError> {
    Ok(match scale {
        Some(factor) => Box::new(diagram.scaled(factor)?),
        None => Box::new(diagram),
    })
}
