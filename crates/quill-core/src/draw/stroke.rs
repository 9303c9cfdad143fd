//! Stroke and line-style definitions.
//!
//! Renderers that produce vector output apply a [`StrokeDefinition`] to every
//! element they emit. The vocabulary follows SVG:
//!
//! | Property | SVG Attribute | Example Values |
//! |----------|---------------|----------------|
//! | `color` | `stroke`, `stroke-opacity` | `"#000000"`, `0.5` |
//! | `width` | `stroke-width` | `2.0` |
//! | `style` | `stroke-dasharray` | `"5,5"`, `"10,5,2,5"` |
//! | `cap` | `stroke-linecap` | `"butt"`, `"round"`, `"square"` |
//! | `join` | `stroke-linejoin` | `"miter"`, `"round"`, `"bevel"` |
//!
//! ```
//! use quill_core::color::Color;
//! use quill_core::draw::{LineCap, StrokeDefinition, StrokeStyle};
//! use svg::node::element as svg_element;
//!
//! let mut stroke = StrokeDefinition::new(Color::new("navy").unwrap(), 1.5);
//! stroke.set_style(StrokeStyle::Dashed);
//! stroke.set_cap(LineCap::Round);
//!
//! let circle = svg_element::Circle::new().set("r", 4);
//! let circle = quill_core::apply_stroke!(circle, &stroke);
//! ```

use std::str::FromStr;

use crate::color::Color;

/// Dash pattern of a stroke.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum StrokeStyle {
    #[default]
    Solid,
    /// 5 on, 5 off
    Dashed,
    /// 2 on, 3 off
    Dotted,
    /// Custom SVG dasharray, e.g. `"10,5,2,3"`
    Custom(String),
}

impl FromStr for StrokeStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            "" => Err("empty stroke style".to_string()),
            // Anything else is taken as a raw dasharray
            _ => Ok(Self::Custom(s.to_string())),
        }
    }
}

impl StrokeStyle {
    /// Returns the SVG dasharray value for this style, or None for solid lines
    pub fn to_svg_value(&self) -> Option<String> {
        match self {
            Self::Solid => None,
            Self::Dashed => Some("5,5".to_string()),
            Self::Dotted => Some("2,3".to_string()),
            Self::Custom(pattern) => Some(pattern.clone()),
        }
    }
}

/// How open line endpoints are rendered (`stroke-linecap`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

impl LineCap {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Butt => "butt",
            Self::Round => "round",
            Self::Square => "square",
        }
    }
}

impl FromStr for LineCap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "butt" => Ok(Self::Butt),
            "round" => Ok(Self::Round),
            "square" => Ok(Self::Square),
            _ => Err(format!(
                "invalid line cap `{s}`, valid values: butt, round, square"
            )),
        }
    }
}

/// How polygon corners are rendered (`stroke-linejoin`).
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

impl LineJoin {
    pub fn to_svg_value(self) -> &'static str {
        match self {
            Self::Miter => "miter",
            Self::Round => "round",
            Self::Bevel => "bevel",
        }
    }
}

impl FromStr for LineJoin {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "miter" => Ok(Self::Miter),
            "round" => Ok(Self::Round),
            "bevel" => Ok(Self::Bevel),
            _ => Err(format!(
                "invalid line join `{s}`, valid values: miter, round, bevel"
            )),
        }
    }
}

/// Everything needed to stroke an outline.
///
/// Defaults to a solid black line of width 1 with butt caps and miter joins.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeDefinition {
    color: Color,
    width: f32,
    style: StrokeStyle,
    cap: LineCap,
    join: LineJoin,
}

impl StrokeDefinition {
    /// Creates a solid stroke with the given color and width.
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            ..Self::default()
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn style(&self) -> &StrokeStyle {
        &self.style
    }

    pub fn cap(&self) -> LineCap {
        self.cap
    }

    pub fn join(&self) -> LineJoin {
        self.join
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    pub fn set_width(&mut self, width: f32) {
        self.width = width;
    }

    pub fn set_style(&mut self, style: StrokeStyle) {
        self.style = style;
    }

    pub fn set_cap(&mut self, cap: LineCap) {
        self.cap = cap;
    }

    pub fn set_join(&mut self, join: LineJoin) {
        self.join = join;
    }
}

impl Default for StrokeDefinition {
    fn default() -> Self {
        Self {
            color: Color::default(),
            width: 1.0,
            style: StrokeStyle::default(),
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }
}

/// Apply all stroke attributes to an SVG element.
///
/// Sets color, opacity, width, line cap, line join and, for non-solid
/// styles, the dash pattern.
#[macro_export]
macro_rules! apply_stroke {
    ($element:expr, $stroke:expr) => {{
        let mut elem = $element
            .set("stroke", $stroke.color().to_string())
            .set("stroke-opacity", $stroke.color().alpha())
            .set("stroke-width", $stroke.width())
            .set("stroke-linecap", $stroke.cap().to_svg_value())
            .set("stroke-linejoin", $stroke.join().to_svg_value());

        if let Some(dasharray) = $stroke.style().to_svg_value() {
            elem = elem.set("stroke-dasharray", dasharray);
        }

        elem
    }};
}
