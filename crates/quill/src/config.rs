//! Configuration types for Quill rendering.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from a
//! TOML file by the CLI or built in code through [`Default`].
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining style and render settings.
//! - [`StyleConfig`] - Colors and stroke applied to every emitted element.
//! - [`RenderConfig`] - Output padding and default output format.
//!
//! ```
//! # use quill::config::AppConfig;
//! let config: AppConfig = serde_json::from_str(r#"{
//!     "style": { "stroke_color": "navy", "stroke_width": 2.0 },
//!     "render": { "padding": 4.0, "format": "text" }
//! }"#).unwrap();
//! assert_eq!(config.style().stroke().unwrap().width(), 2.0);
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use quill_core::{
    color::Color,
    draw::{LineCap, LineJoin, StrokeDefinition},
};

/// Default space between the drawing and the SVG viewport edge.
const DEFAULT_PADDING: f32 = 10.0;

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    style: StyleConfig,

    #[serde(default)]
    render: RenderConfig,
}

impl AppConfig {
    pub fn new(style: StyleConfig, render: RenderConfig) -> Self {
        Self { style, render }
    }

    pub fn style(&self) -> &StyleConfig {
        &self.style
    }

    pub fn render(&self) -> &RenderConfig {
        &self.render
    }
}

/// Visual styling. Colors and styles are kept as strings and parsed on
/// access so that a bad value is reported with the field it came from.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct StyleConfig {
    #[serde(default)]
    background_color: Option<String>,

    #[serde(default)]
    fill_color: Option<String>,

    #[serde(default)]
    stroke_color: Option<String>,

    #[serde(default)]
    stroke_width: Option<f32>,

    /// `solid`, `dashed`, `dotted` or a raw dasharray.
    #[serde(default)]
    stroke_style: Option<String>,

    #[serde(default)]
    line_cap: Option<String>,

    #[serde(default)]
    line_join: Option<String>,
}

impl StyleConfig {
    /// Returns the parsed background [`Color`], or `None` if no color is configured.
    pub fn background_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.background_color.as_deref(), "background_color")
    }

    /// Returns the parsed fill [`Color`], or `None` to leave shapes unfilled.
    pub fn fill_color(&self) -> Result<Option<Color>, String> {
        parse_optional_color(self.fill_color.as_deref(), "fill_color")
    }

    /// Builds the stroke applied to every element, falling back to
    /// [`StrokeDefinition::default`] for unset fields.
    pub fn stroke(&self) -> Result<StrokeDefinition, String> {
        let mut stroke = StrokeDefinition::default();

        if let Some(color) = parse_optional_color(self.stroke_color.as_deref(), "stroke_color")? {
            stroke.set_color(color);
        }
        if let Some(width) = self.stroke_width {
            if !width.is_finite() || width < 0.0 {
                return Err(format!("Invalid stroke_width in config: {width}"));
            }
            stroke.set_width(width);
        }
        if let Some(style) = &self.stroke_style {
            stroke.set_style(
                style
                    .parse()
                    .map_err(|err| format!("Invalid stroke_style in config: {err}"))?,
            );
        }
        if let Some(cap) = &self.line_cap {
            stroke.set_cap(
                cap.parse::<LineCap>()
                    .map_err(|err| format!("Invalid line_cap in config: {err}"))?,
            );
        }
        if let Some(join) = &self.line_join {
            stroke.set_join(
                join.parse::<LineJoin>()
                    .map_err(|err| format!("Invalid line_join in config: {err}"))?,
            );
        }

        Ok(stroke)
    }
}

fn parse_optional_color(value: Option<&str>, field: &str) -> Result<Option<Color>, String> {
    value
        .map(Color::new)
        .transpose()
        .map_err(|err| format!("Invalid {field} in config: {err}"))
}

/// Output settings.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderConfig {
    #[serde(default = "default_padding")]
    padding: f32,

    #[serde(default)]
    format: OutputFormat,
}

fn default_padding() -> f32 {
    DEFAULT_PADDING
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: DEFAULT_PADDING,
            format: OutputFormat::default(),
        }
    }
}

impl RenderConfig {
    pub fn new(padding: f32, format: OutputFormat) -> Self {
        Self { padding, format }
    }

    pub fn padding(&self) -> f32 {
        self.padding
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// What a scene is rendered to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// An SVG document
    #[default]
    Svg,
    /// A line-per-command text dump
    Text,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "svg" => Ok(Self::Svg),
            "text" => Ok(Self::Text),
            _ => Err(format!(
                "invalid output format `{s}`, valid values: svg, text"
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Svg => write!(f, "svg"),
            Self::Text => write!(f, "text"),
        }
    }
}
