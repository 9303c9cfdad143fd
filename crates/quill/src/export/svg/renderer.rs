//! A [`Renderer`] that builds SVG elements.

use std::{
    f32::consts::{FRAC_PI_2, PI, TAU},
    fmt::Write as _,
};

use log::trace;
use svg::{Document, node::element as svg_element};

use quill_core::{
    apply_stroke,
    color::Color,
    draw::{Renderer, StrokeDefinition},
    geometry::{Angle, Bounds, Insets, Point, Size},
};

/// Type alias for boxed SVG nodes.
pub type SvgNode = Box<dyn svg::Node>;

/// Sweeps at least this close to a full turn are drawn as full circles.
const FULL_TURN_EPSILON: f32 = 1e-4;

/// Sets `fill` and `fill-opacity` on an SVG element, or `fill="none"`.
macro_rules! apply_fill {
    ($element:expr, $fill:expr) => {{
        match $fill {
            Some(color) => $element
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha()),
            None => $element.set("fill", "none"),
        }
    }};
}

/// Collects drawing commands as SVG elements.
///
/// Consecutive `move_to`, `line_to` and `arc_at` calls accumulate into a
/// single `<path>`; `circle_at` emits a native `<circle>` and ends the open
/// path. A `line_to` with no open path starts one at that point.
pub struct SvgRenderer {
    stroke: StrokeDefinition,
    fill: Option<Color>,
    nodes: Vec<SvgNode>,
    /// Path data of the open `<path>`, in SVG `d` syntax.
    path: Option<String>,
    current: Option<Point>,
    extent: Option<Bounds>,
}

impl SvgRenderer {
    pub fn new(stroke: StrokeDefinition, fill: Option<Color>) -> Self {
        Self {
            stroke,
            fill,
            nodes: Vec::new(),
            path: None,
            current: None,
            extent: None,
        }
    }

    /// Area touched by the commands so far, or `None` before the first command.
    pub fn extent(&self) -> Option<Bounds> {
        self.extent
    }

    /// Finishes any open path and returns the emitted elements in drawing order.
    pub fn into_nodes(mut self) -> Vec<SvgNode> {
        self.flush_path();
        self.nodes
    }

    /// Wraps the emitted elements in a document whose `viewBox` is the drawing
    /// extent grown by `padding` on every side.
    pub fn into_document(self, padding: f32, background: Option<Color>) -> Document {
        let view = self
            .extent
            .unwrap_or_default()
            .add_padding(Insets::uniform(padding));

        let mut document = Document::new()
            .set(
                "viewBox",
                format!(
                    "{} {} {} {}",
                    view.min_x(),
                    view.min_y(),
                    view.width(),
                    view.height()
                ),
            )
            .set("width", view.width())
            .set("height", view.height());

        if let Some(color) = background {
            let rect = svg_element::Rectangle::new()
                .set("x", view.min_x())
                .set("y", view.min_y())
                .set("width", view.width())
                .set("height", view.height())
                .set("fill", color.to_string())
                .set("fill-opacity", color.alpha());
            document = document.add(rect);
        }

        for node in self.into_nodes() {
            document = document.add(node);
        }
        document
    }

    fn include(&mut self, bounds: Bounds) {
        self.extent = Some(match self.extent {
            Some(extent) => extent.merge(&bounds),
            None => bounds,
        });
    }

    fn include_point(&mut self, point: Point) {
        self.include(point.to_bounds(Size::default()));
    }

    /// Appends one command to the open path, starting a path if needed.
    fn push_segment(&mut self, args: std::fmt::Arguments<'_>) {
        let data = self.path.get_or_insert_with(String::new);
        if !data.is_empty() {
            data.push(' ');
        }
        // Writing into a String cannot fail.
        let _ = data.write_fmt(args);
    }

    /// Continues the path to `point`: a line from the current point if there
    /// is one, a move otherwise.
    fn segment_to(&mut self, point: Point) {
        if self.current.is_some() {
            self.push_segment(format_args!("L {} {}", point.x(), point.y()));
        } else {
            self.push_segment(format_args!("M {} {}", point.x(), point.y()));
        }
        self.current = Some(point);
        self.include_point(point);
    }

    fn arc_segment(&mut self, radius: f32, large_arc: bool, positive: bool, to: Point) {
        self.push_segment(format_args!(
            "A {radius} {radius} 0 {} {} {} {}",
            u8::from(large_arc),
            u8::from(positive),
            to.x(),
            to.y()
        ));
    }

    fn flush_path(&mut self) {
        self.current = None;
        let Some(data) = self.path.take() else {
            return;
        };
        let path = svg_element::Path::new().set("d", data);
        let path = apply_fill!(path, self.fill);
        let path = apply_stroke!(path, &self.stroke);
        self.nodes.push(Box::new(path));
    }
}

/// Bounds of the arc swept from `start` by `sweep` radians: its endpoints
/// plus every axis extreme the sweep passes through.
fn arc_extent(center: Point, radius: f32, start: f32, sweep: f32) -> Bounds {
    let full = center.to_bounds(Size::new(radius * 2.0, radius * 2.0));
    if sweep.abs() >= TAU {
        return full;
    }

    let (lo, hi) = if sweep >= 0.0 {
        (start, start + sweep)
    } else {
        (start + sweep, start)
    };
    let on_circle = |angle: f32| Point::on_circle(center, radius, Angle::from_radians(angle));

    let mut points = vec![on_circle(lo), on_circle(hi)];
    let mut quarter = (lo / FRAC_PI_2).ceil();
    while quarter * FRAC_PI_2 <= hi {
        points.push(on_circle(quarter * FRAC_PI_2));
        quarter += 1.0;
    }
    Bounds::from_points(points).unwrap_or(full)
}

impl Renderer for SvgRenderer {
    fn move_to(&mut self, point: Point) {
        trace!(x = point.x(), y = point.y(); "svg move_to");
        self.push_segment(format_args!("M {} {}", point.x(), point.y()));
        self.current = Some(point);
        self.include_point(point);
    }

    fn line_to(&mut self, point: Point) {
        trace!(x = point.x(), y = point.y(); "svg line_to");
        self.segment_to(point);
    }

    fn arc_at(&mut self, center: Point, radius: f32, start: Angle, end: Angle) {
        trace!(radius, start = start.radians(), end = end.radians(); "svg arc_at");
        let from = Point::on_circle(center, radius, start);
        let sweep = start.sweep_to(end).radians();
        let positive = sweep >= 0.0;

        self.segment_to(from);
        if sweep.abs() >= TAU - FULL_TURN_EPSILON {
            // SVG arcs cannot express a full turn: go halfway round, then back.
            let halfway = Angle::from_radians(start.radians() + sweep.signum() * PI);
            let opposite = Point::on_circle(center, radius, halfway);
            self.arc_segment(radius, false, positive, opposite);
            self.arc_segment(radius, false, positive, from);
            self.current = Some(from);
        } else {
            let to = Point::on_circle(center, radius, end);
            self.arc_segment(radius, sweep.abs() > PI, positive, to);
            self.current = Some(to);
        }
        self.include(arc_extent(center, radius, start.radians(), sweep));
    }

    fn circle_at(&mut self, center: Point, radius: f32) {
        trace!(x = center.x(), y = center.y(), radius; "svg circle_at");
        self.flush_path();
        let circle = svg_element::Circle::new()
            .set("cx", center.x())
            .set("cy", center.y())
            .set("r", radius);
        let circle = apply_fill!(circle, self.fill);
        let circle = apply_stroke!(circle, &self.stroke);
        self.nodes.push(Box::new(circle));
        self.include(center.to_bounds(Size::new(radius * 2.0, radius * 2.0)));
    }
}
