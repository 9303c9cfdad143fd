//! Renderer-agnostic command recording.
//!
//! [`CommandList`] is a [`Renderer`] that records every call as a
//! [`DrawCommand`]. A recorded list can be inspected, measured, or replayed
//! onto another renderer, which makes it the adapter between drawables and
//! backends that want a retained command stream instead of immediate calls.

use crate::{
    draw::Renderer,
    geometry::{Angle, Bounds, Point, Size},
};

/// A single primitive drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    MoveTo(Point),
    LineTo(Point),
    Arc {
        center: Point,
        radius: f32,
        start: Angle,
        end: Angle,
    },
    Circle {
        center: Point,
        radius: f32,
    },
}

impl DrawCommand {
    /// Issues this command to `renderer`.
    pub fn apply(&self, renderer: &mut dyn Renderer) {
        match *self {
            Self::MoveTo(point) => renderer.move_to(point),
            Self::LineTo(point) => renderer.line_to(point),
            Self::Arc {
                center,
                radius,
                start,
                end,
            } => renderer.arc_at(center, radius, start, end),
            Self::Circle { center, radius } => renderer.circle_at(center, radius),
        }
    }

    /// Conservative extent touched by this command.
    ///
    /// Arcs report the bounds of their full circle.
    fn bounds(&self) -> Bounds {
        match *self {
            Self::MoveTo(point) | Self::LineTo(point) => point.to_bounds(Size::default()),
            Self::Arc { center, radius, .. } | Self::Circle { center, radius } => {
                center.to_bounds(Size::new(radius * 2.0, radius * 2.0))
            }
        }
    }
}

/// Recorded command stream, in call order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CommandList {
    commands: Vec<DrawCommand>,
}

impl CommandList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns commands in the order they were issued.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Clears recorded commands. Keeps allocated capacity for reuse.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Re-issues every recorded command to `renderer`, in order.
    pub fn replay(&self, renderer: &mut dyn Renderer) {
        for command in &self.commands {
            command.apply(renderer);
        }
    }

    /// Returns the area touched by the recorded commands, or `None` if nothing was recorded.
    pub fn bounds(&self) -> Option<Bounds> {
        self.commands
            .iter()
            .map(DrawCommand::bounds)
            .reduce(|acc, bounds| acc.merge(&bounds))
    }
}

impl Renderer for CommandList {
    fn move_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::MoveTo(point));
    }

    fn line_to(&mut self, point: Point) {
        self.commands.push(DrawCommand::LineTo(point));
    }

    fn arc_at(&mut self, center: Point, radius: f32, start: Angle, end: Angle) {
        self.commands.push(DrawCommand::Arc {
            center,
            radius,
            start,
            end,
        });
    }

    fn circle_at(&mut self, center: Point, radius: f32) {
        self.commands.push(DrawCommand::Circle { center, radius });
    }
}

impl IntoIterator for CommandList {
    type Item = DrawCommand;
    type IntoIter = std::vec::IntoIter<DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.into_iter()
    }
}
