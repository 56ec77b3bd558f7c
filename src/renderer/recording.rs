//! In-memory surface that keeps every call as a [`DrawCommand`].

use super::{Align, DrawingSurface, StrokeStyle, TextPlacement};
use crate::color::Color;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    BeginSubPath,
    Circle {
        x: f64,
        y: f64,
        radius: f64,
    },
    MoveTo {
        x: f64,
        y: f64,
    },
    LineTo {
        x: f64,
        y: f64,
    },
    Fill(Color),
    Stroke(StrokeStyle),
    Clip,
    SetFontSize(f64),
    SetColor(Color),
    Text {
        content: String,
        x: f64,
        y: f64,
        h_align: Align,
        v_align: Align,
        gap: f64,
        rotation: f64,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Text commands in emission order.
    pub fn texts(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Text { .. }))
    }

    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    pub fn position(&self, predicate: impl Fn(&DrawCommand) -> bool) -> Option<usize> {
        self.commands.iter().position(predicate)
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn begin_sub_path(&mut self) {
        self.commands.push(DrawCommand::BeginSubPath);
    }

    fn circle(&mut self, centre_x: f64, centre_y: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle {
            x: centre_x,
            y: centre_y,
            radius,
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn fill(&mut self, color: Color) {
        self.commands.push(DrawCommand::Fill(color));
    }

    fn stroke(&mut self, style: StrokeStyle) {
        self.commands.push(DrawCommand::Stroke(style));
    }

    fn clip(&mut self) {
        self.commands.push(DrawCommand::Clip);
    }

    fn set_font_size(&mut self, size: f64) {
        self.commands.push(DrawCommand::SetFontSize(size));
    }

    fn set_color(&mut self, color: Color) {
        self.commands.push(DrawCommand::SetColor(color));
    }

    fn text(&mut self, placement: &TextPlacement) {
        self.commands.push(DrawCommand::Text {
            content: placement.content.to_string(),
            x: placement.x,
            y: placement.y,
            h_align: placement.h_align,
            v_align: placement.v_align,
            gap: placement.gap,
            rotation: placement.rotation,
        });
    }
}
