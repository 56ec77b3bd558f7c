//! Drawing surface abstraction and the star wheel driver.
//!
//! The driver issues path, fill, stroke, clip and text calls against a
//! [`DrawingSurface`]. Backends (SVG file, in-memory recording) decide how
//! those calls become output. Calls are fire-and-forget: the driver never
//! reads anything back.

pub mod recording;
pub mod svg;
pub mod wheel;

pub use recording::{DrawCommand, RecordingSurface};
pub use self::svg::SvgSurface;
pub use wheel::{RenderSettings, RenderSummary, StarWheel};

use crate::color::Color;

/// Text anchoring relative to the given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    Start,
    #[default]
    Center,
    End,
}

/// Stroke parameters. `color: None` uses the surface's current color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    pub color: Option<Color>,
    /// Multiples of the backend's base line width.
    pub line_width: f64,
    pub dotted: bool,
}

impl StrokeStyle {
    pub fn solid(color: Color) -> Self {
        Self {
            color: Some(color),
            line_width: 1.0,
            dotted: false,
        }
    }

    pub fn dotted(color: Color) -> Self {
        Self {
            dotted: true,
            ..Self::solid(color)
        }
    }

    /// Solid stroke in whatever color was last set.
    pub fn current() -> Self {
        Self {
            color: None,
            line_width: 1.0,
            dotted: false,
        }
    }
}

/// One piece of text and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct TextPlacement<'a> {
    pub content: &'a str,
    pub x: f64,
    pub y: f64,
    pub h_align: Align,
    pub v_align: Align,
    /// Offset from the anchor point along the alignment direction.
    pub gap: f64,
    /// Radians, clockwise on the page.
    pub rotation: f64,
}

impl<'a> TextPlacement<'a> {
    pub fn centred(content: &'a str, x: f64, y: f64, rotation: f64) -> Self {
        Self {
            content,
            x,
            y,
            h_align: Align::Center,
            v_align: Align::Center,
            gap: 0.0,
            rotation,
        }
    }
}

/// Capability interface for anything that can draw the wheel.
///
/// Paths accumulate between `begin_path` calls; `fill`, `stroke` and `clip`
/// act on the current path without consuming it.
pub trait DrawingSurface {
    /// Discard the current path and start a new one.
    fn begin_path(&mut self);

    /// Start a new sub-path within the current path (for holes).
    fn begin_sub_path(&mut self);

    fn circle(&mut self, centre_x: f64, centre_y: f64, radius: f64);

    fn move_to(&mut self, x: f64, y: f64);

    fn line_to(&mut self, x: f64, y: f64);

    fn fill(&mut self, color: Color);

    fn stroke(&mut self, style: StrokeStyle);

    /// Restrict everything drawn afterwards to the current path.
    fn clip(&mut self);

    /// Font size as a multiple of the backend's base size.
    fn set_font_size(&mut self, size: f64);

    fn set_color(&mut self, color: Color);

    fn text(&mut self, placement: &TextPlacement);
}
