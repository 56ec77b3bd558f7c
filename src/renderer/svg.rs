//! SVG backend.
//!
//! Disc-plane millimetres map one-to-one onto SVG user units; the viewBox
//! is the wheel's bounding box, so the file prints at true size.

use std::path::Path as FilePath;

use svg::node::element::path::Data;
use svg::node::element::{ClipPath, Definitions, Group, Path, Text};
use svg::{Document, Node};

use super::{Align, DrawingSurface, StrokeStyle, TextPlacement};
use crate::color::{opacity, to_hex, Color};
use crate::error::Result;
use crate::geometry::BoundingBox;

/// Base line width in millimetres; stroke widths are multiples of this.
pub const BASE_LINE_WIDTH_MM: f64 = 0.1;

pub struct SvgSurface {
    bounds: BoundingBox,
    font_size_mm: f64,
    font_scale: f64,
    color: Color,
    /// Path accumulated since the last `begin_path`.
    path: Data,
    path_segments: usize,
    defs: Definitions,
    clip_count: usize,
    /// Open groups, outermost first. New elements go into the last one.
    groups: Vec<Group>,
}

impl SvgSurface {
    pub fn new(bounds: BoundingBox, font_size_mm: f64) -> Self {
        Self {
            bounds,
            font_size_mm,
            font_scale: 1.0,
            color: Color::new(0, 0, 0, 255),
            path: Data::new(),
            path_segments: 0,
            defs: Definitions::new(),
            clip_count: 0,
            groups: vec![Group::new()],
        }
    }

    /// Close any open clip groups and build the document.
    pub fn into_document(self) -> Document {
        let b = self.bounds;
        let mut document = Document::new()
            .set("width", format!("{}mm", b.width()))
            .set("height", format!("{}mm", b.height()))
            .set("viewBox", (b.x_min, b.y_min, b.width(), b.height()));
        if self.clip_count > 0 {
            document = document.add(self.defs);
        }

        let mut groups = self.groups;
        let mut inner = groups.pop().unwrap_or_else(Group::new);
        while let Some(outer) = groups.pop() {
            inner = outer.add(inner);
        }
        document.add(inner)
    }

    pub fn finish(self) -> String {
        self.into_document().to_string()
    }

    pub fn write_to(self, path: &FilePath) -> Result<()> {
        svg::save(path, &self.into_document())?;
        Ok(())
    }

    fn push<T: Node + 'static>(&mut self, node: T) {
        let group = self.groups.pop().unwrap_or_else(Group::new);
        self.groups.push(group.add(node));
    }

    fn extend_path(&mut self, build: impl FnOnce(Data) -> Data) {
        let data = std::mem::replace(&mut self.path, Data::new());
        self.path = build(data);
        self.path_segments += 1;
    }
}

/// Set `attr` (and `attr-opacity` when translucent) from a theme color.
fn paint<T: Node>(mut node: T, attr: &str, color: &Color) -> T {
    node.assign(attr, to_hex(color));
    let alpha = opacity(color);
    if alpha < 1.0 {
        node.assign(format!("{attr}-opacity"), alpha);
    }
    node
}

impl DrawingSurface for SvgSurface {
    fn begin_path(&mut self) {
        self.path = Data::new();
        self.path_segments = 0;
    }

    fn begin_sub_path(&mut self) {
        // Each circle and move_to already opens its own sub-path.
    }

    fn circle(&mut self, centre_x: f64, centre_y: f64, radius: f64) {
        self.extend_path(|data| {
            data.move_to((centre_x + radius, centre_y))
                .elliptical_arc_to((radius, radius, 0, 1, 0, centre_x - radius, centre_y))
                .elliptical_arc_to((radius, radius, 0, 1, 0, centre_x + radius, centre_y))
                .close()
        });
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.extend_path(|data| data.move_to((x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.extend_path(|data| data.line_to((x, y)));
    }

    fn fill(&mut self, color: Color) {
        if self.path_segments == 0 {
            return;
        }
        let path = Path::new()
            .set("d", self.path.clone())
            .set("fill-rule", "evenodd")
            .set("stroke", "none");
        self.push(paint(path, "fill", &color));
    }

    fn stroke(&mut self, style: StrokeStyle) {
        if self.path_segments == 0 {
            return;
        }
        let color = style.color.unwrap_or(self.color);
        let width = style.line_width * BASE_LINE_WIDTH_MM;
        let mut path = Path::new()
            .set("d", self.path.clone())
            .set("fill", "none")
            .set("stroke-width", width);
        if style.dotted {
            path = path
                .set("stroke-linecap", "round")
                .set("stroke-dasharray", format!("0 {}", width * 3.0));
        }
        self.push(paint(path, "stroke", &color));
    }

    fn clip(&mut self) {
        self.clip_count += 1;
        let id = format!("clip{}", self.clip_count);
        let region = ClipPath::new().set("id", id.clone()).add(
            Path::new()
                .set("d", self.path.clone())
                .set("clip-rule", "evenodd"),
        );
        let defs = std::mem::replace(&mut self.defs, Definitions::new());
        self.defs = defs.add(region);
        self.groups
            .push(Group::new().set("clip-path", format!("url(#{id})")));
    }

    fn set_font_size(&mut self, size: f64) {
        self.font_scale = size;
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn text(&mut self, placement: &TextPlacement) {
        let (anchor, dx) = match placement.h_align {
            Align::Start => ("start", placement.gap),
            Align::Center => ("middle", 0.0),
            Align::End => ("end", -placement.gap),
        };
        let (baseline, dy) = match placement.v_align {
            Align::Start => ("hanging", placement.gap),
            Align::Center => ("central", 0.0),
            Align::End => ("alphabetic", -placement.gap),
        };
        let text = Text::new(placement.content)
            .set(
                "transform",
                format!(
                    "translate({} {}) rotate({})",
                    placement.x,
                    placement.y,
                    placement.rotation.to_degrees()
                ),
            )
            .set("x", dx)
            .set("y", dy)
            .set("font-family", "sans-serif")
            .set("font-size", self.font_size_mm * self.font_scale)
            .set("text-anchor", anchor)
            .set("dominant-baseline", baseline);
        let text = paint(text, "fill", &self.color);
        self.push(text);
    }
}
