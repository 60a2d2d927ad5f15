//! Rendering surfaces.
//!
//! A [`Drawing`] knows nothing about any graphics toolkit; it is replayed onto anything
//! implementing [`Canvas`].

use crate::interpreter::{DrawCommand, Drawing};
use crate::palette::Color;
use glam::Vec2;
use svg::Document;
use svg::node::element::{Line, Rectangle};

/// Minimal drawing capability.
pub trait Canvas {
    /// Lifts the pen and places it at `p`.
    fn move_to(&mut self, p: Vec2);

    /// Draws a line from the current point to `p`.
    fn line_to(&mut self, p: Vec2, color: Color);
}

impl Drawing {
    /// Replays every command onto `canvas` in order.
    pub fn render<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        for command in &self.commands {
            match *command {
                DrawCommand::MoveTo(p) => canvas.move_to(p),
                DrawCommand::LineTo { to, color } => canvas.line_to(to, color),
            }
        }
    }

    /// Extent of all drawn segments, or `None` when nothing was drawn.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for s in &self.segments {
            for p in [s.from, s.to] {
                match bounds.as_mut() {
                    Some(b) => b.include(p),
                    None => bounds = Some(Bounds { min: p, max: p }),
                }
            }
        }
        bounds
    }
}

/// Axis-aligned bounding box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn include(&mut self, p: Vec2) {
        self.min = self.min.min(p);
        self.max = self.max.max(p);
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }
}

/// Records commands verbatim.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Recorder {
    pub commands: Vec<DrawCommand>,
}

impl Canvas for Recorder {
    fn move_to(&mut self, p: Vec2) {
        self.commands.push(DrawCommand::MoveTo(p));
    }

    fn line_to(&mut self, p: Vec2, color: Color) {
        self.commands.push(DrawCommand::LineTo { to: p, color });
    }
}

/// Builds an SVG document from line commands.
///
/// World coordinates have Y pointing up; the document flips Y so drawings appear upright.
#[derive(Clone, Debug)]
pub struct SvgCanvas {
    cursor: Vec2,
    lines: Vec<(Vec2, Vec2, Color)>,
    bounds: Option<Bounds>,
    /// Padding around the drawing, in world units.
    pub margin: f32,
    pub stroke_width: f32,
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self {
            cursor: Vec2::ZERO,
            lines: Vec::new(),
            bounds: None,
            margin: 10.0,
            stroke_width: 1.0,
        }
    }
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    fn include(&mut self, p: Vec2) {
        match self.bounds.as_mut() {
            Some(b) => b.include(p),
            None => self.bounds = Some(Bounds { min: p, max: p }),
        }
    }

    /// Produces the SVG document. An empty canvas yields a blank `2 * margin` square.
    pub fn finish(&self) -> String {
        let bounds = self.bounds.unwrap_or(Bounds {
            min: Vec2::ZERO,
            max: Vec2::ZERO,
        });
        let origin = Vec2::new(bounds.min.x - self.margin, -bounds.max.y - self.margin);
        let size = bounds.size() + Vec2::splat(2.0 * self.margin);

        let background = Rectangle::new()
            .set("x", origin.x)
            .set("y", origin.y)
            .set("width", size.x)
            .set("height", size.y)
            .set("fill", "white");

        let mut document = Document::new()
            .set("viewBox", (origin.x, origin.y, size.x, size.y))
            .set("width", size.x.ceil())
            .set("height", size.y.ceil())
            .add(background);

        for (a, b, color) in &self.lines {
            let line = Line::new()
                .set("x1", a.x)
                .set("y1", -a.y)
                .set("x2", b.x)
                .set("y2", -b.y)
                .set("stroke", color.to_string())
                .set("stroke-width", self.stroke_width)
                .set("stroke-linecap", "round");
            document = document.add(line);
        }

        document.to_string()
    }
}

impl Canvas for SvgCanvas {
    fn move_to(&mut self, p: Vec2) {
        self.cursor = p;
    }

    fn line_to(&mut self, p: Vec2, color: Color) {
        let from = self.cursor;
        self.include(from);
        self.include(p);
        self.lines.push((from, p, color));
        self.cursor = p;
    }
}
