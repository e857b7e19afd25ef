//! Drawing state that travels with every shape.

use serde::{Deserialize, Serialize};

use crate::core_types::Color;

/// Line-end style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeCap {
    /// Half-disc past each end point
    #[default]
    Round,
    /// Flat, ending exactly at the end point
    Square,
    /// Flat, extended by half the stroke weight
    Project,
}

impl StrokeCap {
    pub fn svg_name(self) -> &'static str {
        match self {
            StrokeCap::Round => "round",
            StrokeCap::Square => "butt",
            StrokeCap::Project => "square",
        }
    }
}

/// Corner style where two stroked segments meet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrokeJoin {
    #[default]
    Miter,
    Bevel,
    Round,
}

impl StrokeJoin {
    pub fn svg_name(self) -> &'static str {
        match self {
            StrokeJoin::Miter => "miter",
            StrokeJoin::Bevel => "bevel",
            StrokeJoin::Round => "round",
        }
    }
}

/// How the four numbers passed to `rect`/`ellipse`/`arc` are read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShapeMode {
    /// `(x, y)` is the top-left corner, then width and height
    #[default]
    Corner,
    /// Two opposite corners
    Corners,
    /// `(x, y)` is the centre, then width and height
    Center,
    /// `(x, y)` is the centre, then the two radii
    Radius,
}

impl ShapeMode {
    /// Resolve shape arguments into a bounding box `(x, y, w, h)`.
    pub fn resolve(self, a: f64, b: f64, c: f64, d: f64) -> (f64, f64, f64, f64) {
        match self {
            ShapeMode::Corner => (a, b, c, d),
            ShapeMode::Corners => (a.min(c), b.min(d), (c - a).abs(), (d - b).abs()),
            ShapeMode::Center => (a - c / 2.0, b - d / 2.0, c, d),
            ShapeMode::Radius => (a - c, b - d, c * 2.0, d * 2.0),
        }
    }
}

/// How an open shape started with `begin_shape` is finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EndShape {
    /// Leave the outline open and only stroke it
    #[default]
    Open,
    /// Join the last vertex to the first, then fill and stroke
    Close,
}

/// Resolved stroke paint handed to a renderer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    pub color: Color,
    pub weight: f64,
    pub cap: StrokeCap,
    pub join: StrokeJoin,
}

/// The current drawing style.
///
/// Saved and restored as a whole by `push`/`pop`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrawStyle {
    /// `None` after `no_fill`
    pub fill: Option<Color>,
    /// `None` after `no_stroke`
    pub stroke: Option<Color>,
    pub stroke_weight: f64,
    pub stroke_cap: StrokeCap,
    pub stroke_join: StrokeJoin,
    pub rect_mode: ShapeMode,
    pub ellipse_mode: ShapeMode,
}

impl Default for DrawStyle {
    fn default() -> Self {
        Self {
            fill: Some(Color::WHITE),
            stroke: Some(Color::BLACK),
            stroke_weight: 1.0,
            stroke_cap: StrokeCap::Round,
            stroke_join: StrokeJoin::Miter,
            rect_mode: ShapeMode::Corner,
            ellipse_mode: ShapeMode::Center,
        }
    }
}

impl DrawStyle {
    /// Fill colour, or `None` when filling would draw nothing.
    pub fn fill_paint(&self) -> Option<Color> {
        self.fill.filter(|c| !c.is_invisible())
    }

    /// Stroke paint, or `None` when stroking would draw nothing.
    pub fn stroke_paint(&self) -> Option<Stroke> {
        let color = self.stroke.filter(|c| !c.is_invisible())?;
        if self.stroke_weight <= 0.0 {
            return None;
        }
        Some(Stroke {
            color,
            weight: self.stroke_weight,
            cap: self.stroke_cap,
            join: self.stroke_join,
        })
    }
}
