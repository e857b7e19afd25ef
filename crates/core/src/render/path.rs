//! Vector path geometry.
//!
//! A [`Path`] is a flat list of segments in canvas coordinates (y grows
//! downward, positive angles turn clockwise on screen). Every shape the
//! drawing API knows is first reduced to a path, so renderers only ever
//! deal with lines and Bézier curves.

use std::fmt::Write as _;

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::transform::Transform2D;
use crate::math::TWO_PI;

/// Control-point distance for approximating a quarter ellipse with a cubic
pub const KAPPA: f64 = 0.552_284_749_831;

/// Longest sweep a single cubic segment of an arc may cover
const MAX_ARC_SEGMENT: f64 = std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PathSegment {
    MoveTo(Point2<f64>),
    LineTo(Point2<f64>),
    QuadTo {
        ctrl: Point2<f64>,
        to: Point2<f64>,
    },
    CubicTo {
        ctrl1: Point2<f64>,
        ctrl2: Point2<f64>,
        to: Point2<f64>,
    },
    Close,
}

impl PathSegment {
    /// End point of the segment, if it has one.
    pub fn end_point(&self) -> Option<Point2<f64>> {
        match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(p),
            PathSegment::QuadTo { to, .. } | PathSegment::CubicTo { to, .. } => Some(to),
            PathSegment::Close => None,
        }
    }

    fn transformed(&self, t: &Transform2D) -> PathSegment {
        match *self {
            PathSegment::MoveTo(p) => PathSegment::MoveTo(t.apply(p)),
            PathSegment::LineTo(p) => PathSegment::LineTo(t.apply(p)),
            PathSegment::QuadTo { ctrl, to } => PathSegment::QuadTo {
                ctrl: t.apply(ctrl),
                to: t.apply(to),
            },
            PathSegment::CubicTo { ctrl1, ctrl2, to } => PathSegment::CubicTo {
                ctrl1: t.apply(ctrl1),
                ctrl2: t.apply(ctrl2),
                to: t.apply(to),
            },
            PathSegment::Close => PathSegment::Close,
        }
    }

    fn points(&self) -> impl Iterator<Item = Point2<f64>> {
        let pts: [Option<Point2<f64>>; 3] = match *self {
            PathSegment::MoveTo(p) | PathSegment::LineTo(p) => [Some(p), None, None],
            PathSegment::QuadTo { ctrl, to } => [Some(ctrl), Some(to), None],
            PathSegment::CubicTo { ctrl1, ctrl2, to } => [Some(ctrl1), Some(ctrl2), Some(to)],
            PathSegment::Close => [None, None, None],
        };
        pts.into_iter().flatten()
    }
}

/// Per-corner radii for [`Path::rounded_rect`].
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_right: f64,
    pub bottom_left: f64,
}

impl CornerRadii {
    pub fn uniform(radius: f64) -> Self {
        Self {
            top_left: radius,
            top_right: radius,
            bottom_right: radius,
            bottom_left: radius,
        }
    }

    /// Clamp every radius to `[0, limit]`.
    fn clamped(self, limit: f64) -> Self {
        let clamp = |r: f64| if r > 0.0 { r.min(limit) } else { 0.0 };
        Self {
            top_left: clamp(self.top_left),
            top_right: clamp(self.top_right),
            bottom_right: clamp(self.bottom_right),
            bottom_left: clamp(self.bottom_left),
        }
    }
}

/// How [`Path::arc`] closes the outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ArcMode {
    /// Just the curve
    #[default]
    Open,
    /// Curve plus the straight line joining its ends
    Chord,
    /// Curve plus two radii back to the centre
    Pie,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Path {
    segments: Vec<PathSegment>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// End point of the last drawing segment.
    pub fn current_point(&self) -> Option<Point2<f64>> {
        self.segments.iter().rev().find_map(PathSegment::end_point)
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::MoveTo(Point2::new(x, y)));
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::LineTo(Point2::new(x, y)));
        self
    }

    pub fn quad_to(&mut self, cx: f64, cy: f64, x: f64, y: f64) -> &mut Self {
        self.segments.push(PathSegment::QuadTo {
            ctrl: Point2::new(cx, cy),
            to: Point2::new(x, y),
        });
        self
    }

    pub fn cubic_to(
        &mut self,
        c1x: f64,
        c1y: f64,
        c2x: f64,
        c2y: f64,
        x: f64,
        y: f64,
    ) -> &mut Self {
        self.segments.push(PathSegment::CubicTo {
            ctrl1: Point2::new(c1x, c1y),
            ctrl2: Point2::new(c2x, c2y),
            to: Point2::new(x, y),
        });
        self
    }

    pub fn close(&mut self) -> &mut Self {
        if !matches!(self.segments.last(), None | Some(PathSegment::Close)) {
            self.segments.push(PathSegment::Close);
        }
        self
    }

    pub fn is_closed(&self) -> bool {
        matches!(self.segments.last(), Some(PathSegment::Close))
    }

    // ------------------------------------------------------------------
    // Shape builders
    // ------------------------------------------------------------------

    /// Open polyline through `points`.
    pub fn polyline(points: &[Point2<f64>]) -> Self {
        let mut path = Self::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.move_to(p.x, p.y);
            } else {
                path.line_to(p.x, p.y);
            }
        }
        path
    }

    /// Closed polygon through `points`.
    pub fn polygon(points: &[Point2<f64>]) -> Self {
        let mut path = Self::polyline(points);
        path.close();
        path
    }

    pub fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let mut path = Self::new();
        path.move_to(x1, y1).line_to(x2, y2);
        path
    }

    /// Axis-aligned rectangle from its top-left corner.
    pub fn rect(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut path = Self::new();
        path.move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h)
            .close();
        path
    }

    /// Rectangle with per-corner rounding.
    ///
    /// Corners are visited bottom-right, top-right, top-left, bottom-left.
    /// A rounded corner becomes a line to the point `radius` before the
    /// corner and a cubic to the point `radius` after it, with both control
    /// points on the corner itself. Radii are clamped to half the shorter side.
    pub fn rounded_rect(x: f64, y: f64, w: f64, h: f64, radii: CornerRadii) -> Self {
        let (min_x, max_x) = (x.min(x + w), x.max(x + w));
        let (min_y, max_y) = (y.min(y + h), y.max(y + h));
        let limit = (max_x - min_x).min(max_y - min_y) / 2.0;
        let r = radii.clamped(limit);

        // (corner, step back along the incoming edge, step along the outgoing edge, radius)
        let corners = [
            ((max_x, max_y), (-1.0, 0.0), (0.0, -1.0), r.bottom_right),
            ((max_x, min_y), (0.0, 1.0), (-1.0, 0.0), r.top_right),
            ((min_x, min_y), (1.0, 0.0), (0.0, 1.0), r.top_left),
            ((min_x, max_y), (0.0, -1.0), (1.0, 0.0), r.bottom_left),
        ];

        let mut path = Self::new();
        for (i, &((cx, cy), (bx, by), (ox, oy), radius)) in corners.iter().enumerate() {
            let (entry_x, entry_y) = (cx + bx * radius, cy + by * radius);
            if i == 0 {
                path.move_to(entry_x, entry_y);
            } else {
                path.line_to(entry_x, entry_y);
            }
            if radius > 0.0 {
                path.cubic_to(cx, cy, cx, cy, cx + ox * radius, cy + oy * radius);
            }
        }
        path.close();
        path
    }

    /// Ellipse inscribed in the given bounding box, as four cubics.
    pub fn ellipse(x: f64, y: f64, w: f64, h: f64) -> Self {
        let rx = w / 2.0;
        let ry = h / 2.0;
        let cx = x + rx;
        let cy = y + ry;
        let kx = rx * KAPPA;
        let ky = ry * KAPPA;

        let mut path = Self::new();
        path.move_to(cx + rx, cy)
            .cubic_to(cx + rx, cy + ky, cx + kx, cy + ry, cx, cy + ry)
            .cubic_to(cx - kx, cy + ry, cx - rx, cy + ky, cx - rx, cy)
            .cubic_to(cx - rx, cy - ky, cx - kx, cy - ry, cx, cy - ry)
            .cubic_to(cx + kx, cy - ry, cx + rx, cy - ky, cx + rx, cy)
            .close();
        path
    }

    /// Elliptical arc inside the bounding box from `start` to `stop` radians.
    ///
    /// Nothing is produced when `stop <= start`; sweeps beyond a full turn
    /// are limited to one turn. The sweep is split into cubic segments of at
    /// most a quarter turn each.
    pub fn arc(x: f64, y: f64, w: f64, h: f64, start: f64, stop: f64, mode: ArcMode) -> Self {
        let mut path = Self::new();
        let sweep = stop - start;
        if sweep.is_nan() || sweep <= 0.0 {
            return path;
        }
        let sweep = sweep.min(TWO_PI);

        let rx = w / 2.0;
        let ry = h / 2.0;
        let cx = x + rx;
        let cy = y + ry;
        let point_at = |angle: f64| (cx + rx * angle.cos(), cy + ry * angle.sin());

        let (sx, sy) = point_at(start);
        if mode == ArcMode::Pie {
            path.move_to(cx, cy).line_to(sx, sy);
        } else {
            path.move_to(sx, sy);
        }

        let count = (sweep / MAX_ARC_SEGMENT).ceil().max(1.0);
        let step = sweep / count;
        let k = 4.0 / 3.0 * (step / 4.0).tan();
        let mut a0 = start;
        for _ in 0..count as usize {
            let a1 = a0 + step;
            let (sin0, cos0) = a0.sin_cos();
            let (sin1, cos1) = a1.sin_cos();
            path.cubic_to(
                cx + rx * (cos0 - k * sin0),
                cy + ry * (sin0 + k * cos0),
                cx + rx * (cos1 + k * sin1),
                cy + ry * (sin1 - k * cos1),
                cx + rx * cos1,
                cy + ry * sin1,
            );
            a0 = a1;
        }

        if mode != ArcMode::Open {
            path.close();
        }
        path
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// Copy of the path with every point mapped through `transform`.
    pub fn transformed(&self, transform: &Transform2D) -> Self {
        Self {
            segments: self
                .segments
                .iter()
                .map(|s| s.transformed(transform))
                .collect(),
        }
    }

    /// Bounding box of all end and control points as `(min, max)`.
    pub fn bounds(&self) -> Option<(Point2<f64>, Point2<f64>)> {
        let mut points = self.segments.iter().flat_map(PathSegment::points);
        let first = points.next()?;
        Some(points.fold((first, first), |(min, max), p| {
            (
                Point2::new(min.x.min(p.x), min.y.min(p.y)),
                Point2::new(max.x.max(p.x), max.y.max(p.y)),
            )
        }))
    }

    /// SVG path data (`d` attribute).
    pub fn to_svg_data(&self) -> String {
        let mut d = String::new();
        for segment in &self.segments {
            if !d.is_empty() {
                d.push(' ');
            }
            // Writing to a String cannot fail
            let _ = match *segment {
                PathSegment::MoveTo(p) => write!(d, "M{} {}", p.x, p.y),
                PathSegment::LineTo(p) => write!(d, "L{} {}", p.x, p.y),
                PathSegment::QuadTo { ctrl, to } => {
                    write!(d, "Q{} {} {} {}", ctrl.x, ctrl.y, to.x, to.y)
                }
                PathSegment::CubicTo { ctrl1, ctrl2, to } => write!(
                    d,
                    "C{} {} {} {} {} {}",
                    ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y
                ),
                PathSegment::Close => write!(d, "Z"),
            };
        }
        d
    }
}
