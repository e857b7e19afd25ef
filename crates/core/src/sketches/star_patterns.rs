//! Islamic star patterns by Hankin's method.
//!
//! From the midpoint of every polygon edge two rays ("hankins") leave at a
//! contact angle. Each ray is cut where it first meets a ray from another
//! edge at equal distance from both starting points.

use crate::core_types::PVector;
use crate::math::radians;
use crate::sketch::{Canvas, Sketch, SliderId};

/// Grid cell size in pixels
const TILE: f64 = 100.0;

const DEFAULT_ANGLE: f64 = 75.0;
const DEFAULT_DELTA: f64 = 10.0;

/// Two candidate intersections count as equidistant below this difference
const EQUAL_DISTANCE_TOLERANCE: f64 = 0.001;

/// A ray from `a` along `v`, cut at `end` once an intersection is found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hankin {
    pub a: PVector,
    pub v: PVector,
    pub end: Option<PVector>,
    prev_d: f64,
}

impl Hankin {
    pub fn new(a: PVector, v: PVector) -> Self {
        Self {
            a,
            v,
            end: None,
            prev_d: 0.0,
        }
    }

    /// Intersect with `other` (Bourke line-line intersection) and keep the
    /// nearest equidistant crossing ahead of both rays.
    pub fn find_end(&mut self, other: &Hankin) {
        let den = other.v.y * self.v.x - other.v.x * self.v.y;
        if den == 0.0 {
            return;
        }

        let numa = other.v.x * (self.a.y - other.a.y) - other.v.y * (self.a.x - other.a.x);
        let numb = self.v.x * (self.a.y - other.a.y) - self.v.y * (self.a.x - other.a.x);
        let ua = numa / den;
        let ub = numb / den;
        if ua <= 0.0 || ub <= 0.0 {
            return;
        }

        let candidate = PVector::new_2d(self.a.x + ua * self.v.x, self.a.y + ua * self.v.y);
        let d1 = candidate.dist(self.a);
        let d2 = candidate.dist(other.a);
        let d = d1 + d2;
        if (d1 - d2).abs() < EQUAL_DISTANCE_TOLERANCE && (self.end.is_none() || d < self.prev_d) {
            self.end = Some(candidate);
            self.prev_d = d;
        }
    }

    pub fn show(&self, canvas: &mut Canvas) {
        canvas.stroke((255.0, 0.0, 255.0));
        if let Some(end) = self.end {
            canvas.line_between(self.a, end);
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub a: PVector,
    pub b: PVector,
    pub h1: Option<Hankin>,
    pub h2: Option<Hankin>,
}

impl Edge {
    pub fn new(a: PVector, b: PVector) -> Self {
        Self {
            a,
            b,
            h1: None,
            h2: None,
        }
    }

    /// Rebuild both hankins for contact `angle` (degrees) and midpoint offset `delta`.
    pub fn hankin(&mut self, angle: f64, delta: f64) {
        let mid = (self.a + self.b) * 0.5;
        let mut v1 = self.a - mid;
        let mut v2 = self.b - mid;
        let mut offset1 = mid;
        let mut offset2 = mid;
        if delta > 0.0 {
            v1.set_mag(delta);
            v2.set_mag(delta);
            offset1 = mid + v2;
            offset2 = mid + v1;
        }

        v1.normalize().rotate(radians(-angle));
        v2.normalize().rotate(radians(angle));

        self.h1 = Some(Hankin::new(offset1, v1));
        self.h2 = Some(Hankin::new(offset2, v2));
    }

    fn find_ends(&mut self, other_h1: Option<&Hankin>, other_h2: Option<&Hankin>) {
        for own in [self.h1.as_mut(), self.h2.as_mut()].into_iter().flatten() {
            for other in [other_h1, other_h2].into_iter().flatten() {
                own.find_end(other);
            }
        }
    }

    pub fn show(&self, canvas: &mut Canvas) {
        canvas.stroke((255.0, 50.0));
        for h in [&self.h1, &self.h2].into_iter().flatten() {
            h.show(canvas);
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    vertices: Vec<PVector>,
    edges: Vec<Edge>,
}

impl Polygon {
    pub fn add_vertex(&mut self, x: f64, y: f64) {
        let a = PVector::new_2d(x, y);
        if let Some(&prev) = self.vertices.last() {
            self.edges.push(Edge::new(prev, a));
        }
        self.vertices.push(a);
    }

    /// Add the edge from the last vertex back to the first.
    pub fn close(&mut self) {
        if let (Some(&last), Some(&first)) = (self.vertices.last(), self.vertices.first()) {
            self.edges.push(Edge::new(last, first));
        }
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn hankin(&mut self, angle: f64, delta: f64) {
        for edge in &mut self.edges {
            edge.hankin(angle, delta);
        }

        for i in 0..self.edges.len() {
            for j in 0..self.edges.len() {
                if i != j {
                    let (h1, h2) = (self.edges[j].h1, self.edges[j].h2);
                    self.edges[i].find_ends(h1.as_ref(), h2.as_ref());
                }
            }
        }
    }

    pub fn show(&self, canvas: &mut Canvas) {
        for edge in &self.edges {
            edge.show(canvas);
        }
    }
}

#[derive(Debug, Default)]
pub struct StarPatterns {
    polys: Vec<Polygon>,
    delta: Option<SliderId>,
    angle: Option<SliderId>,
}

impl StarPatterns {
    pub fn polygons(&self) -> &[Polygon] {
        &self.polys
    }
}

/// Square tile with its top-left corner at `(x, y)`.
pub fn square_tile(x: f64, y: f64, size: f64) -> Polygon {
    let mut poly = Polygon::default();
    poly.add_vertex(x, y);
    poly.add_vertex(x + size, y);
    poly.add_vertex(x + size, y + size);
    poly.add_vertex(x, y + size);
    poly.close();
    poly
}

impl Sketch for StarPatterns {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.background(51.0);
        self.delta = Some(canvas.create_slider(10.0, 25.0, DEFAULT_DELTA, 1.0));
        self.angle = Some(canvas.create_slider(75.0, 90.0, DEFAULT_ANGLE, 1.0));

        let (w, h) = (canvas.width(), canvas.height());
        self.polys.clear();
        let mut x = 0.0;
        while x < w {
            let mut y = 0.0;
            while y < h {
                self.polys.push(square_tile(x, y, TILE));
                y += TILE;
            }
            x += TILE;
        }
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(51.0);
        let angle = self
            .angle
            .and_then(|id| canvas.slider_value(id))
            .unwrap_or(DEFAULT_ANGLE);
        let delta = self
            .delta
            .and_then(|id| canvas.slider_value(id))
            .unwrap_or(DEFAULT_DELTA);

        for poly in &mut self.polys {
            poly.hankin(angle, delta);
            poly.show(canvas);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_tile_edges() {
        let poly = square_tile(0.0, 0.0, 100.0);
        assert_eq!(poly.edges().len(), 4);
        let closing = &poly.edges()[3];
        assert_eq!(closing.a, PVector::new_2d(0.0, 100.0));
        assert_eq!(closing.b, PVector::new_2d(0.0, 0.0));
    }

    #[test]
    fn test_edge_hankin_offsets() {
        let mut edge = Edge::new(PVector::new_2d(0.0, 0.0), PVector::new_2d(100.0, 0.0));
        edge.hankin(75.0, 10.0);
        let h1 = edge.h1.unwrap();
        let h2 = edge.h2.unwrap();
        assert_eq!(h1.a, PVector::new_2d(60.0, 0.0));
        assert_eq!(h2.a, PVector::new_2d(40.0, 0.0));
        assert_relative_eq!(h1.v.mag(), 1.0, epsilon = 1e-12);
        // Both rays point into the tile (y grows downward)
        assert!(h1.v.y > 0.0 && h1.v.x < 0.0);
        assert!(h2.v.y > 0.0 && h2.v.x > 0.0);
    }

    #[test]
    fn test_every_hankin_finds_an_end_inside_the_tile() {
        let mut poly = square_tile(0.0, 0.0, 100.0);
        poly.hankin(75.0, 10.0);
        for edge in poly.edges() {
            for h in [edge.h1.unwrap(), edge.h2.unwrap()] {
                let end = h.end.expect("hankin without an end");
                assert!((0.0..=100.0).contains(&end.x), "{end}");
                assert!((0.0..=100.0).contains(&end.y), "{end}");
            }
        }
        // Top edge's first ray meets the left edge's mirror ray on the diagonal
        let end = poly.edges()[0].h1.unwrap().end.unwrap();
        assert_relative_eq!(end.x, end.y, epsilon = 1e-9);
        assert_relative_eq!(end.x, 47.320_508, epsilon = 1e-5);
    }

    #[test]
    fn test_parallel_rays_never_meet() {
        let mut h = Hankin::new(PVector::new_2d(0.0, 0.0), PVector::new_2d(1.0, 0.0));
        h.find_end(&Hankin::new(PVector::new_2d(0.0, 5.0), PVector::new_2d(1.0, 0.0)));
        assert!(h.end.is_none());
    }
}
