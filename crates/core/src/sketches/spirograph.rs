//! Spirograph from a chain of orbiting circles.
//!
//! Orbits live in one arena; each refers to its parent by index, and a
//! parent always sits before its child, so a single forward pass updates
//! the whole chain.

use std::collections::VecDeque;

use crate::core_types::PVector;
use crate::math::{radians, HALF_PI};
use crate::render::EndShape;
use crate::sketch::{Canvas, Sketch};

/// Speed multiplier between successive orbits (negative alternates direction)
const K: f64 = -4.0;

/// Update steps per frame
const RESOLUTION: u32 = 1;

/// Orbits added after the sun
const CHAIN_LENGTH: usize = 10;

/// Traced positions kept; older ones are dropped first
pub const MAX_PATH_POINTS: usize = 4096;

#[derive(Debug, Clone, PartialEq)]
pub struct Orbit {
    pub x: f64,
    pub y: f64,
    pub r: f64,
    /// Depth in the chain; the sun is 0
    pub level: i32,
    pub parent: Option<usize>,
    pub child: Option<usize>,
    pub speed: f64,
    pub angle: f64,
}

impl Orbit {
    pub fn new(x: f64, y: f64, r: f64, level: i32, parent: Option<usize>) -> Self {
        Self {
            x,
            y,
            r,
            level,
            parent,
            child: None,
            speed: radians(K.powi(level - 1)) / f64::from(RESOLUTION),
            angle: -HALF_PI,
        }
    }
}

#[derive(Debug, Default)]
pub struct Spirograph {
    orbits: Vec<Orbit>,
    path: VecDeque<PVector>,
}

impl Spirograph {
    /// Build the chain: a sun at `(x, y)` with radius `r` and `CHAIN_LENGTH` children.
    pub fn with_sun(x: f64, y: f64, r: f64) -> Self {
        let mut spirograph = Self::default();
        spirograph.reset(x, y, r);
        spirograph
    }

    fn reset(&mut self, x: f64, y: f64, r: f64) {
        self.orbits.clear();
        self.path.clear();
        self.orbits.push(Orbit::new(x, y, r, 0, None));
        let mut next = 0;
        for _ in 0..CHAIN_LENGTH {
            let Some(child) = self.add_child(next) else {
                break;
            };
            next = child;
        }
    }

    /// Attach a child one third the size, touching the parent's right side.
    ///
    /// Returns the child's index, or `None` if `parent` does not exist.
    pub fn add_child(&mut self, parent: usize) -> Option<usize> {
        let p = self.orbits.get(parent)?;
        let r = p.r / 3.0;
        let child = Orbit::new(p.x + p.r + r, p.y, r, p.level + 1, Some(parent));
        let index = self.orbits.len();
        self.orbits.push(child);
        self.orbits[parent].child = Some(index);
        Some(index)
    }

    /// Advance every orbit one step around its parent.
    pub fn update(&mut self) {
        for i in 1..self.orbits.len() {
            let (head, tail) = self.orbits.split_at_mut(i);
            let orbit = &mut tail[0];
            let Some(p) = orbit.parent else {
                continue;
            };
            let parent = &head[p];
            orbit.angle += orbit.speed;
            let rsum = orbit.r + parent.r;
            orbit.x = parent.x + rsum * orbit.angle.cos();
            orbit.y = parent.y + rsum * orbit.angle.sin();
        }
    }

    pub fn orbits(&self) -> &[Orbit] {
        &self.orbits
    }

    /// Positions traced by the last orbit, oldest first
    pub fn path(&self) -> &VecDeque<PVector> {
        &self.path
    }

    fn trace(&mut self) {
        let Some(end) = self.orbits.last() else {
            return;
        };
        if self.path.len() == MAX_PATH_POINTS {
            self.path.pop_front();
        }
        self.path.push_back(PVector::new(end.x, end.y, 0.0));
    }

    fn show_orbit(canvas: &mut Canvas, orbit: &Orbit, parent: Option<&Orbit>) {
        canvas.stroke((255.0, 100.0));
        canvas.stroke_weight(1.0);
        canvas.no_fill();
        if let Some(parent) = parent {
            canvas.line(parent.x, parent.y, orbit.x, orbit.y);
        }
        canvas.ellipse(orbit.x, orbit.y, orbit.r * 2.0, orbit.r * 2.0);
    }
}

impl Sketch for Spirograph {
    fn setup(&mut self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width(), canvas.height());
        self.reset(w / 2.0, h / 2.0, w / 6.0);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(51.0);

        for _ in 0..RESOLUTION {
            self.update();
            self.trace();
        }

        for orbit in &self.orbits {
            let parent = orbit.parent.and_then(|p| self.orbits.get(p));
            Self::show_orbit(canvas, orbit, parent);
        }

        canvas.begin_shape();
        canvas.stroke(255.0);
        canvas.no_fill();
        for &pos in &self.path {
            canvas.vertex_vec(pos);
        }
        canvas.end_shape(EndShape::Open);
    }
}
