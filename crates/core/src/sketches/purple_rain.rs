//! Purple rain: streaks falling at depth-dependent speeds.

use rayon::prelude::*;

use crate::core_types::Color;
use crate::math::{map, Random};
use crate::sketch::{Canvas, Sketch};

pub const DROP_COUNT: usize = 500;

/// Depth range; nearer drops are longer, thicker and faster
const MAX_DEPTH: f64 = 20.0;

#[derive(Debug, Clone, PartialEq)]
pub struct RainDrop {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub len: f64,
    pub yspeed: f64,
    /// Fell past the bottom edge and waits for a new start height
    pub needs_reset: bool,
}

impl RainDrop {
    pub fn new(random: &mut Random, width: f64) -> Self {
        let z = random.random_range(0.0, MAX_DEPTH);
        Self {
            x: random.random(width),
            y: random.random_range(-500.0, -50.0),
            z,
            len: map(z, 0.0, MAX_DEPTH, 10.0, 20.0),
            yspeed: map(z, 0.0, MAX_DEPTH, 1.0, 20.0),
            needs_reset: false,
        }
    }

    /// Advance one frame with depth-scaled gravity.
    pub fn fall(&mut self, height: f64) {
        self.y += self.yspeed;
        self.yspeed += map(self.z, 0.0, MAX_DEPTH, 0.0, 0.2);
        if self.y > height {
            self.needs_reset = true;
        }
    }

    /// Put the drop back above the top edge.
    pub fn reset(&mut self, random: &mut Random) {
        self.y = random.random_range(-200.0, -100.0);
        self.yspeed = map(self.z, 0.0, MAX_DEPTH, 4.0, 10.0);
        self.needs_reset = false;
    }

    pub fn show(&self, canvas: &mut Canvas) {
        canvas.stroke_weight(map(self.z, 0.0, MAX_DEPTH, 1.0, 3.0));
        canvas.stroke(Color::PURPLE);
        canvas.line(self.x, self.y, self.x, self.y + self.len);
    }
}

#[derive(Debug, Default)]
pub struct PurpleRain {
    drops: Vec<RainDrop>,
}

impl PurpleRain {
    pub fn drops(&self) -> &[RainDrop] {
        &self.drops
    }
}

impl Sketch for PurpleRain {
    fn setup(&mut self, canvas: &mut Canvas) {
        let width = canvas.width();
        let random = canvas.random_source();
        self.drops = (0..DROP_COUNT).map(|_| RainDrop::new(random, width)).collect();
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(10.0);

        let height = canvas.height();
        self.drops.par_iter_mut().for_each(|drop| drop.fall(height));

        // Resets draw from the canvas's seeded source, so they stay sequential
        let random = canvas.random_source();
        for drop in self.drops.iter_mut().filter(|d| d.needs_reset) {
            drop.reset(random);
        }

        for drop in &self.drops {
            drop.show(canvas);
        }
    }
}
