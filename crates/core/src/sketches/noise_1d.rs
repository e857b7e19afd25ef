//! A ball wandering along one axis, driven by 1D noise, leaving a fading trail.

use crate::sketch::{Canvas, Sketch};

#[derive(Debug, Clone)]
pub struct Noise1D {
    xoff: f64,
    xincrement: f64,
}

impl Default for Noise1D {
    fn default() -> Self {
        Self {
            xoff: 0.0,
            xincrement: 0.01,
        }
    }
}

impl Noise1D {
    pub fn offset(&self) -> f64 {
        self.xoff
    }
}

impl Sketch for Noise1D {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.background(0.0);
        canvas.no_stroke();
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width(), canvas.height());

        // Translucent wash instead of a clear, so old positions fade out
        canvas.fill((0.0, 10.0));
        canvas.rect(0.0, 0.0, w, h);

        let n = canvas.noise(self.xoff) * w;
        self.xoff += self.xincrement;

        canvas.fill(200.0);
        canvas.ellipse(n, h / 2.0, 64.0, 64.0);
    }
}
