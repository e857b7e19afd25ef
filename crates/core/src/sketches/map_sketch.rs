//! Circle whose size and colour follow the mouse's x position.

use crate::math::map;
use crate::sketch::{Canvas, Sketch};

#[derive(Debug, Clone, Copy, Default)]
pub struct MapSketch;

impl Sketch for MapSketch {
    fn setup(&mut self, canvas: &mut Canvas) {
        canvas.no_stroke();
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(0.0);
        let (w, h) = (canvas.width(), canvas.height());
        let mx = canvas.mouse_x();

        let c = map(mx, 0.0, w, 0.0, 175.0);
        let d = map(mx, 0.0, w, 40.0, 300.0);
        canvas.fill((255.0, c, 0.0));
        canvas.ellipse(w / 2.0, h / 2.0, d, d);
    }
}
