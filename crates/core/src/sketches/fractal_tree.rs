//! Recursive fractal tree; a slider sets the branching angle.

use crate::math::{PI, TWO_PI};
use crate::sketch::{Canvas, Sketch, SliderId};

/// Each child branch is this fraction of its parent
const SHRINK: f64 = 0.67;

/// Branches shorter than this end the recursion
const MIN_BRANCH: f64 = 4.0;

#[derive(Debug, Default)]
pub struct FractalTree {
    angle: Option<SliderId>,
}

impl FractalTree {
    pub fn angle_slider(&self) -> Option<SliderId> {
        self.angle
    }
}

/// Draw one branch up the local y axis, then two rotated children.
fn branch(canvas: &mut Canvas, len: f64, angle: f64) {
    canvas.line(0.0, 0.0, 0.0, -len);
    canvas.translate(0.0, -len);
    if len > MIN_BRANCH {
        canvas.push();
        canvas.rotate(angle);
        branch(canvas, len * SHRINK, angle);
        canvas.pop();

        canvas.push();
        canvas.rotate(-angle);
        branch(canvas, len * SHRINK, angle);
        canvas.pop();
    }
}

impl Sketch for FractalTree {
    fn setup(&mut self, canvas: &mut Canvas) {
        self.angle = Some(canvas.create_slider(0.0, TWO_PI, PI / 4.0, 0.01));
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        let angle = self
            .angle
            .and_then(|id| canvas.slider_value(id))
            .unwrap_or(PI / 4.0);

        canvas.stroke_weight(1.0);
        canvas.background(20.0);
        canvas.stroke(255.0);

        let (w, h) = (canvas.width(), canvas.height());
        canvas.translate(w / 2.0, h);
        branch(canvas, h * 0.3, angle);
    }
}
