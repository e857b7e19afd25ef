//! Wandering cells that split in two when clicked.

use crate::core_types::{Color, PVector};
use crate::math::Random;
use crate::sketch::{Canvas, Sketch};

const START_RADIUS: f64 = 60.0;

/// A daughter cell's radius relative to its parent
const SPLIT_RATIO: f64 = 0.8;

#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub pos: PVector,
    pub r: f64,
    pub color: Color,
}

impl Cell {
    /// Cell at a random spot with a random translucent magenta tint.
    pub fn random(random: &mut Random, width: f64, height: f64) -> Self {
        let pos = PVector::new_2d(random.random(width), random.random(height));
        let red = random.random_range(100.0, 255.0);
        let blue = random.random_range(100.0, 255.0);
        Self {
            pos,
            r: START_RADIUS,
            color: Color::rgba(red, 0.0, blue, 100.0),
        }
    }

    pub fn clicked(&self, x: f64, y: f64) -> bool {
        crate::math::dist(self.pos.x, self.pos.y, x, y) < self.r
    }

    /// Smaller copy at the same position.
    pub fn mitosis(&self) -> Cell {
        Cell {
            pos: self.pos,
            r: self.r * SPLIT_RATIO,
            color: self.color,
        }
    }

    pub fn step(&mut self, random: &mut Random) {
        self.pos += random.random_2d();
    }

    pub fn show(&self, canvas: &mut Canvas) {
        canvas.no_stroke();
        canvas.fill(self.color);
        canvas.ellipse(self.pos.x, self.pos.y, self.r, self.r);
    }
}

#[derive(Debug, Default)]
pub struct Mitosis {
    cells: Vec<Cell>,
}

impl Mitosis {
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Replace every cell containing `(x, y)` with two daughters.
    pub fn split_at(&mut self, x: f64, y: f64) -> usize {
        let mut split = 0;
        for i in (0..self.cells.len()).rev() {
            if self.cells[i].clicked(x, y) {
                let cell = self.cells.remove(i);
                self.cells.push(cell.mitosis());
                self.cells.push(cell.mitosis());
                split += 1;
            }
        }
        split
    }
}

impl Sketch for Mitosis {
    fn setup(&mut self, canvas: &mut Canvas) {
        let (w, h) = (canvas.width(), canvas.height());
        let random = canvas.random_source();
        self.cells = vec![Cell::random(random, w, h), Cell::random(random, w, h)];
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(200.0);
        for cell in &mut self.cells {
            cell.step(canvas.random_source());
            cell.show(canvas);
        }
    }

    fn mouse_pressed(&mut self, canvas: &mut Canvas) {
        self.split_at(canvas.mouse_x(), canvas.mouse_y());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(x: f64, y: f64) -> Cell {
        Cell {
            pos: PVector::new_2d(x, y),
            r: START_RADIUS,
            color: Color::PURPLE,
        }
    }

    #[test]
    fn test_split_replaces_clicked_cell() {
        let mut sketch = Mitosis {
            cells: vec![cell(0.0, 0.0), cell(300.0, 300.0)],
        };
        assert_eq!(sketch.split_at(10.0, 10.0), 1);
        let cells = sketch.cells();
        assert_eq!(cells.len(), 3);
        assert_eq!(cells[0].pos, PVector::new_2d(300.0, 300.0));
        assert!((cells[1].r - 48.0).abs() < 1e-12);
        assert_eq!(cells[2].pos, PVector::new_2d(0.0, 0.0));
    }

    #[test]
    fn test_click_outside_does_nothing() {
        let mut sketch = Mitosis {
            cells: vec![cell(0.0, 0.0)],
        };
        assert_eq!(sketch.split_at(60.0, 0.0), 0);
        assert_eq!(sketch.cells().len(), 1);
    }

    #[test]
    fn test_random_cell_color() {
        let mut random = Random::with_seed(5);
        let c = Cell::random(&mut random, 640.0, 360.0);
        assert!((100.0..=255.0).contains(&c.color.red()));
        assert_eq!(c.color.green(), 0.0);
        assert!((c.color.alpha() - 100.0).abs() < 1e-9);
        assert!(c.pos.x < 640.0 && c.pos.y < 360.0);
    }

    #[test]
    fn test_step_moves_one_unit() {
        let mut random = Random::with_seed(5);
        let mut c = cell(10.0, 10.0);
        c.step(&mut random);
        assert!((c.pos.dist(PVector::new_2d(10.0, 10.0)) - 1.0).abs() < 1e-9);
    }
}
