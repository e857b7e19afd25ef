//! 2D affine transform stored as a homogeneous 3x3 matrix.
//!
//! ```text
//!   | a  c  e |
//!   | b  d  f |
//!   | 0  0  1 |
//! ```
//!
//! Composition follows the Processing convention: `translate`, `rotate` and
//! `scale` post-multiply the current matrix, so the most recent call acts
//! first on shape coordinates.

use std::ops::Mul;

use nalgebra::{Matrix3, Point2, Vector2};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Transform2D {
    matrix: Matrix3<f64>,
}

impl Default for Transform2D {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform2D {
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            matrix: Matrix3::new_translation(&Vector2::new(x, y)),
        }
    }

    /// Rotation by `angle` radians (clockwise on a y-down canvas).
    pub fn rotation(angle: f64) -> Self {
        Self {
            matrix: Matrix3::new_rotation(angle),
        }
    }

    pub fn scaling(sx: f64, sy: f64) -> Self {
        Self {
            matrix: Matrix3::new_nonuniform_scaling(&Vector2::new(sx, sy)),
        }
    }

    /// `self * other`: apply `other` first, then `self`.
    pub fn then(&self, other: &Transform2D) -> Self {
        Self {
            matrix: self.matrix * other.matrix,
        }
    }

    /// Map a point through the transform.
    pub fn apply(&self, point: Point2<f64>) -> Point2<f64> {
        self.matrix.transform_point(&point)
    }

    pub fn inverse(&self) -> Option<Self> {
        self.matrix.try_inverse().map(|matrix| Self { matrix })
    }

    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    /// The six affine coefficients `[a, b, c, d, e, f]` in SVG/canvas order.
    pub fn coefficients(&self) -> [f64; 6] {
        let m = &self.matrix;
        [
            m[(0, 0)],
            m[(1, 0)],
            m[(0, 1)],
            m[(1, 1)],
            m[(0, 2)],
            m[(1, 2)],
        ]
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }
}

impl Mul for Transform2D {
    type Output = Transform2D;

    fn mul(self, rhs: Transform2D) -> Transform2D {
        self.then(&rhs)
    }
}
