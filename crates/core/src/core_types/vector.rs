//! 3D vector value type for positions, velocities, and forces.
//!
//! `PVector` is the Processing-style vector used by every sketch that moves
//! points around. It is a plain `Copy` value: operations either mutate the
//! receiver in place or return a new vector, and nothing is shared.
//!
//! # Degenerate inputs
//!
//! Magnitude-based operations follow IEEE-754 instead of checking for zero:
//! normalizing the zero vector yields NaN components, and dividing by zero
//! yields infinities. Callers that can produce a zero vector must guard
//! against it themselves.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use nalgebra::Vector3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of components in a vector, and the only accepted slice length.
const COMPONENTS: usize = 3;

/// A point or displacement in 3D space (z = 0 for 2D use).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Errors from building a vector out of a sequence of components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorError {
    /// The sequence did not contain exactly three components
    InvalidLength { expected: usize, actual: usize },
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VectorError::InvalidLength { expected, actual } => {
                write!(f, "Expected {expected} vector components, got {actual}")
            }
        }
    }
}

impl std::error::Error for VectorError {}

/// Primitive numbers usable as vector components.
///
/// 64-bit integers above 2^53 round to the nearest representable `f64`.
pub trait Component: Copy {
    fn to_component(self) -> f64;
}

macro_rules! impl_component {
    ($($t:ty),*) => {
        $(
            impl Component for $t {
                #[inline]
                #[allow(clippy::cast_lossless)]
                fn to_component(self) -> f64 {
                    self as f64
                }
            }
        )*
    };
}

impl Component for f64 {
    #[inline]
    fn to_component(self) -> f64 {
        self
    }
}

impl_component!(f32, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl PVector {
    /// The zero vector `(0, 0, 0)`.
    pub const ZERO: PVector = PVector {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a vector from three components.
    ///
    /// Accepts any primitive number, so integer and `f32` inputs produce the
    /// same vector as their `f64` equivalents.
    ///
    /// ```
    /// use sketchbook_core::PVector;
    ///
    /// assert_eq!(PVector::new(1, 2, 3), PVector::new(1.0, 2.0, 3.0));
    /// assert_eq!(PVector::new(1_usize, 2_i64, 3_u64), PVector::new(1, 2, 3));
    /// ```
    pub fn new(x: impl Component, y: impl Component, z: impl Component) -> Self {
        Self {
            x: x.to_component(),
            y: y.to_component(),
            z: z.to_component(),
        }
    }

    /// Create a 2D vector (z = 0).
    pub fn new_2d(x: impl Component, y: impl Component) -> Self {
        Self::new(x, y, 0.0)
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::ZERO
    }

    /// Create a vector from a slice of exactly three components.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidLength`] if `values.len() != 3`.
    pub fn from_slice(values: &[f64]) -> Result<Self, VectorError> {
        match *values {
            [x, y, z] => Ok(Self { x, y, z }),
            _ => Err(VectorError::InvalidLength {
                expected: COMPONENTS,
                actual: values.len(),
            }),
        }
    }

    /// Unit vector in the XY plane pointing at `theta` radians.
    pub fn from_angle(theta: f64) -> Self {
        Self::new(theta.cos(), theta.sin(), 0.0)
    }

    /// Random unit vector in the XY plane, using the thread-local RNG.
    pub fn random_2d() -> Self {
        Self::random_2d_with(&mut rand::rng())
    }

    /// Random unit vector in the XY plane drawn from `rng`.
    pub fn random_2d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_angle(rng.random_range(0.0..TAU))
    }

    /// Random unit vector uniformly distributed over the sphere, using the
    /// thread-local RNG.
    pub fn random_3d() -> Self {
        Self::random_3d_with(&mut rand::rng())
    }

    /// Random unit vector uniformly distributed over the sphere, drawn from `rng`.
    ///
    /// Uses Archimedes' hat-box theorem: a uniform height on `[-1, 1]` and a
    /// uniform azimuth give a uniform point on the sphere surface.
    pub fn random_3d_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let z: f64 = rng.random_range(-1.0..=1.0);
        let theta = rng.random_range(0.0..TAU);
        let ring = (1.0 - z * z).max(0.0).sqrt();
        Self::new(ring * theta.cos(), ring * theta.sin(), z)
    }

    // ------------------------------------------------------------------
    // Setting
    // ------------------------------------------------------------------

    /// Overwrite all three components.
    pub fn set_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Copy the components of `v` into this vector.
    pub fn set(&mut self, v: PVector) -> &mut Self {
        *self = v;
        self
    }

    /// Overwrite the components from a slice of exactly three values.
    ///
    /// The vector is left untouched when the length is wrong.
    ///
    /// # Errors
    /// Returns [`VectorError::InvalidLength`] if `values.len() != 3`.
    pub fn set_slice(&mut self, values: &[f64]) -> Result<&mut Self, VectorError> {
        *self = Self::from_slice(values)?;
        Ok(self)
    }

    // ------------------------------------------------------------------
    // Arithmetic
    // ------------------------------------------------------------------

    /// Add scalar components in place.
    pub fn add_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x += x;
        self.y += y;
        self.z += z;
        self
    }

    /// Subtract scalar components in place.
    pub fn sub_xyz(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x -= x;
        self.y -= y;
        self.z -= z;
        self
    }

    /// `a + b`.
    pub fn sum(a: PVector, b: PVector) -> PVector {
        a + b
    }

    /// `a - b`.
    pub fn difference(a: PVector, b: PVector) -> PVector {
        a - b
    }

    /// `v * n`.
    pub fn product(v: PVector, n: f64) -> PVector {
        v * n
    }

    /// `v / n`. Division by zero is not checked.
    pub fn quotient(v: PVector, n: f64) -> PVector {
        v / n
    }

    // ------------------------------------------------------------------
    // Scalar queries
    // ------------------------------------------------------------------

    /// Euclidean length.
    pub fn mag(self) -> f64 {
        self.mag_sq().sqrt()
    }

    /// Squared length; cheaper than [`mag`](Self::mag) for comparisons.
    pub fn mag_sq(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// 2D angle of the vector in radians, `atan2(y, x)`.
    pub fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Dot product. Also callable as `PVector::dot(a, b)`.
    pub fn dot(self, v: PVector) -> f64 {
        self.x * v.x + self.y * v.y + self.z * v.z
    }

    /// Dot product with scalar components.
    pub fn dot_xyz(self, x: f64, y: f64, z: f64) -> f64 {
        self.dot(PVector { x, y, z })
    }

    /// Cross product. Also callable as `PVector::cross(a, b)`.
    pub fn cross(self, v: PVector) -> PVector {
        PVector {
            x: self.y * v.z - self.z * v.y,
            y: self.z * v.x - self.x * v.z,
            z: self.x * v.y - self.y * v.x,
        }
    }

    /// Euclidean distance between two points. Also callable as `PVector::dist(a, b)`.
    pub fn dist(self, v: PVector) -> f64 {
        (self - v).mag()
    }

    /// Euclidean distance between two points.
    pub fn distance(a: PVector, b: PVector) -> f64 {
        a.dist(b)
    }

    /// Angle between two vectors in radians, in `[0, π]`.
    ///
    /// The cosine is clamped to `[-1, 1]` so rounding noise on parallel
    /// vectors cannot produce NaN. Zero-length inputs still yield NaN.
    pub fn angle_between(a: PVector, b: PVector) -> f64 {
        let cosine = a.dot(b) / (a.mag() * b.mag());
        cosine.clamp(-1.0, 1.0).acos()
    }

    /// `cos(dot(a, b) / (|a| |b|))`.
    ///
    /// This is the historical `angleBetween` formula. Note that it applies
    /// `cos` to a value that is already a cosine, so it is neither the angle
    /// nor its cosine. Prefer [`angle_between`](Self::angle_between) for new code.
    pub fn cosine_between(a: PVector, b: PVector) -> f64 {
        (a.dot(b) / (a.mag() * b.mag())).cos()
    }

    // ------------------------------------------------------------------
    // Geometric transforms
    // ------------------------------------------------------------------

    /// Rescale to unit length in place. The zero vector becomes NaN.
    pub fn normalize(&mut self) -> &mut Self {
        *self = self.normalized();
        self
    }

    /// Unit-length copy of this vector. The zero vector becomes NaN.
    pub fn normalized(self) -> PVector {
        self / self.mag()
    }

    /// Clamp the magnitude to at most `max`, keeping the direction.
    pub fn limit(&mut self, max: f64) -> &mut Self {
        *self = self.limited(max);
        self
    }

    /// Copy of this vector with magnitude clamped to at most `max`.
    pub fn limited(self, max: f64) -> PVector {
        let m_sq = self.mag_sq();
        if m_sq > max * max {
            self / m_sq.sqrt() * max
        } else {
            self
        }
    }

    /// Set the magnitude in place, keeping the direction.
    pub fn set_mag(&mut self, mag: f64) -> &mut Self {
        *self = self.with_mag(mag);
        self
    }

    /// Copy of this vector rescaled to magnitude `mag`.
    pub fn with_mag(self, mag: f64) -> PVector {
        self.normalized() * mag
    }

    /// Rotate in the XY plane by `angle` radians (2D only).
    ///
    /// x and y are rebuilt from `heading() + angle` and the full 3D
    /// magnitude; z is left unchanged. Only meaningful when z = 0.
    pub fn rotate(&mut self, angle: f64) -> &mut Self {
        *self = self.rotated(angle);
        self
    }

    /// Copy of this vector rotated in the XY plane by `angle` radians.
    pub fn rotated(self, angle: f64) -> PVector {
        let heading = self.heading() + angle;
        let mag = self.mag();
        PVector {
            x: heading.cos() * mag,
            y: heading.sin() * mag,
            z: self.z,
        }
    }

    /// Linear interpolation towards `v` by fraction `t` (not clamped).
    ///
    /// Also callable as `PVector::lerp(a, b, t)`.
    pub fn lerp(self, v: PVector, t: f64) -> PVector {
        PVector {
            x: self.x + (v.x - self.x) * t,
            y: self.y + (v.y - self.y) * t,
            z: self.z + (v.z - self.z) * t,
        }
    }

    /// Linear interpolation towards the point `(x, y, z)`.
    pub fn lerp_xyz(self, x: f64, y: f64, z: f64, t: f64) -> PVector {
        self.lerp(PVector { x, y, z }, t)
    }

    /// Components as an independent `[x, y, z]` array.
    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl fmt::Display for PVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {}, {}, {} ]", self.x, self.y, self.z)
    }
}

impl From<[f64; 3]> for PVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self { x, y, z }
    }
}

impl From<PVector> for [f64; 3] {
    fn from(v: PVector) -> Self {
        v.to_array()
    }
}

impl TryFrom<&[f64]> for PVector {
    type Error = VectorError;

    fn try_from(values: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(values)
    }
}

impl TryFrom<Vec<f64>> for PVector {
    type Error = VectorError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&values)
    }
}

impl From<Vector3<f64>> for PVector {
    fn from(v: Vector3<f64>) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

impl From<PVector> for Vector3<f64> {
    fn from(v: PVector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl Index<usize> for PVector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("PVector index out of range: {index}"),
        }
    }
}

impl IndexMut<usize> for PVector {
    fn index_mut(&mut self, index: usize) -> &mut f64 {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("PVector index out of range: {index}"),
        }
    }
}

impl Add for PVector {
    type Output = PVector;

    fn add(self, rhs: PVector) -> PVector {
        PVector {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
            z: self.z + rhs.z,
        }
    }
}

impl AddAssign for PVector {
    fn add_assign(&mut self, rhs: PVector) {
        *self = *self + rhs;
    }
}

impl Sub for PVector {
    type Output = PVector;

    fn sub(self, rhs: PVector) -> PVector {
        PVector {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
            z: self.z - rhs.z,
        }
    }
}

impl SubAssign for PVector {
    fn sub_assign(&mut self, rhs: PVector) {
        *self = *self - rhs;
    }
}

impl Mul<f64> for PVector {
    type Output = PVector;

    fn mul(self, n: f64) -> PVector {
        PVector {
            x: self.x * n,
            y: self.y * n,
            z: self.z * n,
        }
    }
}

impl Mul<PVector> for f64 {
    type Output = PVector;

    fn mul(self, v: PVector) -> PVector {
        v * self
    }
}

impl MulAssign<f64> for PVector {
    fn mul_assign(&mut self, n: f64) {
        *self = *self * n;
    }
}

impl Div<f64> for PVector {
    type Output = PVector;

    fn div(self, n: f64) -> PVector {
        PVector {
            x: self.x / n,
            y: self.y / n,
            z: self.z / n,
        }
    }
}

impl DivAssign<f64> for PVector {
    fn div_assign(&mut self, n: f64) {
        *self = *self / n;
    }
}

impl Neg for PVector {
    type Output = PVector;

    fn neg(self) -> PVector {
        PVector {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}
