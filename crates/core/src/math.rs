//! Calculation, trigonometry and random-number helpers.
//!
//! These mirror the Processing reference so sketches read the same way.
//! Everything that the standard library already provides (`abs`, `floor`,
//! `sqrt`, `atan2`, ...) is left to `f64`'s own methods.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core_types::PVector;

pub const HALF_PI: f64 = std::f64::consts::FRAC_PI_2;
pub const PI: f64 = std::f64::consts::PI;
pub const QUARTER_PI: f64 = std::f64::consts::FRAC_PI_4;
pub const TWO_PI: f64 = std::f64::consts::TAU;
pub const TAU: f64 = std::f64::consts::TAU;

// ============================================================================
// Calculation
// ============================================================================

/// Clamp `amt` to `[low, high]`.
#[inline]
pub fn constrain(amt: f64, low: f64, high: f64) -> f64 {
    amt.max(low).min(high)
}

/// Distance between two 2D points.
#[inline]
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    (sq(x2 - x1) + sq(y2 - y1)).sqrt()
}

/// Interpolate between `start` and `stop`; `amt` is clamped to `[0, 1]`.
///
/// Unlike [`PVector::lerp`], the scalar form never extrapolates.
#[inline]
pub fn lerp(start: f64, stop: f64, amt: f64) -> f64 {
    start + (stop - start) * constrain(amt, 0.0, 1.0)
}

/// Length of the vector `(a, b, c)`.
#[inline]
pub fn mag(a: f64, b: f64, c: f64) -> f64 {
    PVector::new(a, b, c).mag()
}

/// Re-map `value` from `[start1, stop1]` onto `[start2, stop2]` (no clamping).
#[inline]
pub fn map(value: f64, start1: f64, stop1: f64, start2: f64, stop2: f64) -> f64 {
    start2 + (stop2 - start2) * (value - start1) / (stop1 - start1)
}

/// Normalise `value` from `[start, stop]` onto `[0, 1]` (no clamping).
#[inline]
pub fn norm(value: f64, start: f64, stop: f64) -> f64 {
    map(value, start, stop, 0.0, 1.0)
}

#[inline]
pub fn sq(n: f64) -> f64 {
    n * n
}

// ============================================================================
// Trigonometry
// ============================================================================

#[inline]
pub fn degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

#[inline]
pub fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

// ============================================================================
// Random
// ============================================================================

/// Seedable random source used by a sketch.
///
/// Each canvas owns one, so reseeding a sketch makes its whole run
/// reproducible without touching any process-wide state.
#[derive(Debug, Clone)]
pub struct Random {
    rng: StdRng,
}

impl Default for Random {
    fn default() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Random {
    /// Deterministic source for the given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Restart the sequence from `seed`.
    pub fn random_seed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    /// Uniform value in `[0, high)`.
    pub fn random(&mut self, high: f64) -> f64 {
        self.random_range(0.0, high)
    }

    /// Uniform value in `[low, high)`. Returns `low` when the range is empty.
    pub fn random_range(&mut self, low: f64, high: f64) -> f64 {
        if low < high {
            self.rng.random_range(low..high)
        } else {
            low
        }
    }

    /// Standard normal sample (mean 0, deviation 1), via Box–Muller.
    pub fn random_gaussian(&mut self) -> f64 {
        // 1 - [0, 1) keeps the log argument strictly positive
        let u1 = 1.0 - self.rng.random::<f64>();
        let u2 = self.rng.random::<f64>();
        (-2.0 * u1.ln()).sqrt() * (TWO_PI * u2).cos()
    }

    /// Random unit vector in the XY plane.
    pub fn random_2d(&mut self) -> PVector {
        PVector::random_2d_with(&mut self.rng)
    }

    /// Random unit vector on the sphere.
    pub fn random_3d(&mut self) -> PVector {
        PVector::random_3d_with(&mut self.rng)
    }

    /// Underlying generator, for APIs that take any `rand::Rng`.
    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constrain() {
        assert_eq!(constrain(5.0, 0.0, 3.0), 3.0);
        assert_eq!(constrain(-5.0, 0.0, 3.0), 0.0);
        assert_eq!(constrain(1.5, 0.0, 3.0), 1.5);
    }

    #[test]
    fn test_map_and_norm() {
        assert_eq!(map(320.0, 0.0, 640.0, 0.0, 175.0), 87.5);
        assert_eq!(map(0.5, 0.0, 1.0, 10.0, 20.0), 15.0);
        // Not clamped
        assert_eq!(map(2.0, 0.0, 1.0, 10.0, 20.0), 30.0);
        assert_eq!(norm(25.0, 0.0, 100.0), 0.25);
    }

    #[test]
    fn test_scalar_lerp_clamps() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 10.0);
        assert_eq!(lerp(0.0, 10.0, -1.0), 0.0);
    }

    #[test]
    fn test_dist_mag_sq() {
        assert_eq!(dist(0.0, 0.0, 3.0, 4.0), 5.0);
        assert_eq!(mag(2.0, 3.0, 6.0), 7.0);
        assert_eq!(sq(-3.0), 9.0);
    }

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(degrees(PI), 180.0);
        assert_relative_eq!(radians(90.0), HALF_PI);
        assert_relative_eq!(radians(degrees(1.234)), 1.234);
    }

    #[test]
    fn test_random_range_bounds() {
        let mut random = Random::with_seed(7);
        for _ in 0..1000 {
            let v = random.random_range(-500.0, -50.0);
            assert!((-500.0..-50.0).contains(&v), "out of range: {v}");
        }
        assert_eq!(random.random_range(3.0, 3.0), 3.0);
        assert_eq!(random.random_range(5.0, 1.0), 5.0);
        assert_eq!(random.random(0.0), 0.0);
    }

    #[test]
    fn test_random_seed_is_reproducible() {
        let mut a = Random::with_seed(99);
        let mut b = Random::default();
        b.random_seed(99);
        for _ in 0..10 {
            assert_eq!(a.random(1.0), b.random(1.0));
        }
        assert_eq!(a.random_2d(), b.random_2d());
    }

    #[test]
    fn test_random_gaussian_statistics() {
        let mut random = Random::with_seed(1234);
        let n = 20_000;
        let samples: Vec<f64> = (0..n).map(|_| random.random_gaussian()).collect();
        let mean = samples.iter().sum::<f64>() / f64::from(n);
        let var = samples.iter().map(|s| sq(s - mean)).sum::<f64>() / f64::from(n);
        assert!(mean.abs() < 0.05, "mean too far from 0: {mean}");
        assert!((var - 1.0).abs() < 0.05, "variance too far from 1: {var}");
    }
}
