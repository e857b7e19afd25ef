//! Processing-style coherent noise
//!
//! Provides deterministic, smoothly varying pseudo-random values for
//! sketches: wandering positions, organic outlines, flickering colour.
//!
//! The generator is layered value noise. Integer lattice points are hashed
//! into `[0, 1]`, values between lattice points are blended with a Hermite
//! fade, and several octaves at doubling frequency are summed with
//! decreasing amplitude (`falloff`). The sum is normalised by the total
//! amplitude so every output stays in `[0, 1]`.

/// Lattice hash multipliers (primes for better distribution)
const SEED_X: u32 = 1619;
const SEED_Y: u32 = 31337;
const SEED_Z: u32 = 6971;

/// Maximum value for positive i32 as f64 for safe conversion
const MAX_I32_POSITIVE: f64 = 0x7fff_ffff as f64;

/// Default number of octaves, matching Processing's `noiseDetail`
pub const DEFAULT_OCTAVES: u32 = 4;

/// Default amplitude falloff per octave
pub const DEFAULT_FALLOFF: f64 = 0.5;

/// Hash a 3D lattice point into `[0, 1]`.
#[inline]
fn hash_3d(x: i32, y: i32, z: i32, seed: u32) -> f64 {
    let mut n = (x.wrapping_mul(SEED_X as i32))
        .wrapping_add(y.wrapping_mul(SEED_Y as i32))
        .wrapping_add(z.wrapping_mul(SEED_Z as i32))
        .wrapping_add(seed as i32);
    n = (n << 13) ^ n;
    n = n
        .wrapping_mul(n.wrapping_mul(n).wrapping_mul(15731).wrapping_add(789_221))
        .wrapping_add(1_376_312_589);
    f64::from(n & 0x7fff_ffff) / MAX_I32_POSITIVE
}

/// Smooth interpolation function (Hermite curve)
#[inline]
fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}

/// Single octave of 3D value noise in `[0, 1]`.
fn value_noise_3d(x: f64, y: f64, z: f64, seed: u32) -> f64 {
    let x0 = x.floor() as i32;
    let y0 = y.floor() as i32;
    let z0 = z.floor() as i32;
    let x1 = x0.wrapping_add(1);
    let y1 = y0.wrapping_add(1);
    let z1 = z0.wrapping_add(1);

    let fx = smoothstep(x - x.floor());
    let fy = smoothstep(y - y.floor());
    let fz = smoothstep(z - z.floor());

    // Corner values on the near face
    let v000 = hash_3d(x0, y0, z0, seed);
    let v100 = hash_3d(x1, y0, z0, seed);
    let v010 = hash_3d(x0, y1, z0, seed);
    let v110 = hash_3d(x1, y1, z0, seed);

    // Corner values on the far face
    let v001 = hash_3d(x0, y0, z1, seed);
    let v101 = hash_3d(x1, y0, z1, seed);
    let v011 = hash_3d(x0, y1, z1, seed);
    let v111 = hash_3d(x1, y1, z1, seed);

    // Trilinear interpolation
    let v00 = v000 + fx * (v100 - v000);
    let v10 = v010 + fx * (v110 - v010);
    let v0 = v00 + fy * (v10 - v00);

    let v01 = v001 + fx * (v101 - v001);
    let v11 = v011 + fx * (v111 - v011);
    let v1 = v01 + fy * (v11 - v01);

    v0 + fz * (v1 - v0)
}

/// Seeded octave noise generator.
///
/// # Example
///
/// ```
/// use sketchbook_core::Noise;
///
/// let noise = Noise::default();
/// let n = noise.noise(0.35);
/// assert!((0.0..=1.0).contains(&n));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Noise {
    seed: u32,
    octaves: u32,
    falloff: f64,
}

impl Default for Noise {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: DEFAULT_OCTAVES,
            falloff: DEFAULT_FALLOFF,
        }
    }
}

impl Noise {
    /// Create a generator with the default detail and the given seed.
    pub fn with_seed(seed: u64) -> Self {
        let mut noise = Self::default();
        noise.noise_seed(seed);
        noise
    }

    /// Reseed the generator. Equal seeds always give equal noise fields.
    pub fn noise_seed(&mut self, seed: u64) {
        // Fold the high bits in so seeds differing only above bit 32 still differ
        self.seed = (seed ^ (seed >> 32)) as u32;
    }

    /// Set the number of octaves (at least 1) and the per-octave amplitude falloff.
    ///
    /// Falloff values above 0.5 emphasise fine detail; values are clamped to `[0, 1]`.
    pub fn noise_detail(&mut self, octaves: u32, falloff: f64) {
        self.octaves = octaves.max(1);
        self.falloff = falloff.clamp(0.0, 1.0);
    }

    /// Number of octaves summed per sample
    pub fn octaves(&self) -> u32 {
        self.octaves
    }

    /// Amplitude multiplier applied per octave
    pub fn falloff(&self) -> f64 {
        self.falloff
    }

    /// 1D noise in `[0, 1]`.
    pub fn noise(&self, x: f64) -> f64 {
        self.noise_3d(x, 0.0, 0.0)
    }

    /// 2D noise in `[0, 1]`.
    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise_3d(x, y, 0.0)
    }

    /// 3D noise in `[0, 1]`.
    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = 1.0;
        let mut max_value = 0.0;

        for i in 0..self.octaves {
            let octave_seed = self.seed.wrapping_add(i);
            total += value_noise_3d(x * frequency, y * frequency, z * frequency, octave_seed)
                * amplitude;
            max_value += amplitude;
            amplitude *= self.falloff;
            frequency *= 2.0;
        }

        total / max_value
    }
}
