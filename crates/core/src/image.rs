//! In-memory RGBA pixel buffer.
//!
//! Pixels are packed little-end first: red in the low byte, then green,
//! blue and alpha in the high byte.

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::Color;

/// Buffers at least this large are filled in parallel
const PARALLEL_FILL_THRESHOLD: usize = 64 * 1024;

/// One packed RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel(pub u32);

impl Pixel {
    pub fn from_rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(u32::from_le_bytes([r, g, b, a]))
    }

    pub fn red(self) -> u8 {
        self.0.to_le_bytes()[0]
    }

    pub fn green(self) -> u8 {
        self.0.to_le_bytes()[1]
    }

    pub fn blue(self) -> u8 {
        self.0.to_le_bytes()[2]
    }

    pub fn alpha(self) -> u8 {
        self.0.to_le_bytes()[3]
    }

    pub fn set_red(&mut self, v: u8) {
        self.set_byte(0, v);
    }

    pub fn set_green(&mut self, v: u8) {
        self.set_byte(1, v);
    }

    pub fn set_blue(&mut self, v: u8) {
        self.set_byte(2, v);
    }

    pub fn set_alpha(&mut self, v: u8) {
        self.set_byte(3, v);
    }

    fn set_byte(&mut self, index: usize, v: u8) {
        let mut bytes = self.0.to_le_bytes();
        bytes[index] = v;
        self.0 = u32::from_le_bytes(bytes);
    }
}

impl From<Color> for Pixel {
    fn from(color: Color) -> Self {
        let [r, g, b, a] = color.to_rgba8();
        Pixel::from_rgba8(r, g, b, a)
    }
}

impl From<Pixel> for Color {
    fn from(pixel: Pixel) -> Self {
        Color::from_rgba8(pixel.0.to_le_bytes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    /// Pixel count does not match `width * height`
    SizeMismatch { expected: usize, actual: usize },
    /// `width * height` does not fit in `usize`
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::SizeMismatch { expected, actual } => {
                write!(f, "Expected {expected} pixels, got {actual}")
            }
            ImageError::TooLarge { width, height } => {
                write!(f, "Image of {width}x{height} pixels is too large")
            }
        }
    }
}

impl std::error::Error for ImageError {}

fn pixel_count(width: usize, height: usize) -> Result<usize, ImageError> {
    width
        .checked_mul(height)
        .ok_or(ImageError::TooLarge { width, height })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PImage {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PImage {
    /// Fully transparent image.
    ///
    /// # Errors
    /// Returns error if `width * height` overflows
    pub fn new(width: usize, height: usize) -> Result<Self, ImageError> {
        let len = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![Pixel::default(); len],
        })
    }

    /// # Errors
    /// Returns error if `width * height` overflows or differs from `pixels.len()`
    pub fn from_pixels(
        width: usize,
        height: usize,
        pixels: Vec<Pixel>,
    ) -> Result<Self, ImageError> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(ImageError::SizeMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    pub fn get(&self, x: usize, y: usize) -> Option<Color> {
        self.index(x, y).map(|i| Color::from(self.pixels[i]))
    }

    /// Returns `false` when `(x, y)` is outside the image.
    pub fn set(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.pixels[i] = Pixel::from(color);
                true
            }
            None => false,
        }
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Set every pixel to `color`.
    pub fn fill(&mut self, color: Color) {
        let pixel = Pixel::from(color);
        if self.pixels.len() >= PARALLEL_FILL_THRESHOLD {
            self.pixels.par_iter_mut().for_each(|p| *p = pixel);
        } else {
            self.pixels.fill(pixel);
        }
    }
}
