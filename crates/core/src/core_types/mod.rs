//! Core value types shared by every sketch

pub mod color;
pub mod noise;
pub mod vector;

pub use color::{lerp_color, Color};
pub use noise::Noise;
pub use vector::{Component, PVector, VectorError};
