//! Sketchbook Core Library
//!
//! A small creative-coding toolkit in the Processing style: a 3D vector
//! type, colours, layered value noise, an immediate-mode drawing API and a
//! sketch lifecycle with `setup`/`draw` hooks and input callbacks.
//!
//! ## Layers
//!
//! - [`core_types`]: [`PVector`], [`Color`], [`Noise`]
//! - [`math`]: scalar helpers and the seeded [`Random`] source
//! - [`render`]: path geometry, transforms and the [`Renderer`] seam
//!   ([`RecordingRenderer`] for headless runs, [`SvgRenderer`] for files)
//! - [`graphics`]: the drawing API on top of a renderer
//! - [`sketch`]: [`Sketch`] hooks, [`Canvas`] and [`SketchRunner`]
//! - [`sketches`]: bundled demo sketches selectable through [`SketchKind`]
//!
//! Rendering is headless; a windowing host forwards frame ticks and input
//! events to a [`SketchRunner`].

// Core types and utilities
pub mod conversion;
pub mod core_types;
pub mod image;
pub mod math;
pub mod time;

// Drawing
pub mod graphics;
pub mod render;

// Sketch lifecycle and bundled sketches
pub mod sketch;
pub mod sketches;

// Re-export core types
pub use core_types::{lerp_color, Color, Component, Noise, PVector, VectorError};
pub use image::{ImageError, PImage, Pixel};
pub use math::Random;

// Re-export drawing types
pub use graphics::Graphics;
pub use render::{
    ArcMode, CommandLog, DrawCommand, EndShape, Path, RecordingRenderer, RenderError, Renderer,
    ShapeMode, StrokeCap, StrokeJoin, SvgRenderer, Transform2D,
};

// Re-export sketch types
pub use sketch::{
    Canvas, ConfigError, InputEvent, Key, KeyCode, MouseButton, Sketch, SketchConfig,
    SketchRunner, SliderId,
};
pub use sketches::{SketchKind, UnknownSketch};

/// Everything a sketch usually needs in one import.
pub mod prelude {
    pub use crate::core_types::{lerp_color, Color, PVector};
    pub use crate::math::{
        constrain, degrees, dist, lerp, map, norm, radians, sq, HALF_PI, PI, QUARTER_PI, TAU,
        TWO_PI,
    };
    pub use crate::render::{ArcMode, EndShape, ShapeMode, StrokeCap, StrokeJoin};
    pub use crate::sketch::{Canvas, InputEvent, Key, KeyCode, MouseButton, Sketch, SliderId};
}
