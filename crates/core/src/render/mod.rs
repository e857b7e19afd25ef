//! Rendering seam between the drawing API and an output surface.
//!
//! - [`path`]: shape geometry reduced to lines and Bézier curves
//! - [`transform`]: 2D affine transforms
//! - [`style`]: fill/stroke state and shape modes
//! - [`renderer`]: the [`Renderer`] trait
//! - [`recording`]: command-log renderer for headless runs and tests
//! - [`svg`]: SVG document renderer

pub mod path;
pub mod recording;
pub mod renderer;
pub mod style;
pub mod svg;
pub mod transform;

pub use path::{ArcMode, CornerRadii, Path, PathSegment};
pub use recording::{CommandLog, DrawCommand, RecordingRenderer};
pub use renderer::{RenderError, Renderer};
pub use style::{DrawStyle, EndShape, ShapeMode, Stroke, StrokeCap, StrokeJoin};
pub use svg::SvgRenderer;
pub use transform::Transform2D;
