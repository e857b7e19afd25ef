use std::fmt;
use std::path::PathBuf;

use super::path::Path;
use super::style::Stroke;
use super::transform::Transform2D;
use crate::core_types::Color;

/// Error raised by a renderer while flushing a frame.
#[derive(Debug)]
pub enum RenderError {
    /// Writing frame output failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io { path, source } => {
                write!(f, "Failed to write {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io { source, .. } => Some(source),
        }
    }
}

/// Output surface the drawing API paints through.
///
/// Shapes arrive as paths in local coordinates together with the current
/// transform; the renderer decides whether to flatten them, forward them
/// to a GPU, or serialise them.
pub trait Renderer {
    /// Canvas size in pixels
    fn size(&self) -> (u32, u32);

    fn resize(&mut self, width: u32, height: u32);

    /// Called before a sketch draws frame `frame` (0 is `setup`).
    fn begin_frame(&mut self, _frame: u64) {}

    /// Called after the frame's drawing is complete.
    ///
    /// # Errors
    /// Returns error if the renderer fails to flush the frame
    fn end_frame(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    /// Paint the whole canvas with `color`, ignoring the transform.
    fn background(&mut self, color: Color);

    /// Reset the canvas to fully transparent.
    fn clear(&mut self);

    fn fill_path(&mut self, path: &Path, color: Color, transform: &Transform2D);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, transform: &Transform2D);

    /// Toggle anti-aliasing.
    fn set_smooth(&mut self, _smooth: bool) {}
}
