//! Renderer that records draw calls instead of rasterising them.
//!
//! Used for headless runs and tests: the command log can be inspected
//! directly or dumped as JSON.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use super::path::Path;
use super::renderer::{RenderError, Renderer};
use super::style::Stroke;
use super::transform::Transform2D;
use crate::core_types::Color;

/// One recorded renderer call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    BeginFrame(u64),
    EndFrame,
    Resize {
        width: u32,
        height: u32,
    },
    Background(Color),
    Clear,
    Fill {
        path: Path,
        color: Color,
        transform: Transform2D,
    },
    Stroke {
        path: Path,
        stroke: Stroke,
        transform: Transform2D,
    },
    Smooth(bool),
}

impl DrawCommand {
    /// `true` for commands that put paint on the canvas.
    pub fn is_paint(&self) -> bool {
        matches!(
            self,
            DrawCommand::Background(_) | DrawCommand::Fill { .. } | DrawCommand::Stroke { .. }
        )
    }
}

/// Shared handle onto a recorder's command list.
///
/// The renderer itself is usually boxed away inside a runner, so the log
/// is kept behind an `Arc` and read through this handle.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    commands: Arc<Mutex<Vec<DrawCommand>>>,
}

impl CommandLog {
    fn lock(&self) -> MutexGuard<'_, Vec<DrawCommand>> {
        self.commands.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn push(&self, command: DrawCommand) {
        self.lock().push(command);
    }

    /// Snapshot of every command recorded so far.
    pub fn commands(&self) -> Vec<DrawCommand> {
        self.lock().clone()
    }

    /// Remove and return every recorded command.
    pub fn take(&self) -> Vec<DrawCommand> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Commands recorded between `BeginFrame(frame)` and its `EndFrame`.
    pub fn frame(&self, frame: u64) -> Vec<DrawCommand> {
        self.lock()
            .iter()
            .skip_while(|c| **c != DrawCommand::BeginFrame(frame))
            .skip(1)
            .take_while(|c| **c != DrawCommand::EndFrame)
            .cloned()
            .collect()
    }

    /// # Errors
    /// Returns error if a command cannot be serialized
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.lock())
    }
}

#[derive(Debug)]
pub struct RecordingRenderer {
    width: u32,
    height: u32,
    log: CommandLog,
}

impl RecordingRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            log: CommandLog::default(),
        }
    }

    /// Handle that stays valid after the renderer is boxed.
    pub fn log(&self) -> CommandLog {
        self.log.clone()
    }
}

impl Renderer for RecordingRenderer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.log.push(DrawCommand::Resize { width, height });
    }

    fn begin_frame(&mut self, frame: u64) {
        self.log.push(DrawCommand::BeginFrame(frame));
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        self.log.push(DrawCommand::EndFrame);
        Ok(())
    }

    fn background(&mut self, color: Color) {
        self.log.push(DrawCommand::Background(color));
    }

    fn clear(&mut self) {
        self.log.push(DrawCommand::Clear);
    }

    fn fill_path(&mut self, path: &Path, color: Color, transform: &Transform2D) {
        self.log.push(DrawCommand::Fill {
            path: path.clone(),
            color,
            transform: *transform,
        });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, transform: &Transform2D) {
        self.log.push(DrawCommand::Stroke {
            path: path.clone(),
            stroke: *stroke,
            transform: *transform,
        });
    }

    fn set_smooth(&mut self, smooth: bool) {
        self.log.push(DrawCommand::Smooth(smooth));
    }
}
