//! Renderer that serialises each frame as an SVG document.
//!
//! Like a Processing canvas, paint accumulates across frames until an
//! opaque `background` or a `clear` wipes it. Frames can optionally be
//! written to `frame_NNNN.svg` files in an output directory.

use std::fmt::Write as _;
use std::path::{Path as FsPath, PathBuf};

use tracing::debug;

use super::path::Path;
use super::renderer::{RenderError, Renderer};
use super::style::Stroke;
use super::transform::Transform2D;
use crate::core_types::Color;

#[derive(Debug, Clone)]
struct FrameOutput {
    dir: PathBuf,
    every: u64,
}

#[derive(Debug)]
pub struct SvgRenderer {
    width: u32,
    height: u32,
    smooth: bool,
    frame: u64,
    /// Elements painted since the last opaque background
    body: String,
    output: Option<FrameOutput>,
    frames_written: u64,
}

/// `fill="#RRGGBB"` style colour plus a separate opacity attribute.
fn paint_attrs(kind: &str, color: Color) -> String {
    let hex = Color { a: 1.0, ..color }.to_hex();
    if color.a < 1.0 {
        format!(r#"{kind}="{hex}" {kind}-opacity="{}""#, color.a)
    } else {
        format!(r#"{kind}="{hex}""#)
    }
}

fn transform_attr(transform: &Transform2D) -> String {
    if transform.is_identity() {
        String::new()
    } else {
        let [a, b, c, d, e, f] = transform.coefficients();
        format!(r#" transform="matrix({a} {b} {c} {d} {e} {f})""#)
    }
}

impl SvgRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            smooth: true,
            frame: 0,
            body: String::new(),
            output: None,
            frames_written: 0,
        }
    }

    /// Write every `every`-th frame (frame numbers above 0) into `dir`.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>, every: u64) -> Self {
        self.output = Some(FrameOutput {
            dir: dir.into(),
            every: every.max(1),
        });
        self
    }

    /// Number of frame files written so far
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// The canvas as a complete SVG document.
    pub fn document(&self) -> String {
        let rendering = if self.smooth {
            ""
        } else {
            r#" shape-rendering="crispEdges""#
        };
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\"{rendering}>\n{body}</svg>\n",
            w = self.width,
            h = self.height,
            body = self.body,
        )
    }

    /// Write the current document to `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be written
    pub fn save(&self, path: &FsPath) -> Result<(), RenderError> {
        std::fs::write(path, self.document()).map_err(|source| RenderError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn push_element(&mut self, element: &str) {
        self.body.push_str("  ");
        self.body.push_str(element);
        self.body.push('\n');
    }
}

impl Renderer for SvgRenderer {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    fn begin_frame(&mut self, frame: u64) {
        self.frame = frame;
    }

    fn end_frame(&mut self) -> Result<(), RenderError> {
        let Some(output) = &self.output else {
            return Ok(());
        };
        if self.frame == 0 || self.frame % output.every != 0 {
            return Ok(());
        }

        let dir = output.dir.clone();
        std::fs::create_dir_all(&dir).map_err(|source| RenderError::Io {
            path: dir.clone(),
            source,
        })?;
        let path = dir.join(format!("frame_{:04}.svg", self.frame));
        self.save(&path)?;
        self.frames_written += 1;
        debug!("Wrote {}", path.display());
        Ok(())
    }

    fn background(&mut self, color: Color) {
        if color.a >= 1.0 {
            self.body.clear();
        }
        let element = format!(
            r#"<rect x="0" y="0" width="{}" height="{}" {}/>"#,
            self.width,
            self.height,
            paint_attrs("fill", color)
        );
        self.push_element(&element);
    }

    fn clear(&mut self) {
        self.body.clear();
    }

    fn fill_path(&mut self, path: &Path, color: Color, transform: &Transform2D) {
        if path.is_empty() {
            return;
        }
        let element = format!(
            r#"<path d="{}" {} stroke="none"{}/>"#,
            path.to_svg_data(),
            paint_attrs("fill", color),
            transform_attr(transform)
        );
        self.push_element(&element);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, transform: &Transform2D) {
        if path.is_empty() {
            return;
        }
        let mut element = format!(
            r#"<path d="{}" fill="none" {} stroke-width="{}" stroke-linecap="{}" stroke-linejoin="{}""#,
            path.to_svg_data(),
            paint_attrs("stroke", stroke.color),
            stroke.weight,
            stroke.cap.svg_name(),
            stroke.join.svg_name(),
        );
        let _ = write!(element, "{}/>", transform_attr(transform));
        self.push_element(&element);
    }

    fn set_smooth(&mut self, smooth: bool) {
        self.smooth = smooth;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::style::{StrokeCap, StrokeJoin};

    fn stroke(color: Color) -> Stroke {
        Stroke {
            color,
            weight: 2.0,
            cap: StrokeCap::Round,
            join: StrokeJoin::Miter,
        }
    }

    #[test]
    fn test_document_structure() {
        let mut svg = SvgRenderer::new(64, 32);
        svg.background(Color::gray(51.0));
        svg.stroke_path(
            &Path::line(0.0, 0.0, 10.0, 10.0),
            &stroke(Color::WHITE),
            &Transform2D::translation(5.0, 0.0),
        );

        let doc = svg.document();
        assert!(doc.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"32\""));
        assert!(doc.contains(r##"<rect x="0" y="0" width="64" height="32" fill="#333333"/>"##));
        assert!(doc.contains(r#"d="M0 0 L10 10""#));
        assert!(doc.contains(r#"stroke-linecap="round""#));
        assert!(doc.contains(r#"transform="matrix(1 0 0 1 5 0)""#));
        assert!(doc.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_opaque_background_wipes_previous_paint() {
        let mut svg = SvgRenderer::new(10, 10);
        svg.fill_path(&Path::rect(0.0, 0.0, 1.0, 1.0), Color::WHITE, &Transform2D::identity());
        svg.background(Color::gray_alpha(0.0, 10.0));
        assert_eq!(svg.document().matches("<path").count(), 1);
        assert!(svg.document().contains("fill-opacity"));

        svg.background(Color::BLACK);
        assert_eq!(svg.document().matches("<path").count(), 0);
        assert_eq!(svg.document().matches("<rect").count(), 1);
    }

    #[test]
    fn test_no_smooth_and_clear() {
        let mut svg = SvgRenderer::new(10, 10);
        svg.set_smooth(false);
        svg.background(Color::WHITE);
        svg.clear();
        let doc = svg.document();
        assert!(doc.contains("crispEdges"));
        assert!(!doc.contains("<rect"));
    }
}
