//! Processing-style immediate drawing API.
//!
//! [`Graphics`] turns calls such as `rect`, `ellipse` or `vertex` into
//! [`Path`]s and hands them, together with the current style and
//! transform, to a boxed [`Renderer`]. It never rasterises anything itself.
//!
//! Fill rules:
//! - closed shapes (`rect`, `square`, `ellipse`, `circle`, `quad`,
//!   `triangle`, `bezier`, closed vertex shapes) fill then stroke
//! - `line` and `point` only stroke
//! - `end_shape(EndShape::Open)` only strokes
//! - `arc` strokes the open curve and fills the pie unless an explicit
//!   [`ArcMode`] is given

use nalgebra::Point2;
use tracing::{debug, warn};

use crate::core_types::{Color, PVector};
use crate::render::{
    ArcMode, CornerRadii, DrawStyle, EndShape, Path, RenderError, Renderer, ShapeMode, StrokeCap,
    StrokeJoin, Transform2D,
};

#[derive(Debug, Clone, Copy)]
struct SavedState {
    style: DrawStyle,
    transform: Transform2D,
}

pub struct Graphics {
    renderer: Box<dyn Renderer>,
    style: DrawStyle,
    transform: Transform2D,
    stack: Vec<SavedState>,
    /// Outline being built between `begin_shape` and `end_shape`
    shape: Option<Path>,
    smooth: bool,
}

impl std::fmt::Debug for Graphics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graphics")
            .field("size", &self.renderer.size())
            .field("style", &self.style)
            .field("transform", &self.transform)
            .field("stack_depth", &self.stack.len())
            .field("shape_open", &self.shape.is_some())
            .finish_non_exhaustive()
    }
}

impl Graphics {
    pub fn new(renderer: Box<dyn Renderer>) -> Self {
        Self {
            renderer,
            style: DrawStyle::default(),
            transform: Transform2D::identity(),
            stack: Vec::new(),
            shape: None,
            smooth: true,
        }
    }

    // ========================================================================
    // Canvas
    // ========================================================================

    pub fn width(&self) -> f64 {
        f64::from(self.renderer.size().0)
    }

    pub fn height(&self) -> f64 {
        f64::from(self.renderer.size().1)
    }

    /// Resize the canvas.
    pub fn size(&mut self, width: u32, height: u32) {
        debug!("Canvas resized to {}x{}", width, height);
        self.renderer.resize(width, height);
    }

    pub fn renderer(&self) -> &dyn Renderer {
        self.renderer.as_ref()
    }

    pub fn renderer_mut(&mut self) -> &mut dyn Renderer {
        self.renderer.as_mut()
    }

    pub fn style(&self) -> &DrawStyle {
        &self.style
    }

    pub fn transform(&self) -> &Transform2D {
        &self.transform
    }

    /// Start a frame: the transform is reset and any unbalanced `push` is dropped.
    pub fn begin_frame(&mut self, frame: u64) {
        if !self.stack.is_empty() {
            warn!(
                "Frame {} started with {} unmatched push() calls; discarding them",
                frame,
                self.stack.len()
            );
            self.stack.clear();
        }
        if self.shape.take().is_some() {
            warn!("Frame {} started with an unfinished begin_shape()", frame);
        }
        self.transform = Transform2D::identity();
        self.renderer.begin_frame(frame);
    }

    /// Finish the frame and let the renderer flush it.
    ///
    /// # Errors
    /// Returns error if the renderer fails to flush the frame
    pub fn end_frame(&mut self) -> Result<(), RenderError> {
        self.renderer.end_frame()
    }

    pub fn background(&mut self, color: impl Into<Color>) {
        self.renderer.background(color.into());
    }

    pub fn clear(&mut self) {
        self.renderer.clear();
    }

    // ========================================================================
    // Attributes
    // ========================================================================

    pub fn fill(&mut self, color: impl Into<Color>) {
        self.style.fill = Some(color.into());
    }

    pub fn no_fill(&mut self) {
        self.style.fill = None;
    }

    pub fn stroke(&mut self, color: impl Into<Color>) {
        self.style.stroke = Some(color.into());
    }

    pub fn no_stroke(&mut self) {
        self.style.stroke = None;
    }

    pub fn stroke_weight(&mut self, weight: f64) {
        self.style.stroke_weight = weight;
    }

    pub fn stroke_cap(&mut self, cap: StrokeCap) {
        self.style.stroke_cap = cap;
    }

    pub fn stroke_join(&mut self, join: StrokeJoin) {
        self.style.stroke_join = join;
    }

    pub fn rect_mode(&mut self, mode: ShapeMode) {
        self.style.rect_mode = mode;
    }

    pub fn ellipse_mode(&mut self, mode: ShapeMode) {
        self.style.ellipse_mode = mode;
    }

    pub fn smooth(&mut self) {
        self.smooth = true;
        self.renderer.set_smooth(true);
    }

    pub fn no_smooth(&mut self) {
        self.smooth = false;
        self.renderer.set_smooth(false);
    }

    pub fn is_smooth(&self) -> bool {
        self.smooth
    }

    // ========================================================================
    // Transform
    // ========================================================================

    /// Save the current style and transform.
    pub fn push(&mut self) {
        self.stack.push(SavedState {
            style: self.style,
            transform: self.transform,
        });
    }

    /// Restore the state saved by the matching `push`.
    pub fn pop(&mut self) {
        match self.stack.pop() {
            Some(saved) => {
                self.style = saved.style;
                self.transform = saved.transform;
            }
            None => warn!("pop() called without a matching push()"),
        }
    }

    pub fn translate(&mut self, x: f64, y: f64) {
        self.transform = self.transform * Transform2D::translation(x, y);
    }

    pub fn rotate(&mut self, angle: f64) {
        self.transform = self.transform * Transform2D::rotation(angle);
    }

    /// Uniform scale.
    pub fn scale(&mut self, s: f64) {
        self.scale_xy(s, s);
    }

    pub fn scale_xy(&mut self, sx: f64, sy: f64) {
        self.transform = self.transform * Transform2D::scaling(sx, sy);
    }

    pub fn reset_matrix(&mut self) {
        self.transform = Transform2D::identity();
    }

    // ========================================================================
    // Painting helpers
    // ========================================================================

    fn fill_and_stroke(&mut self, path: &Path) {
        self.fill_only(path);
        self.stroke_only(path);
    }

    fn fill_only(&mut self, path: &Path) {
        if let Some(color) = self.style.fill_paint() {
            self.renderer.fill_path(path, color, &self.transform);
        }
    }

    fn stroke_only(&mut self, path: &Path) {
        if let Some(stroke) = self.style.stroke_paint() {
            self.renderer.stroke_path(path, &stroke, &self.transform);
        }
    }

    // ========================================================================
    // 2D primitives
    // ========================================================================

    /// Arc with the default look: open curve stroked, pie filled.
    pub fn arc(&mut self, a: f64, b: f64, c: f64, d: f64, start: f64, stop: f64) {
        let (x, y, w, h) = self.style.ellipse_mode.resolve(a, b, c, d);
        let pie = Path::arc(x, y, w, h, start, stop, ArcMode::Pie);
        if pie.is_empty() {
            return;
        }
        self.fill_only(&pie);
        let open = Path::arc(x, y, w, h, start, stop, ArcMode::Open);
        self.stroke_only(&open);
    }

    /// Arc closed according to `mode`.
    pub fn arc_with_mode(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        start: f64,
        stop: f64,
        mode: ArcMode,
    ) {
        let (x, y, w, h) = self.style.ellipse_mode.resolve(a, b, c, d);
        let path = Path::arc(x, y, w, h, start, stop, mode);
        if !path.is_empty() {
            self.fill_and_stroke(&path);
        }
    }

    pub fn ellipse(&mut self, a: f64, b: f64, c: f64, d: f64) {
        let (x, y, w, h) = self.style.ellipse_mode.resolve(a, b, c, d);
        self.fill_and_stroke(&Path::ellipse(x, y, w, h));
    }

    pub fn circle(&mut self, x: f64, y: f64, extent: f64) {
        self.ellipse(x, y, extent, extent);
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        self.stroke_only(&Path::line(x1, y1, x2, y2));
    }

    pub fn line_between(&mut self, from: PVector, to: PVector) {
        self.line(from.x, from.y, to.x, to.y);
    }

    /// A dot one stroke-weight long, drawn with the stroke colour.
    pub fn point(&mut self, x: f64, y: f64) {
        let weight = self.style.stroke_weight;
        self.line(x, y, x + weight, y);
    }

    pub fn quad(
        &mut self,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        x3: f64,
        y3: f64,
        x4: f64,
        y4: f64,
    ) {
        let path = Path::polygon(&[
            Point2::new(x1, y1),
            Point2::new(x2, y2),
            Point2::new(x3, y3),
            Point2::new(x4, y4),
        ]);
        self.fill_and_stroke(&path);
    }

    pub fn rect(&mut self, a: f64, b: f64, c: f64, d: f64) {
        let (x, y, w, h) = self.style.rect_mode.resolve(a, b, c, d);
        self.fill_and_stroke(&Path::rect(x, y, w, h));
    }

    /// Rectangle with the same radius on every corner.
    pub fn rect_rounded(&mut self, a: f64, b: f64, c: f64, d: f64, radius: f64) {
        self.rect_corners(a, b, c, d, radius, radius, radius, radius);
    }

    /// Rectangle with per-corner radii, clockwise from the top-left.
    pub fn rect_corners(
        &mut self,
        a: f64,
        b: f64,
        c: f64,
        d: f64,
        top_left: f64,
        top_right: f64,
        bottom_right: f64,
        bottom_left: f64,
    ) {
        let (x, y, w, h) = self.style.rect_mode.resolve(a, b, c, d);
        let radii = CornerRadii {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
        };
        self.fill_and_stroke(&Path::rounded_rect(x, y, w, h, radii));
    }

    pub fn square(&mut self, x: f64, y: f64, extent: f64) {
        self.rect(x, y, extent, extent);
    }

    pub fn triangle(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x3: f64, y3: f64) {
        let path = Path::polygon(&[
            Point2::new(x1, y1),
            Point2::new(x2, y2),
            Point2::new(x3, y3),
        ]);
        self.fill_and_stroke(&path);
    }

    // ========================================================================
    // Curves
    // ========================================================================

    /// Cubic Bézier from `(x1, y1)` to `(x2, y2)`.
    pub fn bezier(
        &mut self,
        x1: f64,
        y1: f64,
        cx1: f64,
        cy1: f64,
        cx2: f64,
        cy2: f64,
        x2: f64,
        y2: f64,
    ) {
        let mut path = Path::new();
        path.move_to(x1, y1).cubic_to(cx1, cy1, cx2, cy2, x2, y2);
        self.fill_and_stroke(&path);
    }

    // ========================================================================
    // Vertex shapes
    // ========================================================================

    pub fn begin_shape(&mut self) {
        if self.shape.replace(Path::new()).is_some() {
            warn!("begin_shape() called while a shape was open; discarding it");
        }
    }

    pub fn vertex(&mut self, x: f64, y: f64) {
        let Some(shape) = self.shape.as_mut() else {
            warn!("vertex() called outside begin_shape()/end_shape()");
            return;
        };
        if shape.is_empty() {
            shape.move_to(x, y);
        } else {
            shape.line_to(x, y);
        }
    }

    pub fn vertex_vec(&mut self, v: PVector) {
        self.vertex(v.x, v.y);
    }

    /// Cubic segment from the previous vertex, which must exist.
    pub fn bezier_vertex(&mut self, cx1: f64, cy1: f64, cx2: f64, cy2: f64, x: f64, y: f64) {
        match self.shape.as_mut() {
            Some(shape) if !shape.is_empty() => {
                shape.cubic_to(cx1, cy1, cx2, cy2, x, y);
            }
            _ => warn!("bezier_vertex() needs a preceding vertex() inside begin_shape()"),
        }
    }

    /// Quadratic segment from the previous vertex, which must exist.
    pub fn quadratic_vertex(&mut self, cx: f64, cy: f64, x: f64, y: f64) {
        match self.shape.as_mut() {
            Some(shape) if !shape.is_empty() => {
                shape.quad_to(cx, cy, x, y);
            }
            _ => warn!("quadratic_vertex() needs a preceding vertex() inside begin_shape()"),
        }
    }

    pub fn end_shape(&mut self, mode: EndShape) {
        let Some(mut shape) = self.shape.take() else {
            warn!("end_shape() called without begin_shape()");
            return;
        };
        if shape.is_empty() {
            return;
        }
        match mode {
            EndShape::Open => self.stroke_only(&shape),
            EndShape::Close => {
                shape.close();
                self.fill_and_stroke(&shape);
            }
        }
    }

    pub fn is_shape_open(&self) -> bool {
        self.shape.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{CommandLog, DrawCommand, PathSegment, RecordingRenderer};

    fn graphics() -> (Graphics, CommandLog) {
        let recorder = RecordingRenderer::new(200, 100);
        let log = recorder.log();
        (Graphics::new(Box::new(recorder)), log)
    }

    fn kinds(log: &CommandLog) -> Vec<&'static str> {
        log.commands()
            .iter()
            .map(|c| match c {
                DrawCommand::Fill { .. } => "fill",
                DrawCommand::Stroke { .. } => "stroke",
                DrawCommand::Background(_) => "background",
                _ => "other",
            })
            .collect()
    }

    #[test]
    fn test_size_comes_from_renderer() {
        let (mut g, _) = graphics();
        assert_eq!(g.width(), 200.0);
        assert_eq!(g.height(), 100.0);
        g.size(640, 360);
        assert_eq!(g.width(), 640.0);
    }

    #[test]
    fn test_fill_rules() {
        let (mut g, log) = graphics();
        g.rect(0.0, 0.0, 10.0, 10.0);
        g.line(0.0, 0.0, 10.0, 10.0);
        g.triangle(0.0, 0.0, 5.0, 0.0, 0.0, 5.0);
        assert_eq!(kinds(&log), ["fill", "stroke", "stroke", "fill", "stroke"]);

        log.take();
        g.no_fill();
        g.ellipse(5.0, 5.0, 10.0, 10.0);
        g.no_stroke();
        g.ellipse(5.0, 5.0, 10.0, 10.0);
        assert_eq!(kinds(&log), ["stroke"]);
    }

    #[test]
    fn test_push_pop_restores_style_and_transform() {
        let (mut g, _) = graphics();
        g.fill(10.0);
        g.push();
        g.fill((255.0, 0.0, 0.0));
        g.translate(5.0, 5.0);
        g.stroke_weight(4.0);
        g.pop();
        assert_eq!(g.style().fill, Some(Color::gray(10.0)));
        assert_eq!(g.style().stroke_weight, 1.0);
        assert!(g.transform().is_identity());

        // Unbalanced pop is ignored
        g.pop();
        assert_eq!(g.style().fill, Some(Color::gray(10.0)));
    }

    #[test]
    fn test_shapes_carry_current_transform() {
        let (mut g, log) = graphics();
        g.translate(100.0, 50.0);
        g.rotate(0.5);
        g.line(0.0, 0.0, 0.0, -10.0);
        let expected = Transform2D::translation(100.0, 50.0) * Transform2D::rotation(0.5);
        match &log.commands()[0] {
            DrawCommand::Stroke { transform, .. } => assert_eq!(*transform, expected),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rect_mode_center() {
        let (mut g, log) = graphics();
        g.rect_mode(ShapeMode::Center);
        g.no_stroke();
        g.rect(50.0, 50.0, 20.0, 10.0);
        match &log.commands()[0] {
            DrawCommand::Fill { path, .. } => {
                assert_eq!(path.segments()[0], PathSegment::MoveTo(Point2::new(40.0, 45.0)));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_vertex_shape_open_and_closed() {
        let (mut g, log) = graphics();
        g.begin_shape();
        g.vertex(0.0, 0.0);
        g.vertex(10.0, 0.0);
        g.bezier_vertex(10.0, 5.0, 5.0, 10.0, 0.0, 10.0);
        g.end_shape(EndShape::Open);
        assert_eq!(kinds(&log), ["stroke"]);

        log.take();
        g.begin_shape();
        g.vertex(0.0, 0.0);
        g.vertex(10.0, 0.0);
        g.vertex(10.0, 10.0);
        g.end_shape(EndShape::Close);
        let commands = log.commands();
        assert_eq!(commands.len(), 2);
        match &commands[0] {
            DrawCommand::Fill { path, .. } => assert!(path.is_closed()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_vertex_misuse_is_ignored() {
        let (mut g, log) = graphics();
        g.vertex(1.0, 1.0);
        g.end_shape(EndShape::Close);
        g.begin_shape();
        g.bezier_vertex(1.0, 1.0, 2.0, 2.0, 3.0, 3.0);
        g.end_shape(EndShape::Open);
        assert!(log.is_empty());
        assert!(!g.is_shape_open());
    }

    #[test]
    fn test_arc_default_fills_pie_and_strokes_open() {
        let (mut g, log) = graphics();
        g.arc(50.0, 50.0, 40.0, 40.0, 0.0, 1.0);
        let commands = log.commands();
        assert_eq!(commands.len(), 2);
        match (&commands[0], &commands[1]) {
            (DrawCommand::Fill { path: fill, .. }, DrawCommand::Stroke { path: stroke, .. }) => {
                assert!(fill.is_closed());
                assert!(!stroke.is_closed());
            }
            other => panic!("unexpected commands {other:?}"),
        }

        log.take();
        g.arc(50.0, 50.0, 40.0, 40.0, 1.0, 0.0);
        assert!(log.is_empty());
    }

    #[test]
    fn test_begin_frame_resets_transform_and_stack() {
        let (mut g, log) = graphics();
        g.push();
        g.translate(3.0, 4.0);
        g.begin_frame(1);
        assert!(g.transform().is_identity());
        g.pop(); // stack was cleared, so this only warns
        assert_eq!(log.commands(), vec![DrawCommand::BeginFrame(1)]);
    }
}
