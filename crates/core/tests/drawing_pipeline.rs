//! End-to-end drawing: `Graphics` calls down to recorded commands and SVG files
use sketchbook_core::render::Transform2D;
use sketchbook_core::{
    Canvas, Color, DrawCommand, EndShape, Graphics, RecordingRenderer, ShapeMode, Sketch,
    SketchConfig, SketchRunner, SvgRenderer,
};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn recording_graphics() -> (Graphics, sketchbook_core::CommandLog) {
    let renderer = RecordingRenderer::new(200, 100);
    let log = renderer.log();
    (Graphics::new(Box::new(renderer)), log)
}

#[test]
fn test_push_pop_scopes_transform_and_style() {
    let (mut g, log) = recording_graphics();
    g.begin_frame(1);
    g.push();
    g.translate(10.0, 20.0);
    g.fill((255.0, 0.0, 0.0));
    g.rect(0.0, 0.0, 5.0, 5.0);
    g.pop();
    g.rect(0.0, 0.0, 5.0, 5.0);
    g.end_frame().unwrap();

    let frame = log.frame(1);
    assert_eq!(frame.len(), 4, "{frame:?}");
    match (&frame[0], &frame[2]) {
        (
            DrawCommand::Fill {
                color: inner,
                transform: moved,
                ..
            },
            DrawCommand::Fill {
                color: outer,
                transform: restored,
                ..
            },
        ) => {
            assert_eq!(*inner, Color::rgb(255.0, 0.0, 0.0));
            assert_eq!(*moved, Transform2D::translation(10.0, 20.0));
            assert_eq!(*outer, Color::WHITE);
            assert!(restored.is_identity());
        }
        other => panic!("unexpected commands: {other:?}"),
    }
    assert!(matches!(frame[1], DrawCommand::Stroke { .. }));
    assert!(matches!(frame[3], DrawCommand::Stroke { .. }));
}

#[test]
fn test_rect_mode_center_bounds() {
    let (mut g, log) = recording_graphics();
    g.begin_frame(1);
    g.no_stroke();
    g.rect_mode(ShapeMode::Center);
    g.rect(50.0, 50.0, 20.0, 10.0);
    g.end_frame().unwrap();

    let frame = log.frame(1);
    assert_eq!(frame.len(), 1);
    let DrawCommand::Fill { path, .. } = &frame[0] else {
        panic!("expected a fill, got {:?}", frame[0]);
    };
    let (min, max) = path.bounds().unwrap();
    assert_eq!((min.x, min.y), (40.0, 45.0));
    assert_eq!((max.x, max.y), (60.0, 55.0));
}

#[test]
fn test_open_shape_is_stroked_only() {
    let (mut g, log) = recording_graphics();
    g.begin_frame(1);
    g.begin_shape();
    g.vertex(0.0, 0.0);
    g.vertex(10.0, 0.0);
    g.vertex(10.0, 10.0);
    g.end_shape(EndShape::Open);

    g.begin_shape();
    g.vertex(0.0, 0.0);
    g.vertex(10.0, 0.0);
    g.vertex(10.0, 10.0);
    g.end_shape(EndShape::Close);
    g.end_frame().unwrap();

    let frame = log.frame(1);
    let kinds: Vec<&str> = frame
        .iter()
        .map(|c| match c {
            DrawCommand::Fill { .. } => "fill",
            DrawCommand::Stroke { .. } => "stroke",
            _ => "other",
        })
        .collect();
    assert_eq!(kinds, vec!["stroke", "fill", "stroke"]);
    let DrawCommand::Stroke { path, .. } = &frame[2] else {
        unreachable!()
    };
    assert!(path.is_closed());
}

#[test]
fn test_log_json_round_trip() {
    let (mut g, log) = recording_graphics();
    g.begin_frame(1);
    g.background(51.0);
    g.stroke((255.0, 128.0));
    g.line(0.0, 0.0, 100.0, 50.0);
    g.end_frame().unwrap();

    let json = log.to_json().unwrap();
    let parsed: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, log.commands());
}

/// Bar that slides one step to the right per frame.
struct Slide;

impl Sketch for Slide {
    fn draw(&mut self, canvas: &mut Canvas) {
        canvas.background(0.0);
        let x = canvas.frame_count() as f64 * 10.0;
        canvas.fill((0.0, 200.0, 255.0));
        canvas.rect(x, 10.0, 10.0, 30.0);
    }
}

#[test]
fn test_svg_frames_written_to_disk() {
    let dir = std::env::temp_dir().join(format!("sketchbook_frames_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let renderer = SvgRenderer::new(120, 50).with_output_dir(&dir, 2);
    let config = SketchConfig {
        width: 120,
        height: 50,
        ..SketchConfig::default()
    };
    let mut runner = SketchRunner::new(Slide, Box::new(renderer), &config).unwrap();
    assert_eq!(runner.run_frames(5).unwrap(), 5);

    assert!(!dir.join("frame_0000.svg").exists());
    assert!(!dir.join("frame_0001.svg").exists());
    assert!(dir.join("frame_0002.svg").exists());
    assert!(!dir.join("frame_0003.svg").exists());

    let doc = std::fs::read_to_string(dir.join("frame_0004.svg")).unwrap();
    assert!(doc.starts_with("<svg"));
    assert!(doc.contains(r##"fill="#00C8FF""##), "{doc}");
    // The opaque background wiped earlier frames: exactly one bar
    assert_eq!(doc.matches("<path").count(), 2);
    assert!(doc.contains("M40 10"), "{doc}");

    let _ = std::fs::remove_dir_all(&dir);
}
