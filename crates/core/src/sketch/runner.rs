use tracing::{debug, info};

use super::config::{ConfigError, SketchConfig};
use super::input::{InputEvent, Key};
use super::{Canvas, Sketch};
use crate::render::{RenderError, Renderer};

/// Drives a [`Sketch`] through its lifecycle.
///
/// The host owns the timing: it calls [`SketchRunner::frame`] on each
/// display tick and forwards input through [`SketchRunner::handle_event`].
#[derive(Debug)]
pub struct SketchRunner<S: Sketch> {
    sketch: S,
    canvas: Canvas,
    setup_done: bool,
}

impl<S: Sketch> SketchRunner<S> {
    /// Create a runner drawing into `renderer`.
    ///
    /// # Errors
    /// Returns error if `config` fails validation
    pub fn new(
        sketch: S,
        renderer: Box<dyn Renderer>,
        config: &SketchConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        info!(
            "Creating sketch runner: {}x{} at {} fps (seed: {:?})",
            config.width, config.height, config.frame_rate, config.seed
        );
        Ok(Self {
            sketch,
            canvas: Canvas::new(renderer, config),
            setup_done: false,
        })
    }

    /// Run `setup` once. Later calls do nothing.
    ///
    /// # Errors
    /// Returns error if the renderer fails to flush the setup frame
    pub fn setup(&mut self) -> Result<(), RenderError> {
        if self.setup_done {
            return Ok(());
        }
        self.setup_done = true;

        self.canvas.graphics.begin_frame(0);
        self.sketch.setup(&mut self.canvas);
        self.canvas.graphics.end_frame()?;

        info!(
            "Sketch setup complete ({} sliders)",
            self.canvas.controls.len()
        );
        Ok(())
    }

    /// Draw one frame, running `setup` first if needed.
    ///
    /// Returns `false` when the sketch is paused by `no_loop` and no
    /// `redraw` was requested.
    ///
    /// # Errors
    /// Returns error if the renderer fails to flush the frame
    pub fn frame(&mut self) -> Result<bool, RenderError> {
        self.setup()?;
        if !self.canvas.looping && !self.canvas.redraw_requested {
            return Ok(false);
        }
        self.canvas.redraw_requested = false;

        let frame = self.canvas.clock.tick();
        self.canvas.graphics.begin_frame(frame);
        self.sketch.draw(&mut self.canvas);
        self.canvas.input.commit_frame();
        self.canvas.graphics.end_frame()?;

        debug!(
            frame,
            fps = self.canvas.clock.frame_rate(),
            "Frame drawn"
        );
        Ok(true)
    }

    /// Call [`frame`](Self::frame) `count` times. Returns how many frames were drawn.
    ///
    /// # Errors
    /// Returns the first render error; frames before it have been drawn
    pub fn run_frames(&mut self, count: u64) -> Result<u64, RenderError> {
        let mut drawn = 0;
        for _ in 0..count {
            if self.frame()? {
                drawn += 1;
            }
        }
        if drawn < count {
            info!("Drew {} of {} frames; sketch is not looping", drawn, count);
        }
        Ok(drawn)
    }

    /// Fold an input event into the canvas state and fire the matching hook.
    pub fn handle_event(&mut self, event: InputEvent) {
        self.canvas.input.apply(&event);

        let canvas = &mut self.canvas;
        match event {
            InputEvent::MouseMoved { .. } => self.sketch.mouse_moved(canvas),
            InputEvent::MouseDragged { .. } => self.sketch.mouse_dragged(canvas),
            InputEvent::MousePressed { .. } => self.sketch.mouse_pressed(canvas),
            InputEvent::MouseReleased { .. } => {
                self.sketch.mouse_clicked(canvas);
                self.sketch.mouse_released(canvas);
            }
            InputEvent::MouseWheel { delta } => self.sketch.mouse_wheel(canvas, delta),
            InputEvent::KeyPressed(key) => {
                self.sketch.key_pressed(canvas);
                if matches!(key, Key::Character(_)) {
                    self.sketch.key_typed(canvas);
                }
            }
            InputEvent::KeyReleased(_) => self.sketch.key_released(canvas),
        }
    }

    pub fn is_setup(&self) -> bool {
        self.setup_done
    }

    pub fn sketch(&self) -> &S {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut S {
        &mut self.sketch
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    pub fn into_sketch(self) -> S {
        self.sketch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingRenderer};
    use crate::sketch::MouseButton;

    #[derive(Default)]
    struct Probe {
        setups: u32,
        draws: u32,
        events: Vec<&'static str>,
        pause_after: Option<u32>,
    }

    impl Sketch for Probe {
        fn setup(&mut self, canvas: &mut Canvas) {
            self.setups += 1;
            canvas.background(0.0);
        }

        fn draw(&mut self, canvas: &mut Canvas) {
            self.draws += 1;
            canvas.translate(10.0, 10.0);
            if self.pause_after == Some(self.draws) {
                canvas.no_loop();
            }
        }

        fn mouse_pressed(&mut self, _canvas: &mut Canvas) {
            self.events.push("pressed");
        }

        fn mouse_clicked(&mut self, _canvas: &mut Canvas) {
            self.events.push("clicked");
        }

        fn mouse_released(&mut self, _canvas: &mut Canvas) {
            self.events.push("released");
        }

        fn key_pressed(&mut self, _canvas: &mut Canvas) {
            self.events.push("key_pressed");
        }

        fn key_typed(&mut self, _canvas: &mut Canvas) {
            self.events.push("key_typed");
        }
    }

    fn runner(probe: Probe) -> (SketchRunner<Probe>, crate::render::CommandLog) {
        let renderer = RecordingRenderer::new(100, 100);
        let log = renderer.log();
        let config = SketchConfig {
            width: 100,
            height: 100,
            seed: Some(1),
            ..SketchConfig::default()
        };
        (SketchRunner::new(probe, Box::new(renderer), &config).unwrap(), log)
    }

    #[test]
    fn test_setup_runs_once() {
        let (mut runner, log) = runner(Probe::default());
        runner.setup().unwrap();
        runner.setup().unwrap();
        runner.frame().unwrap();
        assert_eq!(runner.sketch().setups, 1);
        assert_eq!(log.frame(0), vec![DrawCommand::Background(crate::Color::BLACK)]);
    }

    #[test]
    fn test_no_loop_and_redraw() {
        let (mut runner, _) = runner(Probe {
            pause_after: Some(2),
            ..Probe::default()
        });
        assert_eq!(runner.run_frames(5).unwrap(), 2);
        assert_eq!(runner.canvas().frame_count(), 2);

        runner.canvas_mut().redraw();
        assert!(runner.frame().unwrap());
        assert!(!runner.frame().unwrap());

        runner.canvas_mut().loop_draw();
        assert_eq!(runner.run_frames(2).unwrap(), 2);
        assert_eq!(runner.sketch().draws, 5);
    }

    #[test]
    fn test_transform_resets_each_frame() {
        let (mut runner, _) = runner(Probe::default());
        runner.run_frames(3).unwrap();
        // The last draw translated once; earlier translations were reset
        let expected = crate::render::Transform2D::translation(10.0, 10.0);
        assert_eq!(*runner.canvas().transform(), expected);
    }

    #[test]
    fn test_release_fires_clicked_then_released() {
        let (mut runner, _) = runner(Probe::default());
        runner.handle_event(InputEvent::MousePressed {
            x: 5.0,
            y: 5.0,
            button: MouseButton::Left,
        });
        runner.handle_event(InputEvent::MouseReleased {
            x: 5.0,
            y: 5.0,
            button: MouseButton::Left,
        });
        runner.handle_event(InputEvent::KeyPressed(Key::Character('x')));
        runner.handle_event(InputEvent::KeyPressed(Key::Code(crate::sketch::KeyCode::Shift)));
        assert_eq!(
            runner.sketch().events,
            ["pressed", "clicked", "released", "key_pressed", "key_typed", "key_pressed"]
        );
        assert_eq!(runner.canvas().mouse_x(), 5.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = SketchConfig {
            height: 0,
            ..SketchConfig::default()
        };
        let renderer = Box::new(RecordingRenderer::new(1, 1));
        let result = SketchRunner::new(Probe::default(), renderer, &config);
        assert!(result.is_err());
    }
}
