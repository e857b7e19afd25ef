//! Sketch lifecycle.
//!
//! A [`Sketch`] is a set of hooks (`setup`, `draw`, input callbacks). The
//! [`SketchRunner`] owns the sketch and a [`Canvas`], and calls the hooks
//! as the host delivers frame ticks and input events.
//!
//! ```
//! use sketchbook_core::{Canvas, RecordingRenderer, Sketch, SketchConfig, SketchRunner};
//!
//! struct Dot;
//!
//! impl Sketch for Dot {
//!     fn draw(&mut self, canvas: &mut Canvas) {
//!         canvas.background(51.0);
//!         let (x, y) = (canvas.mouse_x(), canvas.mouse_y());
//!         canvas.ellipse(x, y, 20.0, 20.0);
//!     }
//! }
//!
//! let renderer = RecordingRenderer::new(200, 200);
//! let log = renderer.log();
//! let mut runner = SketchRunner::new(Dot, Box::new(renderer), &SketchConfig::default()).unwrap();
//! runner.run_frames(3).unwrap();
//! assert_eq!(runner.canvas().frame_count(), 3);
//! assert!(!log.is_empty());
//! ```

pub mod clock;
pub mod config;
pub mod controls;
pub mod input;
pub mod runner;

use std::ops::{Deref, DerefMut};

use tracing::info;

pub use clock::FrameClock;
pub use config::{ConfigError, SketchConfig};
pub use controls::{Controls, Slider, SliderId};
pub use input::{InputEvent, InputState, Key, KeyCode, MouseButton};
pub use runner::SketchRunner;

use crate::core_types::{Noise, PVector};
use crate::graphics::Graphics;
use crate::math::Random;
use crate::render::Renderer;

/// Hooks a sketch implements. Only `draw` is required.
pub trait Sketch {
    /// Runs once before the first frame.
    fn setup(&mut self, _canvas: &mut Canvas) {}

    /// Runs once per frame.
    fn draw(&mut self, canvas: &mut Canvas);

    fn mouse_pressed(&mut self, _canvas: &mut Canvas) {}

    fn mouse_released(&mut self, _canvas: &mut Canvas) {}

    /// Fires on every release, just before `mouse_released`.
    fn mouse_clicked(&mut self, _canvas: &mut Canvas) {}

    fn mouse_moved(&mut self, _canvas: &mut Canvas) {}

    fn mouse_dragged(&mut self, _canvas: &mut Canvas) {}

    fn mouse_wheel(&mut self, _canvas: &mut Canvas, _delta: f64) {}

    fn key_pressed(&mut self, _canvas: &mut Canvas) {}

    fn key_released(&mut self, _canvas: &mut Canvas) {}

    /// Fires after `key_pressed` for keys that produce a character.
    fn key_typed(&mut self, _canvas: &mut Canvas) {}
}

impl<S: Sketch + ?Sized> Sketch for Box<S> {
    fn setup(&mut self, canvas: &mut Canvas) {
        (**self).setup(canvas);
    }

    fn draw(&mut self, canvas: &mut Canvas) {
        (**self).draw(canvas);
    }

    fn mouse_pressed(&mut self, canvas: &mut Canvas) {
        (**self).mouse_pressed(canvas);
    }

    fn mouse_released(&mut self, canvas: &mut Canvas) {
        (**self).mouse_released(canvas);
    }

    fn mouse_clicked(&mut self, canvas: &mut Canvas) {
        (**self).mouse_clicked(canvas);
    }

    fn mouse_moved(&mut self, canvas: &mut Canvas) {
        (**self).mouse_moved(canvas);
    }

    fn mouse_dragged(&mut self, canvas: &mut Canvas) {
        (**self).mouse_dragged(canvas);
    }

    fn mouse_wheel(&mut self, canvas: &mut Canvas, delta: f64) {
        (**self).mouse_wheel(canvas, delta);
    }

    fn key_pressed(&mut self, canvas: &mut Canvas) {
        (**self).key_pressed(canvas);
    }

    fn key_released(&mut self, canvas: &mut Canvas) {
        (**self).key_released(canvas);
    }

    fn key_typed(&mut self, canvas: &mut Canvas) {
        (**self).key_typed(canvas);
    }
}

/// Everything a sketch hook can reach: the drawing API (through `Deref`),
/// input state, sliders, randomness, noise and frame timing.
#[derive(Debug)]
pub struct Canvas {
    graphics: Graphics,
    input: InputState,
    controls: Controls,
    clock: FrameClock,
    random: Random,
    noise: Noise,
    looping: bool,
    redraw_requested: bool,
}

impl Deref for Canvas {
    type Target = Graphics;

    fn deref(&self) -> &Graphics {
        &self.graphics
    }
}

impl DerefMut for Canvas {
    fn deref_mut(&mut self) -> &mut Graphics {
        &mut self.graphics
    }
}

impl Canvas {
    pub fn new(renderer: Box<dyn Renderer>, config: &SketchConfig) -> Self {
        let mut graphics = Graphics::new(renderer);
        if graphics.renderer().size() != (config.width, config.height) {
            graphics.size(config.width, config.height);
        }
        if !config.smooth {
            graphics.no_smooth();
        }

        Self {
            graphics,
            input: InputState::default(),
            controls: Controls::default(),
            clock: FrameClock::new(config.frame_rate),
            random: config.seed.map_or_else(Random::default, Random::with_seed),
            noise: config.noise_seed.map_or_else(Noise::default, Noise::with_seed),
            looping: true,
            redraw_requested: false,
        }
    }

    // ========================================================================
    // Input
    // ========================================================================

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn mouse_x(&self) -> f64 {
        self.input.mouse_x()
    }

    pub fn mouse_y(&self) -> f64 {
        self.input.mouse_y()
    }

    pub fn pmouse_x(&self) -> f64 {
        self.input.pmouse_x()
    }

    pub fn pmouse_y(&self) -> f64 {
        self.input.pmouse_y()
    }

    pub fn mouse_button(&self) -> MouseButton {
        self.input.mouse_button()
    }

    pub fn mouse_is_pressed(&self) -> bool {
        self.input.mouse_is_pressed()
    }

    pub fn key(&self) -> Option<Key> {
        self.input.key()
    }

    pub fn key_is_pressed(&self) -> bool {
        self.input.key_is_pressed()
    }

    pub fn is_key_down(&self, key: impl Into<Key>) -> bool {
        self.input.is_key_down(key)
    }

    // ========================================================================
    // Sliders
    // ========================================================================

    pub fn create_slider(&mut self, min: f64, max: f64, default: f64, step: f64) -> SliderId {
        self.controls.create_slider(min, max, default, step)
    }

    pub fn slider_value(&self, id: SliderId) -> Option<f64> {
        self.controls.slider_value(id)
    }

    pub fn set_slider_value(&mut self, id: SliderId, value: f64) -> Option<f64> {
        self.controls.set_slider_value(id, value)
    }

    pub fn controls(&self) -> &Controls {
        &self.controls
    }

    // ========================================================================
    // Random and noise
    // ========================================================================

    /// Uniform value in `[0, high)`.
    pub fn random(&mut self, high: f64) -> f64 {
        self.random.random(high)
    }

    /// Uniform value in `[low, high)`.
    pub fn random_range(&mut self, low: f64, high: f64) -> f64 {
        self.random.random_range(low, high)
    }

    pub fn random_gaussian(&mut self) -> f64 {
        self.random.random_gaussian()
    }

    pub fn random_seed(&mut self, seed: u64) {
        self.random.random_seed(seed);
    }

    pub fn random_2d(&mut self) -> PVector {
        self.random.random_2d()
    }

    pub fn random_3d(&mut self) -> PVector {
        self.random.random_3d()
    }

    /// The canvas's random source, for helpers that take `&mut Random`.
    pub fn random_source(&mut self) -> &mut Random {
        &mut self.random
    }

    pub fn noise(&self, x: f64) -> f64 {
        self.noise.noise(x)
    }

    pub fn noise_2d(&self, x: f64, y: f64) -> f64 {
        self.noise.noise_2d(x, y)
    }

    pub fn noise_3d(&self, x: f64, y: f64, z: f64) -> f64 {
        self.noise.noise_3d(x, y, z)
    }

    pub fn noise_seed(&mut self, seed: u64) {
        self.noise.noise_seed(seed);
    }

    pub fn noise_detail(&mut self, octaves: u32, falloff: f64) {
        self.noise.noise_detail(octaves, falloff);
    }

    // ========================================================================
    // Timing and looping
    // ========================================================================

    /// Frames drawn so far (0 during `setup`).
    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    /// Smoothed measured frame rate.
    pub fn frame_rate(&self) -> f64 {
        self.clock.frame_rate()
    }

    /// Change the target frame rate the host should tick at.
    pub fn set_frame_rate(&mut self, fps: f64) {
        self.clock.set_target_frame_rate(fps);
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    /// Milliseconds since the sketch started.
    pub fn millis(&self) -> u64 {
        self.clock.millis()
    }

    /// Resume calling `draw` every frame.
    pub fn loop_draw(&mut self) {
        if !self.looping {
            info!("Resuming draw loop at frame {}", self.frame_count());
        }
        self.looping = true;
    }

    /// Stop calling `draw` until `loop_draw` or `redraw`.
    pub fn no_loop(&mut self) {
        if self.looping {
            info!("Draw loop paused at frame {}", self.frame_count());
        }
        self.looping = false;
    }

    /// Draw exactly one more frame while not looping.
    pub fn redraw(&mut self) {
        self.redraw_requested = true;
    }

    pub fn is_looping(&self) -> bool {
        self.looping
    }
}
