//! Value sliders a sketch can expose to its host.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Handle returned by [`Controls::create_slider`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SliderId(usize);

impl SliderId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A bounded numeric value snapped to a step grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    min: f64,
    max: f64,
    value: f64,
    step: f64,
}

impl Slider {
    /// A `step` of zero means continuous. Inverted bounds are swapped.
    ///
    /// Non-finite bounds and steps are replaced with `0.0` so that every
    /// slider has a finite range.
    pub fn new(min: f64, max: f64, default: f64, step: f64) -> Self {
        let min = finite_or_zero("min", min);
        let max = finite_or_zero("max", max);
        let step = finite_or_zero("step", step);
        let (min, max) = if min > max { (max, min) } else { (min, max) };
        let mut slider = Self {
            min,
            max,
            value: min,
            step: step.abs(),
        };
        slider.set_value(default);
        slider
    }

    /// Clamp `value` into range, snap it to the step grid and store it.
    ///
    /// Returns the value actually stored. NaN leaves the slider unchanged.
    pub fn set_value(&mut self, value: f64) -> f64 {
        if value.is_nan() {
            return self.value;
        }
        let mut v = value.clamp(self.min, self.max);
        if self.step > 0.0 {
            v = self.min + ((v - self.min) / self.step).round() * self.step;
            v = v.min(self.max);
        }
        self.value = v;
        v
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    pub fn step(&self) -> f64 {
        self.step
    }

    /// Position of the value within the range, in `[0, 1]`.
    pub fn normalized(&self) -> f64 {
        let span = self.max - self.min;
        if span > 0.0 {
            (self.value - self.min) / span
        } else {
            0.0
        }
    }
}

fn finite_or_zero(name: &str, value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!("Slider {} is {}; using 0", name, value);
        0.0
    }
}

/// All sliders created by one sketch.
#[derive(Debug, Clone, Default)]
pub struct Controls {
    sliders: Vec<Slider>,
}

impl Controls {
    pub fn create_slider(&mut self, min: f64, max: f64, default: f64, step: f64) -> SliderId {
        self.sliders.push(Slider::new(min, max, default, step));
        SliderId(self.sliders.len() - 1)
    }

    pub fn slider(&self, id: SliderId) -> Option<&Slider> {
        self.sliders.get(id.0)
    }

    pub fn slider_value(&self, id: SliderId) -> Option<f64> {
        self.slider(id).map(Slider::value)
    }

    /// Move a slider, as a host UI would. Returns the stored value.
    pub fn set_slider_value(&mut self, id: SliderId, value: f64) -> Option<f64> {
        let Some(slider) = self.sliders.get_mut(id.0) else {
            warn!("Unknown slider {:?}", id);
            return None;
        };
        if !(slider.min..=slider.max).contains(&value) {
            warn!(
                "Slider {} value {} outside [{}, {}]; clamping",
                id.0, value, slider.min, slider.max
            );
        }
        Some(slider.set_value(value))
    }

    pub fn iter(&self) -> impl Iterator<Item = (SliderId, &Slider)> {
        self.sliders.iter().enumerate().map(|(i, s)| (SliderId(i), s))
    }

    pub fn len(&self) -> usize {
        self.sliders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sliders.is_empty()
    }
}
