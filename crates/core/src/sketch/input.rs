//! Mouse and keyboard state.
//!
//! Hosts translate their native events into [`InputEvent`]s; the runner
//! folds them into an [`InputState`] before dispatching sketch hooks.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    None,
    Left,
    Right,
    Center,
}

/// Keys without a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyCode {
    Up,
    Down,
    Left,
    Right,
    Shift,
    Control,
    Alt,
    Enter,
    Escape,
    Backspace,
    Tab,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    Character(char),
    Code(KeyCode),
}

impl Key {
    pub fn as_char(self) -> Option<char> {
        match self {
            Key::Character(c) => Some(c),
            Key::Code(_) => None,
        }
    }
}

impl From<char> for Key {
    fn from(c: char) -> Self {
        Key::Character(c)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum InputEvent {
    MouseMoved { x: f64, y: f64 },
    MouseDragged { x: f64, y: f64, button: MouseButton },
    MousePressed { x: f64, y: f64, button: MouseButton },
    MouseReleased { x: f64, y: f64, button: MouseButton },
    MouseWheel { delta: f64 },
    KeyPressed(Key),
    KeyReleased(Key),
}

/// Current pointer and keyboard state seen by a sketch.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    mouse_x: f64,
    mouse_y: f64,
    pmouse_x: f64,
    pmouse_y: f64,
    mouse_button: MouseButton,
    mouse_pressed: bool,
    key: Option<Key>,
    keys_down: FxHashSet<Key>,
}

impl InputState {
    /// Fold one event into the state.
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::MouseMoved { x, y } => self.move_to(x, y),
            InputEvent::MouseDragged { x, y, button }
            | InputEvent::MousePressed { x, y, button } => {
                self.move_to(x, y);
                self.mouse_button = button;
                self.mouse_pressed = true;
            }
            InputEvent::MouseReleased { x, y, button } => {
                self.move_to(x, y);
                self.mouse_button = button;
                self.mouse_pressed = false;
            }
            InputEvent::MouseWheel { .. } => {}
            InputEvent::KeyPressed(key) => {
                self.key = Some(key);
                self.keys_down.insert(key);
            }
            InputEvent::KeyReleased(key) => {
                self.key = Some(key);
                self.keys_down.remove(&key);
            }
        }
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.mouse_x = x;
        self.mouse_y = y;
    }

    /// Remember this frame's pointer as the previous position for the next one.
    pub fn commit_frame(&mut self) {
        self.pmouse_x = self.mouse_x;
        self.pmouse_y = self.mouse_y;
    }

    pub fn mouse_x(&self) -> f64 {
        self.mouse_x
    }

    pub fn mouse_y(&self) -> f64 {
        self.mouse_y
    }

    pub fn pmouse_x(&self) -> f64 {
        self.pmouse_x
    }

    pub fn pmouse_y(&self) -> f64 {
        self.pmouse_y
    }

    /// Last button pressed or released.
    pub fn mouse_button(&self) -> MouseButton {
        self.mouse_button
    }

    pub fn mouse_is_pressed(&self) -> bool {
        self.mouse_pressed
    }

    /// Most recently pressed or released key.
    pub fn key(&self) -> Option<Key> {
        self.key
    }

    /// `true` while any key is held.
    pub fn key_is_pressed(&self) -> bool {
        !self.keys_down.is_empty()
    }

    pub fn is_key_down(&self, key: impl Into<Key>) -> bool {
        self.keys_down.contains(&key.into())
    }
}
