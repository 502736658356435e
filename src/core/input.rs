//! Input state tracking

use std::collections::HashSet;
use winit::event::{ElementState, KeyEvent, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Pixels of trackpad scroll treated as one wheel line
const PIXELS_PER_LINE: f32 = 20.0;

/// Tracks keyboard, mouse and scroll input between frames
pub struct InputState {
    /// Currently pressed keys
    keys_pressed: HashSet<KeyCode>,
    /// Keys pressed this frame (auto-repeat excluded)
    keys_just_pressed: HashSet<KeyCode>,
    /// Mouse movement delta for the current frame
    mouse_delta: (f32, f32),
    /// Raw motion accumulated since the last frame
    mouse_delta_accumulated: (f32, f32),
    /// Scroll lines for the current frame (positive = wheel up)
    scroll_delta: f32,
    scroll_accumulated: f32,
    /// Whether mouse is captured
    mouse_captured: bool,
}

impl InputState {
    /// Create new input state
    pub fn new() -> Self {
        Self {
            keys_pressed: HashSet::new(),
            keys_just_pressed: HashSet::new(),
            mouse_delta: (0.0, 0.0),
            mouse_delta_accumulated: (0.0, 0.0),
            scroll_delta: 0.0,
            scroll_accumulated: 0.0,
            mouse_captured: false,
        }
    }

    /// Process a window event
    pub fn process_event(&mut self, event: &WindowEvent) {
        match event {
            WindowEvent::KeyboardInput {
                event: KeyEvent {
                    physical_key: PhysicalKey::Code(key_code),
                    state,
                    repeat,
                    ..
                },
                ..
            } => {
                self.process_key(*key_code, *state, *repeat);
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let lines = match delta {
                    MouseScrollDelta::LineDelta(_, y) => *y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 / PIXELS_PER_LINE,
                };
                self.process_scroll(lines);
            }
            WindowEvent::Focused(false) => {
                // Key releases are lost while unfocused
                self.keys_pressed.clear();
            }
            _ => {}
        }
    }

    /// Record a key transition
    pub fn process_key(&mut self, key_code: KeyCode, state: ElementState, repeat: bool) {
        match state {
            ElementState::Pressed => {
                if !repeat && !self.keys_pressed.contains(&key_code) {
                    self.keys_just_pressed.insert(key_code);
                }
                self.keys_pressed.insert(key_code);
            }
            ElementState::Released => {
                self.keys_pressed.remove(&key_code);
            }
        }
    }

    /// Process device event for raw mouse motion (when cursor is grabbed)
    pub fn process_mouse_motion(&mut self, delta: (f64, f64)) {
        if self.mouse_captured {
            self.mouse_delta_accumulated.0 += delta.0 as f32;
            self.mouse_delta_accumulated.1 += delta.1 as f32;
        }
    }

    /// Record scroll in wheel lines
    pub fn process_scroll(&mut self, lines: f32) {
        self.scroll_accumulated += lines;
    }

    /// Latch accumulated motion for this frame. Call before reading input.
    pub fn begin_frame(&mut self) {
        self.mouse_delta = self.mouse_delta_accumulated;
        self.mouse_delta_accumulated = (0.0, 0.0);
        self.scroll_delta = self.scroll_accumulated;
        self.scroll_accumulated = 0.0;
    }

    /// Call at end of frame to reset per-frame state
    pub fn end_frame(&mut self) {
        self.keys_just_pressed.clear();
        self.mouse_delta = (0.0, 0.0);
        self.scroll_delta = 0.0;
    }

    /// Check if key is currently pressed
    pub fn is_key_pressed(&self, key: KeyCode) -> bool {
        self.keys_pressed.contains(&key)
    }

    /// Check if key was just pressed this frame
    pub fn is_key_just_pressed(&self, key: KeyCode) -> bool {
        self.keys_just_pressed.contains(&key)
    }

    /// Get mouse delta for this frame, in pixels (y grows downward)
    pub fn mouse_delta(&self) -> (f32, f32) {
        self.mouse_delta
    }

    /// Get scroll lines for this frame
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_delta
    }

    /// Set mouse captured state
    pub fn set_mouse_captured(&mut self, captured: bool) {
        self.mouse_captured = captured;
        self.mouse_delta = (0.0, 0.0);
        self.mouse_delta_accumulated = (0.0, 0.0);
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_press() {
        let mut input = InputState::new();

        assert!(!input.is_key_pressed(KeyCode::KeyW));

        input.process_key(KeyCode::KeyW, ElementState::Pressed, false);

        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(input.is_key_just_pressed(KeyCode::KeyW));

        input.end_frame();

        assert!(input.is_key_pressed(KeyCode::KeyW));
        assert!(!input.is_key_just_pressed(KeyCode::KeyW));

        input.process_key(KeyCode::KeyW, ElementState::Released, false);
        assert!(!input.is_key_pressed(KeyCode::KeyW));
    }

    #[test]
    fn test_repeat_is_not_a_new_press() {
        let mut input = InputState::new();
        input.process_key(KeyCode::Space, ElementState::Pressed, false);
        input.end_frame();

        input.process_key(KeyCode::Space, ElementState::Pressed, true);
        assert!(!input.is_key_just_pressed(KeyCode::Space));
    }

    #[test]
    fn test_press_and_release_within_frame() {
        let mut input = InputState::new();
        input.process_key(KeyCode::Delete, ElementState::Pressed, false);
        input.process_key(KeyCode::Delete, ElementState::Released, false);

        assert!(input.is_key_just_pressed(KeyCode::Delete));
        assert!(!input.is_key_pressed(KeyCode::Delete));
    }

    #[test]
    fn test_mouse_motion_only_when_captured() {
        let mut input = InputState::new();
        input.process_mouse_motion((5.0, 3.0));
        input.begin_frame();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
        input.end_frame();

        input.set_mouse_captured(true);
        input.process_mouse_motion((5.0, 3.0));
        input.process_mouse_motion((1.0, -1.0));
        input.begin_frame();
        assert_eq!(input.mouse_delta(), (6.0, 2.0));

        input.end_frame();
        assert_eq!(input.mouse_delta(), (0.0, 0.0));
    }

    #[test]
    fn test_scroll_accumulates_per_frame() {
        let mut input = InputState::new();
        input.process_scroll(1.0);
        input.process_scroll(2.0);
        input.begin_frame();
        assert_eq!(input.scroll_delta(), 3.0);

        input.end_frame();
        input.begin_frame();
        assert_eq!(input.scroll_delta(), 0.0);
    }
}
