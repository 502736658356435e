//! Camera controllers
//!
//! Two flavours are shared by the demos: a keyboard-only controller that
//! slides the camera along world axes and turns its heading, and a
//! first-person controller with mouse look and scroll zoom.

use crate::core::camera::Camera;
use crate::core::config::CameraSettings;
use crate::core::input::InputState;
use crate::core::types::Vec3;
use winit::keyboard::KeyCode;

/// FPS-style camera controller with WASD movement, mouse look and scroll zoom
pub struct FpsCameraController {
    /// Movement speed in units per second
    pub speed: f32,
    /// Degrees of rotation per pixel of mouse motion
    pub sensitivity: f32,
}

impl FpsCameraController {
    /// Create new controller
    pub fn new(speed: f32, sensitivity: f32) -> Self {
        Self { speed, sensitivity }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(settings.speed, settings.sensitivity)
    }

    /// Update camera based on input
    pub fn update(&mut self, camera: &mut Camera, input: &InputState, dt: f32) {
        let (dx, dy) = input.mouse_delta();
        if dx != 0.0 || dy != 0.0 {
            // Screen y grows downward, pitch grows upward
            camera.look(dx * self.sensitivity, -dy * self.sensitivity);
        }

        let scroll = input.scroll_delta();
        if scroll != 0.0 {
            camera.zoom(scroll);
        }

        let step = self.speed * dt;
        let front = camera.front();
        let right = camera.right();

        if input.is_key_pressed(KeyCode::KeyW) {
            camera.position += front * step;
        }
        if input.is_key_pressed(KeyCode::KeyS) {
            camera.position -= front * step;
        }
        if input.is_key_pressed(KeyCode::KeyA) {
            camera.position -= right * step;
        }
        if input.is_key_pressed(KeyCode::KeyD) {
            camera.position += right * step;
        }
    }
}

impl Default for FpsCameraController {
    fn default() -> Self {
        Self::new(5.0, 0.05)
    }
}

/// Keyboard camera: world-axis translation plus heading turn
///
/// A/D move along X, PageUp/PageDown along Y, W/S along Z. The left and
/// right arrows turn the heading; the sign of `turn_speed` picks which way.
pub struct KeyboardCameraController {
    /// Movement speed in units per second
    pub speed: f32,
    /// Turn speed in degrees per second
    pub turn_speed: f32,
}

impl KeyboardCameraController {
    pub fn new(speed: f32, turn_speed: f32) -> Self {
        Self { speed, turn_speed }
    }

    pub fn from_settings(settings: &CameraSettings) -> Self {
        Self::new(settings.speed, settings.turn_speed)
    }

    /// Update camera based on input
    pub fn update(&mut self, camera: &mut Camera, input: &InputState, dt: f32) {
        let step = self.speed * dt;
        let bindings = [
            (KeyCode::KeyA, Vec3::NEG_X),
            (KeyCode::KeyD, Vec3::X),
            (KeyCode::PageUp, Vec3::Y),
            (KeyCode::PageDown, Vec3::NEG_Y),
            (KeyCode::KeyW, Vec3::NEG_Z),
            (KeyCode::KeyS, Vec3::Z),
        ];
        for (key, axis) in bindings {
            if input.is_key_pressed(key) {
                camera.position += axis * step;
            }
        }

        let turn = self.turn_speed * dt;
        if input.is_key_pressed(KeyCode::ArrowLeft) {
            camera.look(turn, 0.0);
        }
        if input.is_key_pressed(KeyCode::ArrowRight) {
            camera.look(-turn, 0.0);
        }
    }
}

impl Default for KeyboardCameraController {
    fn default() -> Self {
        Self::new(1.0, 10.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use winit::event::ElementState;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).length() < 1e-4
    }

    fn pressed(keys: &[KeyCode]) -> InputState {
        let mut input = InputState::new();
        for key in keys {
            input.process_key(*key, ElementState::Pressed, false);
        }
        input
    }

    #[test]
    fn test_fps_forward_moves_along_front() {
        let mut camera = Camera::default();
        let mut controller = FpsCameraController::default();
        let input = pressed(&[KeyCode::KeyW]);

        controller.update(&mut camera, &input, 0.5);
        assert!(approx(camera.position, Vec3::new(0.0, 0.0, 0.5)));
    }

    #[test]
    fn test_fps_strafe() {
        let mut camera = Camera::default();
        let mut controller = FpsCameraController::default();
        let input = pressed(&[KeyCode::KeyD]);

        controller.update(&mut camera, &input, 1.0);
        assert!(approx(camera.position, Vec3::new(5.0, 0.0, 3.0)));
    }

    #[test]
    fn test_fps_mouse_look() {
        let mut camera = Camera::default();
        let mut controller = FpsCameraController::default();
        let mut input = InputState::new();
        input.set_mouse_captured(true);
        // 100 px right and 100 px up
        input.process_mouse_motion((100.0, -100.0));
        input.begin_frame();

        controller.update(&mut camera, &input, 0.0);
        assert!((camera.yaw() - (-85.0)).abs() < 1e-4);
        assert!((camera.pitch() - 5.0).abs() < 1e-4);
    }

    #[test]
    fn test_fps_scroll_zoom() {
        let mut camera = Camera::default();
        let mut controller = FpsCameraController::default();
        let mut input = InputState::new();
        input.process_scroll(3.0);
        input.begin_frame();

        controller.update(&mut camera, &input, 0.0);
        assert_eq!(camera.fov(), 42.0);
    }

    #[test]
    fn test_keyboard_axes() {
        let mut camera = Camera::default();
        let mut controller = KeyboardCameraController::default();
        let input = pressed(&[KeyCode::KeyD, KeyCode::PageUp, KeyCode::KeyW]);

        controller.update(&mut camera, &input, 2.0);
        assert!(approx(camera.position, Vec3::new(2.0, 2.0, 1.0)));
    }

    #[test]
    fn test_keyboard_turn() {
        let mut camera = Camera::default();
        let mut controller = KeyboardCameraController::default();
        let input = pressed(&[KeyCode::ArrowLeft]);

        controller.update(&mut camera, &input, 1.0);
        assert!((camera.yaw() - (-80.0)).abs() < 1e-4);
        assert_eq!(camera.pitch(), 0.0);
    }

    #[test]
    fn test_quad_preset_left_arrow_turns_left() {
        let settings = crate::core::config::DemoConfig::quad_camera().camera;
        let mut camera = Camera::from_settings(&settings, 1.0);
        let mut controller = KeyboardCameraController::from_settings(&settings);
        let input = pressed(&[KeyCode::ArrowLeft]);

        controller.update(&mut camera, &input, 1.0);
        assert!((camera.yaw() - (-100.0)).abs() < 1e-4);
        assert!(camera.front().x < 0.0);
    }

    #[test]
    fn test_cube_preset_left_arrow_turns_right() {
        let settings = crate::core::config::DemoConfig::cube_camera().camera;
        let mut camera = Camera::from_settings(&settings, 1.0);
        let mut controller = KeyboardCameraController::from_settings(&settings);
        let input = pressed(&[KeyCode::ArrowLeft]);

        controller.update(&mut camera, &input, 1.0);
        assert!(camera.front().x > 0.0);
    }
}
