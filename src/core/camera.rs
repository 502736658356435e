//! Camera for 3D rendering

use crate::core::config::CameraSettings;
use crate::core::types::{Mat4, Vec3};

/// Pitch limit in degrees, keeps the view from flipping over the poles
pub const PITCH_LIMIT: f32 = 89.0;
/// Narrowest field of view reachable by zooming, in degrees
pub const MIN_FOV: f32 = 1.0;
/// Widest field of view reachable by zooming, in degrees
pub const MAX_FOV: f32 = 120.0;

/// Free-fly camera driven by yaw/pitch angles
///
/// Angles are kept in degrees. The front, up and right vectors are derived
/// from them every time they change.
#[derive(Clone, Debug)]
pub struct Camera {
    /// World position
    pub position: Vec3,
    yaw: f32,
    pitch: f32,
    front: Vec3,
    up: Vec3,
    right: Vec3,
    /// Vertical field of view in degrees
    fov: f32,
    /// Aspect ratio (width / height)
    pub aspect: f32,
    /// Near clip plane
    pub near: f32,
    /// Far clip plane
    pub far: f32,
}

impl Camera {
    /// Create a new camera
    pub fn new(position: Vec3, yaw: f32, pitch: f32, fov: f32, aspect: f32) -> Self {
        let mut camera = Self {
            position,
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            front: -Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            fov,
            aspect,
            near: 0.1,
            far: 100.0,
        };
        camera.update_vectors();
        camera
    }

    /// Create camera from configuration
    pub fn from_settings(settings: &CameraSettings, aspect: f32) -> Self {
        let mut camera = Self::new(
            Vec3::from_array(settings.position),
            settings.yaw,
            settings.pitch,
            settings.fov,
            aspect,
        );
        camera.near = settings.near;
        camera.far = settings.far;
        camera
    }

    /// Rotate by the given angle deltas in degrees
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.yaw += yaw_delta;
        self.pitch = (self.pitch + pitch_delta).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    /// Apply a scroll step to the field of view
    ///
    /// Positive `scroll_y` (wheel up) narrows the view.
    pub fn zoom(&mut self, scroll_y: f32) {
        if (MIN_FOV..=MAX_FOV).contains(&self.fov) {
            self.fov -= scroll_y;
        }
        self.fov = self.fov.clamp(MIN_FOV, MAX_FOV);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ).normalize();
        self.right = self.front.cross(Vec3::Y).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    /// Get view matrix (world to camera space)
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    /// Get projection matrix (camera to clip space, depth in [0, 1])
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), self.aspect, self.near, self.far)
    }

    /// Get forward direction
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Get right direction
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Get up direction
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Yaw in degrees
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Field of view in degrees
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Update aspect ratio (call on window resize)
    pub fn set_aspect(&mut self, width: f32, height: f32) {
        if height > 0.0 {
            self.aspect = width / height;
        }
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::new(0.0, 0.0, 3.0), -90.0, 0.0, 45.0, 800.0 / 600.0)
    }
}
