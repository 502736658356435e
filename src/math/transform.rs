//! Model transform composition

use crate::core::types::{Mat4, Vec3};

/// Translation, Euler rotation and scale of a model
///
/// Composes as `T * Rx * Ry * Rz * S`, so scale applies first and
/// translation last.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub translation: Vec3,
    /// Rotation about X, Y and Z in degrees
    pub rotation_deg: Vec3,
    pub scale: Vec3,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        translation: Vec3::ZERO,
        rotation_deg: Vec3::ZERO,
        scale: Vec3::ONE,
    };

    /// Translation plus uniform scale, as used for grid cells
    pub fn placed(translation: Vec3, scale: f32) -> Self {
        Self {
            translation,
            scale: Vec3::splat(scale),
            ..Self::IDENTITY
        }
    }

    pub fn with_translation(mut self, translation: Vec3) -> Self {
        self.translation = translation;
        self
    }

    pub fn with_rotation_deg(mut self, rotation_deg: Vec3) -> Self {
        self.rotation_deg = rotation_deg;
        self
    }

    /// Build the model matrix
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.translation)
            * Mat4::from_rotation_x(self.rotation_deg.x.to_radians())
            * Mat4::from_rotation_y(self.rotation_deg.y.to_radians())
            * Mat4::from_rotation_z(self.rotation_deg.z.to_radians())
            * Mat4::from_scale(self.scale)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Push a grid coordinate `gap` away from the origin
///
/// Negative and positive coordinates move outward; zero stays put.
pub fn spread_offset(v: f32, gap: f32) -> f32 {
    let mut out = v;
    if v <= 0.0 {
        out -= gap;
    }
    if v >= 0.0 {
        out += gap;
    }
    out
}
