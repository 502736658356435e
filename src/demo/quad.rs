//! Colored quad under a keyboard camera

use crate::core::camera_controller::KeyboardCameraController;
use crate::core::config::DemoConfig;
use crate::core::input::InputState;
use crate::core::types::{Mat4, Result, Vec3};
use crate::demo::ColorScene;
use crate::math::Transform;
use crate::render::context::GpuContext;
use crate::render::frame::FrameTarget;
use crate::render::mesh::quad_vertices;
use crate::render::Demo;

/// Quad model: shifted right and down, tilted 30 degrees about Z
pub fn quad_model() -> Mat4 {
    Transform::IDENTITY
        .with_translation(Vec3::new(0.5, -0.5, 0.0))
        .with_rotation_deg(Vec3::new(0.0, 0.0, 30.0))
        .to_matrix()
}

pub struct QuadDemo {
    scene: ColorScene,
    controller: KeyboardCameraController,
    model: Mat4,
}

impl Demo for QuadDemo {
    fn init(gpu: &GpuContext, config: &DemoConfig) -> Result<Self> {
        log::info!("Quad demo: A/D, W/S, PageUp/PageDown move, Left/Right turn");
        Ok(Self {
            scene: ColorScene::new(gpu, config, "quad", &quad_vertices(), 1)?,
            controller: KeyboardCameraController::from_settings(&config.camera),
            model: quad_model(),
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        self.controller.update(&mut self.scene.camera, input, dt);
    }

    fn render(&mut self, gpu: &GpuContext, encoder: &mut wgpu::CommandEncoder, target: &FrameTarget<'_>) {
        self.scene.render(gpu, encoder, target, &[self.model]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quad_model_places_center() {
        let center = quad_model().transform_point3(Vec3::ZERO);
        assert!((center - Vec3::new(0.5, -0.5, 0.0)).length() < 1e-6);
    }

    #[test]
    fn test_quad_model_rotates_before_translating() {
        // Unit X rotated 30 degrees about Z, then shifted
        let p = quad_model().transform_point3(Vec3::X);
        let (s, c) = 30f32.to_radians().sin_cos();
        assert!((p - Vec3::new(0.5 + c, -0.5 + s, 0.0)).length() < 1e-5);
    }
}
