//! Face-colored cube under a keyboard camera

use crate::core::camera_controller::KeyboardCameraController;
use crate::core::config::DemoConfig;
use crate::core::input::InputState;
use crate::core::types::{Mat4, Result, Vec3};
use crate::demo::ColorScene;
use crate::math::Transform;
use crate::render::context::GpuContext;
use crate::render::frame::FrameTarget;
use crate::render::mesh::color_cube_vertices;
use crate::render::Demo;

/// Cube model after spinning `angle_deg` about Y
pub fn spin_model(angle_deg: f32) -> Mat4 {
    Transform::IDENTITY
        .with_rotation_deg(Vec3::new(0.0, angle_deg, 0.0))
        .to_matrix()
}

pub struct CubeDemo {
    scene: ColorScene,
    controller: KeyboardCameraController,
    spin_deg_per_sec: f32,
    angle_deg: f32,
}

impl Demo for CubeDemo {
    fn init(gpu: &GpuContext, config: &DemoConfig) -> Result<Self> {
        log::info!("Cube demo: A/D, W/S, PageUp/PageDown move, Left/Right turn");
        Ok(Self {
            scene: ColorScene::new(gpu, config, "color_cube", &color_cube_vertices(), 1)?,
            controller: KeyboardCameraController::from_settings(&config.camera),
            spin_deg_per_sec: config.spin_deg_per_sec,
            angle_deg: 0.0,
        })
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        self.controller.update(&mut self.scene.camera, input, dt);
        self.angle_deg = (self.angle_deg + self.spin_deg_per_sec * dt) % 360.0;
    }

    fn render(&mut self, gpu: &GpuContext, encoder: &mut wgpu::CommandEncoder, target: &FrameTarget<'_>) {
        self.scene.render(gpu, encoder, target, &[spin_model(self.angle_deg)]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_spin_is_identity() {
        assert_eq!(spin_model(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_quarter_turn() {
        // +Z face turns to +X after 90 degrees about Y
        let p = spin_model(90.0).transform_point3(Vec3::new(0.0, 0.0, 0.5));
        assert!((p - Vec3::new(0.5, 0.0, 0.0)).length() < 1e-6);
    }
}
