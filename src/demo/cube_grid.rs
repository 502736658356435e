//! 3x3x3 block of colored cubes under the free-fly camera

use crate::core::camera_controller::FpsCameraController;
use crate::core::config::DemoConfig;
use crate::core::input::InputState;
use crate::core::types::{Mat4, Result, Vec3};
use crate::demo::ColorScene;
use crate::math::{spread_offset, Transform};
use crate::render::context::GpuContext;
use crate::render::frame::FrameTarget;
use crate::render::mesh::color_cube_vertices;
use crate::render::Demo;

/// Gap added between neighbouring cubes
pub const CUBE_GAP: f32 = 0.05;

/// Models of the 27 cubes at `{-1, 0, 1}^3`, spread apart by `CUBE_GAP`
pub fn cube_grid_models() -> Vec<Mat4> {
    let mut models = Vec::with_capacity(27);
    for x in -1..=1 {
        for y in -1..=1 {
            for z in -1..=1 {
                let offset = Vec3::new(
                    spread_offset(x as f32, CUBE_GAP),
                    spread_offset(y as f32, CUBE_GAP),
                    spread_offset(z as f32, CUBE_GAP),
                );
                models.push(Transform::IDENTITY.with_translation(offset).to_matrix());
            }
        }
    }
    models
}

pub struct CubeGridDemo {
    scene: ColorScene,
    controller: FpsCameraController,
    models: Vec<Mat4>,
}

impl Demo for CubeGridDemo {
    fn init(gpu: &GpuContext, config: &DemoConfig) -> Result<Self> {
        log::info!("Cube grid demo: mouse to look, WASD to move, scroll to zoom");
        let models = cube_grid_models();
        Ok(Self {
            scene: ColorScene::new(gpu, config, "color_cube", &color_cube_vertices(), models.len())?,
            controller: FpsCameraController::from_settings(&config.camera),
            models,
        })
    }

    fn captures_mouse(&self) -> bool {
        true
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.scene.resize(width, height);
    }

    fn update(&mut self, input: &InputState, dt: f32) {
        self.controller.update(&mut self.scene.camera, input, dt);
    }

    fn render(&mut self, gpu: &GpuContext, encoder: &mut wgpu::CommandEncoder, target: &FrameTarget<'_>) {
        self.scene.render(gpu, encoder, target, &self.models);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cube_grid_layout() {
        let models = cube_grid_models();
        assert_eq!(models.len(), 27);

        let centers: Vec<Vec3> = models.iter().map(|m| m.w_axis.truncate()).collect();
        assert!(centers.contains(&Vec3::ZERO));
        assert!(centers.iter().any(|c| (*c - Vec3::splat(1.05)).length() < 1e-6));
        assert!(centers.iter().any(|c| (*c - Vec3::new(-1.05, 0.0, 1.05)).length() < 1e-6));
        // Outer cubes are pushed away on every non-zero axis only
        for c in &centers {
            for v in c.to_array() {
                assert!(v == 0.0 || (v.abs() - 1.05).abs() < 1e-6);
            }
        }
    }
}
