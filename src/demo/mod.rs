//! The demo programs
//!
//! Each demo implements [`Demo`](crate::render::Demo) and is started by one
//! binary. The three color demos share [`ColorScene`].

pub mod quad;
pub mod cube;
pub mod cube_grid;
pub mod block_editor;

pub use quad::QuadDemo;
pub use cube::CubeDemo;
pub use cube_grid::CubeGridDemo;
pub use block_editor::BlockEditorDemo;

use crate::core::camera::Camera;
use crate::core::config::DemoConfig;
use crate::core::types::{Mat4, Result};
use crate::render::buffer::{CameraBuffer, ModelBuffer};
use crate::render::context::GpuContext;
use crate::render::frame::{begin_scene_pass, clear_color, FrameTarget};
use crate::render::mesh::{ColorVertex, Mesh};
use crate::render::pipeline::ColorPipeline;

/// Camera aspect ratio for the current surface
pub(crate) fn surface_aspect(gpu: &GpuContext) -> f32 {
    let (width, height) = gpu.size();
    width as f32 / height.max(1) as f32
}

/// Camera, uniforms, color pipeline and one mesh
pub struct ColorScene {
    pub camera: Camera,
    camera_buffer: CameraBuffer,
    models: ModelBuffer,
    pipeline: ColorPipeline,
    mesh: Mesh,
    clear: wgpu::Color,
}

impl ColorScene {
    /// Set up a scene drawing `vertices` up to `instances` times per frame
    pub fn new(
        gpu: &GpuContext,
        config: &DemoConfig,
        label: &str,
        vertices: &[ColorVertex],
        instances: usize,
    ) -> Result<Self> {
        let camera = Camera::from_settings(&config.camera, surface_aspect(gpu));
        let camera_buffer = CameraBuffer::new(&gpu.device);
        let models = ModelBuffer::new(&gpu.device, instances);
        let pipeline = ColorPipeline::new(&gpu.device, gpu.format(), &camera_buffer, &models)?;
        let mesh = Mesh::new(&gpu.device, label, vertices);

        Ok(Self {
            camera,
            camera_buffer,
            models,
            pipeline,
            mesh,
            clear: clear_color(config.clear_color),
        })
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.set_aspect(width as f32, height as f32);
    }

    /// Draw the mesh once per model matrix
    pub fn render(
        &mut self,
        gpu: &GpuContext,
        encoder: &mut wgpu::CommandEncoder,
        target: &FrameTarget<'_>,
        models: &[Mat4],
    ) {
        self.camera_buffer.update(&gpu.queue, &self.camera);
        self.models.write(&gpu.device, &gpu.queue, models);

        let mut pass = begin_scene_pass(encoder, target, self.clear);
        self.pipeline.draw(&mut pass, &self.camera_buffer, &self.models, &self.mesh, 0..models.len());
    }
}
