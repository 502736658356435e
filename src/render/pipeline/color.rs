//! Vertex-colored geometry pipeline

use std::ops::Range;

use crate::core::types::Result;
use crate::render::buffer::{model_offset, CameraBuffer, ModelBuffer};
use crate::render::mesh::{ColorVertex, Mesh};
use crate::render::pipeline::{create_shader, scene_pipeline, DepthMode, SceneDescriptor};

/// Depth-tested pipeline for meshes carrying per-vertex colors
pub struct ColorPipeline {
    pipeline: wgpu::RenderPipeline,
}

impl ColorPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        camera: &CameraBuffer,
        models: &ModelBuffer,
    ) -> Result<Self> {
        let shader = create_shader(device, "color_shader", include_str!("../../../shaders/color.wgsl"))?;

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("color_pipeline_layout"),
            bind_group_layouts: &[camera.bind_group_layout(), models.bind_group_layout()],
            immediate_size: 0,
        });

        let pipeline = scene_pipeline(device, SceneDescriptor {
            label: "color_pipeline",
            layout: &layout,
            shader: &shader,
            vertex_layout: ColorVertex::LAYOUT,
            surface_format,
            depth: DepthMode::Tested,
            blend: Some(wgpu::BlendState::REPLACE),
        });

        Ok(Self { pipeline })
    }

    /// Draw `mesh` once per model slot in `slots`
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera: &CameraBuffer,
        models: &ModelBuffer,
        mesh: &Mesh,
        slots: Range<usize>,
    ) {
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, camera.bind_group(), &[]);
        mesh.bind(pass);
        for slot in slots {
            pass.set_bind_group(1, models.bind_group(), &[model_offset(slot)]);
            pass.draw(0..mesh.vertex_count(), 0..1);
        }
    }
}
