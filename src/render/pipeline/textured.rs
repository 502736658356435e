//! Textured block pipeline in depth-tested and overlay variants

use crate::core::types::Result;
use crate::render::buffer::{model_offset, CameraBuffer, ModelBuffer};
use crate::render::draw_list::CubeDraw;
use crate::render::mesh::{Mesh, TexVertex};
use crate::render::pipeline::{create_shader, scene_pipeline, DepthMode, SceneDescriptor};
use crate::render::texture::TexturePalette;

/// Alpha-blended textured cubes
///
/// Both variants share one layout: camera (group 0), model (group 1) and
/// block texture (group 2).
pub struct TexturedPipeline {
    tested: wgpu::RenderPipeline,
    overlay: wgpu::RenderPipeline,
    texture_layout: wgpu::BindGroupLayout,
}

impl TexturedPipeline {
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        camera: &CameraBuffer,
        models: &ModelBuffer,
    ) -> Result<Self> {
        let shader = create_shader(device, "textured_shader", include_str!("../../../shaders/textured.wgsl"))?;

        let texture_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("block_texture_bind_group_layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("textured_pipeline_layout"),
            bind_group_layouts: &[
                camera.bind_group_layout(),
                models.bind_group_layout(),
                &texture_layout,
            ],
            immediate_size: 0,
        });

        let build = |label: &'static str, depth: DepthMode| {
            scene_pipeline(device, SceneDescriptor {
                label,
                layout: &layout,
                shader: &shader,
                vertex_layout: TexVertex::LAYOUT,
                surface_format,
                depth,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
            })
        };

        Ok(Self {
            tested: build("textured_pipeline", DepthMode::Tested),
            overlay: build("textured_overlay_pipeline", DepthMode::Overlay),
            texture_layout,
        })
    }

    /// Layout block textures must be bound with
    pub fn texture_bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.texture_layout
    }

    fn variant(&self, depth_test: bool) -> &wgpu::RenderPipeline {
        if depth_test { &self.tested } else { &self.overlay }
    }

    /// Draw `draws` in order; draw `i` reads model slot `i`
    pub fn draw(
        &self,
        pass: &mut wgpu::RenderPass<'_>,
        camera: &CameraBuffer,
        models: &ModelBuffer,
        palette: &TexturePalette,
        mesh: &Mesh,
        draws: &[CubeDraw],
    ) {
        let mut bound: Option<bool> = None;
        mesh.bind(pass);

        for (slot, draw) in draws.iter().enumerate() {
            let Some(texture) = palette.get(draw.texture_slot) else {
                log::warn!("No texture in slot {}", draw.texture_slot);
                continue;
            };
            if bound != Some(draw.depth_test) {
                pass.set_pipeline(self.variant(draw.depth_test));
                if bound.is_none() {
                    pass.set_bind_group(0, camera.bind_group(), &[]);
                }
                bound = Some(draw.depth_test);
            }
            pass.set_bind_group(1, models.bind_group(), &[model_offset(slot)]);
            pass.set_bind_group(2, texture.bind_group(), &[]);
            pass.draw(0..mesh.vertex_count(), 0..1);
        }
    }
}
