//! Render pipelines

pub mod shader;
pub mod color;
pub mod textured;

pub use shader::create_shader;
pub use color::ColorPipeline;
pub use textured::TexturedPipeline;

use crate::render::texture::DEPTH_FORMAT;

/// How a pipeline interacts with the depth buffer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DepthMode {
    /// Depth test `Less`, depth writes on
    Tested,
    /// Always passes, never writes depth
    Overlay,
}

impl DepthMode {
    pub fn state(self) -> wgpu::DepthStencilState {
        let (depth_write_enabled, depth_compare) = match self {
            DepthMode::Tested => (true, wgpu::CompareFunction::Less),
            DepthMode::Overlay => (false, wgpu::CompareFunction::Always),
        };
        wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled,
            depth_compare,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }
    }
}

/// Everything that differs between the scene pipelines
pub(crate) struct SceneDescriptor<'a> {
    pub label: &'a str,
    pub layout: &'a wgpu::PipelineLayout,
    pub shader: &'a wgpu::ShaderModule,
    pub vertex_layout: wgpu::VertexBufferLayout<'static>,
    pub surface_format: wgpu::TextureFormat,
    pub depth: DepthMode,
    pub blend: Option<wgpu::BlendState>,
}

/// Triangle-list pipeline with `vs_main`/`fs_main` entry points drawing into
/// the surface with the scene depth buffer
pub(crate) fn scene_pipeline(device: &wgpu::Device, desc: SceneDescriptor<'_>) -> wgpu::RenderPipeline {
    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(desc.label),
        layout: Some(desc.layout),
        vertex: wgpu::VertexState {
            module: desc.shader,
            entry_point: Some("vs_main"),
            buffers: &[desc.vertex_layout],
            compilation_options: Default::default(),
        },
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            // Quads are seen from both sides and blended cubes show their back faces
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: Some(desc.depth.state()),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: desc.shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format: desc.surface_format,
                blend: desc.blend,
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        multiview_mask: None,
        cache: None,
    })
}
