//! Vertex formats and the built-in meshes
//!
//! All meshes are non-indexed triangle lists. Cube faces wind
//! counter-clockwise seen from outside, and texture coordinates run with V
//! pointing up (the textured shader flips V when sampling).

use bytemuck::{Pod, Zeroable};
use wgpu::util::DeviceExt;

/// Position + color vertex used by the color pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct ColorVertex {
    pub position: [f32; 3],
    pub color: [f32; 3],
}

impl ColorVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<ColorVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };
}

/// Position + texture coordinate vertex used by the textured pipeline
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct TexVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

impl TexVertex {
    pub const LAYOUT: wgpu::VertexBufferLayout<'static> = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<TexVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2],
    };
}

pub const RED: [f32; 3] = [1.0, 0.0, 0.0];
pub const GREEN: [f32; 3] = [0.0, 1.0, 0.0];
pub const BLUE: [f32; 3] = [0.0, 0.0, 1.0];
pub const CYAN: [f32; 3] = [0.0, 1.0, 1.0];
pub const MAGENTA: [f32; 3] = [1.0, 0.0, 1.0];
pub const YELLOW: [f32; 3] = [1.0, 1.0, 0.0];

/// One cube face: corners bottom-left, bottom-right, top-right, top-left
/// seen from outside, and the face color
struct Face {
    corners: [[f32; 3]; 4],
    color: [f32; 3],
}

const H: f32 = 0.5;

const CUBE_FACES: [Face; 6] = [
    // Front (+Z)
    Face { corners: [[-H, -H, H], [H, -H, H], [H, H, H], [-H, H, H]], color: RED },
    // Back (-Z)
    Face { corners: [[H, -H, -H], [-H, -H, -H], [-H, H, -H], [H, H, -H]], color: GREEN },
    // Left (-X)
    Face { corners: [[-H, -H, -H], [-H, -H, H], [-H, H, H], [-H, H, -H]], color: BLUE },
    // Right (+X)
    Face { corners: [[H, -H, H], [H, -H, -H], [H, H, -H], [H, H, H]], color: CYAN },
    // Bottom (-Y)
    Face { corners: [[-H, -H, -H], [H, -H, -H], [H, -H, H], [-H, -H, H]], color: MAGENTA },
    // Top (+Y)
    Face { corners: [[-H, H, H], [H, H, H], [H, H, -H], [-H, H, -H]], color: YELLOW },
];

/// Corner order of the two triangles of a face
const FACE_TRIANGLES: [usize; 6] = [0, 1, 2, 0, 2, 3];
const CORNER_UVS: [[f32; 2]; 4] = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]];

/// Unit quad in the XY plane with a color per corner
pub fn quad_vertices() -> Vec<ColorVertex> {
    let corners = [
        ([-H, -H, 0.0], MAGENTA),
        ([H, -H, 0.0], CYAN),
        ([H, H, 0.0], YELLOW),
        ([-H, H, 0.0], CYAN),
    ];
    FACE_TRIANGLES
        .iter()
        .map(|&i| ColorVertex { position: corners[i].0, color: corners[i].1 })
        .collect()
}

/// Unit cube with one solid color per face
pub fn color_cube_vertices() -> Vec<ColorVertex> {
    CUBE_FACES
        .iter()
        .flat_map(|face| {
            FACE_TRIANGLES
                .iter()
                .map(move |&i| ColorVertex { position: face.corners[i], color: face.color })
        })
        .collect()
}

/// Unit cube with the full texture on every face
pub fn textured_cube_vertices() -> Vec<TexVertex> {
    CUBE_FACES
        .iter()
        .flat_map(|face| {
            FACE_TRIANGLES
                .iter()
                .map(move |&i| TexVertex { position: face.corners[i], uv: CORNER_UVS[i] })
        })
        .collect()
}

/// Vertex buffer plus its vertex count
pub struct Mesh {
    buffer: wgpu::Buffer,
    vertex_count: u32,
}

impl Mesh {
    pub fn new<V: Pod>(device: &wgpu::Device, label: &str, vertices: &[V]) -> Self {
        let buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: bytemuck::cast_slice(vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        Self { buffer, vertex_count: vertices.len() as u32 }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Bind as vertex buffer 0
    pub fn bind(&self, pass: &mut wgpu::RenderPass<'_>) {
        pass.set_vertex_buffer(0, self.buffer.slice(..));
    }
}
