//! Per-draw model matrices behind one dynamic-offset uniform binding

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};
use crate::core::types::Mat4;

/// Byte distance between consecutive model slots
///
/// Dynamic uniform offsets must be multiples of
/// `min_uniform_buffer_offset_alignment`, which is at most 256.
pub const MODEL_STRIDE: u64 = 256;

/// Model uniform data for GPU (must match `Model` in the WGSL shaders)
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct ModelUniform {
    pub model: [[f32; 4]; 4],
}

impl ModelUniform {
    pub fn from_matrix(model: Mat4) -> Self {
        Self { model: model.to_cols_array_2d() }
    }
}

/// Dynamic offset of slot `index`
pub fn model_offset(index: usize) -> u32 {
    (index as u64 * MODEL_STRIDE) as u32
}

/// Pack matrices into `MODEL_STRIDE`-spaced slots
pub fn pack_models(models: &[Mat4]) -> Vec<u8> {
    let mut bytes = vec![0u8; models.len() * MODEL_STRIDE as usize];
    for (i, model) in models.iter().enumerate() {
        let start = i * MODEL_STRIDE as usize;
        let uniform = ModelUniform::from_matrix(*model);
        bytes[start..start + std::mem::size_of::<ModelUniform>()]
            .copy_from_slice(bytemuck::bytes_of(&uniform));
    }
    bytes
}

/// Growable uniform buffer holding one model matrix per draw
pub struct ModelBuffer {
    buffer: wgpu::Buffer,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    /// Number of slots the buffer can hold
    capacity: usize,
}

impl ModelBuffer {
    /// Create a buffer with room for `capacity` draws
    pub fn new(device: &wgpu::Device, capacity: usize) -> Self {
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("model_bind_group_layout"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: NonZeroU64::new(std::mem::size_of::<ModelUniform>() as u64),
                },
                count: None,
            }],
        });

        let capacity = capacity.max(1);
        let (buffer, bind_group) = Self::allocate(device, &bind_group_layout, capacity);

        Self {
            buffer,
            bind_group_layout,
            bind_group,
            capacity,
        }
    }

    fn allocate(
        device: &wgpu::Device,
        layout: &wgpu::BindGroupLayout,
        capacity: usize,
    ) -> (wgpu::Buffer, wgpu::BindGroup) {
        let buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("model_uniforms"),
            size: capacity as u64 * MODEL_STRIDE,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("model_bind_group"),
            layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                    buffer: &buffer,
                    offset: 0,
                    size: NonZeroU64::new(std::mem::size_of::<ModelUniform>() as u64),
                }),
            }],
        });

        (buffer, bind_group)
    }

    /// Upload `models`, growing the buffer when needed
    pub fn write(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, models: &[Mat4]) {
        if models.is_empty() {
            return;
        }
        if models.len() > self.capacity {
            let capacity = models.len().next_power_of_two();
            log::debug!("Growing model buffer from {} to {} slots", self.capacity, capacity);
            let (buffer, bind_group) = Self::allocate(device, &self.bind_group_layout, capacity);
            self.buffer = buffer;
            self.bind_group = bind_group;
            self.capacity = capacity;
        }
        queue.write_buffer(&self.buffer, 0, &pack_models(models));
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get bind group layout
    pub fn bind_group_layout(&self) -> &wgpu::BindGroupLayout {
        &self.bind_group_layout
    }

    /// Get bind group
    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    #[test]
    fn test_uniform_size() {
        assert_eq!(std::mem::size_of::<ModelUniform>(), 64);
    }

    #[test]
    fn test_offsets() {
        assert_eq!(model_offset(0), 0);
        assert_eq!(model_offset(1), 256);
        assert_eq!(model_offset(1000), 256_000);
    }

    #[test]
    fn test_pack_models_layout() {
        let a = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
        let b = Mat4::from_scale(Vec3::splat(0.5));
        let bytes = pack_models(&[a, b]);

        assert_eq!(bytes.len(), 2 * MODEL_STRIDE as usize);
        let a_cols = a.to_cols_array();
        let b_cols = b.to_cols_array();
        assert_eq!(&bytes[0..64], bytemuck::cast_slice::<f32, u8>(&a_cols));
        assert_eq!(&bytes[256..320], bytemuck::cast_slice::<f32, u8>(&b_cols));
        // Padding between slots stays zeroed
        assert!(bytes[64..256].iter().all(|&b| b == 0));
    }
}
