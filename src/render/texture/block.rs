//! Block textures loaded from image files

use std::path::{Path, PathBuf};

use crate::core::error::Error;
use crate::core::types::Result;
use crate::voxel::palette::BLOCK_TEXTURE_FILES;

/// Decoded RGBA8 image
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextureImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextureImage {
    /// Decode an image file into RGBA8
    pub fn load(path: &Path) -> Result<Self> {
        let image = image::open(path)
            .map_err(|e| Error::Texture(format!("{}: {}", path.display(), e)))?
            .to_rgba8();
        let (width, height) = image.dimensions();
        Ok(Self { width, height, pixels: image.into_raw() })
    }

    /// 1x1 fully transparent image
    pub fn placeholder() -> Self {
        Self { width: 1, height: 1, pixels: vec![0, 0, 0, 0] }
    }

    /// Load, or log the failure and fall back to the placeholder
    pub fn load_or_placeholder(path: &Path) -> Self {
        match Self::load(path) {
            Ok(image) => {
                log::info!("Loaded texture {} ({}x{})", path.display(), image.width, image.height);
                image
            }
            Err(e) => {
                log::error!("Failed to load texture: {}", e);
                Self::placeholder()
            }
        }
    }
}

/// Paths of the block textures in palette slot order
pub fn block_texture_paths(dir: &Path) -> Vec<PathBuf> {
    BLOCK_TEXTURE_FILES.iter().map(|name| dir.join(name)).collect()
}

/// Sampler shared by every block texture
///
/// Nearest filtering keeps the pixel-art texels sharp when magnified.
pub fn block_sampler_descriptor() -> wgpu::SamplerDescriptor<'static> {
    wgpu::SamplerDescriptor {
        label: Some("block_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Nearest,
        min_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    }
}

/// A sampled GPU texture with its bind group
pub struct BlockTexture {
    _texture: wgpu::Texture,
    bind_group: wgpu::BindGroup,
}

impl BlockTexture {
    /// Upload an image and bind it with `sampler` under `layout`
    pub fn upload(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        sampler: &wgpu::Sampler,
        image: &TextureImage,
        label: &str,
    ) -> Self {
        let size = wgpu::Extent3d {
            width: image.width,
            height: image.height,
            depth_or_array_layers: 1,
        };
        let texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some(label),
            size,
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture: &texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            &image.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * image.width),
                rows_per_image: Some(image.height),
            },
            size,
        );
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        Self { _texture: texture, bind_group }
    }

    pub fn bind_group(&self) -> &wgpu::BindGroup {
        &self.bind_group
    }
}

/// One GPU texture per block texture slot
pub struct TexturePalette {
    textures: Vec<BlockTexture>,
    _sampler: wgpu::Sampler,
}

impl TexturePalette {
    /// Load every slot from `dir`; missing or broken files get the placeholder
    pub fn load(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        layout: &wgpu::BindGroupLayout,
        dir: &Path,
    ) -> Self {
        let sampler = device.create_sampler(&block_sampler_descriptor());

        let textures = block_texture_paths(dir)
            .iter()
            .enumerate()
            .map(|(slot, path)| {
                let image = TextureImage::load_or_placeholder(path);
                let label = format!("block_texture_{}", slot);
                BlockTexture::upload(device, queue, layout, &sampler, &image, &label)
            })
            .collect();

        Self { textures, _sampler: sampler }
    }

    /// Texture for `slot`, if the slot exists
    pub fn get(&self, slot: usize) -> Option<&BlockTexture> {
        self.textures.get(slot)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
