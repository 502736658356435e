//! Textures: depth target and block textures

pub mod depth;
pub mod block;

pub use depth::{DepthTexture, DEPTH_FORMAT};
pub use block::{BlockTexture, TexturePalette};
