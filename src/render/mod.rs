//! Rendering system and GPU interfaces

pub mod window;
pub mod context;
pub mod frame;
pub mod buffer;
pub mod pipeline;
pub mod texture;
pub mod mesh;
pub mod draw_list;

pub use window::{run, Demo};
pub use context::GpuContext;
pub use frame::FrameTarget;
pub use draw_list::{build_draw_list, CubeDraw};
