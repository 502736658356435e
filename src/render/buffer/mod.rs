//! GPU buffer management

pub mod camera_buffer;
pub mod model_buffer;

pub use camera_buffer::{CameraBuffer, CameraUniform};
pub use model_buffer::{ModelBuffer, ModelUniform, MODEL_STRIDE, model_offset};
