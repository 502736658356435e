//! Error types for voxcraft

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("GPU error: {0}")]
    Gpu(String),

    #[error("Window error: {0}")]
    Window(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Shader error in {label}: {message}")]
    Shader { label: String, message: String },

    #[error("Texture error: {0}")]
    Texture(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Voxel index ({x}, {y}, {z}) out of bounds for grid extent {extent}")]
    OutOfBounds {
        x: usize,
        y: usize,
        z: usize,
        extent: usize,
    },
}
