//! voxcraft - small GPU demos and a voxel block editor

pub mod core;
pub mod math;
pub mod voxel;
pub mod render;
pub mod demo;
