//! Mathematical utilities

pub mod transform;

pub use transform::{Transform, spread_offset};
