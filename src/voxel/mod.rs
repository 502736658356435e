//! Voxel grid editing: cells, grid storage, selection cursor and editor

pub mod palette;
pub mod voxel;
pub mod grid;
pub mod cursor;
pub mod editor;

pub use voxel::Voxel;
pub use grid::{GridIndex, VoxelGrid};
pub use cursor::{Cursor, Direction};
pub use editor::{EditorCommand, VoxelEditor};
