//! Single grid cell

use crate::core::types::Vec3;
use crate::math::Transform;

/// One cube of the editor grid
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Voxel {
    /// World position of the cube center, fixed at grid creation
    position: Vec3,
    /// Uniform render scale
    scale: f32,
    /// Whether the cube is drawn in the main pass
    pub visible: bool,
    /// Owned by the editor, which keeps exactly one cell selected
    pub(crate) selected: bool,
    /// Index into [`COLOR_LIST`](super::palette::COLOR_LIST)
    pub color_index: usize,
    /// Block texture slot
    pub texture_index: usize,
}

impl Voxel {
    /// Visible, unselected cell with the empty texture
    pub fn new(position: Vec3, scale: f32) -> Self {
        Self {
            position,
            scale,
            visible: true,
            selected: false,
            color_index: 0,
            texture_index: 0,
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    /// Drawn in the main pass when visible or under the cursor
    pub fn is_drawn(&self) -> bool {
        self.visible || self.selected
    }

    /// Model transform of the cube
    pub fn transform(&self) -> Transform {
        Transform::placed(self.position, self.scale)
    }
}
