//! Block texture slots and the color list

/// Number of block texture slots cycled by the editor
pub const TEXTURE_SLOT_COUNT: usize = 3;

/// Outline-only block, drawn without depth testing
pub const EMPTY_SLOT: usize = 0;
/// Moss block, also used to mark the selected cell
pub const MOSS_SLOT: usize = 1;
pub const GLASS_SLOT: usize = 2;

/// Texture used for the selected cell
pub const SELECTION_SLOT: usize = MOSS_SLOT;

/// File name of each texture slot, relative to the assets directory
pub const BLOCK_TEXTURE_FILES: [&str; TEXTURE_SLOT_COUNT] = [
    "empty.png",
    "moss_block.png",
    "glass.png",
];

/// RGBA colors addressable by a cell's color index
pub const COLOR_LIST: [[f32; 4]; 9] = [
    [0.5, 0.5, 0.5, 0.5], // gray, reserved for the interface
    [1.0, 0.0, 0.0, 1.0], // red
    [0.0, 1.0, 0.0, 1.0], // green
    [0.0, 0.0, 1.0, 1.0], // blue
    [1.0, 1.0, 0.0, 1.0], // yellow
    [1.0, 0.0, 1.0, 1.0], // magenta
    [0.0, 1.0, 1.0, 1.0], // cyan
    [1.0, 1.0, 1.0, 1.0], // white
    [0.0, 0.0, 0.0, 1.0], // black
];
