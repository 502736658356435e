//! Selection cursor

use crate::voxel::grid::GridIndex;

/// One-step cursor movement along a grid axis
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Right
    XPos,
    /// Left
    XNeg,
    /// Up
    YPos,
    /// Down
    YNeg,
    /// Forward
    ZPos,
    /// Back
    ZNeg,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::XPos,
        Direction::XNeg,
        Direction::YPos,
        Direction::YNeg,
        Direction::ZPos,
        Direction::ZNeg,
    ];
}

/// The single selected grid index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cursor {
    index: GridIndex,
}

impl Cursor {
    pub fn new(index: GridIndex) -> Self {
        Self { index }
    }

    /// Starting cursor of the editor: `(0, 0, N - 1)`
    pub fn initial(extent: usize) -> Self {
        Self::new(GridIndex::new(0, 0, extent.saturating_sub(1)))
    }

    pub fn index(&self) -> GridIndex {
        self.index
    }

    /// Neighbouring index in `direction`, or `None` past the grid boundary
    pub fn step(&self, direction: Direction, extent: usize) -> Option<GridIndex> {
        let GridIndex { x, y, z } = self.index;
        let next = match direction {
            Direction::XPos => GridIndex::new(x + 1, y, z),
            Direction::XNeg => GridIndex::new(x.checked_sub(1)?, y, z),
            Direction::YPos => GridIndex::new(x, y + 1, z),
            Direction::YNeg => GridIndex::new(x, y.checked_sub(1)?, z),
            Direction::ZPos => GridIndex::new(x, y, z + 1),
            Direction::ZNeg => GridIndex::new(x, y, z.checked_sub(1)?),
        };
        (next.x < extent && next.y < extent && next.z < extent).then_some(next)
    }

    pub(crate) fn set(&mut self, index: GridIndex) {
        self.index = index;
    }
}
