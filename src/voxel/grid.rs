//! Fixed-extent voxel grid stored as a flat arena
//!
//! Cells are addressed `[y][x][z]`: `offset = (y * N + x) * N + z`. Every
//! access is bounds-checked and reports [`Error::OutOfBounds`] instead of
//! touching memory outside the arena.

use crate::core::config::MAX_GRID_EXTENT;
use crate::core::error::Error;
use crate::core::types::{Result, Vec3};
use crate::voxel::voxel::Voxel;

/// Integer coordinate of a grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct GridIndex {
    pub x: usize,
    pub y: usize,
    pub z: usize,
}

impl GridIndex {
    pub const fn new(x: usize, y: usize, z: usize) -> Self {
        Self { x, y, z }
    }
}

/// Cube of `extent^3` cells
#[derive(Clone, Debug)]
pub struct VoxelGrid {
    extent: usize,
    cells: Vec<Voxel>,
}

impl VoxelGrid {
    /// Build a grid centred on the origin
    ///
    /// Cell `(x, y, z)` is placed at `(x - N/2, y - N/2, z - N/2)` with
    /// integer division, one unit apart. `extent` must lie in
    /// `1..=MAX_GRID_EXTENT`.
    pub fn new(extent: usize, scale: f32) -> Result<Self> {
        if extent == 0 {
            return Err(Error::Config("voxel grid extent must be at least 1".to_string()));
        }
        let count = match extent.checked_mul(extent).and_then(|n| n.checked_mul(extent)) {
            Some(count) if extent <= MAX_GRID_EXTENT => count,
            _ => {
                return Err(Error::Config(format!(
                    "voxel grid extent {} exceeds the maximum of {}",
                    extent, MAX_GRID_EXTENT
                )));
            }
        };

        let half = (extent / 2) as f32;
        let mut cells = Vec::with_capacity(count);
        for y in 0..extent {
            for x in 0..extent {
                for z in 0..extent {
                    let position = Vec3::new(x as f32 - half, y as f32 - half, z as f32 - half);
                    cells.push(Voxel::new(position, scale));
                }
            }
        }

        Ok(Self { extent, cells })
    }

    /// Cells per axis
    pub fn extent(&self) -> usize {
        self.extent
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, index: GridIndex) -> bool {
        index.x < self.extent && index.y < self.extent && index.z < self.extent
    }

    /// Flat arena offset of a cell
    pub fn offset(&self, index: GridIndex) -> Result<usize> {
        if !self.contains(index) {
            return Err(Error::OutOfBounds {
                x: index.x,
                y: index.y,
                z: index.z,
                extent: self.extent,
            });
        }
        Ok(self.offset_unchecked(index))
    }

    fn offset_unchecked(&self, index: GridIndex) -> usize {
        (index.y * self.extent + index.x) * self.extent + index.z
    }

    pub fn get(&self, index: GridIndex) -> Result<&Voxel> {
        let offset = self.offset(index)?;
        Ok(&self.cells[offset])
    }

    pub fn get_mut(&mut self, index: GridIndex) -> Result<&mut Voxel> {
        let offset = self.offset(index)?;
        Ok(&mut self.cells[offset])
    }

    /// Move the selected flag from one cell to another
    ///
    /// Both indices are checked before either cell is touched, so the
    /// flag is never cleared without being set elsewhere.
    pub(crate) fn move_selection(&mut self, from: GridIndex, to: GridIndex) -> Result<()> {
        let from = self.offset(from)?;
        let to = self.offset(to)?;
        self.cells[from].selected = false;
        self.cells[to].selected = true;
        Ok(())
    }

    /// Cells in draw order: x outermost, then y, then z
    pub fn iter_render_order(&self) -> impl Iterator<Item = (GridIndex, &Voxel)> + '_ {
        let n = self.extent;
        (0..n)
            .flat_map(move |x| {
                (0..n).flat_map(move |y| (0..n).map(move |z| GridIndex::new(x, y, z)))
            })
            .map(move |index| (index, &self.cells[self.offset_unchecked(index)]))
    }

    /// Number of cells with the visible flag set
    pub fn visible_count(&self) -> usize {
        self.cells.iter().filter(|v| v.visible).count()
    }

    /// Number of cells with the selected flag set
    pub fn selected_count(&self) -> usize {
        self.cells.iter().filter(|v| v.selected).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_mapping() {
        let grid = VoxelGrid::new(10, 0.98).unwrap();
        assert_eq!(grid.len(), 1000);
        assert_eq!(grid.offset(GridIndex::new(0, 0, 0)).unwrap(), 0);
        assert_eq!(grid.offset(GridIndex::new(0, 0, 9)).unwrap(), 9);
        assert_eq!(grid.offset(GridIndex::new(1, 0, 0)).unwrap(), 10);
        assert_eq!(grid.offset(GridIndex::new(0, 1, 0)).unwrap(), 100);
        assert_eq!(grid.offset(GridIndex::new(9, 9, 9)).unwrap(), 999);
    }

    #[test]
    fn test_positions() {
        let grid = VoxelGrid::new(10, 0.98).unwrap();
        let first = grid.get(GridIndex::new(0, 0, 0)).unwrap();
        assert_eq!(first.position(), Vec3::new(-5.0, -5.0, -5.0));

        let cell = grid.get(GridIndex::new(3, 7, 9)).unwrap();
        assert_eq!(cell.position(), Vec3::new(-2.0, 2.0, 4.0));
        assert_eq!(cell.scale(), 0.98);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut grid = VoxelGrid::new(4, 1.0).unwrap();

        let err = grid.get(GridIndex::new(4, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { x: 4, y: 0, z: 0, extent: 4 }));
        assert!(grid.get_mut(GridIndex::new(0, 0, 17)).is_err());
        assert!(grid.offset(GridIndex::new(0, 4, 0)).is_err());
    }

    #[test]
    fn test_zero_extent_rejected() {
        assert!(matches!(VoxelGrid::new(0, 1.0), Err(Error::Config(_))));
    }

    #[test]
    fn test_oversized_extent_rejected() {
        assert!(matches!(VoxelGrid::new(3_000_000, 1.0), Err(Error::Config(_))));
        assert!(matches!(VoxelGrid::new(usize::MAX, 1.0), Err(Error::Config(_))));
        assert!(matches!(VoxelGrid::new(MAX_GRID_EXTENT + 1, 1.0), Err(Error::Config(_))));

        let grid = VoxelGrid::new(MAX_GRID_EXTENT, 1.0).unwrap();
        assert_eq!(grid.len(), MAX_GRID_EXTENT.pow(3));
    }

    #[test]
    fn test_render_order() {
        let grid = VoxelGrid::new(2, 1.0).unwrap();
        let order: Vec<GridIndex> = grid.iter_render_order().map(|(i, _)| i).collect();
        assert_eq!(order.len(), 8);
        assert_eq!(order[0], GridIndex::new(0, 0, 0));
        assert_eq!(order[1], GridIndex::new(0, 0, 1));
        assert_eq!(order[2], GridIndex::new(0, 1, 0));
        assert_eq!(order[4], GridIndex::new(1, 0, 0));
        assert_eq!(order[7], GridIndex::new(1, 1, 1));
    }

    #[test]
    fn test_mutation_in_place() {
        let mut grid = VoxelGrid::new(3, 1.0).unwrap();
        let index = GridIndex::new(2, 1, 0);
        grid.get_mut(index).unwrap().visible = false;

        assert!(!grid.get(index).unwrap().visible);
        assert_eq!(grid.visible_count(), 26);
        assert_eq!(grid.selected_count(), 0);
    }
}
