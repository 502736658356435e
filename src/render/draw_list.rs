//! Per-frame translation of the voxel grid into cube draws

use crate::core::types::Mat4;
use crate::voxel::cursor::Cursor;
use crate::voxel::grid::VoxelGrid;
use crate::voxel::palette::{EMPTY_SLOT, SELECTION_SLOT};

/// One textured cube draw
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeDraw {
    pub model: Mat4,
    pub texture_slot: usize,
    /// Draw with the depth-tested pipeline rather than the overlay one
    pub depth_test: bool,
}

/// Build the ordered draw list for one frame
///
/// Every drawn cell (visible or selected) is emitted in render order. The
/// selected cell shows the selection texture. Cells showing the empty slot
/// are drawn as an overlay. The selected cell is then emitted once more,
/// depth tested, so it stays on top of its neighbours.
pub fn build_draw_list(grid: &VoxelGrid, cursor: &Cursor) -> Vec<CubeDraw> {
    let mut draws = Vec::with_capacity(grid.visible_count() + 2);

    for (_, cell) in grid.iter_render_order() {
        if !cell.is_drawn() {
            continue;
        }
        let texture_slot = if cell.is_selected() { SELECTION_SLOT } else { cell.texture_index };
        draws.push(CubeDraw {
            model: cell.transform().to_matrix(),
            texture_slot,
            depth_test: texture_slot != EMPTY_SLOT,
        });
    }

    match grid.get(cursor.index()) {
        Ok(cell) => draws.push(CubeDraw {
            model: cell.transform().to_matrix(),
            texture_slot: SELECTION_SLOT,
            depth_test: true,
        }),
        Err(e) => log::error!("Cursor outside grid: {}", e),
    }

    draws
}

/// Model matrices of `draws`, in draw order
pub fn model_matrices(draws: &[CubeDraw]) -> Vec<Mat4> {
    draws.iter().map(|d| d.model).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;
    use crate::voxel::{Direction, GridIndex, VoxelEditor};
    use crate::voxel::palette::{GLASS_SLOT, MOSS_SLOT};

    fn translation(draw: &CubeDraw) -> Vec3 {
        draw.model.w_axis.truncate()
    }

    #[test]
    fn test_fresh_grid() {
        let editor = VoxelEditor::new(10, 0.98).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());

        // Every cell plus the selection redraw
        assert_eq!(draws.len(), 1001);
        let overlays = draws.iter().filter(|d| !d.depth_test).count();
        assert_eq!(overlays, 999);
        assert!(draws.iter().filter(|d| !d.depth_test).all(|d| d.texture_slot == EMPTY_SLOT));
    }

    #[test]
    fn test_selected_cell_drawn_last() {
        let editor = VoxelEditor::new(10, 0.98).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());

        let last = draws.last().unwrap();
        assert_eq!(last.texture_slot, MOSS_SLOT);
        assert!(last.depth_test);
        // Cursor starts at (0, 0, 9), placed at (-5, -5, 4)
        assert_eq!(translation(last), Vec3::new(-5.0, -5.0, 4.0));
    }

    #[test]
    fn test_render_order_x_outer() {
        let editor = VoxelEditor::new(2, 1.0).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());

        let order: Vec<Vec3> = draws[..8].iter().map(translation).collect();
        // x outer, then y, then z inner; positions are index - 1
        assert_eq!(order[0], Vec3::new(-1.0, -1.0, -1.0));
        assert_eq!(order[1], Vec3::new(-1.0, -1.0, 0.0));
        assert_eq!(order[2], Vec3::new(-1.0, 0.0, -1.0));
        assert_eq!(order[4], Vec3::new(0.0, -1.0, -1.0));
    }

    #[test]
    fn test_scale_applied() {
        let editor = VoxelEditor::new(2, 0.98).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());
        let scale = draws[0].model.x_axis.length();
        assert!((scale - 0.98).abs() < 1e-6);
    }

    #[test]
    fn test_hidden_cell_skipped_and_restored() {
        let mut editor = VoxelEditor::new(3, 1.0).unwrap();
        editor.set_visible(false).unwrap();
        editor.move_cursor(Direction::XPos);
        // (0, 0, 2) is hidden and no longer selected
        let draws = build_draw_list(editor.grid(), &editor.cursor());
        assert_eq!(draws.len(), 27 - 1 + 1);
        assert!(!draws.iter().any(|d| translation(d) == Vec3::new(-1.0, -1.0, 1.0)));

        editor.move_cursor(Direction::XNeg);
        editor.set_visible(true).unwrap();
        editor.move_cursor(Direction::XPos);
        let draws = build_draw_list(editor.grid(), &editor.cursor());
        assert_eq!(draws.len(), 27 + 1);
        assert!(draws.iter().any(|d| translation(d) == Vec3::new(-1.0, -1.0, 1.0)));
    }

    #[test]
    fn test_hidden_selected_cell_still_drawn() {
        let mut editor = VoxelEditor::new(3, 1.0).unwrap();
        editor.set_visible(false).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());

        // Drawn in the main pass because it is selected, plus the redraw
        let selected = draws.iter()
            .filter(|d| translation(d) == Vec3::new(-1.0, -1.0, 1.0))
            .count();
        assert_eq!(selected, 2);
    }

    #[test]
    fn test_textured_cells_depth_tested() {
        let mut editor = VoxelEditor::new(3, 1.0).unwrap();
        editor.cycle_texture().unwrap();
        editor.cycle_texture().unwrap();
        editor.select(GridIndex::new(1, 1, 1)).unwrap();

        let draws = build_draw_list(editor.grid(), &editor.cursor());
        let glass = draws.iter()
            .find(|d| translation(d) == Vec3::new(-1.0, -1.0, 1.0))
            .unwrap();
        assert_eq!(glass.texture_slot, GLASS_SLOT);
        assert!(glass.depth_test);

        let center: Vec<_> = draws.iter().filter(|d| translation(d) == Vec3::ZERO).collect();
        assert_eq!(center.len(), 2);
        assert!(center.iter().all(|d| d.texture_slot == MOSS_SLOT && d.depth_test));
    }

    #[test]
    fn test_model_matrices_order() {
        let editor = VoxelEditor::new(2, 1.0).unwrap();
        let draws = build_draw_list(editor.grid(), &editor.cursor());
        let models = model_matrices(&draws);
        assert_eq!(models.len(), draws.len());
        assert_eq!(models[3], draws[3].model);
    }
}
