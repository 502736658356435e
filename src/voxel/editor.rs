//! Voxel editor: grid plus cursor, driven by discrete commands

use winit::keyboard::KeyCode;

use crate::core::types::Result;
use crate::voxel::cursor::{Cursor, Direction};
use crate::voxel::grid::{GridIndex, VoxelGrid};
use crate::voxel::palette::{COLOR_LIST, TEXTURE_SLOT_COUNT};
use crate::voxel::voxel::Voxel;

/// A single editing action
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorCommand {
    /// Move the cursor one cell
    Move(Direction),
    /// Hide the selected cell
    Hide,
    /// Show the selected cell
    Show,
    /// Advance the selected cell's texture slot
    CycleTexture,
    /// Advance the selected cell's color index (and texture slot)
    CycleColor,
}

impl EditorCommand {
    /// Keyboard binding of every editor command
    pub const KEY_BINDINGS: [(KeyCode, EditorCommand); 10] = [
        (KeyCode::ArrowRight, EditorCommand::Move(Direction::XPos)),
        (KeyCode::ArrowLeft, EditorCommand::Move(Direction::XNeg)),
        (KeyCode::ArrowUp, EditorCommand::Move(Direction::YPos)),
        (KeyCode::ArrowDown, EditorCommand::Move(Direction::YNeg)),
        (KeyCode::PageUp, EditorCommand::Move(Direction::ZPos)),
        (KeyCode::PageDown, EditorCommand::Move(Direction::ZNeg)),
        (KeyCode::Delete, EditorCommand::Hide),
        (KeyCode::KeyV, EditorCommand::Show),
        (KeyCode::Space, EditorCommand::CycleTexture),
        (KeyCode::KeyC, EditorCommand::CycleColor),
    ];

    /// Command bound to a key, if any
    pub fn from_key(key: KeyCode) -> Option<Self> {
        Self::KEY_BINDINGS
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command)
    }
}

/// Owns the grid and the cursor and keeps exactly one cell selected
#[derive(Clone, Debug)]
pub struct VoxelEditor {
    grid: VoxelGrid,
    cursor: Cursor,
}

impl VoxelEditor {
    /// Create a grid with the cursor at `(0, 0, N - 1)`
    pub fn new(extent: usize, scale: f32) -> Result<Self> {
        let mut grid = VoxelGrid::new(extent, scale)?;
        let cursor = Cursor::initial(extent);
        grid.get_mut(cursor.index())?.selected = true;
        Ok(Self { grid, cursor })
    }

    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The cell under the cursor
    pub fn selected(&self) -> Result<&Voxel> {
        self.grid.get(self.cursor.index())
    }

    fn selected_mut(&mut self) -> Result<&mut Voxel> {
        self.grid.get_mut(self.cursor.index())
    }

    /// Run one command; returns whether any state changed
    pub fn apply(&mut self, command: EditorCommand) -> Result<bool> {
        log::debug!("Editor command {:?} at {:?}", command, self.cursor.index());
        match command {
            EditorCommand::Move(direction) => Ok(self.move_cursor(direction)),
            EditorCommand::Hide => self.set_visible(false),
            EditorCommand::Show => self.set_visible(true),
            EditorCommand::CycleTexture => self.cycle_texture().map(|_| true),
            EditorCommand::CycleColor => self.cycle_color().map(|_| true),
        }
    }

    /// Move one cell; moves past the boundary are ignored and return false
    pub fn move_cursor(&mut self, direction: Direction) -> bool {
        let Some(next) = self.cursor.step(direction, self.grid.extent()) else {
            return false;
        };
        self.select(next).is_ok()
    }

    /// Place the cursor on `index`
    ///
    /// Fails with `OutOfBounds` and leaves the selection untouched when the
    /// index is outside the grid.
    pub fn select(&mut self, index: GridIndex) -> Result<()> {
        self.grid.move_selection(self.cursor.index(), index)?;
        self.cursor.set(index);
        Ok(())
    }

    /// Show or hide the selected cell; returns whether the flag changed
    pub fn set_visible(&mut self, visible: bool) -> Result<bool> {
        let cell = self.selected_mut()?;
        let changed = cell.visible != visible;
        cell.visible = visible;
        Ok(changed)
    }

    /// Advance the selected cell's texture slot; returns the new slot
    pub fn cycle_texture(&mut self) -> Result<usize> {
        let cell = self.selected_mut()?;
        cell.texture_index = (cell.texture_index + 1) % TEXTURE_SLOT_COUNT;
        Ok(cell.texture_index)
    }

    /// Advance the selected cell's color index and texture slot
    ///
    /// Returns the new color index. The color index wraps around the color
    /// list; rendering is driven by the texture slot only.
    pub fn cycle_color(&mut self) -> Result<usize> {
        let cell = self.selected_mut()?;
        cell.color_index = (cell.color_index + 1) % COLOR_LIST.len();
        cell.texture_index = (cell.texture_index + 1) % TEXTURE_SLOT_COUNT;
        let color_index = cell.color_index;
        log::info!("Color index changed to {}", color_index);
        Ok(color_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::Error;

    fn editor() -> VoxelEditor {
        VoxelEditor::new(10, 0.98).unwrap()
    }

    fn assert_single_selection(editor: &VoxelEditor) {
        assert_eq!(editor.grid().selected_count(), 1);
        assert!(editor.selected().unwrap().is_selected());
    }

    #[test]
    fn test_initial_selection() {
        let editor = editor();
        assert_eq!(editor.cursor().index(), GridIndex::new(0, 0, 9));
        assert!(editor.grid().get(GridIndex::new(0, 0, 9)).unwrap().is_selected());
        assert_single_selection(&editor);
    }

    #[test]
    fn test_move_transfers_selection() {
        let mut editor = editor();
        assert!(editor.move_cursor(Direction::XPos));

        assert_eq!(editor.cursor().index(), GridIndex::new(1, 0, 9));
        assert!(editor.grid().get(GridIndex::new(1, 0, 9)).unwrap().is_selected());
        assert!(!editor.grid().get(GridIndex::new(0, 0, 9)).unwrap().is_selected());
        assert_single_selection(&editor);
    }

    #[test]
    fn test_boundary_moves_ignored() {
        let mut editor = editor();
        // Cursor starts at x = 0, y = 0, z = 9
        assert!(!editor.move_cursor(Direction::XNeg));
        assert!(!editor.move_cursor(Direction::YNeg));
        assert!(!editor.move_cursor(Direction::ZPos));

        assert_eq!(editor.cursor().index(), GridIndex::new(0, 0, 9));
        assert!(editor.grid().get(GridIndex::new(0, 0, 9)).unwrap().is_selected());
        assert_single_selection(&editor);
    }

    #[test]
    fn test_single_selection_over_sweep() {
        let mut editor = VoxelEditor::new(4, 1.0).unwrap();
        // Walk every direction past each boundary and back again
        for direction in Direction::ALL {
            for _ in 0..6 {
                editor.move_cursor(direction);
                assert_single_selection(&editor);
            }
        }
        let script = [
            Direction::XPos, Direction::YPos, Direction::ZNeg, Direction::XPos,
            Direction::XPos, Direction::XPos, Direction::YNeg, Direction::ZPos,
        ];
        for direction in script.iter().cycle().take(64) {
            editor.move_cursor(*direction);
            assert_single_selection(&editor);
        }
    }

    #[test]
    fn test_select_out_of_bounds_keeps_state() {
        let mut editor = editor();
        let err = editor.select(GridIndex::new(10, 0, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { .. }));
        assert_eq!(editor.cursor().index(), GridIndex::new(0, 0, 9));
        assert_single_selection(&editor);
    }

    #[test]
    fn test_select_direct() {
        let mut editor = editor();
        editor.select(GridIndex::new(5, 6, 7)).unwrap();
        assert_eq!(editor.cursor().index(), GridIndex::new(5, 6, 7));
        assert!(!editor.grid().get(GridIndex::new(0, 0, 9)).unwrap().is_selected());
        assert_single_selection(&editor);
    }

    #[test]
    fn test_texture_cycle_period() {
        let mut editor = editor();
        let start = editor.selected().unwrap().texture_index;

        assert_eq!(editor.cycle_texture().unwrap(), 1);
        assert_eq!(editor.cycle_texture().unwrap(), 2);
        assert_eq!(editor.cycle_texture().unwrap(), 0);
        assert_eq!(editor.selected().unwrap().texture_index, start);
    }

    #[test]
    fn test_color_cycle_also_cycles_texture() {
        let mut editor = editor();
        assert_eq!(editor.cycle_color().unwrap(), 1);
        assert_eq!(editor.selected().unwrap().texture_index, 1);

        for _ in 1..COLOR_LIST.len() {
            editor.cycle_color().unwrap();
        }
        assert_eq!(editor.selected().unwrap().color_index, 0);
        assert_eq!(editor.selected().unwrap().texture_index, COLOR_LIST.len() % TEXTURE_SLOT_COUNT);
    }

    #[test]
    fn test_hide_show() {
        let mut editor = editor();
        assert!(editor.set_visible(false).unwrap());
        assert!(!editor.selected().unwrap().visible);
        assert!(!editor.set_visible(false).unwrap());

        assert!(editor.set_visible(true).unwrap());
        assert!(editor.selected().unwrap().visible);
    }

    #[test]
    fn test_mutators_only_touch_selected_cell() {
        let mut editor = editor();
        editor.set_visible(false).unwrap();
        editor.cycle_texture().unwrap();
        editor.move_cursor(Direction::YPos);

        let previous = editor.grid().get(GridIndex::new(0, 0, 9)).unwrap();
        assert!(!previous.visible);
        assert_eq!(previous.texture_index, 1);

        let current = editor.selected().unwrap();
        assert!(current.visible);
        assert_eq!(current.texture_index, 0);
        assert_eq!(editor.grid().visible_count(), 999);
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(EditorCommand::from_key(KeyCode::ArrowRight), Some(EditorCommand::Move(Direction::XPos)));
        assert_eq!(EditorCommand::from_key(KeyCode::PageDown), Some(EditorCommand::Move(Direction::ZNeg)));
        assert_eq!(EditorCommand::from_key(KeyCode::Delete), Some(EditorCommand::Hide));
        assert_eq!(EditorCommand::from_key(KeyCode::KeyV), Some(EditorCommand::Show));
        assert_eq!(EditorCommand::from_key(KeyCode::Space), Some(EditorCommand::CycleTexture));
        assert_eq!(EditorCommand::from_key(KeyCode::KeyC), Some(EditorCommand::CycleColor));
        assert_eq!(EditorCommand::from_key(KeyCode::KeyW), None);
    }

    #[test]
    fn test_apply_dispatch() {
        let mut editor = editor();
        assert!(editor.apply(EditorCommand::Move(Direction::XPos)).unwrap());
        assert!(editor.apply(EditorCommand::Move(Direction::XNeg)).unwrap());
        assert!(!editor.apply(EditorCommand::Move(Direction::XNeg)).unwrap());
        assert!(editor.apply(EditorCommand::Hide).unwrap());
        assert!(!editor.apply(EditorCommand::Hide).unwrap());
        assert!(editor.apply(EditorCommand::CycleTexture).unwrap());
        assert_eq!(editor.selected().unwrap().texture_index, 1);
    }
}
