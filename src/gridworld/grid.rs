//! Editable grid world: dimensions, cell contents and the single start cell

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{
    cell::{Cell, CellType},
    position::Position,
    rewards::{RewardConfig, RewardKind},
};
use crate::{Error, Result};

/// Smallest allowed number of rows or columns
pub const MIN_SIDE: usize = 2;
/// Largest allowed number of rows or columns
pub const MAX_SIDE: usize = 8;

/// Clamp a requested side length into `[MIN_SIDE, MAX_SIDE]`.
pub fn clamp_side(side: usize) -> usize {
    side.clamp(MIN_SIDE, MAX_SIDE)
}

/// Grid of cells stored row-major (`y * cols + x`).
///
/// The cell vector always holds exactly `rows * cols` entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-empty grid. Dimensions are clamped to the allowed range.
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = clamp_side(rows);
        let cols = clamp_side(cols);
        Self {
            rows,
            cols,
            cells: vec![Cell::EMPTY; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells (`rows * cols`)
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.cols && pos.y < self.rows
    }

    fn index(&self, pos: Position) -> Option<usize> {
        self.contains(pos).then(|| pos.y * self.cols + pos.x)
    }

    fn check(&self, pos: Position) -> Result<usize> {
        self.index(pos).ok_or(Error::PositionOutOfBounds {
            x: pos.x,
            y: pos.y,
            cols: self.cols,
            rows: self.rows,
        })
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|idx| &self.cells[idx])
    }

    /// Cell at `pos`, or an empty cell when `pos` lies outside the grid.
    pub fn cell_at(&self, pos: Position) -> Cell {
        self.cell(pos).copied().unwrap_or(Cell::EMPTY)
    }

    /// All positions in row-major order (by y, then x).
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |y| (0..self.cols).map(move |x| Position::new(x, y)))
    }

    /// Iterate `(position, cell)` pairs row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.positions().zip(self.cells.iter())
    }

    /// Location of the START cell, if one has been placed.
    pub fn start_cell(&self) -> Option<Position> {
        self.iter()
            .find(|(_, cell)| cell.kind == CellType::Start)
            .map(|(pos, _)| pos)
    }

    /// Build a grid of new dimensions, keeping cells at overlapping coordinates.
    /// Everything outside the old bounds starts out empty.
    pub fn resized(&self, rows: usize, cols: usize) -> Grid {
        let mut grid = Grid::new(rows, cols);
        let overlap_rows = self.rows.min(grid.rows);
        let overlap_cols = self.cols.min(grid.cols);
        for y in 0..overlap_rows {
            for x in 0..overlap_cols {
                grid.cells[y * grid.cols + x] = self.cells[y * self.cols + x];
            }
        }
        grid
    }

    /// Overwrite a cell. Placing a START clears every other START to EMPTY first.
    pub fn set_cell(&mut self, pos: Position, kind: CellType, reward: f64) -> Result<()> {
        let idx = self.check(pos)?;
        if kind == CellType::Start {
            for cell in self.cells.iter_mut().filter(|c| c.kind == CellType::Start) {
                *cell = Cell::EMPTY;
            }
        }
        self.cells[idx] = Cell::new(kind, reward);
        Ok(())
    }

    /// Advance the cell at `pos` one step through the editing cycle and return its new type.
    pub fn rotate_cell(&mut self, pos: Position, rewards: &RewardConfig) -> Result<CellType> {
        let idx = self.check(pos)?;
        let next = self.cells[idx].kind.rotated();
        self.set_cell(pos, next, rewards.reward_for(next))?;
        Ok(next)
    }

    /// Rewrite the reward of every cell of the matching type; types are untouched.
    /// Returns how many cells were updated.
    pub fn apply_reward(&mut self, kind: RewardKind, value: f64) -> usize {
        let target = kind.cell_type();
        let mut updated = 0;
        for cell in self.cells.iter_mut().filter(|c| c.kind == target) {
            cell.reward = value;
            updated += 1;
        }
        updated
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new(4, 4)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|c| c.kind.to_char()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty_and_clamped() {
        let grid = Grid::new(1, 20);
        assert_eq!(grid.rows(), MIN_SIDE);
        assert_eq!(grid.cols(), MAX_SIDE);
        assert_eq!(grid.len(), MIN_SIDE * MAX_SIDE);
        assert!(grid.iter().all(|(_, c)| *c == Cell::EMPTY));
    }

    #[test]
    fn test_resize_preserves_overlap() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(1, 1), CellType::Wall, 0.0).unwrap();
        grid.set_cell(Position::new(2, 2), CellType::Goal, 100.0)
            .unwrap();

        let smaller = grid.resized(2, 2);
        assert_eq!(smaller.len(), 4);
        assert_eq!(smaller.cell_at(Position::new(1, 1)).kind, CellType::Wall);

        let larger = grid.resized(4, 5);
        assert_eq!(larger.len(), 20);
        assert_eq!(larger.cell_at(Position::new(2, 2)).kind, CellType::Goal);
        assert_eq!(larger.cell_at(Position::new(2, 2)).reward, 100.0);
        assert_eq!(larger.cell_at(Position::new(4, 3)), Cell::EMPTY);
    }

    #[test]
    fn test_single_start_on_placement() {
        let mut grid = Grid::new(3, 3);
        grid.set_cell(Position::new(0, 0), CellType::Start, 0.0)
            .unwrap();
        grid.set_cell(Position::new(2, 1), CellType::Start, 0.0)
            .unwrap();

        let starts = grid
            .iter()
            .filter(|(_, c)| c.kind == CellType::Start)
            .count();
        assert_eq!(starts, 1);
        assert_eq!(grid.start_cell(), Some(Position::new(2, 1)));
        assert_eq!(grid.cell_at(Position::new(0, 0)), Cell::EMPTY);
    }

    #[test]
    fn test_rotate_assigns_configured_rewards() {
        let rewards = RewardConfig::new(50.0, -5.0);
        let mut grid = Grid::new(2, 2);
        let pos = Position::new(1, 0);

        assert_eq!(grid.rotate_cell(pos, &rewards).unwrap(), CellType::Wall);
        assert_eq!(grid.cell_at(pos).reward, 0.0);
        assert_eq!(grid.rotate_cell(pos, &rewards).unwrap(), CellType::Trap);
        assert_eq!(grid.cell_at(pos).reward, -5.0);
        assert_eq!(grid.rotate_cell(pos, &rewards).unwrap(), CellType::Goal);
        assert_eq!(grid.cell_at(pos).reward, 50.0);
        assert_eq!(grid.rotate_cell(pos, &rewards).unwrap(), CellType::Start);
        assert_eq!(grid.cell_at(pos).reward, 0.0);
        assert_eq!(grid.rotate_cell(pos, &rewards).unwrap(), CellType::Empty);
    }

    #[test]
    fn test_out_of_bounds_edit_is_rejected() {
        let mut grid = Grid::new(2, 2);
        let err = grid
            .set_cell(Position::new(2, 0), CellType::Wall, 0.0)
            .unwrap_err();
        assert!(matches!(err, Error::PositionOutOfBounds { x: 2, y: 0, .. }));
    }

    #[test]
    fn test_apply_reward_only_touches_matching_cells() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(Position::new(0, 0), CellType::Trap, -10.0)
            .unwrap();
        grid.set_cell(Position::new(1, 1), CellType::Trap, -10.0)
            .unwrap();
        grid.set_cell(Position::new(2, 1), CellType::Goal, 100.0)
            .unwrap();

        assert_eq!(grid.apply_reward(RewardKind::Trap, -25.0), 2);
        assert_eq!(grid.cell_at(Position::new(0, 0)).reward, -25.0);
        assert_eq!(grid.cell_at(Position::new(1, 1)).reward, -25.0);
        assert_eq!(grid.cell_at(Position::new(2, 1)).reward, 100.0);
        assert_eq!(grid.cell_at(Position::new(1, 1)).kind, CellType::Trap);
    }

    #[test]
    fn test_display_renders_rows() {
        let mut grid = Grid::new(2, 3);
        grid.set_cell(Position::new(1, 0), CellType::Wall, 0.0).unwrap();
        grid.set_cell(Position::new(2, 1), CellType::Goal, 1.0).unwrap();
        assert_eq!(grid.to_string(), ".#.\n..G\n");
    }
}
