//! Board module - manages the game grid
//!
//! The board is a `width x height` grid where each cell is empty or holds a
//! palette color. Uses a flat row-major vector sized once at creation.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::Cell;

/// Largest supported board height.
pub const MAX_BOARD_HEIGHT: usize = 32;

/// Indices of full rows, in ascending order.
pub type FullRows = ArrayVec<u8, MAX_BOARD_HEIGHT>;

/// The game board - flat storage, dimensions fixed at creation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Heights above [`MAX_BOARD_HEIGHT`] are clamped.
    pub fn new(width: u8, height: u8) -> Self {
        let height = height.min(MAX_BOARD_HEIGHT as u8);
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.width as i8 || y < 0 || y >= self.height as i8 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Collision predicate for a shape placed with its top-left corner at (x, y).
    ///
    /// A filled shape cell collides when its column is outside `0..width`, its
    /// row is at or below `height`, or it lands on an occupied cell. Rows above
    /// the board (negative y) never collide.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape.cells().any(|(dx, dy)| {
            let px = x + dx;
            let py = y + dy;
            if px < 0 || px >= self.width as i8 || py >= self.height as i8 {
                return true;
            }
            py >= 0 && self.is_occupied(px, py)
        })
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let width = self.width as usize;
        let start = y * width;
        self.cells[start..start + width]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of every full row, top to bottom.
    pub fn full_rows(&self) -> FullRows {
        (0..self.height as usize)
            .filter(|&y| self.is_row_full(y))
            .map(|y| y as u8)
            .collect()
    }

    /// Remove row `y` and insert an empty row at the top.
    ///
    /// Everything above `y` shifts down by one; rows below are untouched, so
    /// removing several rows in ascending order keeps the remaining indices valid.
    /// Returns false if `y` is out of bounds.
    pub fn remove_row(&mut self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }

        let width = self.width as usize;

        // copy_within handles the overlapping ranges.
        self.cells.copy_within(0..y * width, width);
        self.cells[..width].fill(None);

        true
    }

    /// Write `cell` into every filled shape cell that lands on the board.
    ///
    /// Returns the number of cells written.
    pub fn stamp(&mut self, shape: &Shape, x: i8, y: i8, cell: Cell) -> usize {
        shape
            .cells()
            .filter(|&(dx, dy)| self.set(x + dx, y + dy, cell))
            .count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Row `y` as a slice, if in bounds.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let width = self.width as usize;
        Some(&self.cells[y * width..(y + 1) * width])
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of filled cells.
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Write palette codes (0 = empty, index + 1 = color) into `out`, row-major.
    pub fn write_codes(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.map_or(0, |color| color.code())));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::shape_of;
    use crate::types::{Color, PieceKind};

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(14, 25);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(13, 0), Some(13));
        assert_eq!(board.index(0, 1), Some(14));
        assert_eq!(board.index(13, 24), Some(349));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(14, 0), None);
        assert_eq!(board.index(0, 25), None);
    }

    #[test]
    fn test_height_is_clamped() {
        let board = Board::new(4, 200);
        assert_eq!(board.height() as usize, MAX_BOARD_HEIGHT);
        assert_eq!(board.cells().len(), 4 * MAX_BOARD_HEIGHT);
    }

    #[test]
    fn test_remove_row_shifts_rows_above() {
        let mut board = Board::new(4, 4);
        board.set(0, 0, Some(Color::Red));
        board.set(1, 1, Some(Color::Cyan));
        for x in 0..4 {
            board.set(x, 2, Some(Color::Yellow));
        }
        board.set(3, 3, Some(Color::Purple));

        assert!(board.remove_row(2));

        assert_eq!(board.row(0).unwrap(), &[None; 4]);
        assert_eq!(board.get(0, 1), Some(Some(Color::Red)));
        assert_eq!(board.get(1, 2), Some(Some(Color::Cyan)));
        assert_eq!(board.get(3, 3), Some(Some(Color::Purple)));
        assert_eq!(board.filled_count(), 3);
    }

    #[test]
    fn test_remove_row_out_of_bounds() {
        let mut board = Board::new(4, 4);
        assert!(!board.remove_row(4));
    }

    #[test]
    fn test_negative_rows_never_collide() {
        let board = Board::new(14, 25);
        let shape = shape_of(PieceKind::I);
        assert!(!board.collides(&shape, 0, -3));
        // Columns are still checked above the board.
        assert!(board.collides(&shape, -1, -3));
        assert!(board.collides(&shape, 11, -3));
    }

    #[test]
    fn test_write_codes_uses_palette_index_plus_one() {
        let mut board = Board::new(3, 1);
        board.set(0, 0, Some(Color::Cyan));
        board.set(2, 0, Some(Color::Yellow));
        let mut out = Vec::new();
        board.write_codes(&mut out);
        assert_eq!(out, vec![1, 0, 5]);
    }
}
