//! Shape module - piece matrices and rotation
//!
//! Pieces are small binary matrices (at most 4x4) anchored at their top-left
//! corner. Rotation transposes the matrix and reverses the rows, which turns it
//! 90° clockwise. There is no rotation table and no wall kick: the rotated
//! matrix keeps the same anchor.

use crate::types::PieceKind;

/// Side of the largest supported shape matrix.
pub const MAX_SHAPE_SIZE: usize = 4;

/// Binary piece matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    cells: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
    width: u8,
    height: u8,
}

const fn pack<const W: usize, const H: usize>(rows: [[u8; W]; H]) -> Shape {
    let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
    let mut y = 0;
    while y < H {
        let mut x = 0;
        while x < W {
            cells[y][x] = rows[y][x] != 0;
            x += 1;
        }
        y += 1;
    }
    Shape {
        cells,
        width: W as u8,
        height: H as u8,
    }
}

const O_SHAPE: Shape = pack([[1, 1], [1, 1]]);
const T_SHAPE: Shape = pack([[1, 1, 1], [0, 1, 0]]);
const L_SHAPE: Shape = pack([[1, 1, 1], [1, 0, 0]]);
const I_SHAPE: Shape = pack([[1, 1, 1, 1]]);
const Z_SHAPE: Shape = pack([[1, 1, 0], [0, 1, 1]]);
const S_SHAPE: Shape = pack([[0, 1, 1], [1, 1, 0]]);
const J_SHAPE: Shape = pack([[1, 1, 1], [0, 0, 1]]);

/// Spawn matrix of a piece kind.
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::I => I_SHAPE,
        PieceKind::Z => Z_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::J => J_SHAPE,
    }
}

impl Shape {
    /// Build a shape from rows of 0/1 values.
    ///
    /// Returns None for an empty, ragged or larger than 4x4 matrix.
    pub fn from_rows(rows: &[&[u8]]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.len();
        if width == 0 || width > MAX_SHAPE_SIZE || height > MAX_SHAPE_SIZE {
            return None;
        }
        if rows.iter().any(|row| row.len() != width) {
            return None;
        }

        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in rows.iter().enumerate() {
            for (x, &v) in row.iter().enumerate() {
                cells[y][x] = v != 0;
            }
        }
        Some(Self {
            cells,
            width: width as u8,
            height: height as u8,
        })
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Offsets `(dx, dy)` of the occupied cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |y| {
            (0..self.width as usize)
                .filter(move |&x| self.cells[y][x])
                .map(move |x| (x as i8, y as i8))
        })
    }

    /// Rotate 90° clockwise.
    ///
    /// Row `i` of the result is column `i` of `self` read bottom to top.
    pub fn rotated(&self) -> Self {
        let w = self.width as usize;
        let h = self.height as usize;
        let mut cells = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (i, row) in cells.iter_mut().enumerate().take(w) {
            for (k, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.cells[h - 1 - k][i];
            }
        }
        Self {
            cells,
            width: self.height,
            height: self.width,
        }
    }

    /// Rows as 0/1 vectors, top to bottom.
    pub fn to_rows(&self) -> Vec<Vec<u8>> {
        (0..self.height as usize)
            .map(|y| {
                (0..self.width as usize)
                    .map(|x| self.cells[y][x] as u8)
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_t_rotates_clockwise() {
        let rotated = shape_of(PieceKind::T).rotated();
        assert_eq!(rotated.to_rows(), vec![vec![0, 1], vec![1, 1], vec![0, 1]]);
    }

    #[test]
    fn test_i_rotation_swaps_dimensions() {
        let i = shape_of(PieceKind::I);
        let rotated = i.rotated();
        assert_eq!((rotated.width(), rotated.height()), (1, 4));
        assert_eq!(rotated.cells().count(), 4);
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Shape::from_rows(&[]).is_none());
        assert!(Shape::from_rows(&[&[1, 1], &[1]]).is_none());
        assert!(Shape::from_rows(&[&[1, 1, 1, 1, 1]]).is_none());
        assert_eq!(
            Shape::from_rows(&[&[1, 1], &[1, 1]]),
            Some(shape_of(PieceKind::O))
        );
    }

    #[test]
    fn test_cells_lists_occupied_offsets() {
        let offsets: Vec<_> = shape_of(PieceKind::S).cells().collect();
        assert_eq!(offsets, vec![(1, 0), (2, 0), (0, 1), (1, 1)]);
    }
}
