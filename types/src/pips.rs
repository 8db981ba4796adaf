//! Dot layouts for each die face.
//!
//! One table shared by every die drawing; callers pick the size.

use crate::Face;

/// A pip position on a 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pip {
    TopLeft,
    TopRight,
    MiddleLeft,
    Center,
    MiddleRight,
    BottomLeft,
    BottomRight,
}

impl Pip {
    /// `(row, column)` on the 3x3 grid.
    #[must_use]
    pub const fn cell(self) -> (usize, usize) {
        match self {
            Pip::TopLeft => (0, 0),
            Pip::TopRight => (0, 2),
            Pip::MiddleLeft => (1, 0),
            Pip::Center => (1, 1),
            Pip::MiddleRight => (1, 2),
            Pip::BottomLeft => (2, 0),
            Pip::BottomRight => (2, 2),
        }
    }
}

const LAYOUTS: [&[Pip]; 6] = [
    &[Pip::Center],
    &[Pip::TopLeft, Pip::BottomRight],
    &[Pip::TopLeft, Pip::Center, Pip::BottomRight],
    &[
        Pip::TopLeft,
        Pip::TopRight,
        Pip::BottomLeft,
        Pip::BottomRight,
    ],
    &[
        Pip::TopLeft,
        Pip::TopRight,
        Pip::Center,
        Pip::BottomLeft,
        Pip::BottomRight,
    ],
    &[
        Pip::TopLeft,
        Pip::TopRight,
        Pip::MiddleLeft,
        Pip::MiddleRight,
        Pip::BottomLeft,
        Pip::BottomRight,
    ],
];

#[must_use]
pub fn pips(face: Face) -> &'static [Pip] {
    LAYOUTS[face.index()]
}

/// The face as a 3x3 occupancy grid, row-major.
#[must_use]
pub fn pip_grid(face: Face) -> [[bool; 3]; 3] {
    let mut grid = [[false; 3]; 3];
    for pip in pips(face) {
        let (row, col) = pip.cell();
        grid[row][col] = true;
    }
    grid
}
