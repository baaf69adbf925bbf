//! Winning line analysis for Tic-Tac-Toe

use super::{
    Cell, Side,
    board::{DIMENSION, Grid},
};

/// A full line of coordinates, `(row, column)` 0-based
pub type Line = [(usize, usize); DIMENSION];

/// Winning lines on the 3x3 board, in the order they are checked
pub const WINNING_LINES: [Line; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)], // rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)], // columns
    [(0, 0), (1, 1), (2, 2)], // descending diagonal
    [(2, 0), (1, 1), (0, 2)], // ascending diagonal
];

/// Utility for analyzing winning lines in Tic-Tac-Toe
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// The side occupying every cell of `line`, if any
    pub fn line_owner(cells: &Grid, line: &Line) -> Option<Side> {
        let (first_row, first_column) = line[0];
        let side = cells[first_row][first_column].side()?;
        let target = side.to_cell();
        line.iter()
            .all(|&(row, column)| cells[row][column] == target)
            .then_some(side)
    }

    /// Owner of the first complete line in check order (rows, columns, diagonals)
    pub fn winner(cells: &Grid) -> Option<Side> {
        WINNING_LINES
            .iter()
            .find_map(|line| Self::line_owner(cells, line))
    }

    /// Check if a side has completed any line
    pub fn has_won(cells: &Grid, side: Side) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(side))
    }

    /// Check whether any cell is still empty
    pub fn fields_available(cells: &Grid) -> bool {
        cells.iter().flatten().any(|&cell| cell == Cell::Empty)
    }
}
