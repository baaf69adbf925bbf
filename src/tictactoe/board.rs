//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{game::Move, lines::LineAnalyzer};

/// Side length of the board
pub const DIMENSION: usize = 3;

/// Raw cell grid, indexed `[row][column]`
pub type Grid = [[Cell; DIMENSION]; DIMENSION];

/// A cell on the Tic-Tac-Toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '-' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// The side owning this cell, `None` when empty
    pub fn side(self) -> Option<Side> {
        match self {
            Cell::X => Some(Side::X),
            Cell::O => Some(Side::O),
            Cell::Empty => None,
        }
    }
}

/// One of the two competing marks. X is player 1 and always opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    X,
    O,
}

impl Side {
    /// Get the opponent side
    pub fn opponent(self) -> Side {
        match self {
            Side::X => Side::O,
            Side::O => Side::X,
        }
    }

    /// Convert side to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Side::X => Cell::X,
            Side::O => Cell::O,
        }
    }

    /// Player number shown on the console (1 for X, 2 for O)
    pub fn player_number(self) -> usize {
        match self {
            Side::X => 1,
            Side::O => 2,
        }
    }

    /// Parse `x`/`o` (any case)
    pub fn parse(input: &str) -> Result<Side, crate::Error> {
        match input.trim() {
            "x" | "X" => Ok(Side::X),
            "o" | "O" => Ok(Side::O),
            other => Err(crate::Error::InvalidSide {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_cell().to_char())
    }
}

/// Game status, derived from the grid on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    XWon,
    OWon,
    Draw,
    Running,
}

impl Status {
    /// Status for a win by `side`
    pub fn won_by(side: Side) -> Status {
        match side {
            Side::X => Status::XWon,
            Side::O => Status::OWon,
        }
    }

    /// Winning side, if any
    pub fn winner(self) -> Option<Side> {
        match self {
            Status::XWon => Some(Side::X),
            Status::OWon => Some(Side::O),
            Status::Draw | Status::Running => None,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Status::Running
    }
}

/// The 3x3 playing field.
///
/// The board is mutated in place. Out-of-bounds and occupied cells are
/// reported through boolean return values, never through panics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: Grid,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; DIMENSION]; DIMENSION],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string must contain exactly 9 cell characters in row-major order.
    /// Whitespace and the separators `|` and `/` are ignored, so both
    /// `"XO.|.X.|..O"` and `"XO. .X. ..O"` are accepted.
    ///
    /// # Errors
    ///
    /// Returns error if the cell count is not 9 or any character is not a
    /// valid cell representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|' && *c != '/')
            .collect();

        if chars.len() != DIMENSION * DIMENSION {
            return Err(crate::Error::InvalidBoardLength {
                expected: DIMENSION * DIMENSION,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut board = Board::new();
        for (i, &c) in chars.iter().enumerate() {
            board.cells[i / DIMENSION][i % DIMENSION] =
                Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                    character: c,
                    position: i,
                    context: s.to_string(),
                })?;
        }

        Ok(board)
    }

    /// Fixed side length of the board
    pub fn dimension(&self) -> usize {
        DIMENSION
    }

    /// Compute the game status.
    ///
    /// Rows, then columns, then the descending and ascending diagonals are
    /// checked for a full line; the first one found decides the winner.
    /// Without a full line the game is running while any cell is empty,
    /// otherwise it is a draw.
    pub fn status(&self) -> Status {
        if let Some(winner) = LineAnalyzer::winner(&self.cells) {
            return Status::won_by(winner);
        }

        if LineAnalyzer::fields_available(&self.cells) {
            Status::Running
        } else {
            Status::Draw
        }
    }

    /// Mark an empty, in-bounds cell for `side`.
    ///
    /// Returns `false` and leaves the board untouched otherwise.
    pub fn place(&mut self, side: Side, row: usize, column: usize) -> bool {
        if !self.is_free(row, column) {
            return false;
        }

        self.cells[row][column] = side.to_cell();
        true
    }

    /// Place `side` at a 1-based move, as typed at the console.
    pub fn place_at(&mut self, side: Side, mv: Move) -> bool {
        match mv.to_index() {
            Some((row, column)) => self.place(side, row, column),
            None => false,
        }
    }

    /// Clear an in-bounds cell. Clearing an already empty cell succeeds.
    pub fn remove(&mut self, row: usize, column: usize) -> bool {
        if !Self::in_bounds(row, column) {
            return false;
        }

        self.cells[row][column] = Cell::Empty;
        true
    }

    /// Cell at `(row, column)`, `None` when out of bounds
    pub fn cell(&self, row: usize, column: usize) -> Option<Cell> {
        self.cells.get(row)?.get(column).copied()
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..DIMENSION)
            .flat_map(|row| (0..DIMENSION).map(move |column| (row, column)))
            .filter(|&(row, column)| self.cells[row][column] == Cell::Empty)
            .collect()
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell != Cell::Empty)
            .count()
    }

    pub fn is_full(&self) -> bool {
        !LineAnalyzer::fields_available(&self.cells)
    }

    /// Compact row-major encoding, e.g. `XO.......`
    pub fn encode(&self) -> String {
        self.cells.iter().flatten().map(|&c| c.to_char()).collect()
    }

    fn in_bounds(row: usize, column: usize) -> bool {
        row < DIMENSION && column < DIMENSION
    }

    fn is_free(&self, row: usize, column: usize) -> bool {
        Self::in_bounds(row, column) && self.cells[row][column] == Cell::Empty
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Console grid with 1-based row and column labels.
///
/// ```text
///      1   2   3
///    -------------
///  1 | X |   |   |
///    -------------
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = format!("   {}-", "----".repeat(DIMENSION));

        write!(f, "    ")?;
        for column in 1..=DIMENSION {
            write!(f, " {column}  ")?;
        }
        writeln!(f)?;
        writeln!(f, "{separator}")?;

        for (i, row) in self.cells.iter().enumerate() {
            write!(f, " {} |", i + 1)?;
            for &cell in row {
                let icon = match cell {
                    Cell::Empty => ' ',
                    other => other.to_char(),
                };
                write!(f, " {icon} |")?;
            }
            writeln!(f)?;
            writeln!(f, "{separator}")?;
        }
        Ok(())
    }
}
