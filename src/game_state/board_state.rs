//! Mutable 8x8 board model.
//!
//! `BoardState` owns one occupant per square. It is total: every on-board
//! cell always has a value, and off-board cells are rejected with
//! `BoardErrors::OutOfRange` instead of panicking.

use crate::errors::BoardErrors;
use crate::game_state::board_rules::{initial_piece_at, BOARD_SIZE};
use crate::game_state::board_types::{Cell, Occupant};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    // [row][col]
    squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl BoardState {
    /// Board with every square empty.
    #[inline]
    pub fn new_empty() -> Self {
        Self {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Board in the standard starting layout.
    pub fn new_game() -> Self {
        let mut board = Self::new_empty();
        board.reset();
        board
    }

    /// Reinitialize every square to the standard starting layout.
    pub fn reset(&mut self) {
        for cell in Cell::all() {
            let (row, col) = (cell.row as usize, cell.col as usize);
            self.squares[row][col] = initial_piece_at(cell);
        }
    }

    pub fn get(&self, cell: Cell) -> Result<Occupant, BoardErrors> {
        let (row, col) = checked_indices(cell)?;
        Ok(self.squares[row][col])
    }

    pub fn set(&mut self, cell: Cell, occupant: Occupant) -> Result<(), BoardErrors> {
        let (row, col) = checked_indices(cell)?;
        self.squares[row][col] = occupant;
        Ok(())
    }

    /// Glyph of the occupant as a string, empty for an empty square.
    pub fn display_value(&self, cell: Cell) -> Result<String, BoardErrors> {
        Ok(self
            .get(cell)?
            .map(|piece| piece.glyph().to_string())
            .unwrap_or_default())
    }

    /// One row, column 0 first.
    pub fn row(&self, row: usize) -> Option<&[Occupant; BOARD_SIZE]> {
        self.squares.get(row)
    }

    pub(crate) fn from_rows(squares: [[Occupant; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { squares }
    }
}

#[inline]
fn checked_indices(cell: Cell) -> Result<(usize, usize), BoardErrors> {
    cell.indices().ok_or(BoardErrors::OutOfRange {
        row: cell.row,
        col: cell.col,
    })
}
