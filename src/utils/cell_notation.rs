//! Text coordinates for cells.
//!
//! Accepts algebraic squares (`e2`: file letter is the column, rank digit is
//! row + 1) and raw `row,col` pairs (`1,4`). Raw pairs are not range
//! checked here so that off-board input reaches the board and is reported
//! as out of range there; numbers beyond `i8` saturate at its bounds.

use crate::errors::BoardErrors;
use crate::game_state::board_types::Cell;

/// Parse either `e2` or `1,4` into a cell.
pub fn parse_cell(text: &str) -> Result<Cell, BoardErrors> {
    let trimmed = text.trim();
    if trimmed.contains(',') {
        parse_row_col(trimmed)
    } else {
        algebraic_to_cell(trimmed)
    }
}

/// Convert algebraic notation (for example: "e4") to a cell.
pub fn algebraic_to_cell(square: &str) -> Result<Cell, BoardErrors> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(BoardErrors::InvalidCellNotation(square.to_owned()));
    }

    let file = bytes[0].to_ascii_lowercase();
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(BoardErrors::InvalidCellNotation(square.to_owned()));
    }

    Ok(Cell::new((rank - b'1') as i8, (file - b'a') as i8))
}

/// Convert an on-board cell to algebraic notation (for example: "e4").
pub fn cell_to_algebraic(cell: Cell) -> Result<String, BoardErrors> {
    let (row, col) = cell.indices().ok_or(BoardErrors::OutOfRange {
        row: cell.row,
        col: cell.col,
    })?;

    let file_char = char::from(b'a' + col as u8);
    let rank_char = char::from(b'1' + row as u8);
    Ok(format!("{file_char}{rank_char}"))
}

fn parse_row_col(text: &str) -> Result<Cell, BoardErrors> {
    let invalid = || BoardErrors::InvalidCellNotation(text.to_owned());

    let (row, col) = text.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse::<i32>().map_err(|_| invalid())?;
    let col = col.trim().parse::<i32>().map_err(|_| invalid())?;
    Ok(Cell::new(saturate(row), saturate(col)))
}

// Values past the i8 range are still off the board, only further away.
fn saturate(value: i32) -> i8 {
    value.clamp(i32::from(i8::MIN), i32::from(i8::MAX)) as i8
}
