//! Plain-text save format for a board.
//!
//! Eight lines, one per row starting at row 0. Each line is eight tokens
//! joined by single spaces: `.` for an empty square, otherwise the piece
//! glyph. Loading parses into a fresh `BoardState`, so a failure never
//! touches the caller's board.

use std::fs;
use std::path::Path;

use log::{info, warn};

use crate::errors::BoardErrors;
use crate::game_state::board_rules::BOARD_SIZE;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Occupant, Piece};

/// Token written for an empty square.
pub const EMPTY_TOKEN: &str = ".";

pub fn board_to_text(board: &BoardState) -> String {
    let mut out = String::with_capacity(BOARD_SIZE * BOARD_SIZE * 4);

    for row in 0..BOARD_SIZE {
        let Some(squares) = board.row(row) else {
            continue;
        };
        let tokens: Vec<String> = squares.iter().map(|occupant| occupant_to_token(*occupant)).collect();
        out.push_str(&tokens.join(" "));
        out.push('\n');
    }

    out
}

pub fn board_from_text(text: &str) -> Result<BoardState, BoardErrors> {
    let lines: Vec<&str> = text.lines().collect();
    if lines.len() != BOARD_SIZE {
        return Err(BoardErrors::BoardFileParse(format!(
            "expected {BOARD_SIZE} lines, found {}",
            lines.len()
        )));
    }

    let mut squares = [[None; BOARD_SIZE]; BOARD_SIZE];

    for (row, line) in lines.iter().enumerate() {
        let tokens: Vec<&str> = line.split(' ').collect();
        if tokens.len() != BOARD_SIZE {
            return Err(BoardErrors::BoardFileParse(format!(
                "line {} has {} tokens, expected {BOARD_SIZE}",
                row + 1,
                tokens.len()
            )));
        }

        for (col, token) in tokens.iter().enumerate() {
            squares[row][col] = token_to_occupant(token).ok_or_else(|| {
                BoardErrors::BoardFileParse(format!(
                    "unknown token '{token}' at line {}, column {}",
                    row + 1,
                    col + 1
                ))
            })?;
        }
    }

    Ok(BoardState::from_rows(squares))
}

pub fn save_board_to_file(path: &Path, board: &BoardState) -> Result<(), BoardErrors> {
    fs::write(path, board_to_text(board)).map_err(|source| {
        warn!("saving board to {} failed: {source}", path.display());
        BoardErrors::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;
    info!("board saved to {}", path.display());
    Ok(())
}

pub fn load_board_from_file(path: &Path) -> Result<BoardState, BoardErrors> {
    let text = fs::read_to_string(path).map_err(|source| {
        warn!("reading board from {} failed: {source}", path.display());
        BoardErrors::Io {
            path: path.to_path_buf(),
            source,
        }
    })?;

    let board = board_from_text(&text).inspect_err(|err| {
        warn!("{} holds no valid board: {err}", path.display());
    })?;
    info!("board loaded from {}", path.display());
    Ok(board)
}

fn occupant_to_token(occupant: Occupant) -> String {
    match occupant {
        Some(piece) => piece.glyph().to_string(),
        None => EMPTY_TOKEN.to_owned(),
    }
}

/// `Some(occupant)` for a known token, `None` when the token is not valid.
fn token_to_occupant(token: &str) -> Option<Occupant> {
    if token == EMPTY_TOKEN {
        return Some(None);
    }

    let mut chars = token.chars();
    let glyph = chars.next()?;
    if chars.next().is_some() {
        return None;
    }

    Piece::from_glyph(glyph).map(Some)
}
