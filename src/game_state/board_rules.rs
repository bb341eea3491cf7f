//! Canonical board constants and the starting layout.
//!
//! `initial_piece_at` is the single source of truth for the standard
//! arrangement; `BoardState::reset` is built on it.

use crate::game_state::board_types::{Cell, Color, Occupant, Piece, PieceKind};

/// Squares per side.
pub const BOARD_SIZE: usize = 8;

/// Conventional file name for the saved board.
pub const DEFAULT_SAVE_FILE: &str = "saved_game.txt";

/// Back-rank kinds by column, shared by both colors.
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_BACK_ROW: i8 = 0;
pub const WHITE_PAWN_ROW: i8 = 1;
pub const BLACK_PAWN_ROW: i8 = 6;
pub const BLACK_BACK_ROW: i8 = 7;

/// Occupant of `cell` in the standard starting layout.
///
/// Off-board cells and rows 2 through 5 are empty.
pub fn initial_piece_at(cell: Cell) -> Occupant {
    let (_, col) = cell.indices()?;
    match cell.row {
        WHITE_BACK_ROW => Some(Piece::new(Color::White, BACK_RANK[col])),
        WHITE_PAWN_ROW => Some(Piece::WhitePawn),
        BLACK_PAWN_ROW => Some(Piece::BlackPawn),
        BLACK_BACK_ROW => Some(Piece::new(Color::Black, BACK_RANK[col])),
        _ => None,
    }
}
