//! Core value types for the sandbox board.
//!
//! A board square holds an `Occupant`: either a `Piece` (one of twelve
//! colored variants, each tied to a Unicode glyph) or nothing. Squares are
//! addressed by `Cell`, which may carry off-board coordinates so that range
//! checks happen where the board is touched rather than at construction.

use std::fmt;

use crate::game_state::board_rules::BOARD_SIZE;

/// Side owning a piece. White occupies rows 0 and 1 at the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Piece kind without color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

/// A colored piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Piece {
    WhiteKing,
    WhiteQueen,
    WhiteRook,
    WhiteBishop,
    WhiteKnight,
    WhitePawn,
    BlackKing,
    BlackQueen,
    BlackRook,
    BlackBishop,
    BlackKnight,
    BlackPawn,
}

impl Piece {
    /// Every variant, white first, in glyph order.
    pub const ALL: [Piece; 12] = [
        Piece::WhiteKing,
        Piece::WhiteQueen,
        Piece::WhiteRook,
        Piece::WhiteBishop,
        Piece::WhiteKnight,
        Piece::WhitePawn,
        Piece::BlackKing,
        Piece::BlackQueen,
        Piece::BlackRook,
        Piece::BlackBishop,
        Piece::BlackKnight,
        Piece::BlackPawn,
    ];

    pub const fn new(color: Color, kind: PieceKind) -> Self {
        match (color, kind) {
            (Color::White, PieceKind::King) => Piece::WhiteKing,
            (Color::White, PieceKind::Queen) => Piece::WhiteQueen,
            (Color::White, PieceKind::Rook) => Piece::WhiteRook,
            (Color::White, PieceKind::Bishop) => Piece::WhiteBishop,
            (Color::White, PieceKind::Knight) => Piece::WhiteKnight,
            (Color::White, PieceKind::Pawn) => Piece::WhitePawn,
            (Color::Black, PieceKind::King) => Piece::BlackKing,
            (Color::Black, PieceKind::Queen) => Piece::BlackQueen,
            (Color::Black, PieceKind::Rook) => Piece::BlackRook,
            (Color::Black, PieceKind::Bishop) => Piece::BlackBishop,
            (Color::Black, PieceKind::Knight) => Piece::BlackKnight,
            (Color::Black, PieceKind::Pawn) => Piece::BlackPawn,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Piece::WhiteKing
            | Piece::WhiteQueen
            | Piece::WhiteRook
            | Piece::WhiteBishop
            | Piece::WhiteKnight
            | Piece::WhitePawn => Color::White,
            _ => Color::Black,
        }
    }

    pub const fn kind(self) -> PieceKind {
        match self {
            Piece::WhiteKing | Piece::BlackKing => PieceKind::King,
            Piece::WhiteQueen | Piece::BlackQueen => PieceKind::Queen,
            Piece::WhiteRook | Piece::BlackRook => PieceKind::Rook,
            Piece::WhiteBishop | Piece::BlackBishop => PieceKind::Bishop,
            Piece::WhiteKnight | Piece::BlackKnight => PieceKind::Knight,
            Piece::WhitePawn | Piece::BlackPawn => PieceKind::Pawn,
        }
    }

    #[inline]
    pub const fn is_king(self) -> bool {
        matches!(self.kind(), PieceKind::King)
    }

    /// Display glyph, also used as the save-file token.
    pub const fn glyph(self) -> char {
        match self {
            Piece::WhiteKing => '♔',
            Piece::WhiteQueen => '♕',
            Piece::WhiteRook => '♖',
            Piece::WhiteBishop => '♗',
            Piece::WhiteKnight => '♘',
            Piece::WhitePawn => '♙',
            Piece::BlackKing => '♚',
            Piece::BlackQueen => '♛',
            Piece::BlackRook => '♜',
            Piece::BlackBishop => '♝',
            Piece::BlackKnight => '♞',
            Piece::BlackPawn => '♟',
        }
    }

    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|piece| piece.glyph() == glyph)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Contents of one square.
pub type Occupant = Option<Piece>;

/// Board coordinate. Row 0 is White's back rank, column 0 the a-file.
///
/// Coordinates are signed and unchecked so that callers can describe
/// positions just off the board; `BoardState` rejects them on access.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub row: i8,
    pub col: i8,
}

impl Cell {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE as i8 && self.col >= 0 && self.col < BOARD_SIZE as i8
    }

    /// `(row, col)` as array indices, or `None` off the board.
    #[inline]
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.is_on_board() {
            Some((self.row as usize, self.col as usize))
        } else {
            None
        }
    }

    /// All 64 on-board cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE as i8).flat_map(|row| (0..BOARD_SIZE as i8).map(move |col| Cell::new(row, col)))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, Color, Piece, PieceKind};

    #[test]
    fn glyphs_are_unique_and_reversible() {
        for piece in Piece::ALL {
            assert_eq!(Piece::from_glyph(piece.glyph()), Some(piece));
        }
        assert_eq!(Piece::from_glyph('.'), None);
        assert_eq!(Piece::from_glyph('K'), None);
    }

    #[test]
    fn color_and_kind_recompose_every_piece() {
        for piece in Piece::ALL {
            assert_eq!(Piece::new(piece.color(), piece.kind()), piece);
        }
        assert_eq!(Piece::BlackQueen.color(), Color::Black);
        assert_eq!(Piece::WhiteKnight.kind(), PieceKind::Knight);
        assert!(Piece::BlackKing.is_king());
        assert!(!Piece::WhiteQueen.is_king());
    }

    #[test]
    fn cell_bounds() {
        assert!(Cell::new(0, 0).is_on_board());
        assert!(Cell::new(7, 7).is_on_board());
        assert!(!Cell::new(-1, 0).is_on_board());
        assert!(!Cell::new(0, 8).is_on_board());
        assert_eq!(Cell::new(3, 5).indices(), Some((3, 5)));
        assert_eq!(Cell::new(8, 0).indices(), None);
        assert_eq!(Cell::all().count(), 64);
    }
}
