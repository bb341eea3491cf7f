//! Drag-and-drop relocation of board occupants.
//!
//! No legality filtering is applied: any occupant, empty included, may be
//! dropped on any square. Overwriting a king is the only terminal event.

use log::{debug, info};

use crate::errors::BoardErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Cell, Color, Occupant};
use crate::utils::cell_notation::cell_to_algebraic;

/// Result of a completed relocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continue,
    GameOver { winner: Color },
}

impl MoveOutcome {
    #[inline]
    pub const fn is_game_over(self) -> bool {
        matches!(self, MoveOutcome::GameOver { .. })
    }
}

/// Relocate the occupant of `source` onto `dest`.
///
/// The destination takes whatever `source` held (possibly nothing) and the
/// source is cleared. If the overwritten occupant was a king, the outcome is
/// `GameOver` in favour of the other color; the board still reflects the
/// capturing move. Both cells are validated before anything is written.
///
/// A drop on the source square runs the same steps, so the square ends up
/// empty and a king dropped on itself counts as captured.
pub fn apply_move(board: &mut BoardState, source: Cell, dest: Cell) -> Result<MoveOutcome, BoardErrors> {
    let moving = board.get(source)?;
    let captured = board.get(dest)?;

    board.set(dest, moving)?;
    board.set(source, None)?;

    debug!(
        "moved {} from {} to {}, replacing {}",
        describe(moving),
        square_label(source),
        square_label(dest),
        describe(captured)
    );

    match captured {
        Some(piece) if piece.is_king() => {
            let winner = piece.color().opposite();
            info!(
                "{} king captured on {}, {winner} wins",
                piece.color(),
                square_label(dest)
            );
            Ok(MoveOutcome::GameOver { winner })
        }
        _ => Ok(MoveOutcome::Continue),
    }
}

fn describe(occupant: Occupant) -> String {
    occupant
        .map(|piece| format!("{piece:?}"))
        .unwrap_or_else(|| "empty".to_owned())
}

fn square_label(cell: Cell) -> String {
    cell_to_algebraic(cell).unwrap_or_else(|_| cell.to_string())
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    use super::{apply_move, MoveOutcome};
    use crate::errors::BoardErrors;
    use crate::game_state::board_state::BoardState;
    use crate::game_state::board_types::{Cell, Color, Piece};

    fn random_cell(rng: &mut StdRng) -> Cell {
        Cell::new(rng.random_range(0..8), rng.random_range(0..8))
    }

    #[test]
    fn pawn_push_clears_origin_and_fills_destination() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(1, 4), Cell::new(3, 4)).expect("pawn push");

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.get(Cell::new(3, 4)).expect("e4"), Some(Piece::WhitePawn));
        assert_eq!(board.get(Cell::new(1, 4)).expect("e2"), None);
    }

    #[test]
    fn capturing_white_king_ends_game_for_black() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(7, 4), Cell::new(0, 4)).expect("king drag");

        assert_eq!(outcome, MoveOutcome::GameOver { winner: Color::Black });
        assert!(outcome.is_game_over());
        assert_eq!(board.get(Cell::new(0, 4)).expect("e1"), Some(Piece::BlackKing));
        assert_eq!(board.get(Cell::new(7, 4)).expect("e8"), None);
    }

    #[test]
    fn capturing_black_king_ends_game_for_white() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(1, 0), Cell::new(7, 4)).expect("pawn drag");

        assert_eq!(outcome, MoveOutcome::GameOver { winner: Color::White });
        assert_eq!(board.get(Cell::new(7, 4)).expect("e8"), Some(Piece::WhitePawn));
    }

    #[test]
    fn capturing_other_pieces_continues() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(0, 3), Cell::new(7, 3)).expect("queen takes queen");

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.get(Cell::new(7, 3)).expect("d8"), Some(Piece::WhiteQueen));
    }

    #[test]
    fn same_color_pieces_may_be_overwritten() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(0, 0), Cell::new(1, 0)).expect("rook onto own pawn");

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.get(Cell::new(1, 0)).expect("a2"), Some(Piece::WhiteRook));
        assert_eq!(board.get(Cell::new(0, 0)).expect("a1"), None);
    }

    #[test]
    fn empty_drag_erases_destination() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(4, 4), Cell::new(6, 0)).expect("empty drag");

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.get(Cell::new(6, 0)).expect("a7"), None);
        assert_eq!(board.get(Cell::new(4, 4)).expect("e5"), None);
    }

    #[test]
    fn empty_drag_onto_king_still_ends_game() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(3, 3), Cell::new(7, 4)).expect("empty drag");

        assert_eq!(outcome, MoveOutcome::GameOver { winner: Color::White });
        assert_eq!(board.get(Cell::new(7, 4)).expect("e8"), None);
    }

    #[test]
    fn king_dropped_on_own_square_is_captured() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(0, 4), Cell::new(0, 4)).expect("self drop");

        assert_eq!(outcome, MoveOutcome::GameOver { winner: Color::Black });
        assert_eq!(board.get(Cell::new(0, 4)).expect("e1"), None);
    }

    #[test]
    fn pawn_dropped_on_own_square_vanishes() {
        let mut board = BoardState::new_game();
        let outcome = apply_move(&mut board, Cell::new(6, 2), Cell::new(6, 2)).expect("self drop");

        assert_eq!(outcome, MoveOutcome::Continue);
        assert_eq!(board.get(Cell::new(6, 2)).expect("c7"), None);
    }

    #[test]
    fn random_drags_move_occupant_and_detect_king_captures() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..40 {
            let mut board = BoardState::new_game();
            for _ in 0..30 {
                let source = random_cell(&mut rng);
                let dest = random_cell(&mut rng);
                let old_source = board.get(source).expect("source on board");
                let old_dest = board.get(dest).expect("dest on board");

                let outcome = apply_move(&mut board, source, dest).expect("on-board drag");

                assert_eq!(board.get(source).expect("source on board"), None);
                if source != dest {
                    assert_eq!(board.get(dest).expect("dest on board"), old_source);
                }
                let expected = match old_dest {
                    Some(piece) if piece.is_king() => MoveOutcome::GameOver {
                        winner: piece.color().opposite(),
                    },
                    _ => MoveOutcome::Continue,
                };
                assert_eq!(outcome, expected, "drag {source} -> {dest}");
            }
        }
    }

    #[test]
    fn out_of_range_cells_leave_board_unchanged() {
        let mut board = BoardState::new_game();

        let err = apply_move(&mut board, Cell::new(-1, 0), Cell::new(0, 0)).expect_err("source off board");
        assert!(matches!(err, BoardErrors::OutOfRange { row: -1, col: 0 }));

        let err = apply_move(&mut board, Cell::new(0, 0), Cell::new(8, 0)).expect_err("dest off board");
        assert!(matches!(err, BoardErrors::OutOfRange { row: 8, col: 0 }));

        assert_eq!(board, BoardState::new_game());
    }
}
