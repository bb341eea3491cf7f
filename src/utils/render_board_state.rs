//! Terminal-oriented Unicode board renderer.
//!
//! Row 0 is drawn at the top, matching the saved-file order; rank labels
//! are `row + 1`.

use crate::game_state::board_rules::BOARD_SIZE;
use crate::game_state::board_state::BoardState;

const FILE_LABELS: &str = "  a b c d e f g h";

/// Render the board to a Unicode string for terminal output.
pub fn render_board_state(board: &BoardState) -> String {
    let mut out = String::new();

    out.push_str(FILE_LABELS);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let Some(squares) = board.row(row) else {
            continue;
        };
        let rank_label = char::from(b'1' + row as u8);
        out.push(rank_label);
        out.push(' ');

        for (col, occupant) in squares.iter().enumerate() {
            match occupant {
                Some(piece) => out.push(piece.glyph()),
                None => out.push('·'),
            }

            if col < BOARD_SIZE - 1 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(rank_label);
        out.push('\n');
    }

    out.push_str(FILE_LABELS);

    out
}

#[cfg(test)]
mod tests {
    use super::render_board_state;
    use crate::game_state::board_state::BoardState;

    #[test]
    fn renders_starting_board() {
        let rendered = render_board_state(&BoardState::new_game());
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 10);
        assert_eq!(lines[1], "1 ♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖ 1");
        assert_eq!(lines[4], "4 · · · · · · · · 4");
        assert_eq!(lines[8], "8 ♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜ 8");
    }
}
