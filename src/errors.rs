//! Errors used throughout the board editor.
//!
//! `BoardErrors` is the single error type returned by board access, move
//! application, persistence and the editor session. Every variant is
//! recoverable: a failed call leaves the board exactly as it was, so callers
//! can report the message and keep going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::game_state::board_types::Color;

/// Unified error type for the board editor.
#[derive(Debug, Error)]
pub enum BoardErrors {
    /// A cell coordinate fell outside `0..=7` on either axis.
    #[error("cell ({row}, {col}) is outside the 8x8 board")]
    OutOfRange { row: i8, col: i8 },

    /// Saved board text did not match the 8-line, 8-token format.
    ///
    /// Payload: human-readable description naming the offending line or token.
    #[error("malformed saved board: {0}")]
    BoardFileParse(String),

    /// The saved board file could not be read or written.
    #[error("could not access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A move was attempted after a king had already been captured.
    #[error("the game is over, {winner} has already won")]
    GameAlreadyOver { winner: Color },

    /// Text could not be read as a cell coordinate.
    #[error("invalid cell '{0}', expected a square like e2 or row,col like 1,4")]
    InvalidCellNotation(String),
}
