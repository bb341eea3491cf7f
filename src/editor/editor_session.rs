//! Editor session: the interface a presentation layer drives.
//!
//! Holds one `BoardState` plus the Playing/GameOver phase. Front-ends render
//! through `get_display_value`, forward completed drags to `apply_move`, and
//! route menu actions to `reset_board`, `save_to_file` and `load_from_file`.
//! Every failure is returned to the caller with the board unchanged.

use std::path::Path;

use log::{info, warn};

use crate::errors::BoardErrors;
use crate::game_state::board_state::BoardState;
use crate::game_state::board_types::{Cell, Color};
use crate::move_application::apply_drag::{self, MoveOutcome};
use crate::utils::board_file::{load_board_from_file, save_board_to_file};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Playing,
    /// Terminal until the board is reset or replaced by a load.
    GameOver { winner: Color },
}

#[derive(Debug, Clone)]
pub struct EditorSession {
    board: BoardState,
    phase: EditorPhase,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    pub fn new() -> Self {
        Self {
            board: BoardState::new_game(),
            phase: EditorPhase::Playing,
        }
    }

    #[inline]
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    /// Glyph to draw on `cell`, or an empty string.
    pub fn get_display_value(&self, cell: Cell) -> Result<String, BoardErrors> {
        self.board.display_value(cell)
    }

    /// Apply a completed drag. Rejected once the game is over.
    pub fn apply_move(&mut self, source: Cell, dest: Cell) -> Result<MoveOutcome, BoardErrors> {
        if let EditorPhase::GameOver { winner } = self.phase {
            warn!("move {source} -> {dest} rejected, game already won by {winner}");
            return Err(BoardErrors::GameAlreadyOver { winner });
        }

        let outcome = apply_drag::apply_move(&mut self.board, source, dest).inspect_err(|err| {
            warn!("move {source} -> {dest} rejected: {err}");
        })?;

        if let MoveOutcome::GameOver { winner } = outcome {
            self.phase = EditorPhase::GameOver { winner };
        }
        Ok(outcome)
    }

    pub fn reset_board(&mut self) {
        self.board.reset();
        self.phase = EditorPhase::Playing;
        info!("board reset to starting layout");
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), BoardErrors> {
        save_board_to_file(path, &self.board)
    }

    /// Replace the board with the one stored at `path`; all or nothing.
    pub fn load_from_file(&mut self, path: &Path) -> Result<(), BoardErrors> {
        let loaded = load_board_from_file(path)?;
        self.board = loaded;
        self.phase = EditorPhase::Playing;
        Ok(())
    }
}
