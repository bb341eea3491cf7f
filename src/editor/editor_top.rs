//! Line-oriented terminal front-end and command loop.
//!
//! Translates typed commands into `EditorSession` calls and prints the board
//! after every change. Board output goes to the supplied writer; diagnostics
//! go through `log`.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use log::debug;

use crate::editor::editor_config::EditorConfig;
use crate::editor::editor_session::EditorSession;
use crate::errors::BoardErrors;
use crate::game_state::board_types::Color;
use crate::move_application::apply_drag::MoveOutcome;
use crate::utils::cell_notation::parse_cell;
use crate::utils::render_board_state::render_board_state;

const HELP_TEXT: &str = "\
commands:
  show                 print the board
  get <cell>           print the piece on a cell
  move <from> <to>     drag a square onto another (cells as e2 or 1,4)
  new                  reset to the starting layout
  save [path]          save the board
  load [path]          load a saved board
  help                 show this text
  quit | exit          leave the editor";

pub fn run_stdio_loop(config: EditorConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_loop(stdin.lock(), &mut stdout, config)
}

/// Drive the editor from any line source until `quit`, end of input, or a
/// win when `exit_on_game_over` is set.
pub fn run_loop(input: impl BufRead, out: &mut impl Write, config: EditorConfig) -> io::Result<()> {
    let mut shell = EditorShell::new(config);
    writeln!(out, "{}", render_board_state(shell.session.board()))?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        let should_quit = shell.handle_command(&line, out)?;
        out.flush()?;
        if should_quit {
            break;
        }
    }

    Ok(())
}

struct EditorShell {
    session: EditorSession,
    config: EditorConfig,
}

impl EditorShell {
    fn new(config: EditorConfig) -> Self {
        Self {
            session: EditorSession::new(),
            config,
        }
    }

    fn handle_command(&mut self, line: &str, out: &mut impl Write) -> io::Result<bool> {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(false);
        }

        let mut parts = trimmed.split_whitespace();
        let cmd = parts.next().unwrap_or_default();
        let args: Vec<&str> = parts.collect();
        debug!("command '{cmd}' with {} argument(s)", args.len());

        match cmd {
            "show" => {
                writeln!(out, "{}", render_board_state(self.session.board()))?;
            }
            "get" => match self.handle_get(&args) {
                Ok(value) if value.is_empty() => writeln!(out, "(empty)")?,
                Ok(value) => writeln!(out, "{value}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "move" => match self.handle_move(&args) {
                Ok(outcome) => {
                    writeln!(out, "{}", render_board_state(self.session.board()))?;
                    if let MoveOutcome::GameOver { winner } = outcome {
                        writeln!(out, "{}", winner_message(winner))?;
                    }
                    if outcome.is_game_over() && self.config.exit_on_game_over {
                        return Ok(true);
                    }
                }
                Err(err) => writeln!(out, "error: {err}")?,
            },
            "new" => {
                self.session.reset_board();
                writeln!(out, "{}", render_board_state(self.session.board()))?;
            }
            "save" => {
                let path = self.path_argument(&args);
                match self.session.save_to_file(&path) {
                    Ok(()) => writeln!(out, "Game saved to {}", path.display())?,
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "load" => {
                let path = self.path_argument(&args);
                match self.session.load_from_file(&path) {
                    Ok(()) => {
                        writeln!(out, "Game loaded from {}", path.display())?;
                        writeln!(out, "{}", render_board_state(self.session.board()))?;
                    }
                    Err(err) => writeln!(out, "error: {err}")?,
                }
            }
            "help" => {
                writeln!(out, "{HELP_TEXT}")?;
            }
            "quit" | "exit" => {
                return Ok(true);
            }
            other => {
                writeln!(out, "error: unknown command '{other}', type help")?;
            }
        }

        Ok(false)
    }

    fn handle_get(&self, args: &[&str]) -> Result<String, BoardErrors> {
        let [cell] = args else {
            return Err(BoardErrors::InvalidCellNotation(args.join(" ")));
        };
        self.session.get_display_value(parse_cell(cell)?)
    }

    fn handle_move(&mut self, args: &[&str]) -> Result<MoveOutcome, BoardErrors> {
        let [from, to] = args else {
            return Err(BoardErrors::InvalidCellNotation(args.join(" ")));
        };
        let source = parse_cell(from)?;
        let dest = parse_cell(to)?;
        self.session.apply_move(source, dest)
    }

    fn path_argument(&self, args: &[&str]) -> PathBuf {
        match args.first() {
            Some(path) => Path::new(path).to_path_buf(),
            None => self.config.save_path.clone(),
        }
    }
}

fn winner_message(winner: Color) -> String {
    format!(
        "{winner} wins! {} King has been captured.",
        winner.opposite()
    )
}
