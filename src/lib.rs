//! Crate root module declarations for the Plum Board sandbox editor.
//!
//! Exposes the board model, drag-and-drop move application, save-file
//! persistence and the editor front-end so the binary, tests and other
//! presentation layers can import stable module paths.

pub mod errors;

pub mod game_state {
    pub mod board_rules;
    pub mod board_state;
    pub mod board_types;
}

pub mod move_application {
    pub mod apply_drag;
}

pub mod editor {
    pub mod editor_config;
    pub mod editor_session;
    pub mod editor_top;
}

pub mod utils {
    pub mod board_file;
    pub mod cell_notation;
    pub mod render_board_state;
}
