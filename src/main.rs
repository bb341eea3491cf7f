use std::process::ExitCode;

use log::error;

use plum_board::editor::editor_config::EditorConfig;
use plum_board::editor::editor_top::run_stdio_loop;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match EditorConfig::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(message) => {
            eprintln!("{message}");
            eprintln!("usage: plum_board [--save-file <path>] [--exit-on-game-over]");
            return ExitCode::from(2);
        }
    };

    if let Err(err) = run_stdio_loop(config) {
        error!("terminal i/o failed: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
