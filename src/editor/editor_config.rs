//! Runtime options for the terminal editor.

use std::path::PathBuf;

use crate::game_state::board_rules::DEFAULT_SAVE_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorConfig {
    /// File used by `save` and `load` when no path is given.
    pub save_path: PathBuf,
    /// End the command loop as soon as a king is captured.
    pub exit_on_game_over: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            save_path: PathBuf::from(DEFAULT_SAVE_FILE),
            exit_on_game_over: false,
        }
    }
}

impl EditorConfig {
    /// Build a config from command-line arguments, program name excluded.
    ///
    /// Recognised flags: `--save-file <path>` and `--exit-on-game-over`.
    pub fn from_args<I>(args: I) -> Result<Self, String>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--save-file" => {
                    let path = args
                        .next()
                        .ok_or_else(|| "--save-file requires a path".to_owned())?;
                    config.save_path = PathBuf::from(path);
                }
                "--exit-on-game-over" => config.exit_on_game_over = true,
                other => return Err(format!("unknown argument '{other}'")),
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::EditorConfig;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = EditorConfig::from_args(Vec::new()).expect("no args is valid");
        assert_eq!(config, EditorConfig::default());
        assert_eq!(config.save_path, PathBuf::from("saved_game.txt"));
        assert!(!config.exit_on_game_over);
    }

    #[test]
    fn parses_flags() {
        let config = EditorConfig::from_args(args(&["--exit-on-game-over", "--save-file", "board.txt"]))
            .expect("flags should parse");
        assert_eq!(config.save_path, PathBuf::from("board.txt"));
        assert!(config.exit_on_game_over);
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(EditorConfig::from_args(args(&["--save-file"])).is_err());
        assert!(EditorConfig::from_args(args(&["--fast"])).is_err());
    }
}
