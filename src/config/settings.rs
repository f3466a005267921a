//! Runtime configuration settings

use crate::import::rekordbox::default_library_path;
use std::path::PathBuf;

/// Runtime settings for a read
#[derive(Debug, Clone)]
pub struct Settings {
    /// Rekordbox XML export to read
    pub input: PathBuf,
    /// Print the playlist tree
    pub show_playlists: bool,
    /// JSON output file
    pub json_output: Option<PathBuf>,
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_cli(cli: &super::cli::Cli) -> Self {
        Self {
            input: cli.input.clone().unwrap_or_else(default_library_path),
            show_playlists: cli.playlists,
            json_output: cli.json.clone(),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: default_library_path(),
            show_playlists: false,
            json_output: None,
        }
    }
}
