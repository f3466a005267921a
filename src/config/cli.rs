//! CLI argument parsing and configuration

use clap::Parser;
use std::path::PathBuf;

/// djread - Read Rekordbox XML library exports
///
/// Parses the collection, cue points and playlist tree of a rekordbox.xml
/// export, prints a summary and optionally writes the records as JSON.
#[derive(Parser, Debug)]
#[command(name = "djread")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Rekordbox XML export (defaults to ~/Documents/rekordbox.xml)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Print the playlist tree
    #[arg(short, long, default_value = "false")]
    pub playlists: bool,

    /// Write the parsed library to a JSON file
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Verbose output (can be repeated: -v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Cli {
    /// Get the log filter based on verbosity flags
    pub fn log_filter(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
