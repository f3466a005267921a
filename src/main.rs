//! djread CLI entry point

use clap::Parser;
use djread::config::{Cli, Settings};
use djread::pipeline;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(&cli);

    let settings = Settings::from_cli(&cli);

    match pipeline::run(&settings) {
        Ok(result) => {
            println!(
                "Summary: {} tracks, {} cue points, {} playlists",
                result.tracks, result.cue_points, result.playlists
            );
            if !result.cue_kinds.is_empty() {
                println!("Cue points: {}", pipeline::format_cue_kinds(&result.cue_kinds));
            }
            if let (true, Some(path)) = (result.json_written, &settings.json_output) {
                println!("✓ Wrote JSON to {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(cli: &Cli) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter())),
        )
        .with_target(false)
        .init();
}
