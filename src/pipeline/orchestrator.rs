//! Pipeline orchestration
//!
//! Loads one Rekordbox export, prints what it contains and writes the
//! optional JSON export.

use crate::config::Settings;
use crate::error::Result;
use crate::export;
use crate::types::{CueKind, Folder, Library};
use std::time::Instant;
use tracing::info;

/// Summary of one read
#[derive(Debug)]
pub struct ReadResult {
    pub tracks: usize,
    pub cue_points: usize,
    /// Cue point count per kind, ordered by kind
    pub cue_kinds: Vec<(CueKind, usize)>,
    pub playlists: usize,
    pub json_written: bool,
}

/// Run a full read of `settings.input`
pub fn run(settings: &Settings) -> Result<ReadResult> {
    let start = Instant::now();

    info!("Reading {}", settings.input.display());
    let library = Library::load(&settings.input)?;
    info!("Parsed library in {:.2}s", start.elapsed().as_secs_f64());

    if settings.show_playlists {
        print_playlist_tree(&library.playlists);
    }

    let json_written = match &settings.json_output {
        Some(path) => {
            export::write_json(&library, &settings.input, path)?;
            true
        }
        None => false,
    };

    Ok(ReadResult {
        tracks: library.tracks.len(),
        cue_points: library.cue_point_count(),
        cue_kinds: library.cue_kind_counts().into_iter().collect(),
        playlists: library.playlist_count(),
        json_written,
    })
}

/// Format cue kind counts as "3 cue, 1 loop"
pub fn format_cue_kinds(kinds: &[(CueKind, usize)]) -> String {
    kinds
        .iter()
        .map(|(kind, count)| format!("{} {}", count, kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Print the playlist tree, one node per line
fn print_playlist_tree(roots: &[Folder]) {
    println!();
    for root in roots {
        print_folder(root, 0);
    }
    println!();
}

fn print_folder(folder: &Folder, depth: usize) {
    let indent = "  ".repeat(depth);
    println!("{}{}/", indent, folder.name);

    for child in &folder.folders {
        print_folder(child, depth + 1);
    }
    for playlist in &folder.playlists {
        println!("{}  {} ({} tracks)", indent, playlist.name, playlist.len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cue_kinds() {
        let kinds = vec![(CueKind::Cue, 3), (CueKind::Loop, 1)];
        assert_eq!(format_cue_kinds(&kinds), "3 cue, 1 loop");
        assert_eq!(format_cue_kinds(&[]), "");
    }
}
