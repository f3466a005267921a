//! JSON export for interoperability with other tools

use crate::error::{DjreadError, Result};
use crate::types::{Folder, Library, Track};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info};

/// JSON output schema version
const SCHEMA_VERSION: &str = "1.0";

/// Top-level JSON output structure
#[derive(Debug, Serialize, Deserialize)]
pub struct LibraryJson {
    /// Schema version for forward compatibility
    pub version: String,
    /// Export metadata
    pub metadata: ExportMetadata,
    /// Collection tracks, in document order
    pub tracks: Vec<Track>,
    /// Playlist tree roots
    pub playlists: Vec<Folder>,
}

/// Borrowed view of [`LibraryJson`] used for writing
#[derive(Debug, Serialize)]
struct LibraryJsonRef<'a> {
    version: &'a str,
    metadata: ExportMetadata,
    tracks: &'a [Track],
    playlists: &'a [Folder],
}

/// Export metadata
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// djread version that generated this file
    pub generator_version: String,
    /// Timestamp of export
    pub exported_at: String,
    /// Rekordbox XML the records were read from
    pub source: String,
    pub track_count: usize,
    pub playlist_count: usize,
}

impl LibraryJson {
    /// Rebuild the library held by this export
    pub fn into_library(self) -> Library {
        Library {
            tracks: self.tracks,
            playlists: self.playlists,
        }
    }
}

/// Write a parsed library to a JSON file
///
/// Uses atomic write pattern: writes to a temp file first, then renames.
/// This prevents data corruption if the write is interrupted.
///
/// JSON has no representation for NaN or infinity, so a library holding a
/// non-finite BPM or cue start is rejected before anything is written.
pub fn write_json(library: &Library, source: &Path, output_path: &Path) -> Result<()> {
    check_finite(library).map_err(|reason| DjreadError::OutputError {
        path: output_path.to_path_buf(),
        reason,
    })?;

    // Write to temp file in same directory (ensures same filesystem for atomic rename)
    let temp_path = output_path.with_extension("json.tmp");

    let file = File::create(&temp_path).map_err(|e| DjreadError::output_error(output_path, e))?;
    let writer = BufWriter::new(file);

    let output = LibraryJsonRef {
        version: SCHEMA_VERSION,
        metadata: ExportMetadata {
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            exported_at: chrono::Utc::now().to_rfc3339(),
            source: source.to_string_lossy().to_string(),
            track_count: library.tracks.len(),
            playlist_count: library.playlist_count(),
        },
        tracks: &library.tracks,
        playlists: &library.playlists,
    };

    serde_json::to_writer_pretty(writer, &output).map_err(|e| {
        // Clean up temp file on error
        let _ = std::fs::remove_file(&temp_path);
        DjreadError::OutputError {
            path: output_path.to_path_buf(),
            reason: e.to_string(),
        }
    })?;

    // Atomic rename: either succeeds completely or fails without modifying target
    std::fs::rename(&temp_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&temp_path);
        DjreadError::OutputError {
            path: output_path.to_path_buf(),
            reason: format!("Failed to finalize file: {}", e),
        }
    })?;

    info!("Wrote {} tracks to {}", library.tracks.len(), output_path.display());

    Ok(())
}

/// Find the first float that JSON cannot carry
fn check_finite(library: &Library) -> std::result::Result<(), String> {
    for track in &library.tracks {
        if !track.average_bpm.is_finite() {
            return Err(format!(
                "Track {} has non-finite AverageBpm ({})",
                track.track_id, track.average_bpm
            ));
        }
        if let Some(cue) = track.cue_points.iter().find(|c| !c.start.is_finite()) {
            return Err(format!(
                "Track {} has a cue point with non-finite Start ({})",
                track.track_id, cue.start
            ));
        }
    }
    Ok(())
}

/// Read a JSON file previously written by [`write_json`]
pub fn read_json(json_path: &Path) -> Result<LibraryJson> {
    if !json_path.exists() {
        return Err(DjreadError::FileNotFound(json_path.to_path_buf()));
    }

    let reader = BufReader::new(File::open(json_path)?);
    let json: LibraryJson = serde_json::from_reader(reader).map_err(|e| DjreadError::Json {
        path: json_path.to_path_buf(),
        reason: e.to_string(),
    })?;

    debug!(
        "Loaded {} tracks from {}",
        json.tracks.len(),
        json_path.display()
    );

    Ok(json)
}
