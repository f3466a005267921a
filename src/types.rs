//! Core data types for djread
//!
//! These types mirror the records of a Rekordbox XML export. They own all of
//! their data: nothing borrows from the parsed document.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Cue points
// =============================================================================

/// RGB color of a cue point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl Color {
    pub const WHITE: Color = Color {
        red: 255,
        green: 255,
        blue: 255,
    };

    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Hex notation as shown in Rekordbox (e.g., "#28E214")
    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// What a cue point marks, from its `Type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CueKind {
    Cue,
    FadeIn,
    FadeOut,
    Load,
    Loop,
    Unknown(i64),
}

impl CueKind {
    pub fn from_code(code: i64) -> Self {
        match code {
            0 => CueKind::Cue,
            1 => CueKind::FadeIn,
            2 => CueKind::FadeOut,
            3 => CueKind::Load,
            4 => CueKind::Loop,
            other => CueKind::Unknown(other),
        }
    }
}

impl fmt::Display for CueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CueKind::Cue => write!(f, "cue"),
            CueKind::FadeIn => write!(f, "fade-in"),
            CueKind::FadeOut => write!(f, "fade-out"),
            CueKind::Load => write!(f, "load"),
            CueKind::Loop => write!(f, "loop"),
            CueKind::Unknown(code) => write!(f, "type {}", code),
        }
    }
}

/// A marked position within a track (`POSITION_MARK`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CuePoint {
    pub name: String,
    /// Raw `Type` discriminator
    pub cue_type: i64,
    /// Start offset in seconds
    pub start: f64,
    /// Hot cue slot (0-7), or -1 for a memory cue
    pub num: i64,
    pub color: Color,
}

impl CuePoint {
    pub fn kind(&self) -> CueKind {
        CueKind::from_code(self.cue_type)
    }

    pub fn is_memory_cue(&self) -> bool {
        self.num < 0
    }
}

impl Default for CuePoint {
    fn default() -> Self {
        Self {
            name: String::new(),
            cue_type: 0,
            start: 0.0,
            num: 0,
            color: Color::WHITE,
        }
    }
}

// =============================================================================
// Collection
// =============================================================================

/// One entry of the library collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub track_id: i64,
    pub name: String,
    pub artist: String,
    pub album: String,
    pub genre: String,
    /// File kind as displayed by Rekordbox (e.g., "MP3 File")
    pub kind: String,
    /// File size in bytes
    pub size: i64,
    /// Duration in seconds
    pub total_time: i64,
    pub year: i64,
    pub average_bpm: f64,
    /// Free text, usually `YYYY-MM-DD`
    pub date_added: String,
    /// Bit rate in kbps
    pub bit_rate: i64,
    /// Sample rate in Hz
    pub sample_rate: i64,
    pub comments: String,
    pub play_count: i64,
    pub rating: i64,
    /// Musical key as written by Rekordbox (e.g., "Am" or "8A")
    pub tonality: String,
    pub label: String,
    /// `file://localhost/...` URI of the audio file
    pub location: String,
    pub cue_points: Vec<CuePoint>,
}

impl Track {
    /// Duration as a `Duration`, clamping negative values to zero
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.total_time.max(0) as u64)
    }

    /// Decoded filesystem path of `location`
    pub fn path(&self) -> PathBuf {
        crate::import::rekordbox::uri::rekordbox_uri_to_path(&self.location)
    }

    /// Hot cues, in document order
    pub fn hot_cues(&self) -> impl Iterator<Item = &CuePoint> {
        self.cue_points.iter().filter(|c| !c.is_memory_cue())
    }

    /// Memory cues, in document order
    pub fn memory_cues(&self) -> impl Iterator<Item = &CuePoint> {
        self.cue_points.iter().filter(|c| c.is_memory_cue())
    }
}

// =============================================================================
// Playlist tree
// =============================================================================

/// Discriminator of a playlist tree `NODE`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Folder,
    Playlist,
}

impl NodeType {
    /// Classify a raw `Type` attribute. Unknown values yield `None`.
    pub fn from_attr(value: &str) -> Option<Self> {
        match value {
            "0" => Some(NodeType::Folder),
            "1" => Some(NodeType::Playlist),
            _ => None,
        }
    }
}

/// A named, ordered list of track keys
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub name: String,
    pub node_type: i64,
    /// 0 when tracks are keyed by TrackID, 1 when keyed by location
    pub key_type: i64,
    /// Declared entry count, as written in the file
    pub entries: i64,
    /// Raw `Key` values; not resolved against the collection
    pub tracks: Vec<String>,
}

impl Playlist {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}

/// A container node of the playlist tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Folder {
    pub name: String,
    pub node_type: i64,
    /// Declared child count, as written in the file
    pub count: i64,
    pub folders: Vec<Folder>,
    pub playlists: Vec<Playlist>,
}

impl Folder {
    /// Every playlist below this folder, depth first, paired with its
    /// slash-separated folder path (this folder's name excluded)
    pub fn walk_playlists(&self) -> Vec<(String, &Playlist)> {
        let mut out = Vec::new();
        self.collect_playlists("", &mut out);
        out
    }

    fn collect_playlists<'a>(&'a self, prefix: &str, out: &mut Vec<(String, &'a Playlist)>) {
        for playlist in &self.playlists {
            out.push((format!("{}{}", prefix, playlist.name), playlist));
        }
        for folder in &self.folders {
            let prefix = format!("{}{}/", prefix, folder.name);
            folder.collect_playlists(&prefix, out);
        }
    }

    /// Total number of playlists in this subtree
    pub fn playlist_count(&self) -> usize {
        self.playlists.len() + self.folders.iter().map(Folder::playlist_count).sum::<usize>()
    }
}

/// Everything read from one export document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub tracks: Vec<Track>,
    pub playlists: Vec<Folder>,
}

impl Library {
    pub fn cue_point_count(&self) -> usize {
        self.tracks.iter().map(|t| t.cue_points.len()).sum()
    }

    pub fn playlist_count(&self) -> usize {
        self.playlists.iter().map(Folder::playlist_count).sum()
    }

    /// Number of cue points of each kind across the collection
    pub fn cue_kind_counts(&self) -> BTreeMap<CueKind, usize> {
        let mut counts = BTreeMap::new();
        for cue in self.tracks.iter().flat_map(|t| &t.cue_points) {
            *counts.entry(cue.kind()).or_default() += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist(name: &str) -> Playlist {
        Playlist {
            name: name.to_string(),
            node_type: 1,
            key_type: 0,
            entries: 0,
            tracks: vec![],
        }
    }

    #[test]
    fn test_node_type_from_attr() {
        assert_eq!(NodeType::from_attr("0"), Some(NodeType::Folder));
        assert_eq!(NodeType::from_attr("1"), Some(NodeType::Playlist));
        assert_eq!(NodeType::from_attr("2"), None);
        assert_eq!(NodeType::from_attr(""), None);
    }

    #[test]
    fn test_cue_point_default_is_white() {
        let cue = CuePoint::default();
        assert_eq!(cue.color, Color::WHITE);
        assert_eq!(cue.color.to_hex(), "#FFFFFF");
        assert_eq!(cue.kind(), CueKind::Cue);
    }

    #[test]
    fn test_cue_kind_codes() {
        assert_eq!(CueKind::from_code(4), CueKind::Loop);
        assert_eq!(CueKind::from_code(9), CueKind::Unknown(9));
        assert_eq!(CueKind::Loop.to_string(), "loop");
        assert_eq!(CueKind::Unknown(9).to_string(), "type 9");
    }

    #[test]
    fn test_walk_playlists_paths() {
        let tree = Folder {
            name: "ROOT".to_string(),
            node_type: 0,
            count: 2,
            folders: vec![Folder {
                name: "House".to_string(),
                node_type: 0,
                count: 1,
                folders: vec![],
                playlists: vec![playlist("Deep")],
            }],
            playlists: vec![playlist("Warmup")],
        };

        let names: Vec<String> = tree.walk_playlists().into_iter().map(|(p, _)| p).collect();
        assert_eq!(names, vec!["Warmup".to_string(), "House/Deep".to_string()]);
        assert_eq!(tree.playlist_count(), 2);
    }
}
