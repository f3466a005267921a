//! djread - Rekordbox XML library reader
//!
//! Reads a rekordbox.xml export into typed records: the track collection
//! with its cue points, and the folder/playlist tree.
//!
//! # Architecture
//!
//! - `import`: XML drivers and per-record builders
//! - `types`: Track, CuePoint, Playlist, Folder and Library records
//! - `export`: JSON output of parsed records
//! - `config`: CLI argument parsing and runtime settings
//! - `pipeline`: Load, summarize and export for the CLI
//!
//! # Example
//!
//! ```no_run
//! use djread::import::rekordbox::{parse_playlists, parse_xml_file};
//!
//! let tracks = parse_xml_file("rekordbox.xml").expect("Failed to read collection");
//! println!("{} tracks", tracks.len());
//!
//! let text = std::fs::read_to_string("rekordbox.xml").unwrap();
//! let doc = djread::roxmltree::Document::parse(&text).unwrap();
//! let folders = parse_playlists(doc.root_element()).expect("Failed to read playlists");
//! println!("{} top-level nodes", folders.len());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod pipeline;
pub mod types;

// Re-export key types at crate root
pub use error::{DjreadError, Result};
pub use roxmltree;
pub use types::{Color, CuePoint, Folder, Library, NodeType, Playlist, Track};
