//! Import modules for DJ library exports

pub mod rekordbox;

pub use rekordbox::{parse_collection, parse_playlists, parse_xml_file};
