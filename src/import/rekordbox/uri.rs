//! URI decoding for the Rekordbox Location attribute
//!
//! Rekordbox stores paths as URIs:
//! - Protocol: file://localhost/
//! - Windows: file://localhost/C:/Music/Track.mp3 → C:/Music/Track.mp3
//! - macOS/Linux: file://localhost/Users/DJ/My%20Music/Track.mp3 → /Users/DJ/My Music/Track.mp3

use percent_encoding::percent_decode_str;
use std::path::PathBuf;

const LOCALHOST_PREFIX: &str = "file://localhost";
const FILE_PREFIX: &str = "file://";

/// Convert a Rekordbox Location URI to a filesystem path
///
/// Values without a `file://` scheme are percent-decoded and returned as-is.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use djread::import::rekordbox::uri::rekordbox_uri_to_path;
///
/// let path = rekordbox_uri_to_path("file://localhost/Users/DJ/My%20Music/Track.mp3");
/// assert_eq!(path, PathBuf::from("/Users/DJ/My Music/Track.mp3"));
/// ```
pub fn rekordbox_uri_to_path(location: &str) -> PathBuf {
    let rest = location
        .strip_prefix(LOCALHOST_PREFIX)
        .or_else(|| location.strip_prefix(FILE_PREFIX))
        .unwrap_or(location);

    let decoded = percent_decode_str(rest).decode_utf8_lossy();

    // /C:/... → C:/...
    if let Some(stripped) = decoded.strip_prefix('/').filter(|s| is_windows_path(s)) {
        return PathBuf::from(stripped);
    }

    PathBuf::from(decoded.into_owned())
}

/// Check if a path string looks like a Windows path (has drive letter)
fn is_windows_path(path: &str) -> bool {
    let chars: Vec<char> = path.chars().take(3).collect();
    chars.len() >= 2
        && chars[0].is_ascii_alphabetic()
        && chars[1] == ':'
}
