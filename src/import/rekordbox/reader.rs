//! Top-level drivers for a Rekordbox export document

use crate::error::{DjreadError, Result};
use crate::types::{Folder, Library, Track};
use roxmltree::{Document, Node};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::schema::{elements, DEFAULT_RELATIVE_PATH};

/// Default library location: `$HOME/Documents/rekordbox.xml`
///
/// With `HOME` unset the base is empty.
pub fn default_library_path() -> PathBuf {
    library_path_from_home(std::env::var("HOME").ok().as_deref())
}

/// Library location under `home`; without a home only the
/// `/Documents/rekordbox.xml` suffix remains
pub fn library_path_from_home(home: Option<&str>) -> PathBuf {
    PathBuf::from(format!("{}{}", home.unwrap_or_default(), DEFAULT_RELATIVE_PATH))
}

/// Read the tracks of the `COLLECTION` section under `root`
///
/// A document without a collection yields no tracks.
pub fn parse_collection(root: Node<'_, '_>) -> Result<Vec<Track>> {
    let Some(collection) = first_child(root, elements::COLLECTION) else {
        debug!("No {} element, collection is empty", elements::COLLECTION);
        return Ok(Vec::new());
    };

    let tracks = collection
        .children()
        .filter(|n| n.is_element())
        .map(Track::from_node)
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} tracks", tracks.len());
    Ok(tracks)
}

/// Read the playlist tree of the `PLAYLISTS` section under `root`
///
/// Returns one folder per top-level node (normally a single `ROOT` folder).
/// A document without playlists, or with an empty `PLAYLISTS` element,
/// yields no folders.
pub fn parse_playlists(root: Node<'_, '_>) -> Result<Vec<Folder>> {
    let Some(playlists) = first_child(root, elements::PLAYLISTS) else {
        debug!("No {} element, playlist tree is empty", elements::PLAYLISTS);
        return Ok(Vec::new());
    };

    let folders = playlists
        .children()
        .filter(|n| n.is_element())
        .map(Folder::from_node)
        .collect::<Result<Vec<_>>>()?;

    debug!("Parsed {} top-level playlist nodes", folders.len());
    Ok(folders)
}

/// Parse an export file and return its collection
pub fn parse_xml_file(path: impl AsRef<Path>) -> Result<Vec<Track>> {
    let path = path.as_ref();
    let text = read_document(path)?;
    let doc = parse_document(&text, path)?;
    let tracks = parse_collection(doc.root_element())?;

    info!("Read {} tracks from {}", tracks.len(), path.display());
    Ok(tracks)
}

/// Parse the export at [`default_library_path`] and return its collection
pub fn parse_default_xml_file() -> Result<Vec<Track>> {
    parse_xml_file(default_library_path())
}

impl Library {
    /// Read both the collection and the playlist tree from XML text
    pub fn from_xml_str(xml: &str) -> Result<Self> {
        let doc = parse_document(xml, Path::new("<memory>"))?;
        Self::from_document(&doc)
    }

    /// Read both the collection and the playlist tree from an export file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = read_document(path)?;
        let doc = parse_document(&text, path)?;
        let library = Self::from_document(&doc)?;

        info!(
            "Read {} tracks and {} playlists from {}",
            library.tracks.len(),
            library.playlist_count(),
            path.display()
        );
        Ok(library)
    }

    fn from_document(doc: &Document<'_>) -> Result<Self> {
        let root = doc.root_element();
        Ok(Library {
            tracks: parse_collection(root)?,
            playlists: parse_playlists(root)?,
        })
    }
}

fn read_document(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(DjreadError::FileNotFound(path.to_path_buf()));
    }
    debug!("Reading {}", path.display());
    Ok(std::fs::read_to_string(path)?)
}

fn parse_document<'input>(text: &'input str, path: &Path) -> Result<Document<'input>> {
    Document::parse(text).map_err(|e| DjreadError::Xml {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// First element child of `node` named `name`
fn first_child<'a, 'input>(node: Node<'a, 'input>, name: &str) -> Option<Node<'a, 'input>> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
}
