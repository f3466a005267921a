//! Folder NODE builder
//!
//! Walks the playlist tree by recursive descent. Child nodes are classified
//! by their `Type` discriminator; anything that is neither a folder nor a
//! playlist is skipped.

use crate::error::{DjreadError, Result};
use crate::types::{Folder, NodeType, Playlist};
use roxmltree::Node;
use tracing::trace;

use super::children_named;
use super::fields::{coerce, FieldSpec};
use super::schema::{elements, node_attrs, MAX_FOLDER_DEPTH};

const FOLDER_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(node_attrs::NAME),
    FieldSpec::int(node_attrs::TYPE),
    FieldSpec::int(node_attrs::COUNT),
];

impl Folder {
    /// Build a folder, with all nested folders and playlists, from a
    /// container `NODE`
    pub fn from_node(node: Node<'_, '_>) -> Result<Self> {
        build_folder(node, 0)
    }
}

fn build_folder(node: Node<'_, '_>, depth: usize) -> Result<Folder> {
    if depth > MAX_FOLDER_DEPTH {
        return Err(DjreadError::NestingTooDeep {
            limit: MAX_FOLDER_DEPTH,
        });
    }

    let mut f = coerce(node, FOLDER_FIELDS)?;
    let name = f.required_text(node_attrs::NAME)?;
    let node_type = f.required_int(node_attrs::TYPE)?;
    let count = f.required_int(node_attrs::COUNT)?;

    trace!("Folder '{}' at depth {}", name, depth);

    let mut folders = Vec::new();
    let mut playlists = Vec::new();

    for child in children_named(node, elements::NODE) {
        let raw_type = child
            .attribute(node_attrs::TYPE)
            .ok_or_else(|| DjreadError::missing_attribute(elements::NODE, node_attrs::TYPE))?;

        match NodeType::from_attr(raw_type) {
            Some(NodeType::Folder) => folders.push(build_folder(child, depth + 1)?),
            Some(NodeType::Playlist) => playlists.push(Playlist::from_node(child)?),
            None => {}
        }
    }

    Ok(Folder {
        name,
        node_type,
        count,
        folders,
        playlists,
    })
}
