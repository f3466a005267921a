//! Playlist NODE builder

use crate::error::{DjreadError, Result};
use crate::types::Playlist;
use roxmltree::Node;

use super::children_named;
use super::fields::{coerce, FieldSpec};
use super::schema::{elements, node_attrs};

const PLAYLIST_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(node_attrs::NAME),
    FieldSpec::int(node_attrs::TYPE),
    FieldSpec::int(node_attrs::KEY_TYPE),
    FieldSpec::int(node_attrs::ENTRIES),
];

impl Playlist {
    /// Build a playlist from a `NODE Type="1"` element
    ///
    /// Track entries are kept as raw `Key` strings. `Entries` is taken as
    /// declared and never compared with the number of keys.
    pub fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let mut f = coerce(node, PLAYLIST_FIELDS)?;

        let tracks = children_named(node, elements::TRACK)
            .map(|entry| {
                entry
                    .attribute(node_attrs::KEY)
                    .map(str::to_string)
                    .ok_or_else(|| DjreadError::missing_attribute(elements::TRACK, node_attrs::KEY))
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Playlist {
            name: f.required_text(node_attrs::NAME)?,
            node_type: f.required_int(node_attrs::TYPE)?,
            key_type: f.required_int(node_attrs::KEY_TYPE)?,
            entries: f.required_int(node_attrs::ENTRIES)?,
            tracks,
        })
    }
}
