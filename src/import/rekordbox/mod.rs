//! Rekordbox XML import
//!
//! Reads the `COLLECTION` and `PLAYLISTS` sections of a rekordbox.xml export
//! into owned records. Each record kind has a `from_node` builder; the
//! drivers in [`reader`] walk the document and call them.

pub mod cue;
pub mod fields;
pub mod folder;
pub mod playlist;
pub mod reader;
pub mod schema;
pub mod track;
pub mod uri;

pub use reader::{
    default_library_path, library_path_from_home, parse_collection, parse_default_xml_file, parse_playlists,
    parse_xml_file,
};

use roxmltree::Node;

/// Element children of `node` with the given tag name, in document order
pub(crate) fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |child| child.is_element() && child.tag_name().name() == name)
}
