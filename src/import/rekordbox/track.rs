//! COLLECTION entry builder

use crate::error::Result;
use crate::types::{CuePoint, Track};
use roxmltree::Node;

use super::children_named;
use super::fields::{coerce, FieldSpec};
use super::schema::{attrs, elements};

const TRACK_FIELDS: &[FieldSpec] = &[
    FieldSpec::int(attrs::TRACK_ID),
    FieldSpec::text(attrs::NAME),
    FieldSpec::text(attrs::ARTIST),
    FieldSpec::text(attrs::ALBUM),
    FieldSpec::text(attrs::GENRE),
    FieldSpec::text(attrs::KIND),
    FieldSpec::int(attrs::SIZE),
    FieldSpec::int(attrs::TOTAL_TIME),
    FieldSpec::int(attrs::YEAR),
    FieldSpec::float(attrs::AVERAGE_BPM),
    FieldSpec::text(attrs::DATE_ADDED),
    FieldSpec::int(attrs::BIT_RATE),
    FieldSpec::int(attrs::SAMPLE_RATE),
    FieldSpec::text(attrs::COMMENTS),
    FieldSpec::int(attrs::PLAY_COUNT),
    FieldSpec::int(attrs::RATING),
    FieldSpec::text(attrs::TONALITY),
    FieldSpec::text(attrs::LABEL),
    FieldSpec::text(attrs::LOCATION),
];

impl Track {
    /// Build a track from a collection entry element
    ///
    /// Every declared attribute is required. Child `POSITION_MARK` elements
    /// become cue points in document order.
    pub fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let mut f = coerce(node, TRACK_FIELDS)?;

        let cue_points = children_named(node, elements::POSITION_MARK)
            .map(CuePoint::from_node)
            .collect::<Result<Vec<_>>>()?;

        Ok(Track {
            track_id: f.required_int(attrs::TRACK_ID)?,
            name: f.required_text(attrs::NAME)?,
            artist: f.required_text(attrs::ARTIST)?,
            album: f.required_text(attrs::ALBUM)?,
            genre: f.required_text(attrs::GENRE)?,
            kind: f.required_text(attrs::KIND)?,
            size: f.required_int(attrs::SIZE)?,
            total_time: f.required_int(attrs::TOTAL_TIME)?,
            year: f.required_int(attrs::YEAR)?,
            average_bpm: f.required_float(attrs::AVERAGE_BPM)?,
            date_added: f.required_text(attrs::DATE_ADDED)?,
            bit_rate: f.required_int(attrs::BIT_RATE)?,
            sample_rate: f.required_int(attrs::SAMPLE_RATE)?,
            comments: f.required_text(attrs::COMMENTS)?,
            play_count: f.required_int(attrs::PLAY_COUNT)?,
            rating: f.required_int(attrs::RATING)?,
            tonality: f.required_text(attrs::TONALITY)?,
            label: f.required_text(attrs::LABEL)?,
            location: f.required_text(attrs::LOCATION)?,
            cue_points,
        })
    }
}
