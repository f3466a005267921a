//! POSITION_MARK builder
//!
//! Cue points are the one record kind where absent attributes fall back to
//! declared defaults instead of failing.

use crate::error::{DjreadError, Result};
use crate::types::{Color, CuePoint};
use roxmltree::Node;

use super::fields::{coerce, Fields, FieldSpec};
use super::schema::mark_attrs;

const CUE_FIELDS: &[FieldSpec] = &[
    FieldSpec::text(mark_attrs::NAME),
    FieldSpec::int(mark_attrs::TYPE),
    FieldSpec::float(mark_attrs::START),
    FieldSpec::int(mark_attrs::NUM),
    FieldSpec::int(mark_attrs::RED),
    FieldSpec::int(mark_attrs::GREEN),
    FieldSpec::int(mark_attrs::BLUE),
];

impl CuePoint {
    /// Build a cue point from a `POSITION_MARK` element
    pub fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let mut fields = coerce(node, CUE_FIELDS)?;
        let defaults = CuePoint::default();

        let color = Color {
            red: channel(&mut fields, mark_attrs::RED, defaults.color.red)?,
            green: channel(&mut fields, mark_attrs::GREEN, defaults.color.green)?,
            blue: channel(&mut fields, mark_attrs::BLUE, defaults.color.blue)?,
        };

        Ok(CuePoint {
            name: fields.text(mark_attrs::NAME)?.unwrap_or(defaults.name),
            cue_type: fields.int(mark_attrs::TYPE)?.unwrap_or(defaults.cue_type),
            start: fields.float(mark_attrs::START)?.unwrap_or(defaults.start),
            num: fields.int(mark_attrs::NUM)?.unwrap_or(defaults.num),
            color,
        })
    }
}

/// Read one color channel, rejecting values outside 0-255
fn channel(fields: &mut Fields, name: &str, default: u8) -> Result<u8> {
    match fields.int(name)? {
        Some(value) => u8::try_from(value)
            .map_err(|e| DjreadError::invalid_value(fields.element(), name, value.to_string(), e)),
        None => Ok(default),
    }
}
