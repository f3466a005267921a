//! Attribute coercion shared by every record builder
//!
//! Each record kind declares a static table of [`FieldSpec`]s. [`coerce`]
//! walks the table once per element, looks each attribute up by its exact
//! name and converts the raw text to the declared kind. Whether an absent
//! attribute falls back to a default or is an error is decided by the
//! builder through the accessor it calls on [`Fields`].

use crate::error::{DjreadError, Result};
use roxmltree::Node;

/// Semantic type of a declared attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Int,
    Float,
    Text,
}

impl FieldKind {
    fn parse(self, raw: &str) -> std::result::Result<Value, String> {
        match self {
            FieldKind::Int => raw.trim().parse::<i64>().map(Value::Int).map_err(|e| e.to_string()),
            FieldKind::Float => raw.trim().parse::<f64>().map(Value::Float).map_err(|e| e.to_string()),
            FieldKind::Text => Ok(Value::Text(raw.to_string())),
        }
    }
}

/// One declared attribute: its XML name and the kind it coerces to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
}

impl FieldSpec {
    pub const fn int(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Int }
    }

    pub const fn float(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Float }
    }

    pub const fn text(name: &'static str) -> Self {
        Self { name, kind: FieldKind::Text }
    }
}

/// A coerced attribute value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Text(String),
}

/// Coerced attributes of one element, in table order.
///
/// `None` marks an attribute the element does not carry.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    element: String,
    values: Vec<(&'static str, Option<Value>)>,
}

/// Coerce the attributes named in `table` from `node`
///
/// Absent attributes become `None`. A present attribute that does not parse
/// as its declared kind is an [`DjreadError::InvalidValue`].
pub fn coerce(node: Node<'_, '_>, table: &[FieldSpec]) -> Result<Fields> {
    let element = node.tag_name().name().to_string();
    let mut values = Vec::with_capacity(table.len());

    for spec in table {
        let value = match node.attribute(spec.name) {
            Some(raw) => Some(
                spec.kind
                    .parse(raw)
                    .map_err(|reason| DjreadError::invalid_value(&element, spec.name, raw, reason))?,
            ),
            None => None,
        };
        values.push((spec.name, value));
    }

    Ok(Fields { element, values })
}

impl Fields {
    /// Name of the element the values were read from
    pub fn element(&self) -> &str {
        &self.element
    }

    /// True if the element carried the attribute
    pub fn is_present(&self, name: &str) -> bool {
        self.values.iter().any(|(n, v)| *n == name && v.is_some())
    }

    fn take(&mut self, name: &str) -> Option<Value> {
        self.values
            .iter_mut()
            .find(|(n, _)| *n == name)
            .and_then(|(_, v)| v.take())
    }

    pub fn int(&mut self, name: &str) -> Result<Option<i64>> {
        match self.take(name) {
            Some(Value::Int(v)) => Ok(Some(v)),
            Some(other) => Err(self.kind_mismatch(name, FieldKind::Int, other)),
            None => Ok(None),
        }
    }

    pub fn float(&mut self, name: &str) -> Result<Option<f64>> {
        match self.take(name) {
            Some(Value::Float(v)) => Ok(Some(v)),
            Some(other) => Err(self.kind_mismatch(name, FieldKind::Float, other)),
            None => Ok(None),
        }
    }

    pub fn text(&mut self, name: &str) -> Result<Option<String>> {
        match self.take(name) {
            Some(Value::Text(v)) => Ok(Some(v)),
            Some(other) => Err(self.kind_mismatch(name, FieldKind::Text, other)),
            None => Ok(None),
        }
    }

    pub fn required_int(&mut self, name: &str) -> Result<i64> {
        self.int(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn required_float(&mut self, name: &str) -> Result<f64> {
        self.float(name)?.ok_or_else(|| self.missing(name))
    }

    pub fn required_text(&mut self, name: &str) -> Result<String> {
        self.text(name)?.ok_or_else(|| self.missing(name))
    }

    /// The accessor asked for a different kind than the table declares
    fn kind_mismatch(&self, name: &str, wanted: FieldKind, found: Value) -> DjreadError {
        let (raw, declared) = match found {
            Value::Int(v) => (v.to_string(), FieldKind::Int),
            Value::Float(v) => (v.to_string(), FieldKind::Float),
            Value::Text(v) => (v, FieldKind::Text),
        };
        DjreadError::invalid_value(
            &self.element,
            name,
            raw,
            format!("declared as {:?}, read as {:?}", declared, wanted),
        )
    }

    fn missing(&self, name: &str) -> DjreadError {
        DjreadError::missing_attribute(&self.element, name)
    }
}
