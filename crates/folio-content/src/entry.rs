//! Structured content values.

use folio_types::{FolioError, Result};
use serde_json::Value;

/// A named, read-only content value.
///
/// Entries come in three shapes: a scalar string, an ordered mapping of
/// field name to string, or an ordered list of such mappings (each one
/// record, e.g. one project). Field order is insertion order and is
/// preserved through formatting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentEntry {
    /// A single text value.
    Scalar(String),
    /// Ordered `field -> value` pairs.
    Record(Vec<(String, String)>),
    /// Ordered list of records, e.g. one mapping per project.
    List(Vec<Vec<(String, String)>>),
}

impl ContentEntry {
    /// Build an entry from a JSON value.
    ///
    /// Strings, numbers, and booleans become scalars; objects become
    /// records (values stringified); arrays of objects become lists.
    /// Arrays of scalars collapse to a newline-joined scalar, which the
    /// formatter renders one line per item.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Ok(ContentEntry::Scalar(s.clone())),
            Value::Number(n) => Ok(ContentEntry::Scalar(n.to_string())),
            Value::Bool(b) => Ok(ContentEntry::Scalar(b.to_string())),
            Value::Object(map) => Ok(ContentEntry::Record(object_fields(map))),
            Value::Array(items) => from_json_array(items),
            Value::Null => Err(FolioError::Config("null content entry".to_string())),
        }
    }

    /// Case-insensitive field lookup on a record.
    pub fn field(&self, name: &str) -> Option<&str> {
        match self {
            ContentEntry::Record(fields) => fields
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }
}

fn from_json_array(items: &[Value]) -> Result<ContentEntry> {
    if items.iter().all(Value::is_object) {
        let mut records = Vec::with_capacity(items.len());
        for item in items {
            if let Value::Object(map) = item {
                records.push(object_fields(map));
            }
        }
        return Ok(ContentEntry::List(records));
    }
    if items.iter().any(Value::is_object) {
        return Err(FolioError::Config(
            "mixed scalar/object content list".to_string(),
        ));
    }
    let lines: Vec<String> = items.iter().map(scalar_text).collect();
    Ok(ContentEntry::Scalar(lines.join("\n")))
}

fn object_fields(map: &serde_json::Map<String, Value>) -> Vec<(String, String)> {
    map.iter().map(|(k, v)| (k.clone(), scalar_text(v))).collect()
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
