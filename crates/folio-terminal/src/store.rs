//! Session-scoped variable bindings.

use folio_content::ContentEntry;

/// The value bound to a variable name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VarValue {
    /// Captured textual output (newline-joined).
    Text(String),
    /// A raw content entry, bound by the bare-lookup assignment fallback.
    Entry(ContentEntry),
}

impl VarValue {
    /// View the value as a content entry (text becomes a scalar).
    pub fn to_entry(&self) -> ContentEntry {
        match self {
            VarValue::Text(text) => ContentEntry::Scalar(text.clone()),
            VarValue::Entry(entry) => entry.clone(),
        }
    }

    /// Captured text, `None` for raw entries.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            VarValue::Text(text) => Some(text),
            VarValue::Entry(_) => None,
        }
    }
}

/// Mutable name -> value map with one terminal session's lifetime.
///
/// Bindings keep insertion order so suggestion candidates are stable.
/// Lookup is case-insensitive; rebinding an existing name (any case)
/// overwrites silently in place.
#[derive(Debug, Default)]
pub struct VarStore {
    entries: Vec<(String, VarValue)>,
}

impl VarStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind or silently overwrite.
    pub fn set(&mut self, name: &str, value: VarValue) {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
        {
            existing.1 = value;
        } else {
            self.entries.push((name.to_string(), value));
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&VarValue> {
        self.entries
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v)
    }

    /// Bound names, insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
