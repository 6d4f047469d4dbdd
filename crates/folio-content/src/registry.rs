//! The section-name -> entry registry.

use folio_types::{FolioError, Result};
use serde_json::Value;

use crate::ContentEntry;

/// The canonical profile section name (hidden, backs `showname`/`about`).
pub(crate) const PROFILE: &str = "profile";

struct Section {
    name: String,
    entry: ContentEntry,
    /// Hidden sections resolve normally but stay out of `open`'s
    /// autocompletion pool (raw profile data, help text, and the like).
    hidden: bool,
}

/// Immutable mapping from section name to [`ContentEntry`].
///
/// Sections keep their insertion order, which is what makes suggestion
/// candidate order deterministic. Name lookup is case-insensitive; names are
/// defined with fixed case.
#[derive(Default)]
pub struct ContentRegistry {
    sections: Vec<Section>,
}

impl ContentRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in portfolio fixtures.
    pub fn builtin() -> Self {
        let mut reg = Self::new();
        let load = |json: &str| -> ContentEntry {
            // Fixtures are compiled in; a parse failure is a build defect.
            let value: Value = serde_json::from_str(json).unwrap_or(Value::Null);
            ContentEntry::from_json(&value).unwrap_or_else(|_| ContentEntry::Scalar(String::new()))
        };
        reg.insert_hidden(PROFILE, load(include_str!("../data/profile.json")));
        reg.insert("projects", load(include_str!("../data/projects.json")));
        reg.insert("experience", load(include_str!("../data/experience.json")));
        reg.insert("skills", load(include_str!("../data/skills.json")));
        reg.insert("education", load(include_str!("../data/education.json")));
        reg.insert("activities", load(include_str!("../data/activities.json")));
        reg.insert("contact", load(include_str!("../data/contact.json")));
        log::debug!("built-in content registry: {} sections", reg.sections.len());
        reg
    }

    /// Build a registry from a single JSON object of `name -> entry`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Object(map) = value else {
            return Err(FolioError::Config(
                "content root must be a JSON object".to_string(),
            ));
        };
        let mut reg = Self::new();
        for (name, v) in &map {
            reg.insert(name, ContentEntry::from_json(v)?);
        }
        Ok(reg)
    }

    /// Add a visible section. Replaces any existing section with the same
    /// name (case-insensitive).
    pub fn insert(&mut self, name: &str, entry: ContentEntry) {
        self.insert_inner(name, entry, false);
    }

    /// Add a hidden section (resolvable, but absent from `open` candidates).
    pub fn insert_hidden(&mut self, name: &str, entry: ContentEntry) {
        self.insert_inner(name, entry, true);
    }

    fn insert_inner(&mut self, name: &str, entry: ContentEntry, hidden: bool) {
        if let Some(existing) = self
            .sections
            .iter_mut()
            .find(|s| s.name.eq_ignore_ascii_case(name))
        {
            existing.entry = entry;
            existing.hidden = hidden;
        } else {
            self.sections.push(Section {
                name: name.to_string(),
                entry,
                hidden,
            });
        }
    }

    /// Case-insensitive lookup.
    pub fn get(&self, name: &str) -> Option<&ContentEntry> {
        self.sections
            .iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|s| &s.entry)
    }

    /// The profile record, if registered.
    pub fn profile(&self) -> Option<&ContentEntry> {
        self.get(PROFILE)
    }

    /// All section names, insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.iter().map(|s| s.name.as_str())
    }

    /// Section names offered as `open` arguments (hidden sections excluded).
    pub fn open_candidates(&self) -> impl Iterator<Item = &str> {
        self.sections
            .iter()
            .filter(|s| !s.hidden)
            .map(|s| s.name.as_str())
    }

    /// Number of sections.
    pub fn len(&self) -> usize {
        self.sections.len()
    }

    /// True when no sections are registered.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
