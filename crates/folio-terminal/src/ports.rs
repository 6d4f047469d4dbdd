//! Injected collaborator ports.
//!
//! The interpreter's external dependencies -- history persistence, the
//! reasoned-error explanation service, and the printable surface -- are trait
//! objects supplied through [`Environment`](crate::Environment). Every port
//! is optional; a missing port degrades to a fixed behavior instead of
//! failing the session.

use std::cell::RefCell;

use folio_types::Result;

/// Persisted command history. The storage medium is the implementor's
/// business; the interpreter only appends and loads.
pub trait HistoryStore {
    /// Record one submitted command line.
    fn append(&self, line: &str);

    /// All recorded lines, oldest first.
    fn load(&self) -> Vec<String>;
}

/// Produces a reasoned error message for unparseable or unknown input.
/// Consulted only as the final fallback; its own failure degrades to a
/// generic message.
pub trait ExplainService {
    fn explain(&self, unexpected: &str, context: &str) -> Result<String>;
}

/// Renders a formatted text document to an external print surface.
pub trait PrintSurface {
    fn render_printable(&self, text: &str) -> Result<()>;
}

/// Maximum number of history entries to retain.
const MAX_HISTORY: usize = 100;

/// In-memory, bounded history store.
#[derive(Debug)]
pub struct MemoryHistory {
    entries: RefCell<Vec<String>>,
    capacity: usize,
}

impl MemoryHistory {
    /// History bounded at the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(MAX_HISTORY)
    }

    /// History bounded at `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: RefCell::new(Vec::new()),
            capacity: capacity.max(1),
        }
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryStore for MemoryHistory {
    fn append(&self, line: &str) {
        let mut entries = self.entries.borrow_mut();
        // Don't duplicate the last entry.
        if entries.last().is_none_or(|last| last != line) {
            entries.push(line.to_string());
            if entries.len() > self.capacity {
                entries.remove(0);
            }
        }
    }

    fn load(&self) -> Vec<String> {
        self.entries.borrow().clone()
    }
}
