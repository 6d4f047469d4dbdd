//! Content registry for the folio terminal.
//!
//! A registry is an immutable mapping from section name (e.g. "skills") to a
//! structured [`ContentEntry`]. It is built once at startup, either from the
//! built-in JSON fixtures or from caller-supplied JSON, and the interpreter
//! only ever reads it.

mod entry;
mod registry;

pub use entry::ContentEntry;
pub use registry::ContentRegistry;
