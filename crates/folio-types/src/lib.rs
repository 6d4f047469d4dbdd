//! Foundation types for the folio terminal.
//!
//! This crate contains the types shared by all folio crates: the error
//! taxonomy surfaced by the interpreter and the tagged output-line model
//! consumed by rendering layers.

pub mod error;
pub mod line;

pub use error::{FolioError, Result};
pub use line::{Component, Line};
