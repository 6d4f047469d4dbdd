//! Error types for the folio terminal.

use std::io;

/// Errors produced by the folio terminal and its collaborators.
///
/// The interpreter recovers every variant at its boundary and surfaces it as
/// a single error line; none of these abort a session. The `Display` texts
/// are user-facing terminal output.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// Input matched neither the bare-identifier nor the call shape.
    #[error("Error: command not found or invalid syntax: {0}. Try 'help'.")]
    Syntax(String),

    /// Unknown command name.
    #[error("Error: command not found: {0}. Try 'help'.")]
    NotFound(String),

    /// Unknown section name (all-or-nothing resolution, e.g. `printcopy`).
    #[error("Section '{0}' not found.")]
    UnknownSection(String),

    /// Malformed `varName -> command()` form.
    #[error("Invalid variable assignment syntax. Use: varName -> command()")]
    InvalidAssignment,

    /// Attempt to capture an interactive component into a variable.
    #[error("Cannot store component output in variable '{0}'.")]
    UnstorableResult(String),

    /// The right-hand side of an assignment produced nothing textual.
    #[error("Command '{0}' produced no storable output.")]
    EmptyCapture(String),

    /// Required arguments missing; payload is the full usage message.
    #[error("{0}")]
    Usage(String),

    /// `printcopy` targeting a meta or interactive command.
    #[error("Cannot print content from '{0}'.")]
    DisallowedPrint(String),

    /// External collaborator failure (explain service, print surface).
    #[error("collaborator error: {0}")]
    Port(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, FolioError>;
