//! Command interpreter and suggestion engine for the folio terminal.
//!
//! The terminal is a registry-based dispatch system. Commands implement the
//! `Command` trait and are registered by name. The interpreter parses one
//! input line -- `name`, `name(arg1, arg2)`, or the capture form
//! `varName -> name(...)` -- resolves it against the registry and the
//! variable store, and produces tagged output lines. The suggestion engine
//! computes ghost-text completions for partial input.

pub mod commands;
pub mod format;
mod interpreter;
pub mod ports;
mod session;
mod store;
mod suggest;

/// Register all built-in commands into a registry.
pub use commands::register_builtins;
/// Cosmetic knobs for the built-ins (blank-line gap between `open` sections).
pub use commands::BuiltinConfig;
/// Shared section formatter (header plus `field: value` lines).
pub use format::format_entry;
/// A single executable command trait.
pub use interpreter::Command;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Read-only collaborators handed to every command.
pub use interpreter::Environment;
/// Result of interpreting one input line (lines, or a buffer-reset signal).
pub use interpreter::Outcome;
/// Transient parsed call shape.
pub use interpreter::ParsedCommand;
/// Match `identifier` or `identifier(arg, ...)` against one input line.
pub use interpreter::parse_call;
/// Injected collaborator ports (history, explain, print surface).
pub use ports::{ExplainService, HistoryStore, MemoryHistory, PrintSurface};
/// Append-only line buffer plus variable store for one terminal session.
pub use session::{Session, WELCOME};
/// Session-scoped variable bindings.
pub use store::{VarStore, VarValue};
/// Ghost-text completion for a partial input line.
pub use suggest::suggest;
