//! One terminal session: the append-only line buffer and its variables.

use folio_types::Line;

use crate::interpreter::{CommandRegistry, Environment, Outcome};
use crate::ports::HistoryStore;
use crate::store::VarStore;

/// Greeting shown when a session starts.
pub const WELCOME: &str =
    "Welcome to the folio terminal. Try 'help' to know about available commands.";

/// Owns the output-line sequence and the variable store for one session.
///
/// Lines are only ever appended; the `clear` signal resets the sequence to
/// empty. Rendering (scrolling, typing effects) is the consumer's problem.
pub struct Session {
    lines: Vec<Line>,
    vars: VarStore,
}

impl Session {
    /// Fresh session with the welcome line.
    pub fn new() -> Self {
        Self {
            lines: vec![Line::output(WELCOME)],
            vars: VarStore::new(),
        }
    }

    /// The accumulated lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The session's variable bindings.
    pub fn vars(&self) -> &VarStore {
        &self.vars
    }

    /// Submit one input line: echo it, record it in history, interpret it,
    /// and fold the outcome into the buffer.
    pub fn submit(&mut self, input: &str, registry: &CommandRegistry, env: &Environment<'_>) {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return;
        }
        self.lines.push(Line::input(trimmed));
        if let Some(history) = env.history {
            history.append(trimmed);
        }
        match registry.interpret(trimmed, &mut self.vars, env) {
            Outcome::Clear => self.lines.clear(),
            Outcome::Lines(lines) => self.lines.extend(lines),
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
