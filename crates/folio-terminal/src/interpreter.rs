//! Command trait, registry, parsing, and dispatch.
//!
//! One input line is trimmed, classified (clear signal, `->` assignment, or
//! call shape), and dispatched. The interpreter fails closed: every
//! malformed input becomes a single error line, never a panic or an error
//! that escapes to the caller.

use std::collections::HashMap;

use folio_content::ContentRegistry;
use folio_types::{FolioError, Line, Result};

use crate::ports::{ExplainService, HistoryStore, PrintSurface};
use crate::store::{VarStore, VarValue};

/// Result of interpreting one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Lines to append to the session buffer.
    Lines(Vec<Line>),
    /// Signal to reset the output buffer; carries no lines.
    Clear,
}

impl Outcome {
    /// The produced lines (`Clear` produces none).
    pub fn lines(&self) -> &[Line] {
        match self {
            Outcome::Lines(lines) => lines,
            Outcome::Clear => &[],
        }
    }
}

/// Read-only collaborators handed to every command.
///
/// The ports are optional: a missing history store means `history` has
/// nothing to show, a missing explain service degrades error messages to
/// fixed text, a missing print surface fails `printcopy` with an error line.
pub struct Environment<'a> {
    /// The immutable section registry.
    pub content: &'a ContentRegistry,
    /// Persisted command history.
    pub history: Option<&'a dyn HistoryStore>,
    /// Reasoned-error-message generator.
    pub explain: Option<&'a dyn ExplainService>,
    /// Printable-surface renderer.
    pub printer: Option<&'a dyn PrintSurface>,
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description for `help`.
    fn description(&self) -> &str;

    /// Usage string (e.g. "open(section, ...)").
    fn usage(&self) -> &str;

    /// Execute with the parsed arguments, variable store, and environment.
    fn execute(&self, args: &[&str], vars: &VarStore, env: &Environment<'_>)
    -> Result<Vec<Line>>;
}

/// Transient parsed call: `name` plus raw argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub args: Vec<String>,
}

const SYNTAX_CONTEXT: &str = "User tried to run a command in the terminal. The command syntax \
     is likely incorrect. It should be command or command(arguments).";
const NOT_FOUND_CONTEXT: &str = "User tried to run a command in the terminal.";

/// Registry of available commands with dispatch.
///
/// Registration order is significant: it is the candidate order the
/// suggestion engine completes against.
#[derive(Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    order: Vec<String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        let key = cmd.name().to_ascii_lowercase();
        if !self.commands.contains_key(&key) {
            self.order.push(key.clone());
        }
        self.commands.insert(key, cmd);
    }

    /// Look up a command, case-insensitively.
    pub fn get(&self, name: &str) -> Option<&dyn Command> {
        self.commands
            .get(&name.to_ascii_lowercase())
            .map(Box::as_ref)
    }

    /// Command names in registration order.
    pub fn command_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Interpret one input line.
    ///
    /// Never fails: syntax errors, unknown names, and handler failures all
    /// come back as error lines. The variable store is mutated only by a
    /// successful assignment.
    pub fn interpret(&self, input: &str, vars: &mut VarStore, env: &Environment<'_>) -> Outcome {
        let trimmed = input.trim();
        // One optional trailing semicolon.
        let trimmed = trimmed.strip_suffix(';').unwrap_or(trimmed).trim_end();
        if trimmed.is_empty() {
            return Outcome::Lines(Vec::new());
        }
        if trimmed.eq_ignore_ascii_case("clear") {
            return Outcome::Clear;
        }
        if trimmed.contains("->") {
            return self.interpret_assignment(trimmed, vars, env);
        }
        self.dispatch(trimmed, vars, env)
    }

    /// Handle `varName -> command(...)` by recursively interpreting the
    /// right-hand side and capturing its textual output.
    fn interpret_assignment(
        &self,
        input: &str,
        vars: &mut VarStore,
        env: &Environment<'_>,
    ) -> Outcome {
        // Split on the first `->` only; the right side may contain more.
        let Some((lhs, rhs)) = input.split_once("->") else {
            return fail(FolioError::InvalidAssignment);
        };
        let var_name = lhs.trim();
        let cmd_str = rhs.trim();
        if var_name.is_empty() || cmd_str.is_empty() {
            return fail(FolioError::InvalidAssignment);
        }

        let captured = match self.interpret(cmd_str, vars, env) {
            Outcome::Lines(lines) => lines,
            Outcome::Clear => Vec::new(),
        };

        // Interactive content cannot be captured.
        if captured.iter().any(Line::is_component) {
            return fail(FolioError::UnstorableResult(var_name.to_string()));
        }

        let text = captured
            .iter()
            .filter_map(Line::output_text)
            .collect::<Vec<_>>()
            .join("\n");
        if !text.is_empty() {
            vars.set(var_name, VarValue::Text(text));
            log::debug!("bound variable '{var_name}' from '{cmd_str}'");
            return Outcome::Lines(vec![Line::success(format!(
                "Stored output in variable '{var_name}'."
            ))]);
        }

        // Fallback: a bare section lookup binds the raw entry.
        if let Some(parsed) = parse_call(cmd_str)
            && parsed.args.is_empty()
            && let Some(entry) = env.content.get(&parsed.name)
        {
            vars.set(var_name, VarValue::Entry(entry.clone()));
            log::debug!("bound variable '{var_name}' to raw entry '{}'", parsed.name);
            return Outcome::Lines(vec![Line::success(format!(
                "Stored data in variable '{var_name}'."
            ))]);
        }

        fail(FolioError::EmptyCapture(cmd_str.to_string()))
    }

    /// Parse the call grammar and dispatch through the registry.
    fn dispatch(&self, input: &str, vars: &VarStore, env: &Environment<'_>) -> Outcome {
        let Some(parsed) = parse_call(input) else {
            return Outcome::Lines(self.recover(
                env,
                input,
                SYNTAX_CONTEXT,
                FolioError::Syntax(input.to_string()),
            ));
        };

        let name_lower = parsed.name.to_ascii_lowercase();
        // `clear()` through the grammar agrees with the bare `clear` form.
        if name_lower == "clear" {
            return Outcome::Clear;
        }

        match self.commands.get(&name_lower) {
            Some(cmd) => {
                let args: Vec<&str> = parsed.args.iter().map(String::as_str).collect();
                match cmd.execute(&args, vars, env) {
                    Ok(lines) => Outcome::Lines(lines),
                    Err(e) => Outcome::Lines(vec![Line::error(e.to_string())]),
                }
            },
            None => Outcome::Lines(self.recover(
                env,
                input,
                NOT_FOUND_CONTEXT,
                FolioError::NotFound(parsed.name),
            )),
        }
    }

    /// Final error fallback: ask the explain port for a reasoned message,
    /// degrade to the fixed one when it is absent or fails.
    fn recover(
        &self,
        env: &Environment<'_>,
        input: &str,
        context: &str,
        fallback: FolioError,
    ) -> Vec<Line> {
        if let Some(explain) = env.explain {
            match explain.explain(input, context) {
                Ok(message) => return vec![Line::error(message)],
                Err(e) => log::warn!("explain service failed: {e}"),
            }
        }
        vec![Line::error(fallback.to_string())]
    }
}

fn fail(error: FolioError) -> Outcome {
    Outcome::Lines(vec![Line::error(error.to_string())])
}

/// Match `identifier` or `identifier(arg, ...)`.
///
/// Bare identifiers and empty-argument calls are equivalent (zero args).
/// Arguments are comma-split, trimmed, and lose one layer of surrounding
/// quotes. Returns `None` for anything else.
pub fn parse_call(input: &str) -> Option<ParsedCommand> {
    let input = input.trim();
    let bytes = input.as_bytes();
    let first = *bytes.first()? as char;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    let mut end = 1;
    while end < bytes.len() {
        let c = bytes[end] as char;
        if c.is_ascii_alphanumeric() || c == '_' {
            end += 1;
        } else {
            break;
        }
    }
    let name = &input[..end];
    let rest = &input[end..];

    if rest.is_empty() {
        return Some(ParsedCommand {
            name: name.to_string(),
            args: Vec::new(),
        });
    }

    let inner = rest.strip_prefix('(')?.strip_suffix(')')?;
    let args = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner
            .split(',')
            .map(|arg| strip_quotes(arg.trim()).to_string())
            .collect()
    };
    Some(ParsedCommand {
        name: name.to_string(),
        args,
    })
}

/// Strip one layer of matching surrounding quotes.
fn strip_quotes(arg: &str) -> &str {
    let bytes = arg.as_bytes();
    if bytes.len() >= 2 {
        let (first, last) = (bytes[0], bytes[bytes.len() - 1]);
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &arg[1..arg.len() - 1];
        }
    }
    arg
}
