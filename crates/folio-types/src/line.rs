//! Tagged output lines produced by the interpreter.
//!
//! Lines are append-only within a session: the interpreter emits them, the
//! rendering layer displays them, and nothing mutates a line after creation.
//! The `clear` signal empties the whole sequence instead.

use serde::{Deserialize, Serialize};

/// Opaque renderable payload for [`Line::Component`].
///
/// The interpreter never inspects the inside of a component; it only knows
/// that component lines cannot be captured into variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Component {
    /// The interactive feedback form.
    FeedbackForm,
}

/// One line of terminal output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Line {
    /// Echo of a submitted input line.
    Input(String),
    /// Ordinary command output.
    Output(String),
    /// A recovered failure, surfaced as text.
    Error(String),
    /// Confirmation of a state change (e.g. a variable binding).
    Success(String),
    /// An opaque interactive widget for the rendering layer.
    Component(Component),
}

impl Line {
    /// Echoed input line.
    pub fn input(text: impl Into<String>) -> Self {
        Line::Input(text.into())
    }

    /// Ordinary output line.
    pub fn output(text: impl Into<String>) -> Self {
        Line::Output(text.into())
    }

    /// Error line.
    pub fn error(text: impl Into<String>) -> Self {
        Line::Error(text.into())
    }

    /// Success line.
    pub fn success(text: impl Into<String>) -> Self {
        Line::Success(text.into())
    }

    /// The text of an `Output` line, `None` for every other kind.
    ///
    /// Variable capture joins exactly these texts; errors, successes, and
    /// components are never captured.
    pub fn output_text(&self) -> Option<&str> {
        match self {
            Line::Output(text) => Some(text),
            _ => None,
        }
    }

    /// True for interactive component lines.
    pub fn is_component(&self) -> bool {
        matches!(self, Line::Component(_))
    }
}
