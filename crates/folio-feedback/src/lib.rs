//! Feedback submission contract.
//!
//! The terminal's `feedback` command only surfaces an opaque form component;
//! this crate owns what happens when that form is submitted: field
//! validation and hand-off to a storage sink. Validation limits: name 2-80
//! characters, email optional but well-formed when given, feedback body
//! 10-4000 characters.

use folio_types::Result;
use serde::{Deserialize, Serialize};

/// A filled-in feedback form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub name: String,
    /// Optional; an empty string counts as absent.
    pub email: Option<String>,
    pub feedback: String,
}

/// Per-field validation failures, `(field, message)` pairs.
pub type FieldErrors = Vec<(String, String)>;

/// Where accepted submissions go (file, log, network -- not this crate's
/// concern).
pub trait FeedbackSink {
    fn store(&self, submission: &Submission) -> Result<()>;
}

/// Sink that records submissions via the `log` facade.
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn store(&self, submission: &Submission) -> Result<()> {
        log::info!(
            "feedback from {} <{}>: {}",
            submission.name,
            submission.email.as_deref().unwrap_or("not provided"),
            submission.feedback
        );
        Ok(())
    }
}

/// Validate a submission, returning every failed field.
pub fn validate(submission: &Submission) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let name_len = submission.name.chars().count();
    if name_len < 2 {
        errors.push((
            "name".to_string(),
            "Name must be at least 2 characters.".to_string(),
        ));
    } else if name_len > 80 {
        errors.push((
            "name".to_string(),
            "Name must be at most 80 characters.".to_string(),
        ));
    }

    if let Some(email) = submission.email.as_deref()
        && !email.is_empty()
        && !email_is_well_formed(email)
    {
        errors.push(("email".to_string(), "Invalid email address.".to_string()));
    }

    let feedback_len = submission.feedback.chars().count();
    if feedback_len < 10 {
        errors.push((
            "feedback".to_string(),
            "Feedback must be at least 10 characters.".to_string(),
        ));
    } else if feedback_len > 4000 {
        errors.push((
            "feedback".to_string(),
            "Feedback must be at most 4000 characters.".to_string(),
        ));
    }

    errors
}

/// Validate and store. Returns the success message, or the field errors.
pub fn submit(
    submission: &Submission,
    sink: &dyn FeedbackSink,
) -> std::result::Result<String, FieldErrors> {
    let errors = validate(submission);
    if !errors.is_empty() {
        return Err(errors);
    }
    match sink.store(submission) {
        Ok(()) => Ok("Feedback submitted successfully! Thank you.".to_string()),
        Err(e) => {
            log::error!("feedback sink failed: {e}");
            Err(vec![(
                "_form".to_string(),
                "An unexpected error occurred while saving your feedback.".to_string(),
            )])
        },
    }
}

/// Minimal structural check: one `@`, non-empty local part, dotted domain.
fn email_is_well_formed(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}
