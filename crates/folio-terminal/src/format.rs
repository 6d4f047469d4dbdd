//! Shared section formatter.
//!
//! Every path that renders a named content entry -- `open`, the fixed
//! section commands, `printcopy` -- goes through [`format_entry`], so the
//! output is identical regardless of how a section was invoked.

use folio_content::ContentEntry;

/// Render a named entry as text lines: `--- TITLE ---`, a blank line, then
/// one `field: value` line per field. List records are separated by one
/// blank line; scalars render as-is, one line of text per line of output.
pub fn format_entry(title: &str, entry: &ContentEntry) -> Vec<String> {
    let mut lines = vec![format!("--- {} ---", title.to_uppercase()), String::new()];
    match entry {
        ContentEntry::Scalar(text) => {
            if text.is_empty() {
                lines.push(String::new());
            } else {
                lines.extend(text.lines().map(str::to_string));
            }
        },
        ContentEntry::Record(fields) => {
            for (field, value) in fields {
                lines.push(format!("{field}: {value}"));
            }
        },
        ContentEntry::List(records) => {
            for (i, record) in records.iter().enumerate() {
                if i > 0 {
                    lines.push(String::new());
                }
                for (field, value) in record {
                    lines.push(format!("{field}: {value}"));
                }
            }
        },
    }
    lines
}
