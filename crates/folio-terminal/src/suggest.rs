//! Ghost-text autocompletion.
//!
//! Pure prefix completion over stable candidate pools: the first candidate
//! that matches wins, and only the characters the user has not typed yet are
//! returned. No ranking, no fuzzy matching.

use folio_content::ContentRegistry;

use crate::interpreter::CommandRegistry;
use crate::store::VarStore;

/// Compute the ghost-text completion for `input`.
///
/// Mid-call input (`name(` with an unterminated argument list) completes the
/// in-progress argument; anything else completes the command name. Returns
/// the remaining characters of the best match, or `""`.
pub fn suggest(
    input: &str,
    registry: &CommandRegistry,
    vars: &VarStore,
    content: &ContentRegistry,
) -> String {
    if input.is_empty() {
        return String::new();
    }

    if let Some((name, args_part)) = split_open_call(input) {
        return suggest_argument(&name.to_ascii_lowercase(), args_part, vars, content);
    }

    complete_from(registry.command_names().chain(vars.names()), input)
}

/// Argument completion: the last comma segment is in progress, earlier
/// segments are already used and leave the pool.
fn suggest_argument(
    command: &str,
    args_part: &str,
    vars: &VarStore,
    content: &ContentRegistry,
) -> String {
    let segments: Vec<&str> = args_part.split(',').map(str::trim).collect();
    // `split` always yields at least one segment.
    let Some((current, earlier)) = segments.split_last() else {
        return String::new();
    };
    let used: Vec<String> = earlier
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| s.to_ascii_lowercase())
        .collect();

    let pool: Vec<&str> = match command {
        "open" => vars.names().chain(content.open_candidates()).collect(),
        "printcopy" => vars.names().chain(content.names()).collect(),
        _ => return String::new(),
    };
    let mut candidates = pool
        .into_iter()
        .filter(|c| !used.contains(&c.to_ascii_lowercase()));

    if current.is_empty() {
        // Nothing typed yet: offer the first candidate whole.
        return candidates.next().map(str::to_string).unwrap_or_default();
    }
    complete_from(candidates, current)
}

/// Detect `identifier(` followed by an unterminated argument list.
fn split_open_call(input: &str) -> Option<(&str, &str)> {
    let open = input.find('(')?;
    let (name, rest) = input.split_at(open);
    let args_part = &rest[1..];
    if args_part.contains(')') {
        return None;
    }
    let mut chars = name.chars();
    let first = chars.next()?;
    if !(first.is_ascii_alphabetic() || first == '_') {
        return None;
    }
    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some((name, args_part))
}

/// Suffix of the first candidate with `prefix` as a case-insensitive prefix.
fn complete_from<'a>(pool: impl IntoIterator<Item = &'a str>, prefix: &str) -> String {
    for candidate in pool {
        if let Some(rest) = strip_prefix_ignore_case(candidate, prefix) {
            return rest.to_string();
        }
    }
    String::new()
}

fn strip_prefix_ignore_case<'a>(candidate: &'a str, prefix: &str) -> Option<&'a str> {
    if candidate.len() < prefix.len() || !candidate.is_char_boundary(prefix.len()) {
        return None;
    }
    let (head, tail) = candidate.split_at(prefix.len());
    head.eq_ignore_ascii_case(prefix).then_some(tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{BuiltinConfig, register_builtins};
    use crate::store::VarValue;
    use folio_content::ContentEntry;

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &BuiltinConfig::default());
        reg
    }

    fn content() -> ContentRegistry {
        let mut reg = ContentRegistry::new();
        reg.insert_hidden("profile", ContentEntry::Scalar("raw".to_string()));
        reg.insert(
            "projects",
            ContentEntry::List(vec![vec![("name".to_string(), "a".to_string())]]),
        );
        reg.insert(
            "skills",
            ContentEntry::Record(vec![("Languages".to_string(), "Go, Rust".to_string())]),
        );
        reg
    }

    #[test]
    fn completes_command_names() {
        let reg = registry();
        let vars = VarStore::new();
        let content = content();
        assert_eq!(suggest("he", &reg, &vars, &content), "lp");
        assert_eq!(suggest("HE", &reg, &vars, &content), "lp");
        assert_eq!(suggest("printc", &reg, &vars, &content), "opy");
    }

    #[test]
    fn empty_input_suggests_nothing() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("", &reg, &vars, &content()), "");
    }

    #[test]
    fn no_match_suggests_nothing() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("zzz", &reg, &vars, &content()), "");
    }

    #[test]
    fn exact_match_suggests_empty_remainder() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("help", &reg, &vars, &content()), "");
    }

    #[test]
    fn variables_complete_after_commands() {
        let reg = registry();
        let mut vars = VarStore::new();
        vars.set("zebra", VarValue::Text("x".to_string()));
        assert_eq!(suggest("zeb", &reg, &vars, &content()), "ra");
    }

    #[test]
    fn registration_order_decides_ties() {
        let reg = registry();
        let mut vars = VarStore::new();
        // `history` is registered before any variable; a variable spelled
        // with the same prefix never wins the tie.
        vars.set("historic", VarValue::Text("x".to_string()));
        assert_eq!(suggest("hist", &reg, &vars, &content()), "ory");
    }

    #[test]
    fn completes_open_arguments() {
        let reg = registry();
        let vars = VarStore::new();
        let content = content();
        assert_eq!(suggest("open(proj", &reg, &vars, &content), "ects");
        assert_eq!(suggest("open(sk", &reg, &vars, &content), "ills");
    }

    #[test]
    fn open_arguments_exclude_hidden_sections() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("open(prof", &reg, &vars, &content()), "");
    }

    #[test]
    fn printcopy_arguments_include_hidden_sections() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("printcopy(prof", &reg, &vars, &content()), "ile");
    }

    #[test]
    fn empty_argument_offers_first_candidate() {
        let reg = registry();
        let mut vars = VarStore::new();
        vars.set("mine", VarValue::Text("x".to_string()));
        // Variables come before section names in the pool.
        assert_eq!(suggest("open(", &reg, &vars, &content()), "mine");
    }

    #[test]
    fn used_arguments_leave_the_pool() {
        let reg = registry();
        let vars = VarStore::new();
        let content = content();
        assert_eq!(suggest("open(projects, ", &reg, &vars, &content), "skills");
        assert_eq!(suggest("open(PROJECTS, proj", &reg, &vars, &content), "");
    }

    #[test]
    fn unknown_command_arguments_suggest_nothing() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("help(pro", &reg, &vars, &content()), "");
    }

    #[test]
    fn closed_call_suggests_nothing() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("open(projects)", &reg, &vars, &content()), "");
    }

    #[test]
    fn case_insensitive_argument_prefix() {
        let reg = registry();
        let vars = VarStore::new();
        assert_eq!(suggest("open(PROJ", &reg, &vars, &content()), "ects");
    }
}
