//! Built-in commands for the folio terminal.

use folio_types::{Component, FolioError, Line, Result};

use crate::format::format_entry;
use crate::interpreter::{Command, CommandRegistry, Environment};
use crate::ports::{HistoryStore, PrintSurface};
use crate::store::{VarStore, VarValue};

/// Cosmetic configuration for the built-ins.
#[derive(Debug, Clone)]
pub struct BuiltinConfig {
    /// Blank lines inserted between sections in multi-argument `open`.
    pub section_gap: usize,
}

impl Default for BuiltinConfig {
    fn default() -> Self {
        Self { section_gap: 3 }
    }
}

/// Register all built-in commands into a registry.
///
/// The registration order is load-bearing: it is the candidate order the
/// suggestion engine offers for command-name completion.
pub fn register_builtins(reg: &mut CommandRegistry, config: &BuiltinConfig) {
    reg.register(Box::new(HelpCmd));
    reg.register(Box::new(InterfaceCmd));
    reg.register(Box::new(PortfolioCmd));
    reg.register(Box::new(HomeCmd));
    reg.register(Box::new(OpenCmd {
        gap: config.section_gap,
    }));
    reg.register(Box::new(ShowNameCmd));
    reg.register(Box::new(SectionCmd {
        name: "showcontact",
        title: "Contact",
        section: "contact",
        description: "Shows contact information",
    }));
    reg.register(Box::new(SectionCmd {
        name: "showactivities",
        title: "Activities",
        section: "activities",
        description: "Lists extracurriculars and achievements",
    }));
    reg.register(Box::new(AboutCmd));
    reg.register(Box::new(SectionCmd {
        name: "projects",
        title: "Projects",
        section: "projects",
        description: "Lists all projects",
    }));
    reg.register(Box::new(SectionCmd {
        name: "experience",
        title: "Experience",
        section: "experience",
        description: "Details work experience",
    }));
    reg.register(Box::new(SectionCmd {
        name: "skills",
        title: "Skills",
        section: "skills",
        description: "Lists technical and soft skills",
    }));
    reg.register(Box::new(SectionCmd {
        name: "education",
        title: "Education",
        section: "education",
        description: "Shows academic background",
    }));
    reg.register(Box::new(HistoryCmd));
    reg.register(Box::new(ClearCmd));
    reg.register(Box::new(FeedbackCmd));
    reg.register(Box::new(FeedbackForMeCmd));
    reg.register(Box::new(PrintCopyCmd));
}

/// Static usage text for `help`.
const HELP_TEXT: &str = "\
Available Commands:
- portfolio        : Shows portfolio overview and available sections.
- home             : Welcome message and introduction.
- interface        : Instructions to switch to visual interface mode.
- open(section)    : Opens a specific section (e.g., 'projects', 'skills').
- showName         : Displays full name and title.
- showContact      : Shows contact information.
- showActivities   : Lists extracurriculars and achievements.
- about            : Shows the biography.
- projects         : Lists all projects.
- experience       : Details work experience.
- skills           : Lists technical and soft skills.
- education        : Shows academic background.
- history          : Displays command history.
- clear            : Clears the terminal screen.
- feedback         : Opens the feedback form.
- varName -> cmd() : Stores command output in a variable (e.g., myVar -> projects()).
- printCopy(var)   : Prepares a variable's or section's content for printing.";

// ---------------------------------------------------------------------------
// help
// ---------------------------------------------------------------------------

struct HelpCmd;
impl Command for HelpCmd {
    fn name(&self) -> &str {
        "help"
    }
    fn description(&self) -> &str {
        "List available commands"
    }
    fn usage(&self) -> &str {
        "help"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        Ok(HELP_TEXT.lines().map(Line::output).collect())
    }
}

// ---------------------------------------------------------------------------
// interface / portfolio / home
// ---------------------------------------------------------------------------

struct InterfaceCmd;
impl Command for InterfaceCmd {
    fn name(&self) -> &str {
        "interface"
    }
    fn description(&self) -> &str {
        "Switch to the visual interface mode"
    }
    fn usage(&self) -> &str {
        "interface"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        Ok(vec![Line::success(
            "Switching to Interface mode... Use the Interface button in the navigation bar.",
        )])
    }
}

struct PortfolioCmd;
impl Command for PortfolioCmd {
    fn name(&self) -> &str {
        "portfolio"
    }
    fn description(&self) -> &str {
        "Portfolio overview and available sections"
    }
    fn usage(&self) -> &str {
        "portfolio"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        let sections: Vec<&str> = env.content.open_candidates().collect();
        Ok(vec![Line::output(format!(
            "Welcome to my portfolio! Available sections: {}. \
             Use 'open(section)' to view one, or 'interface' to switch to visual mode.",
            sections.join(", ")
        ))])
    }
}

struct HomeCmd;
impl Command for HomeCmd {
    fn name(&self) -> &str {
        "home"
    }
    fn description(&self) -> &str {
        "Welcome message and introduction"
    }
    fn usage(&self) -> &str {
        "home"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        Ok(vec![Line::output(
            "Welcome to my portfolio terminal! I'm a passionate developer creating \
             innovative solutions. Type 'help' for available commands or 'interface' \
             to switch to visual mode.",
        )])
    }
}

// ---------------------------------------------------------------------------
// open
// ---------------------------------------------------------------------------

struct OpenCmd {
    gap: usize,
}
impl Command for OpenCmd {
    fn name(&self) -> &str {
        "open"
    }
    fn description(&self) -> &str {
        "Open one or more sections (or variables)"
    }
    fn usage(&self) -> &str {
        "open(section, ...)"
    }
    fn execute(&self, args: &[&str], vars: &VarStore, env: &Environment<'_>) -> Result<Vec<Line>> {
        let usable: Vec<&str> = args
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .collect();
        if usable.is_empty() {
            return Err(FolioError::Usage(
                "Error: open() requires a section name. Try 'open(projects)'.".to_string(),
            ));
        }

        let mut lines = Vec::new();
        for (i, name) in usable.iter().enumerate() {
            if i > 0 {
                for _ in 0..self.gap {
                    lines.push(Line::output(""));
                }
            }
            if let Some(entry) = env.content.get(name) {
                lines.extend(format_entry(name, entry).into_iter().map(Line::output));
            } else if let Some(value) = vars.get(name) {
                match value {
                    // Captured text comes back exactly as it was printed.
                    VarValue::Text(text) => {
                        lines.extend(text.lines().map(Line::output));
                    },
                    VarValue::Entry(entry) => {
                        lines.extend(format_entry(name, entry).into_iter().map(Line::output));
                    },
                }
            } else {
                lines.push(Line::error(format!(
                    "Error: Section or variable '{name}' not found."
                )));
            }
        }
        Ok(lines)
    }
}

// ---------------------------------------------------------------------------
// showname / about (profile-backed)
// ---------------------------------------------------------------------------

struct ShowNameCmd;
impl Command for ShowNameCmd {
    fn name(&self) -> &str {
        "showname"
    }
    fn description(&self) -> &str {
        "Display the full name"
    }
    fn usage(&self) -> &str {
        "showname"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        let name = env
            .content
            .profile()
            .and_then(|p| p.field("fullName"))
            .ok_or_else(|| FolioError::UnknownSection("profile".to_string()))?;
        Ok(vec![Line::output(name)])
    }
}

struct AboutCmd;
impl Command for AboutCmd {
    fn name(&self) -> &str {
        "about"
    }
    fn description(&self) -> &str {
        "Show the biography"
    }
    fn usage(&self) -> &str {
        "about"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        let about = env
            .content
            .profile()
            .and_then(|p| p.field("about"))
            .ok_or_else(|| FolioError::UnknownSection("profile".to_string()))?;
        let entry = folio_content::ContentEntry::Scalar(about.to_string());
        Ok(format_entry("About Me", &entry)
            .into_iter()
            .map(Line::output)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// fixed section commands
// ---------------------------------------------------------------------------

struct SectionCmd {
    name: &'static str,
    title: &'static str,
    section: &'static str,
    description: &'static str,
}
impl Command for SectionCmd {
    fn name(&self) -> &str {
        self.name
    }
    fn description(&self) -> &str {
        self.description
    }
    fn usage(&self) -> &str {
        self.name
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        let entry = env
            .content
            .get(self.section)
            .ok_or_else(|| FolioError::UnknownSection(self.section.to_string()))?;
        Ok(format_entry(self.title, entry)
            .into_iter()
            .map(Line::output)
            .collect())
    }
}

// ---------------------------------------------------------------------------
// history
// ---------------------------------------------------------------------------

struct HistoryCmd;
impl Command for HistoryCmd {
    fn name(&self) -> &str {
        "history"
    }
    fn description(&self) -> &str {
        "Display command history"
    }
    fn usage(&self) -> &str {
        "history"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        let entries = env.history.map(|h| h.load()).unwrap_or_default();
        if entries.is_empty() {
            return Ok(vec![Line::output("(no history)")]);
        }
        Ok(entries.into_iter().map(Line::output).collect())
    }
}

// ---------------------------------------------------------------------------
// clear
// ---------------------------------------------------------------------------

struct ClearCmd;
impl Command for ClearCmd {
    fn name(&self) -> &str {
        "clear"
    }
    fn description(&self) -> &str {
        "Clear the terminal screen"
    }
    fn usage(&self) -> &str {
        "clear"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        // The interpreter intercepts `clear` before dispatch and turns it
        // into the buffer-reset signal; this handler exists so the command
        // shows up in listings and completion.
        Ok(Vec::new())
    }
}

// ---------------------------------------------------------------------------
// feedback / feedbackforme
// ---------------------------------------------------------------------------

struct FeedbackCmd;
impl Command for FeedbackCmd {
    fn name(&self) -> &str {
        "feedback"
    }
    fn description(&self) -> &str {
        "Open the feedback form"
    }
    fn usage(&self) -> &str {
        "feedback"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        Ok(vec![Line::Component(Component::FeedbackForm)])
    }
}

/// Deliberate decoy: always denies access.
struct FeedbackForMeCmd;
impl Command for FeedbackForMeCmd {
    fn name(&self) -> &str {
        "feedbackforme"
    }
    fn description(&self) -> &str {
        "Administrative use only"
    }
    fn usage(&self) -> &str {
        "feedbackforme"
    }
    fn execute(
        &self,
        _args: &[&str],
        _vars: &VarStore,
        _env: &Environment<'_>,
    ) -> Result<Vec<Line>> {
        Ok(vec![Line::error("This command is for administrative use.")])
    }
}

// ---------------------------------------------------------------------------
// printcopy
// ---------------------------------------------------------------------------

/// Printing must not recurse into meta or interactive commands.
const DISALLOWED_PRINT: [&str; 6] = [
    "clear",
    "history",
    "help",
    "feedback",
    "feedbackforme",
    "printcopy",
];

struct PrintCopyCmd;
impl Command for PrintCopyCmd {
    fn name(&self) -> &str {
        "printcopy"
    }
    fn description(&self) -> &str {
        "Send sections or variables to the print surface"
    }
    fn usage(&self) -> &str {
        "printCopy(section1, section2, ...)"
    }
    fn execute(&self, args: &[&str], vars: &VarStore, env: &Environment<'_>) -> Result<Vec<Line>> {
        let usable: Vec<&str> = args
            .iter()
            .map(|a| a.trim())
            .filter(|a| !a.is_empty())
            .collect();
        if usable.is_empty() {
            return Err(FolioError::Usage(
                "Usage: printCopy(section1, section2, ...)".to_string(),
            ));
        }

        // All-or-nothing: any disallowed or unresolved name aborts the run.
        let mut blocks = Vec::with_capacity(usable.len());
        for name in &usable {
            let lower = name.to_ascii_lowercase();
            if DISALLOWED_PRINT.contains(&lower.as_str()) {
                return Err(FolioError::DisallowedPrint((*name).to_string()));
            }
            let block = if let Some(value) = vars.get(name) {
                match value {
                    VarValue::Text(text) => text.clone(),
                    VarValue::Entry(entry) => format_entry(name, entry).join("\n"),
                }
            } else if let Some(entry) = env.content.get(name) {
                format_entry(name, entry).join("\n")
            } else {
                return Err(FolioError::UnknownSection((*name).to_string()));
            };
            blocks.push(block);
        }

        let document = blocks.join("\n\n\n");
        match env.printer {
            Some(printer) => {
                printer.render_printable(&document)?;
                log::info!("printed {} block(s)", blocks.len());
                Ok(vec![Line::success(
                    "Print dialog opened with formatted content.",
                )])
            },
            None => Err(FolioError::Port("no print surface attached".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::Outcome;
    use crate::ports::MemoryHistory;
    use folio_content::{ContentEntry, ContentRegistry};
    use std::cell::RefCell;

    struct CapturePrinter {
        printed: RefCell<Vec<String>>,
    }
    impl CapturePrinter {
        fn new() -> Self {
            Self {
                printed: RefCell::new(Vec::new()),
            }
        }
    }
    impl PrintSurface for CapturePrinter {
        fn render_printable(&self, text: &str) -> Result<()> {
            self.printed.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    fn content() -> ContentRegistry {
        let mut reg = ContentRegistry::new();
        reg.insert_hidden(
            "profile",
            ContentEntry::Record(vec![
                ("fullName".to_string(), "Ada Lovelace".to_string()),
                ("title".to_string(), "Analyst".to_string()),
                ("about".to_string(), "First programmer.".to_string()),
            ]),
        );
        reg.insert(
            "skills",
            ContentEntry::Record(vec![("Languages".to_string(), "Go, Rust".to_string())]),
        );
        reg.insert(
            "projects",
            ContentEntry::List(vec![
                vec![("name".to_string(), "Engine".to_string())],
                vec![("name".to_string(), "Notes".to_string())],
            ]),
        );
        reg
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &BuiltinConfig::default());
        reg
    }

    fn env(content: &ContentRegistry) -> Environment<'_> {
        Environment {
            content,
            history: None,
            explain: None,
            printer: None,
        }
    }

    fn output_texts(outcome: &Outcome) -> Vec<String> {
        outcome
            .lines()
            .iter()
            .filter_map(|l| l.output_text().map(str::to_string))
            .collect()
    }

    #[test]
    fn open_formats_a_record_section() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("open(skills)", &mut vars, &env(&content));
        assert_eq!(
            output_texts(&out),
            vec!["--- SKILLS ---", "", "Languages: Go, Rust"]
        );
    }

    #[test]
    fn open_without_arguments_is_a_usage_error() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        for input in ["open()", "open(  )"] {
            let out = reg.interpret(input, &mut vars, &env(&content));
            assert_eq!(
                out.lines(),
                &[Line::error(
                    "Error: open() requires a section name. Try 'open(projects)'."
                )],
                "input {input:?}"
            );
        }
    }

    #[test]
    fn open_multiple_sections_are_gap_separated() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("open(skills, projects)", &mut vars, &env(&content));
        let texts = output_texts(&out);
        let skills_len = 3; // header, blank, one field
        assert_eq!(&texts[..skills_len], &["--- SKILLS ---", "", "Languages: Go, Rust"]);
        assert_eq!(&texts[skills_len..skills_len + 3], &["", "", ""]);
        assert_eq!(texts[skills_len + 3], "--- PROJECTS ---");
    }

    #[test]
    fn open_gap_is_configurable() {
        let mut reg = CommandRegistry::new();
        register_builtins(&mut reg, &BuiltinConfig { section_gap: 1 });
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("open(skills, projects)", &mut vars, &env(&content));
        let texts = output_texts(&out);
        assert_eq!(texts[3], "");
        assert_eq!(texts[4], "--- PROJECTS ---");
    }

    #[test]
    fn open_unknown_name_is_a_per_name_error() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("open(skills, gallery)", &mut vars, &env(&content));
        let last = out.lines().last().unwrap();
        assert_eq!(
            last,
            &Line::error("Error: Section or variable 'gallery' not found.")
        );
        // The found section still rendered.
        assert_eq!(out.lines()[0], Line::output("--- SKILLS ---"));
    }

    #[test]
    fn capture_then_open_round_trips() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let direct = output_texts(&reg.interpret("help", &mut vars, &env(&content)));
        reg.interpret("x -> help()", &mut vars, &env(&content));
        let reopened = output_texts(&reg.interpret("open(x)", &mut vars, &env(&content)));
        assert_eq!(reopened, direct);
    }

    #[test]
    fn feedback_emits_a_component_line() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("feedback", &mut vars, &env(&content));
        assert_eq!(out.lines(), &[Line::Component(Component::FeedbackForm)]);
    }

    #[test]
    fn feedback_capture_fails_and_leaves_store_untouched() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("x -> feedback()", &mut vars, &env(&content));
        assert_eq!(
            out.lines(),
            &[Line::error("Cannot store component output in variable 'x'.")]
        );
        assert!(vars.is_empty());
    }

    #[test]
    fn feedbackforme_always_denies() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("feedbackforme", &mut vars, &env(&content));
        assert_eq!(
            out.lines(),
            &[Line::error("This command is for administrative use.")]
        );
    }

    #[test]
    fn showname_prints_the_profile_name() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("showname", &mut vars, &env(&content));
        assert_eq!(out.lines(), &[Line::output("Ada Lovelace")]);
    }

    #[test]
    fn about_formats_the_biography() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("about", &mut vars, &env(&content));
        assert_eq!(
            output_texts(&out),
            vec!["--- ABOUT ME ---", "", "First programmer."]
        );
    }

    #[test]
    fn section_commands_match_open_output() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let via_command = output_texts(&reg.interpret("skills", &mut vars, &env(&content)));
        let via_open = output_texts(&reg.interpret("open(skills)", &mut vars, &env(&content)));
        assert_eq!(via_command, via_open);
    }

    #[test]
    fn history_reads_the_port() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let history = MemoryHistory::new();
        history.append("help");
        history.append("open(skills)");
        let env = Environment {
            content: &content,
            history: Some(&history),
            explain: None,
            printer: None,
        };
        let out = reg.interpret("history", &mut vars, &env);
        assert_eq!(output_texts(&out), vec!["help", "open(skills)"]);
    }

    #[test]
    fn history_without_port_is_empty() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("history", &mut vars, &env(&content));
        assert_eq!(output_texts(&out), vec!["(no history)"]);
    }

    #[test]
    fn printcopy_disallows_meta_commands() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("printcopy(help)", &mut vars, &env(&content));
        assert_eq!(
            out.lines(),
            &[Line::error("Cannot print content from 'help'.")]
        );
    }

    #[test]
    fn printcopy_renders_through_the_surface() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let printer = CapturePrinter::new();
        let env = Environment {
            content: &content,
            history: None,
            explain: None,
            printer: Some(&printer),
        };
        let out = reg.interpret("printcopy(skills, projects)", &mut vars, &env);
        assert_eq!(
            out.lines(),
            &[Line::success("Print dialog opened with formatted content.")]
        );
        let printed = printer.printed.borrow();
        assert_eq!(printed.len(), 1);
        assert!(printed[0].starts_with("--- SKILLS ---"));
        assert!(printed[0].contains("\n\n\n--- PROJECTS ---"));
    }

    #[test]
    fn printcopy_aborts_whole_run_on_unknown_name() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let printer = CapturePrinter::new();
        let env = Environment {
            content: &content,
            history: None,
            explain: None,
            printer: Some(&printer),
        };
        let out = reg.interpret("printcopy(skills, gallery)", &mut vars, &env);
        assert_eq!(out.lines(), &[Line::error("Section 'gallery' not found.")]);
        assert!(printer.printed.borrow().is_empty());
    }

    #[test]
    fn printcopy_without_arguments_is_a_usage_error() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("printcopy()", &mut vars, &env(&content));
        assert_eq!(
            out.lines(),
            &[Line::error("Usage: printCopy(section1, section2, ...)")]
        );
    }

    #[test]
    fn printcopy_prints_captured_variables_verbatim() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        reg.interpret("x -> showname()", &mut vars, &env(&content));
        let printer = CapturePrinter::new();
        let env = Environment {
            content: &content,
            history: None,
            explain: None,
            printer: Some(&printer),
        };
        reg.interpret("printcopy(x)", &mut vars, &env);
        assert_eq!(printer.printed.borrow()[0], "Ada Lovelace");
    }

    #[test]
    fn printcopy_without_surface_is_an_error() {
        let reg = registry();
        let content = content();
        let mut vars = VarStore::new();
        let out = reg.interpret("printcopy(skills)", &mut vars, &env(&content));
        assert_eq!(out.lines().len(), 1);
        assert!(matches!(out.lines()[0], Line::Error(_)));
    }

    #[test]
    fn bare_and_call_forms_agree_for_all_zero_arg_builtins() {
        let reg = registry();
        let content = content();
        for name in [
            "help",
            "interface",
            "portfolio",
            "home",
            "showname",
            "showcontact",
            "showactivities",
            "about",
            "projects",
            "skills",
            "history",
            "feedback",
            "feedbackforme",
        ] {
            let mut vars_a = VarStore::new();
            let mut vars_b = VarStore::new();
            let bare = reg.interpret(name, &mut vars_a, &env(&content));
            let call = reg.interpret(&format!("{name}()"), &mut vars_b, &env(&content));
            assert_eq!(bare, call, "command {name}");
        }
    }

    #[test]
    fn missing_section_surfaces_as_error_line() {
        let reg = registry();
        let content = content(); // no "education" section registered
        let mut vars = VarStore::new();
        let out = reg.interpret("education", &mut vars, &env(&content));
        assert_eq!(out.lines(), &[Line::error("Section 'education' not found.")]);
    }
}
