//! Folio terminal entry point.
//!
//! A plain stdin/stdout REPL standing in for the web rendering layer:
//! reads one command per line, interprets it, and prints the resulting
//! lines. `exit` or EOF quits. The interactive feedback component is
//! rendered as an inline three-question prompt.

mod config;

use std::io::{self, BufRead, Write};
use std::path::Path;

use anyhow::Result;

use config::AppConfig;
use folio_content::ContentRegistry;
use folio_feedback::{LogSink, Submission};
use folio_terminal::{
    BuiltinConfig, CommandRegistry, Environment, MemoryHistory, PrintSurface, Session,
    register_builtins,
};
use folio_types::{Component, Line};

/// Print surface that renders the printable copy straight to stdout.
struct StdoutPrinter;

impl PrintSurface for StdoutPrinter {
    fn render_printable(&self, text: &str) -> folio_types::Result<()> {
        println!("----- printable copy -----");
        println!("{text}");
        println!("--------------------------");
        Ok(())
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path =
        std::env::var("FOLIO_CONFIG").unwrap_or_else(|_| "folio.toml".to_string());
    let config = AppConfig::load_or_default(Path::new(&config_path));
    log::info!("Starting folio terminal");

    let content = ContentRegistry::builtin();
    log::info!("Loaded {} content sections", content.len());

    let mut registry = CommandRegistry::new();
    register_builtins(
        &mut registry,
        &BuiltinConfig {
            section_gap: config.section_gap,
        },
    );

    let history = MemoryHistory::with_capacity(config.history_capacity);
    let printer = StdoutPrinter;
    let env = Environment {
        content: &content,
        history: Some(&history),
        explain: None,
        printer: Some(&printer),
    };

    let mut session = Session::new();
    render(session.lines())?;
    let mut rendered = session.lines().len();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    loop {
        write!(stdout, "{}", config.prompt)?;
        stdout.flush()?;

        let mut input = String::new();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }
        let trimmed = input.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        session.submit(trimmed, &registry, &env);
        if session.lines().len() < rendered {
            // Buffer reset (`clear`).
            print!("\x1b[2J\x1b[H");
            rendered = 0;
        }
        render(&session.lines()[rendered..])?;
        rendered = session.lines().len();
    }

    log::info!("Session ended");
    Ok(())
}

/// Print a batch of lines. Input echoes are skipped -- the user just typed
/// them -- and component lines expand to their interactive stand-in.
fn render(lines: &[Line]) -> Result<()> {
    for line in lines {
        match line {
            Line::Input(_) => {},
            Line::Output(text) | Line::Error(text) | Line::Success(text) => println!("{text}"),
            Line::Component(Component::FeedbackForm) => prompt_feedback()?,
        }
    }
    Ok(())
}

/// Inline stand-in for the feedback form component.
fn prompt_feedback() -> Result<()> {
    let name = ask("Your name: ")?;
    let email = ask("Email (optional): ")?;
    let feedback = ask("Feedback: ")?;

    let submission = Submission {
        name,
        email: if email.is_empty() { None } else { Some(email) },
        feedback,
    };
    match folio_feedback::submit(&submission, &LogSink) {
        Ok(message) => println!("{message}"),
        Err(errors) => {
            for (field, message) in errors {
                println!("{field}: {message}");
            }
        },
    }
    Ok(())
}

fn ask(label: &str) -> Result<String> {
    let mut stdout = io::stdout();
    write!(stdout, "{label}")?;
    stdout.flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(answer.trim().to_string())
}
