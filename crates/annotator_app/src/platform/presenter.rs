use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use annotator_core::Severity;
use chrono::Local;

/// Generic modal/toast surface. The guard's three-way choice is just a
/// `prompt` with three buttons; nothing here knows about annotations.
pub(crate) trait Presenter {
    /// Shows a blocking dialog and returns the index of the chosen button.
    fn prompt(&mut self, title: &str, body: &str, buttons: &[&str]) -> usize;

    /// Shows a non-blocking, auto-scrolling notification line.
    fn toast(&mut self, severity: Severity, message: &str);
}

/// Terminal presenter: toasts go to stdout, prompts consume the next input
/// line. A background thread owns stdin and feeds a channel, so the UI loop
/// can poll for commands without blocking.
pub(crate) struct TerminalPresenter {
    lines: mpsc::Receiver<String>,
}

impl TerminalPresenter {
    pub(crate) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        thread::spawn(move || {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let Ok(line) = line else { break };
                if tx.send(line).is_err() {
                    break;
                }
            }
        });
        Self { lines: rx }
    }

    /// Next command line typed by the user, if any.
    pub(crate) fn try_read_command(&self) -> Option<String> {
        self.lines.try_recv().ok()
    }
}

impl Presenter for TerminalPresenter {
    fn prompt(&mut self, title: &str, body: &str, buttons: &[&str]) -> usize {
        println!();
        println!("=== {title} ===");
        println!("{body}");
        let labels = buttons
            .iter()
            .enumerate()
            .map(|(index, label)| format!("[{}] {label}", index + 1))
            .collect::<Vec<_>>()
            .join("  ");
        loop {
            println!("{labels}");
            print!("> ");
            let _ = io::stdout().flush();
            let Ok(line) = self.lines.recv() else {
                // Stdin gone; fall back to the last button (by convention
                // the non-destructive one).
                return buttons.len().saturating_sub(1);
            };
            if let Some(choice) = parse_choice(&line, buttons) {
                return choice;
            }
            println!("please answer with a number or button name");
        }
    }

    fn toast(&mut self, severity: Severity, message: &str) {
        let tag = match severity {
            Severity::Info => "info",
            Severity::Warning => "warn",
            Severity::Error => "error",
        };
        println!("[{} {tag}] {message}", Local::now().format("%H:%M:%S"));
    }
}

/// Accepts a 1-based button number or a case-insensitive label prefix.
fn parse_choice(input: &str, buttons: &[&str]) -> Option<usize> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }
    if let Ok(number) = input.parse::<usize>() {
        if (1..=buttons.len()).contains(&number) {
            return Some(number - 1);
        }
        return None;
    }
    let lowered = input.to_lowercase();
    buttons
        .iter()
        .position(|label| label.to_lowercase().starts_with(&lowered))
}
