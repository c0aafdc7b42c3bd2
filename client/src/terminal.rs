//! Line-oriented terminal front end

use std::cell::RefCell;
use std::io::{self, Write};
use std::time::Duration;

use crate::view::PageView;

const PROMPT: &str = "name> ";

/// A line typed at the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<'a> {
    /// Anything that is not a command is submitted as-is
    Submit(&'a str),
    Refresh,
    Clear,
    Quit,
    Help,
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        match line.trim() {
            ":r" | ":refresh" => Command::Refresh,
            ":c" | ":clear" => Command::Clear,
            ":q" | ":quit" => Command::Quit,
            ":h" | ":help" => Command::Help,
            _ => Command::Submit(line),
        }
    }
}

pub const HELP_TEXT: &str = "\
Type a name and press Enter to add it.
  :r  reload the list
  :c  clear the current line
  :q  quit";

/// Renders the page as plain text
///
/// A terminal cannot retract output, so notices are printed once and their
/// duration is ignored.
pub struct TerminalView<W: Write> {
    out: RefCell<W>,
}

impl TerminalView<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: RefCell::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner()
    }

    pub fn print_help(&self) {
        self.write(&format!("{}\n", HELP_TEXT));
    }

    fn write(&self, text: &str) {
        let mut out = self.out.borrow_mut();
        if let Err(e) = out.write_all(text.as_bytes()).and_then(|_| out.flush()) {
            tracing::warn!("Failed to write to terminal: {}", e);
        }
    }
}

impl<W: Write> PageView for TerminalView<W> {
    fn render_names(&self, names: &[String]) {
        if names.is_empty() {
            self.write("  (no names yet)\n");
            return;
        }
        let rendered: String = names
            .iter()
            .enumerate()
            .map(|(i, name)| format!("{:>4}. {}\n", i + 1, name))
            .collect();
        self.write(&rendered);
    }

    fn render_count(&self, count: usize) {
        self.write(&format!("Names: {}\n", count));
    }

    fn render_load_error(&self, message: &str) {
        self.write(&format!("  ! {}\n", message));
    }

    fn alert(&self, message: &str) {
        self.write(&format!("[!] {}\n", message));
    }

    fn show_notice(&self, message: &str, _duration: Duration) {
        self.write(&format!("[ok] {}\n", message));
    }

    fn set_busy(&self, busy: bool) {
        if busy {
            self.write("Submitting...\n");
        }
    }

    // Lines are consumed on Enter; there is nothing left to clear.
    fn clear_input(&self) {}

    fn focus_input(&self) {
        self.write(PROMPT);
    }
}
