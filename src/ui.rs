//! Terminal presentation.

use crate::models::Contact;
use std::io::{self, Write};

/// Receives everything the application shows to the user.
pub trait ContactsView {
    /// Show the input prompt.
    fn prompt(&mut self) -> io::Result<()>;

    /// Show command feedback.
    fn show_feedback(&mut self, feedback: &str) -> io::Result<()>;

    /// Show the displayed contacts, numbered from 1.
    fn show_contacts(&mut self, contacts: &[&Contact]) -> io::Result<()>;

    fn show_help(&mut self, help: &str) -> io::Result<()>;

    fn show_error(&mut self, message: &str) -> io::Result<()>;

    fn show_warning(&mut self, message: &str) -> io::Result<()>;
}

/// Plain text view over any writer, normally stdout.
#[derive(Debug)]
pub struct TerminalView<W: Write> {
    out: W,
}

impl<W: Write> TerminalView<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer, e.g. to inspect captured output.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ContactsView for TerminalView<W> {
    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }

    fn show_feedback(&mut self, feedback: &str) -> io::Result<()> {
        writeln!(self.out, "{}", feedback)
    }

    fn show_contacts(&mut self, contacts: &[&Contact]) -> io::Result<()> {
        for (i, contact) in contacts.iter().enumerate() {
            writeln!(self.out, "{}. {}", i + 1, contact)?;
        }
        Ok(())
    }

    fn show_help(&mut self, help: &str) -> io::Result<()> {
        writeln!(self.out, "{}", help)
    }

    fn show_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", message)
    }

    fn show_warning(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "Warning: {}", message)
    }
}
