//! Operator-facing console output.
//!
//! Everything the operator reads goes through [`Console`], which owns the
//! writer (stdout in the binary, a buffer in tests) and decides whether to
//! emit ANSI colors.

use colored::{ColoredString, Colorize};
use std::io::{self, IsTerminal, Write};

pub const RULE_WIDTH: usize = 50;

pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<io::Stdout> {
    /// Console on stdout, colored when stdout is a terminal and `NO_COLOR` is unset.
    pub fn stdout() -> Self {
        let color = io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none();
        colored::control::set_override(color);
        Self {
            out: io::stdout(),
            color,
        }
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    /// Uncolored console, mostly for capturing output in tests.
    pub fn plain(out: W) -> Self {
        Self::new(out, false)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn heading(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.bold());
        writeln!(self.out, "{}", styled)?;
        writeln!(self.out, "{}", "=".repeat(RULE_WIDTH))
    }

    pub fn info(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.blue());
        self.line(styled)
    }

    pub fn success(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.green());
        self.line(styled)
    }

    pub fn warn(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.yellow());
        self.line(styled)
    }

    pub fn error(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.red().bold());
        self.line(styled)
    }

    pub fn plain_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    pub fn blank(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Writes without a trailing newline and flushes, for prompts.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        let styled = self.paint(text, |s| s.yellow().bold());
        write!(self.out, "{}", styled)?;
        self.out.flush()
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn line(&mut self, text: String) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    fn paint(&self, text: &str, style: impl Fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }
}
