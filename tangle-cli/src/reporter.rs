//! Console output formatting for command routines
//!
//! Routines receive a `Reporter` instead of printing directly, so tests
//! can capture output and no global console state is ever touched.
//! Successful output goes to the out stream (green, headings cyan),
//! failures and validation errors go to the error stream (red).

use std::fmt::Display;
use std::io::Write;

use console::Style;

/// Cap on entries printed for list-valued responses.
pub const MAX_LIST_ENTRIES: usize = 50;

/// Console reporter injected into every command routine
pub struct Reporter {
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
    info_style: Style,
    ok_style: Style,
    err_style: Style,
}

impl Reporter {
    /// Reporter bound to the process stdout/stderr with colors on.
    pub fn stdio() -> Self {
        Self::new(
            Box::new(std::io::stdout()),
            Box::new(std::io::stderr()),
            true,
        )
    }

    /// Reporter over arbitrary writers; `styled = false` yields plain
    /// text, which is what tests assert against.
    pub fn new(out: Box<dyn Write + Send>, err: Box<dyn Write + Send>, styled: bool) -> Self {
        let (info_style, ok_style, err_style) = if styled {
            (
                Style::new().cyan(),
                Style::new().green(),
                Style::new().red(),
            )
        } else {
            (Style::new(), Style::new(), Style::new())
        };
        Self {
            out,
            err,
            info_style,
            ok_style,
            err_style,
        }
    }

    /// Tool banner: the description underlined with `=`.
    pub fn banner(&mut self, text: &str) {
        let _ = writeln!(self.out, "{}", text);
        let _ = writeln!(self.out, "{}", "=".repeat(text.len()));
    }

    /// Announce the call about to be made.
    pub fn heading(&mut self, command: &str, uri: &str) {
        let line = format!("==> Performing {} on {}", command, uri);
        let _ = writeln!(self.out, "{}", self.info_style.apply_to(line));
        let _ = writeln!(self.out);
    }

    /// Success marker, printed once the call resolved.
    pub fn success(&mut self) {
        let _ = writeln!(self.out, "{}", self.ok_style.apply_to("<== Success"));
        let _ = writeln!(self.out);
    }

    /// One tab-indented response line.
    pub fn line(&mut self, text: impl Display) {
        let _ = writeln!(self.out, "{}", self.ok_style.apply_to(format!("\t{}", text)));
    }

    /// One tab-indented `label: value` response field.
    pub fn field(&mut self, label: &str, value: impl Display) {
        self.line(format_args!("{}: {}", label, value));
    }

    pub fn blank(&mut self) {
        let _ = writeln!(self.out);
    }

    /// Print a list-valued response: a total, then up to
    /// [`MAX_LIST_ENTRIES`] entries, then a truncation notice when more
    /// exist. An empty list prints a "No ... Found" message instead.
    pub fn list<T: Display>(&mut self, noun: &str, label: &str, items: &[T]) {
        if items.is_empty() {
            self.line(format_args!("No {} Found", noun));
            return;
        }
        self.line(format_args!("Total {}: {}", noun, items.len()));
        self.blank();
        for item in items.iter().take(MAX_LIST_ENTRIES) {
            self.field(label, item);
        }
        if items.len() > MAX_LIST_ENTRIES {
            self.line("...");
            self.line("list truncated");
        }
    }

    /// Failure marker plus the formatted error, on the error stream.
    pub fn failure(&mut self, error: impl Display) {
        let _ = writeln!(self.err, "{}", self.err_style.apply_to("<== Failed"));
        let _ = writeln!(self.err);
        let _ = writeln!(self.err, "{}", self.err_style.apply_to(error.to_string()));
    }

    /// Validation or configuration error, on the error stream.
    pub fn error(&mut self, message: impl Display) {
        let line = format!("ERROR: {}", message);
        let _ = writeln!(self.err, "{}", self.err_style.apply_to(line));
    }
}
