use std::io::{stderr, stdout, IsTerminal, Stderr, Stdout, Write};

use colored::*;

/// Writes result lines to one stream and error lines to another.
///
/// Errors are only colored when stderr is a terminal, so piped output
/// stays byte-for-byte predictable.
pub struct StdioPrinter<O: Write, E: Write> {
    out: O,
    err: E,
    colorize_errors: bool,
}

impl StdioPrinter<Stdout, Stderr> {
    pub fn new() -> Self {
        StdioPrinter {
            out: stdout(),
            err: stderr(),
            colorize_errors: stderr().is_terminal(),
        }
    }
}

impl Default for StdioPrinter<Stdout, Stderr> {
    fn default() -> Self {
        Self::new()
    }
}

impl<O: Write, E: Write> StdioPrinter<O, E> {
    pub fn with_writers(out: O, err: E) -> Self {
        StdioPrinter {
            out,
            err,
            colorize_errors: false,
        }
    }

    // Failing to write to stdout or stderr leaves us nowhere to report it,
    // so write errors are ignored throughout.

    pub fn println<T: AsRef<str>>(&mut self, value: T) {
        writeln!(self.out, "{}", value.as_ref()).ok();
        self.out.flush().ok();
    }

    pub fn eprintln<T: AsRef<str>>(&mut self, value: T) {
        self.out.flush().ok();
        writeln!(self.err, "{}", value.as_ref()).ok();
    }

    pub fn error<T: AsRef<str>>(&mut self, value: T) {
        if self.colorize_errors {
            self.eprintln(value.as_ref().red().to_string());
        } else {
            self.eprintln(value);
        }
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out, self.err)
    }
}
