//! Terminal output.
//!
//! One line per diagnostic in the form go vet style tools use, followed by
//! indented notes and suggestions:
//!
//! ```text
//! main.go:12:9: unlambda: replace `func(x int) int { return fn(x) }` with `fn`
//!   = help: replace with `fn`
//! ```

use std::io::{self, Write};

use crate::span_utils::LineOffsetTable;
use crate::Diagnostic;

mod colors {
    pub const WARNING: &str = "\x1b[1;33m";
    pub const ERROR: &str = "\x1b[1;31m";
    pub const NOTE: &str = "\x1b[1;36m";
    pub const HELP: &str = "\x1b[1;32m";
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

#[inline]
fn plural_s(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}

/// Color output mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when writing to a terminal.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

/// A source file's path and text, with its line table.
#[derive(Clone, Debug)]
pub struct SourceFile {
    pub path: String,
    pub source: String,
    lines: LineOffsetTable,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let lines = LineOffsetTable::build(&source);
        SourceFile {
            path: path.into(),
            source,
            lines,
        }
    }

    /// 1-based (line, column) of a byte offset.
    pub fn location(&self, offset: u32) -> (u32, u32) {
        self.lines.offset_to_line_col(&self.source, offset)
    }
}

/// Writes diagnostics as text, optionally with ANSI colors.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalEmitter<W> {
    /// `is_tty` only matters for [`ColorMode::Auto`].
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    pub fn stdout(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stdout> {
        TerminalEmitter::with_color_mode(io::stdout(), mode, is_tty)
    }

    pub fn stderr(mode: ColorMode, is_tty: bool) -> TerminalEmitter<io::Stderr> {
        TerminalEmitter::with_color_mode(io::stderr(), mode, is_tty)
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn severity_color(diagnostic: &Diagnostic) -> &'static str {
        match diagnostic.severity {
            crate::Severity::Error => colors::ERROR,
            crate::Severity::Warning => colors::WARNING,
            crate::Severity::Note => colors::NOTE,
        }
    }

    /// Emit one diagnostic located in `file`.
    pub fn emit(&mut self, file: &SourceFile, diagnostic: &Diagnostic) {
        let location = match diagnostic.primary_span() {
            Some(span) => {
                let (line, col) = file.location(span.start);
                format!("{}:{line}:{col}", file.path)
            }
            None => file.path.clone(),
        };
        self.write_colored(&location, colors::BOLD);
        let _ = write!(self.writer, ": ");
        self.write_colored(diagnostic.checker, Self::severity_color(diagnostic));
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::NOTE);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {}", suggestion.message);
        }
    }

    pub fn emit_all(&mut self, file: &SourceFile, diagnostics: &[Diagnostic]) {
        for diag in diagnostics {
            self.emit(file, diag);
        }
    }

    pub fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    /// Emit a count line. Prints nothing when both counts are zero.
    pub fn emit_summary(&mut self, error_count: usize, warning_count: usize) {
        if error_count > 0 {
            self.write_colored("error", colors::ERROR);
            let _ = write!(self.writer, ": {error_count} error{}", plural_s(error_count));
            if warning_count > 0 {
                let _ = write!(
                    self.writer,
                    ", {warning_count} warning{}",
                    plural_s(warning_count)
                );
            }
            let _ = writeln!(self.writer, " emitted");
        } else if warning_count > 0 {
            self.write_colored("warning", colors::WARNING);
            let _ = writeln!(
                self.writer,
                ": {warning_count} warning{} emitted",
                plural_s(warning_count)
            );
        }
    }
}
