use std::io::Write;

use crate::error::{LexError, ParseError, RuntimeError, ScriptError};

/// Receives the text produced by `print` statements.
///
/// Every call carries exactly one printed line without its terminator. Sinks
/// deliver on a best-effort basis; write failures are not reported back into
/// the interpreter.
pub trait OutputSink {
    /// Writes one printed line.
    fn write(&mut self, text: &str);
}

/// Receives lexer warnings, parse errors and other messages meant for the
/// user rather than for the program's output.
pub trait DiagnosticSink {
    /// Reports one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// How serious a [`Diagnostic`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The input was rejected or execution stopped.
    Error,
    /// Something was skipped but processing went on.
    Warning,
    /// Informational only.
    Note,
}

/// A human readable message with an optional source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// How serious the message is.
    pub severity: Severity,
    /// The message text.
    pub message:  String,
    /// The source line the message refers to, if any.
    pub line:     Option<usize>,
}

impl Diagnostic {
    /// Creates a note that is not tied to a source line.
    #[must_use]
    pub fn note(message: impl Into<String>) -> Self {
        Self { severity: Severity::Note,
               message:  message.into(),
               line:     None, }
    }
}

impl From<&LexError> for Diagnostic {
    fn from(error: &LexError) -> Self {
        Self { severity: Severity::Warning,
               message:  error.to_string(),
               line:     Some(error.line()), }
    }
}

impl From<&ParseError> for Diagnostic {
    fn from(error: &ParseError) -> Self {
        Self { severity: Severity::Error,
               message:  error.to_string(),
               line:     Some(error.line()), }
    }
}

impl From<&RuntimeError> for Diagnostic {
    fn from(error: &RuntimeError) -> Self {
        Self { severity: Severity::Error,
               message:  error.to_string(),
               line:     Some(error.line()), }
    }
}

impl From<&ScriptError> for Diagnostic {
    fn from(error: &ScriptError) -> Self {
        match error {
            ScriptError::Parse(e) => e.into(),
            ScriptError::Runtime(e) => e.into(),
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Writes printed lines to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stdout;

impl OutputSink for Stdout {
    fn write(&mut self, text: &str) {
        let _ = writeln!(std::io::stdout().lock(), "{text}");
    }
}

/// Writes diagnostics to standard error.
#[derive(Debug, Default, Clone, Copy)]
pub struct Stderr;

impl DiagnosticSink for Stderr {
    fn report(&mut self, diagnostic: Diagnostic) {
        let _ = writeln!(std::io::stderr().lock(), "{diagnostic}");
    }
}

impl OutputSink for Vec<String> {
    fn write(&mut self, text: &str) {
        self.push(text.to_string());
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}
