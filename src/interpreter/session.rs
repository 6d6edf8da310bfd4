use tracing::debug;

use crate::{
    error::ScriptError,
    execute,
    interpreter::{
        evaluator::core::Context,
        output::{DiagnosticSink, OutputSink},
    },
};

/// A sequence of runs sharing one variable store.
///
/// Each call to [`Session::run`] parses and executes a complete source text.
/// Variables assigned by earlier runs stay visible to later ones until
/// [`Session::reset`] is called.
///
/// # Example
/// ```
/// use tinyscript::interpreter::{output::Diagnostic, session::Session};
///
/// let mut session = Session::new();
/// let mut output: Vec<String> = Vec::new();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// session.run("x = 41;", &mut output, &mut diagnostics).unwrap();
/// session.run("print(x + 1);", &mut output, &mut diagnostics).unwrap();
///
/// assert_eq!(output, ["42"]);
/// ```
#[derive(Debug, Default)]
pub struct Session {
    context: Context,
}

impl Session {
    /// Creates a session with an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that continues from an existing context.
    #[must_use]
    pub const fn with_context(context: Context) -> Self {
        Self { context }
    }

    /// The variables defined so far.
    #[must_use]
    pub const fn context(&self) -> &Context {
        &self.context
    }

    /// Forgets every variable.
    pub fn reset(&mut self) {
        debug!(variables = self.context.len(), "resetting session");
        self.context.clear();
    }

    /// Parses and runs `source` against the session's context.
    ///
    /// A source without statements runs nothing and reports a note.
    ///
    /// # Errors
    /// See [`execute`]. A runtime error keeps the effects of every statement
    /// that completed before it.
    pub fn run(&mut self,
               source: &str,
               output: &mut dyn OutputSink,
               diagnostics: &mut dyn DiagnosticSink)
               -> Result<(), ScriptError> {
        execute(source, &mut self.context, output, diagnostics)
    }

    /// Consumes the session, returning its context.
    #[must_use]
    pub fn into_context(self) -> Context {
        self.context
    }
}
