//! # tinyscript
//!
//! tinyscript is a minimal imperative scripting language written in Rust.
//! Source text is lexed, parsed into statements and then executed by a
//! tree-walking evaluator over one flat variable store.
//!
//! ```text
//! x = 3;
//! while (x > 0) {
//!     print(x);
//!     x = x - 1;
//! };
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::{debug, trace};

use crate::{
    ast::Statement,
    error::{ParseError, ScriptError},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        lexer::{Token, collect_tokens},
        output::{Diagnostic, DiagnosticSink, OutputSink},
        parser::core::parse_program,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and related types
/// that represent the syntactic structure of a program as a tree. The AST is
/// built by the parser; each node's evaluation rule lives in the evaluator.
///
/// # Responsibilities
/// - Defines statement and expression types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
pub mod ast;
/// Run configuration for the command line front end.
pub mod config;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// script. Every error carries the source line it refers to.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and the output channels.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides the sinks through which output and diagnostics leave the
///   interpreter.
/// - Offers persistent sessions reusing one context across runs.
pub mod interpreter;

/// Lexes and parses `source` into a program.
///
/// Lex errors are reported to `diagnostics` and skipped. A parse error is
/// reported to `diagnostics` as well as returned.
///
/// # Errors
/// Returns the first `ParseError`; no statements are returned in that case.
///
/// # Examples
/// ```
/// use tinyscript::{interpreter::output::Diagnostic, parse};
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// assert_eq!(parse("print(1);", &mut diagnostics).unwrap().len(), 1);
/// assert!(parse("print(1)", &mut diagnostics).is_err());
/// assert_eq!(diagnostics.len(), 1);
/// ```
pub fn parse(source: &str,
             diagnostics: &mut dyn DiagnosticSink)
             -> Result<Vec<Statement>, ParseError> {
    let tokens = collect_tokens(source, diagnostics);
    debug!(tokens = tokens.len(), "lexed source");

    parse_tokens(&tokens, diagnostics)
}

/// Parses an already lexed token stream, reporting a parse error to
/// `diagnostics` as well as returning it.
///
/// # Errors
/// Returns the first `ParseError`.
pub fn parse_tokens(tokens: &[(Token, usize)],
                    diagnostics: &mut dyn DiagnosticSink)
                    -> Result<Vec<Statement>, ParseError> {
    parse_program(tokens).inspect_err(|e| diagnostics.report(e.into()))
}

/// Runs a parsed program against `context`, in order.
///
/// A program without statements runs nothing and reports a note to
/// `diagnostics`.
///
/// # Errors
/// Stops at the first failing statement. Statements that already ran keep
/// their effects on `context` and `output`.
///
/// # Examples
/// ```
/// use tinyscript::{
///     interpreter::{evaluator::core::Context, output::Diagnostic},
///     run,
/// };
///
/// let mut output: Vec<String> = Vec::new();
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
///
/// run(&[], &mut Context::new(), &mut output, &mut diagnostics).unwrap();
///
/// assert_eq!(diagnostics[0].message, "No valid commands to execute.");
/// ```
pub fn run(program: &[Statement],
           context: &mut Context,
           output: &mut dyn OutputSink,
           diagnostics: &mut dyn DiagnosticSink)
           -> EvalResult<()> {
    if program.is_empty() {
        diagnostics.report(Diagnostic::note("No valid commands to execute."));
        return Ok(());
    }

    for statement in program {
        trace!(line = statement.line_number(), "running statement");
        statement.run(context, output)?;
    }
    Ok(())
}

/// Parses `source` completely, then runs it against `context`.
///
/// Nothing runs if parsing fails. A source without statements runs nothing
/// and reports a note to `diagnostics`.
///
/// # Errors
/// Returns a `ScriptError::Parse` if the source does not parse, or a
/// `ScriptError::Runtime` from the first failing statement.
pub fn execute(source: &str,
               context: &mut Context,
               output: &mut dyn OutputSink,
               diagnostics: &mut dyn DiagnosticSink)
               -> Result<(), ScriptError> {
    let program = parse(source, diagnostics)?;
    run(&program, context, output, diagnostics)?;
    Ok(())
}

/// Runs `source` in a fresh context and returns every printed line.
///
/// Diagnostics are discarded; use [`execute`] to observe them.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use tinyscript::get_output;
///
/// assert_eq!(get_output("print(5 + 3);").unwrap(), ["8"]);
/// assert_eq!(get_output("print(6 / 3);").unwrap(), ["2.0"]);
///
/// // `y` is never assigned.
/// assert!(get_output("print(y);").is_err());
/// ```
pub fn get_output(source: &str) -> Result<Vec<String>, ScriptError> {
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    execute(source, &mut Context::new(), &mut output, &mut diagnostics)?;
    Ok(output)
}
