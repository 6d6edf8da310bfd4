/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator gives every AST node its own evaluation rule and walks the
/// tree directly against a [`Context`](evaluator::core::Context), producing
/// printed output and variable mutations.
///
/// # Responsibilities
/// - Evaluates expressions, applying every operator with strict kind checks.
/// - Runs statements: printing, assignment, conditionals, loops and blocks.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a lazy stream of tokens,
/// each tagged with its source line. This is the first stage of
/// interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with type and line.
/// - Decodes string, numeric and boolean literals.
/// - Reports illegal characters and skips them without stopping the scan.
pub mod lexer;
/// Output and diagnostic channels.
///
/// Defines the sinks through which printed lines and diagnostics leave the
/// interpreter, plus stock implementations for the console and for in-memory
/// capture.
pub mod output;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statement list of a program. Parsing always completes before any
/// statement runs.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Applies operator precedence and associativity.
/// - Validates syntax, reporting errors with the offending token and line.
pub mod parser;
/// Persistent sessions.
///
/// A session keeps one context alive across several runs, so that variables
/// assigned by one input remain visible to the next.
pub mod session;
/// The value module defines the runtime data types for evaluation.
///
/// # Responsibilities
/// - Defines the `Value` enum and its `ValueKind` type tag.
/// - Renders values for printing.
/// - Provides checked conversions used by the operators.
pub mod value;
