/// Lexing errors.
///
/// Defines the recoverable faults the lexer can hit while scanning source
/// text. A lex error never aborts tokenization; it is reported and scanning
/// continues.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while turning a token stream into
/// statements. Parse errors include unexpected tokens, premature end of input
/// and semantically rejected expressions detected before evaluation.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and execution.
/// Runtime errors include undefined variables, type mismatches, division by
/// zero and integer overflow.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure that stops a script from running to completion.
///
/// Lex errors are not part of this enum because they are recoverable and only
/// ever reach the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// The source could not be parsed; nothing was executed.
    Parse(ParseError),
    /// Execution stopped at a failing statement.
    Runtime(RuntimeError),
}

impl ScriptError {
    /// Gets the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Parse(e) => e.line(),
            Self::Runtime(e) => e.line(),
        }
    }
}

impl From<ParseError> for ScriptError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for ScriptError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
