#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while parsing a token stream.
pub enum ParseError {
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// A rendering of the token encountered.
        token:    String,
        /// What the parser was looking for instead.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// What the parser was looking for.
        expected: String,
        /// The line of the last token seen.
        line:     usize,
    },
    /// A `+` has a boolean literal as one of its operands.
    BooleanAddition {
        /// The source line of the `+` operator.
        line: usize,
    },
    /// Parentheses, negations or blocks nest too deeply, or an operator chain
    /// grows too long to evaluate safely.
    TooDeep {
        /// The source line where the limit was exceeded.
        line: usize,
    },
}

impl ParseError {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use tinyscript::error::ParseError;
    ///
    /// let error = ParseError::BooleanAddition { line: 3 };
    ///
    /// assert_eq!(error.line(), 3);
    /// ```
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::BooleanAddition { line }
            | Self::TooDeep { line } => *line,
        }
    }

    /// Sets the line of an `UnexpectedEndOfInput` error to `line`; other
    /// errors are returned unchanged.
    #[must_use]
    pub fn at_end_of_input(self, line: usize) -> Self {
        match self {
            Self::UnexpectedEndOfInput { expected, .. } => {
                Self::UnexpectedEndOfInput { expected, line }
            },
            other => other,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { token,
                                    expected,
                                    line, } => {
                write!(f, "Error on line {line}: Unexpected token {token}, expected {expected}.")
            },
            Self::UnexpectedEndOfInput { expected, line } => {
                write!(f, "Error on line {line}: Unexpected end of input, expected {expected}.")
            },
            Self::BooleanAddition { line } => write!(f,
                                                     "Error on line {line}: Addition operation between boolean and numeric values is not allowed."),
            Self::TooDeep { line } => {
                write!(f, "Error on line {line}: Expression or block is nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
