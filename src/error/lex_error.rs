#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents the recoverable faults found while scanning source text.
pub enum LexError {
    /// A character that starts no token. Exactly this one character is
    /// skipped.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the character was found.
        line:      usize,
    },
    /// An integer literal that does not fit into 64 bits. The whole literal is
    /// skipped.
    IntegerTooLarge {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the literal was found.
        line:    usize,
    },
    /// A real literal whose value is not a finite `f64`. The whole literal is
    /// skipped.
    RealTooLarge {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the literal was found.
        line:    usize,
    },
}

impl LexError {
    /// Gets the line number from `self`.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. }
            | Self::IntegerTooLarge { line, .. }
            | Self::RealTooLarge { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "ERROR: Illegal character '{character}' at line {line}")
            },
            Self::IntegerTooLarge { literal, line } => {
                write!(f, "ERROR: Integer literal '{literal}' is too large at line {line}")
            },
            Self::RealTooLarge { literal, line } => {
                write!(f, "ERROR: Real literal '{literal}' is too large at line {line}")
            },
        }
    }
}

impl std::error::Error for LexError {}
