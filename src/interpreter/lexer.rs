use logos::Logos;
use tracing::{trace, warn};

use crate::{
    error::LexError,
    interpreter::output::{Diagnostic, DiagnosticSink},
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(error = LexFault)]
pub enum Token {
    /// Double quoted string literals such as `"hello"`. No escapes are
    /// processed; the payload is the text between the quotes.
    #[regex(r#""[^"]*""#, parse_string, allow_greedy = true)]
    Str(String),
    /// Boolean literal tokens, such as `true`.
    #[token("true", parse_bool)]
    #[token("false", parse_bool)]
    Bool(bool),
    /// Floating point literal tokens, such as `3.14`.
    #[regex(r"[0-9]+\.[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`. Negative numbers are built by the
    /// parser from a prefix `-`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `while`
    #[token("while")]
    While,
    /// `print`
    #[token("print")]
    Print,
    /// Identifier tokens; variable names such as `x` or `loop_counter`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `=`
    #[token("=")]
    Equals,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Runs of newlines. Skipped, but counted for line tracking.
    #[regex(r"\n+", |lex| {
        lex.extras.line += lex.slice().len();
        logos::Skip
    })]
    NewLine,
    /// Spaces, tabs and carriage returns.
    #[regex(r"[ \t\r]+", logos::skip)]
    Ignored,
}

/// The reason logos gave up on a slice.
///
/// Unmatched input maps to the default variant.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LexFault {
    /// No rule matches the input at this position.
    #[default]
    IllegalCharacter,
    /// A run of digits that overflows `i64`.
    IntegerTooLarge,
    /// A real literal too large for a finite `f64`.
    RealTooLarge,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(s) => write!(f, "\"{s}\""),
            Self::Bool(b) => write!(f, "'{b}'"),
            Self::Real(r) => write!(f, "'{r:?}'"),
            Self::Integer(n) => write!(f, "'{n}'"),
            Self::Identifier(name) => write!(f, "'{name}'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Less => write!(f, "'<'"),
            Self::Greater => write!(f, "'>'"),
            Self::If => write!(f, "'if'"),
            Self::Else => write!(f, "'else'"),
            Self::While => write!(f, "'while'"),
            Self::Print => write!(f, "'print'"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::Equals => write!(f, "'='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::LBrace => write!(f, "'{{'"),
            Self::RBrace => write!(f, "'}}'"),
            Self::Semicolon => write!(f, "';'"),
            Self::NewLine => write!(f, "newline"),
            Self::Ignored => write!(f, "whitespace"),
        }
    }
}

/// A lazy, single-pass stream of tokens over one source string.
///
/// Each item is either a token paired with its 1-based source line, or a
/// [`LexError`]. Errors never end the stream: an illegal character produces
/// one error and scanning resumes at the very next character.
pub struct Tokens<'src> {
    source: &'src str,
    offset: usize,
    lexer:  logos::Lexer<'src, Token>,
}

/// Starts tokenizing `source`.
///
/// # Example
/// ```
/// use tinyscript::interpreter::lexer::{Token, tokenize};
///
/// let tokens: Vec<_> = tokenize("x = 1@2;").collect();
///
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(tokens[2], Ok((Token::Integer(1), 1)));
/// assert!(tokens[3].is_err());
/// assert_eq!(tokens[4], Ok((Token::Integer(2), 1)));
/// ```
#[must_use]
pub fn tokenize(source: &str) -> Tokens<'_> {
    Tokens { source,
             offset: 0,
             lexer: Token::lexer_with_extras(source, LexerExtras { line: 1 }) }
}

impl Tokens<'_> {
    /// Restarts scanning just past `skipped`, which begins the current error
    /// slice. Needed when logos attempted a longer partial match, such as an
    /// unterminated string, before failing.
    fn resume_after(&mut self, skipped: char) {
        let resume = self.offset + self.lexer.span().start + skipped.len_utf8();
        let line = self.lexer.extras.line;

        self.lexer = Token::lexer_with_extras(&self.source[resume..], LexerExtras { line });
        self.offset = resume;
    }
}

impl Iterator for Tokens<'_> {
    type Item = Result<(Token, usize), LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.lexer.next()?;
        let line = self.lexer.extras.line;

        match token {
            Ok(token) => {
                // A string spanning lines is reported at its opening quote.
                let line = match &token {
                    Token::Str(s) => line - s.matches('\n').count(),
                    _ => line,
                };
                trace!(line, %token, "token");
                Some(Ok((token, line)))
            },
            Err(LexFault::IntegerTooLarge) => {
                Some(Err(LexError::IntegerTooLarge { literal: self.lexer.slice().to_string(),
                                                     line }))
            },
            Err(LexFault::RealTooLarge) => {
                Some(Err(LexError::RealTooLarge { literal: self.lexer.slice().to_string(),
                                                  line }))
            },
            Err(LexFault::IllegalCharacter) => {
                let slice = self.lexer.slice();
                let character = slice.chars().next()?;
                if slice.len() > character.len_utf8() {
                    self.resume_after(character);
                }
                Some(Err(LexError::IllegalCharacter { character, line }))
            },
        }
    }
}

/// Tokenizes the whole of `source`, reporting every lex error to
/// `diagnostics` and keeping all valid tokens.
///
/// # Example
/// ```
/// use tinyscript::interpreter::{
///     lexer::{Token, collect_tokens},
///     output::Diagnostic,
/// };
///
/// let mut diagnostics: Vec<Diagnostic> = Vec::new();
/// let tokens = collect_tokens("print(1 $ 2);", &mut diagnostics);
///
/// assert_eq!(tokens.len(), 6);
/// assert_eq!(diagnostics.len(), 1);
/// assert_eq!(diagnostics[0].message, "ERROR: Illegal character '$' at line 1");
/// ```
pub fn collect_tokens(source: &str, diagnostics: &mut dyn DiagnosticSink) -> Vec<(Token, usize)> {
    let mut tokens = Vec::new();

    for item in tokenize(source) {
        match item {
            Ok(pair) => tokens.push(pair),
            Err(error) => {
                warn!(line = error.line(), %error, "skipping unlexable input");
                diagnostics.report(Diagnostic::from(&error));
            },
        }
    }

    tokens
}

/// Parses a string literal, stripping the surrounding quotes.
///
/// Newlines inside the literal still advance the line counter.
fn parse_string(lex: &mut logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    lex.extras.line += slice.matches('\n').count();

    slice[1..slice.len() - 1].to_string()
}
/// Parses a floating-point literal from the current token slice.
///
/// # Errors
/// Returns [`LexFault::RealTooLarge`] if the literal rounds to infinity.
fn parse_float(lex: &logos::Lexer<Token>) -> Result<f64, LexFault> {
    match lex.slice().parse::<f64>() {
        Ok(real) if real.is_finite() => Ok(real),
        _ => Err(LexFault::RealTooLarge),
    }
}
/// Parses an integer literal from the current token slice.
///
/// # Errors
/// Returns [`LexFault::IntegerTooLarge`] if the digits do not fit into `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Result<i64, LexFault> {
    lex.slice()
       .parse()
       .map_err(|_| LexFault::IntegerTooLarge)
}
/// Parses a boolean literal from the current token slice (`true` or `false`).
///
/// # Returns
/// - `Some(true)` if the slice is `"true"`.
/// - `Some(false)` if the slice is `"false"`.
/// - `None` otherwise.
fn parse_bool(lex: &logos::Lexer<Token>) -> Option<bool> {
    match lex.slice() {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
