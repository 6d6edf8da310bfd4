use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{MAX_NESTING, ParseResult},
    },
};

/// Consumes the next token, which must equal `expected`.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `expected`: The token that must come next.
///
/// # Returns
/// The line of the consumed token.
///
/// # Errors
/// - `UnexpectedToken` if a different token follows.
/// - `UnexpectedEndOfInput` if no token follows.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    expected: &Token)
                                                    -> ParseResult<usize>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((tok, line)) if tok == expected => Ok(*line),
        other => Err(unexpected(other, &expected.to_string())),
    }
}

/// Builds the error for a token (or the end of input) found where the
/// construct named by `expected` should start.
///
/// The line of an end-of-input error is left at `0` here;
/// [`parse_program`](crate::interpreter::parser::core::parse_program)
/// replaces it with the line of the last token.
pub(in crate::interpreter::parser) fn unexpected(found: Option<&(Token, usize)>,
                                                 expected: &str)
                                                 -> ParseError {
    match found {
        Some((tok, line)) => ParseError::UnexpectedToken { token:    tok.to_string(),
                                                           expected: expected.to_string(),
                                                           line:     *line, },
        None => ParseError::UnexpectedEndOfInput { expected: expected.to_string(),
                                                   line:     0, },
    }
}

/// Steps one level deeper into a parenthesis, negation or block opened on
/// `line`.
///
/// # Returns
/// The depth of the nested construct.
///
/// # Errors
/// `TooDeep` once the depth would pass [`MAX_NESTING`].
pub(in crate::interpreter::parser) const fn nest(depth: usize,
                                                  line: usize)
                                                  -> ParseResult<usize> {
    if depth >= MAX_NESTING {
        Err(ParseError::TooDeep { line })
    } else {
        Ok(depth + 1)
    }
}
