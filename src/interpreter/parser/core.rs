use std::iter::Peekable;

use tracing::debug;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            binary::parse_comparison, statement::parse_statement, utils::expect,
            validate::validate_program,
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// How deeply parentheses, negations and blocks may nest.
pub const MAX_NESTING: usize = 64;
/// The tallest expression tree the parser builds. Long operator chains
/// count towards this, since they fold into left-leaning trees.
pub const MAX_EXPRESSION_HEIGHT: usize = 1024;

/// Parses a whole program.
///
/// Grammar: `program := (statement ";")*`
///
/// Every statement, including the last one, must be terminated by `;`. An
/// empty token stream yields an empty program. After parsing, the program is
/// validated; see [`validate_program`].
///
/// # Parameters
/// - `tokens`: All tokens of the source, each paired with its line.
///
/// # Returns
/// The parsed statements in source order.
///
/// # Errors
/// Returns the first `ParseError` encountered, including `TooDeep` for
/// input nested past [`MAX_NESTING`] or [`MAX_EXPRESSION_HEIGHT`]. No partial
/// program is returned. Running out of tokens is reported at the line of the
/// last token.
///
/// # Example
/// ```
/// use tinyscript::interpreter::{lexer::tokenize, parser::core::parse_program};
///
/// let tokens: Vec<_> = tokenize("x = 1; print(x);").collect::<Result<_, _>>()
///                                                 .unwrap();
/// let program = parse_program(&tokens).unwrap();
///
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let statements = parse_statements(tokens).map_err(|e| e.at_end_of_input(last_line))?;

    validate_program(&statements)?;
    debug!(statements = statements.len(), "parsed program");

    Ok(statements)
}

fn parse_statements(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    while iter.peek().is_some() {
        statements.push(parse_statement(&mut iter, 0)?);
        expect(&mut iter, &Token::Semicolon)?;
    }

    Ok(statements)
}

/// Parses a full expression.
///
/// This is the entry point for expression parsing.
/// It begins at the lowest-precedence level, comparison, and recursively
/// descends through the precedence hierarchy.
///
/// Grammar: `expression := comparison`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, line)` pairs.
/// - `depth`: How many parentheses, negations and blocks enclose the
///   expression.
///
/// # Returns
/// The parsed expression node.
///
/// # Errors
/// Besides syntax errors, returns `ParseError::TooDeep` once nesting passes
/// [`MAX_NESTING`] or the tree grows taller than [`MAX_EXPRESSION_HEIGHT`].
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_comparison(tokens, depth)
}
