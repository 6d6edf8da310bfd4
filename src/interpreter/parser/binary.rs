use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::{MAX_EXPRESSION_HEIGHT, ParseResult},
            unary::parse_unary,
        },
    },
};

/// Parses relational and equality operators.
///
/// This parser handles all comparison operators: `<`, `>`, `==`, `!=`. They
/// share the lowest precedence level and associate to the left, so
/// `1 < 2 == true` parses as `(1 < 2) == true`.
///
/// Grammar: `comparison := additive (("<" | ">" | "==" | "!=") additive)*`
///
/// # Parameters
/// - `tokens`: Token stream (token + line number) wrapped in a `Peekable`.
///
/// # Returns
/// A possibly nested `Expr::BinaryOp` tree.
pub fn parse_comparison<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, depth, BinaryOperator::is_comparison, parse_additive)
}

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Add | BinaryOperator::Sub),
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     depth,
                     |op| matches!(op, BinaryOperator::Mul | BinaryOperator::Div),
                     parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning tree for every operator
/// accepted by `accepts`.
///
/// Fails with `TooDeep` as soon as the tree would grow taller than
/// [`MAX_EXPRESSION_HEIGHT`].
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           depth: usize,
                           accepts: impl Fn(BinaryOperator) -> bool,
                           operand: impl Fn(&mut Peekable<I>, usize) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = operand(tokens, depth)?;
    let mut height = left.height();
    loop {
        if let Some((token, line)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && accepts(op)
        {
            let line = *line;
            tokens.next();
            let right = operand(tokens, depth)?;

            height = height.max(right.height()) + 1;
            if height > MAX_EXPRESSION_HEIGHT {
                return Err(ParseError::TooDeep { line });
            }
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    line };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents a binary operator
/// (`+`, `-`, `*`, `/`, `<`, `>`, `==`, `!=`) and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Example
/// ```
/// use tinyscript::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::Equals), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::Less => Some(BinaryOperator::Less),
        Token::Greater => Some(BinaryOperator::Greater),
        Token::EqualEqual => Some(BinaryOperator::Equal),
        Token::BangEqual => Some(BinaryOperator::NotEqual),
        _ => None,
    }
}
