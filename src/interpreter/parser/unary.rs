use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue, UnaryOperator},
    interpreter::{
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, nest, unexpected},
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Negation binds
/// tighter than every binary operator and nests, so `--x` is `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
/// - `depth`: Current nesting depth; every `-` adds one.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some(&&(Token::Minus, line)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, nest(depth, line)?)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens, depth)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - string, numeric and boolean literals
/// - variable references
/// - parenthesized expressions
///
/// Grammar:
/// ```text
///     primary := STRING | NUMBER | BOOLEAN | NAME
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `depth`: Current nesting depth; a parenthesis adds one.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Integer(n), line)) => Ok(literal(*n, *line)),
        Some((Token::Real(r), line)) => Ok(literal(*r, *line)),
        Some((Token::Bool(b), line)) => Ok(literal(*b, *line)),
        Some((Token::Str(s), line)) => Ok(literal(s.as_str(), *line)),
        Some((Token::Identifier(name), line)) => Ok(Expr::Variable { name: name.clone(),
                                                                    line: *line, }),
        Some((Token::LParen, line)) => {
            let expr = parse_expression(tokens, nest(depth, *line)?)?;
            expect(tokens, &Token::RParen)?;
            Ok(expr)
        },
        other => Err(unexpected(other, "an expression")),
    }
}

fn literal(value: impl Into<LiteralValue>, line: usize) -> Expr {
    Expr::Literal { value: value.into(),
                    line }
}
