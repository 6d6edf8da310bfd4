use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    interpreter::{
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{expect, unexpected},
        },
    },
};

/// Parses a single statement, without its terminating `;`.
///
/// A statement may be one of:
/// - `print "(" expression ")"`
/// - `<identifier> "=" expression`
/// - `if "(" expression ")" block ("else" block)?`
/// - `while "(" expression ")" block`
///
/// The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
/// - `depth`: How many blocks enclose the statement.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    match tokens.next() {
        Some((Token::Print, line)) => {
            let expr = parse_parenthesized(tokens, depth)?;
            Ok(Statement::Print { expr, line: *line })
        },
        Some((Token::Identifier(name), line)) => parse_assignment(tokens, name, *line, depth),
        Some((Token::If, line)) => parse_if(tokens, *line, depth),
        Some((Token::While, line)) => parse_while(tokens, *line, depth),
        other => Err(unexpected(other, "a statement")),
    }
}

/// Parses the remainder of `<identifier> = <expression>` after the name.
///
/// The left-hand side is always a plain variable name; the right-hand side
/// is a full expression.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>,
                           name: &str,
                           line: usize,
                           depth: usize)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::Equals)?;
    let value = parse_expression(tokens, depth)?;

    Ok(Statement::Assignment { name: name.to_string(),
                               value,
                               line })
}

/// Parses an `if` statement with an optional `else` block.
///
/// Syntax:
/// ```text
///     if (<condition>) { <statements> }
///     if (<condition>) { <statements> } else { <statements> }
/// ```
/// There is no `else if`; nest an `if` inside the else block instead.
///
/// # Parameters
/// - `tokens`: Token stream positioned after the `if` keyword.
/// - `line`: Line number of the `if` token.
/// - `depth`: How many blocks enclose the statement.
fn parse_if<'a, I>(tokens: &mut Peekable<I>, line: usize, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_parenthesized(tokens, depth)?;
    let then_branch = parse_block(tokens, depth)?;

    let else_branch = match tokens.peek() {
        Some((Token::Else, _)) => {
            tokens.next();
            Some(Box::new(parse_block(tokens, depth)?))
        },
        _ => None,
    };

    Ok(Statement::If { condition,
                       then_branch: Box::new(then_branch),
                       else_branch,
                       line })
}

/// Parses a `while (<condition>) { <statements> }` loop after the keyword.
fn parse_while<'a, I>(tokens: &mut Peekable<I>,
                      line: usize,
                      depth: usize)
                      -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let condition = parse_parenthesized(tokens, depth)?;
    let body = parse_block(tokens, depth)?;

    Ok(Statement::While { condition,
                          body: Box::new(body),
                          line })
}

/// Parses `"(" expression ")"`, as used by `print` and by `if` and `while`
/// conditions.
fn parse_parenthesized<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    expect(tokens, &Token::LParen)?;
    let expr = parse_expression(tokens, depth)?;
    expect(tokens, &Token::RParen)?;

    Ok(expr)
}
