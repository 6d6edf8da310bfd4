use std::iter::Peekable;

use crate::{
    ast::Statement,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::parse_statement,
            utils::{expect, nest, unexpected},
        },
    },
};

/// Parses a block delimited by braces.
///
/// A block holds one or more statements, each terminated by `;`. Parsing
/// continues until the closing `}` token is encountered.
///
/// Grammar: `block := "{" (statement ";")+ "}"`
///
/// The resulting statement is returned as
/// `Statement::Compound { statements, line }`, where `line` is the line of
/// the opening brace.
///
/// # Parameters
/// - `tokens`: Token stream positioned at the opening brace.
/// - `depth`: How many blocks enclose this one.
///
/// # Returns
/// A compound statement containing all parsed statements.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = expect(tokens, &Token::LBrace)?;
    let depth = nest(depth, line)?;
    let mut statements = Vec::new();

    loop {
        statements.push(parse_statement(tokens, depth)?);
        expect(tokens, &Token::Semicolon)?;

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => {},
            None => return Err(unexpected(None, "'}'")),
        }
    }

    Ok(Statement::Compound { statements, line })
}
