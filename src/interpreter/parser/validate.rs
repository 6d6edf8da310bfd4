use crate::{
    ast::{BinaryOperator, Expr, Statement},
    error::ParseError,
    interpreter::parser::core::ParseResult,
};

/// Checks a parsed program for statically detectable misuse.
///
/// Currently this rejects any `+` with a boolean literal operand, such as
/// `true + 1`. Booleans reaching `+` through variables are caught by the
/// evaluator instead.
///
/// # Errors
/// Returns `ParseError::BooleanAddition` for the first offending `+`, in
/// source order.
///
/// # Example
/// ```
/// use tinyscript::{
///     error::ParseError,
///     interpreter::{lexer::tokenize, parser::core::parse_program},
/// };
///
/// let tokens: Vec<_> = tokenize("x = 1 + true;").collect::<Result<_, _>>()
///                                              .unwrap();
///
/// assert_eq!(parse_program(&tokens),
///            Err(ParseError::BooleanAddition { line: 1 }));
/// ```
pub fn validate_program(statements: &[Statement]) -> ParseResult<()> {
    statements.iter().try_for_each(validate_statement)
}

fn validate_statement(statement: &Statement) -> ParseResult<()> {
    match statement {
        Statement::Print { expr, .. } | Statement::Assignment { value: expr, .. } => {
            validate_expr(expr)
        },
        Statement::If { condition,
                        then_branch,
                        else_branch,
                        .. } => {
            validate_expr(condition)?;
            validate_statement(then_branch)?;
            else_branch.as_deref().map_or(Ok(()), validate_statement)
        },
        Statement::While { condition, body, .. } => {
            validate_expr(condition)?;
            validate_statement(body)
        },
        Statement::Compound { statements, .. } => validate_program(statements),
    }
}

fn validate_expr(expr: &Expr) -> ParseResult<()> {
    match expr {
        Expr::Literal { .. } | Expr::Variable { .. } => Ok(()),
        Expr::UnaryOp { expr, .. } => validate_expr(expr),
        Expr::BinaryOp { left,
                         op,
                         right,
                         line, } => {
            validate_expr(left)?;
            validate_expr(right)?;
            if *op == BinaryOperator::Add && (left.is_bool_literal() || right.is_bool_literal()) {
                return Err(ParseError::BooleanAddition { line: *line });
            }
            Ok(())
        },
    }
}
