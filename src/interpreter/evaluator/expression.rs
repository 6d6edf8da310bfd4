use crate::{
    ast::Expr,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Expr {
    /// Evaluates the expression against `context`.
    ///
    /// Both operands of a binary operation are always evaluated, left before
    /// right; no operator short-circuits. Evaluation never modifies the
    /// context.
    ///
    /// # Errors
    /// - `UndefinedVariable` for a variable that was never assigned.
    /// - `TypeError`, `DivisionByZero` or `Overflow` from the operators.
    ///
    /// # Example
    /// ```
    /// use tinyscript::{
    ///     ast::{BinaryOperator, Expr, LiteralValue},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let sum = Expr::BinaryOp { left:  Box::new(Expr::Literal { value: LiteralValue::Integer(5),
    ///                                                            line:  1, }),
    ///                            op:    BinaryOperator::Add,
    ///                            right: Box::new(Expr::Literal { value: LiteralValue::Integer(3),
    ///                                                            line:  1, }),
    ///                            line:  1, };
    ///
    /// assert_eq!(sum.evaluate(&Context::new()), Ok(Value::Integer(8)));
    /// ```
    pub fn evaluate(&self, context: &Context) -> EvalResult<Value> {
        match self {
            Self::Literal { value, .. } => Ok(value.into()),
            Self::Variable { name, line } => context.lookup(name, *line).cloned(),
            Self::UnaryOp { op, expr, line } => {
                let operand = expr.evaluate(context)?;
                op.apply(&operand, *line)
            },
            Self::BinaryOp { left,
                             op,
                             right,
                             line, } => {
                let left = left.evaluate(context)?;
                let right = right.evaluate(context)?;
                op.apply(&left, &right, *line)
            },
        }
    }
}
