use crate::{
    ast::{BinaryOperator, UnaryOperator},
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Arithmetic operators and string concatenation.
pub mod arithmetic;
/// Equality and ordering operators.
pub mod comparison;

impl BinaryOperator {
    /// Applies the operator to two evaluated operands.
    ///
    /// Comparisons are handled by [`comparison::eval_comparison`], everything
    /// else by [`arithmetic::eval_arithmetic`].
    ///
    /// # Example
    /// ```
    /// use tinyscript::{ast::BinaryOperator, interpreter::value::core::Value};
    ///
    /// let quotient = BinaryOperator::Div.apply(&Value::Integer(6), &Value::Integer(3), 1);
    ///
    /// assert_eq!(quotient, Ok(Value::Real(2.0)));
    /// ```
    pub fn apply(self, left: &Value, right: &Value, line: usize) -> EvalResult<Value> {
        if self.is_comparison() {
            comparison::eval_comparison(self, left, right, line)
        } else {
            arithmetic::eval_arithmetic(self, left, right, line)
        }
    }
}

impl UnaryOperator {
    /// Applies the operator to an evaluated operand.
    ///
    /// Negation accepts integers and reals only. Negating `i64::MIN`
    /// overflows.
    pub fn apply(self, operand: &Value, line: usize) -> EvalResult<Value> {
        match (self, operand) {
            (Self::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (Self::Negate, Value::Real(r)) => Ok(Value::Real(-r)),
            (Self::Negate, _) => {
                Err(RuntimeError::TypeError { details: format!("cannot negate a {}",
                                                                operand.kind()),
                                              line })
            },
        }
    }
}
