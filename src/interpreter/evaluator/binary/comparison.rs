use std::cmp::Ordering;

use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates a comparison of the form `Value <Operator> Value`.
///
/// Operands must be of the same kind, except that integers and reals compare
/// numerically with each other. Strings order lexicographically and booleans
/// order `false < true`. Comparing across other kinds is a type error rather
/// than an implicit `false`.
///
/// # Parameters
/// - `op`: One of `<`, `>`, `==`, `!=`.
/// - `left`: The left-hand value.
/// - `right`: The right-hand value.
/// - `line`: Current line number used for error reporting.
///
/// # Returns
/// An `EvalResult<Value>` containing a boolean result. Any other operator is
/// a type error.
///
/// # Example
/// ```
/// use tinyscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::comparison::eval_comparison, value::core::Value},
/// };
///
/// let result = eval_comparison(BinaryOperator::Equal, &Value::Integer(1), &Value::Real(1.0), 1);
/// assert_eq!(result, Ok(Value::Bool(true)));
///
/// let mismatch = eval_comparison(BinaryOperator::Less, &"a".into(), &Value::Integer(1), 1);
/// assert!(mismatch.is_err());
/// ```
pub fn eval_comparison(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    if !op.is_comparison() {
        return Err(RuntimeError::TypeError { details: format!("'{op}' is not a comparison operator"),
                                             line });
    }
    let ordering = compare(left, right, line)?;

    Ok(Value::Bool(match op {
                       BinaryOperator::Less => ordering == Some(Ordering::Less),
                       BinaryOperator::Greater => ordering == Some(Ordering::Greater),
                       BinaryOperator::Equal => ordering == Some(Ordering::Equal),
                       _ => ordering != Some(Ordering::Equal),
                   }))
}

/// Orders two values of compatible kinds. `None` means the reals are
/// unordered (a NaN is involved).
fn compare(left: &Value, right: &Value, line: usize) -> EvalResult<Option<Ordering>> {
    use Value::{Bool, Integer, Real, Str};

    match (left, right) {
        (Integer(a), Integer(b)) => Ok(Some(a.cmp(b))),
        (Integer(_) | Real(_), Integer(_) | Real(_)) => {
            Ok(left.as_real(line)?.partial_cmp(&right.as_real(line)?))
        },
        (Bool(a), Bool(b)) => Ok(Some(a.cmp(b))),
        (Str(a), Str(b)) => Ok(Some(a.cmp(b))),
        _ => Err(RuntimeError::TypeError { details: format!("cannot compare {} with {}",
                                                            left.kind(),
                                                            right.kind()),
                                           line }),
    }
}
