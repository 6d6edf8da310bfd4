use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// Evaluates `+`, `-`, `*` and `/`.
///
/// - Two integers stay integers under `+`, `-` and `*`, with overflow
///   checked.
/// - Any real operand promotes the other integer operand to real.
/// - `/` always produces a real, and a zero divisor of either numeric kind is
///   an error.
/// - A real result that is not finite counts as overflow.
/// - `+` on two strings concatenates them.
/// - A boolean operand is always rejected, as is any string operand outside
///   of string concatenation. Comparison operators are rejected too.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `line`: Line number for error reporting.
///
/// # Example
/// ```
/// use tinyscript::{
///     ast::BinaryOperator,
///     interpreter::{evaluator::binary::arithmetic::eval_arithmetic, value::core::Value},
/// };
///
/// let sum = eval_arithmetic(BinaryOperator::Add, &Value::Integer(5), &Value::Real(0.5), 1);
/// assert_eq!(sum, Ok(Value::Real(5.5)));
///
/// let joined = eval_arithmetic(BinaryOperator::Add, &"ab".into(), &"cd".into(), 1);
/// assert_eq!(joined, Ok(Value::from("abcd")));
/// ```
pub fn eval_arithmetic(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
    use BinaryOperator::{Add, Div, Equal, Greater, Less, Mul, NotEqual, Sub};
    use Value::{Bool, Integer, Real, Str};

    match (left, right) {
        (Bool(_), _) | (_, Bool(_)) if op == Add => Err(RuntimeError::TypeError {
            details: "addition operation between boolean and numeric values is not allowed"
                     .to_string(),
            line,
        }),
        (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
        (Integer(_), Integer(0)) if op == Div => Err(RuntimeError::DivisionByZero { line }),
        (Integer(a), Integer(b)) => {
            let result = match op {
                Add => a.checked_add(*b),
                Sub => a.checked_sub(*b),
                Mul => a.checked_mul(*b),
                Div => return finite(left.as_real(line)? / right.as_real(line)?, line),
                Less | Greater | Equal | NotEqual => return Err(not_arithmetic(op, line)),
            };
            result.map(Integer).ok_or(RuntimeError::Overflow { line })
        },
        (Integer(_) | Real(_), Integer(_) | Real(_)) => {
            let left = left.as_real(line)?;
            let right = right.as_real(line)?;

            finite(match op {
                       Add => left + right,
                       Sub => left - right,
                       Mul => left * right,
                       Div => {
                           if right == 0.0 {
                               return Err(RuntimeError::DivisionByZero { line });
                           }
                           left / right
                       },
                       Less | Greater | Equal | NotEqual => return Err(not_arithmetic(op, line)),
                   },
                   line)
        },
        _ => Err(RuntimeError::TypeError { details: format!("unsupported operand kinds for '{op}': {} and {}",
                                                            left.kind(),
                                                            right.kind()),
                                           line }),
    }
}

fn not_arithmetic(op: BinaryOperator, line: usize) -> RuntimeError {
    RuntimeError::TypeError { details: format!("'{op}' is not an arithmetic operator"),
                              line }
}

/// Wraps a real result, treating infinity and NaN as overflow.
fn finite(real: f64, line: usize) -> EvalResult<Value> {
    if real.is_finite() {
        Ok(Value::Real(real))
    } else {
        Err(RuntimeError::Overflow { line })
    }
}
