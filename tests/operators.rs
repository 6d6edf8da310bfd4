use tinyscript::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::binary::{arithmetic::eval_arithmetic, comparison::eval_comparison},
        value::core::Value,
    },
};

#[test]
fn arithmetic_rejects_comparison_operators() {
    for op in [BinaryOperator::Less,
               BinaryOperator::Greater,
               BinaryOperator::Equal,
               BinaryOperator::NotEqual]
    {
        for (left, right) in [(Value::Integer(1), Value::Integer(2)),
                              (Value::Real(1.5), Value::Integer(2)),
                              (Value::Integer(1), Value::Integer(0))]
        {
            assert!(matches!(eval_arithmetic(op, &left, &right, 3),
                             Err(RuntimeError::TypeError { line: 3, .. })),
                    "{op} on {left} and {right}");
        }
    }
}

#[test]
fn comparison_rejects_arithmetic_operators() {
    for op in [BinaryOperator::Add,
               BinaryOperator::Sub,
               BinaryOperator::Mul,
               BinaryOperator::Div]
    {
        assert!(matches!(eval_comparison(op, &Value::Integer(1), &Value::Integer(1), 4),
                         Err(RuntimeError::TypeError { line: 4, .. })));
    }
}

#[test]
fn real_results_must_be_finite() {
    assert_eq!(eval_arithmetic(BinaryOperator::Mul, &Value::Real(f64::MAX), &Value::Real(2.0), 1),
               Err(RuntimeError::Overflow { line: 1 }));
    assert_eq!(eval_arithmetic(BinaryOperator::Div, &Value::Real(f64::MAX), &Value::Real(0.5), 1),
               Err(RuntimeError::Overflow { line: 1 }));
    assert_eq!(eval_arithmetic(BinaryOperator::Sub, &Value::Real(f64::MAX), &Value::Real(1.0), 1),
               Ok(Value::Real(f64::MAX - 1.0)));
}
