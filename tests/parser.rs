use tinyscript::{
    ast::{BinaryOperator, Expr, LiteralValue, Statement, UnaryOperator},
    error::ParseError,
    interpreter::{lexer::tokenize, parser::core::parse_program},
};

fn parse(src: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens: Vec<_> = tokenize(src).collect::<Result<_, _>>()
                                      .unwrap_or_else(|e| panic!("Failed to lex {src:?}: {e}"));
    parse_program(&tokens)
}

fn parse_expr(src: &str) -> Expr {
    match parse(&format!("print({src});")).as_deref() {
        Ok([Statement::Print { expr, .. }]) => expr.clone(),
        other => panic!("Expected a single print statement, got {other:?}"),
    }
}

fn int(n: i64) -> Expr {
    Expr::Literal { value: LiteralValue::Integer(n),
                    line:  1, }
}

fn binary(left: Expr, op: BinaryOperator, right: Expr) -> Expr {
    Expr::BinaryOp { left: Box::new(left),
                     op,
                     right: Box::new(right),
                     line: 1 }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parse_expr("1 + 2 * 3"),
               binary(int(1), BinaryOperator::Add, binary(int(2), BinaryOperator::Mul, int(3))));
}

#[test]
fn operators_associate_left() {
    assert_eq!(parse_expr("8 - 4 - 2"),
               binary(binary(int(8), BinaryOperator::Sub, int(4)), BinaryOperator::Sub, int(2)));
    assert_eq!(parse_expr("1 < 2 == true"),
               binary(binary(int(1), BinaryOperator::Less, int(2)),
                      BinaryOperator::Equal,
                      Expr::Literal { value: LiteralValue::Bool(true),
                                      line:  1, }));
}

#[test]
fn comparisons_bind_looser_than_arithmetic() {
    assert_eq!(parse_expr("1 + 1 > 1"),
               binary(binary(int(1), BinaryOperator::Add, int(1)), BinaryOperator::Greater, int(1)));
}

#[test]
fn negation_is_a_prefix_operator() {
    assert_eq!(parse_expr("-2 * 3"),
               binary(Expr::UnaryOp { op:   UnaryOperator::Negate,
                                      expr: Box::new(int(2)),
                                      line: 1, },
                      BinaryOperator::Mul,
                      int(3)));
}

#[test]
fn names_become_variable_references() {
    assert_eq!(parse_expr("x"),
               Expr::Variable { name: "x".to_string(),
                                line: 1, });
}

#[test]
fn if_else_and_while_build_compound_blocks() {
    let program = parse("if (x) { a = 1; b = 2; } else { a = 3; };\nwhile (x) { print(a); };")
        .unwrap();

    assert_eq!(program.len(), 2);
    match &program[0] {
        Statement::If { then_branch,
                        else_branch: Some(else_branch),
                        .. } => {
            assert!(matches!(then_branch.as_ref(),
                             Statement::Compound { statements, .. } if statements.len() == 2));
            assert!(matches!(else_branch.as_ref(),
                             Statement::Compound { statements, .. } if statements.len() == 1));
        },
        other => panic!("Expected an if statement, got {other:?}"),
    }
    assert!(matches!(program[1], Statement::While { line: 2, .. }));
}

#[test]
fn empty_program_parses() {
    assert_eq!(parse(""), Ok(Vec::new()));
}

#[test]
fn final_semicolon_is_required() {
    assert_eq!(parse("print(1)"),
               Err(ParseError::UnexpectedEndOfInput { expected: "';'".to_string(),
                                                      line:     1, }));
    assert!(parse("if (true) { print(1); }").is_err());
}

#[test]
fn unexpected_token_names_token_and_line() {
    let error = parse("x = 1;\nx = = 2;").unwrap_err();

    assert_eq!(error,
               ParseError::UnexpectedToken { token:    "'='".to_string(),
                                             expected: "an expression".to_string(),
                                             line:     2, });
}

#[test]
fn boolean_literal_addition_is_rejected_anywhere() {
    assert_eq!(parse("while (true) {\n  x = true + 1;\n};"),
               Err(ParseError::BooleanAddition { line: 2 }));
    assert!(parse("x = true == 1;").is_ok());
}

#[test]
fn nesting_limit_reports_the_offending_line() {
    let src = format!("x = 1;\ny = {}2{};", "(".repeat(100), ")".repeat(100));

    assert_eq!(parse(&src), Err(ParseError::TooDeep { line: 2 }));
}

#[test]
fn long_chains_stay_within_the_height_limit() {
    let src = format!("x = {};", vec!["a"; 1_000].join(" * "));
    let program = parse(&src).unwrap();

    match &program[..] {
        [Statement::Assignment { value, .. }] => assert_eq!(value.height(), 1_000),
        other => panic!("Expected one assignment, got {other:?}"),
    }
}
