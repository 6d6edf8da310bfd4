use std::fs;

use tinyscript::{
    error::{ParseError, RuntimeError, ScriptError},
    execute, get_output,
    interpreter::{
        evaluator::core::Context,
        output::{Diagnostic, Severity},
        session::Session,
        value::core::{Value, ValueKind},
    },
};
use walkdir::WalkDir;

#[test]
fn script_fixtures_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/scripts").into_iter()
                                     .filter_map(Result::ok)
                                     .filter(|e| e.path().extension().is_some_and(|ext| ext == "tiny"))
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path)
            .unwrap_or_else(|e| panic!("Failed to read {expected_path:?}: {e}"));

        count += 1;
        match get_output(&source) {
            Ok(lines) => {
                let expected: Vec<&str> = expected.lines().collect();
                assert_eq!(lines, expected, "Output of {path:?} differs");
            },
            Err(e) => panic!("Script {path:?} failed:\n{source}\nError: {e}"),
        }
    }

    assert!(count > 0, "No scripts found in tests/scripts");
}

fn assert_output(src: &str, expected: &[&str]) {
    match get_output(src) {
        Ok(lines) => assert_eq!(lines, expected, "Unexpected output for:\n{src}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    match get_output(src) {
        Err(ScriptError::Runtime(e)) => e,
        Err(ScriptError::Parse(e)) => panic!("Expected a runtime error, got: {e}"),
        Ok(lines) => panic!("Script succeeded but was expected to fail, printed {lines:?}"),
    }
}

fn parse_error(src: &str) -> ParseError {
    match get_output(src) {
        Err(ScriptError::Parse(e)) => e,
        Err(ScriptError::Runtime(e)) => panic!("Expected a parse error, got: {e}"),
        Ok(lines) => panic!("Script succeeded but was expected to fail, printed {lines:?}"),
    }
}

#[test]
fn print_addition() {
    assert_output("print(5+3);", &["8"]);
}

#[test]
fn if_else_picks_branch() {
    assert_output("if (true) { print(1); } else { print(0); };", &["1"]);
    assert_output("if (false) { print(1); } else { print(0); };", &["0"]);
}

#[test]
fn if_without_else_is_a_no_op_when_false() {
    assert_output("if (1 > 2) { print(1); }; print(2);", &["2"]);
}

#[test]
fn while_loop_counts_down() {
    assert_output("x=3; while (x>0) { print(x); x=x-1; };", &["3", "2", "1"]);
}

#[test]
fn while_loop_with_false_condition_never_runs() {
    assert_output("while (false) { print(1); }; print(\"done\");", &["done"]);
}

#[test]
fn nested_blocks_share_one_namespace() {
    assert_output("x = 0;
                   while (x < 3) {
                       if (x == 1) { y = \"seen\"; };
                       x = x + 1;
                   };
                   print(y);
                   print(x);",
                  &["seen", "3"]);
}

#[test]
fn undefined_variable_is_named() {
    let error = runtime_error("print(y);");

    assert_eq!(error,
               RuntimeError::UndefinedVariable { name: "y".to_string(),
                                                 line: 1, });
    assert_eq!(error.to_string(), "Error on line 1: Variable 'y' not defined.");
}

#[test]
fn reassignment_replaces_value_and_kind() {
    assert_output("x=5; x=\"hi\"; print(x);", &["hi"]);

    let mut context = Context::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    execute("x = 5; x = \"hi\";", &mut context, &mut output, &mut diagnostics).unwrap();

    assert_eq!(context.get("x"), Some(&Value::from("hi")));
    assert_eq!(context.kind_of("x"), Some(ValueKind::String));
    assert_eq!(context.len(), 1);
}

#[test]
fn operator_precedence() {
    assert_output("print(2 + 3 * 4);", &["14"]);
    assert_output("print((2 + 3) * 4);", &["20"]);
    assert_output("print(10 - 4 - 3);", &["3"]);
    assert_output("print(1 + 2 == 3);", &["true"]);
    assert_output("print(1 + 1 > 1);", &["true"]);
}

#[test]
fn unary_minus() {
    assert_output("print(-5);", &["-5"]);
    assert_output("print(3 - -2);", &["5"]);
    assert_output("x = 4; print(-x * 2);", &["-8"]);
    assert_output("print(-2.5);", &["-2.5"]);
}

#[test]
fn division_always_produces_a_float() {
    assert_output("print(6 / 3);", &["2.0"]);
    assert_output("print(7 / 2);", &["3.5"]);
    assert_output("print(1.5 * 2);", &["3.0"]);
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(runtime_error("print(1 / 0);"), RuntimeError::DivisionByZero { line: 1 });
    assert_eq!(runtime_error("x = 0.0;\nprint(1 / x);"),
               RuntimeError::DivisionByZero { line: 2 });
}

#[test]
fn integer_overflow_fails() {
    assert_eq!(runtime_error("print(9223372036854775807 + 1);"),
               RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error("x = 4611686018427387904; print(x * 2);"),
               RuntimeError::Overflow { line: 1 });
}

#[test]
fn string_concatenation_and_comparison() {
    assert_output("a = \"foo\"; b = \"bar\"; print(a + b);", &["foobar"]);
    assert_output("print(\"abc\" < \"abd\");", &["true"]);
    assert_output("print(\"a\" == \"a\");", &["true"]);
}

#[test]
fn mixed_numbers_compare_numerically() {
    assert_output("print(1 == 1.0);", &["true"]);
    assert_output("print(2 > 1.5);", &["true"]);
    assert_output("print(3 != 3);", &["false"]);
}

#[test]
fn mismatched_kinds_are_type_errors() {
    assert!(matches!(runtime_error("print(\"a\" + 1);"), RuntimeError::TypeError { line: 1, .. }));
    assert!(matches!(runtime_error("print(\"a\" == 1);"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("print(\"a\" * 2);"), RuntimeError::TypeError { .. }));
}

#[test]
fn non_boolean_condition_is_a_type_error() {
    assert!(matches!(runtime_error("if (1) { print(1); };"), RuntimeError::TypeError { .. }));
    assert!(matches!(runtime_error("x = \"s\";\nwhile (x) { print(1); };"),
                     RuntimeError::TypeError { line: 2, .. }));
}

#[test]
fn boolean_literal_addition_is_a_parse_error() {
    assert_eq!(parse_error("x = 1 + true;"), ParseError::BooleanAddition { line: 1 });
    assert_eq!(parse_error("print(1);\nprint(false + 2);"),
               ParseError::BooleanAddition { line: 2 });
}

#[test]
fn boolean_addition_through_variables_is_a_type_error() {
    assert!(matches!(runtime_error("b = true; print(b + 1);"), RuntimeError::TypeError { .. }));
}

#[test]
fn parse_errors_prevent_any_execution() {
    let mut context = Context::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let result = execute("x = 1; print(x); print(x", &mut context, &mut output, &mut diagnostics);

    assert!(matches!(result, Err(ScriptError::Parse(ParseError::UnexpectedEndOfInput { line: 1, .. }))));
    assert!(output.is_empty());
    assert!(context.is_empty());
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Error);
}

#[test]
fn missing_semicolon_is_reported_with_its_line() {
    let error = parse_error("x = 1;\ny = 2\nprint(y);");

    assert!(matches!(error, ParseError::UnexpectedToken { line: 3, .. }));
    assert!(error.to_string().starts_with("Error on line 3: Unexpected token 'print'"));
}

#[test]
fn block_statements_need_semicolons() {
    assert!(matches!(parse_error("if (true) { print(1) };"),
                     ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_error("while (true) { };"), ParseError::UnexpectedToken { .. }));
}

#[test]
fn runtime_error_keeps_earlier_effects() {
    let mut context = Context::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    let result = execute("x = 1; print(x); print(z); print(2);",
                         &mut context,
                         &mut output,
                         &mut diagnostics);

    assert!(matches!(result, Err(ScriptError::Runtime(RuntimeError::UndefinedVariable { .. }))));
    assert_eq!(output, ["1"]);
    assert_eq!(context.get("x"), Some(&Value::Integer(1)));
}

#[test]
fn illegal_characters_are_skipped_with_a_warning() {
    let mut context = Context::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    execute("print(1 $+ 2);", &mut context, &mut output, &mut diagnostics).unwrap();

    assert_eq!(output, ["3"]);
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].severity, Severity::Warning);
    assert_eq!(diagnostics[0].message, "ERROR: Illegal character '$' at line 1");
}

#[test]
fn empty_source_reports_a_note() {
    let mut context = Context::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    execute("  \n ", &mut context, &mut output, &mut diagnostics).unwrap();

    assert!(output.is_empty());
    assert_eq!(diagnostics, [Diagnostic::note("No valid commands to execute.")]);
}

#[test]
fn session_keeps_variables_between_runs() {
    let mut session = Session::new();
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();

    session.run("counter = 10;", &mut output, &mut diagnostics).unwrap();
    session.run("counter = counter - 1;", &mut output, &mut diagnostics).unwrap();
    session.run("print(counter);", &mut output, &mut diagnostics).unwrap();
    assert_eq!(output, ["9"]);

    session.reset();
    let error = session.run("\nprint(counter);", &mut output, &mut diagnostics).unwrap_err();
    assert_eq!(error.line(), 2);
    assert!(session.context().is_empty());
}

#[test]
fn session_continues_from_an_existing_context() {
    let mut context = Context::new();
    context.set("base", Value::Integer(40));

    let mut session = Session::with_context(context);
    let mut output: Vec<String> = Vec::new();
    let mut diagnostics: Vec<Diagnostic> = Vec::new();
    session.run("total = base + 2; print(total);", &mut output, &mut diagnostics).unwrap();

    let context = session.into_context();
    assert_eq!(output, ["42"]);
    assert_eq!(context.get("total"), Some(&Value::Integer(42)));
    assert_eq!(context.iter().map(|(name, _)| name).collect::<Vec<_>>(), ["base", "total"]);
}

#[test]
fn printed_values_use_natural_form() {
    assert_output("print(true); print(\"text\"); print(2.25); print(100);",
                  &["true", "text", "2.25", "100"]);
}

#[test]
fn equality_is_reflexive_for_every_kind() {
    for value in ["7", "2.5", "\"s\"", "true", "false"] {
        assert_output(&format!("v = {value}; print(v == v); print(v != v);"),
                      &["true", "false"]);
    }
}

#[test]
fn equality_is_symmetric() {
    for (a, b) in [("1", "1.0"), ("3", "4"), ("\"a\"", "\"b\""), ("true", "false")] {
        let forward = get_output(&format!("print({a} == {b}); print({a} != {b});")).unwrap();
        let backward = get_output(&format!("print({b} == {a}); print({b} != {a});")).unwrap();
        assert_eq!(forward, backward, "{a} and {b}");
    }
}

#[test]
fn non_finite_real_results_overflow() {
    let huge = format!("1{}.0", "0".repeat(308));

    assert_eq!(runtime_error(&format!("x = {huge} * 10.0;")), RuntimeError::Overflow { line: 1 });
    assert_eq!(runtime_error(&format!("x = {huge};\ny = x + x;")),
               RuntimeError::Overflow { line: 2 });
    assert_eq!(runtime_error(&format!("x = {huge} * 2;")), RuntimeError::Overflow { line: 1 });
    assert_output(&format!("x = {huge}; y = x - x; print(y == y);"), &["true"]);
}

#[test]
fn deep_nesting_is_rejected_without_crashing() {
    let parens = format!("print({}1{});", "(".repeat(10_000), ")".repeat(10_000));
    assert_eq!(parse_error(&parens), ParseError::TooDeep { line: 1 });

    let chain = format!("print({});", vec!["1"; 100_000].join(" + "));
    assert_eq!(parse_error(&chain), ParseError::TooDeep { line: 1 });

    let negations = format!("print({}1);", "-".repeat(10_000));
    assert_eq!(parse_error(&negations), ParseError::TooDeep { line: 1 });

    let blocks = format!("{}print(1); {}", "if (true) { ".repeat(1_000), "}; ".repeat(1_000));
    assert_eq!(parse_error(&blocks), ParseError::TooDeep { line: 1 });
}

#[test]
fn moderate_nesting_still_runs() {
    assert_output(&format!("print({}1{});", "(".repeat(50), ")".repeat(50)), &["1"]);
    assert_output(&format!("print({});", vec!["1"; 500].join(" + ")), &["500"]);
    assert_output(&format!("{}print(1); {}", "if (true) { ".repeat(30), "}; ".repeat(30)),
                  &["1"]);
}
