use letterloop::interpreter::engine::Interpreter;
use letterloop::interpreter::errors::InterpretError;
use std::fs;
use std::path::Path;

fn run_demo(name: &str) -> (Result<(), InterpretError>, String) {
    let path = Path::new("demos").join(name);
    let source = fs::read_to_string(path).expect("Failed to read demo file");

    let mut interpreter = Interpreter::new(&source, std::io::empty(), Vec::new());
    let result = interpreter.run();
    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    (result, output)
}

#[test]
fn test_countdown_demo() {
    let (result, output) = run_demo("countdown.ll");
    assert!(result.is_ok(), "Execution failed: {:?}", result);

    println!("Interpreter output:\n{}", output);

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "0");
    assert_eq!(lines[9], "9");
    assert_eq!(lines[10], "Program parsed successfully.");
}

#[test]
fn test_parity_demo() {
    let (result, output) = run_demo("parity.ll");
    assert!(result.is_ok(), "Execution failed: {:?}", result);

    // 1+3+5+7 and 2+4+6+8
    assert_eq!(output, "16\n20\n512\nProgram parsed successfully.\n");
}

fn run_source(source: &str) -> (Result<(), InterpretError>, String) {
    let mut interpreter = Interpreter::new(source, std::io::empty(), Vec::new());
    let result = interpreter.run();
    let output = String::from_utf8(interpreter.into_output()).expect("output is UTF-8");
    (result, output)
}

// === ERRORS ===

#[test]
fn test_missing_terminating_dot() {
    let (result, output) = run_source("a = 1; < a;");
    match result {
        Err(InterpretError::Syntax { message, .. }) => {
            assert!(message.contains("'.'"), "unexpected message: {}", message);
            assert!(message.contains("end of input"));
        }
        other => panic!("Expected syntax error, got {:?}", other),
    }
    // Statements before the error already ran; no success notice.
    assert_eq!(output, "1\n");
}

#[test]
fn test_unrecognized_statement() {
    let (result, _) = run_source("a = 1; 5 = a; .");
    assert!(matches!(result, Err(InterpretError::Syntax { .. })));

    let (result, _) = run_source("A = 1; .");
    let err = result.unwrap_err();
    assert!(err.to_string().contains("unrecognized character 'A'"), "{}", err);
}

#[test]
fn test_division_by_zero_stops_execution() {
    let (result, output) = run_source("< 1; < 4 / (2 - 2); < 3; .");
    assert!(matches!(result, Err(InterpretError::DivisionByZero { .. })));
    assert_eq!(output, "1\n");
}

#[test]
fn test_division_by_zero_in_untaken_branch() {
    // Expressions are evaluated even when their side effects are suppressed.
    let (result, output) = run_source("[ 0 ? a = 1 % 0; ] < 5; .");
    assert!(matches!(result, Err(InterpretError::DivisionByZero { .. })));
    assert_eq!(output, "");
}

#[test]
fn test_unterminated_if() {
    let (result, _) = run_source("[ 1 ? < 1; .");
    assert!(matches!(result, Err(InterpretError::Syntax { .. })));

    let (result, _) = run_source("n = 1; { n ? [ n ? n = 0; } .");
    assert!(matches!(result, Err(InterpretError::Syntax { .. })));
}

#[test]
fn test_unterminated_loop() {
    let (result, _) = run_source("{ 1 ? < 1; .");
    assert!(matches!(result, Err(InterpretError::Syntax { .. })));

    let (result, _) = run_source("{ 1 < 1; }");
    assert!(matches!(result, Err(InterpretError::Syntax { .. })));
}

#[test]
fn test_error_display() {
    let (result, _) = run_source("a = (1 + 2;\n.");
    let err = result.unwrap_err();
    assert_eq!(
        err.to_string(),
        "Syntax error at line 1, column 11: expected ')', found ';'"
    );
    assert_eq!(err.location().map(|l| l.line), Some(1));
}
