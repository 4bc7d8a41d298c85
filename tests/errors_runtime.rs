mod common;

use common::run_source;

#[test]
fn adding_a_number_and_a_string_is_a_runtime_error() {
    let result = run_source(r#"print 1 + "x";"#);
    assert_eq!(result.exit_code, 70);
    assert!(result
        .stderr
        .contains("Operands must both be numbers or strings"));
    assert!(result.stderr.contains("[line 1]"));
}

#[test]
fn reading_an_undefined_global_is_a_runtime_error() {
    let result = run_source("print missing;");
    assert_eq!(result.exit_code, 70);
    assert!(result.stderr.contains("Undefined variable 'missing'."));
}

#[test]
fn calling_a_non_callable_value_is_a_runtime_error() {
    let result = run_source("var a = 1; a();");
    assert_eq!(result.exit_code, 70);
    assert!(result
        .stderr
        .contains("Can only call functions and classes."));
}

#[test]
fn calling_with_the_wrong_number_of_arguments_is_a_runtime_error() {
    let result = run_source("fun one(a) { return a; } one();");
    assert_eq!(result.exit_code, 70);
    assert!(result
        .stderr
        .contains("Expected 1 arguments but got 0."));
}

#[test]
fn a_runtime_error_does_not_stop_statements_that_already_printed() {
    let result = run_source(r#"print "before"; print 1 + "x";"#);
    assert_eq!(result.stdout, "before\n");
    assert_eq!(result.exit_code, 70);
}
