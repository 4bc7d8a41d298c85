mod common;

use common::run_source;

#[test]
fn function_call_and_return_value() {
    let result = run_source("fun add(a, b) { return a + b; } print add(1, 2);");
    assert_eq!(result.stdout, "3\n");
    assert_eq!(result.exit_code, 0);
}

#[test]
fn closure_counter_keeps_its_own_state_across_calls() {
    let source = r#"
        fun counter() {
            var i = 0;
            fun next() { i = i + 1; return i; }
            return next;
        }
        var c = counter();
        print c();
        print c();
        print c();
    "#;
    let result = run_source(source);
    assert_eq!(result.stdout, "1\n2\n3\n");
}

#[test]
fn recursive_function_computes_fibonacci() {
    let source = "fun fib(n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); } print fib(8);";
    let result = run_source(source);
    assert_eq!(result.stdout, "21\n");
}

#[test]
fn function_without_return_statement_yields_nil() {
    let result = run_source("fun noop() {} print noop();");
    assert_eq!(result.stdout, "nil\n");
}

#[test]
fn native_clock_returns_a_number_usable_in_arithmetic() {
    let result = run_source("print clock() >= 0;");
    assert_eq!(result.stdout, "true\n");
}
