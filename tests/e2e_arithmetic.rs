mod common;

use common::run_source;

#[test]
fn arithmetic_respects_precedence() {
    let result = run_source("print 1 + 2 * 3;");
    assert_eq!(result.stdout, "7\n");
    assert_eq!(result.exit_code, 0);
}

#[test]
fn integral_results_print_without_trailing_zero() {
    let result = run_source("print 6 / 2;");
    assert_eq!(result.stdout, "3\n");
}

#[test]
fn fractional_results_keep_their_decimal() {
    let result = run_source("print 7 / 2;");
    assert_eq!(result.stdout, "3.5\n");
}

#[test]
fn comparisons_print_booleans() {
    let result = run_source("print 1 < 2; print 2 <= 2; print 3 > 4;");
    assert_eq!(result.stdout, "true\ntrue\nfalse\n");
}
