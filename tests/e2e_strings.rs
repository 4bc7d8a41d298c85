mod common;

use common::run_source;

#[test]
fn string_concatenation() {
    let result = run_source(r#"var a = "hello"; var b = " world"; print a + b;"#);
    assert_eq!(result.stdout, "hello world\n");
    assert_eq!(result.exit_code, 0);
}

#[test]
fn strings_print_without_surrounding_quotes() {
    let result = run_source(r#"print "plain text";"#);
    assert_eq!(result.stdout, "plain text\n");
}

#[test]
fn string_spanning_multiple_lines_is_scanned_as_one_literal() {
    let result = run_source("print \"line one\nline two\";");
    assert_eq!(result.stdout, "line one\nline two\n");
}
