use super::Parser;
use crate::ast::{ExprKind, LiteralValue, StmtKind};
use crate::scanner::Scanner;

fn parse(source: &str) -> (Vec<crate::ast::Stmt>, Vec<super::ParseError>) {
    let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
    assert!(scan_errors.is_empty(), "unexpected scan errors: {scan_errors:?}");
    Parser::new(tokens).parse()
}

#[test]
fn parses_variable_declaration_with_initializer() {
    let (stmts, errors) = parse("var a = 1;");
    assert!(errors.is_empty());
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Var { name, initializer } => {
            assert_eq!(name.lexeme, "a");
            assert!(initializer.is_some());
        }
        other => panic!("expected Var, got {other:?}"),
    }
}

#[test]
fn parses_variable_declaration_without_initializer() {
    let (stmts, errors) = parse("var a;");
    assert!(errors.is_empty());
    match &stmts[0].kind {
        StmtKind::Var { initializer, .. } => assert!(initializer.is_none()),
        other => panic!("expected Var, got {other:?}"),
    }
}

#[test]
fn binary_operators_respect_precedence() {
    let (stmts, errors) = parse("1 + 2 * 3;");
    assert!(errors.is_empty());
    let StmtKind::Expression(expr) = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    match &expr.kind {
        ExprKind::Binary { left, operator, right } => {
            assert_eq!(operator.lexeme, "+");
            assert!(matches!(
                left.kind,
                ExprKind::Literal(LiteralValue::Number(n)) if n == 1.0
            ));
            assert!(matches!(right.kind, ExprKind::Binary { .. }));
        }
        other => panic!("expected Binary, got {other:?}"),
    }
}

#[test]
fn parses_logical_and_or_distinct_from_binary() {
    let (stmts, errors) = parse("true and false or true;");
    assert!(errors.is_empty());
    let StmtKind::Expression(expr) = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    match &expr.kind {
        ExprKind::Logical { operator, .. } => assert_eq!(operator.lexeme, "or"),
        other => panic!("expected top-level Logical(or), got {other:?}"),
    }
}

#[test]
fn parses_function_call_with_arguments() {
    let (stmts, errors) = parse("f(1, 2, 3);");
    assert!(errors.is_empty());
    let StmtKind::Expression(expr) = &stmts[0].kind else {
        panic!("expected expression statement");
    };
    match &expr.kind {
        ExprKind::Call { arguments, .. } => assert_eq!(arguments.len(), 3),
        other => panic!("expected Call, got {other:?}"),
    }
}

#[test]
fn for_loop_desugars_to_block_with_while() {
    let (stmts, errors) = parse("for (var i = 0; i < 3; i = i + 1) print i;");
    assert!(errors.is_empty());
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Block(inner) => {
            assert_eq!(inner.len(), 2);
            assert!(matches!(inner[0].kind, StmtKind::Var { .. }));
            assert!(matches!(inner[1].kind, StmtKind::While { .. }));
        }
        other => panic!("expected desugared Block, got {other:?}"),
    }
}

#[test]
fn for_loop_with_omitted_clauses_defaults_condition_to_true() {
    let (stmts, errors) = parse("for (;;) print 1;");
    assert!(errors.is_empty());
    let StmtKind::While { condition, .. } = &stmts[0].kind else {
        panic!("expected bare While, got {:?}", stmts[0].kind);
    };
    assert!(matches!(
        condition.kind,
        ExprKind::Literal(LiteralValue::Bool(true))
    ));
}

#[test]
fn parses_function_declaration() {
    let (stmts, errors) = parse("fun add(a, b) { return a + b; }");
    assert!(errors.is_empty());
    match &stmts[0].kind {
        StmtKind::Function(decl) => {
            assert_eq!(decl.name.lexeme, "add");
            assert_eq!(decl.params.len(), 2);
            assert_eq!(decl.body.len(), 1);
        }
        other => panic!("expected Function, got {other:?}"),
    }
}

#[test]
fn missing_semicolon_is_reported_and_parser_recovers_at_next_statement() {
    let (stmts, errors) = parse("var a = 1\nvar b = 2;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Expect ';'"));
    assert_eq!(stmts.len(), 1);
    match &stmts[0].kind {
        StmtKind::Var { name, .. } => assert_eq!(name.lexeme, "b"),
        other => panic!("expected recovered Var, got {other:?}"),
    }
}

#[test]
fn invalid_assignment_target_is_reported_but_does_not_abort_statement() {
    let (stmts, errors) = parse("1 + 2 = 3;");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].message.contains("Invalid assignment target"));
    assert_eq!(stmts.len(), 1);
}

#[test]
fn block_parses_nested_declarations() {
    let (stmts, errors) = parse("{ var a = 1; print a; }");
    assert!(errors.is_empty());
    match &stmts[0].kind {
        StmtKind::Block(inner) => assert_eq!(inner.len(), 2),
        other => panic!("expected Block, got {other:?}"),
    }
}

#[test]
fn error_message_uses_at_end_for_eof() {
    let (_, errors) = parse("var a =");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].to_string().contains("at end"));
}
