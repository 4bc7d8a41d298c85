//! Static lexical scope resolution.
//!
//! # Overview
//!
//! Walks the AST once, after parsing and before interpretation, and decides
//! — for every variable read or write — exactly how many enclosing scopes
//! out its binding lives. That answer is recorded in a side table keyed by
//! [`NodeId`] rather than baked into the AST nodes themselves, since Rust
//! gives us no cheap way to mutate a shared `Expr` in place once it is
//! wrapped behind the `Box`es the parser built.
//!
//! This also doubles as the language's only static-error pass beyond
//! parsing: it catches a variable read from its own initializer and a
//! `return` outside any function, both of which are reported as static
//! errors before the program runs rather than runtime errors.
//!
//! The resolver never tracks the outermost (global) scope as one of its
//! scopes — global bindings are resolved dynamically by
//! [`crate::environment::Environment`] at runtime, the same way
//! [`crate::interpreter::Interpreter`] looks up a native function like
//! `clock`. Only block, function, and loop-body scopes go on the stack.
//!
//! # See Also
//!
//! * [`crate::ast`] - Defines [`NodeId`], the key this module's output is keyed by
//! * [`crate::interpreter`] - Consumes the resulting depth table

mod error;


pub use error::ResolverError;

use std::collections::HashMap;

use crate::ast::{Expr, ExprKind, FunctionDecl, NodeId, Stmt, StmtKind};
use crate::token::Token;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FunctionType {
    None,
    Function,
}

pub struct Resolver {
    scopes: Vec<HashMap<String, bool>>,
    locals: HashMap<NodeId, usize>,
    current_function: FunctionType,
    errors: Vec<ResolverError>,
}

impl Resolver {
    pub fn new() -> Self {
        Resolver {
            scopes: Vec::new(),
            locals: HashMap::new(),
            current_function: FunctionType::None,
            errors: Vec::new(),
        }
    }

    /// Resolves an entire program, returning the variable-depth table
    /// alongside every static error found along the way.
    pub fn resolve(mut self, statements: &[Stmt]) -> (HashMap<NodeId, usize>, Vec<ResolverError>) {
        self.resolve_stmts(statements);
        (self.locals, self.errors)
    }

    fn resolve_stmts(&mut self, statements: &[Stmt]) {
        for stmt in statements {
            self.resolve_stmt(stmt);
        }
    }

    fn resolve_stmt(&mut self, stmt: &Stmt) {
        match &stmt.kind {
            StmtKind::Block(statements) => {
                self.begin_scope();
                self.resolve_stmts(statements);
                self.end_scope();
            }
            StmtKind::Var { name, initializer } => {
                self.declare(name);
                if let Some(init) = initializer {
                    self.resolve_expr(init);
                }
                self.define(name);
            }
            StmtKind::Function(decl) => {
                self.declare(&decl.name);
                self.define(&decl.name);
                self.resolve_function(decl, FunctionType::Function);
            }
            StmtKind::Expression(expr) | StmtKind::Print(expr) => {
                self.resolve_expr(expr);
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                self.resolve_expr(condition);
                self.resolve_stmt(then_branch);
                if let Some(else_branch) = else_branch {
                    self.resolve_stmt(else_branch);
                }
            }
            StmtKind::While { condition, body } => {
                self.resolve_expr(condition);
                self.resolve_stmt(body);
            }
            StmtKind::Return { keyword, value } => {
                if self.current_function == FunctionType::None {
                    self.error(keyword.clone(), "Can't return from top-level code.");
                }
                if let Some(value) = value {
                    self.resolve_expr(value);
                }
            }
        }
    }

    fn resolve_function(&mut self, decl: &FunctionDecl, function_type: FunctionType) {
        let enclosing_function = self.current_function;
        self.current_function = function_type;

        self.begin_scope();
        for param in &decl.params {
            self.declare(param);
            self.define(param);
        }
        self.resolve_stmts(&decl.body);
        self.end_scope();

        self.current_function = enclosing_function;
    }

    fn resolve_expr(&mut self, expr: &Expr) {
        match &expr.kind {
            ExprKind::Variable(name) => {
                if self.scopes.last().and_then(|scope| scope.get(&name.lexeme)) == Some(&false) {
                    self.error(
                        name.clone(),
                        "Can't read local variable in its own initializer.",
                    );
                }
                self.resolve_local(expr.id, name);
            }
            ExprKind::Assign { name, value } => {
                self.resolve_expr(value);
                self.resolve_local(expr.id, name);
            }
            ExprKind::Binary { left, right, .. } | ExprKind::Logical { left, right, .. } => {
                self.resolve_expr(left);
                self.resolve_expr(right);
            }
            ExprKind::Unary { right, .. } => self.resolve_expr(right),
            ExprKind::Call {
                callee, arguments, ..
            } => {
                self.resolve_expr(callee);
                for argument in arguments {
                    self.resolve_expr(argument);
                }
            }
            ExprKind::Grouping(inner) => self.resolve_expr(inner),
            ExprKind::Literal(_) => {}
        }
    }

    /// Walks the scope stack from innermost outward; the first scope that
    /// declares `name` tells us how many scopes out it lives. A name found
    /// in no scope is left unresolved — the interpreter treats that as a
    /// global lookup.
    fn resolve_local(&mut self, id: NodeId, name: &Token) {
        for (depth, scope) in self.scopes.iter().rev().enumerate() {
            if scope.contains_key(&name.lexeme) {
                self.locals.insert(id, depth);
                return;
            }
        }
    }

    fn begin_scope(&mut self) {
        self.scopes.push(HashMap::new());
    }

    fn end_scope(&mut self) {
        self.scopes.pop();
    }

    /// Marks `name` as declared-but-not-yet-ready in the innermost scope. A
    /// no-op at the top level, since the global scope is never tracked.
    fn declare(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), false);
        }
    }

    fn define(&mut self, name: &Token) {
        if let Some(scope) = self.scopes.last_mut() {
            scope.insert(name.lexeme.clone(), true);
        }
    }

    fn error(&mut self, token: Token, message: &str) {
        self.errors.push(ResolverError::new(token, message));
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}
