//! Tree-walking evaluator.
//!
//! Runs a resolved program directly off the AST: [`Scanner`](crate::scanner::Scanner)
//! and [`Parser`](crate::parser::Parser) produce statements, the
//! [`Resolver`](crate::resolver::Resolver) annotates variable references with
//! their lexical depth, and this module executes them against a chain of
//! [`Environment`] frames.
//!
//! Unlike the reference implementation, a `return` doesn't unwind via an
//! exception. [`Outcome`] is an ordinary return value threaded through
//! `execute`/`execute_block`: `Normal` keeps running the enclosing block,
//! `Return(value)` short-circuits every enclosing block and loop up to the
//! function call that's waiting for it.

mod error;
mod expr;
mod stmt;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

pub use error::RuntimeError;

use crate::ast::{NodeId, Stmt};
use crate::callable::Clock;
use crate::environment::Environment;
use crate::value::Value;

/// What running a statement produced: either it ran to completion, or it hit
/// a `return` carrying a value up to the enclosing function call.
#[derive(Debug)]
pub enum Outcome {
    Normal,
    Return(Value),
}

pub struct Interpreter {
    globals: Rc<RefCell<Environment>>,
    environment: Rc<RefCell<Environment>>,
    locals: HashMap<NodeId, usize>,
}

impl Interpreter {
    /// Builds an interpreter with `locals` (the resolver's variable-depth
    /// map) and a global scope pre-populated with the native `clock`.
    pub fn new(locals: HashMap<NodeId, usize>) -> Self {
        let globals = Environment::new();
        globals
            .borrow_mut()
            .define("clock", Value::Callable(Rc::new(Clock)));

        Interpreter {
            environment: Rc::clone(&globals),
            globals,
            locals,
        }
    }

    /// Runs a whole program, executing statements in order. A top-level
    /// `return` can't occur: the resolver rejects it before the interpreter
    /// ever runs.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for statement in statements {
            self.execute(statement)?;
        }
        Ok(())
    }

    /// Merges in a fresh batch of resolver output. The REPL resolves each
    /// line independently against a resolver that starts from scratch, so
    /// the resulting `NodeId`s never collide with ones from earlier lines;
    /// folding them into the same table lets one long-lived interpreter
    /// evaluate a whole REPL session as if it were one persistent program.
    pub fn extend_locals(&mut self, locals: HashMap<NodeId, usize>) {
        self.locals.extend(locals);
    }
}
