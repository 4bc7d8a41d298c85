//! Statement execution.

use std::cell::RefCell;
use std::rc::Rc;

use super::{Interpreter, Outcome};
use super::error::RuntimeError;
use crate::ast::{Stmt, StmtKind};
use crate::callable::Function;
use crate::environment::Environment;
use crate::value::Value;

impl Interpreter {
    pub(super) fn execute(&mut self, stmt: &Stmt) -> Result<Outcome, RuntimeError> {
        match &stmt.kind {
            StmtKind::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(Outcome::Normal)
            }
            StmtKind::Print(expr) => {
                let value = self.evaluate(expr)?;
                println!("{}", value.stringify());
                Ok(Outcome::Normal)
            }
            StmtKind::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.environment.borrow_mut().define(name.lexeme.clone(), value);
                Ok(Outcome::Normal)
            }
            StmtKind::Block(statements) => {
                let block_env = Environment::with_enclosing(Rc::clone(&self.environment));
                self.execute_block(statements, block_env)
            }
            StmtKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(Outcome::Normal)
                }
            }
            StmtKind::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    match self.execute(body)? {
                        Outcome::Normal => {}
                        outcome @ Outcome::Return(_) => return Ok(outcome),
                    }
                }
                Ok(Outcome::Normal)
            }
            StmtKind::Function(decl) => {
                let function = Function::new(Rc::clone(decl), Rc::clone(&self.environment));
                self.environment
                    .borrow_mut()
                    .define(decl.name.lexeme.clone(), Value::Callable(Rc::new(function)));
                Ok(Outcome::Normal)
            }
            StmtKind::Return { value, .. } => {
                let value = match value {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                Ok(Outcome::Return(value))
            }
        }
    }

    /// Executes `statements` in a freshly-scoped child of `environment`,
    /// restoring the interpreter's previous environment on every exit path —
    /// a returned value, a propagated error, or falling off the end.
    pub fn execute_block(
        &mut self,
        statements: &[Stmt],
        environment: Rc<RefCell<Environment>>,
    ) -> Result<Outcome, RuntimeError> {
        let previous = std::mem::replace(&mut self.environment, environment);

        let mut result = Ok(Outcome::Normal);
        for statement in statements {
            match self.execute(statement) {
                Ok(Outcome::Normal) => continue,
                Ok(outcome @ Outcome::Return(_)) => {
                    result = Ok(outcome);
                    break;
                }
                Err(err) => {
                    result = Err(err);
                    break;
                }
            }
        }

        self.environment = previous;
        result
    }
}
