//! Callable values: user-defined functions and natives.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::ast::FunctionDecl;
use crate::environment::Environment;
use crate::interpreter::{Interpreter, Outcome, RuntimeError};
use crate::value::Value;

/// Anything that can appear on the left of a call expression.
///
/// Implemented by [`Function`] (a `fun` declaration closed over its
/// defining environment) and by native functions like [`Clock`].
pub trait Callable: fmt::Debug {
    fn arity(&self) -> usize;
    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError>;
    /// The name printed by `<fn NAME>` when a callable is stringified.
    fn name(&self) -> &str;
}

/// A user-defined function: the parsed declaration plus the environment
/// that was live when the `fun` statement executed.
///
/// The declaration is shared (`Rc<FunctionDecl>`) rather than cloned because
/// every call creates a fresh [`Environment`] but reuses the same body; the
/// closure environment is shared for the same reason two calls to the same
/// function should see each other's mutations to variables captured by
/// reference, not by snapshot.
#[derive(Debug)]
pub struct Function {
    declaration: Rc<FunctionDecl>,
    closure: Rc<RefCell<Environment>>,
}

impl Function {
    pub fn new(declaration: Rc<FunctionDecl>, closure: Rc<RefCell<Environment>>) -> Self {
        Function {
            declaration,
            closure,
        }
    }
}

impl Callable for Function {
    fn arity(&self) -> usize {
        self.declaration.params.len()
    }

    fn call(&self, interpreter: &mut Interpreter, arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let call_env = Environment::with_enclosing(Rc::clone(&self.closure));

        for (param, argument) in self.declaration.params.iter().zip(arguments) {
            call_env.borrow_mut().define(param.lexeme.clone(), argument);
        }

        match interpreter.execute_block(&self.declaration.body, call_env)? {
            Outcome::Return(value) => Ok(value),
            Outcome::Normal => Ok(Value::Nil),
        }
    }

    fn name(&self) -> &str {
        &self.declaration.name.lexeme
    }
}

/// `clock()`: the only native function this language exposes. Returns
/// seconds elapsed since the Unix epoch as a `Number`, matching the
/// reference implementation's `System.currentTimeMillis() / 1000.0`.
#[derive(Debug)]
pub struct Clock;

impl Callable for Clock {
    fn arity(&self) -> usize {
        0
    }

    fn call(&self, _interpreter: &mut Interpreter, _arguments: Vec<Value>) -> Result<Value, RuntimeError> {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system clock is before the Unix epoch");
        Ok(Value::Number(elapsed.as_secs_f64()))
    }

    fn name(&self) -> &str {
        "clock"
    }
}
