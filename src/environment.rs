//! Variable storage frames.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::token::Token;
use crate::value::Value;

/// A single lexical scope's variable bindings, optionally chained to an
/// enclosing scope.
///
/// Wrapped in `Rc<RefCell<_>>` by every holder (the interpreter's current
/// scope, a closure captured by a [`crate::callable::Function`]) so that a
/// closure and the scope it was created in can share mutations to the same
/// bindings — assigning to a captured variable from inside a closure must be
/// visible to the code that created it, and vice versa.
#[derive(Debug)]
pub struct Environment {
    values: HashMap<String, Value>,
    enclosing: Option<Rc<RefCell<Environment>>>,
}

/// An undefined-variable error: the name was never declared in this scope
/// chain. Kept separate from [`crate::interpreter::RuntimeError`] so this
/// module doesn't need to depend on the interpreter; callers wrap it.
#[derive(Debug, Clone, PartialEq)]
pub struct UndefinedVariable {
    pub name: String,
}

impl Environment {
    /// Creates a top-level scope with no parent (the global environment).
    pub fn new() -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            enclosing: None,
        }))
    }

    /// Creates a new scope nested inside `enclosing`.
    pub fn with_enclosing(enclosing: Rc<RefCell<Environment>>) -> Rc<RefCell<Environment>> {
        Rc::new(RefCell::new(Environment {
            values: HashMap::new(),
            enclosing: Some(enclosing),
        }))
    }

    /// Binds `name` in this scope, shadowing any binding of the same name in
    /// an enclosing scope. Unlike [`Environment::assign`], redeclaring an
    /// existing name in the same scope is allowed (`var a = 1; var a = 2;`).
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.values.insert(name.into(), value);
    }

    /// Looks up `name` starting in this scope and walking outward.
    pub fn get(&self, name: &Token) -> Result<Value, UndefinedVariable> {
        if let Some(value) = self.values.get(&name.lexeme) {
            return Ok(value.clone());
        }
        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow().get(name);
        }
        Err(UndefinedVariable {
            name: name.lexeme.clone(),
        })
    }

    /// Assigns to an existing binding of `name`, walking outward through
    /// enclosing scopes. Unlike [`Environment::define`], this fails if the
    /// name was never declared anywhere in the chain.
    pub fn assign(&mut self, name: &Token, value: Value) -> Result<(), UndefinedVariable> {
        if self.values.contains_key(&name.lexeme) {
            self.values.insert(name.lexeme.clone(), value);
            return Ok(());
        }
        if let Some(enclosing) = &self.enclosing {
            return enclosing.borrow_mut().assign(name, value);
        }
        Err(UndefinedVariable {
            name: name.lexeme.clone(),
        })
    }

    /// Looks up `name` exactly `distance` scopes out, as computed by the
    /// resolver. Panics if `distance` walks past the top of the chain — that
    /// would mean the resolver and environment chain have gotten out of
    /// sync, which is a bug rather than a recoverable runtime condition.
    pub fn get_at(this: &Rc<RefCell<Environment>>, distance: usize, name: &str) -> Value {
        Self::ancestor(this, distance)
            .borrow()
            .values
            .get(name)
            .cloned()
            .unwrap_or_else(|| panic!("resolver recorded depth {distance} for undeclared '{name}'"))
    }

    pub fn assign_at(
        this: &Rc<RefCell<Environment>>,
        distance: usize,
        name: &Token,
        value: Value,
    ) {
        Self::ancestor(this, distance)
            .borrow_mut()
            .values
            .insert(name.lexeme.clone(), value);
    }

    fn ancestor(this: &Rc<RefCell<Environment>>, distance: usize) -> Rc<RefCell<Environment>> {
        let mut env = Rc::clone(this);
        for _ in 0..distance {
            let parent = env
                .borrow()
                .enclosing
                .clone()
                .expect("resolver depth exceeds actual scope chain length");
            env = parent;
        }
        env
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenKind;

    fn token(name: &str) -> Token {
        Token::new(TokenKind::Identifier, name, 1)
    }

    #[test]
    fn defines_and_reads_a_binding() {
        let env = Environment::new();
        env.borrow_mut().define("a", Value::Number(1.0));
        assert_eq!(env.borrow().get(&token("a")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn reading_undefined_variable_is_an_error() {
        let env = Environment::new();
        assert!(env.borrow().get(&token("missing")).is_err());
    }

    #[test]
    fn child_scope_reads_through_to_parent() {
        let parent = Environment::new();
        parent.borrow_mut().define("a", Value::Number(1.0));
        let child = Environment::with_enclosing(Rc::clone(&parent));
        assert_eq!(child.borrow().get(&token("a")), Ok(Value::Number(1.0)));
    }

    #[test]
    fn assign_in_child_mutates_parent_binding() {
        let parent = Environment::new();
        parent.borrow_mut().define("a", Value::Number(1.0));
        let child = Environment::with_enclosing(Rc::clone(&parent));
        child
            .borrow_mut()
            .assign(&token("a"), Value::Number(2.0))
            .unwrap();
        assert_eq!(parent.borrow().get(&token("a")), Ok(Value::Number(2.0)));
    }

    #[test]
    fn assigning_undeclared_name_is_an_error() {
        let env = Environment::new();
        assert!(env.borrow_mut().assign(&token("a"), Value::Nil).is_err());
    }

    #[test]
    fn get_at_and_assign_at_reach_the_exact_ancestor_scope() {
        let global = Environment::new();
        let local = Environment::with_enclosing(Rc::clone(&global));
        local.borrow_mut().define("a", Value::Number(1.0));

        assert_eq!(Environment::get_at(&local, 0, "a"), Value::Number(1.0));

        Environment::assign_at(&local, 0, &token("a"), Value::Number(5.0));
        assert_eq!(Environment::get_at(&local, 0, "a"), Value::Number(5.0));
    }
}
