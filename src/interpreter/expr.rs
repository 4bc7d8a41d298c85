//! Expression evaluation.

use super::Interpreter;
use super::error::RuntimeError;
use crate::ast::{Expr, ExprKind, LiteralValue};
use crate::environment::Environment;
use crate::token::{Token, TokenKind};
use crate::value::Value;

impl Interpreter {
    pub(super) fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        match &expr.kind {
            ExprKind::Literal(value) => Ok(literal_value(value)),
            ExprKind::Grouping(inner) => self.evaluate(inner),
            ExprKind::Unary { operator, right } => self.evaluate_unary(operator, right),
            ExprKind::Binary {
                left,
                operator,
                right,
            } => self.evaluate_binary(left, operator, right),
            ExprKind::Logical {
                left,
                operator,
                right,
            } => self.evaluate_logical(left, operator, right),
            ExprKind::Variable(name) => self.look_up_variable(name, expr),
            ExprKind::Assign { name, value } => self.evaluate_assign(name, value, expr),
            ExprKind::Call {
                callee,
                paren,
                arguments,
            } => self.evaluate_call(callee, paren, arguments),
        }
    }

    fn evaluate_unary(&mut self, operator: &Token, right: &Expr) -> Result<Value, RuntimeError> {
        let right = self.evaluate(right)?;

        match operator.kind {
            TokenKind::Minus => Ok(Value::Number(-number_operand(operator, &right)?)),
            TokenKind::Bang => Ok(Value::Bool(!right.is_truthy())),
            _ => unreachable!("parser only produces Minus/Bang unary operators"),
        }
    }

    fn evaluate_binary(
        &mut self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;
        let right = self.evaluate(right)?;

        match operator.kind {
            TokenKind::Minus => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(a - b))
            }
            TokenKind::Slash => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(a / b))
            }
            TokenKind::Star => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Number(a * b))
            }
            TokenKind::Plus => match (&left, &right) {
                (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
                (Value::String(a), Value::String(b)) => Ok(Value::String(format!("{a}{b}"))),
                _ => Err(RuntimeError::new(
                    operator.clone(),
                    "Operands must both be numbers or strings",
                )),
            },
            TokenKind::Greater => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Bool(a > b))
            }
            TokenKind::GreaterEqual => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Bool(a >= b))
            }
            TokenKind::Less => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Bool(a < b))
            }
            TokenKind::LessEqual => {
                let (a, b) = number_operands(operator, &left, &right)?;
                Ok(Value::Bool(a <= b))
            }
            TokenKind::BangEqual => Ok(Value::Bool(left != right)),
            TokenKind::EqualEqual => Ok(Value::Bool(left == right)),
            _ => unreachable!("parser only produces arithmetic/comparison/equality binary operators"),
        }
    }

    fn evaluate_logical(
        &mut self,
        left: &Expr,
        operator: &Token,
        right: &Expr,
    ) -> Result<Value, RuntimeError> {
        let left = self.evaluate(left)?;

        // Short-circuits: `or` stops at the first truthy value, `and` stops
        // at the first falsy one. Either way, the winning operand's own
        // value is returned, not a coerced `bool`.
        let short_circuits = if operator.kind == TokenKind::Or {
            left.is_truthy()
        } else {
            !left.is_truthy()
        };

        if short_circuits {
            return Ok(left);
        }

        self.evaluate(right)
    }

    fn look_up_variable(&mut self, name: &Token, expr: &Expr) -> Result<Value, RuntimeError> {
        match self.locals.get(&expr.id) {
            Some(&distance) => Ok(Environment::get_at(&self.environment, distance, &name.lexeme)),
            None => self.globals.borrow().get(name).map_err(|_| {
                RuntimeError::new(name.clone(), format!("Undefined variable '{}'.", name.lexeme))
            }),
        }
    }

    fn evaluate_assign(
        &mut self,
        name: &Token,
        value: &Expr,
        expr: &Expr,
    ) -> Result<Value, RuntimeError> {
        let value = self.evaluate(value)?;

        match self.locals.get(&expr.id) {
            Some(&distance) => {
                Environment::assign_at(&self.environment, distance, name, value.clone());
            }
            None => {
                self.globals.borrow_mut().assign(name, value.clone()).map_err(|_| {
                    RuntimeError::new(name.clone(), format!("Undefined variable '{}'.", name.lexeme))
                })?;
            }
        }

        Ok(value)
    }

    fn evaluate_call(
        &mut self,
        callee: &Expr,
        paren: &Token,
        arguments: &[Expr],
    ) -> Result<Value, RuntimeError> {
        let callee = self.evaluate(callee)?;

        let mut evaluated = Vec::with_capacity(arguments.len());
        for argument in arguments {
            evaluated.push(self.evaluate(argument)?);
        }

        let Value::Callable(callable) = callee else {
            return Err(RuntimeError::new(
                paren.clone(),
                "Can only call functions and classes.",
            ));
        };

        if evaluated.len() != callable.arity() {
            return Err(RuntimeError::new(
                paren.clone(),
                format!(
                    "Expected {} arguments but got {}.",
                    callable.arity(),
                    evaluated.len()
                ),
            ));
        }

        callable.call(self, evaluated)
    }
}

fn literal_value(value: &LiteralValue) -> Value {
    match value {
        LiteralValue::Number(n) => Value::Number(*n),
        LiteralValue::String(s) => Value::String(s.clone()),
        LiteralValue::Bool(b) => Value::Bool(*b),
        LiteralValue::Nil => Value::Nil,
    }
}

fn number_operand(operator: &Token, value: &Value) -> Result<f64, RuntimeError> {
    match value {
        Value::Number(n) => Ok(*n),
        _ => Err(RuntimeError::new(operator.clone(), "Operand must be a number.")),
    }
}

fn number_operands(operator: &Token, left: &Value, right: &Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(RuntimeError::new(operator.clone(), "Operands must be a number")),
    }
}
