//! A tree-walking interpreter for a small dynamically-typed scripting
//! language: C-like statements, first-class functions and closures, and
//! lexically-scoped variables.
//!
//! # Modules
//!
//! - [`token`] - Token types and source location tracking
//! - [`scanner`] - Lexical analysis (tokenization)
//! - [`ast`] - Abstract syntax tree definitions
//! - [`parser`] - Recursive descent parser
//! - [`resolver`] - Static lexical scope resolution
//! - [`value`] - Runtime value representation
//! - [`environment`] - Variable storage frames
//! - [`callable`] - Functions and native callables
//! - [`interpreter`] - Tree-walking evaluator
//! - [`session`] - Error accounting and exit-code decisions
//!
//! The CLI binary additionally has its own `driver` and `diagnostics`
//! modules that orchestrate this library's pipeline and render its errors;
//! they aren't part of the library surface, the same way the original
//! compiler kept build orchestration out of its library crate.
//!
//! # Example
//!
//! ```no_run
//! use loxrs::scanner::Scanner;
//! use loxrs::parser::Parser;
//! use loxrs::resolver::Resolver;
//! use loxrs::interpreter::Interpreter;
//!
//! let source = "print \"Hello, world!\";";
//!
//! let (tokens, scan_errors) = Scanner::new(source).scan_tokens();
//! assert!(scan_errors.is_empty());
//!
//! let (statements, parse_errors) = Parser::new(tokens).parse();
//! assert!(parse_errors.is_empty());
//!
//! let (locals, resolve_errors) = Resolver::new().resolve(&statements);
//! assert!(resolve_errors.is_empty());
//!
//! Interpreter::new(locals).interpret(&statements).expect("runtime error");
//! ```

pub mod ast;
pub mod callable;
pub mod environment;
pub mod interpreter;
pub mod parser;
pub mod resolver;
pub mod scanner;
pub mod session;
pub mod token;
pub mod value;
