//! Recursive-descent parser.
//!
//! # Overview
//!
//! Builds an AST from the scanner's token stream. Like the scanner, the
//! parser is total: a malformed declaration is recorded as a [`ParseError`]
//! rather than aborting the parse, and the parser resynchronizes at the next
//! likely statement boundary before continuing, so a single pass can surface
//! more than one syntax error.
//!
//! # Grammar
//!
//! ```text
//! program     → declaration* EOF
//! declaration → funDecl | varDecl | statement
//! funDecl     → "fun" function
//! function    → IDENTIFIER "(" parameters? ")" block
//! parameters  → IDENTIFIER ( "," IDENTIFIER )*
//! varDecl     → "var" IDENTIFIER ( "=" expression )? ";"
//! statement   → exprStmt | forStmt | ifStmt | printStmt
//!             | returnStmt | whileStmt | block
//! exprStmt    → expression ";"
//! forStmt     → "for" "(" ( varDecl | exprStmt | ";" )
//!               expression? ";" expression? ")" statement
//! ifStmt      → "if" "(" expression ")" statement ( "else" statement )?
//! printStmt   → "print" expression ";"
//! returnStmt  → "return" expression? ";"
//! whileStmt   → "while" "(" expression ")" statement
//! block       → "{" declaration* "}"
//!
//! expression  → assignment
//! assignment  → IDENTIFIER "=" assignment | logic_or
//! logic_or    → logic_and ( "or" logic_and )*
//! logic_and   → equality ( "and" equality )*
//! equality    → comparison ( ( "!=" | "==" ) comparison )*
//! comparison  → term ( ( ">" | ">=" | "<" | "<=" ) term )*
//! term        → factor ( ( "-" | "+" ) factor )*
//! factor      → unary ( ( "/" | "*" ) unary )*
//! unary       → ( "!" | "-" ) unary | call
//! call        → primary ( "(" arguments? ")" )*
//! arguments   → expression ( "," expression )*
//! primary     → NUMBER | STRING | "true" | "false" | "nil"
//!             | "(" expression ")" | IDENTIFIER
//! ```
//!
//! # Module Structure
//!
//! - [`error`] - [`ParseError`]
//! - `helpers` - Token navigation, `expect`/`consume`, synchronization
//! - `expr` - Expression parsing (precedence cascade)
//! - `stmt` - Statement and declaration parsing
//!
//! # See Also
//!
//! * [`crate::scanner`] - Produces the token stream
//! * [`crate::ast`] - Defines the AST types produced here
//! * [`crate::resolver`] - Consumes the AST next

mod error;
mod expr;
mod helpers;
mod stmt;

#[cfg(test)]
mod tests;

pub use error::ParseError;

use crate::ast::{Expr, ExprKind, NodeIdGen, Stmt};
use crate::token::Token;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    ids: NodeIdGen,
    errors: Vec<ParseError>,
}

impl Parser {
    /// Creates a new parser from a token stream.
    ///
    /// # Panics
    ///
    /// Panics if `tokens` is empty; the scanner always appends an `Eof`
    /// token, so this only fires if a caller builds a stream by hand.
    pub fn new(tokens: Vec<Token>) -> Self {
        assert!(!tokens.is_empty(), "token stream must end in Eof");
        Parser {
            tokens,
            pos: 0,
            ids: NodeIdGen::new(),
            errors: Vec::new(),
        }
    }

    /// Parses the entire token stream into a program.
    ///
    /// Always returns whatever statements it managed to parse, alongside
    /// every syntax error encountered (in source order).
    pub fn parse(mut self) -> (Vec<Stmt>, Vec<ParseError>) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            match self.declaration() {
                Ok(stmt) => statements.push(stmt),
                Err(err) => {
                    self.errors.push(err);
                    self.synchronize();
                }
            }
        }

        (statements, self.errors)
    }

    /// Wraps `kind` in a fresh [`NodeId`](crate::ast::NodeId).
    fn node(&self, kind: ExprKind) -> Expr {
        Expr::new(self.ids.next_id(), kind)
    }
}
