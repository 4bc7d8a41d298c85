//! Abstract syntax tree definitions.
//!
//! A parsed program is simply a `Vec<Stmt>` (the grammar's `program` rule is
//! `declaration* EOF`) — there is no dedicated top-level wrapper type, since
//! unlike a function-oriented language there is no required entry point to
//! hang one off.
//!
//! # Module Structure
//!
//! - [`node_id`] - [`NodeId`], the resolver's key for variable scope depth
//! - [`expr`] - Expression nodes and kinds
//! - [`stmt`] - Statement nodes and kinds, and [`FunctionDecl`]
//!
//! # See Also
//!
//! * [`crate::parser`] - Produces the AST from tokens
//! * [`crate::resolver`] - Annotates [`Expr`] nodes with scope depth
//! * [`crate::interpreter`] - Walks the AST to evaluate it

mod expr;
mod node_id;
mod stmt;

pub use expr::{Expr, ExprKind, LiteralValue};
pub use node_id::{NodeId, NodeIdGen};
pub use stmt::{FunctionDecl, Stmt, StmtKind};
