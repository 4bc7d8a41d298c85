//! Stable identifiers for expression nodes.
//!
//! The resolver needs a way to remember, for each variable reference or
//! assignment it visits, how many scopes out the binding lives. Rust gives
//! us no cheap, stable notion of AST node identity to key that table on, so
//! each [`Expr`](super::Expr) is minted a small integer id at parse time and
//! the resolver's scope-depth table is keyed on that instead.

use std::cell::Cell;

/// A small integer identifying one [`Expr`](super::Expr) node, unique within
/// a single parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

/// Mints [`NodeId`]s in increasing order.
///
/// Owned by the parser; every `Expr` it builds draws its id from the same
/// generator, so ids are unique across one parse but carry no meaning across
/// two different parses of the same source.
#[derive(Debug, Default)]
pub struct NodeIdGen {
    next: Cell<u32>,
}

impl NodeIdGen {
    pub fn new() -> Self {
        NodeIdGen { next: Cell::new(0) }
    }

    pub fn next_id(&self) -> NodeId {
        let id = self.next.get();
        self.next.set(id + 1);
        NodeId(id)
    }
}
