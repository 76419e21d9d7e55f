//! Resolved RPG front-end AST.
//!
//! Parsing and name resolution happen upstream; this crate only models their
//! output. Every data definition and subroutine carries a stable identity
//! assigned by the resolver, and every by-name reference carries the identity
//! it was bound to (or none, if resolution failed). The tree deserializes from
//! the JSON the resolver emits.

pub mod ast;
pub mod json;
pub mod typing;

pub use ast::*;
pub use typing::TypeQueryError;
