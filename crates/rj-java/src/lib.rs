//! Abstract Java syntax covering the subset the translator emits, plus a
//! renderer producing compilable source text.

pub mod ast;
pub mod printer;

pub use ast::*;
pub use printer::JavaPrinter;
