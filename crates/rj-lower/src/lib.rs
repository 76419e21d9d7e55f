//! The two lowering passes of the translator: resolved RPG to IR, and IR to a
//! Java syntax tree.

pub mod transformations;
pub mod types;

pub use transformations::*;

use rj_core::ir::Program;
use rj_core::pretty::PrettyOptions;
use rj_core::Result;
use rj_java::JavaPrinter;

/// Lower a resolved compilation unit into an IR program named `name`.
pub fn lower_to_ir(unit: &rj_rpg::CompilationUnit, name: &str) -> Result<Program> {
    IrGenerator::new(name).transform(unit)
}

/// Lower an IR program into a Java compilation unit holding one class.
pub fn lower_to_java(program: &Program) -> Result<rj_java::CompilationUnit> {
    JavaGenerator::new().transform(program)
}

/// Run both passes. Either pass failing aborts the whole translation.
pub fn transpile(unit: &rj_rpg::CompilationUnit, name: &str) -> Result<rj_java::CompilationUnit> {
    let program = lower_to_ir(unit, name)?;
    lower_to_java(&program)
}

/// Render a Java compilation unit as source text.
pub fn generate(unit: &rj_java::CompilationUnit, options: PrettyOptions) -> String {
    JavaPrinter::with_options(options).print(unit)
}
