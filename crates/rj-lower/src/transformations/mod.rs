pub mod ir_to_java;
pub mod rpg_to_ir;

pub use ir_to_java::*;
pub use rpg_to_ir::*;

use rj_core::Result;

/// A lowering pass from one program representation to the next.
pub trait IrTransform<Source, Target> {
    fn transform(&mut self, source: Source) -> Result<Target>;
}
