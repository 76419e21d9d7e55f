//! Lowering from the resolved RPG AST to the IR.
//!
//! Declarations are created first (data, then subroutines) and registered in a
//! [`CorrespondenceContext`] keyed by declaration identity; only then are the
//! main body and the subroutine bodies lowered. A statement may therefore
//! reference any declaration regardless of textual order.

use rj_core::error::{Error, Result};
use rj_core::ir::{Function, GlobalVariable, Parameter, Program};
use rj_core::{debug, trace};
use rj_rpg::CompilationUnit;

use self::context::CorrespondenceContext;
use super::IrTransform;
use crate::types::rpg_type_to_ir;

mod context;
mod expressions;
mod statements;


const DIAGNOSTIC_CONTEXT: &str = "rpg_to_ir";

/// Generator for transforming a resolved compilation unit into an IR program.
///
/// The generator only carries the program name. Every call to
/// [`IrTransform::transform`] builds a fresh correspondence context, so one
/// generator may translate several units independently.
pub struct IrGenerator {
    program_name: String,
}

impl IrGenerator {
    pub fn new(program_name: impl Into<String>) -> Self {
        Self {
            program_name: program_name.into(),
        }
    }

    pub fn program_name(&self) -> &str {
        &self.program_name
    }

    pub fn transform_unit(&self, unit: &CompilationUnit) -> Result<Program> {
        debug!(
            "{}: lowering `{}` ({} data definitions, {} subroutines)",
            DIAGNOSTIC_CONTEXT,
            self.program_name,
            unit.data_definitions.len() + unit.in_statement_data_definitions.len(),
            unit.subroutines.len()
        );
        let mut lowering = UnitLowering {
            unit,
            context: CorrespondenceContext::new(),
            program: Program::new(self.program_name.as_str()),
        };
        lowering.declare_data()?;
        lowering.declare_subroutines()?;
        lowering.translate_main()?;
        lowering.translate_subroutines()?;
        debug!("{}: lowered `{}`", DIAGNOSTIC_CONTEXT, self.program_name);
        Ok(lowering.program)
    }
}

impl<'a> IrTransform<&'a CompilationUnit, Program> for IrGenerator {
    fn transform(&mut self, source: &'a CompilationUnit) -> Result<Program> {
        self.transform_unit(source)
    }
}

/// State of one translation: the unit being read, the program being built and
/// the correspondence between them.
struct UnitLowering<'u> {
    unit: &'u CompilationUnit,
    context: CorrespondenceContext,
    program: Program,
}

impl<'u> UnitLowering<'u> {
    fn declare_data(&mut self) -> Result<()> {
        debug!("{}: declaring data", DIAGNOSTIC_CONTEXT);
        let unit = self.unit;
        for declaration in unit.all_data_definitions() {
            if self.context.has_global(declaration.id()) {
                trace!("{} already declared", declaration.name());
                continue;
            }
            let ty = rpg_type_to_ir(declaration.ty()).map_err(|err| err.or_at(declaration.span()))?;
            let global = self
                .program
                .declare_global(GlobalVariable::new(declaration.name(), ty))
                .map_err(|err| err.or_at(declaration.span()))?;
            self.context.register_global(declaration.id(), global);
            trace!("declared global {} as {:?}: {}", declaration.name(), global, ty);

            if let Some(init) = declaration.initialization_value() {
                let value = self.lower_expr(init)?;
                let variable = self
                    .program
                    .global_mut(global)
                    .ok_or_else(|| Error::unresolved(declaration.name(), declaration.span()))?;
                variable.initial_value = Some(value);
            }
        }
        Ok(())
    }

    fn declare_subroutines(&mut self) -> Result<()> {
        debug!("{}: declaring subroutines", DIAGNOSTIC_CONTEXT);
        let unit = self.unit;
        for subroutine in &unit.subroutines {
            if self.context.has_function(subroutine.id) {
                trace!("{} already declared", subroutine.name);
                continue;
            }
            let function = self
                .program
                .declare_function(Function::new(subroutine.name.as_str()))
                .map_err(|err| err.or_at(subroutine.span))?;
            self.context.register_function(subroutine.id, function);
            trace!("declared function {} as {:?}", subroutine.name, function);
        }
        Ok(())
    }

    fn translate_main(&mut self) -> Result<()> {
        debug!("{}: translating main", DIAGNOSTIC_CONTEXT);
        let unit = self.unit;
        if let Some(plist) = &unit.entry_plist {
            for param in &plist.params {
                let global = self.context.global(&param.param, None)?;
                let variable = self
                    .program
                    .global(global)
                    .ok_or_else(|| Error::unresolved(param.param.name.as_str(), None))?;
                let parameter = Parameter::new(variable.name.as_str(), variable.ty);
                self.program.main_function.parameters.push(parameter);
            }
        }
        let body = self.lower_stmts(&unit.main.stmts)?;
        self.program.main_function.body = body;
        Ok(())
    }

    fn translate_subroutines(&mut self) -> Result<()> {
        debug!("{}: translating subroutines", DIAGNOSTIC_CONTEXT);
        let unit = self.unit;
        for subroutine in &unit.subroutines {
            let id = self
                .context
                .function_for(subroutine.id)
                .ok_or_else(|| Error::unresolved(subroutine.name.as_str(), subroutine.span))?;
            let body = self.lower_stmts(&subroutine.stmts)?;
            let function = self
                .program
                .function_mut(id)
                .ok_or_else(|| Error::unresolved(subroutine.name.as_str(), subroutine.span))?;
            function.body = body;
        }
        Ok(())
    }
}
