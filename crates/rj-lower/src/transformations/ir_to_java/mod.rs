//! Lowering from the IR to a Java syntax tree.
//!
//! The program becomes one class: globals become private fields, the main
//! function becomes the public entry method and every subroutine a private
//! zero-argument method.

use rj_core::error::Result;
use rj_core::ir::{Function, Program};
use rj_core::{debug, trace};
use rj_java::{ClassDecl, CompilationUnit, Expr, FieldDecl, MethodDecl, Modifier, Parameter, Stmt};

use super::IrTransform;
use crate::types::ir_type_to_java;

mod expressions;
mod statements;

#[cfg(test)]
mod tests;

/// Name of the public method that runs the translated program.
pub const ENTRY_METHOD_NAME: &str = "executeProgram";

const DIAGNOSTIC_CONTEXT: &str = "ir_to_java";

#[derive(Debug, Default)]
pub struct JavaGenerator;

impl JavaGenerator {
    pub fn new() -> Self {
        Self
    }

    pub fn transform_program(&self, program: &Program) -> Result<CompilationUnit> {
        debug!("{}: lowering `{}`", DIAGNOSTIC_CONTEXT, program.name);
        let lowering = ProgramLowering { program };
        let mut class = ClassDecl::new(program.name.as_str());

        for variable in &program.global_variables {
            let mut field = FieldDecl::private(ir_type_to_java(variable.ty), variable.name.as_str());
            if let Some(value) = &variable.initial_value {
                field.initializer = Some(lowering.lower_expr(value)?);
            }
            trace!("field {} {}", field.ty, field.name);
            class.fields.push(field);
        }

        class.methods.push(lowering.lower_main(&program.main_function)?);
        for function in &program.other_functions {
            let mut method = MethodDecl::void(vec![Modifier::Private], function.name.as_str());
            method.body.stmts = lowering.lower_stmts(&function.body)?;
            trace!("method {}", method.name);
            class.methods.push(method);
        }

        Ok(CompilationUnit::new(vec![class]))
    }
}

impl<'a> IrTransform<&'a Program, CompilationUnit> for JavaGenerator {
    fn transform(&mut self, source: &'a Program) -> Result<CompilationUnit> {
        self.transform_program(source)
    }
}

struct ProgramLowering<'p> {
    program: &'p Program,
}

impl ProgramLowering<'_> {
    /// Parameters of the entry method are copied into the same-named fields
    /// before the body runs.
    fn lower_main(&self, main: &Function) -> Result<MethodDecl> {
        let mut method = MethodDecl::void(vec![Modifier::Public], ENTRY_METHOD_NAME);
        for param in &main.parameters {
            method
                .parameters
                .push(Parameter::new(ir_type_to_java(param.ty), param.name.as_str()));
            method.body.stmts.push(Stmt::Expr(Expr::assign(
                Expr::this_field(param.name.as_str()),
                Expr::name(param.name.as_str()),
            )));
        }
        method.body.stmts.extend(self.lower_stmts(&main.body)?);
        Ok(method)
    }
}
