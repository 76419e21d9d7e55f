use crate::pretty::{escape_string, PrettyCtx, PrettyPrintable};
use itertools::Itertools;
use std::fmt::{self, Formatter};

use super::{Expr, For, Function, Program, Stmt, Switch, Target};

impl PrettyPrintable for Program {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        ctx.writeln(f, format!("ir::Program {} {{", self.name))?;
        ctx.with_indent(|ctx| {
            for variable in &self.global_variables {
                let ty = if ctx.options.show_types {
                    format!(": {}", variable.ty)
                } else {
                    String::new()
                };
                let init = match &variable.initial_value {
                    Some(value) => format!(" = {}", fmt_expr(value, self)),
                    None => String::new(),
                };
                ctx.writeln(f, format!("global {}{}{}", variable.name, ty, init))?;
            }
            write_function(&self.main_function, self, f, ctx)?;
            for function in &self.other_functions {
                write_function(function, self, f, ctx)?;
            }
            Ok(())
        })?;
        ctx.writeln(f, "}")
    }
}

fn write_function(
    function: &Function,
    program: &Program,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    let show_types = ctx.options.show_types;
    let params = function
        .parameters
        .iter()
        .map(|param| {
            if show_types {
                format!("{}: {}", param.name, param.ty)
            } else {
                param.name.clone()
            }
        })
        .join(", ");
    ctx.writeln(f, format!("fn {}({}) {{", function.name, params))?;
    ctx.with_indent(|ctx| write_stmts(&function.body, program, f, ctx))?;
    ctx.writeln(f, "}")
}

fn write_stmts(
    stmts: &[Stmt],
    program: &Program,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    for stmt in stmts {
        write_stmt(stmt, program, f, ctx)?;
    }
    Ok(())
}

fn write_stmt(
    stmt: &Stmt,
    program: &Program,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    match stmt {
        Stmt::Assignment(assignment) => ctx.writeln(
            f,
            format!(
                "{} := {}",
                fmt_target(&assignment.target, program),
                fmt_expr(&assignment.value, program)
            ),
        ),
        Stmt::Reset(target) => ctx.writeln(f, format!("reset {}", fmt_target(target, program))),
        Stmt::ExecuteFunction(id) => {
            let name = program
                .function(*id)
                .map(|function| function.name.clone())
                .unwrap_or_else(|| format!("<function#{}>", id.0));
            ctx.writeln(f, format!("call {}()", name))
        }
        Stmt::Print(value) => ctx.writeln(f, format!("print {}", fmt_expr(value, program))),
        Stmt::Switch(switch) => write_switch(switch, program, f, ctx),
        Stmt::For(for_stmt) => write_for(for_stmt, program, f, ctx),
    }
}

fn write_switch(
    switch: &Switch,
    program: &Program,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    ctx.writeln(f, "switch {")?;
    ctx.with_indent(|ctx| {
        for case in &switch.cases {
            ctx.writeln(f, format!("case {} {{", fmt_expr(&case.condition, program)))?;
            ctx.with_indent(|ctx| write_stmts(&case.body, program, f, ctx))?;
            ctx.writeln(f, "}")?;
        }
        if let Some(body) = &switch.else_case {
            ctx.writeln(f, "else {")?;
            ctx.with_indent(|ctx| write_stmts(body, program, f, ctx))?;
            ctx.writeln(f, "}")?;
        }
        Ok(())
    })?;
    ctx.writeln(f, "}")
}

fn write_for(
    for_stmt: &For,
    program: &Program,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    ctx.writeln(
        f,
        format!(
            "for {} in {}..={} {{",
            fmt_target(&for_stmt.variable, program),
            fmt_expr(&for_stmt.min_value, program),
            fmt_expr(&for_stmt.max_value, program)
        ),
    )?;
    ctx.with_indent(|ctx| write_stmts(&for_stmt.body, program, f, ctx))?;
    ctx.writeln(f, "}")
}

fn fmt_target(target: &Target, program: &Program) -> String {
    match target {
        Target::GlobalVariable(id) => global_name(id.0, program),
    }
}

fn global_name(index: usize, program: &Program) -> String {
    program
        .global_variables
        .get(index)
        .map(|variable| variable.name.clone())
        .unwrap_or_else(|| format!("<global#{}>", index))
}

/// Render an IR expression on one line.
pub fn fmt_expr(expr: &Expr, program: &Program) -> String {
    match expr {
        Expr::IntegerLiteral(value) => value.to_string(),
        Expr::DecimalLiteral(value) => format!("{:?}", value),
        Expr::StringLiteral(value) => format!("\"{}\"", escape_string(value)),
        Expr::StringToInt(inner) => format!("int({})", fmt_expr(inner, program)),
        Expr::GlobalVariableRef(id) => global_name(id.0, program),
        Expr::StringConcat(left, right) => format!(
            "({} ++ {})",
            fmt_expr(left, program),
            fmt_expr(right, program)
        ),
        Expr::Sum(left, right) => format!(
            "({} + {})",
            fmt_expr(left, program),
            fmt_expr(right, program)
        ),
        Expr::ToString(inner) => format!("str({})", fmt_expr(inner, program)),
        Expr::Equality(left, right) => format!(
            "({} == {})",
            fmt_expr(left, program),
            fmt_expr(right, program)
        ),
    }
}
