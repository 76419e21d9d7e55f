use std::fmt::{self, Formatter};

use itertools::Itertools;
use rj_core::pretty::{escape_string, pretty, PrettyCtx, PrettyOptions, PrettyPrintable};

use crate::ast::*;

/// Renders Java syntax trees as source text.
#[derive(Debug, Clone, Default)]
pub struct JavaPrinter {
    options: PrettyOptions,
}

impl JavaPrinter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: PrettyOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrettyOptions {
        &self.options
    }

    pub fn print(&self, unit: &CompilationUnit) -> String {
        pretty(unit, self.options.clone()).to_string()
    }

    pub fn print_expr(&self, expr: &Expr) -> String {
        fmt_expr(expr)
    }
}

impl PrettyPrintable for CompilationUnit {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        for (index, class) in self.types.iter().enumerate() {
            if index > 0 {
                writeln!(f)?;
            }
            class.fmt_pretty(f, ctx)?;
        }
        Ok(())
    }
}

impl PrettyPrintable for ClassDecl {
    fn fmt_pretty(&self, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
        ctx.writeln(
            f,
            format!("{}class {} {{", fmt_modifiers(&self.modifiers), self.name),
        )?;
        ctx.with_indent(|ctx| {
            for field in &self.fields {
                let init = match &field.initializer {
                    Some(value) => format!(" = {}", fmt_expr(value)),
                    None => String::new(),
                };
                ctx.writeln(
                    f,
                    format!(
                        "{}{} {}{};",
                        fmt_modifiers(&field.modifiers),
                        field.ty,
                        field.name,
                        init
                    ),
                )?;
            }
            for (index, method) in self.methods.iter().enumerate() {
                if index > 0 || !self.fields.is_empty() {
                    writeln!(f)?;
                }
                write_method(method, f, ctx)?;
            }
            Ok(())
        })?;
        ctx.writeln(f, "}")
    }
}

fn fmt_modifiers(modifiers: &[Modifier]) -> String {
    modifiers.iter().map(|modifier| format!("{} ", modifier)).join("")
}

fn write_method(method: &MethodDecl, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    let params = method
        .parameters
        .iter()
        .map(|param| format!("{} {}", param.ty, param.name))
        .join(", ");
    ctx.writeln(
        f,
        format!(
            "{}{} {}({}) {{",
            fmt_modifiers(&method.modifiers),
            method.return_type,
            method.name,
            params
        ),
    )?;
    ctx.with_indent(|ctx| write_stmts(&method.body.stmts, f, ctx))?;
    ctx.writeln(f, "}")
}

fn write_stmts(stmts: &[Stmt], f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    for stmt in stmts {
        write_stmt(stmt, f, ctx)?;
    }
    Ok(())
}

/// Contents of a braced body: a block contributes its statements, anything
/// else is written as the only statement.
fn write_body(stmt: &Stmt, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    ctx.with_indent(|ctx| match stmt {
        Stmt::Block(block) => write_stmts(&block.stmts, f, ctx),
        other => write_stmt(other, f, ctx),
    })
}

fn write_stmt(stmt: &Stmt, f: &mut Formatter<'_>, ctx: &mut PrettyCtx<'_>) -> fmt::Result {
    match stmt {
        Stmt::Expr(expr) => ctx.writeln(f, format!("{};", fmt_expr(expr))),
        Stmt::Block(block) => {
            ctx.writeln(f, "{")?;
            ctx.with_indent(|ctx| write_stmts(&block.stmts, f, ctx))?;
            ctx.writeln(f, "}")
        }
        Stmt::If(if_stmt) => write_if(if_stmt, "", f, ctx),
        Stmt::For(for_stmt) => {
            let init = for_stmt.init.iter().map(fmt_expr).join(", ");
            let compare = for_stmt.compare.as_ref().map(fmt_expr).unwrap_or_default();
            let update = for_stmt.update.iter().map(fmt_expr).join(", ");
            ctx.writeln(f, format!("for ({}; {}; {}) {{", init, compare, update))?;
            write_body(&for_stmt.body, f, ctx)?;
            ctx.writeln(f, "}")
        }
    }
}

/// `lead` is `"} else "` when this `if` continues an else-if chain.
fn write_if(
    if_stmt: &IfStmt,
    lead: &str,
    f: &mut Formatter<'_>,
    ctx: &mut PrettyCtx<'_>,
) -> fmt::Result {
    ctx.writeln(f, format!("{}if ({}) {{", lead, fmt_expr(&if_stmt.condition)))?;
    write_body(&if_stmt.then_stmt, f, ctx)?;
    match if_stmt.else_stmt.as_deref() {
        None => ctx.writeln(f, "}"),
        Some(Stmt::If(next)) => write_if(next, "} else ", f, ctx),
        Some(other) => {
            ctx.writeln(f, "} else {")?;
            write_body(other, f, ctx)?;
            ctx.writeln(f, "}")
        }
    }
}

const PREC_ASSIGN: u8 = 1;
const PREC_UNARY_PREFIX: u8 = 14;
const PREC_POSTFIX: u8 = 15;
const PREC_PRIMARY: u8 = 16;

fn binary_precedence(op: BinaryOp) -> u8 {
    match op {
        BinaryOp::Equals => 8,
        BinaryOp::LessEquals => 9,
        BinaryOp::Plus => 11,
    }
}

fn precedence(expr: &Expr) -> u8 {
    match expr {
        Expr::IntegerLiteral(value) if *value < 0 => PREC_UNARY_PREFIX,
        Expr::DoubleLiteral(value) if value.is_sign_negative() && value.is_finite() => {
            PREC_UNARY_PREFIX
        }
        Expr::Assign { .. } => PREC_ASSIGN,
        Expr::Binary { op, .. } => binary_precedence(*op),
        Expr::Unary { .. } => PREC_POSTFIX,
        _ => PREC_PRIMARY,
    }
}

fn fmt_operand(expr: &Expr, min_precedence: u8) -> String {
    let text = fmt_expr(expr);
    if precedence(expr) < min_precedence {
        format!("({})", text)
    } else {
        text
    }
}

fn fmt_integer(value: i64) -> String {
    if i32::try_from(value).is_ok() {
        value.to_string()
    } else {
        format!("{}L", value)
    }
}

fn fmt_double(value: f64) -> String {
    if value.is_nan() {
        "java.lang.Double.NaN".to_string()
    } else if value.is_infinite() {
        if value > 0.0 {
            "java.lang.Double.POSITIVE_INFINITY".to_string()
        } else {
            "java.lang.Double.NEGATIVE_INFINITY".to_string()
        }
    } else {
        format!("{:?}", value)
    }
}

fn fmt_expr(expr: &Expr) -> String {
    match expr {
        Expr::IntegerLiteral(value) => fmt_integer(*value),
        Expr::DoubleLiteral(value) => fmt_double(*value),
        Expr::StringLiteral(value) => format!("\"{}\"", escape_string(value)),
        Expr::This => "this".to_string(),
        Expr::Name(name) => name.clone(),
        Expr::FieldAccess { scope, name } => {
            format!("{}.{}", fmt_operand(scope, PREC_PRIMARY), name)
        }
        Expr::Assign { target, value } => format!(
            "{} = {}",
            fmt_operand(target, PREC_PRIMARY),
            fmt_operand(value, PREC_ASSIGN)
        ),
        Expr::Binary { op, left, right } => {
            let prec = binary_precedence(*op);
            format!(
                "{} {} {}",
                fmt_operand(left, prec),
                op.as_str(),
                fmt_operand(right, prec + 1)
            )
        }
        Expr::Unary {
            op: UnaryOp::PostfixIncrement,
            expr,
        } => format!("{}++", fmt_operand(expr, PREC_PRIMARY)),
        Expr::MethodCall { scope, name, args } => {
            let args = args.iter().map(fmt_expr).join(", ");
            match scope {
                Some(scope) => format!("{}.{}({})", fmt_operand(scope, PREC_PRIMARY), name, args),
                None => format!("{}({})", name, args),
            }
        }
    }
}
