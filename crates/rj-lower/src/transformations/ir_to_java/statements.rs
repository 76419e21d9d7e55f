use itertools::Itertools;
use rj_core::error::{Error, Result};
use rj_core::ir::{self, Switch};
use rj_java::{BinaryOp, Block, Expr, ForStmt, IfStmt, Stmt};

use super::ProgramLowering;
use crate::types::zero_value;

impl ProgramLowering<'_> {
    pub(super) fn lower_stmts(&self, stmts: &[ir::Stmt]) -> Result<Vec<Stmt>> {
        stmts.iter().map(|stmt| self.lower_stmt(stmt)).try_collect()
    }

    fn lower_block(&self, stmts: &[ir::Stmt]) -> Result<Stmt> {
        Ok(Stmt::Block(Block::new(self.lower_stmts(stmts)?)))
    }

    fn lower_stmt(&self, stmt: &ir::Stmt) -> Result<Stmt> {
        let lowered = match stmt {
            ir::Stmt::Assignment(assignment) => Stmt::Expr(Expr::assign(
                self.lower_target(&assignment.target)?,
                self.lower_expr(&assignment.value)?,
            )),
            ir::Stmt::Reset(target) => {
                let ty = target
                    .ty(self.program)
                    .ok_or_else(|| Error::unresolved("reset target", None))?;
                Stmt::Expr(Expr::assign(
                    self.lower_target(target)?,
                    self.lower_expr(&zero_value(ty))?,
                ))
            }
            ir::Stmt::ExecuteFunction(id) => {
                let function = self
                    .program
                    .function(*id)
                    .ok_or_else(|| Error::unresolved(format!("function #{}", id.0), None))?;
                Stmt::Expr(Expr::call(None, function.name.as_str(), vec![]))
            }
            ir::Stmt::Print(value) => Stmt::Expr(Expr::call(
                Some(Expr::name("java.lang.System.out")),
                "println",
                vec![self.lower_expr(value)?],
            )),
            ir::Stmt::Switch(switch) => self.lower_switch(switch)?,
            ir::Stmt::For(for_stmt) => {
                let variable = self.lower_target(&for_stmt.variable)?;
                Stmt::For(ForStmt {
                    init: vec![Expr::assign(
                        variable.clone(),
                        self.lower_expr(&for_stmt.min_value)?,
                    )],
                    compare: Some(Expr::binary(
                        BinaryOp::LessEquals,
                        variable.clone(),
                        self.lower_expr(&for_stmt.max_value)?,
                    )),
                    update: vec![Expr::postfix_increment(variable)],
                    body: Box::new(self.lower_block(&for_stmt.body)?),
                })
            }
        };
        Ok(lowered)
    }

    /// Cases become an `if` / `else if` chain in source order. With no
    /// cases the default body (or nothing) is emitted as a plain block.
    fn lower_switch(&self, switch: &Switch) -> Result<Stmt> {
        let branches: Vec<(Expr, Stmt)> = switch
            .cases
            .iter()
            .map(|case| Ok((self.lower_expr(&case.condition)?, self.lower_block(&case.body)?)))
            .collect::<Result<_>>()?;
        let mut tail = match &switch.else_case {
            Some(body) => Some(self.lower_block(body)?),
            None => None,
        };
        for (condition, then_stmt) in branches.into_iter().rev() {
            tail = Some(Stmt::If(IfStmt {
                condition,
                then_stmt: Box::new(then_stmt),
                else_stmt: tail.map(Box::new),
            }));
        }
        Ok(tail.unwrap_or_else(|| Stmt::Block(Block::default())))
    }
}
