use itertools::Itertools;
use rj_core::error::Result;
use rj_core::ir::{Assignment, For, Stmt, Switch, SwitchCase};
use rj_core::span::Span;
use rj_core::{bail_shape, bail_unsupported, trace};
use rj_rpg::{ExpressionKind, ForStmt, SelectStmt, Statement, StatementKind};

use super::UnitLowering;

impl UnitLowering<'_> {
    pub(super) fn lower_stmts(&self, stmts: &[Statement]) -> Result<Vec<Stmt>> {
        let lowered: Vec<Option<Stmt>> = stmts
            .iter()
            .map(|stmt| self.lower_stmt(stmt))
            .try_collect()?;
        Ok(lowered.into_iter().flatten().collect())
    }

    /// `None` for statements with no runtime effect in the IR.
    fn lower_stmt(&self, stmt: &Statement) -> Result<Option<Stmt>> {
        let lowered = match &stmt.kind {
            StatementKind::Plist(_) | StatementKind::Set(_) => {
                trace!("dropping {}", stmt.kind.opcode());
                return Ok(None);
            }
            StatementKind::Eval(eval) => Stmt::Assignment(Assignment {
                target: self.lower_target(&eval.target)?,
                value: self.lower_expr(&eval.expression)?,
            }),
            StatementKind::ExecuteSubroutine(exsr) => {
                Stmt::ExecuteFunction(self.context.function(&exsr.subroutine, stmt.span)?)
            }
            StatementKind::Clear(clear) => Stmt::Reset(self.lower_target(&clear.value)?),
            StatementKind::Display(display) => match &display.response {
                Some(response) => Stmt::Print(self.lower_expr(response)?),
                None => bail_shape!("DSPLY", "no response expression", stmt.span),
            },
            StatementKind::Select(select) => Stmt::Switch(self.lower_select(select)?),
            StatementKind::For(for_stmt) => Stmt::For(self.lower_for(for_stmt, stmt.span)?),
            other => bail_unsupported!(format!("statement {}", other.opcode()), stmt.span),
        };
        Ok(Some(lowered))
    }

    fn lower_select(&self, select: &SelectStmt) -> Result<Switch> {
        let cases = select
            .cases
            .iter()
            .map(|case| {
                Ok(SwitchCase {
                    condition: self.lower_expr(&case.condition)?,
                    body: self.lower_stmts(&case.body)?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        let else_case = match &select.other {
            Some(other) => Some(self.lower_stmts(&other.body)?),
            None => None,
        };
        Ok(Switch { cases, else_case })
    }

    fn lower_for(&self, for_stmt: &ForStmt, span: Option<Span>) -> Result<For> {
        if for_stmt.down_to {
            bail_shape!("FOR", "DOWNTO loops are not supported", span);
        }
        if let Some(step) = &for_stmt.by_value {
            if !matches!(step.kind, ExpressionKind::IntLiteral(1)) {
                bail_shape!("FOR", "step must be the literal 1", span);
            }
        }
        let (target, min_value) = match &for_stmt.init.kind {
            ExpressionKind::Assignment { target, value } => (target, value),
            other => bail_shape!(
                "FOR",
                format!("initializer is {} rather than an assignment", other.kind_name()),
                span
            ),
        };
        Ok(For {
            variable: self.lower_target(target)?,
            min_value: self.lower_expr(min_value)?,
            max_value: self.lower_expr(&for_stmt.end_value)?,
            body: self.lower_stmts(&for_stmt.body)?,
        })
    }
}
