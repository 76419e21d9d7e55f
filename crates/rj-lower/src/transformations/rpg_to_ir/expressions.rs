use rj_core::error::{Error, Result};
use rj_core::ir::{Expr, Target};
use rj_core::{bail_unsupported, trace};
use rj_rpg::{Expression, ExpressionKind};

use super::UnitLowering;

impl UnitLowering<'_> {
    pub(super) fn lower_expr(&self, expr: &Expression) -> Result<Expr> {
        match &expr.kind {
            ExpressionKind::IntLiteral(value) => Ok(Expr::IntegerLiteral(*value)),
            ExpressionKind::RealLiteral(value) => Ok(Expr::DecimalLiteral(*value)),
            ExpressionKind::StringLiteral(value) => Ok(Expr::string(value.as_str())),
            ExpressionKind::DataRef(reference) => {
                let global = self.context.global(reference, expr.span)?;
                Ok(Expr::GlobalVariableRef(global))
            }
            ExpressionKind::Plus(left, right) => {
                let left_ir = self.lower_expr(left)?;
                let right_ir = self.lower_expr(right)?;
                if self.is_string_typed(left) {
                    Ok(Expr::concat(left_ir, right_ir))
                } else {
                    Ok(Expr::sum(left_ir, right_ir))
                }
            }
            // Decimal digits of the %DEC argument are not modelled: the value is
            // coerced as an integer.
            ExpressionKind::Dec { value, .. } => {
                Ok(Expr::StringToInt(Box::new(self.lower_expr(value)?)))
            }
            ExpressionKind::Char(value) => Ok(Expr::ToString(Box::new(self.lower_expr(value)?))),
            ExpressionKind::Equality(left, right) => Ok(Expr::equality(
                self.lower_expr(left)?,
                self.lower_expr(right)?,
            )),
            other => bail_unsupported!(format!("expression {}", other.kind_name()), expr.span),
        }
    }

    /// Whether `+` with this left operand is a concatenation. An operand whose
    /// type cannot be determined counts as a string.
    fn is_string_typed(&self, expr: &Expression) -> bool {
        match expr.static_type(self.unit) {
            Ok(ty) => ty.is_string(),
            Err(err) => {
                trace!("type query failed ({}), treating operand as a string", err);
                true
            }
        }
    }

    pub(super) fn lower_target(&self, expr: &Expression) -> Result<Target> {
        match &expr.kind {
            ExpressionKind::DataRef(reference) => Ok(Target::GlobalVariable(
                self.context.global(reference, expr.span)?,
            )),
            other => Err(Error::unsupported(
                format!("target {}", other.kind_name()),
                expr.span,
            )),
        }
    }
}
