use rj_core::error::{Error, Result};
use rj_core::ir::{self, GlobalVarId, Target, Type};
use rj_java::{BinaryOp, Expr};

use super::ProgramLowering;

impl ProgramLowering<'_> {
    pub(super) fn lower_expr(&self, expr: &ir::Expr) -> Result<Expr> {
        let lowered = match expr {
            ir::Expr::IntegerLiteral(value) => Expr::IntegerLiteral(*value),
            ir::Expr::DecimalLiteral(value) => Expr::DoubleLiteral(*value),
            ir::Expr::StringLiteral(value) => Expr::string(value.as_str()),
            ir::Expr::StringToInt(inner) => Expr::call(
                Some(Expr::name("java.lang.Long")),
                "parseLong",
                vec![self.lower_expr(inner)?],
            ),
            ir::Expr::GlobalVariableRef(id) => self.field(*id)?,
            ir::Expr::StringConcat(left, right) | ir::Expr::Sum(left, right) => Expr::binary(
                BinaryOp::Plus,
                self.lower_expr(left)?,
                self.lower_expr(right)?,
            ),
            ir::Expr::ToString(inner) => {
                Expr::binary(BinaryOp::Plus, Expr::string(""), self.lower_expr(inner)?)
            }
            ir::Expr::Equality(left, right) => {
                let left_java = self.lower_expr(left)?;
                let right_java = self.lower_expr(right)?;
                let both_strings = left.ty(self.program) == Some(Type::String)
                    && right.ty(self.program) == Some(Type::String);
                if both_strings {
                    Expr::call(
                        Some(Expr::name("java.util.Objects")),
                        "equals",
                        vec![left_java, right_java],
                    )
                } else {
                    Expr::binary(BinaryOp::Equals, left_java, right_java)
                }
            }
        };
        Ok(lowered)
    }

    pub(super) fn lower_target(&self, target: &Target) -> Result<Expr> {
        match target {
            Target::GlobalVariable(id) => self.field(*id),
        }
    }

    /// `this.NAME` for a global variable.
    fn field(&self, id: GlobalVarId) -> Result<Expr> {
        self.program
            .global(id)
            .map(|variable| Expr::this_field(variable.name.as_str()))
            .ok_or_else(|| Error::unresolved(format!("global #{}", id.0), None))
    }
}
