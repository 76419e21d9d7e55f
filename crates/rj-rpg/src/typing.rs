//! Static-type queries over resolved expressions.
//!
//! Only the cases the translator needs are modelled; anything else reports
//! [`TypeQueryError::NotImplemented`] and the caller picks its own fallback.

use thiserror::Error;

use crate::ast::{CompilationUnit, Expression, ExpressionKind, RpgType};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypeQueryError {
    #[error("type of {0} expressions is not modelled")]
    NotImplemented(&'static str),
    #[error("reference to `{0}` is not resolved")]
    Unresolved(String),
    #[error("no data definition bound to `{0}`")]
    UnknownDefinition(String),
}

impl Expression {
    pub fn static_type(&self, unit: &CompilationUnit) -> Result<RpgType, TypeQueryError> {
        match &self.kind {
            ExpressionKind::IntLiteral(value) => Ok(RpgType::number(digits(*value), 0)),
            ExpressionKind::RealLiteral(value) => {
                let text = value.abs().to_string();
                let (entire, decimals) = match text.split_once('.') {
                    Some((entire, decimals)) => (entire.len(), decimals.len()),
                    None => (text.len(), 0),
                };
                Ok(RpgType::number(entire as u32, decimals as u32))
            }
            ExpressionKind::StringLiteral(value) => {
                Ok(RpgType::string(value.chars().count() as u32))
            }
            ExpressionKind::BooleanLiteral(_) => Ok(RpgType::Boolean),
            ExpressionKind::DataRef(reference) => {
                let id = reference
                    .referred()
                    .ok_or_else(|| TypeQueryError::Unresolved(reference.name.clone()))?;
                unit.data_definition(id)
                    .map(|decl| decl.ty().clone())
                    .ok_or_else(|| TypeQueryError::UnknownDefinition(reference.name.clone()))
            }
            ExpressionKind::Plus(left, right) => {
                let left_ty = left.static_type(unit)?;
                match (&left_ty, right.static_type(unit)) {
                    (
                        RpgType::String {
                            length: left_len,
                            varying,
                        },
                        Ok(RpgType::String {
                            length: right_len, ..
                        }),
                    ) => Ok(RpgType::String {
                        length: left_len.saturating_add(right_len),
                        varying: *varying,
                    }),
                    _ => Ok(left_ty),
                }
            }
            ExpressionKind::Minus(left, _) => left.static_type(unit),
            ExpressionKind::Equality(..)
            | ExpressionKind::Different(..)
            | ExpressionKind::LessThan(..)
            | ExpressionKind::GreaterThan(..)
            | ExpressionKind::Not(_) => Ok(RpgType::Boolean),
            ExpressionKind::Dec {
                int_digits,
                decimal_places,
                ..
            } => match (&int_digits.kind, &decimal_places.kind) {
                (ExpressionKind::IntLiteral(digits), ExpressionKind::IntLiteral(decimals))
                    if *digits >= *decimals && *decimals >= 0 =>
                {
                    Ok(RpgType::number(
                        (*digits - *decimals) as u32,
                        *decimals as u32,
                    ))
                }
                _ => Err(TypeQueryError::NotImplemented("%DEC")),
            },
            ExpressionKind::Char(_) | ExpressionKind::Trim(_) => Ok(RpgType::varying_string(0)),
            ExpressionKind::Len(_) => Ok(RpgType::number(10, 0)),
            other => Err(TypeQueryError::NotImplemented(other.kind_name())),
        }
    }
}

fn digits(value: i64) -> u32 {
    value.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}
