//! Type mapping between the three representations.
//!
//! Numbers with decimal digits become binary doubles on the Java side, so
//! fixed-point precision is not preserved.

use rj_core::error::{Error, Result};
use rj_core::ir::{Expr, Type};
use rj_java::{JavaType, PrimitiveType};
use rj_rpg::RpgType;

pub fn rpg_type_to_ir(ty: &RpgType) -> Result<Type> {
    match ty {
        RpgType::String { .. } => Ok(Type::String),
        RpgType::Number {
            decimal_digits: 0, ..
        } => Ok(Type::Integer),
        RpgType::Number { .. } => Ok(Type::Decimal),
        other => Err(Error::unsupported(format!("type {}", other), None)),
    }
}

pub fn ir_type_to_java(ty: Type) -> JavaType {
    match ty {
        Type::String => JavaType::class("java.lang.String"),
        Type::Integer => JavaType::Primitive(PrimitiveType::Long),
        Type::Decimal => JavaType::Primitive(PrimitiveType::Double),
    }
}

/// Value a reset leaves in a variable of the given type.
pub fn zero_value(ty: Type) -> Expr {
    match ty {
        Type::String => Expr::string(""),
        Type::Integer => Expr::IntegerLiteral(0),
        Type::Decimal => Expr::DecimalLiteral(0.0),
    }
}
