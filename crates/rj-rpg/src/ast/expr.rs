use rj_core::span::Span;
use serde::{Deserialize, Serialize};

use super::{DataDefId, ReferenceByName};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expression {
    pub kind: ExpressionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionKind {
    IntLiteral(i64),
    RealLiteral(f64),
    StringLiteral(String),
    BooleanLiteral(bool),
    DataRef(ReferenceByName<DataDefId>),
    Plus(Box<Expression>, Box<Expression>),
    Minus(Box<Expression>, Box<Expression>),
    Mult(Box<Expression>, Box<Expression>),
    Div(Box<Expression>, Box<Expression>),
    Equality(Box<Expression>, Box<Expression>),
    Different(Box<Expression>, Box<Expression>),
    LessThan(Box<Expression>, Box<Expression>),
    GreaterThan(Box<Expression>, Box<Expression>),
    Not(Box<Expression>),
    /// `target = value`, as found in the initializer of a `FOR`.
    Assignment {
        target: Box<Expression>,
        value: Box<Expression>,
    },
    /// `%DEC(value : digits : decimals)`
    Dec {
        value: Box<Expression>,
        int_digits: Box<Expression>,
        decimal_places: Box<Expression>,
    },
    /// `%CHAR(value)`
    Char(Box<Expression>),
    /// `%INT(value)`
    Int(Box<Expression>),
    /// `%TRIM(value)`
    Trim(Box<Expression>),
    /// `%LEN(value)`
    Len(Box<Expression>),
}

impl ExpressionKind {
    /// Name used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            ExpressionKind::IntLiteral(_) => "IntLiteral",
            ExpressionKind::RealLiteral(_) => "RealLiteral",
            ExpressionKind::StringLiteral(_) => "StringLiteral",
            ExpressionKind::BooleanLiteral(_) => "BooleanLiteral",
            ExpressionKind::DataRef(_) => "DataRef",
            ExpressionKind::Plus(..) => "Plus",
            ExpressionKind::Minus(..) => "Minus",
            ExpressionKind::Mult(..) => "Mult",
            ExpressionKind::Div(..) => "Div",
            ExpressionKind::Equality(..) => "Equality",
            ExpressionKind::Different(..) => "Different",
            ExpressionKind::LessThan(..) => "LessThan",
            ExpressionKind::GreaterThan(..) => "GreaterThan",
            ExpressionKind::Not(_) => "Not",
            ExpressionKind::Assignment { .. } => "Assignment",
            ExpressionKind::Dec { .. } => "%DEC",
            ExpressionKind::Char(_) => "%CHAR",
            ExpressionKind::Int(_) => "%INT",
            ExpressionKind::Trim(_) => "%TRIM",
            ExpressionKind::Len(_) => "%LEN",
        }
    }
}

impl Expression {
    pub fn new(kind: ExpressionKind) -> Self {
        Self { kind, span: None }
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExpressionKind::IntLiteral(value))
    }

    pub fn real(value: f64) -> Self {
        Self::new(ExpressionKind::RealLiteral(value))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(ExpressionKind::StringLiteral(value.into()))
    }

    pub fn data_ref(name: impl Into<String>, id: DataDefId) -> Self {
        Self::new(ExpressionKind::DataRef(ReferenceByName::resolved(name, id)))
    }

    pub fn unresolved_ref(name: impl Into<String>) -> Self {
        Self::new(ExpressionKind::DataRef(ReferenceByName::unresolved(name)))
    }

    pub fn plus(left: Expression, right: Expression) -> Self {
        Self::new(ExpressionKind::Plus(Box::new(left), Box::new(right)))
    }

    pub fn minus(left: Expression, right: Expression) -> Self {
        Self::new(ExpressionKind::Minus(Box::new(left), Box::new(right)))
    }

    pub fn mult(left: Expression, right: Expression) -> Self {
        Self::new(ExpressionKind::Mult(Box::new(left), Box::new(right)))
    }

    pub fn equality(left: Expression, right: Expression) -> Self {
        Self::new(ExpressionKind::Equality(Box::new(left), Box::new(right)))
    }

    pub fn assignment(target: Expression, value: Expression) -> Self {
        Self::new(ExpressionKind::Assignment {
            target: Box::new(target),
            value: Box::new(value),
        })
    }

    pub fn dec(value: Expression, int_digits: Expression, decimal_places: Expression) -> Self {
        Self::new(ExpressionKind::Dec {
            value: Box::new(value),
            int_digits: Box::new(int_digits),
            decimal_places: Box::new(decimal_places),
        })
    }

    pub fn char(value: Expression) -> Self {
        Self::new(ExpressionKind::Char(Box::new(value)))
    }

    pub fn trim(value: Expression) -> Self {
        Self::new(ExpressionKind::Trim(Box::new(value)))
    }
}
