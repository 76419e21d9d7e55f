use rj_core::span::Span;
use serde::{Deserialize, Serialize};

use super::{DataDefId, Expression, ReferenceByName, SubroutineId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub kind: StatementKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Plist(PlistStmt),
    Eval(EvalStmt),
    ExecuteSubroutine(ExecuteSubroutine),
    Clear(ClearStmt),
    Display(DisplayStmt),
    Set(SetStmt),
    Select(SelectStmt),
    For(ForStmt),
    If(IfStmt),
    DoWhile(DoWhileStmt),
    Move(MoveStmt),
    Return(ReturnStmt),
    Leave,
    Iter,
}

impl StatementKind {
    /// Operation code, used to name the statement in diagnostics.
    pub fn opcode(&self) -> &'static str {
        match self {
            StatementKind::Plist(_) => "PLIST",
            StatementKind::Eval(_) => "EVAL",
            StatementKind::ExecuteSubroutine(_) => "EXSR",
            StatementKind::Clear(_) => "CLEAR",
            StatementKind::Display(_) => "DSPLY",
            StatementKind::Set(set) => match set.value_set {
                IndicatorValue::On => "SETON",
                IndicatorValue::Off => "SETOFF",
            },
            StatementKind::Select(_) => "SELECT",
            StatementKind::For(_) => "FOR",
            StatementKind::If(_) => "IF",
            StatementKind::DoWhile(_) => "DOW",
            StatementKind::Move(_) => "MOVE",
            StatementKind::Return(_) => "RETURN",
            StatementKind::Leave => "LEAVE",
            StatementKind::Iter => "ITER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlistStmt {
    pub params: Vec<PlistParam>,
    #[serde(default)]
    pub is_entry: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlistParam {
    pub param: ReferenceByName<DataDefId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalStmt {
    pub target: Expression,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecuteSubroutine {
    pub subroutine: ReferenceByName<SubroutineId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClearStmt {
    pub value: Expression,
}

/// `DSPLY factor1 response`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayStmt {
    #[serde(default)]
    pub factor1: Option<Expression>,
    #[serde(default)]
    pub response: Option<Expression>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndicatorValue {
    On,
    Off,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetStmt {
    pub value_set: IndicatorValue,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectStmt {
    pub cases: Vec<SelectCase>,
    #[serde(default)]
    pub other: Option<SelectOther>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectCase {
    pub condition: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOther {
    pub body: Vec<Statement>,
}

/// `FOR init TO end_value BY by_value` (or `DOWNTO` when `down_to` is set).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForStmt {
    pub init: Expression,
    pub end_value: Expression,
    #[serde(default)]
    pub by_value: Option<Expression>,
    #[serde(default)]
    pub down_to: bool,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IfStmt {
    pub condition: Expression,
    pub body: Vec<Statement>,
    #[serde(default)]
    pub else_body: Option<Vec<Statement>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoWhileStmt {
    pub end_expression: Expression,
    pub body: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveStmt {
    pub target: Expression,
    pub expression: Expression,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReturnStmt {
    #[serde(default)]
    pub expression: Option<Expression>,
}

impl Statement {
    pub fn new(kind: StatementKind) -> Self {
        Self { kind, span: None }
    }

    pub fn at(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn eval(target: Expression, expression: Expression) -> Self {
        Self::new(StatementKind::Eval(EvalStmt { target, expression }))
    }

    pub fn execute(name: impl Into<String>, id: SubroutineId) -> Self {
        Self::new(StatementKind::ExecuteSubroutine(ExecuteSubroutine {
            subroutine: ReferenceByName::resolved(name, id),
        }))
    }

    pub fn clear(value: Expression) -> Self {
        Self::new(StatementKind::Clear(ClearStmt { value }))
    }

    pub fn display(response: Expression) -> Self {
        Self::new(StatementKind::Display(DisplayStmt {
            factor1: None,
            response: Some(response),
        }))
    }

    pub fn select(cases: Vec<SelectCase>, other: Option<Vec<Statement>>) -> Self {
        Self::new(StatementKind::Select(SelectStmt {
            cases,
            other: other.map(|body| SelectOther { body }),
        }))
    }

    /// Ascending `FOR` with the default step.
    pub fn for_loop(init: Expression, end_value: Expression, body: Vec<Statement>) -> Self {
        Self::new(StatementKind::For(ForStmt {
            init,
            end_value,
            by_value: None,
            down_to: false,
            body,
        }))
    }
}
