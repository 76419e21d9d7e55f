//! AST are trees, so Box<T> is fine

use rj_core::span::Span;
use serde::{Deserialize, Serialize};

mod expr;
mod stmt;
mod ty;

pub use expr::*;
pub use stmt::*;
pub use ty::*;

/// Identity of a data definition, stable for one resolved compilation unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct DataDefId(pub u32);

/// Identity of a subroutine, stable for one resolved compilation unit.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SubroutineId(pub u32);

/// A reference written by name in the source, plus the declaration the resolver
/// bound it to. `referred` is `None` when resolution failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReferenceByName<T> {
    pub name: String,
    pub referred: Option<T>,
}

impl<T: Copy> ReferenceByName<T> {
    pub fn resolved(name: impl Into<String>, referred: T) -> Self {
        Self {
            name: name.into(),
            referred: Some(referred),
        }
    }

    pub fn unresolved(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            referred: None,
        }
    }

    pub fn referred(&self) -> Option<T> {
        self.referred
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompilationUnit {
    #[serde(default)]
    pub data_definitions: Vec<DataDefinition>,
    /// Fields defined by a statement's result column rather than a D-spec.
    #[serde(default)]
    pub in_statement_data_definitions: Vec<InStatementDataDefinition>,
    #[serde(default)]
    pub subroutines: Vec<Subroutine>,
    #[serde(default)]
    pub main: MainBody,
    /// The `*ENTRY PLIST`, when the program declares one.
    #[serde(default)]
    pub entry_plist: Option<PlistStmt>,
}

impl CompilationUnit {
    /// Every data declaration reachable from the unit: D-spec definitions first,
    /// then in-statement definitions, each in source order.
    pub fn all_data_definitions(&self) -> impl Iterator<Item = DataDeclaration<'_>> {
        self.data_definitions
            .iter()
            .map(DataDeclaration::Definition)
            .chain(
                self.in_statement_data_definitions
                    .iter()
                    .map(DataDeclaration::InStatement),
            )
    }

    pub fn data_definition(&self, id: DataDefId) -> Option<DataDeclaration<'_>> {
        self.all_data_definitions().find(|decl| decl.id() == id)
    }

    pub fn subroutine(&self, id: SubroutineId) -> Option<&Subroutine> {
        self.subroutines.iter().find(|subroutine| subroutine.id == id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataDefinition {
    pub id: DataDefId,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RpgType,
    #[serde(default)]
    pub initialization_value: Option<Expression>,
    #[serde(default)]
    pub span: Option<Span>,
}

impl DataDefinition {
    pub fn new(id: DataDefId, name: impl Into<String>, ty: RpgType) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            initialization_value: None,
            span: None,
        }
    }

    pub fn with_initialization_value(mut self, value: Expression) -> Self {
        self.initialization_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InStatementDataDefinition {
    pub id: DataDefId,
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RpgType,
    #[serde(default)]
    pub span: Option<Span>,
}

impl InStatementDataDefinition {
    pub fn new(id: DataDefId, name: impl Into<String>, ty: RpgType) -> Self {
        Self {
            id,
            name: name.into(),
            ty,
            span: None,
        }
    }
}

/// Borrowed view over the two kinds of data declaration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DataDeclaration<'a> {
    Definition(&'a DataDefinition),
    InStatement(&'a InStatementDataDefinition),
}

impl<'a> DataDeclaration<'a> {
    pub fn id(&self) -> DataDefId {
        match self {
            DataDeclaration::Definition(def) => def.id,
            DataDeclaration::InStatement(def) => def.id,
        }
    }

    pub fn name(&self) -> &'a str {
        match self {
            DataDeclaration::Definition(def) => &def.name,
            DataDeclaration::InStatement(def) => &def.name,
        }
    }

    pub fn ty(&self) -> &'a RpgType {
        match self {
            DataDeclaration::Definition(def) => &def.ty,
            DataDeclaration::InStatement(def) => &def.ty,
        }
    }

    /// Only D-spec definitions can carry an `INZ` value.
    pub fn initialization_value(&self) -> Option<&'a Expression> {
        match self {
            DataDeclaration::Definition(def) => def.initialization_value.as_ref(),
            DataDeclaration::InStatement(_) => None,
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            DataDeclaration::Definition(def) => def.span,
            DataDeclaration::InStatement(def) => def.span,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subroutine {
    pub id: SubroutineId,
    pub name: String,
    #[serde(default)]
    pub stmts: Vec<Statement>,
    #[serde(default)]
    pub span: Option<Span>,
}

impl Subroutine {
    pub fn new(id: SubroutineId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            stmts: Vec::new(),
            span: None,
        }
    }

    pub fn with_stmts(mut self, stmts: Vec<Statement>) -> Self {
        self.stmts = stmts;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MainBody {
    #[serde(default)]
    pub stmts: Vec<Statement>,
}
