//! Intermediate representation shared by both lowering passes.
//!
//! The IR is language neutral and deliberately flat: a program owns its global
//! variables and functions, and every cross reference is a typed index into the
//! owning [`Program`]. Two programs compare equal when their structure is equal,
//! which lets tests hand-build the expected IR.

use std::fmt;

use crate::error::{Error, Result};

mod pretty;

pub use pretty::*;

/// Name of the distinguished entry function inside the IR.
pub const MAIN_FUNCTION_NAME: &str = "main";

/// Index of a global variable inside [`Program::global_variables`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GlobalVarId(pub usize);

/// Index of a subroutine inside [`Program::other_functions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FunctionId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    String,
    Integer,
    Decimal,
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Type::String => "String",
            Type::Integer => "Integer",
            Type::Decimal => "Decimal",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    pub name: String,
    pub global_variables: Vec<GlobalVariable>,
    pub main_function: Function,
    pub other_functions: Vec<Function>,
}

impl Program {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            global_variables: Vec::new(),
            main_function: Function::new(MAIN_FUNCTION_NAME),
            other_functions: Vec::new(),
        }
    }

    /// Append a global variable, rejecting a name already taken by another global.
    pub fn declare_global(&mut self, variable: GlobalVariable) -> Result<GlobalVarId> {
        if self.global_by_name(&variable.name).is_some() {
            return Err(Error::shape(
                "global variable",
                format!("duplicate name `{}`", variable.name),
                None,
            ));
        }
        self.global_variables.push(variable);
        Ok(GlobalVarId(self.global_variables.len() - 1))
    }

    /// Append a subroutine function, rejecting a name already taken by another function.
    pub fn declare_function(&mut self, function: Function) -> Result<FunctionId> {
        if self.function_by_name(&function.name).is_some() {
            return Err(Error::shape(
                "function",
                format!("duplicate name `{}`", function.name),
                None,
            ));
        }
        self.other_functions.push(function);
        Ok(FunctionId(self.other_functions.len() - 1))
    }

    pub fn global(&self, id: GlobalVarId) -> Option<&GlobalVariable> {
        self.global_variables.get(id.0)
    }

    pub fn global_mut(&mut self, id: GlobalVarId) -> Option<&mut GlobalVariable> {
        self.global_variables.get_mut(id.0)
    }

    pub fn function(&self, id: FunctionId) -> Option<&Function> {
        self.other_functions.get(id.0)
    }

    pub fn function_mut(&mut self, id: FunctionId) -> Option<&mut Function> {
        self.other_functions.get_mut(id.0)
    }

    pub fn global_by_name(&self, name: &str) -> Option<GlobalVarId> {
        self.global_variables
            .iter()
            .position(|variable| variable.name == name)
            .map(GlobalVarId)
    }

    pub fn function_by_name(&self, name: &str) -> Option<FunctionId> {
        self.other_functions
            .iter()
            .position(|function| function.name == name)
            .map(FunctionId)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GlobalVariable {
    pub name: String,
    pub ty: Type,
    pub initial_value: Option<Expr>,
}

impl GlobalVariable {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            initial_value: None,
        }
    }

    pub fn with_initial_value(mut self, value: Expr) -> Self {
        self.initial_value = Some(value);
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Vec<Stmt>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parameters: Vec::new(),
            body: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub ty: Type,
}

impl Parameter {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }
}

/// An assignable location.
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    GlobalVariable(GlobalVarId),
}

impl Target {
    pub fn ty(&self, program: &Program) -> Option<Type> {
        match self {
            Target::GlobalVariable(id) => program.global(*id).map(|variable| variable.ty),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assignment(Assignment),
    /// Reset the target to the zero value of its type.
    Reset(Target),
    ExecuteFunction(FunctionId),
    Print(Expr),
    Switch(Switch),
    For(For),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assignment {
    pub target: Target,
    pub value: Expr,
}

/// Multi-way conditional; the first case whose condition holds wins.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub cases: Vec<SwitchCase>,
    pub else_case: Option<Vec<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwitchCase {
    pub condition: Expr,
    pub body: Vec<Stmt>,
}

/// Ascending counted loop with step one, both bounds inclusive.
#[derive(Debug, Clone, PartialEq)]
pub struct For {
    pub variable: Target,
    pub min_value: Expr,
    pub max_value: Expr,
    pub body: Vec<Stmt>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    DecimalLiteral(f64),
    StringLiteral(String),
    StringToInt(Box<Expr>),
    GlobalVariableRef(GlobalVarId),
    StringConcat(Box<Expr>, Box<Expr>),
    Sum(Box<Expr>, Box<Expr>),
    ToString(Box<Expr>),
    Equality(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    pub fn concat(left: Expr, right: Expr) -> Self {
        Expr::StringConcat(Box::new(left), Box::new(right))
    }

    pub fn sum(left: Expr, right: Expr) -> Self {
        Expr::Sum(Box::new(left), Box::new(right))
    }

    pub fn equality(left: Expr, right: Expr) -> Self {
        Expr::Equality(Box::new(left), Box::new(right))
    }

    /// Static IR type of the expression. `None` for comparisons, which produce
    /// a truth value outside the IR type set, and for dangling references.
    pub fn ty(&self, program: &Program) -> Option<Type> {
        match self {
            Expr::IntegerLiteral(_) | Expr::StringToInt(_) => Some(Type::Integer),
            Expr::DecimalLiteral(_) => Some(Type::Decimal),
            Expr::StringLiteral(_) | Expr::StringConcat(..) | Expr::ToString(_) => {
                Some(Type::String)
            }
            Expr::GlobalVariableRef(id) => program.global(*id).map(|variable| variable.ty),
            Expr::Sum(left, right) => match (left.ty(program)?, right.ty(program)?) {
                (Type::Decimal, _) | (_, Type::Decimal) => Some(Type::Decimal),
                _ => Some(Type::Integer),
            },
            Expr::Equality(..) => None,
        }
    }
}
