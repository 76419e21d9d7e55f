use std::fmt;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub types: Vec<ClassDecl>,
}

impl CompilationUnit {
    pub fn new(types: Vec<ClassDecl>) -> Self {
        Self { types }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Modifier {
    Public,
    Private,
    Static,
    Final,
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let keyword = match self {
            Modifier::Public => "public",
            Modifier::Private => "private",
            Modifier::Static => "static",
            Modifier::Final => "final",
        };
        f.write_str(keyword)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub modifiers: Vec<Modifier>,
    pub name: String,
    pub fields: Vec<FieldDecl>,
    pub methods: Vec<MethodDecl>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            modifiers: vec![Modifier::Public],
            name: name.into(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn method(&self, name: &str) -> Option<&MethodDecl> {
        self.methods.iter().find(|method| method.name == name)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|field| field.name == name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub modifiers: Vec<Modifier>,
    pub ty: JavaType,
    pub name: String,
    pub initializer: Option<Expr>,
}

impl FieldDecl {
    pub fn private(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            modifiers: vec![Modifier::Private],
            ty,
            name: name.into(),
            initializer: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MethodDecl {
    pub modifiers: Vec<Modifier>,
    pub return_type: JavaType,
    pub name: String,
    pub parameters: Vec<Parameter>,
    pub body: Block,
}

impl MethodDecl {
    /// A `void` method with no parameters and an empty body.
    pub fn void(modifiers: Vec<Modifier>, name: impl Into<String>) -> Self {
        Self {
            modifiers,
            return_type: JavaType::Void,
            name: name.into(),
            parameters: Vec::new(),
            body: Block::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub ty: JavaType,
    pub name: String,
}

impl Parameter {
    pub fn new(ty: JavaType, name: impl Into<String>) -> Self {
        Self {
            ty,
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    Long,
    Double,
    Boolean,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum JavaType {
    Primitive(PrimitiveType),
    /// Fully-qualified class type such as `java.lang.String`.
    Class(String),
    Void,
}

impl JavaType {
    pub fn class(name: impl Into<String>) -> Self {
        JavaType::Class(name.into())
    }
}

impl fmt::Display for JavaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JavaType::Primitive(PrimitiveType::Long) => f.write_str("long"),
            JavaType::Primitive(PrimitiveType::Double) => f.write_str("double"),
            JavaType::Primitive(PrimitiveType::Boolean) => f.write_str("boolean"),
            JavaType::Class(name) => f.write_str(name),
            JavaType::Void => f.write_str("void"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new(stmts: Vec<Stmt>) -> Self {
        Self { stmts }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Expr(Expr),
    If(IfStmt),
    For(ForStmt),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct IfStmt {
    pub condition: Expr,
    pub then_stmt: Box<Stmt>,
    pub else_stmt: Option<Box<Stmt>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ForStmt {
    pub init: Vec<Expr>,
    pub compare: Option<Expr>,
    pub update: Vec<Expr>,
    pub body: Box<Stmt>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Plus,
    Equals,
    LessEquals,
}

impl BinaryOp {
    pub fn as_str(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Equals => "==",
            BinaryOp::LessEquals => "<=",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    PostfixIncrement,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    IntegerLiteral(i64),
    DoubleLiteral(f64),
    StringLiteral(String),
    This,
    /// A simple or qualified name, such as `X` or `java.lang.System.out`.
    Name(String),
    FieldAccess {
        scope: Box<Expr>,
        name: String,
    },
    Assign {
        target: Box<Expr>,
        value: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    MethodCall {
        scope: Option<Box<Expr>>,
        name: String,
        args: Vec<Expr>,
    },
}

impl Expr {
    pub fn name(name: impl Into<String>) -> Self {
        Expr::Name(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::StringLiteral(value.into())
    }

    /// `this.name`
    pub fn this_field(name: impl Into<String>) -> Self {
        Expr::FieldAccess {
            scope: Box::new(Expr::This),
            name: name.into(),
        }
    }

    pub fn assign(target: Expr, value: Expr) -> Self {
        Expr::Assign {
            target: Box::new(target),
            value: Box::new(value),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn postfix_increment(expr: Expr) -> Self {
        Expr::Unary {
            op: UnaryOp::PostfixIncrement,
            expr: Box::new(expr),
        }
    }

    pub fn call(scope: Option<Expr>, name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::MethodCall {
            scope: scope.map(Box::new),
            name: name.into(),
            args,
        }
    }
}
