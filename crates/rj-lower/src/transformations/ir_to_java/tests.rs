use super::*;
use pretty_assertions::assert_eq;
use rj_core::ir::{self, GlobalVarId, Type};
use rj_java::{BinaryOp, Block, ForStmt, IfStmt, JavaType, PrimitiveType};

fn lower(program: &Program) -> Result<ClassDecl> {
    let mut unit = JavaGenerator::new().transform(program)?;
    Ok(unit.types.remove(0))
}

fn print(text: &str) -> Stmt {
    Stmt::Expr(Expr::call(
        Some(Expr::name("java.lang.System.out")),
        "println",
        vec![Expr::string(text)],
    ))
}

fn program_with(globals: Vec<ir::GlobalVariable>) -> Result<Program> {
    let mut program = Program::new("Test");
    for variable in globals {
        program.declare_global(variable)?;
    }
    Ok(program)
}

#[test]
fn globals_become_private_fields() -> Result<()> {
    let program = program_with(vec![
        ir::GlobalVariable::new("NBR", Type::Integer).with_initial_value(ir::Expr::IntegerLiteral(0)),
        ir::GlobalVariable::new("MSG", Type::String),
        ir::GlobalVariable::new("RATE", Type::Decimal),
    ])?;

    let class = lower(&program)?;
    let mut nbr = FieldDecl::private(JavaType::Primitive(PrimitiveType::Long), "NBR");
    nbr.initializer = Some(Expr::IntegerLiteral(0));
    assert_eq!(
        class.fields,
        vec![
            nbr,
            FieldDecl::private(JavaType::class("java.lang.String"), "MSG"),
            FieldDecl::private(JavaType::Primitive(PrimitiveType::Double), "RATE"),
        ]
    );
    assert_eq!(class.name, "Test");
    assert_eq!(
        class.methods,
        vec![MethodDecl::void(vec![Modifier::Public], ENTRY_METHOD_NAME)]
    );
    Ok(())
}

#[test]
fn entry_parameters_are_copied_into_fields() -> Result<()> {
    let mut program = program_with(vec![ir::GlobalVariable::new("NBR", Type::Integer)])?;
    program
        .main_function
        .parameters
        .push(ir::Parameter::new("NBR", Type::Integer));
    program
        .main_function
        .body
        .push(ir::Stmt::Print(ir::Expr::GlobalVariableRef(GlobalVarId(0))));

    let class = lower(&program)?;
    let main = class.method(ENTRY_METHOD_NAME).cloned();
    let mut expected = MethodDecl::void(vec![Modifier::Public], ENTRY_METHOD_NAME);
    expected.parameters = vec![Parameter::new(
        JavaType::Primitive(PrimitiveType::Long),
        "NBR",
    )];
    expected.body.stmts = vec![
        Stmt::Expr(Expr::assign(Expr::this_field("NBR"), Expr::name("NBR"))),
        Stmt::Expr(Expr::call(
            Some(Expr::name("java.lang.System.out")),
            "println",
            vec![Expr::this_field("NBR")],
        )),
    ];
    assert_eq!(main, Some(expected));
    Ok(())
}

#[test]
fn subroutines_become_private_methods_called_without_arguments() -> Result<()> {
    let mut program = Program::new("Test");
    let fib = program.declare_function(ir::Function::new("FIB"))?;
    program.main_function.body.push(ir::Stmt::ExecuteFunction(fib));

    let class = lower(&program)?;
    assert_eq!(
        class.methods[0].body.stmts,
        vec![Stmt::Expr(Expr::call(None, "FIB", vec![]))]
    );
    assert_eq!(
        class.methods[1],
        MethodDecl::void(vec![Modifier::Private], "FIB")
    );
    Ok(())
}

#[test]
fn switch_becomes_else_if_chain() -> Result<()> {
    let mut program = program_with(vec![ir::GlobalVariable::new("X", Type::Integer)])?;
    let x = || ir::Expr::GlobalVariableRef(GlobalVarId(0));
    program.main_function.body.push(ir::Stmt::Switch(ir::Switch {
        cases: vec![
            ir::SwitchCase {
                condition: ir::Expr::equality(x(), ir::Expr::IntegerLiteral(1)),
                body: vec![ir::Stmt::Print(ir::Expr::string("one"))],
            },
            ir::SwitchCase {
                condition: ir::Expr::equality(x(), ir::Expr::IntegerLiteral(2)),
                body: vec![ir::Stmt::Print(ir::Expr::string("two"))],
            },
        ],
        else_case: Some(vec![ir::Stmt::Print(ir::Expr::string("many"))]),
    }));

    let class = lower(&program)?;
    let condition = |value: i64| {
        Expr::binary(
            BinaryOp::Equals,
            Expr::this_field("X"),
            Expr::IntegerLiteral(value),
        )
    };
    let block = |text: &str| Stmt::Block(Block::new(vec![print(text)]));
    let expected = Stmt::If(IfStmt {
        condition: condition(1),
        then_stmt: Box::new(block("one")),
        else_stmt: Some(Box::new(Stmt::If(IfStmt {
            condition: condition(2),
            then_stmt: Box::new(block("two")),
            else_stmt: Some(Box::new(block("many"))),
        }))),
    });
    assert_eq!(class.methods[0].body.stmts, vec![expected]);
    Ok(())
}

#[test]
fn switch_without_cases_is_a_plain_block() -> Result<()> {
    let mut program = Program::new("Test");
    program.main_function.body.push(ir::Stmt::Switch(ir::Switch {
        cases: vec![],
        else_case: Some(vec![ir::Stmt::Print(ir::Expr::string("always"))]),
    }));
    program.main_function.body.push(ir::Stmt::Switch(ir::Switch {
        cases: vec![],
        else_case: None,
    }));

    let class = lower(&program)?;
    assert_eq!(
        class.methods[0].body.stmts,
        vec![
            Stmt::Block(Block::new(vec![print("always")])),
            Stmt::Block(Block::default()),
        ]
    );
    Ok(())
}

#[test]
fn counted_loop_increments_its_variable() -> Result<()> {
    let mut program = program_with(vec![ir::GlobalVariable::new("I", Type::Integer)])?;
    let i = GlobalVarId(0);
    program.main_function.body.push(ir::Stmt::For(ir::For {
        variable: ir::Target::GlobalVariable(i),
        min_value: ir::Expr::IntegerLiteral(1),
        max_value: ir::Expr::IntegerLiteral(10),
        body: vec![ir::Stmt::Print(ir::Expr::GlobalVariableRef(i))],
    }));

    let class = lower(&program)?;
    let field = || Expr::this_field("I");
    let expected = Stmt::For(ForStmt {
        init: vec![Expr::assign(field(), Expr::IntegerLiteral(1))],
        compare: Some(Expr::binary(
            BinaryOp::LessEquals,
            field(),
            Expr::IntegerLiteral(10),
        )),
        update: vec![Expr::postfix_increment(field())],
        body: Box::new(Stmt::Block(Block::new(vec![Stmt::Expr(Expr::call(
            Some(Expr::name("java.lang.System.out")),
            "println",
            vec![field()],
        ))]))),
    });
    assert_eq!(class.methods[0].body.stmts, vec![expected]);
    Ok(())
}

#[test]
fn reset_assigns_the_zero_value_of_the_type() -> Result<()> {
    let mut program = program_with(vec![
        ir::GlobalVariable::new("MSG", Type::String),
        ir::GlobalVariable::new("NBR", Type::Integer),
        ir::GlobalVariable::new("RATE", Type::Decimal),
    ])?;
    for index in 0..3 {
        program
            .main_function
            .body
            .push(ir::Stmt::Reset(ir::Target::GlobalVariable(GlobalVarId(index))));
    }

    let class = lower(&program)?;
    assert_eq!(
        class.methods[0].body.stmts,
        vec![
            Stmt::Expr(Expr::assign(Expr::this_field("MSG"), Expr::string(""))),
            Stmt::Expr(Expr::assign(Expr::this_field("NBR"), Expr::IntegerLiteral(0))),
            Stmt::Expr(Expr::assign(Expr::this_field("RATE"), Expr::DoubleLiteral(0.0))),
        ]
    );
    Ok(())
}

#[test]
fn expressions_map_to_java_operators() -> Result<()> {
    let program = program_with(vec![
        ir::GlobalVariable::new("MSG", Type::String),
        ir::GlobalVariable::new("NBR", Type::Integer),
    ])?;
    let msg = || ir::Expr::GlobalVariableRef(GlobalVarId(0));
    let nbr = || ir::Expr::GlobalVariableRef(GlobalVarId(1));
    let lowering = ProgramLowering { program: &program };

    assert_eq!(
        lowering.lower_expr(&ir::Expr::ToString(Box::new(nbr())))?,
        Expr::binary(BinaryOp::Plus, Expr::string(""), Expr::this_field("NBR"))
    );
    assert_eq!(
        lowering.lower_expr(&ir::Expr::StringToInt(Box::new(msg())))?,
        Expr::call(
            Some(Expr::name("java.lang.Long")),
            "parseLong",
            vec![Expr::this_field("MSG")]
        )
    );
    assert_eq!(
        lowering.lower_expr(&ir::Expr::equality(msg(), ir::Expr::string("hi")))?,
        Expr::call(
            Some(Expr::name("java.util.Objects")),
            "equals",
            vec![Expr::this_field("MSG"), Expr::string("hi")]
        )
    );
    assert_eq!(
        lowering.lower_expr(&ir::Expr::equality(nbr(), ir::Expr::IntegerLiteral(3)))?,
        Expr::binary(
            BinaryOp::Equals,
            Expr::this_field("NBR"),
            Expr::IntegerLiteral(3)
        )
    );
    Ok(())
}

#[test]
fn parsed_numbers_compare_as_primitive_values() -> Result<()> {
    let program = program_with(vec![
        ir::GlobalVariable::new("A", Type::String),
        ir::GlobalVariable::new("B", Type::String),
    ])?;
    let parsed = |id: usize| ir::Expr::StringToInt(Box::new(ir::Expr::GlobalVariableRef(GlobalVarId(id))));
    let lowering = ProgramLowering { program: &program };

    let parse_long = |field: &str| {
        Expr::call(
            Some(Expr::name("java.lang.Long")),
            "parseLong",
            vec![Expr::this_field(field)],
        )
    };
    assert_eq!(
        lowering.lower_expr(&ir::Expr::equality(parsed(0), parsed(1)))?,
        Expr::binary(BinaryOp::Equals, parse_long("A"), parse_long("B"))
    );
    Ok(())
}

#[test]
fn dangling_references_are_unresolved() {
    let mut program = Program::new("Test");
    program
        .main_function
        .body
        .push(ir::Stmt::ExecuteFunction(ir::FunctionId(4)));
    assert!(lower(&program).unwrap_err().is_unresolved());

    let mut program = Program::new("Test");
    program
        .main_function
        .body
        .push(ir::Stmt::Print(ir::Expr::GlobalVariableRef(GlobalVarId(2))));
    assert!(lower(&program).unwrap_err().is_unresolved());
}
