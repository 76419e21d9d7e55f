use pretty_assertions::assert_eq;
use rj_core::pretty::PrettyOptions;
use rj_core::Result;
use rj_lower::{generate, lower_to_ir, transpile};
use rj_rpg::*;

fn render(unit: &CompilationUnit, name: &str) -> Result<String> {
    Ok(generate(&transpile(unit, name)?, PrettyOptions::default()))
}

#[test]
fn single_global_renders_field_and_empty_entry_method() -> Result<()> {
    let unit = CompilationUnit {
        data_definitions: vec![DataDefinition::new(
            DataDefId(1),
            "NBR",
            RpgType::number(8, 0),
        )],
        ..CompilationUnit::default()
    };

    let expected = "\
public class Single {
    private long NBR;

    public void executeProgram() {
    }
}
";
    assert_eq!(render(&unit, "Single")?, expected);
    Ok(())
}

/// A Fibonacci program in the shape of the classic CALCFIB sample.
fn calc_fib() -> CompilationUnit {
    let ppdat = || Expression::data_ref("PPDAT", DataDefId(1));
    let nbr = || Expression::data_ref("NBR", DataDefId(2));
    let result = || Expression::data_ref("RESULT", DataDefId(3));
    let count = || Expression::data_ref("COUNT", DataDefId(4));
    let a = || Expression::data_ref("A", DataDefId(5));
    let b = || Expression::data_ref("B", DataDefId(6));

    let fib = Subroutine::new(SubroutineId(1), "FIB").with_stmts(vec![Statement::select(
        vec![
            SelectCase {
                condition: Expression::equality(nbr(), Expression::int(0)),
                body: vec![Statement::eval(result(), Expression::int(0))],
            },
            SelectCase {
                condition: Expression::equality(nbr(), Expression::int(1)),
                body: vec![Statement::eval(result(), Expression::int(1))],
            },
        ],
        Some(vec![Statement::for_loop(
            Expression::assignment(count(), Expression::int(2)),
            nbr(),
            vec![
                Statement::eval(result(), Expression::plus(a(), b())),
                Statement::eval(a(), b()),
                Statement::eval(b(), result()),
            ],
        )]),
    )]);

    CompilationUnit {
        data_definitions: vec![
            DataDefinition::new(DataDefId(1), "PPDAT", RpgType::string(8)),
            DataDefinition::new(DataDefId(2), "NBR", RpgType::number(8, 0)),
            DataDefinition::new(DataDefId(3), "RESULT", RpgType::number(8, 0))
                .with_initialization_value(Expression::int(0)),
            DataDefinition::new(DataDefId(4), "COUNT", RpgType::number(8, 0)),
            DataDefinition::new(DataDefId(5), "A", RpgType::number(8, 0))
                .with_initialization_value(Expression::int(0)),
            DataDefinition::new(DataDefId(6), "B", RpgType::number(8, 0))
                .with_initialization_value(Expression::int(1)),
        ],
        subroutines: vec![fib],
        main: MainBody {
            stmts: vec![
                Statement::eval(
                    nbr(),
                    Expression::dec(ppdat(), Expression::int(8), Expression::int(0)),
                ),
                Statement::execute("FIB", SubroutineId(1)),
                Statement::display(Expression::plus(
                    Expression::plus(
                        Expression::plus(Expression::string("FIBONACCI OF: "), Expression::char(nbr())),
                        Expression::string(" IS: "),
                    ),
                    Expression::char(result()),
                )),
            ],
        },
        entry_plist: Some(PlistStmt {
            params: vec![PlistParam {
                param: ReferenceByName::resolved("PPDAT", DataDefId(1)),
            }],
            is_entry: true,
        }),
        ..CompilationUnit::default()
    }
}

#[test]
fn calc_fib_renders_a_complete_class() -> Result<()> {
    let expected = "\
public class CalcFib {
    private java.lang.String PPDAT;
    private long NBR;
    private long RESULT = 0;
    private long COUNT;
    private long A = 0;
    private long B = 1;

    public void executeProgram(java.lang.String PPDAT) {
        this.PPDAT = PPDAT;
        this.NBR = java.lang.Long.parseLong(this.PPDAT);
        FIB();
        java.lang.System.out.println(\"FIBONACCI OF: \" + (\"\" + this.NBR) + \" IS: \" + (\"\" + this.RESULT));
    }

    private void FIB() {
        if (this.NBR == 0) {
            this.RESULT = 0;
        } else if (this.NBR == 1) {
            this.RESULT = 1;
        } else {
            for (this.COUNT = 2; this.COUNT <= this.NBR; this.COUNT++) {
                this.RESULT = this.A + this.B;
                this.A = this.B;
                this.B = this.RESULT;
            }
        }
    }
}
";
    assert_eq!(render(&calc_fib(), "CalcFib")?, expected);
    Ok(())
}

#[test]
fn ir_dump_shows_the_intermediate_program() -> Result<()> {
    let program = lower_to_ir(&calc_fib(), "CalcFib")?;
    let dump = rj_core::pretty::pretty(&program, PrettyOptions::with_indent(2)).to_string();
    assert!(dump.starts_with("ir::Program CalcFib {\n"));
    assert!(dump.contains("  fn main(PPDAT) {\n"));
    assert!(dump.contains("NBR := int(PPDAT)"));
    assert!(dump.contains("for COUNT in 2..=NBR {"));
    Ok(())
}

#[test]
fn failures_abort_without_output() {
    let mut unit = calc_fib();
    unit.main
        .stmts
        .push(Statement::new(StatementKind::Return(ReturnStmt { expression: None })));
    let err = transpile(&unit, "CalcFib").unwrap_err();
    assert!(err.is_unsupported());
    assert_eq!(err.to_string(), "Unsupported construct: statement RETURN");
}
