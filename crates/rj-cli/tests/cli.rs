//! Integration tests for the translate command and the `rj` binary

use std::fs;
use std::path::Path;
use std::process::Command;

use pretty_assertions::assert_eq;
use rj_cli::cli::CliConfig;
use rj_cli::commands::{translate_command, EmitKind, TranslateArgs};
use rj_cli::CliError;
use rj_rpg::json::write_unit_to_file;
use rj_rpg::*;
use tempfile::TempDir;

fn hello_unit() -> CompilationUnit {
    let msg = || Expression::data_ref("MSG", DataDefId(1));
    CompilationUnit {
        data_definitions: vec![DataDefinition::new(DataDefId(1), "MSG", RpgType::string(12))
            .with_initialization_value(Expression::string("Hello"))],
        subroutines: vec![Subroutine::new(SubroutineId(1), "GREET").with_stmts(vec![
            Statement::eval(msg(), Expression::plus(msg(), Expression::string(" world"))),
            Statement::display(msg()),
        ])],
        main: MainBody {
            stmts: vec![Statement::execute("GREET", SubroutineId(1))],
        },
        ..CompilationUnit::default()
    }
}

fn write_input(dir: &Path, file_name: &str, unit: &CompilationUnit) -> std::path::PathBuf {
    let path = dir.join(file_name);
    write_unit_to_file(&path, unit).unwrap();
    path
}

fn args(input: std::path::PathBuf) -> TranslateArgs {
    TranslateArgs {
        input,
        name: None,
        emit: EmitKind::Java,
    }
}

#[test]
fn test_translate_renders_java_named_after_input() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "HELLO.json", &hello_unit());

    let output = translate_command(&args(input), &CliConfig::default()).unwrap();

    let expected = "\
public class Hello {
    private java.lang.String MSG = \"Hello\";

    public void executeProgram() {
        GREET();
    }

    private void GREET() {
        this.MSG = this.MSG + \" world\";
        java.lang.System.out.println(this.MSG);
    }
}
";
    assert_eq!(output, expected);
}

#[test]
fn test_translate_honours_name_and_indent() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "HELLO.json", &hello_unit());
    let mut config = CliConfig::default();
    config.formatting.indent_size = 2;

    let mut args = args(input);
    args.name = Some("Greeter".to_string());
    let output = translate_command(&args, &config).unwrap();

    assert!(output.starts_with("public class Greeter {\n  private java.lang.String MSG"));
}

#[test]
fn test_translate_emits_ir() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "HELLO.json", &hello_unit());

    let mut args = args(input);
    args.emit = EmitKind::Ir;
    let output = translate_command(&args, &CliConfig::default()).unwrap();

    assert!(output.starts_with("ir::Program Hello {\n"));
    assert!(output.contains("MSG := (MSG ++ \" world\")"));
}

#[test]
fn test_translate_rejects_missing_and_non_file_inputs() {
    let temp_dir = TempDir::new().unwrap();

    let missing = translate_command(&args(temp_dir.path().join("NOPE.json")), &CliConfig::default());
    assert!(matches!(missing, Err(CliError::InvalidInput(_))));

    let directory = translate_command(&args(temp_dir.path().to_path_buf()), &CliConfig::default());
    assert!(matches!(directory, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_translate_rejects_bad_class_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "HELLO.json", &hello_unit());

    let mut args = args(input);
    args.name = Some("not a class".to_string());
    let result = translate_command(&args, &CliConfig::default());
    assert!(matches!(result, Err(CliError::InvalidInput(_))));
}

#[test]
fn test_translate_reports_unsupported_constructs() {
    let temp_dir = TempDir::new().unwrap();
    let mut unit = hello_unit();
    unit.main.stmts.push(Statement::new(StatementKind::Leave));
    let input = write_input(temp_dir.path(), "HELLO.json", &unit);

    let result = translate_command(&args(input), &CliConfig::default());
    match result {
        Err(CliError::Translation(err)) => assert!(err.is_unsupported()),
        other => panic!("expected a translation error, got {:?}", other),
    }
}

#[test]
fn test_translate_reports_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("BROKEN.json");
    fs::write(&input, "{ not json").unwrap();

    let result = translate_command(&args(input), &CliConfig::default());
    assert!(matches!(result, Err(CliError::Translation(_))));
}

#[test]
fn test_binary_prints_java_on_stdout() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "HELLO.json", &hello_unit());

    let output = Command::new(env!("CARGO_BIN_EXE_rj"))
        .arg(&input)
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with("public class Hello {"));
}

#[test]
fn test_binary_fails_on_missing_input() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rj"))
        .arg(temp_dir.path().join("NOPE.json"))
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("does not exist"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_binary_rejects_directory_input_with_usage() {
    let temp_dir = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_rj"))
        .arg(temp_dir.path())
        .args(["--log-format", "json"])
        .current_dir(temp_dir.path())
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("is not a regular file"));
    assert!(stderr.contains("Usage"));
}

#[test]
fn test_translate_rejects_bad_configured_default_name() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_input(temp_dir.path(), "01-prog.json", &hello_unit());
    let mut config = CliConfig::default();
    config.translation.default_name = "my prog".to_string();

    let result = translate_command(&args(input), &config);
    assert!(matches!(result, Err(CliError::Config(_))));
}

#[test]
fn test_binary_without_arguments_prints_usage() {
    let output = Command::new(env!("CARGO_BIN_EXE_rj")).output().unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Usage"));
}
