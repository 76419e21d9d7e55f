//! Translation command.
//!
//! Reads a resolved compilation unit from JSON, lowers it through the IR and
//! renders either the Java class or the IR dump.

use crate::{cli::CliConfig, CliError, Result};
use clap::{Args, ValueEnum};
use rj_core::pretty::pretty;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// What the translation prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EmitKind {
    /// Generated Java source
    Java,
    /// Pretty-printed intermediate representation
    Ir,
}

#[derive(Debug, Clone, Args)]
pub struct TranslateArgs {
    /// Resolved compilation unit, serialized as JSON
    pub input: PathBuf,

    /// Name of the generated class (defaults to the input file name)
    #[arg(long)]
    pub name: Option<String>,

    /// Output to emit
    #[arg(long, value_enum, default_value = "java")]
    pub emit: EmitKind,
}

/// Translate the input and return the rendered text.
pub fn translate_command(args: &TranslateArgs, config: &CliConfig) -> Result<String> {
    validate_input(&args.input)?;
    let name = match &args.name {
        Some(name) if is_java_identifier(name) => name.clone(),
        Some(name) => {
            return Err(CliError::InvalidInput(format!(
                "`{}` is not a valid class name",
                name
            )))
        }
        None => class_name_for(&args.input, config)?,
    };
    info!("translating {} as {}", args.input.display(), name);

    let unit = rj_rpg::json::load_unit_from_file(&args.input)?;
    let program = rj_lower::lower_to_ir(&unit, &name)?;
    let output = match args.emit {
        EmitKind::Ir => pretty(&program, config.pretty_options()).to_string(),
        EmitKind::Java => {
            let java = rj_lower::lower_to_java(&program)?;
            rj_lower::generate(&java, config.pretty_options())
        }
    };
    debug!("rendered {} bytes", output.len());
    Ok(output)
}

fn validate_input(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(CliError::InvalidInput(format!(
            "{} does not exist",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(CliError::InvalidInput(format!(
            "{} is not a regular file",
            path.display()
        )));
    }
    Ok(())
}

/// Class name derived from the input file stem: `CALCFIB.json` becomes
/// `Calcfib`. Falls back to the configured default when the stem does not make
/// a Java identifier; that default must be an identifier too.
pub fn class_name_for(input: &Path, config: &CliConfig) -> Result<String> {
    let stem = input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();
    let mut chars = stem.chars();
    let derived: String = match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    };
    if is_java_identifier(&derived) {
        return Ok(derived);
    }
    let default_name = &config.translation.default_name;
    if !is_java_identifier(default_name) {
        return Err(CliError::Config(format!(
            "translation.default_name `{}` is not a valid class name",
            default_name
        )));
    }
    Ok(default_name.clone())
}

fn is_java_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => chars
            .all(|ch| ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'),
        _ => false,
    }
}
