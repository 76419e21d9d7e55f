//! Helpers for loading resolved compilation units from JSON.
//!
//! The resolver serializes its output with the same serde derives used here, so
//! a unit written by [`write_unit_to_file`] loads back unchanged.

use crate::ast::CompilationUnit;
use rj_core::Result;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Load a `CompilationUnit` from a JSON file on disk.
pub fn load_unit_from_file(path: &Path) -> Result<CompilationUnit> {
    tracing::debug!("loading compilation unit from {}", path.display());
    let contents = fs::read_to_string(path)?;
    load_unit_from_str(&contents)
}

/// Load a `CompilationUnit` directly from a string slice containing JSON.
pub fn load_unit_from_str(contents: &str) -> Result<CompilationUnit> {
    let unit: CompilationUnit = serde_json::from_str(contents)?;
    tracing::trace!(
        data_definitions = unit.data_definitions.len(),
        subroutines = unit.subroutines.len(),
        "compilation unit decoded"
    );
    Ok(unit)
}

/// Load a `CompilationUnit` from any reader producing JSON.
pub fn load_unit_from_reader(mut reader: impl Read) -> Result<CompilationUnit> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf)?;
    load_unit_from_str(&buf)
}

/// Persist a `CompilationUnit` as JSON to the provided path.
pub fn write_unit_to_file(path: &Path, unit: &CompilationUnit) -> Result<()> {
    let contents = serde_json::to_string_pretty(unit)?;
    fs::write(path, contents)?;
    Ok(())
}
