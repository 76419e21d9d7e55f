//! Command-line front end for the RPG to Java translator.
//!
//! The binary reads a resolved compilation unit serialized as JSON, runs both
//! lowering passes and prints the generated Java class (or the IR dump).

pub mod cli;
pub mod commands;
pub mod diagnostics;

// CLI-specific error handling
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum CliError {
        #[error("IO error: {0}")]
        Io(#[from] std::io::Error),

        #[error("Configuration error: {0}")]
        Config(String),

        #[error("Invalid input: {0}")]
        InvalidInput(String),

        #[error(transparent)]
        Translation(#[from] rj_core::Error),
    }

    pub type Result<T> = std::result::Result<T, CliError>;
}

pub use error::{CliError, Result};
