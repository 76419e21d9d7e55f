//! Diagnostic and error reporting utilities

use crate::{CliError, Result};
use miette::Diagnostic;
use thiserror::Error;

/// Set up enhanced error reporting with miette
pub fn setup_error_reporting() -> Result<()> {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(3)
                .build(),
        )
    }))
    .map_err(|e| CliError::Config(format!("Failed to setup error reporting: {}", e)))?;

    Ok(())
}

/// A translation failure, as reported to the user.
#[derive(Error, Debug, Diagnostic)]
pub enum TranslationDiagnostic {
    #[error("{message}")]
    #[diagnostic(
        code(rj::unsupported),
        help("This construct has no Java translation yet; rewrite it with supported operations")
    )]
    Unsupported { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(rj::shape),
        help("The construct is known, but only simpler forms of it can be translated")
    )]
    Shape { message: String },

    #[error("{message}")]
    #[diagnostic(
        code(rj::unresolved),
        help("Check that the resolver bound every name in the input to a declaration")
    )]
    Unresolved { message: String },
}

/// Diagnostic for a translation error, or `None` for errors that carry no
/// translation kind.
pub fn translation_diagnostic(error: &rj_core::Error) -> Option<TranslationDiagnostic> {
    let message = error.to_string();
    match error {
        rj_core::Error::Unsupported { .. } => Some(TranslationDiagnostic::Unsupported { message }),
        rj_core::Error::Shape { .. } => Some(TranslationDiagnostic::Shape { message }),
        rj_core::Error::Unresolved { .. } => Some(TranslationDiagnostic::Unresolved { message }),
        rj_core::Error::Generic(_) => None,
    }
}

/// Print a CLI error as a miette report when it maps to a diagnostic. Returns
/// whether anything was printed.
pub fn render_cli_error(error: &CliError) -> bool {
    let CliError::Translation(inner) = error else {
        return false;
    };
    match translation_diagnostic(inner) {
        Some(diagnostic) => {
            eprintln!("{:?}", miette::Report::new(diagnostic));
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rj_core::span::Span;

    fn code_of(diagnostic: &TranslationDiagnostic) -> Option<String> {
        diagnostic.code().map(|code| code.to_string())
    }

    #[test]
    fn test_diagnostic_codes_follow_error_kind() {
        let unsupported =
            translation_diagnostic(&rj_core::Error::unsupported("statement DOW", None)).unwrap();
        assert_eq!(code_of(&unsupported).as_deref(), Some("rj::unsupported"));
        assert_eq!(unsupported.to_string(), "Unsupported construct: statement DOW");

        let shape = translation_diagnostic(&rj_core::Error::shape("FOR", "DOWNTO", None)).unwrap();
        assert_eq!(code_of(&shape).as_deref(), Some("rj::shape"));

        let unresolved = translation_diagnostic(&rj_core::Error::unresolved(
            "NBR",
            Some(Span::point(2, 5)),
        ))
        .unwrap();
        assert_eq!(code_of(&unresolved).as_deref(), Some("rj::unresolved"));
        assert_eq!(unresolved.to_string(), "Unresolved reference: NBR at 2:5-2:5");
    }

    #[test]
    fn test_generic_errors_have_no_diagnostic() {
        let error = rj_core::Error::Generic("boom".to_string());
        assert!(translation_diagnostic(&error).is_none());
        assert!(!render_cli_error(&CliError::Translation(error)));
        assert!(!render_cli_error(&CliError::InvalidInput("x".to_string())));
    }
}
