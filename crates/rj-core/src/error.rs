use crate::span::Span;
use std::result;
use thiserror::Error;

fn located(span: &Option<Span>) -> String {
    match span {
        Some(span) => format!(" at {}", span),
        None => String::new(),
    }
}

/// Failure of a translation pass. No variant is recovered locally: the whole
/// translation aborts and the caller receives exactly one of these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The input uses a statement, expression, target or type with no lowering rule.
    #[error("Unsupported construct: {construct}{}", located(.span))]
    Unsupported {
        construct: String,
        span: Option<Span>,
    },
    /// A construct appears in a shape the lowering does not anticipate.
    #[error("Unsupported shape of {construct}: {reason}{}", located(.span))]
    Shape {
        construct: String,
        reason: String,
        span: Option<Span>,
    },
    /// A reference carries no resolved link, or its declaration was never registered.
    #[error("Unresolved reference: {name}{}", located(.span))]
    Unresolved { name: String, span: Option<Span> },
    #[error("Generic error: {0}")]
    Generic(String),
}

impl Error {
    pub fn unsupported(construct: impl Into<String>, span: Option<Span>) -> Self {
        Error::Unsupported {
            construct: construct.into(),
            span,
        }
    }

    pub fn shape(
        construct: impl Into<String>,
        reason: impl Into<String>,
        span: Option<Span>,
    ) -> Self {
        Error::Shape {
            construct: construct.into(),
            reason: reason.into(),
            span,
        }
    }

    pub fn unresolved(name: impl Into<String>, span: Option<Span>) -> Self {
        Error::Unresolved {
            name: name.into(),
            span,
        }
    }

    /// Shape failures count as unsupported constructs.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. } | Error::Shape { .. })
    }

    pub fn is_unresolved(&self) -> bool {
        matches!(self, Error::Unresolved { .. })
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            Error::Unsupported { span, .. }
            | Error::Shape { span, .. }
            | Error::Unresolved { span, .. } => *span,
            Error::Generic(_) => None,
        }
    }

    /// Attach a position to an error that has none yet.
    pub fn or_at(mut self, at: Option<Span>) -> Self {
        match &mut self {
            Error::Unsupported { span, .. }
            | Error::Shape { span, .. }
            | Error::Unresolved { span, .. } => {
                if span.is_none() {
                    *span = at;
                }
            }
            Error::Generic(_) => {}
        }
        self
    }
}

pub type Result<T> = result::Result<T, Error>;

// Convert from eyre::Report to our Error type
impl From<eyre::Report> for Error {
    fn from(err: eyre::Report) -> Self {
        Error::Generic(err.to_string())
    }
}

// Convert from std::io::Error to our Error type
impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Generic(e.to_string())
    }
}
impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Generic(s)
    }
}
impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Generic(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Point;

    #[test]
    fn unsupported_names_the_construct() {
        let err = Error::unsupported("statement DoWhile", None);
        assert_eq!(err.to_string(), "Unsupported construct: statement DoWhile");
        assert!(err.is_unsupported());
        assert!(!err.is_unresolved());
    }

    #[test]
    fn shape_failures_are_unsupported() {
        let err = Error::shape("FOR", "initializer is not an assignment", None);
        assert!(err.is_unsupported());
    }

    #[test]
    fn position_is_rendered_and_kept() {
        let span = Span::new(Point::new(3, 7), Point::new(3, 12));
        let err = Error::unresolved("NBR", None).or_at(Some(span));
        assert_eq!(err.to_string(), "Unresolved reference: NBR at 3:7-3:12");

        let inner = Span::point(1, 1);
        let err = Error::unresolved("NBR", Some(inner)).or_at(Some(span));
        assert_eq!(err.span(), Some(inner));
    }
}
