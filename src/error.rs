//! Errors from reading function documents.

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode, SourceSpan};
use std::fmt::Display;
use stylefn_core::SpecError;
use thiserror::Error;

/// The document text is not valid JSON.
#[derive(Debug, Error, Diagnostic)]
#[error("function document is not valid JSON")]
#[diagnostic(code(stylefn::json))]
pub struct JsonError {
    #[source_code]
    src: NamedSource<String>,
    #[label("{message}")]
    span: SourceSpan,
    message: String,
}

impl JsonError {
    pub fn new(name: &str, text: &str, error: &serde_json::Error) -> Self {
        let offset = offset_of(text, error.line(), error.column());
        Self {
            src: NamedSource::new(name, text.to_string()),
            span: (offset, 0).into(),
            message: error.to_string(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn offset(&self) -> usize {
        self.span.offset()
    }
}

/// Byte offset of a 1-based line and column, clamped to the text.
fn offset_of(text: &str, line: usize, column: usize) -> usize {
    let line_start: usize = text
        .split_inclusive('\n')
        .take(line.saturating_sub(1))
        .map(str::len)
        .sum();
    (line_start + column.saturating_sub(1)).min(text.len())
}

/// Anything that can go wrong turning document text into an expression.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Json(Box<JsonError>),

    #[error(transparent)]
    Spec(#[from] SpecError),
}

impl From<JsonError> for Error {
    fn from(error: JsonError) -> Self {
        Error::Json(Box::new(error))
    }
}

impl Diagnostic for Error {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        match self {
            Error::Json(e) => e.code(),
            Error::Spec(e) => Some(Box::new(e.code())),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        match self {
            Error::Json(e) => e.help(),
            Error::Spec(e) => e.help().map(|help| Box::new(help) as Box<dyn Display>),
        }
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        match self {
            Error::Json(e) => e.source_code(),
            Error::Spec(_) => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Error::Json(e) => e.labels(),
            Error::Spec(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_offset_of() {
        let text = "{\n  \"stops\": [\n}";
        assert_eq!(offset_of(text, 1, 1), 0);
        assert_eq!(offset_of(text, 2, 3), 4);
        assert_eq!(offset_of(text, 3, 1), 15);
        assert_eq!(offset_of(text, 9, 9), text.len());
    }

    #[test]
    fn test_json_error_points_into_text() {
        let text = "{\"stops\": [1, }";
        let parse_error = serde_json::from_str::<serde_json::Value>(text).unwrap_err();
        let error = JsonError::new("function.json", text, &parse_error);
        assert!(error.offset() <= text.len());
        assert!(!error.message().is_empty());
    }

    #[test]
    fn test_spec_errors_carry_code_and_help() {
        let error = Error::from(SpecError::ZoomAndProperty);
        assert_eq!(
            error.code().map(|c| c.to_string()),
            Some("stylefn::zoom_and_property".to_string())
        );
        assert!(error.help().is_some());
    }
}
