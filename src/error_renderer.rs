//! Error rendering using miette
//!
//! This module renders [`Error`]s as reports: the message, the error code,
//! a snippet of the document for JSON syntax errors, and a hint on how to
//! fix the document when one applies.

use crate::Error;
use miette::{GraphicalReportHandler, GraphicalTheme};
use std::io::Write;

/// Render an error with formatting to stderr
///
/// # Example
/// ```no_run
/// use stylefn::{TargetKind, compile, render_error};
///
/// match compile(r#"{"type": "linear"}"#, TargetKind::Number) {
///     Err(e) => render_error(&e),
///     Ok(_) => {}
/// }
/// ```
pub fn render_error(error: &Error) {
    render_error_to(error, &mut std::io::stderr()).ok();
}

/// Render an error to a specific writer
pub fn render_error_to(error: &Error, writer: &mut dyn Write) -> std::io::Result<()> {
    writer.write_all(render(error, GraphicalTheme::unicode()).as_bytes())
}

/// Render an error to a String (useful for UIs and logs)
pub fn render_error_to_string(error: &Error) -> String {
    render(error, GraphicalTheme::unicode())
}

/// Render an error to a String without color codes (useful for tests)
pub fn render_error_to_string_no_color(error: &Error) -> String {
    render(error, GraphicalTheme::unicode_nocolor())
}

fn render(error: &Error, theme: GraphicalTheme) -> String {
    let mut out = String::new();
    let handler = GraphicalReportHandler::new_themed(theme);
    if handler.render_report(&mut out, error).is_err() {
        // Fall back to the bare message.
        out = format!("Error: {error}\n");
    }
    out
}
