//! Error adapter for converting [`QuillError`] to miette diagnostics.
//!
//! Scene syntax errors carry the scene source, so they are rendered with a
//! labeled snippet pointing at the offending line and column. Other errors
//! are reported with a code and, where useful, a help line.

use std::fmt;

use miette::{Diagnostic, LabeledSpan, SourceSpan};
use serde_json::error::Category;

use quill::QuillError;

/// Wraps a [`QuillError`] so miette's report handlers can render it.
pub struct ErrorAdapter<'a>(pub &'a QuillError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {}

impl Diagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match self.0 {
            QuillError::Io(_) => "quill::io",
            QuillError::Scene { .. } => "quill::scene",
            QuillError::Shape { .. } => "quill::shape",
            QuillError::Export(_) => "quill::export",
            QuillError::Config(_) => "quill::config",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self.0 {
            QuillError::Scene { .. } => Some(Box::new(
                "each element needs a `type` of circle, polygon, regular_polygon, \
                 rectangle, bubble, diagram or self",
            )),
            QuillError::Shape { path, .. } => {
                Some(Box::new(format!("fix the values of the element at `{path}`")))
            }
            _ => None,
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self.0 {
            QuillError::Scene { src, .. } => Some(src as &dyn miette::SourceCode),
            _ => None,
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let QuillError::Scene { err, src } = self.0 else {
            return None;
        };
        let span = error_span(src, err.line(), err.column());
        let label = LabeledSpan::new_primary_with_span(Some(label_message(err).to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}

fn label_message(err: &serde_json::Error) -> &'static str {
    match err.classify() {
        Category::Io => "read error here",
        Category::Syntax => "syntax error here",
        Category::Data => "unexpected value here",
        Category::Eof => "input ends here",
    }
}

/// Converts serde_json's one-based line and column into a one-character span.
///
/// A line of 0 means the position is unknown and maps to the start of the
/// source. Positions past the end are clamped to the end.
fn error_span(src: &str, line: usize, column: usize) -> SourceSpan {
    if line == 0 {
        return SourceSpan::new(0.into(), 0);
    }

    let line_start: usize = src
        .split_inclusive('\n')
        .take(line - 1)
        .map(str::len)
        .sum();
    let offset = (line_start + column.saturating_sub(1)).min(src.len());
    let len = usize::from(offset < src.len());
    SourceSpan::new(offset.into(), len)
}

#[cfg(test)]
mod tests {
    use miette::GraphicalReportHandler;

    use quill::SceneBuilder;

    use super::*;

    fn render(err: &QuillError) -> String {
        let mut out = String::new();
        GraphicalReportHandler::new()
            .render_report(&mut out, &ErrorAdapter(err))
            .unwrap();
        out
    }

    #[test]
    fn test_error_span_first_line() {
        let span = error_span("{ oops }", 1, 3);
        assert_eq!(span.offset(), 2);
        assert_eq!(span.len(), 1);
    }

    #[test]
    fn test_error_span_later_line() {
        let span = error_span("{\n  \"a\": x\n}", 2, 8);
        assert_eq!(span.offset(), 2 + 7);
    }

    #[test]
    fn test_error_span_clamped_to_end() {
        let span = error_span("{", 1, 5);
        assert_eq!(span.offset(), 1);
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_scene_error_has_label() {
        let src = "{ \"elements\": [ { \"type\": \"circle\", } ] }";
        let err = SceneBuilder::default().parse(src).unwrap_err();
        let adapter = ErrorAdapter(&err);

        assert!(adapter.source_code().is_some());
        assert_eq!(adapter.labels().map(Iterator::count), Some(1));
        assert!(render(&err).contains("quill::scene"));
    }

    #[test]
    fn test_shape_error_has_help() {
        let src = r#"{ "elements": [ { "type": "circle", "center": [0, 0], "radius": -1 } ] }"#;
        let err = SceneBuilder::default().parse(src).unwrap_err();
        let adapter = ErrorAdapter(&err);

        assert!(adapter.labels().is_none());
        let help = adapter.help().map(|h| h.to_string()).unwrap();
        assert!(help.contains("elements[0]"));
    }
}
