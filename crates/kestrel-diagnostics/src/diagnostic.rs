//! First-class diagnostics data model.
//!
//! This module stores structured findings (errors/warnings/information) produced
//! by a scan. Hosts can use this for:
//! - problems panels / gutter markers
//! - hover tooltips / inline messages
//! - forwarding to an editor via `textDocument/publishDiagnostics` (see [`crate::json`])

/// A 0-based position in a document.
///
/// `column` counts Unicode scalar values (`char`), not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    /// Line index (0-based).
    pub line: usize,
    /// Column in characters (0-based).
    pub column: usize,
}

impl Position {
    /// Create a new position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

/// A range between two positions; columns are half-open (`start..end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    /// Range start (inclusive).
    pub start: Position,
    /// Range end (exclusive).
    pub end: Position,
}

impl Range {
    /// Create a range from explicit line/column coordinates.
    pub fn new(start_line: usize, start_column: usize, end_line: usize, end_column: usize) -> Self {
        Self {
            start: Position::new(start_line, start_column),
            end: Position::new(end_line, end_column),
        }
    }

    /// Create a range spanning `start_column..end_column` on a single line.
    pub fn span(line: usize, start_column: usize, end_column: usize) -> Self {
        Self::new(line, start_column, line, end_column)
    }

    /// Create a synthetic whole-line range for a line of `char_len` characters.
    pub fn whole_line(line: usize, char_len: usize) -> Self {
        Self::new(line, 0, line, char_len)
    }
}

/// Diagnostic severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Error diagnostics.
    Error,
    /// Warning diagnostics.
    Warning,
    /// Informational diagnostics.
    Information,
}

/// A single positioned finding for a document.
///
/// Immutable once produced; has no identity beyond its content. Many
/// diagnostics may reference the same line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Where in the document the finding applies.
    pub range: Range,
    /// Finding severity.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
    /// Tag of the rule that produced this finding (e.g. `"pipeline"`).
    pub rule: &'static str,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(rule: &'static str, range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Error,
            message: message.into(),
            rule,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(rule: &'static str, range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Warning,
            message: message.into(),
            rule,
        }
    }

    /// Create an informational diagnostic.
    pub fn information(rule: &'static str, range: Range, message: impl Into<String>) -> Self {
        Self {
            range,
            severity: Severity::Information,
            message: message.into(),
            rule,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_constructors() {
        let r = Range::span(3, 2, 7);
        assert_eq!(r.start, Position::new(3, 2));
        assert_eq!(r.end, Position::new(3, 7));

        let w = Range::whole_line(5, 12);
        assert_eq!(w.start, Position::new(5, 0));
        assert_eq!(w.end, Position::new(5, 12));
    }

    #[test]
    fn test_diagnostic_constructors() {
        let d = Diagnostic::error("range", Range::span(0, 4, 8), "range start must be less than end");
        assert_eq!(d.severity, Severity::Error);
        assert_eq!(d.rule, "range");

        let w = Diagnostic::warning("pipeline", Range::span(1, 0, 2), "msg");
        assert_eq!(w.severity, Severity::Warning);

        let i = Diagnostic::information("query", Range::span(2, 0, 4), "msg");
        assert_eq!(i.severity, Severity::Information);
    }
}
