//! Indentation consistency checks.

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::LineRule;

const RULE_ID: &str = "indentation";

/// Flags lines whose leading whitespace mixes tabs and spaces.
#[derive(Debug, Default)]
pub struct IndentationRule;

impl IndentationRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for IndentationRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, line: &str, line_index: usize, _document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let indent_end = line.len() - line.trim_start().len();
        let indent = &line[..indent_end];
        if indent.contains(' ') && indent.contains('\t') {
            vec![Diagnostic::warning(
                RULE_ID,
                Range::span(line_index, 0, indent.chars().count()),
                "Mixed tabs and spaces in indentation.",
            )]
        } else {
            Vec::new()
        }
    }
}
