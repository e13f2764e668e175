//! `with` expression context checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "with-expression";

/// Flags `with { ... }` expressions that do not appear in an assignment or
/// return context, or that begin the line outright.
#[derive(Debug)]
pub struct WithExpressionRule {
    opener: Regex,
}

impl WithExpressionRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            opener: Regex::new(r"\bwith\s*\{")?,
        })
    }
}

impl LineRule for WithExpressionRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let Some(m) = self.opener.find(line) else {
            return Vec::new();
        };
        let trimmed = line.trim_start();
        let in_context = line.contains('=') || trimmed.starts_with("return");
        if trimmed.starts_with("with") || !in_context {
            let keyword_col = document.byte_to_char_col(line_index, m.start());
            vec![Diagnostic::warning(
                RULE_ID,
                Range::span(line_index, keyword_col, keyword_col + "with".len()),
                "'with' expression should be part of an assignment or return.",
            )]
        } else {
            Vec::new()
        }
    }
}
