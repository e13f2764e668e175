//! Match expression checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "match-expression";

/// Verifies that `match {` blocks are eventually closed, and that match arms
/// carry a pattern.
///
/// Closure is a bounded forward scan over the remaining lines, accumulating a
/// running `{`/`}` count — O(remaining lines) per `match` occurrence. The arm
/// check is purely line-local and fires on any `=>` with an empty left side,
/// whether or not the line actually sits inside a match block.
#[derive(Debug)]
pub struct MatchExpressionRule {
    opener: Regex,
}

impl MatchExpressionRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            opener: Regex::new(r"\bmatch\s*\{")?,
        })
    }
}

impl LineRule for MatchExpressionRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(
        &self,
        line: &str,
        line_index: usize,
        document: &SourceDocument<'_>,
    ) -> Vec<Diagnostic> {
        let mut out = Vec::new();

        if let Some(m) = self.opener.find(line) {
            let mut depth: i64 = 0;
            let mut closed = false;
            for ahead in document.lines_from(line_index) {
                for ch in ahead.chars() {
                    match ch {
                        '{' => depth += 1,
                        '}' => depth -= 1,
                        _ => {}
                    }
                }
                if depth <= 0 {
                    closed = true;
                    break;
                }
            }
            if !closed {
                let keyword_col = document.byte_to_char_col(line_index, m.start());
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, keyword_col, keyword_col + "match".len()),
                    "Match expression is not properly closed.",
                ));
            }
        }

        if let Some(arrow) = line.find("=>") {
            if line[..arrow].trim().is_empty() {
                let arrow_col = document.byte_to_char_col(line_index, arrow);
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, arrow_col, arrow_col + 2),
                    "Match arm must have a pattern.",
                ));
            }
        }

        out
    }
}
