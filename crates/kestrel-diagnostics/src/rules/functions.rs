//! Function declaration and arrow-body checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "function";

/// Validates `function <name>(` declarations and flags arrows left without a
/// body on the same line.
///
/// No next-line lookahead is performed, so an arrow body correctly placed on
/// the following line is still flagged — carried as a documented limitation.
#[derive(Debug)]
pub struct FunctionRule {
    declaration: Regex,
}

impl FunctionRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            declaration: Regex::new(r"\bfunction\s+([^\s(]+)\s*\(")?,
        })
    }
}

impl LineRule for FunctionRule {
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

        for caps in self.declaration.captures_iter(line) {
            let Some(name) = caps.get(1) else { continue };
            if !kestrel_lang::is_valid_identifier(name.as_str()) {
                let start = document.byte_to_char_col(line_index, name.start());
                let end = document.byte_to_char_col(line_index, name.end());
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, start, end),
                    format!("'{}' is not a valid function name.", name.as_str()),
                ));
            }
        }

        // A trailing ';' after the arrow is still a missing body.
        let trimmed = line.trim_end();
        let body_part = trimmed
            .strip_suffix(';')
            .map(str::trim_end)
            .unwrap_or(trimmed);
        if body_part.ends_with("=>") {
            let arrow_col = document.byte_to_char_col(line_index, body_part.len() - 2);
            out.push(Diagnostic::warning(
                RULE_ID,
                Range::span(line_index, arrow_col, document.char_len(line_index)),
                "Arrow function body is missing.",
            ));
        }

        out
    }
}
