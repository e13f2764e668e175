//! Operator overloading checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "operator-overload";

/// Validates `operator <token>(` declarations against the fixed table of
/// overloadable operators in [`kestrel_lang::OVERLOADABLE_OPERATORS`].
#[derive(Debug)]
pub struct OperatorOverloadRule {
    declaration: Regex,
}

impl OperatorOverloadRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            declaration: Regex::new(r"\boperator\s*([^\s(]+)\s*\(")?,
        })
    }
}

impl LineRule for OperatorOverloadRule {
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
            let Some(token) = caps.get(1) else { continue };
            if !kestrel_lang::is_overloadable_operator(token.as_str()) {
                let start = document.byte_to_char_col(line_index, token.start());
                let end = document.byte_to_char_col(line_index, token.end());
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, start, end),
                    format!(
                        "'{}' cannot be overloaded. Overloadable operators: {}.",
                        token.as_str(),
                        kestrel_lang::OVERLOADABLE_OPERATORS.join(" "),
                    ),
                ));
            }
        }
        out
    }
}
