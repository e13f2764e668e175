//! LINQ-style query checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "query";

/// Validates `from <ident> in` query clauses, and suggests a `select` clause
/// for any line carrying a `from` token without one.
///
/// Single-line heuristic: a query whose `select` sits on a later line still
/// gets the "end with select" suggestion on its `from` line, and the
/// suggestion fires on any `from` token whether or not a full query clause
/// follows it. Carried as documented limitations.
#[derive(Debug)]
pub struct QueryRule {
    from_clause: Regex,
    from_token: Regex,
    select_token: Regex,
}

impl QueryRule {
    /// Create the rule, compiling its patterns.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            from_clause: Regex::new(r"\bfrom\s+(\S+)\s+in\b")?,
            from_token: Regex::new(r"\bfrom\b")?,
            select_token: Regex::new(r"\bselect\b")?,
        })
    }
}

impl LineRule for QueryRule {
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

        if let Some(caps) = self.from_clause.captures(line) {
            if let Some(ident) = caps.get(1) {
                if !kestrel_lang::is_valid_identifier(ident.as_str()) {
                    let start = document.byte_to_char_col(line_index, ident.start());
                    let end = document.byte_to_char_col(line_index, ident.end());
                    out.push(Diagnostic::error(
                        RULE_ID,
                        Range::span(line_index, start, end),
                        format!("'{}' is not a valid identifier.", ident.as_str()),
                    ));
                }
            }
        }

        // The suggestion is independent of the full clause: any 'from' token
        // without a 'select' on the same line triggers it.
        if let Some(m) = self.from_token.find(line) {
            if !self.select_token.is_match(line) {
                let start = document.byte_to_char_col(line_index, m.start());
                out.push(Diagnostic::information(
                    RULE_ID,
                    Range::span(line_index, start, start + "from".len()),
                    "Query expression should end with a 'select' clause.",
                ));
            }
        }

        out
    }
}
