//! Auto-property accessor checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "auto-property";

/// Validates auto-property accessor blocks.
///
/// A candidate is a typed member with an inline brace block, `name: type
/// { ... }`, whose block content is only `get`/`set` tokens, semicolons, and
/// whitespace. Such a block must declare at least one of `get` or `set`;
/// an empty block is the error case. Brace blocks holding anything else are
/// ordinary bodies and are left alone.
#[derive(Debug)]
pub struct AutoPropertyRule {
    member: Regex,
}

impl AutoPropertyRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            member: Regex::new(r"[A-Za-z_$][0-9A-Za-z_$]*\s*:\s*[A-Za-z_$][0-9A-Za-z_$]*\s*\{([^{}]*)\}")?,
        })
    }
}

impl LineRule for AutoPropertyRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for caps in self.member.captures_iter(line) {
            let Some(body) = caps.get(1) else { continue };
            let tokens: Vec<&str> = body
                .as_str()
                .split(|c: char| c == ';' || c.is_whitespace())
                .filter(|t| !t.is_empty())
                .collect();
            let is_accessor_block = tokens.iter().all(|t| *t == "get" || *t == "set");
            let has_accessor = tokens.iter().any(|t| *t == "get" || *t == "set");
            if is_accessor_block && !has_accessor {
                let whole = caps.get(0).map(|m| m.range()).unwrap_or(body.range());
                let start = document.byte_to_char_col(line_index, whole.start);
                let end = document.byte_to_char_col(line_index, whole.end);
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, start, end),
                    "Auto-property block must declare 'get' or 'set'.",
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::check_lines;

    #[test]
    fn test_get_set_block_is_clean() {
        let rule = AutoPropertyRule::new().unwrap();
        assert!(check_lines(&rule, "    name: string { get; set; }").is_empty());
        assert!(check_lines(&rule, "    count: number { get; }").is_empty());
        assert!(check_lines(&rule, "    total: number { set }").is_empty());
    }

    #[test]
    fn test_empty_accessor_block_is_flagged() {
        let diags = check_lines(&AutoPropertyRule::new().unwrap(), "    name: string { }");
        assert_eq!(diags.len(), 1);
        assert!(diags[0].message.contains("'get' or 'set'"));
    }

    #[test]
    fn test_semicolon_only_block_is_flagged() {
        let diags = check_lines(&AutoPropertyRule::new().unwrap(), "    name: string { ; }");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_ordinary_body_is_ignored() {
        let diags = check_lines(
            &AutoPropertyRule::new().unwrap(),
            "    area: number { return width * height; }",
        );
        assert!(diags.is_empty());
    }

    #[test]
    fn test_plain_empty_braces_are_ignored() {
        // Only typed members are auto-property candidates.
        let diags = check_lines(&AutoPropertyRule::new().unwrap(), "function noop() { }");
        assert!(diags.is_empty());
    }
}
