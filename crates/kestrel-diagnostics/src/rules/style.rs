//! Identifier and punctuation style checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

/// Flags tokens that start with digits followed by word characters.
///
/// This matches regardless of surrounding context, so digit-prefixed
/// substrings embedded inside otherwise valid tokens (`0x1F`, the `123abc`
/// inside `foo123abc`) are flagged too — inherited false-positive surface,
/// deliberately not narrowed.
#[derive(Debug)]
pub struct NumericIdentifierRule {
    token: Regex,
}

const NUMERIC_ID: &str = "numeric-identifier";

impl NumericIdentifierRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            token: Regex::new(r"\d+[A-Za-z_$][0-9A-Za-z_$]*")?,
        })
    }
}

impl LineRule for NumericIdentifierRule {
    fn id(&self) -> &'static str {
        NUMERIC_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        self.token
            .find_iter(line)
            .map(|m| {
                let start = document.byte_to_char_col(line_index, m.start());
                let end = document.byte_to_char_col(line_index, m.end());
                Diagnostic::error(
                    NUMERIC_ID,
                    Range::span(line_index, start, end),
                    "Identifiers cannot start with a number.",
                )
            })
            .collect()
    }
}

/// Flags a trailing `;` on colon-style declaration lines.
#[derive(Debug, Default)]
pub struct RedundantSemicolonRule;

const SEMICOLON_ID: &str = "redundant-semicolon";

impl RedundantSemicolonRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for RedundantSemicolonRule {
    fn id(&self) -> &'static str {
        SEMICOLON_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let trimmed = line.trim_end();
        if line.contains(':') && trimmed.ends_with(';') {
            let semicolon_col = document.byte_to_char_col(line_index, trimmed.len() - 1);
            vec![Diagnostic::information(
                SEMICOLON_ID,
                Range::span(line_index, semicolon_col, semicolon_col + 1),
                "Semicolon is not needed with colon-style declarations.",
            )]
        } else {
            Vec::new()
        }
    }
}

/// Flags `struct` names that are not `UpperCamelCase`.
#[derive(Debug)]
pub struct StructNameRule {
    declaration: Regex,
}

const STRUCT_ID: &str = "struct-name";

impl StructNameRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            declaration: Regex::new(r"\bstruct\s+([A-Za-z_$][0-9A-Za-z_$]*)")?,
        })
    }
}

impl LineRule for StructNameRule {
    fn id(&self) -> &'static str {
        STRUCT_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for caps in self.declaration.captures_iter(line) {
            let Some(name) = caps.get(1) else { continue };
            if !kestrel_lang::is_upper_camel_case(name.as_str()) {
                let start = document.byte_to_char_col(line_index, name.start());
                let end = document.byte_to_char_col(line_index, name.end());
                out.push(Diagnostic::warning(
                    STRUCT_ID,
                    Range::span(line_index, start, end),
                    format!("Struct name '{}' should be PascalCase.", name.as_str()),
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostic::Severity;
    use crate::rules::test_util::check_lines;

    #[test]
    fn test_numeric_identifier_is_flagged() {
        let diags = check_lines(&NumericIdentifierRule::new().unwrap(), "let 2fast = 1;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].range.start.column, 4);
        assert_eq!(diags[0].range.end.column, 9);
    }

    #[test]
    fn test_plain_number_is_clean() {
        let diags = check_lines(&NumericIdentifierRule::new().unwrap(), "let total = 42;");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_hex_literal_is_a_known_false_positive() {
        // Inherited heuristic: '0x1F' looks like digits followed by word chars.
        let diags = check_lines(&NumericIdentifierRule::new().unwrap(), "let mask = 0x1F;");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_redundant_semicolon_information() {
        let diags = check_lines(&RedundantSemicolonRule::new(), "    count: number;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Information);
        assert_eq!(diags[0].range.start.column, 17);
    }

    #[test]
    fn test_semicolon_without_colon_is_clean() {
        let diags = check_lines(&RedundantSemicolonRule::new(), "let x = 1;");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_lowercase_struct_warns() {
        let diags = check_lines(
            &StructNameRule::new().unwrap(),
            "struct lowercase_struct { value: number; }",
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("PascalCase"));
        assert_eq!(diags[0].range.start.column, 7);
        assert_eq!(diags[0].range.end.column, 23);
    }

    #[test]
    fn test_pascal_struct_is_clean() {
        let diags = check_lines(&StructNameRule::new().unwrap(), "struct Point { x: number; }");
        assert!(diags.is_empty());
    }
}
