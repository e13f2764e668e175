//! String / template literal termination checks.

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::LineRule;

const RULE_ID: &str = "string-literal";

/// Character-scans each line for an unterminated string or template literal.
///
/// The scan tracks `\` escapes and the three delimiters `'`, `"`, and
/// backtick. Each line is scanned independently — no state carries to the
/// next line, so literals that legitimately span lines are always flagged.
/// Carried as a documented limitation.
#[derive(Debug, Default)]
pub struct StringTerminationRule;

impl StringTerminationRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for StringTerminationRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let mut delimiter: Option<char> = None;
        let mut open_col = 0;
        let mut escaped = false;

        for (col, ch) in line.chars().enumerate() {
            if escaped {
                escaped = false;
                continue;
            }
            if ch == '\\' {
                escaped = true;
                continue;
            }
            if kestrel_lang::STRING_DELIMITERS.contains(&ch) {
                match delimiter {
                    None => {
                        delimiter = Some(ch);
                        open_col = col;
                    }
                    Some(open) if open == ch => delimiter = None,
                    Some(_) => {}
                }
            }
        }

        if delimiter.is_some() {
            vec![Diagnostic::error(
                RULE_ID,
                Range::span(line_index, open_col, document.char_len(line_index)),
                "Unclosed string.",
            )]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::check_lines;

    #[test]
    fn test_closed_strings_are_clean() {
        let rule = StringTerminationRule::new();
        assert!(check_lines(&rule, "let s = \"hello\";").is_empty());
        assert!(check_lines(&rule, "let s = 'it''s fine';").is_empty());
        assert!(check_lines(&rule, "let t = `total: ${n}`;").is_empty());
    }

    #[test]
    fn test_unclosed_string_is_flagged_from_quote() {
        let diags = check_lines(
            &StringTerminationRule::new(),
            "let unclosedString = \"this string is not closed;",
        );
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Unclosed string.");
        assert_eq!(diags[0].range.start.column, 21);
    }

    #[test]
    fn test_escaped_quote_does_not_close() {
        let diags = check_lines(&StringTerminationRule::new(), r#"let s = "say \";"#);
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_escaped_quote_inside_closed_string() {
        let diags = check_lines(&StringTerminationRule::new(), r#"let s = "say \"hi\"";"#);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_other_delimiter_inside_string_is_ignored() {
        let diags = check_lines(&StringTerminationRule::new(), "let s = \"it's\";");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_multiline_literal_is_flagged_per_line() {
        // Inherited limitation: no cross-line state.
        let text = "let s = `first\nsecond`";
        let diags = check_lines(&StringTerminationRule::new(), text);
        assert_eq!(diags.len(), 2);
    }
}
