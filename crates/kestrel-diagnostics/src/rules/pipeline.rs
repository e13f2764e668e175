//! Pipeline operator checks.

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::LineRule;

const RULE_ID: &str = "pipeline";

/// Flags `|` characters that do not form the `|>` pipeline operator, and
/// pipelines left dangling at the end of a line.
///
/// Known imprecision, carried on purpose: the boolean-or token `||` is also
/// flagged, because neither of its `|` characters is followed by `>`.
#[derive(Debug, Default)]
pub struct PipelineRule;

impl PipelineRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl LineRule for PipelineRule {
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
        let chars: Vec<char> = line.chars().collect();

        for (col, ch) in chars.iter().enumerate() {
            if *ch == '|' && chars.get(col + 1) != Some(&'>') {
                let end = (col + 2).min(chars.len());
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, col, end),
                    "Invalid pipeline operator. Use '|>' to chain operations.",
                ));
            }
        }

        let trimmed = line.trim_end();
        if trimmed.trim_start().ends_with("|>") {
            let operator_col = document.byte_to_char_col(line_index, trimmed.len() - 2);
            out.push(Diagnostic::warning(
                RULE_ID,
                Range::span(line_index, operator_col, chars.len()),
                "Pipeline operator requires a continuation on the next line.",
            ));
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
    fn test_bad_pipeline_flagged_at_bar() {
        let diags = check_lines(&PipelineRule::new(), "let badPipeline = data | filter;");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Error);
        assert!(diags[0].message.contains("Invalid pipeline operator"));
        assert_eq!(diags[0].range.start.column, 23);
        assert_eq!(diags[0].range.end.column, 25);
    }

    #[test]
    fn test_good_pipeline_is_clean() {
        let diags = check_lines(&PipelineRule::new(), "let goodPipeline = data |> filter |> map;");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_boolean_or_is_flagged_twice() {
        // Inherited heuristic: each '|' of '||' fails the next-char test.
        let diags = check_lines(&PipelineRule::new(), "if a || b {");
        assert_eq!(diags.len(), 2);
        assert!(diags.iter().all(|d| d.severity == Severity::Error));
    }

    #[test]
    fn test_trailing_pipeline_warns_to_end_of_line() {
        let diags = check_lines(&PipelineRule::new(), "let chain = data |>   ");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].severity, Severity::Warning);
        assert!(diags[0].message.contains("continuation"));
        assert_eq!(diags[0].range.start.column, 17);
        assert_eq!(diags[0].range.end.column, 22);
    }

    #[test]
    fn test_bar_at_end_of_line() {
        let diags = check_lines(&PipelineRule::new(), "x |");
        assert_eq!(diags.len(), 1);
        // Clamped: the two-character range would extend past the line.
        assert_eq!(diags[0].range.end.column, 3);
    }
}
