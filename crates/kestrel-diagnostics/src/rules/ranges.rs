//! Numeric range operator checks.

use regex::Regex;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::{LineRule, RuleError};

const RULE_ID: &str = "range";

/// Validates `N..M` and `N.._` range tokens.
///
/// A numeric upper bound must be strictly greater than the lower bound; `_`
/// as the upper bound is always accepted (open-ended). Bounds are compared as
/// digit strings, so literals of any length are handled without overflow.
#[derive(Debug)]
pub struct RangeRule {
    token: Regex,
}

impl RangeRule {
    /// Create the rule, compiling its pattern.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            token: Regex::new(r"(\d+)\.\.(\d+|_)")?,
        })
    }
}

impl LineRule for RangeRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        let mut out = Vec::new();
        for caps in self.token.captures_iter(line) {
            let (Some(whole), Some(start), Some(end)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            if end.as_str() == "_" {
                continue;
            }
            if !digits_less_than(start.as_str(), end.as_str()) {
                let start_col = document.byte_to_char_col(line_index, whole.start());
                let end_col = document.byte_to_char_col(line_index, whole.end());
                out.push(Diagnostic::error(
                    RULE_ID,
                    Range::span(line_index, start_col, end_col),
                    "Range start must be less than end.",
                ));
            }
        }
        out
    }
}

/// Compare two digit strings numerically: leading zeros stripped, then length,
/// then lexicographic.
fn digits_less_than(a: &str, b: &str) -> bool {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    match a.len().cmp(&b.len()) {
        std::cmp::Ordering::Less => true,
        std::cmp::Ordering::Greater => false,
        std::cmp::Ordering::Equal => a < b,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_util::check_lines;

    #[test]
    fn test_increasing_range_is_clean() {
        let rule = RangeRule::new().unwrap();
        assert!(check_lines(&rule, "    1..5 => \"small\",").is_empty());
        assert!(check_lines(&rule, "    0..100 => \"percent\",").is_empty());
    }

    #[test]
    fn test_open_ended_range_is_clean() {
        let diags = check_lines(&RangeRule::new().unwrap(), "    100.._ => \"large\",");
        assert!(diags.is_empty());
    }

    #[test]
    fn test_reversed_range_is_flagged_at_token() {
        let diags = check_lines(&RangeRule::new().unwrap(), "    5..3 => \"never\",");
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "Range start must be less than end.");
        assert_eq!(diags[0].range.start.column, 4);
        assert_eq!(diags[0].range.end.column, 8);
    }

    #[test]
    fn test_equal_bounds_are_flagged() {
        let diags = check_lines(&RangeRule::new().unwrap(), "    7..7 => \"never\",");
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_leading_zeros_compare_numerically() {
        let rule = RangeRule::new().unwrap();
        assert!(check_lines(&rule, "    007..8 => ok,").is_empty());
        assert_eq!(check_lines(&rule, "    010..9 => bad,").len(), 1);
    }

    #[test]
    fn test_huge_literals_do_not_overflow() {
        let line = "    99999999999999999999999999..100000000000000000000000000 => big,";
        assert!(check_lines(&RangeRule::new().unwrap(), line).is_empty());
    }

    #[test]
    fn test_digits_less_than() {
        assert!(digits_less_than("1", "2"));
        assert!(!digits_less_than("2", "2"));
        assert!(!digits_less_than("10", "9"));
        assert!(digits_less_than("0", "1"));
        assert!(!digits_less_than("0", "0"));
    }
}
