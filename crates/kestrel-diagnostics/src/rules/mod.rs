//! The rule registry.
//!
//! Each syntax concern is an independent, stateless rule. Rules come in two
//! shapes: line rules, evaluated once per line (with read-only access to the
//! whole document for bounded forward lookahead), and document rules,
//! evaluated once per scan over the full line sequence. The scan session
//! iterates a [`RuleSet`] rather than a fixed method list, so the set stays
//! open for extension and each rule is testable in isolation.

mod balance;
mod functions;
mod indentation;
mod match_expr;
mod operators;
mod pipeline;
mod properties;
mod query;
mod ranges;
mod strings;
mod style;
mod with_expr;

pub use balance::BracketBalanceRule;
pub use functions::FunctionRule;
pub use indentation::IndentationRule;
pub use match_expr::MatchExpressionRule;
pub use operators::OperatorOverloadRule;
pub use pipeline::PipelineRule;
pub use properties::AutoPropertyRule;
pub use query::QueryRule;
pub use ranges::RangeRule;
pub use strings::StringTerminationRule;
pub use style::{NumericIdentifierRule, RedundantSemicolonRule, StructNameRule};
pub use with_expr::WithExpressionRule;

use crate::diagnostic::Diagnostic;
use crate::document::SourceDocument;

/// A rule evaluated against a single line.
///
/// `document` is the full line sequence; most rules ignore it, a few use it
/// for bounded forward lookahead (e.g. match-block closure).
pub trait LineRule: Send + Sync {
    /// Stable tag identifying this rule in diagnostics.
    fn id(&self) -> &'static str;

    /// Check one line, returning any findings.
    fn check(&self, line: &str, line_index: usize, document: &SourceDocument<'_>)
    -> Vec<Diagnostic>;
}

/// A rule evaluated once over the whole document.
pub trait DocumentRule: Send + Sync {
    /// Stable tag identifying this rule in diagnostics.
    fn id(&self) -> &'static str;

    /// Check the full document, returning any findings.
    fn check(&self, document: &SourceDocument<'_>) -> Vec<Diagnostic>;
}

/// Rule construction errors.
#[derive(Debug)]
pub enum RuleError {
    /// A rule's regex pattern failed to compile.
    InvalidPattern(regex::Error),
}

impl std::fmt::Display for RuleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPattern(err) => write!(f, "Invalid rule pattern: {}", err),
        }
    }
}

impl std::error::Error for RuleError {}

impl From<regex::Error> for RuleError {
    fn from(err: regex::Error) -> Self {
        Self::InvalidPattern(err)
    }
}

/// The set of rules one scan session iterates.
pub struct RuleSet {
    line_rules: Vec<Box<dyn LineRule>>,
    document_rules: Vec<Box<dyn DocumentRule>>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self {
            line_rules: Vec::new(),
            document_rules: Vec::new(),
        }
    }

    /// Build the standard Kestrel rule set: every line-local and
    /// document-global syntax check this crate ships.
    pub fn standard() -> Result<Self, RuleError> {
        let mut set = Self::new();
        set.push_line(PipelineRule::new());
        set.push_line(MatchExpressionRule::new()?);
        set.push_line(QueryRule::new()?);
        set.push_line(OperatorOverloadRule::new()?);
        set.push_line(FunctionRule::new()?);
        set.push_line(IndentationRule::new());
        set.push_line(StringTerminationRule::new());
        set.push_line(NumericIdentifierRule::new()?);
        set.push_line(RedundantSemicolonRule::new());
        set.push_line(StructNameRule::new()?);
        set.push_line(AutoPropertyRule::new()?);
        set.push_line(RangeRule::new()?);
        set.push_line(WithExpressionRule::new()?);
        set.push_document(BracketBalanceRule::new());
        Ok(set)
    }

    /// Add a line rule to the set.
    pub fn push_line(&mut self, rule: impl LineRule + 'static) {
        self.line_rules.push(Box::new(rule));
    }

    /// Add a document rule to the set.
    pub fn push_document(&mut self, rule: impl DocumentRule + 'static) {
        self.document_rules.push(Box::new(rule));
    }

    /// The registered line rules, in evaluation order.
    pub fn line_rules(&self) -> &[Box<dyn LineRule>] {
        &self.line_rules
    }

    /// The registered document rules, in evaluation order.
    pub fn document_rules(&self) -> &[Box<dyn DocumentRule>] {
        &self.document_rules
    }

    /// Total number of registered rules.
    pub fn len(&self) -> usize {
        self.line_rules.len() + self.document_rules.len()
    }

    /// Returns `true` if no rules are registered.
    pub fn is_empty(&self) -> bool {
        self.line_rules.is_empty() && self.document_rules.is_empty()
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    /// Run a line rule over every line of `text`, collecting all findings.
    pub(crate) fn check_lines(rule: &dyn LineRule, text: &str) -> Vec<Diagnostic> {
        let doc = SourceDocument::from_text(text);
        let mut out = Vec::new();
        for (index, line) in doc.lines().enumerate() {
            out.extend(rule.check(line, index, &doc));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_is_populated() {
        let set = RuleSet::standard().unwrap();
        assert!(!set.is_empty());
        assert_eq!(set.line_rules().len(), 13);
        assert_eq!(set.document_rules().len(), 1);
        assert_eq!(set.len(), 14);
    }

    #[test]
    fn test_rule_ids_are_unique() {
        let set = RuleSet::standard().unwrap();
        let mut ids: Vec<&str> = set
            .line_rules()
            .iter()
            .map(|r| r.id())
            .chain(set.document_rules().iter().map(|r| r.id()))
            .collect();
        ids.sort_unstable();
        let before = ids.len();
        ids.dedup();
        assert_eq!(ids.len(), before);
    }
}
