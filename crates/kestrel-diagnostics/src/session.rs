//! One full pass over a document.

use crate::diagnostic::Diagnostic;
use crate::document::SourceDocument;
use crate::rules::RuleSet;

/// Orchestrates a single scan: line rules over each line, then document rules
/// once over the whole line sequence.
///
/// A session is transient — one per (document, version) — and holds no state
/// across scans; every scan recomputes from scratch. Sessions borrow the rule
/// set immutably, so scans of different documents may run in parallel.
#[derive(Debug)]
pub struct ScanSession<'a> {
    document: SourceDocument<'a>,
}

impl<'a> ScanSession<'a> {
    /// Create a session over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            document: SourceDocument::from_text(text),
        }
    }

    /// The line view this session scans.
    pub fn document(&self) -> &SourceDocument<'a> {
        &self.document
    }

    /// Run every rule in `rules`, collecting all findings in rule order.
    pub fn run(&self, rules: &RuleSet) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (index, line) in self.document.lines().enumerate() {
            for rule in rules.line_rules() {
                diagnostics.extend(rule.check(line, index, &self.document));
            }
        }

        for rule in rules.document_rules() {
            diagnostics.extend(rule.check(&self.document));
        }

        diagnostics
    }
}
