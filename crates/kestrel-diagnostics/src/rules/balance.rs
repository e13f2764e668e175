//! Document-global bracket balance.

use kestrel_lang::BracketKind;

use crate::diagnostic::{Diagnostic, Range};
use crate::document::SourceDocument;
use crate::rules::DocumentRule;

const RULE_ID: &str = "bracket-balance";

/// Accumulates net `{}`, `[]`, and `()` counters over the whole document and
/// reports any imbalance once, anchored at the final line.
///
/// This is an aggregate count, not a structural match — it cannot say *which*
/// bracket is unmatched. Extra closers are reported for braces only,
/// matching the original behavior; brackets and parens report only the
/// unclosed case.
#[derive(Debug, Default)]
pub struct BracketBalanceRule;

impl BracketBalanceRule {
    /// Create the rule.
    pub fn new() -> Self {
        Self
    }
}

impl DocumentRule for BracketBalanceRule {
    fn id(&self) -> &'static str {
        RULE_ID
    }

    fn check(&self, document: &SourceDocument<'_>) -> Vec<Diagnostic> {
        if document.line_count() == 0 {
            return Vec::new();
        }

        let mut net = [0i64; 3];
        for line in document.lines() {
            for ch in line.chars() {
                for (slot, kind) in net.iter_mut().zip(BracketKind::ALL) {
                    if ch == kind.open() {
                        *slot += 1;
                    } else if ch == kind.close() {
                        *slot -= 1;
                    }
                }
            }
        }

        let last = document.line_count() - 1;
        let anchor = Range::whole_line(last, document.char_len(last));
        let mut out = Vec::new();

        for (slot, kind) in net.iter().zip(BracketKind::ALL) {
            if *slot > 0 {
                out.push(Diagnostic::error(
                    RULE_ID,
                    anchor,
                    format!("{} unclosed {} in document.", slot, kind.label_plural()),
                ));
            } else if *slot < 0 && kind == BracketKind::Brace {
                out.push(Diagnostic::error(
                    RULE_ID,
                    anchor,
                    format!("{} extra closing {} in document.", -slot, kind.label_plural()),
                ));
            }
        }

        out
    }
}
