//! The scan entrypoint.

use crate::diagnostic::Diagnostic;
use crate::rules::{RuleError, RuleSet};
use crate::session::ScanSession;

/// Configuration flags recognized by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    /// When `false`, [`DiagnosticEngine::scan`] returns an empty list without
    /// looking at the document.
    pub diagnostics_enabled: bool,
    /// Whether the host should re-scan while the user types. This flag
    /// belongs to the caller's trigger/debounce policy; the engine carries it
    /// but never reads it.
    pub check_on_type: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            diagnostics_enabled: true,
            check_on_type: true,
        }
    }
}

/// The diagnostic engine: a compiled rule set plus the scan entrypoint.
///
/// The engine holds no per-document state; [`scan`](DiagnosticEngine::scan)
/// takes `&self` and builds a transient [`ScanSession`] per call, so one
/// engine may serve concurrent scans of different documents.
pub struct DiagnosticEngine {
    rules: RuleSet,
}

impl DiagnosticEngine {
    /// Create an engine with the standard Kestrel rule set.
    ///
    /// Fails only if a rule pattern does not compile — deterministic, and
    /// surfaced here rather than mid-scan.
    pub fn new() -> Result<Self, RuleError> {
        Ok(Self {
            rules: RuleSet::standard()?,
        })
    }

    /// Create an engine with a custom rule set.
    pub fn with_rules(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The engine's rule set.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Scan `text` and return every finding, in rule order.
    ///
    /// Total over any input string: a malformed document never aborts the
    /// scan. The returned list wholly replaces any prior result for the same
    /// document identity (see [`crate::sink`]).
    pub fn scan(&self, text: &str, config: &ScanConfig) -> Vec<Diagnostic> {
        if !config.diagnostics_enabled {
            return Vec::new();
        }
        ScanSession::new(text).run(&self.rules)
    }
}
