//! Where scan results go.
//!
//! A sink receives the complete diagnostic list for a document identity and
//! **replaces** any prior set for that identity — publish is never a merge.
//! Closing a document clears its entry. [`DiagnosticsStore`] is the in-memory
//! implementation a host can read its problems panel from.

use std::collections::HashMap;

use crate::diagnostic::Diagnostic;

/// Consumer of scan results, keyed by document identity.
pub trait DiagnosticSink {
    /// Replace the diagnostics displayed for `document_id` with `diagnostics`.
    fn publish(&mut self, document_id: &str, diagnostics: Vec<Diagnostic>);

    /// Remove every diagnostic for `document_id` (document closed).
    fn clear(&mut self, document_id: &str);
}

#[derive(Debug, Default)]
struct DocumentEntry {
    version: Option<i32>,
    diagnostics: Vec<Diagnostic>,
}

/// In-memory diagnostic store with full-replace semantics.
#[derive(Debug, Default)]
pub struct DiagnosticsStore {
    by_document: HashMap<String, DocumentEntry>,
}

impl DiagnosticsStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current diagnostics for `document_id`, if any are published.
    pub fn diagnostics(&self, document_id: &str) -> Option<&[Diagnostic]> {
        self.by_document
            .get(document_id)
            .map(|e| e.diagnostics.as_slice())
    }

    /// Number of documents with published diagnostics.
    pub fn document_count(&self) -> usize {
        self.by_document.len()
    }

    /// Total number of diagnostics across all documents.
    pub fn total_count(&self) -> usize {
        self.by_document.values().map(|e| e.diagnostics.len()).sum()
    }

    /// Replace `document_id`'s diagnostics only if `version` is not older
    /// than the last published version.
    ///
    /// Scans are idempotent, so racing publishes of the *same* version are
    /// benign; this guard exists for the stale case where an older scan's
    /// result arrives after a newer one.
    pub fn publish_versioned(
        &mut self,
        document_id: &str,
        version: i32,
        diagnostics: Vec<Diagnostic>,
    ) {
        let entry = self.by_document.entry(document_id.to_string()).or_default();
        if let Some(current) = entry.version {
            if version < current {
                return;
            }
        }
        entry.version = Some(version);
        entry.diagnostics = diagnostics;
    }
}

impl DiagnosticSink for DiagnosticsStore {
    fn publish(&mut self, document_id: &str, diagnostics: Vec<Diagnostic>) {
        let entry = self.by_document.entry(document_id.to_string()).or_default();
        // An unversioned replace invalidates any previous version marker, so
        // it cannot make later versioned publishes look stale.
        entry.version = None;
        entry.diagnostics = diagnostics;
    }

    fn clear(&mut self, document_id: &str) {
        self.by_document.remove(document_id);
    }
}
