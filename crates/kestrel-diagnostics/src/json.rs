//! LSP-shaped JSON encoding of diagnostics.
//!
//! Hosts that forward scan results to an editor speak
//! `textDocument/publishDiagnostics`; this module builds those payloads as
//! [`serde_json::Value`] so the mapping (0-based positions, numeric
//! severities) is defined in exactly one place.

use serde_json::{Value, json};

use crate::diagnostic::{Diagnostic, Severity};

/// Numeric LSP `DiagnosticSeverity` for `severity`.
pub fn severity_to_u64(severity: Severity) -> u64 {
    match severity {
        Severity::Error => 1,
        Severity::Warning => 2,
        Severity::Information => 3,
    }
}

/// Encode one diagnostic as an LSP `Diagnostic` object.
pub fn diagnostic_to_json(diagnostic: &Diagnostic) -> Value {
    json!({
        "range": {
            "start": {
                "line": diagnostic.range.start.line,
                "character": diagnostic.range.start.column,
            },
            "end": {
                "line": diagnostic.range.end.line,
                "character": diagnostic.range.end.column,
            },
        },
        "severity": severity_to_u64(diagnostic.severity),
        "code": diagnostic.rule,
        "source": "kestrel",
        "message": diagnostic.message,
    })
}

/// Build full `textDocument/publishDiagnostics` params for `uri`.
pub fn publish_params(uri: &str, version: Option<i32>, diagnostics: &[Diagnostic]) -> Value {
    let encoded: Vec<Value> = diagnostics.iter().map(diagnostic_to_json).collect();
    match version {
        Some(version) => json!({
            "uri": uri,
            "version": version,
            "diagnostics": encoded,
        }),
        None => json!({
            "uri": uri,
            "diagnostics": encoded,
        }),
    }
}
