#![warn(missing_docs)]
//! Kestrel Diagnostics - Heuristic Syntax Checking for the Kestrel Language
//!
//! # Overview
//!
//! `kestrel-diagnostics` is a heuristic, line-oriented syntax-diagnostic engine
//! for the Kestrel scripting language. Given source text, it detects malformed
//! constructs — bad pipeline operators, unbalanced match blocks, invalid
//! LINQ-style queries, illegal overloaded operators, malformed functions and
//! structs, unterminated strings, unbalanced brackets, inconsistent
//! indentation, invalid numeric ranges — and emits positioned diagnostics with
//! a severity.
//!
//! This is not a parser: there is no grammar, no AST, and no scope resolution.
//! It is a best-effort lint layer that trades completeness and precision for
//! simplicity and speed, and several imprecisions are carried deliberately
//! (see the individual rule docs).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  DiagnosticEngine (scan entrypoint)         │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  ScanSession (one pass per document)        │  ← Orchestration
//! ├─────────────────────────────────────────────┤
//! │  RuleSet (line rules + document rules)      │  ← Syntax checks
//! ├─────────────────────────────────────────────┤
//! │  SourceDocument (line view, char columns)   │  ← Coordinates
//! └─────────────────────────────────────────────┘
//! ```
//!
//! Results flow to a [`DiagnosticSink`]: publish is a full replace for a
//! document identity, never a merge, and closing a document clears its entry.
//! The engine itself holds no per-document state and has no opinion on
//! trigger timing — debouncing belongs to the caller.
//!
//! # Quick Start
//!
//! ```rust
//! use kestrel_diagnostics::{DiagnosticEngine, ScanConfig, Severity};
//!
//! let engine = DiagnosticEngine::new().unwrap();
//! let diagnostics = engine.scan("let bad = data | filter;", &ScanConfig::default());
//!
//! assert_eq!(diagnostics.len(), 1);
//! assert_eq!(diagnostics[0].severity, Severity::Error);
//! assert!(diagnostics[0].message.contains("Invalid pipeline operator"));
//! ```
//!
//! # Module Description
//!
//! - [`diagnostic`] - positions, ranges, severities, the [`Diagnostic`] record
//! - [`document`] - the immutable line view a scan runs over
//! - [`rules`] - the rule traits and the standard rule registry
//! - [`session`] - one full pass over a document
//! - [`engine`] - the scan entrypoint and configuration flags
//! - [`sink`] - full-replace diagnostic consumers
//! - [`json`] - LSP-shaped JSON encoding of diagnostics

pub mod diagnostic;
pub mod document;
pub mod engine;
pub mod json;
pub mod rules;
pub mod session;
pub mod sink;

pub use diagnostic::{Diagnostic, Position, Range, Severity};
pub use document::SourceDocument;
pub use engine::{DiagnosticEngine, ScanConfig};
pub use rules::{DocumentRule, LineRule, RuleError, RuleSet};
pub use session::ScanSession;
pub use sink::{DiagnosticSink, DiagnosticsStore};
