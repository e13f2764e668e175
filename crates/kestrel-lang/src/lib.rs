#![warn(missing_docs)]
//! `kestrel-lang` - data-driven language definition helpers for the Kestrel
//! diagnostics engine.
//!
//! This crate intentionally stays lightweight and does **not** depend on any
//! parsing or regex machinery. It provides the small language facts the
//! diagnostic rules need: the identifier grammar, the overloadable-operator
//! table, string delimiters, and bracket kinds.

/// Operators that may legally appear in an `operator <token>(...)` overload
/// declaration.
pub const OVERLOADABLE_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "&", "|", "^", "~",
    "<<", ">>", "+=", "-=", "*=", "/=", "%=",
];

/// Characters that open a string or template literal: `'`, `"`, and backtick.
pub const STRING_DELIMITERS: &[char] = &['\'', '"', '`'];

/// Returns `true` if `token` is in the overloadable-operator table.
pub fn is_overloadable_operator(token: &str) -> bool {
    OVERLOADABLE_OPERATORS.contains(&token)
}

/// Returns `true` if `ch` may start an identifier (letter, underscore, or the
/// `$` sigil).
pub fn is_identifier_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_' || ch == '$'
}

/// Returns `true` if `ch` may continue an identifier.
pub fn is_identifier_continue(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Returns `true` if `name` is a valid Kestrel identifier.
pub fn is_valid_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_continue),
        _ => false,
    }
}

/// Returns `true` if `name` is `UpperCamelCase`: a leading ASCII uppercase
/// letter followed by alphanumerics, with no underscores.
pub fn is_upper_camel_case(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => chars.all(|c| c.is_ascii_alphanumeric()),
        _ => false,
    }
}

/// The three bracket pairs the balance rule tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BracketKind {
    /// `{` / `}`
    Brace,
    /// `[` / `]`
    Bracket,
    /// `(` / `)`
    Paren,
}

impl BracketKind {
    /// All bracket kinds, in reporting order.
    pub const ALL: [BracketKind; 3] = [BracketKind::Brace, BracketKind::Bracket, BracketKind::Paren];

    /// The opening character for this kind.
    pub fn open(self) -> char {
        match self {
            BracketKind::Brace => '{',
            BracketKind::Bracket => '[',
            BracketKind::Paren => '(',
        }
    }

    /// The closing character for this kind.
    pub fn close(self) -> char {
        match self {
            BracketKind::Brace => '}',
            BracketKind::Bracket => ']',
            BracketKind::Paren => ')',
        }
    }

    /// Pluralized label suffix used in diagnostic messages, e.g. `brace(s)`.
    pub fn label_plural(self) -> &'static str {
        match self {
            BracketKind::Brace => "brace(s)",
            BracketKind::Bracket => "bracket(s)",
            BracketKind::Paren => "parenthesis(es)",
        }
    }
}
