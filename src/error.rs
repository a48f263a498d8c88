use thiserror::Error;

/// Errors produced while parsing a template token stream.
///
/// Every error aborts the parse immediately; no partial template is ever
/// returned. Line numbers come from the token source.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The current token does not satisfy a grammar expectation.
    #[error("parse error at line {line}: expected {expected}, found {found}")]
    Syntax {
        line: usize,
        expected: String,
        found: String,
    },

    /// A type identifier outside the closed vocabulary.
    #[error("unknown element type '{found}' at line {line} (expected 'integer' or 'string')")]
    UnknownType { line: usize, found: String },

    /// The token stream ended while a grammar expectation was still
    /// pending. Distinguished from [`ParseError::Syntax`] so callers can
    /// tell truncated input from malformed input.
    #[error("unexpected end of input at line {line}: expected {expected}")]
    EndOfInput { line: usize, expected: String },
}

pub type Result<T> = std::result::Result<T, ParseError>;
