//! The pull-based token source contract consumed by the template parser.
//!
//! Tokenization itself (characters to tokens) belongs to the embedding
//! scanner; this module defines the vocabulary the parser understands and
//! an in-memory cursor over already-classified tokens.

use std::collections::VecDeque;
use std::fmt;

use crate::matcher::Operator;

/// Punctuation tokens of the template grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Punct {
    LeftParen,
    RightParen,
    Colon,
    Comma,
    Star,
}

impl Punct {
    pub fn symbol(&self) -> char {
        match self {
            Punct::LeftParen => '(',
            Punct::RightParen => ')',
            Punct::Colon => ':',
            Punct::Comma => ',',
            Punct::Star => '*',
        }
    }
}

impl fmt::Display for Punct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// One classified token delivered by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    Punct(Punct),
    Operator(Operator),
    Integer(i64),
    StringLiteral(String),
    Eof,
}

impl Token {
    /// Human-readable token kind, used in diagnostics.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Token::Identifier(_) => "identifier",
            Token::Punct(_) => "punctuation",
            Token::Operator(_) => "operator",
            Token::Integer(_) => "integer literal",
            Token::StringLiteral(_) => "string literal",
            Token::Eof => "end of input",
        }
    }
}

/// Pull-based cursor over a token stream.
///
/// The source holds the single token of lookahead; the parser never buffers
/// tokens itself. A fresh source is positioned before its first token, and
/// the parser's constructor performs the first [`advance`](Self::advance).
pub trait TokenSource {
    /// The token currently under the cursor.
    fn token(&self) -> &Token;

    /// Line number of the current token, for diagnostics.
    fn line(&self) -> usize;

    /// Discard the current token and expose the next. Past the end of the
    /// stream the cursor stays on [`Token::Eof`].
    fn advance(&mut self);
}

/// In-memory [`TokenSource`] over a prepared token sequence.
///
/// This is the entry point for embedders that already hold classified
/// tokens (and for tests); it implements the cursor contract only, not
/// tokenization. Until the first `advance` the cursor reports `Eof`.
#[derive(Debug, Clone)]
pub struct TokenBuffer {
    pending: VecDeque<(Token, usize)>,
    current: Token,
    line: usize,
}

impl TokenBuffer {
    /// A buffer whose tokens all report line 1.
    pub fn new<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = Token>,
    {
        Self::with_lines(tokens.into_iter().map(|token| (token, 1)))
    }

    /// A buffer of `(token, line)` pairs, for multi-line template text.
    pub fn with_lines<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = (Token, usize)>,
    {
        TokenBuffer {
            pending: tokens.into_iter().collect(),
            current: Token::Eof,
            line: 1,
        }
    }
}

impl TokenSource for TokenBuffer {
    fn token(&self) -> &Token {
        &self.current
    }

    fn line(&self) -> usize {
        self.line
    }

    fn advance(&mut self) {
        match self.pending.pop_front() {
            Some((token, line)) => {
                self.current = token;
                self.line = line;
            }
            // Keep the last line so end-of-input diagnostics point at the
            // end of the template text, not at line 1.
            None => self.current = Token::Eof,
        }
    }
}
